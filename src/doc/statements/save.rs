/*!
# `SAVE <name>`

## Purpose
Save the current program to `<name>.bas`.

## Remarks
Files go in the program directory, the current directory unless
`TURTLE_DIR` says otherwise. Each line is written as
`<line number> <statement>`.

## Example
```text
SAVE "SQUARE"
SAVED SQUARE.bas
```
*/
