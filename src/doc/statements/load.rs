/*!
# `LOAD <name>`

## Purpose
Replace the program in memory with one saved by `SAVE`.

## Remarks
`.bas` is added to the name. Lines without a line number are dropped.
A missing file reports `FILE NOT FOUND` and the program in memory is kept.

## Example
```text
LOAD "SQUARE"
READY.
```

*/
