/*!
# `LET <variable>=<value>`

## Purpose
Assigns a number or the value of another variable to a variable.

## Remarks
Spaces around `=` are optional. The right side is a single literal or
variable name; there are no operators. Anything that isn't a number is
looked up as a variable, and a variable that was never assigned reads
as 0.

## Example
```text
LET A = 5
LET B=A
LET C = 0x1F
PRINT C
31
```

*/
