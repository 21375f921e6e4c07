/*!
# `END`

## Purpose
Stops the program.

## Remarks
`END` takes no arguments. The program also stops when execution runs
past its last line. Open `FOR` loops are left as they are until the
next `RUN`.

## Example
```text
10 PRINT "ONE"
20 END
30 PRINT "TWO"
RUN
ONE
READY.
```

*/
