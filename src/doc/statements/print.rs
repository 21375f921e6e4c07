/*!
# `PRINT [<value>]`

## Purpose
Print a quoted string, a number, or the value of a variable.

## Remarks
`PRINT` alone prints an empty line. More than one value is a
`SYNTAX ERROR`. Integers print without a decimal point; floating point
values always show one.

## Example
```text
PRINT "HELLO"
HELLO
PRINT 2.0
2.0
LET X = 7
PRINT X
7
```

*/
