/*!
# `NEXT [<variable>]`
Also see `FOR`

## Purpose
Used to indicate the end of a `FOR` loop.

## Remarks
`FOR` loops are stack based. Without a variable, `NEXT` steps the
innermost loop. With a variable, every loop opened inside that one is
abandoned first. `NEXT` with no matching loop is a `NEXT WITHOUT FOR`
error.

## Example
```text
10 FOR J=1 TO 2
20 FOR I=1 TO 20
30 NEXT J
```

*/
