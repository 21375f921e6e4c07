/*!
# `REM <anything>`

## Purpose
Embeds non-executing remarks into the program source code.

## Remarks
Remarks do nothing.

## Example
```text
10 REM Draw a square
```

*/
