/*!
# Numbers and Variables

Turtle BASIC has numbers and nothing else. A number is either an integer
or a floating point value. Variable names start with a letter followed by
letters, digits or underbars. Names are not case sensitive.

```text
LET SIZE = 50
LET angle_2 = 22.5
```

A value is written one of these ways.

 * `0x` followed by hex digits is an integer: `0x1F` is 31.
 * A trailing `%` asks for an integer: `12%` is 12.
 * Anything with a decimal point is floating point: `1.5`.
 * Other digits are an integer: `42`.

Anything else is taken as the name of a variable. A variable that was
never assigned is 0. There are no operators; the only arithmetic is the
counting done by `FOR` and `NEXT`. An integer `STEP` that overflows
turns the loop variable into floating point.

Every statement is one keyword followed by words separated by spaces.
A quoted string is one word even when it contains spaces.

```text
PRINT "HELLO WORLD"
```
*/
