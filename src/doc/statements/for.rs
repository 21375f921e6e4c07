/*!
# `FOR <variable>=x TO y [STEP z]`
Where x, y, and z are numbers or variables.
## Purpose
Used with `NEXT` to repeat execution of statements
while iterating over a sequence of numbers.

## Remarks
If we wanted the numbers 1,3,5,7 we would write `FOR I=1 TO 7 STEP 2`.
On the first iteration, 1 will be assigned to variable I.
Statements execute until a `NEXT` statement.
On subsequent iterations, the variable I gets 2 added to it.
If the result passes 7 the loop breaks.
Otherwise the statements get executed again.
A negative `STEP` counts down.

A loop that starts past its end never runs its body. The variable is
still assigned and execution continues after the matching `NEXT`.

## Example 1
```text
10 FOR I=1 TO 7 STEP 2
20 PRINT I
30 NEXT I
RUN
1
3
5
7
```

## Example 2
```text
10 FOR I=5 TO 1
20 PRINT "NEVER"
30 NEXT I
40 PRINT I
RUN
5
```

*/
