/*!
# Introductory Tutorial for Turtle BASIC

Start the `turtle` executable from a terminal. You are ready when you
see this. Type `BYE` or CTRL-D to leave.
<pre><code>&nbsp;  TURTLE BASIC
&nbsp;  READY.
&nbsp;> █
</code></pre>

 Stop a running program with CTRL-C.

Statements typed at the prompt run right away. This is called direct mode.

<pre><code>&nbsp;> print "Hello"
&nbsp;  Hello
</code></pre>

Put a line number in front of a statement and it is stored in the
program instead. Typing the number alone deletes that line.

<pre><code>&nbsp;> 10 fd 100
&nbsp;> 20 rt 90
&nbsp;> LIST
&nbsp;  10 fd 100
&nbsp;  20 rt 90
&nbsp;> 20
&nbsp;> LIST
&nbsp;  10 fd 100
</code></pre>

Longer programs are easier to write in the editor. `EDIT` opens the whole
program full screen. ENTER on a numbered line starts the next line with a
number ten higher. ESC puts the text back into the program and F5 also
runs it.

<pre><code>&nbsp;  10 FOR I=1 TO 4
&nbsp;  20 FD 100
&nbsp;  30 RT 90
&nbsp;  40 NEXT I
&nbsp;  50 █
</code></pre>

Mistakes are reported with a `?` and the program stops.

<pre><code>&nbsp;> 10 GOTO 100
&nbsp;> run
&nbsp;  <b>?UNDEF LINE</b>
&nbsp;  READY.
</code></pre>

`SAVE "SQUARE"` writes `SQUARE.bas`, `LOAD "SQUARE"` reads it back and
`DIR` shows what is there. `NEW` erases the program, the variables and
the drawing.
*/
