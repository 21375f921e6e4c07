/*!
# Turtle Graphics

The turtle starts in the middle of the canvas heading 0, which is to
the right, with its pen down. Positive turns are clockwise on screen. Moving with the pen down draws a line in the pen color. `CLS` puts it
back in the middle heading 0 and keeps the pen; `NEW` also resets the pen. Arguments may be numbers or variables.
*/

pub mod FORWARD {
    /*!
    ## `FORWARD n`, `FD n` Move n steps in the direction the turtle faces.
    ```text
    FD 100
    ```
    */
}

pub mod BACK {
    /*!
    ## `BACK n`, `BACKWARD n`, `BK n` Move n steps backwards.
    */
}

pub mod RIGHT {
    /*!
    ## `RIGHT d`, `RT d` Turn clockwise by d degrees.
    ```text
    10 FOR I=1 TO 36
    20 FD 20
    30 RT 10
    40 NEXT I
    ```
    */
}

pub mod LEFT {
    /*!
    ## `LEFT d`, `LT d` Turn counterclockwise by d degrees.
    */
}

pub mod MOVE {
    /*!
    ## `MOVE x y`, `GO x y` Go straight to canvas position x,y.
    The heading is unchanged. A line is drawn when the pen is down.
    */
}

pub mod CIRCLE {
    /*!
    ## `CIRCLE r` Draw a circle of radius r around the turtle.
    The turtle does not move. Circles are drawn even with the pen up.
    */
}

pub mod PENUP {
    /*!
    ## `PENUP`, `PU` and `PENDOWN`, `PD` Stop and start drawing.
    */
}

pub mod PEN {
    /*!
    ## `PEN c` Set the pen color.
    `c` is a palette number from 0 to 15, one of the names `BLACK`,
    `WHITE`, `RED`, `GREEN`, `BLUE`, `YELLOW`, `CYAN` and `MAGENTA`, or a
    variable holding a palette number. Unknown colors leave the pen alone.
    ```text
    PEN RED
    PEN 14
    ```
    */
}

pub mod BG {
    /*!
    ## `BG c` Fill the canvas with a color, erasing the drawing.
    Colors are the same as `PEN`. Unknown colors fill with the default
    background.
    */
}

pub mod THICK {
    /*!
    ## `THICK n` Set the pen width. Widths below 1 become 1.
    */
}
