/*!
# Commands and the Editor

These are only recognized at the prompt, never in a program.

| Command | |
|-|-|
| `RUN` | Run the program from its first line. Variables are kept. |
| `LIST` | Print the program, or `(empty)`. |
| `EDIT` | Open the full screen editor. |
| `NEW` | Erase program, variables and drawing. |
| `DIR`, `FILES` | List the `.bas` files with size and date. |
| `CLS` | Clear the screen and the drawing. |
| `BYE` | Leave. |

## Editor keys

| Key | |
|-|-|
| arrows, HOME, END | Move the cursor. |
| ENTER | Split the line. A numbered line continues with the next number. |
| BACKSPACE, DELETE | Delete, joining lines at either end. |
| ESC | Store the text as the program. |
| F5, CTRL-R | Store and run. |

Only lines that start with a line number become part of the program.
When a number appears twice the last one wins.

## Environment

| Variable | Default | |
|-|-|-|
| `TURTLE_CANVAS` | `640x720` | Canvas size. |
| `TURTLE_STEP` | `10` | Editor line number increment. |
| `TURTLE_DIR` | `.` | Where programs are saved. |
| `RUST_LOG` | | Diagnostic logging to stderr. |
*/
