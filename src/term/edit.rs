extern crate mortal;
use crate::mach::{Editor, Runtime};
use mortal::{Cursor, Event, Key, PrepareConfig, Screen};
use std::io;

const HELP: &str = " ESC: done   F5/CTRL-R: run ";

/// Full-screen program editor. Returns once the editor is closed,
/// either committed or committed and run.
pub fn edit(runtime: &mut Runtime) -> io::Result<()> {
    let screen = Screen::new(PrepareConfig::default())?;
    let mut top = 0;
    loop {
        let key = match runtime.editor() {
            Some(editor) => {
                top = draw(&screen, editor, top)?;
                read_key(&screen)?
            }
            None => break,
        };
        match key {
            Key::Escape => runtime.commit(),
            Key::F(5) | Key::Ctrl('r') => runtime.run(),
            key => {
                if let Some(editor) = runtime.editor_mut() {
                    apply(editor, key);
                }
            }
        }
    }
    Ok(())
}

fn read_key(screen: &Screen) -> io::Result<Key> {
    loop {
        if let Some(Event::Key(key)) = screen.read_event(None)? {
            return Ok(key);
        }
    }
}

fn apply(editor: &mut Editor, key: Key) {
    match key {
        Key::Char(ch) => editor.insert(ch.encode_utf8(&mut [0; 4])),
        Key::Tab => editor.insert(" "),
        Key::Enter => editor.enter(),
        Key::Backspace => editor.backspace(),
        Key::Delete => editor.delete(),
        Key::Left => editor.left(),
        Key::Right => editor.right(),
        Key::Up => editor.up(),
        Key::Down => editor.down(),
        Key::Home => editor.home(),
        Key::End => editor.end(),
        _ => {}
    }
}

/// Redraw with the cursor line in view, returning the new top line.
fn draw(screen: &Screen, editor: &Editor, top: usize) -> io::Result<usize> {
    let rows = screen.size().lines.saturating_sub(1).max(1);
    let (line, column) = editor.cursor();
    let top = if line < top {
        line
    } else if line >= top + rows {
        line + 1 - rows
    } else {
        top
    };
    screen.clear_screen();
    for (row, text) in editor.lines().iter().skip(top).take(rows).enumerate() {
        screen.write_at(Cursor { line: row, column: 0 }, text);
    }
    screen.write_at(Cursor { line: rows, column: 0 }, HELP);
    screen.set_cursor(Cursor {
        line: line - top,
        column,
    });
    screen.refresh()?;
    Ok(top)
}
