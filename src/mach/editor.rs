use super::Listing;
use crate::lang::Line;

/// ## Program editor buffer
///
/// Plain text lines with a cursor. Columns count characters, not bytes.
/// Nothing here is BASIC until [`Listing::commit`] reads it.

#[derive(Debug, Clone)]
pub struct Editor {
    lines: Vec<String>,
    line: usize,
    column: usize,
    step: u32,
}

impl Editor {
    /// Seed from the program, or a single `10 ` line when there is none.
    /// The cursor starts at the end of the last line.
    pub fn new(listing: &Listing, step: u32) -> Editor {
        let mut lines = listing.text();
        if lines.is_empty() {
            lines.push(format!("{} ", step));
        }
        Editor::from_lines(lines, step)
    }

    pub fn from_lines(mut lines: Vec<String>, step: u32) -> Editor {
        if lines.is_empty() {
            lines.push(String::new());
        }
        let line = lines.len() - 1;
        let column = lines[line].chars().count();
        Editor {
            lines,
            line,
            column,
            step,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// `(line, column)`
    pub fn cursor(&self) -> (usize, usize) {
        (self.line, self.column)
    }

    pub fn commit(&self) -> Listing {
        Listing::commit(self.lines.iter().map(String::as_str))
    }

    fn current(&self) -> &String {
        &self.lines[self.line]
    }

    fn current_len(&self) -> usize {
        self.current().chars().count()
    }

    fn byte_offset(&self, column: usize) -> usize {
        let line = self.current();
        line.char_indices()
            .nth(column)
            .map_or(line.len(), |(offset, _)| offset)
    }

    pub fn insert(&mut self, text: &str) {
        let offset = self.byte_offset(self.column);
        self.lines[self.line].insert_str(offset, text);
        self.column += text.chars().count();
    }

    /// Split the line at the cursor. A numbered line continues on a new line
    /// numbered `step` higher with the text right of the cursor after it.
    pub fn enter(&mut self) {
        let offset = self.byte_offset(self.column);
        let right = self.lines[self.line].split_off(offset);
        let new_line = match Line::number_prefix(self.current()) {
            Some(number) => format!(
                "{} {}",
                number.saturating_add(self.step),
                right.trim_start()
            ),
            None => right,
        };
        self.column = new_line.chars().count();
        self.line += 1;
        self.lines.insert(self.line, new_line);
    }

    pub fn backspace(&mut self) {
        if self.column > 0 {
            self.column -= 1;
            let offset = self.byte_offset(self.column);
            self.lines[self.line].remove(offset);
        } else if self.line > 0 {
            let line = self.lines.remove(self.line);
            self.line -= 1;
            self.column = self.current_len();
            self.lines[self.line].push_str(&line);
        }
    }

    pub fn delete(&mut self) {
        if self.column < self.current_len() {
            let offset = self.byte_offset(self.column);
            self.lines[self.line].remove(offset);
        } else if self.line + 1 < self.lines.len() {
            let next = self.lines.remove(self.line + 1);
            self.lines[self.line].push_str(&next);
        }
    }

    pub fn left(&mut self) {
        self.column = self.column.saturating_sub(1);
    }

    pub fn right(&mut self) {
        self.column = (self.column + 1).min(self.current_len());
    }

    pub fn up(&mut self) {
        if self.line > 0 {
            self.line -= 1;
            self.column = self.column.min(self.current_len());
        }
    }

    pub fn down(&mut self) {
        if self.line + 1 < self.lines.len() {
            self.line += 1;
            self.column = self.column.min(self.current_len());
        }
    }

    pub fn home(&mut self) {
        self.column = 0;
    }

    pub fn end(&mut self) {
        self.column = self.current_len();
    }
}
