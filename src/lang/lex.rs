/// Split a statement into words.
///
/// Words are separated by whitespace. A `"` toggles quoting and stays in the
/// word, so `PRINT "HELLO WORLD"` yields two words. An unterminated quote
/// swallows the rest of the line.
pub fn lex(s: &str) -> Vec<String> {
    BasicLexer::new(s).collect()
}

fn is_basic_whitespace(c: char) -> bool {
    c.is_whitespace()
}

struct BasicLexer<'a> {
    chars: std::iter::Peekable<std::str::Chars<'a>>,
}

impl<'a> BasicLexer<'a> {
    fn new(s: &'a str) -> BasicLexer<'a> {
        BasicLexer {
            chars: s.chars().peekable(),
        }
    }

    fn whitespace(&mut self) {
        while let Some(pk) = self.chars.peek() {
            if !is_basic_whitespace(*pk) {
                break;
            }
            self.chars.next();
        }
    }
}

impl<'a> Iterator for BasicLexer<'a> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        self.whitespace();
        self.chars.peek()?;
        let mut s = String::new();
        let mut quoted = false;
        while let Some(&ch) = self.chars.peek() {
            if !quoted && is_basic_whitespace(ch) {
                break;
            }
            if ch == '"' {
                quoted = !quoted;
            }
            s.push(ch);
            self.chars.next();
        }
        Some(s)
    }
}
