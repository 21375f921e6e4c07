use super::LineNumber;

/// One numbered program statement.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    number: LineNumber,
    body: String,
}

impl Line {
    pub fn new(number: LineNumber, body: &str) -> Line {
        Line {
            number,
            body: body.to_string(),
        }
    }

    /// Parse `<digits><spaces><body>` from trimmed text.
    /// Anything without a leading line number is rejected.
    pub fn parse(s: &str) -> Option<Line> {
        let s = s.trim();
        let digits = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
        if digits == 0 {
            return None;
        }
        let number = s[..digits].parse::<LineNumber>().ok()?;
        Some(Line::new(number, s[digits..].trim_start()))
    }

    /// Leading line number of editor text, if any.
    pub fn number_prefix(s: &str) -> Option<LineNumber> {
        let digits = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
        s[..digits].parse::<LineNumber>().ok()
    }

    pub fn number(&self) -> LineNumber {
        self.number
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {}", self.number, self.body)
    }
}

#[cfg(test)]
#[path = "tests/line_test.rs"]
mod tests;
