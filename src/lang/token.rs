use crate::mach::Val;

/// A word of a statement, classified once at the point of use.
#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    /// `"TEXT"` with exactly one pair of enclosing quotes.
    Text(String),
    /// Anything that parses as a number literal.
    Number(Val),
    /// Everything else, upper-cased. Resolves through variable memory.
    Ident(String),
    /// Words with stray or unbalanced quotes.
    Unknown(String),
}

impl Token {
    pub fn classify(s: &str) -> Token {
        let s = s.trim();
        if s.contains('"') {
            if s.len() >= 2
                && s.starts_with('"')
                && s.ends_with('"')
                && s.matches('"').count() == 2
            {
                return Token::Text(s[1..s.len() - 1].to_string());
            }
            return Token::Unknown(s.to_string());
        }
        match Token::number(s) {
            Some(val) => Token::Number(val),
            None => Token::Ident(s.to_ascii_uppercase()),
        }
    }

    /// Literal rules: `0x` prefix is hexadecimal, a `%` suffix forces an
    /// integer, a `.` makes a float, otherwise a decimal integer.
    fn number(s: &str) -> Option<Val> {
        if s.get(..2).map_or(false, |p| p.eq_ignore_ascii_case("0x")) {
            let hex = &s[2..];
            if hex.starts_with('+') || hex.starts_with('-') {
                return None;
            }
            return i64::from_str_radix(hex, 16).ok().map(Val::Integer);
        }
        if let Some(int) = s.strip_suffix('%') {
            return int.parse::<i64>().ok().map(Val::Integer);
        }
        if s.contains('.') {
            return s.parse::<f64>().ok().map(Val::Float);
        }
        s.parse::<i64>().ok().map(Val::Integer)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Token::Text(s) => write!(f, "\"{}\"", s),
            Token::Number(v) => write!(f, "{}", v),
            Token::Ident(s) => write!(f, "{}", s),
            Token::Unknown(s) => write!(f, "{}", s),
        }
    }
}
