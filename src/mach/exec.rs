use super::{disk, Canvas, Color, ForFrame, Listing, Machine, Val};
use crate::error;
use crate::lang::{lex, Error, LineNumber, Token};
use std::collections::HashMap;

type Result<T> = std::result::Result<T, Error>;

/// What the driver does after a statement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    /// Continue with the next position.
    Next,
    /// Move the program counter by this many positions.
    Jump(isize),
    /// `END`
    End,
}

/// One statement being executed.
pub struct Statement<'a> {
    /// Position in the listing. Direct statements run at position 0.
    pub position: usize,
    /// Typed at the console rather than stored in the program.
    pub direct: bool,
    /// Words after the keyword.
    pub args: &'a [String],
}

impl<'a> Statement<'a> {
    fn arg(&self, index: usize) -> Result<&'a str> {
        match self.args.get(index) {
            Some(arg) => Ok(arg.as_str()),
            None => Err(error!(SyntaxError)),
        }
    }

    /// Arguments glued back together for `LET` and `FOR`.
    fn joined(&self) -> String {
        self.args.join(" ")
    }

    fn jump_to(&self, position: usize) -> Step {
        Step::Jump(position as isize - self.position as isize)
    }
}

type Handler = fn(&mut Machine, &Statement) -> Result<Step>;

const STATEMENTS: &[(&str, Handler)] = &[
    ("REM", rem),
    ("LET", let_),
    ("PRINT", print),
    ("GOTO", goto),
    ("END", end),
    ("FOR", for_),
    ("NEXT", next),
    ("BG", bg),
    ("PEN", pen),
    ("THICK", thick),
    ("PENUP", pen_up),
    ("PU", pen_up),
    ("PENDOWN", pen_down),
    ("PD", pen_down),
    ("FORWARD", forward),
    ("FD", forward),
    ("BACK", back),
    ("BACKWARD", back),
    ("BK", back),
    ("RIGHT", right),
    ("RT", right),
    ("LEFT", left),
    ("LT", left),
    ("MOVE", go),
    ("GO", go),
    ("CIRCLE", circle),
    ("SAVE", save),
    ("LOAD", load),
];

thread_local!(
    static DISPATCH: HashMap<&'static str, Handler> = STATEMENTS.iter().copied().collect();
);

pub fn is_keyword(word: &str) -> bool {
    let word = word.to_ascii_uppercase();
    DISPATCH.with(|d| d.contains_key(word.as_str()))
}

/// Run one lexed statement against the machine.
pub fn execute(
    machine: &mut Machine,
    words: &[String],
    position: usize,
    direct: bool,
) -> Result<Step> {
    let (keyword, args) = match words.split_first() {
        Some((keyword, args)) => (keyword.to_ascii_uppercase(), args),
        None => return Ok(Step::Next),
    };
    let handler = match DISPATCH.with(|d| d.get(keyword.as_str()).copied()) {
        Some(handler) => handler,
        None => return Err(error!(SyntaxError)),
    };
    let statement = Statement {
        position,
        direct,
        args,
    };
    handler(machine, &statement)
}

fn is_name(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(ch) if ch.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
}

/// `NAME = REST`, spaces around `=` optional.
fn assignment(s: &str) -> Result<(String, &str)> {
    let equal = match s.find('=') {
        Some(equal) => equal,
        None => return Err(error!(SyntaxError)),
    };
    let name = s[..equal].trim_end();
    let rest = s[equal + 1..].trim_start();
    if !is_name(name) || rest.is_empty() {
        return Err(error!(SyntaxError));
    }
    Ok((name.to_ascii_uppercase(), rest))
}

fn rem(_: &mut Machine, _: &Statement) -> Result<Step> {
    Ok(Step::Next)
}

fn let_(m: &mut Machine, s: &Statement) -> Result<Step> {
    let joined = s.joined();
    let (name, expr) = assignment(&joined)?;
    let value = m.var.resolve(expr);
    m.var.store(&name, value);
    Ok(Step::Next)
}

fn print(m: &mut Machine, s: &Statement) -> Result<Step> {
    let text = match s.args {
        [] => String::new(),
        [arg] => match Token::classify(arg) {
            Token::Text(text) => text,
            Token::Unknown(_) => return Err(error!(SyntaxError)),
            _ => m.var.resolve(arg).to_string(),
        },
        _ => return Err(error!(SyntaxError)),
    };
    m.print(text);
    Ok(Step::Next)
}

fn goto(m: &mut Machine, s: &Statement) -> Result<Step> {
    let target = match s.arg(0)?.parse::<LineNumber>() {
        Ok(target) => target,
        Err(_) => return Err(error!(SyntaxError)),
    };
    match m.listing.position(target) {
        Some(position) => Ok(s.jump_to(position)),
        None => Err(error!(UndefinedLine)),
    }
}

fn end(_: &mut Machine, s: &Statement) -> Result<Step> {
    if !s.args.is_empty() {
        return Err(error!(SyntaxError));
    }
    Ok(Step::End)
}

/// `FOR V = START TO END [STEP S]`. A loop that starts past its end skips
/// its body and resumes after the `NEXT` that closes it.
fn for_(m: &mut Machine, s: &Statement) -> Result<Step> {
    let joined = s.joined();
    let (name, rest) = assignment(&joined)?;
    let words: Vec<&str> = rest.split_whitespace().collect();
    let to = match words
        .iter()
        .rposition(|w| w.eq_ignore_ascii_case("TO"))
        .filter(|&to| to > 0 && to + 1 < words.len())
    {
        Some(to) => to,
        None => return Err(error!(SyntaxError)),
    };
    // First STEP with an end value before it and a step after it.
    let step_at = (to + 2..words.len().saturating_sub(1))
        .find(|&at| words[at].eq_ignore_ascii_case("STEP"));
    let end_words = match step_at {
        Some(at) => &words[to + 1..at],
        None => &words[to + 1..],
    };
    let start = m.var.resolve(&words[..to].join(" "));
    let end = m.var.resolve(&end_words.join(" "));
    let step = match step_at {
        Some(at) => m.var.resolve(&words[at + 1..].join(" ")),
        None => Val::Integer(1),
    };
    let frame = ForFrame {
        var: name,
        end,
        step,
        return_position: s.position + 1,
    };
    m.var.store(&frame.var, start);
    if frame.continues(start) {
        m.flow.push(frame)?;
        return Ok(Step::Next);
    }
    if s.direct {
        return Ok(Step::Next);
    }
    let resume = closing_next(&m.listing, s.position + 1, &frame.var);
    Ok(s.jump_to(resume.unwrap_or_else(|| m.listing.len())))
}

/// Where execution continues when the loop over `var` starting at `from` is
/// skipped. Nested loops are stepped over, and a named `NEXT` closes every
/// loop opened inside the one it names. A `NEXT` for an enclosing loop is
/// run rather than skipped.
fn closing_next(listing: &Listing, from: usize, var: &str) -> Option<usize> {
    let mut open: Vec<String> = vec![];
    for position in from..listing.len() {
        let words = match listing.get(position) {
            Some(line) => lex(line.body()),
            None => break,
        };
        let keyword = match words.first() {
            Some(word) => word.to_ascii_uppercase(),
            None => continue,
        };
        if keyword == "FOR" {
            let joined = words[1..].join(" ");
            open.push(assignment(&joined).map(|(name, _)| name).unwrap_or_default());
        } else if keyword == "NEXT" {
            match words.get(1).map(|name| name.to_ascii_uppercase()) {
                None => {
                    if open.pop().is_none() {
                        return Some(position + 1);
                    }
                }
                Some(name) if name == var => return Some(position + 1),
                Some(name) => match open.iter().rposition(|n| *n == name) {
                    Some(index) => open.truncate(index),
                    None => return Some(position),
                },
            }
        }
    }
    None
}

fn next(m: &mut Machine, s: &Statement) -> Result<Step> {
    let name = s.args.first().map(String::as_str);
    match m.flow.next(name, &mut m.var)? {
        Some(position) => Ok(s.jump_to(position)),
        None => Ok(Step::Next),
    }
}

/// Palette name or number, or a variable holding a palette number.
fn color(m: &Machine, word: &str) -> Option<Color> {
    if let Some(color) = Color::named(word) {
        return Some(color);
    }
    let val = match Token::classify(word) {
        Token::Number(val) => val,
        Token::Ident(name) => m.var.get(&name)?,
        _ => return None,
    };
    Color::named(&val.as_i64().to_string())
}

fn bg(m: &mut Machine, s: &Statement) -> Result<Step> {
    let color = color(m, s.arg(0)?).unwrap_or(Color::BACKGROUND);
    m.canvas.fill(color);
    Ok(Step::Next)
}

fn pen(m: &mut Machine, s: &Statement) -> Result<Step> {
    if let Some(color) = color(m, s.arg(0)?) {
        m.turtle.color = color;
    }
    Ok(Step::Next)
}

fn thick(m: &mut Machine, s: &Statement) -> Result<Step> {
    let thickness = m.var.resolve(s.arg(0)?).as_i64();
    m.turtle.thickness = thickness.max(1).min(u32::max_value() as i64) as u32;
    Ok(Step::Next)
}

fn pen_up(m: &mut Machine, _: &Statement) -> Result<Step> {
    m.turtle.pen_down = false;
    Ok(Step::Next)
}

fn pen_down(m: &mut Machine, _: &Statement) -> Result<Step> {
    m.turtle.pen_down = true;
    Ok(Step::Next)
}

fn forward(m: &mut Machine, s: &Statement) -> Result<Step> {
    let distance = m.var.resolve(s.arg(0)?).as_f64();
    m.turtle.forward(distance, &mut m.canvas);
    Ok(Step::Next)
}

fn back(m: &mut Machine, s: &Statement) -> Result<Step> {
    let distance = m.var.resolve(s.arg(0)?).as_f64();
    m.turtle.forward(-distance, &mut m.canvas);
    Ok(Step::Next)
}

fn right(m: &mut Machine, s: &Statement) -> Result<Step> {
    let degrees = m.var.resolve(s.arg(0)?).as_f64();
    m.turtle.turn(degrees);
    Ok(Step::Next)
}

fn left(m: &mut Machine, s: &Statement) -> Result<Step> {
    let degrees = m.var.resolve(s.arg(0)?).as_f64();
    m.turtle.turn(-degrees);
    Ok(Step::Next)
}

fn go(m: &mut Machine, s: &Statement) -> Result<Step> {
    let x = m.var.resolve(s.arg(0)?).as_f64();
    let y = m.var.resolve(s.arg(1)?).as_f64();
    m.turtle.move_to((x, y), &mut m.canvas);
    Ok(Step::Next)
}

fn circle(m: &mut Machine, s: &Statement) -> Result<Step> {
    let radius = m.var.resolve(s.arg(0)?).as_i64();
    m.turtle.circle(radius, &mut m.canvas);
    Ok(Step::Next)
}

fn save(m: &mut Machine, s: &Statement) -> Result<Step> {
    let name = match s.args.first() {
        Some(name) => name,
        None => return Err(error!(MissingFilename; "USAGE: SAVE \"NAME\"")),
    };
    let path = disk::filename(&m.config.dir, name)?;
    disk::save(&m.listing, &path)?;
    m.print(format!("SAVED {}.bas", name.trim_matches('"')));
    Ok(Step::Next)
}

fn load(m: &mut Machine, s: &Statement) -> Result<Step> {
    let name = match s.args.first() {
        Some(name) => name,
        None => return Err(error!(MissingFilename; "USAGE: LOAD \"NAME\"")),
    };
    let path = disk::filename(&m.config.dir, name)?;
    m.listing = disk::load(&path)?;
    m.print("READY.");
    Ok(Step::Next)
}
