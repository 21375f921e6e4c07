use super::{Stack, Val, Var};
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// Activation record of an open `FOR` loop.
#[derive(Debug, Clone, PartialEq)]
pub struct ForFrame {
    pub var: String,
    pub end: Val,
    pub step: Val,
    /// Position of the statement after the `FOR`.
    pub return_position: usize,
}

impl ForFrame {
    /// True while `value` has not passed `end` in the direction of `step`.
    pub fn continues(&self, value: Val) -> bool {
        if self.step.is_negative() {
            value >= self.end
        } else {
            value <= self.end
        }
    }
}

/// ## Control flow stack
///
/// Open `FOR` loops, innermost last.

#[derive(Debug)]
pub struct Flow {
    frames: Stack<ForFrame>,
}

impl Default for Flow {
    fn default() -> Self {
        Flow {
            frames: Stack::new("TOO MANY FOR LOOPS"),
        }
    }
}

impl Flow {
    pub fn clear(&mut self) {
        self.frames.clear()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn top(&self) -> Option<&ForFrame> {
        self.frames.last()
    }

    pub fn push(&mut self, frame: ForFrame) -> Result<()> {
        self.frames.push(frame)
    }

    /// `NEXT [var]`. Returns the position to continue the loop at, or
    /// `None` when the loop is done and execution falls through.
    ///
    /// A named `NEXT` abandons every loop opened inside the named one.
    pub fn next(&mut self, var_name: Option<&str>, var: &mut Var) -> Result<Option<usize>> {
        if let Some(name) = var_name {
            let name = name.to_ascii_uppercase();
            match self.frames.rposition(|frame| frame.var == name) {
                Some(index) => self.frames.truncate(index + 1),
                None => return Err(error!(NextWithoutFor)),
            }
        }
        let frame = match self.frames.last() {
            Some(frame) => frame,
            None => return Err(error!(NextWithoutFor)),
        };
        let value = var.fetch(&frame.var).add(frame.step);
        var.store(&frame.var, value);
        if frame.continues(value) {
            Ok(Some(frame.return_position))
        } else {
            self.frames.pop();
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(var: &str, end: i64, step: i64, return_position: usize) -> ForFrame {
        ForFrame {
            var: var.to_string(),
            end: Val::Integer(end),
            step: Val::Integer(step),
            return_position,
        }
    }

    #[test]
    fn test_counts_up_then_pops() {
        let mut flow = Flow::default();
        let mut var = Var::new();
        var.store("I", Val::Integer(1));
        flow.push(frame("I", 2, 1, 5)).unwrap();
        assert_eq!(flow.next(Some("i"), &mut var), Ok(Some(5)));
        assert_eq!(var.fetch("I"), Val::Integer(2));
        assert_eq!(flow.next(None, &mut var), Ok(None));
        assert_eq!(var.fetch("I"), Val::Integer(3));
        assert!(flow.is_empty());
    }

    #[test]
    fn test_negative_step() {
        let mut flow = Flow::default();
        let mut var = Var::new();
        var.store("I", Val::Integer(3));
        flow.push(frame("I", 2, -1, 1)).unwrap();
        assert_eq!(flow.next(None, &mut var), Ok(Some(1)));
        assert_eq!(flow.next(None, &mut var), Ok(None));
    }

    #[test]
    fn test_named_next_discards_inner() {
        let mut flow = Flow::default();
        let mut var = Var::new();
        flow.push(frame("I", 5, 1, 1)).unwrap();
        flow.push(frame("J", 5, 1, 2)).unwrap();
        flow.push(frame("K", 5, 1, 3)).unwrap();
        assert_eq!(flow.next(Some("I"), &mut var), Ok(Some(1)));
        assert_eq!(flow.len(), 1);
        assert_eq!(flow.top().map(|f| f.var.as_str()), Some("I"));
    }

    #[test]
    fn test_next_without_for() {
        let mut flow = Flow::default();
        let mut var = Var::new();
        assert_eq!(flow.next(None, &mut var), Err(error!(NextWithoutFor)));
        flow.push(frame("I", 5, 1, 1)).unwrap();
        assert_eq!(flow.next(Some("Q"), &mut var), Err(error!(NextWithoutFor)));
        assert_eq!(flow.len(), 1);
    }
}
