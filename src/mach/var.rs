use super::Val;
use crate::lang::Token;
use std::collections::HashMap;

/// ## Variable memory
///
/// Names are stored upper-cased. Anything that is not a number literal
/// resolves through here, and unknown names read as zero.

#[derive(Debug, Default)]
pub struct Var {
    vars: HashMap<String, Val>,
}

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn clear(&mut self) {
        self.vars.clear();
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn get(&self, var_name: &str) -> Option<Val> {
        self.vars.get(&var_name.to_ascii_uppercase()).copied()
    }

    pub fn fetch(&self, var_name: &str) -> Val {
        self.get(var_name).unwrap_or_default()
    }

    pub fn store(&mut self, var_name: &str, value: Val) {
        self.vars.insert(var_name.to_ascii_uppercase(), value);
    }

    /// Number literal, or the variable of that name, or zero.
    /// Malformed literals and undefined names are not told apart.
    pub fn resolve(&self, word: &str) -> Val {
        match Token::classify(word) {
            Token::Number(val) => val,
            _ => self.fetch(word.trim()),
        }
    }
}
