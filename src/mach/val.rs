/// ## Numeric values
///
/// Integers stay integers until they meet a float.

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Val {
    Integer(i64),
    Float(f64),
}

impl Default for Val {
    fn default() -> Self {
        Val::Integer(0)
    }
}

impl Val {
    pub fn as_f64(self) -> f64 {
        match self {
            Val::Integer(n) => n as f64,
            Val::Float(n) => n,
        }
    }

    /// Truncates toward zero like BASIC's `INT` on positive numbers.
    pub fn as_i64(self) -> i64 {
        match self {
            Val::Integer(n) => n,
            Val::Float(n) => n as i64,
        }
    }

    pub fn is_negative(self) -> bool {
        match self {
            Val::Integer(n) => n < 0,
            Val::Float(n) => n < 0.0,
        }
    }

    pub fn add(self, rhs: Val) -> Val {
        use Val::*;
        match (self, rhs) {
            (Integer(l), Integer(r)) => match l.checked_add(r) {
                Some(n) => Integer(n),
                None => Float(l as f64 + r as f64),
            },
            (l, r) => Float(l.as_f64() + r.as_f64()),
        }
    }
}

impl PartialOrd for Val {
    fn partial_cmp(&self, other: &Val) -> Option<std::cmp::Ordering> {
        use Val::*;
        match (self, other) {
            (Integer(l), Integer(r)) => l.partial_cmp(r),
            (l, r) => l.as_f64().partial_cmp(&r.as_f64()),
        }
    }
}

impl std::fmt::Display for Val {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Val::Integer(n) => write!(f, "{}", n),
            // Debug keeps the `.0` on whole floats: `3.0`, `2.5`.
            Val::Float(n) => write!(f, "{:?}", n),
        }
    }
}
