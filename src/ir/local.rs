use std::fmt::Display;

/// A function-scope SSA name. The id is opaque; only identity matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Local(pub i64);

impl Display for Local {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "%{}", self.0)
    }
}

impl From<i64> for Local {
    fn from(value: i64) -> Self {
        Local(value)
    }
}
