use std::{fmt, str::FromStr};

use crate::{error::ErrorKind, syntax};

/// A nested list of integers.
///
/// Equality is structural: `Integer(7)` and `List([Integer(7)])` are not
/// equal even though [`crate::compare::compare`] orders them as `Equal`.
/// That is also why `Value` does not implement `Ord`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Value {
    Integer(i64),
    List(Vec<Value>),
}

#[cfg(test)]
impl Value {
    /// Builds a flat list of integers.
    pub fn ints<I>(items: I) -> Self
    where
        I: IntoIterator<Item = i64>,
    {
        Self::List(items.into_iter().map(Self::Integer).collect())
    }
}

impl FromStr for Value {
    type Err = ErrorKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        syntax::parse(s)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(v) => write!(f, "{v}"),
            Self::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
        }
    }
}
