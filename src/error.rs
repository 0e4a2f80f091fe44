use std::fmt;

#[derive(Debug, PartialEq, Eq, Clone)]
pub(crate) enum ErrorKind {
    ParseError(String),
    InvalidInput(String),
    IoError(String),
}

pub(crate) type PResult<T> = Result<T, ErrorKind>;

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ParseError(why) => write!(f, "parse error: {why}"),
            Self::InvalidInput(why) => write!(f, "invalid input: {why}"),
            Self::IoError(why) => write!(f, "i/o error: {why}"),
        }
    }
}

impl std::error::Error for ErrorKind {}

impl From<std::io::Error> for ErrorKind {
    fn from(err: std::io::Error) -> Self {
        Self::IoError(err.to_string())
    }
}

impl ErrorKind {
    /// Prefixes the message with the 1-based source line it came from.
    pub fn at_line(self, line: usize) -> Self {
        match self {
            Self::ParseError(why) => Self::ParseError(format!("line {line}: {why}")),
            Self::InvalidInput(why) => Self::InvalidInput(format!("line {line}: {why}")),
            Self::IoError(why) => Self::IoError(format!("line {line}: {why}")),
        }
    }
}
