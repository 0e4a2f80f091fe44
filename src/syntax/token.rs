#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Token<'src> {
    Invalid(char),
    /// Digits with an optional leading `-`, not yet range checked.
    Number(&'src str),

    LBracket,
    RBracket,

    Comma,
}
