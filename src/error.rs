use thiserror::Error;

/// Everything that can go wrong while compiling a pattern. Match-time
/// failure is not an error; it is an ordinary unsuccessful result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("dangling escape at end of pattern")]
    DanglingEscape,

    #[error("unbalanced group delimiters")]
    UnbalancedGroup,

    #[error("unbalanced bracket expression")]
    UnbalancedBracket,

    #[error("empty bracket expression")]
    EmptyBracket,

    #[error("invalid repetition bound `{0}`")]
    InvalidBound(String),

    #[error("quantifier has nothing to repeat")]
    BareQuantifier,
}
