use thiserror::Error;

pub type Result<T> = std::result::Result<T, LexicalError>;

/// Reasons tokenization stops.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexicalError {
    /// A character that starts no token and is not a space.
    #[error("invalid character {0:?}")]
    InvalidCharacter(char),

    /// A digit run whose value does not fit in a `u64`.
    #[error("number literal {digits} does not fit in 64 bits")]
    NumberTooLarge { digits: String },
}
