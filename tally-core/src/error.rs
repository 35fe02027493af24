//! The single error surface of an evaluation.

use tally_lexer::LexicalError;
use tally_parser::ParseError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, EvalError>;

/// Why an input could not be evaluated. Exactly one stage failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("lexing failed: {0}")]
    Lex(#[from] LexicalError),

    #[error("parsing failed: {0}")]
    Parse(#[from] ParseError),
}

impl EvalError {
    /// A message suitable for showing to whoever typed the input.
    pub fn message(&self) -> String {
        match self {
            EvalError::Lex(LexicalError::InvalidCharacter(ch)) => {
                format!("Input contained an invalid character: {ch}")
            }
            EvalError::Lex(LexicalError::NumberTooLarge { digits }) => {
                format!("Number literal too large: {digits}")
            }
            EvalError::Parse(ParseError::UnexpectedEndOfInput) => {
                "Unexpected end of input during parsing".to_string()
            }
            EvalError::Parse(ParseError::InvalidToken(token)) => {
                format!("Invalid token during parsing: {token}")
            }
            EvalError::Parse(ParseError::Overflow { lhs, rhs }) => {
                format!("Sum overflowed: {lhs} + {rhs}")
            }
        }
    }

    pub fn is_lexical(&self) -> bool {
        matches!(self, EvalError::Lex(_))
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, EvalError::Parse(_))
    }
}
