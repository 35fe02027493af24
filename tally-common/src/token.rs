use std::fmt;

/// A lexical unit of a sum expression.
///
/// There are exactly two kinds: a non-negative integer literal and the `+`
/// operator. Anything else in the input is a lexical error, never a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    Number(u64),
    Plus,
}

impl Token {
    pub fn is_number(&self) -> bool {
        matches!(self, Token::Number(_))
    }

    pub fn is_plus(&self) -> bool {
        matches!(self, Token::Plus)
    }

    /// Returns the literal value for `Number`, `None` for `Plus`.
    pub fn as_number(&self) -> Option<u64> {
        match self {
            Token::Number(value) => Some(*value),
            Token::Plus => None,
        }
    }
}

/// Renders `Number(10)` / `Plus`; this is the form error messages and
/// evaluation reports use.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(value) => write!(f, "Number({value})"),
            Token::Plus => f.write_str("Plus"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predicates() {
        assert!(Token::Number(3).is_number());
        assert!(!Token::Number(3).is_plus());
        assert!(Token::Plus.is_plus());
        assert!(!Token::Plus.is_number());
    }

    #[test]
    fn test_as_number() {
        assert_eq!(Token::Number(42).as_number(), Some(42));
        assert_eq!(Token::Plus.as_number(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Token::Number(10).to_string(), "Number(10)");
        assert_eq!(Token::Plus.to_string(), "Plus");
    }
}
