use crate::cursor::Cursor;
use crate::error::{LexicalError, Result};
use log::{debug, trace};
use std::iter::FusedIterator;
use tally_common::{Position, Token};

/// Single-pass scanner for sum expressions.
///
/// Recognizes runs of ASCII digits and `+`, skips spaces, and stops at the
/// first character it does not understand. One character of lookahead, no
/// backtracking.
///
/// A `Tokenizer` is also an iterator of `Result<Token>`; it yields nothing
/// more once it has reported an error.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    cursor: Cursor,
    failed: bool,
}

impl Tokenizer {
    pub fn new<S: Into<String>>(input: S) -> Self {
        Self {
            cursor: Cursor::new(input),
            failed: false,
        }
    }

    /// Where scanning currently stands. After a failure this is the
    /// location of the offending character.
    pub fn position(&self) -> Position {
        self.cursor.position()
    }

    /// Scans the whole input.
    ///
    /// Either every token is returned or the first error is; a failed scan
    /// never hands back the tokens seen before the failure.
    pub fn lex(mut self) -> Result<Vec<Token>> {
        debug!("lexing {} bytes", self.cursor.remaining().len());
        let tokens = self.by_ref().collect::<Result<Vec<_>>>()?;
        debug!("lexed {} tokens", tokens.len());
        Ok(tokens)
    }

    fn next_token(&mut self) -> Option<Result<Token>> {
        loop {
            let position = self.cursor.position();
            let token = match self.cursor.peek()? {
                '0'..='9' => self.number(),
                '+' => {
                    self.cursor.advance();
                    Ok(Token::Plus)
                }
                ' ' => {
                    self.cursor.advance();
                    continue;
                }
                other => Err(LexicalError::InvalidCharacter(other)),
            };
            if let Ok(token) = &token {
                trace!("{token} at {position}");
            }
            return Some(token);
        }
    }

    /// Consumes a maximal run of digits as one base-10 value.
    fn number(&mut self) -> Result<Token> {
        let digits = self.cursor.consume_while(|ch| ch.is_ascii_digit());
        let mut value: u64 = 0;
        for byte in digits.bytes() {
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add(u64::from(byte - b'0')))
                .ok_or_else(|| LexicalError::NumberTooLarge {
                    digits: digits.to_string(),
                })?;
        }
        Ok(Token::Number(value))
    }
}

impl Iterator for Tokenizer {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let item = self.next_token()?;
        if let Err(err) = &item {
            debug!("lexing failed at {}: {err}", self.cursor.position());
            self.failed = true;
        }
        Some(item)
    }
}

impl FusedIterator for Tokenizer {}

/// Tokenizes `input` in one call.
pub fn lex(input: &str) -> Result<Vec<Token>> {
    Tokenizer::new(input).lex()
}
