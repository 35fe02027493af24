use crate::error::EvalError;
use std::fmt;
use tally_common::Token;
use tally_lexer::Tokenizer;
use tally_parser::Parser;

/// Everything one evaluation produced, stage by stage.
///
/// Rendering a report with `Display` gives the classic trace:
///
/// ```text
/// Evaluating: 10 + 3 + 5
/// Lexer output: [Number(10), Plus, Number(3), Plus, Number(5)]
/// Parser output: 18
/// ```
///
/// When a stage fails, its message replaces the lines after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    input: String,
    tokens: Option<Vec<Token>>,
    outcome: Result<u64, EvalError>,
}

impl Report {
    pub fn evaluate(input: &str) -> Self {
        let (tokens, outcome) = match Tokenizer::new(input).lex() {
            Ok(tokens) => {
                let outcome = Parser::new(tokens.clone())
                    .parse()
                    .map_err(EvalError::from);
                (Some(tokens), outcome)
            }
            Err(err) => (None, Err(err.into())),
        };
        Self {
            input: input.to_string(),
            tokens,
            outcome,
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// The lexer output; `None` when lexing failed.
    pub fn tokens(&self) -> Option<&[Token]> {
        self.tokens.as_deref()
    }

    pub fn outcome(&self) -> &Result<u64, EvalError> {
        &self.outcome
    }

    pub fn into_outcome(self) -> Result<u64, EvalError> {
        self.outcome
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Evaluating: {}", self.input)?;
        if let Some(tokens) = &self.tokens {
            f.write_str("\nLexer output: [")?;
            for (i, token) in tokens.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{token}")?;
            }
            f.write_str("]")?;
        }
        match &self.outcome {
            Ok(sum) => write!(f, "\nParser output: {sum}"),
            Err(err) => write!(f, "\n{}", err.message()),
        }
    }
}
