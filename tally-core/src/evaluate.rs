use crate::error::Result;
use log::debug;
use tally_lexer::Tokenizer;
use tally_parser::Parser;

/// Lexes the whole input, then parses the tokens.
///
/// A lexical error anywhere in the input is reported even when the tokens
/// before it are already ungrammatical.
pub fn evaluate(input: &str) -> Result<u64> {
    debug!("evaluating {input:?}");
    let tokens = Tokenizer::new(input).lex()?;
    let sum = Parser::new(tokens).parse()?;
    Ok(sum)
}
