//! Tokenizer behavior on whole inputs.

use tally_lexer::{lex, LexicalError, Position, Token, Tokenizer};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_sum_of_three() {
    init_logger();
    assert_eq!(
        lex("10 + 3 + 5"),
        Ok(vec![
            Token::Number(10),
            Token::Plus,
            Token::Number(3),
            Token::Plus,
            Token::Number(5),
        ])
    );
}

#[test]
fn test_single_number() {
    init_logger();
    assert_eq!(lex("10"), Ok(vec![Token::Number(10)]));
}

#[test]
fn test_trailing_garbage_fails_whole_scan() {
    init_logger();
    assert_eq!(
        lex("10 + 3 + 5abc"),
        Err(LexicalError::InvalidCharacter('a'))
    );
}

#[test]
fn test_no_spaces_needed() {
    init_logger();
    assert_eq!(
        lex("1+2"),
        Ok(vec![Token::Number(1), Token::Plus, Token::Number(2)])
    );
}

#[test]
fn test_structure_is_not_checked() {
    // Grammar errors are the parser's business.
    init_logger();
    assert_eq!(
        lex("+ + 10 11"),
        Ok(vec![
            Token::Plus,
            Token::Plus,
            Token::Number(10),
            Token::Number(11),
        ])
    );
}

#[test]
fn test_only_space_is_whitespace() {
    init_logger();
    assert_eq!(lex("1\t+ 2"), Err(LexicalError::InvalidCharacter('\t')));
    assert_eq!(lex("1\n"), Err(LexicalError::InvalidCharacter('\n')));
}

#[test]
fn test_other_operators_are_invalid() {
    init_logger();
    for (input, ch) in [("2 - 1", '-'), ("2 * 1", '*'), ("(2)", '('), ("٣", '٣')] {
        assert_eq!(lex(input), Err(LexicalError::InvalidCharacter(ch)), "{input}");
    }
}

#[test]
fn test_first_error_wins() {
    init_logger();
    assert_eq!(lex("1 ? 2 !"), Err(LexicalError::InvalidCharacter('?')));
}

#[test]
fn test_iterator_yields_tokens_lazily() {
    init_logger();
    let mut tokenizer = Tokenizer::new("7 + x");
    assert_eq!(tokenizer.next(), Some(Ok(Token::Number(7))));
    assert_eq!(tokenizer.next(), Some(Ok(Token::Plus)));
    assert_eq!(
        tokenizer.next(),
        Some(Err(LexicalError::InvalidCharacter('x')))
    );
    assert_eq!(tokenizer.position(), Position::at(1, 5, 4));
    assert_eq!(tokenizer.next(), None);
}

#[test]
fn test_error_display() {
    assert_eq!(
        LexicalError::InvalidCharacter('a').to_string(),
        "invalid character 'a'"
    );
    assert_eq!(
        LexicalError::NumberTooLarge {
            digits: "99999999999999999999".into()
        }
        .to_string(),
        "number literal 99999999999999999999 does not fit in 64 bits"
    );
}
