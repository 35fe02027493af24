use tally_parser::{parse, ParseError, Parser, Token};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_sum_of_three() {
    init_logger();
    let tokens = vec![
        Token::Number(10),
        Token::Plus,
        Token::Number(3),
        Token::Plus,
        Token::Number(5),
    ];
    assert_eq!(parse(tokens), Ok(18));
}

#[test]
fn test_single_number() {
    init_logger();
    assert_eq!(parse(vec![Token::Number(10)]), Ok(10));
}

#[test]
fn test_zero_terms() {
    init_logger();
    assert_eq!(
        parse(vec![Token::Number(0), Token::Plus, Token::Number(0)]),
        Ok(0)
    );
}

#[test]
fn test_double_plus() {
    init_logger();
    let tokens = vec![Token::Number(10), Token::Plus, Token::Plus, Token::Number(5)];
    assert_eq!(parse(tokens), Err(ParseError::InvalidToken(Token::Plus)));
}

#[test]
fn test_empty_input() {
    init_logger();
    assert_eq!(parse(vec![]), Err(ParseError::UnexpectedEndOfInput));
}

#[test]
fn test_adjacent_numbers_report_second() {
    init_logger();
    assert_eq!(
        parse(vec![Token::Number(10), Token::Number(11)]),
        Err(ParseError::InvalidToken(Token::Number(11)))
    );
}

#[test]
fn test_trailing_plus() {
    init_logger();
    assert_eq!(
        parse(vec![Token::Number(10), Token::Plus]),
        Err(ParseError::UnexpectedEndOfInput)
    );
}

#[test]
fn test_leading_plus() {
    init_logger();
    assert_eq!(
        parse(vec![Token::Plus, Token::Number(1)]),
        Err(ParseError::InvalidToken(Token::Plus))
    );
}

#[test]
fn test_first_error_wins() {
    // The adjacent numbers come before the trailing plus.
    init_logger();
    let tokens = vec![Token::Number(1), Token::Number(2), Token::Plus];
    assert_eq!(parse(tokens), Err(ParseError::InvalidToken(Token::Number(2))));
}

#[test]
fn test_overflow() {
    init_logger();
    let tokens = vec![Token::Number(u64::MAX - 1), Token::Plus, Token::Number(2)];
    assert_eq!(
        parse(tokens),
        Err(ParseError::Overflow {
            lhs: u64::MAX - 1,
            rhs: 2
        })
    );
}

#[test]
fn test_sum_up_to_max() {
    init_logger();
    let tokens = vec![Token::Number(u64::MAX - 1), Token::Plus, Token::Number(1)];
    assert_eq!(parse(tokens), Ok(u64::MAX));
}

#[test]
fn test_parser_from_tokens() {
    init_logger();
    let tokens = (1..=100).flat_map(|n| [Token::Plus, Token::Number(n)]).skip(1);
    let parser = Parser::from_tokens(tokens);
    assert_eq!(parser.stream().len(), 199);
    assert_eq!(parser.parse(), Ok(5050));
}

#[test]
fn test_error_display() {
    assert_eq!(
        ParseError::UnexpectedEndOfInput.to_string(),
        "unexpected end of input"
    );
    assert_eq!(
        ParseError::InvalidToken(Token::Number(11)).to_string(),
        "invalid token Number(11)"
    );
    assert_eq!(
        ParseError::Overflow { lhs: 1, rhs: 2 }.to_string(),
        "sum overflowed: 1 + 2"
    );
}
