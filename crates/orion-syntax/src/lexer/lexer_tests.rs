use super::{LexError, Lexer, Span, Token, TokenKind, lex};

fn token(kind: TokenKind, start: usize, end: usize, source: &str) -> Token {
    Token::new(kind, Span::new(start, end), source)
}

fn single(kind: TokenKind, source: &str) -> Token {
    token(kind, 0, source.chars().count(), source)
}

#[test]
fn single_tokens() {
    let cases = [
        // Operators
        (TokenKind::Plus, "+"),
        (TokenKind::Minus, "-"),
        (TokenKind::Asterisk, "*"),
        (TokenKind::Slash, "/"),
        (TokenKind::Percent, "%"),
        // Punctuation
        (TokenKind::Dot, "."),
        // Identifiers
        (TokenKind::Identifier, "myIdent"),
        (TokenKind::Identifier, "myIdent123"),
        (TokenKind::Identifier, "_leading"),
        (TokenKind::Identifier, "üçï"),
        // Boolean literals
        (TokenKind::BooleanLiteral, "true"),
        (TokenKind::BooleanLiteral, "false"),
        // Integer literals
        (TokenKind::IntLiteral, "1337"),
        (TokenKind::IntLiteral, "1337E3"),
        (TokenKind::IntLiteral, "1337e+3"),
        // Float literals
        (TokenKind::FloatLiteral, "3.14"),
        (TokenKind::FloatLiteral, ".314"),
        (TokenKind::FloatLiteral, "3.14e2"),
        (TokenKind::FloatLiteral, "3.14f"),
        (TokenKind::FloatLiteral, "3.14F"),
        (TokenKind::FloatLiteral, "1337F"),
        // Suffixed numerics
        (TokenKind::DoubleLit, "3.14d"),
        (TokenKind::DoubleLit, "1337D"),
        (TokenKind::BigDecimalLiteral, "1337BD"),
        (TokenKind::BigDecimalLiteral, "3.14bd"),
        (TokenKind::BigDecimalLiteral, "1337Bd"),
        (TokenKind::BigDecimalLiteral, ".5bD"),
        (TokenKind::BigIntLiteral, "1337L"),
        (TokenKind::BigIntLiteral, "1337l"),
        (TokenKind::SmallIntLiteral, "1337s"),
        (TokenKind::TinyIntLiteral, "1337Y"),
        // Trivia
        (TokenKind::Whitespace, " \t "),
        (TokenKind::Newline, "\n\n"),
        // Strings
        (TokenKind::StringLiteral, "\"hello\""),
    ];

    for (kind, source) in cases {
        let mut lexer = Lexer::new(source);
        assert_eq!(
            lexer.try_next_token(),
            Ok(Some(single(kind, source))),
            "lexing {source:?}"
        );
        assert_eq!(
            lexer.try_next_token(),
            Ok(None),
            "{source:?} should be a single token"
        );
    }
}

#[test]
fn multiple_int_literals_with_whitespace() {
    let tokens = lex("1337 3144").unwrap();
    assert_eq!(
        tokens,
        [
            token(TokenKind::IntLiteral, 0, 4, "1337"),
            token(TokenKind::Whitespace, 4, 5, " "),
            token(TokenKind::IntLiteral, 5, 9, "3144"),
        ]
    );
}

#[test]
fn incomplete_big_decimal_suffix_falls_back_to_identifier() {
    let tokens = lex("1337B").unwrap();
    assert_eq!(
        tokens,
        [
            token(TokenKind::IntLiteral, 0, 4, "1337"),
            token(TokenKind::Identifier, 4, 5, "B"),
        ]
    );
}

#[test]
fn boolean_literal_is_prefix_matched() {
    let tokens = lex("trueX").unwrap();
    assert_eq!(
        tokens,
        [
            token(TokenKind::BooleanLiteral, 0, 4, "true"),
            token(TokenKind::Identifier, 4, 5, "X"),
        ]
    );

    // A word merely starting with `tru` is an ordinary identifier.
    let tokens = lex("truthy").unwrap();
    assert_eq!(tokens, [token(TokenKind::Identifier, 0, 6, "truthy")]);
}

#[test]
fn string_literal_with_escapes() {
    let source = r#""Hello \n World""#;
    let tokens = lex(source).unwrap();
    assert_eq!(tokens, [single(TokenKind::StringLiteral, source)]);

    let source = r#""say \"hi\" \\ there""#;
    let tokens = lex(source).unwrap();
    assert_eq!(tokens, [single(TokenKind::StringLiteral, source)]);
}

#[test]
fn unicode_spans_are_codepoint_indexed() {
    let tokens = lex("üçï + żółw").unwrap();
    assert_eq!(
        tokens,
        [
            token(TokenKind::Identifier, 0, 3, "üçï"),
            token(TokenKind::Whitespace, 3, 4, " "),
            token(TokenKind::Plus, 4, 5, "+"),
            token(TokenKind::Whitespace, 5, 6, " "),
            token(TokenKind::Identifier, 6, 10, "żółw"),
        ]
    );
}

#[test]
fn lossless_partition() {
    let source = "ident 1337 3.14bd .5\n\"str\"+-*/% true\tfalse żółw";
    let tokens = lex(source).unwrap();

    let rebuilt: String = tokens.iter().map(Token::source).collect();
    assert_eq!(rebuilt, source);

    let mut position = 0;
    for token in &tokens {
        assert_eq!(token.span().start(), position);
        assert_eq!(token.source().chars().count(), token.span().len());
        position = token.span().end();
    }
    assert_eq!(position, source.chars().count());
}

#[test]
fn lexer_is_an_iterator() {
    let kinds: Vec<_> = Lexer::new("1 + x")
        .map(|result| result.unwrap().kind())
        .collect();
    assert_eq!(
        kinds,
        [
            TokenKind::IntLiteral,
            TokenKind::Whitespace,
            TokenKind::Plus,
            TokenKind::Whitespace,
            TokenKind::Identifier,
        ]
    );
}

#[test]
fn trivia_and_literal_classification() {
    assert!(TokenKind::Whitespace.is_trivia());
    assert!(TokenKind::Newline.is_trivia());
    assert!(!TokenKind::IntLiteral.is_trivia());
    assert!(TokenKind::IntLiteral.is_literal());
    assert!(TokenKind::BooleanLiteral.is_literal());
    assert!(!TokenKind::Identifier.is_literal());
}

#[test]
fn invalid_escape_is_reported() {
    let mut lexer = Lexer::new(r#""bad \q escape""#);
    assert_eq!(
        lexer.try_next_token(),
        Err(LexError::InvalidEscape { escape: 'q', offset: 6 })
    );
}

#[test]
fn unclosed_string_is_reported() {
    let mut lexer = Lexer::new("\"never ends");
    assert_eq!(
        lexer.try_next_token(),
        Err(LexError::UnclosedString { start: 0 })
    );

    // A trailing backslash leaves the literal open as well.
    let mut lexer = Lexer::new("\"oops\\");
    assert_eq!(
        lexer.try_next_token(),
        Err(LexError::UnclosedString { start: 0 })
    );
}

#[test]
fn numeric_without_fraction_digits_is_reported() {
    let mut lexer = Lexer::new("3.");
    assert_eq!(
        lexer.try_next_token(),
        Err(LexError::InvalidNumeric { offset: 2 })
    );
}

#[test]
fn exponent_without_digits_is_reported() {
    let mut lexer = Lexer::new("3e+");
    assert_eq!(
        lexer.try_next_token(),
        Err(LexError::InvalidNumeric { offset: 3 })
    );
}
