use strictjson_core::{is_valid_number, Token, Tokenizer};

/// Helper: collect every token until `Eof`, failing on lexical errors.
fn lex(input: &str) -> Vec<Token> {
    let mut tokenizer = Tokenizer::new(input);
    let mut tokens = Vec::new();
    loop {
        match tokenizer
            .next_token()
            .unwrap_or_else(|e| panic!("unexpected lexical error in {input:?}: {e}"))
        {
            Token::Eof => return tokens,
            token => tokens.push(token),
        }
    }
}

/// Helper: assert the prefix tokens lex cleanly and the very next call
/// fails with a lexical error.
fn assert_fails_after(input: &str, prefix: &[Token]) {
    let mut tokenizer = Tokenizer::new(input);
    for expected in prefix {
        assert_eq!(&tokenizer.next_token().unwrap(), expected, "in {input:?}");
    }
    assert!(
        tokenizer.next_token().is_err(),
        "expected {input:?} to fail after {prefix:?}"
    );
}

// ============================================================================
// Delimiters and literals
// ============================================================================

#[test]
fn empty_input_yields_no_tokens() {
    assert_eq!(lex(""), vec![]);
    assert_eq!(lex("  \t\r\n "), vec![]);
}

#[test]
fn single_delimiters() {
    assert_eq!(lex("{"), vec![Token::OpenObject]);
    assert_eq!(lex("}"), vec![Token::CloseObject]);
    assert_eq!(lex("["), vec![Token::OpenArray]);
    assert_eq!(lex("]"), vec![Token::CloseArray]);
    assert_eq!(lex(":"), vec![Token::Colon]);
    assert_eq!(lex(","), vec![Token::Comma]);
}

#[test]
fn bare_word_literals() {
    assert_eq!(lex("null"), vec![Token::Null]);
    assert_eq!(lex("true"), vec![Token::Boolean(true)]);
    assert_eq!(lex("false"), vec![Token::Boolean(false)]);
}

#[test]
fn eof_is_sticky() {
    let mut tokenizer = Tokenizer::new("null");
    assert_eq!(tokenizer.next_token().unwrap(), Token::Null);
    assert_eq!(tokenizer.next_token().unwrap(), Token::Eof);
    assert_eq!(tokenizer.next_token().unwrap(), Token::Eof);
}

// ============================================================================
// Strings
// ============================================================================

#[test]
fn empty_string() {
    assert_eq!(lex(r#""""#), vec![Token::String(String::new())]);
}

#[test]
fn plain_string() {
    assert_eq!(
        lex(r#""This is a string""#),
        vec![Token::String("This is a string".to_string())]
    );
}

#[test]
fn escaped_quotes() {
    assert_eq!(
        lex(r#""Escapes \"totally\" work""#),
        vec![Token::String("Escapes \"totally\" work".to_string())]
    );
}

#[test]
fn short_escapes_decode() {
    assert_eq!(
        lex(r#""\\ \/ \b \f \n \r \t""#),
        vec![Token::String(
            "\\ / \u{0008} \u{000c} \n \r \t".to_string()
        )]
    );
}

#[test]
fn unicode_escapes_decode() {
    assert_eq!(lex("\"\\u0041\""), vec![Token::String("A".to_string())]);
    assert_eq!(lex("\"\\u00e9\""), vec![Token::String("é".to_string())]);
    assert_eq!(lex("\"\\u2603\""), vec![Token::String("☃".to_string())]);
    // Hex digits are case-insensitive.
    assert_eq!(lex("\"\\u00E9\""), vec![Token::String("é".to_string())]);
}

#[test]
fn raw_multibyte_characters_pass_through() {
    assert_eq!(lex("\"café ☃\""), vec![Token::String("café ☃".to_string())]);
}

#[test]
fn unterminated_string_fails() {
    assert_fails_after(r#""abc"#, &[]);
}

#[test]
fn lone_trailing_backslash_fails() {
    assert_fails_after("\"abc\\", &[]);
}

#[test]
fn unknown_escape_fails() {
    assert_fails_after(r#""\q""#, &[]);
}

#[test]
fn short_hex_run_fails() {
    assert_fails_after(r#""\u12""#, &[]);
    assert_fails_after(r#""\u12g4""#, &[]);
}

#[test]
fn surrogate_escape_fails() {
    // \ud800 names a surrogate code unit, which is not a Unicode scalar.
    assert_fails_after(r#""\ud800""#, &[]);
}

// ============================================================================
// Numbers
// ============================================================================

#[test]
fn number_texts_are_kept_verbatim() {
    for text in ["0", "123.456", "123E456", "123.456E789", "-1"] {
        assert_eq!(lex(text), vec![Token::Number(text.to_string())]);
    }
}

#[test]
fn malformed_number_fails() {
    assert_fails_after("01", &[]);
    assert_fails_after("-", &[]);
    assert_fails_after("1.", &[]);
    assert_fails_after("1e", &[]);
    assert_fails_after("1e+", &[]);
    assert_fails_after("1.2.3", &[]);
}

#[test]
fn terminating_character_is_pushed_back() {
    assert_eq!(
        lex("123}"),
        vec![Token::Number("123".to_string()), Token::CloseObject]
    );
    assert_eq!(
        lex("{123}"),
        vec![
            Token::OpenObject,
            Token::Number("123".to_string()),
            Token::CloseObject,
        ]
    );
}

// ============================================================================
// Token sequences and the prior-separator rule
// ============================================================================

#[test]
fn whitespace_separates_literals() {
    assert_eq!(lex("false null"), vec![Token::Boolean(false), Token::Null]);
}

#[test]
fn delimiters_separate_literals() {
    assert_eq!(lex("{123"), vec![Token::OpenObject, Token::Number("123".to_string())]);
    assert_eq!(lex("null["), vec![Token::Null, Token::OpenArray]);
    assert_eq!(
        lex("null:true,false:\"false\""),
        vec![
            Token::Null,
            Token::Colon,
            Token::Boolean(true),
            Token::Comma,
            Token::Boolean(false),
            Token::Colon,
            Token::String("false".to_string()),
        ]
    );
}

#[test]
fn adjacent_literals_without_separator_fail() {
    assert_fails_after("nullfalse", &[Token::Null]);
    assert_fails_after("false123", &[Token::Boolean(false)]);
    assert_fails_after("123\"a\"", &[Token::Number("123".to_string())]);
    assert_fails_after("{null\"123\"", &[Token::OpenObject, Token::Null]);
}

#[test]
fn truncated_literal_fails() {
    assert_fails_after("fals", &[]);
    assert_fails_after("nul", &[]);
    assert_fails_after("tru", &[]);
}

#[test]
fn unexpected_character_fails() {
    assert_fails_after("@", &[]);
    assert_fails_after("[1, @]", &[Token::OpenArray, Token::Number("1".to_string()), Token::Comma]);
}

// ============================================================================
// Number grammar validation
// ============================================================================

#[test]
fn small_integer_texts_validate() {
    for n in -1000i32..=1000 {
        assert!(is_valid_number(&n.to_string()), "{n} should validate");
    }
}

#[test]
fn valid_number_shapes() {
    for text in [
        "0", "-0", "0.5", "123.456", "123E456", "123.456E789", "1e+9", "1E-9", "-1",
        "9007199254740991",
    ] {
        assert!(is_valid_number(text), "{text:?} should validate");
    }
}

#[test]
fn invalid_number_shapes() {
    for text in [
        "", "-", "01", ".1", "E0", "0.", "0E", "0E+", "+1", "--1", "1.2.3", "1e", "1ee1", "1.e1",
    ] {
        assert!(!is_valid_number(text), "{text:?} should not validate");
    }
}
