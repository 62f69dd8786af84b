//! JSON tokenizer.
//!
//! Converts raw JSON text into a stream of [`Token`]s for the builder. All
//! knowledge of the character-level grammar lives here: whitespace,
//! delimiters, the bare-word literals, string escapes, and the number
//! grammar.
//!
//! Words and numbers have no closing delimiter of their own, so the
//! tokenizer tracks a *prior separator* flag: a literal, string, or number
//! may only begin directly after whitespace or a delimiter. This is what
//! rejects inputs like `nullfalse` instead of silently splitting them.

use crate::error::{ParseError, Result};

/// A single lexical unit of JSON text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// `{`
    OpenObject,
    /// `}`
    CloseObject,
    /// `[`
    OpenArray,
    /// `]`
    CloseArray,
    /// `:`
    Colon,
    /// `,`
    Comma,
    /// The `null` literal
    Null,
    /// A `true` or `false` literal
    Boolean(bool),
    /// A string literal, with escape sequences decoded
    String(String),
    /// A number literal, kept as its raw decimal text
    Number(String),
    /// End of input
    Eof,
}

/// Lazy tokenizer over a borrowed input string.
///
/// Each call to [`next_token`](Tokenizer::next_token) consumes exactly one
/// token. A lexical error terminates the stream; callers must not continue
/// pulling tokens after an `Err`.
pub struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
    /// Set after whitespace and every delimiter, cleared after every
    /// literal/string/number token.
    prior_separator: bool,
}

impl<'a> Tokenizer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            prior_separator: true,
        }
    }

    /// Byte offset of the cursor into the input.
    pub fn position(&self) -> usize {
        self.pos
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn lexical(&self, message: impl Into<String>) -> ParseError {
        ParseError::Lexical {
            offset: self.pos,
            message: message.into(),
        }
    }

    fn delimiter(&mut self, token: Token) -> Token {
        self.bump();
        self.prior_separator = true;
        token
    }

    /// Read the next token, or [`Token::Eof`] once the input is exhausted.
    pub fn next_token(&mut self) -> Result<Token> {
        while let Some(c) = self.peek() {
            match c {
                ' ' | '\t' | '\r' | '\n' => {
                    self.bump();
                    self.prior_separator = true;
                }
                ':' => return Ok(self.delimiter(Token::Colon)),
                ',' => return Ok(self.delimiter(Token::Comma)),
                '{' => return Ok(self.delimiter(Token::OpenObject)),
                '}' => return Ok(self.delimiter(Token::CloseObject)),
                '[' => return Ok(self.delimiter(Token::OpenArray)),
                ']' => return Ok(self.delimiter(Token::CloseArray)),
                'n' => return self.read_literal("null", Token::Null),
                't' => return self.read_literal("true", Token::Boolean(true)),
                'f' => return self.read_literal("false", Token::Boolean(false)),
                '"' => return self.read_string(),
                '-' | '0'..='9' => return self.read_number(),
                other => return Err(self.lexical(format!("unexpected character {other:?}"))),
            }
        }
        Ok(Token::Eof)
    }

    /// Consume a bare-word literal (`null`, `true`, `false`).
    fn read_literal(&mut self, word: &str, token: Token) -> Result<Token> {
        if !self.prior_separator {
            return Err(self.lexical(format!(
                "literal `{word}` must follow whitespace or a delimiter"
            )));
        }
        if self.input[self.pos..].starts_with(word) {
            self.pos += word.len();
            self.prior_separator = false;
            Ok(token)
        } else {
            Err(self.lexical(format!("malformed literal, expected `{word}`")))
        }
    }

    /// Consume a string literal, decoding escape sequences. Assumes the
    /// cursor sits on the opening quote.
    fn read_string(&mut self) -> Result<Token> {
        if !self.prior_separator {
            return Err(self.lexical("string must follow whitespace or a delimiter"));
        }
        self.bump();
        let mut result = String::new();
        loop {
            match self.bump() {
                None => return Err(self.lexical("unterminated string")),
                Some('"') => break,
                Some('\\') => result.push(self.read_escape()?),
                Some(c) => result.push(c),
            }
        }
        self.prior_separator = false;
        Ok(Token::String(result))
    }

    /// Decode one escape sequence, after the backslash has been consumed.
    fn read_escape(&mut self) -> Result<char> {
        match self.bump() {
            None => Err(self.lexical("string ends in a lone backslash")),
            Some('"') => Ok('"'),
            Some('\\') => Ok('\\'),
            Some('/') => Ok('/'),
            Some('b') => Ok('\u{0008}'),
            Some('f') => Ok('\u{000c}'),
            Some('n') => Ok('\n'),
            Some('r') => Ok('\r'),
            Some('t') => Ok('\t'),
            Some('u') => self.read_unicode_escape(),
            Some(c) => Err(self.lexical(format!("invalid escape sequence `\\{c}`"))),
        }
    }

    /// Decode `\uXXXX`: exactly four hex digits naming one UTF-16 code
    /// unit. Surrogate code units are not Unicode scalars and are rejected.
    fn read_unicode_escape(&mut self) -> Result<char> {
        let mut unit: u32 = 0;
        for _ in 0..4 {
            let digit = self
                .bump()
                .and_then(|c| c.to_digit(16))
                .ok_or_else(|| self.lexical("`\\u` escape requires four hex digits"))?;
            unit = unit * 16 + digit;
        }
        char::from_u32(unit)
            .ok_or_else(|| self.lexical(format!("`\\u{unit:04x}` is not a Unicode scalar")))
    }

    /// Consume a number literal. Greedily takes every character that could
    /// extend a number, then re-validates the accumulated text against the
    /// grammar. The terminating character is left for the next token.
    fn read_number(&mut self) -> Result<Token> {
        if !self.prior_separator {
            return Err(self.lexical("number must follow whitespace or a delimiter"));
        }
        let start = self.pos;
        while let Some(c) = self.peek() {
            match c {
                '0'..='9' | '.' | 'e' | 'E' | '+' | '-' => {
                    self.bump();
                }
                _ => break,
            }
        }
        let text = &self.input[start..self.pos];
        if !is_valid_number(text) {
            return Err(ParseError::Lexical {
                offset: start,
                message: format!("malformed number `{text}`"),
            });
        }
        self.prior_separator = false;
        Ok(Token::Number(text.to_string()))
    }
}

/// State of the number automaton, tracking the last character class
/// consumed.
#[derive(Clone, Copy, PartialEq)]
enum NumberState {
    /// Nothing consumed yet.
    IntegerBegin,
    /// Consumed the leading minus sign.
    IntegerSign,
    /// Consumed a zero in the integer part.
    IntegerZero,
    /// Consuming digits in the integer part.
    IntegerDigits,
    /// Consumed the decimal point.
    FractionBegin,
    /// Consuming digits in the fraction part.
    FractionDigits,
    /// Consumed the exponent delimiter.
    ExponentBegin,
    /// Consumed the exponent's sign.
    ExponentSign,
    /// Consuming digits in the exponent part.
    ExponentDigits,
}

/// Validate text against the JSON number grammar
/// `-?(0|[1-9][0-9]*)(\.[0-9]+)?([eE][+-]?[0-9]+)?`.
///
/// A leading zero may not be followed by further integer digits, and the
/// fraction and exponent parts each require at least one digit.
pub fn is_valid_number(text: &str) -> bool {
    use NumberState::*;

    let mut state = IntegerBegin;
    for c in text.chars() {
        state = match state {
            IntegerBegin => match c {
                '-' => IntegerSign,
                '0' => IntegerZero,
                '1'..='9' => IntegerDigits,
                _ => return false,
            },
            IntegerSign => match c {
                '0' => IntegerZero,
                '1'..='9' => IntegerDigits,
                _ => return false,
            },
            IntegerZero => match c {
                '.' => FractionBegin,
                'e' | 'E' => ExponentBegin,
                _ => return false,
            },
            IntegerDigits => match c {
                '0'..='9' => IntegerDigits,
                '.' => FractionBegin,
                'e' | 'E' => ExponentBegin,
                _ => return false,
            },
            FractionBegin => match c {
                '0'..='9' => FractionDigits,
                _ => return false,
            },
            FractionDigits => match c {
                '0'..='9' => FractionDigits,
                'e' | 'E' => ExponentBegin,
                _ => return false,
            },
            ExponentBegin => match c {
                '+' | '-' => ExponentSign,
                '0'..='9' => ExponentDigits,
                _ => return false,
            },
            ExponentSign => match c {
                '0'..='9' => ExponentDigits,
                _ => return false,
            },
            ExponentDigits => match c {
                '0'..='9' => ExponentDigits,
                _ => return false,
            },
        };
    }
    matches!(
        state,
        IntegerZero | IntegerDigits | FractionDigits | ExponentDigits
    )
}
