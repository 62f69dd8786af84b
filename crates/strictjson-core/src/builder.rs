//! Recursive-descent assembly of [`Value`] trees from the token stream.
//!
//! Grammar: `value := object | array | string | number | "true" | "false"
//! | "null"`. Containers are driven by explicit per-container state
//! machines; only nested *values* recurse, never the state tracking
//! itself. Parsing is all-or-nothing: any violation anywhere aborts the
//! whole parse with no partial tree.

use std::collections::BTreeMap;

use crate::error::{ParseError, Result};
use crate::tokenizer::{Token, Tokenizer};
use crate::value::Value;

/// Knobs for the strictness gaps JSON implementations disagree on.
#[derive(Debug, Clone, Copy)]
pub struct ParseOptions {
    /// Maximum container nesting before the parse is aborted. Bounds the
    /// recursion depth against adversarial deeply nested input.
    pub max_depth: usize,
    /// When set, a repeated object key overwrites the earlier member
    /// instead of failing the parse.
    pub allow_duplicate_keys: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_depth: 128,
            allow_duplicate_keys: false,
        }
    }
}

/// Where an in-progress object stands, carrying the pending key through
/// the colon and value steps.
enum ObjectState {
    /// We need a key or a `}`.
    NeedKeyOrClose,
    /// We need a string acting as the member's key.
    NeedKey,
    /// We need the colon separating the key from its value.
    NeedColon(String),
    /// We need the member's value.
    NeedValue(String),
    /// We need a comma to continue the member list or a `}`.
    NeedCommaOrClose,
}

/// Where an in-progress array stands.
enum ArrayState {
    /// We need a value or a `]`.
    NeedValueOrClose,
    /// We need a value to append.
    NeedValue,
    /// We need a comma to continue the element list or a `]`.
    NeedCommaOrClose,
}

/// Consumes the token stream and assembles a [`Value`] tree.
pub struct Builder<'a> {
    tokenizer: Tokenizer<'a>,
    options: ParseOptions,
}

impl<'a> Builder<'a> {
    pub fn new(input: &'a str) -> Self {
        Self::with_options(input, ParseOptions::default())
    }

    pub fn with_options(input: &'a str, options: ParseOptions) -> Self {
        Self {
            tokenizer: Tokenizer::new(input),
            options,
        }
    }

    /// Parse the input into a single top-level [`Value`], requiring the
    /// token stream to be fully consumed. Empty input and trailing content
    /// after the value are both errors.
    pub fn build(mut self) -> Result<Value> {
        let token = self.tokenizer.next_token()?;
        if token == Token::Eof {
            return Err(self.syntax("empty input, expected a value"));
        }
        let value = self.build_value(token, 0)?;
        match self.tokenizer.next_token()? {
            Token::Eof => Ok(value),
            _ => Err(self.syntax("trailing content after the top-level value")),
        }
    }

    fn syntax(&self, message: impl Into<String>) -> ParseError {
        ParseError::Syntax {
            offset: self.tokenizer.position(),
            message: message.into(),
        }
    }

    /// Value dispatch. `token` has already been pulled by the caller, so
    /// container parsing can hand nested value tokens straight back in.
    fn build_value(&mut self, token: Token, depth: usize) -> Result<Value> {
        match token {
            Token::OpenObject => self.build_object(depth + 1),
            Token::OpenArray => self.build_array(depth + 1),
            Token::Null => Ok(Value::Null),
            Token::Boolean(b) => Ok(Value::Boolean(b)),
            Token::String(s) => Ok(Value::String(s)),
            Token::Number(text) => Ok(Value::Number(text)),
            Token::Eof => Err(self.syntax("expected a value, found end of input")),
            Token::CloseObject | Token::CloseArray | Token::Colon | Token::Comma => {
                Err(self.syntax("expected a value"))
            }
        }
    }

    /// Assumes the opening `{` has been consumed.
    fn build_object(&mut self, depth: usize) -> Result<Value> {
        self.check_depth(depth)?;
        let mut state = ObjectState::NeedKeyOrClose;
        let mut members = BTreeMap::new();
        loop {
            let token = self.tokenizer.next_token()?;
            if token == Token::Eof {
                return Err(self.syntax("unclosed object"));
            }
            state = match state {
                ObjectState::NeedKeyOrClose => match token {
                    Token::CloseObject => return Ok(Value::Object(members)),
                    Token::String(key) => ObjectState::NeedColon(key),
                    _ => return Err(self.syntax("expected a key or `}`")),
                },
                ObjectState::NeedKey => match token {
                    Token::String(key) => ObjectState::NeedColon(key),
                    _ => return Err(self.syntax("expected a key")),
                },
                ObjectState::NeedColon(key) => match token {
                    Token::Colon => ObjectState::NeedValue(key),
                    _ => return Err(self.syntax("expected `:` after the key")),
                },
                ObjectState::NeedValue(key) => {
                    if !self.options.allow_duplicate_keys && members.contains_key(&key) {
                        return Err(self.syntax(format!("duplicate key {key:?}")));
                    }
                    let value = self.build_value(token, depth)?;
                    members.insert(key, value);
                    ObjectState::NeedCommaOrClose
                }
                ObjectState::NeedCommaOrClose => match token {
                    Token::Comma => ObjectState::NeedKey,
                    Token::CloseObject => return Ok(Value::Object(members)),
                    _ => return Err(self.syntax("expected `,` or `}`")),
                },
            };
        }
    }

    /// Assumes the opening `[` has been consumed.
    fn build_array(&mut self, depth: usize) -> Result<Value> {
        self.check_depth(depth)?;
        let mut state = ArrayState::NeedValueOrClose;
        let mut elements = Vec::new();
        loop {
            let token = self.tokenizer.next_token()?;
            if token == Token::Eof {
                return Err(self.syntax("unclosed array"));
            }
            state = match state {
                ArrayState::NeedValueOrClose => match token {
                    Token::CloseArray => return Ok(Value::Array(elements)),
                    token => {
                        elements.push(self.build_value(token, depth)?);
                        ArrayState::NeedCommaOrClose
                    }
                },
                ArrayState::NeedValue => {
                    elements.push(self.build_value(token, depth)?);
                    ArrayState::NeedCommaOrClose
                }
                ArrayState::NeedCommaOrClose => match token {
                    Token::Comma => ArrayState::NeedValue,
                    Token::CloseArray => return Ok(Value::Array(elements)),
                    _ => return Err(self.syntax("expected `,` or `]`")),
                },
            };
        }
    }

    fn check_depth(&self, depth: usize) -> Result<()> {
        if depth > self.options.max_depth {
            Err(self.syntax(format!(
                "nesting deeper than {} levels",
                self.options.max_depth
            )))
        } else {
            Ok(())
        }
    }
}
