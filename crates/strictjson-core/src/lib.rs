//! # strictjson-core
//!
//! A strict JSON tokenizer, recursive-descent parser, and renderer built
//! around a six-variant [`Value`] model.
//!
//! Strict means the defaults take the harder line on every point JSON
//! implementations disagree about: duplicate object keys fail the parse,
//! trailing content after the top-level value fails the parse, and
//! container nesting is depth-limited. Numbers are kept as their canonical
//! decimal text and only converted when a numeric accessor asks.
//!
//! ## Quick start
//!
//! ```rust
//! use strictjson_core::{parse, render, Mode};
//!
//! let value = parse(r#"{"name":"Alice","scores":[95,87,92]}"#).unwrap();
//! assert_eq!(value["name"].as_str(), Some("Alice"));
//! assert_eq!(value["scores"].len(), Some(3));
//! assert_eq!(render(&value["scores"], Mode::Minified), "[95,87,92]");
//! ```
//!
//! Data flows one way: text → tokens ([`tokenizer`]) → value tree
//! ([`builder`]) → text ([`render`]). Each stage is synchronous and owns
//! its own cursor; independent parses are freely parallelizable since
//! finished [`Value`] trees are immutable.
//!
//! ## Modules
//!
//! - [`tokenizer`] — text → lexical tokens
//! - [`builder`] — tokens → [`Value`] tree
//! - [`value`] — the tree itself, with accessors and equality
//! - [`render`] — [`Value`] → pretty or minified text
//! - [`error`] — [`ParseError`] and the crate [`Result`] alias

pub mod builder;
pub mod error;
pub mod render;
pub mod tokenizer;
pub mod value;

pub use builder::{Builder, ParseOptions};
pub use error::{ParseError, Result};
pub use render::{render, Mode, Renderer};
pub use tokenizer::{is_valid_number, Token, Tokenizer};
pub use value::Value;

/// Parse JSON text into a [`Value`] with the default [`ParseOptions`].
///
/// The whole input must be consumed: a valid value followed by anything
/// other than whitespace is an error.
pub fn parse(input: &str) -> Result<Value> {
    Builder::new(input).build()
}

/// Parse JSON text with explicit [`ParseOptions`].
pub fn parse_with_options(input: &str, options: ParseOptions) -> Result<Value> {
    Builder::with_options(input, options).build()
}
