//! Text rendering of [`Value`] trees.
//!
//! Two modes: [`Mode::Pretty`] for human-readable output (objects
//! multi-line and indented, arrays inline with comma+space separators) and
//! [`Mode::Minified`] for size-sensitive output with no whitespace outside
//! string contents. Numbers render their canonical text verbatim; strings
//! are re-escaped on the way out.
//!
//! Object members render in sorted key order, which is deterministic but
//! need not match the order the input spelled them in.

use std::fmt::Write;

use crate::value::Value;

/// Output mode for [`render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Indented, one object member per line.
    Pretty,
    /// No whitespace anywhere outside string contents.
    Minified,
}

/// Rendering configuration. The indent unit is an explicit parameter
/// rather than a module constant, so output format travels with the call.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    indent_width: usize,
}

impl Default for Renderer {
    fn default() -> Self {
        Self { indent_width: 2 }
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A renderer indenting by `indent_width` spaces per nesting level in
    /// pretty mode.
    pub fn with_indent_width(indent_width: usize) -> Self {
        Self { indent_width }
    }

    /// Render `value` in the given mode.
    pub fn render(&self, value: &Value, mode: Mode) -> String {
        let mut out = String::new();
        match mode {
            Mode::Pretty => self.write_pretty(value, 0, &mut out),
            Mode::Minified => write_minified(value, &mut out),
        }
        out
    }

    /// Pretty emitter. `padding` is the current absolute indent in spaces;
    /// arrays stay inline and pass it through unchanged, objects add one
    /// unit per level.
    fn write_pretty(&self, value: &Value, padding: usize, out: &mut String) {
        match value {
            Value::String(s) => write_escaped(s, out),
            Value::Number(text) => out.push_str(text),
            Value::Boolean(b) => out.push_str(if *b { "true" } else { "false" }),
            Value::Null => out.push_str("null"),
            Value::Array(elements) => {
                out.push('[');
                for (i, element) in elements.iter().enumerate() {
                    if i > 0 {
                        out.push_str(", ");
                    }
                    self.write_pretty(element, padding, out);
                }
                out.push(']');
            }
            Value::Object(members) => {
                out.push('{');
                if !members.is_empty() {
                    let member_padding = padding + self.indent_width;
                    for (i, (key, member)) in members.iter().enumerate() {
                        out.push_str(if i > 0 { ",\n" } else { "\n" });
                        push_spaces(member_padding, out);
                        write_escaped(key, out);
                        out.push_str(": ");
                        self.write_pretty(member, member_padding, out);
                    }
                    out.push('\n');
                    push_spaces(padding, out);
                }
                out.push('}');
            }
        }
    }
}

/// Render `value` with the default two-space renderer.
pub fn render(value: &Value, mode: Mode) -> String {
    Renderer::default().render(value, mode)
}

fn write_minified(value: &Value, out: &mut String) {
    match value {
        Value::String(s) => write_escaped(s, out),
        Value::Number(text) => out.push_str(text),
        Value::Boolean(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Null => out.push_str("null"),
        Value::Array(elements) => {
            out.push('[');
            for (i, element) in elements.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_minified(element, out);
            }
            out.push(']');
        }
        Value::Object(members) => {
            out.push('{');
            for (i, (key, member)) in members.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_escaped(key, out);
                out.push(':');
                write_minified(member, out);
            }
            out.push('}');
        }
    }
}

/// Emit a quoted, escaped JSON string. Only `"` , `\`, and control
/// characters need escaping; everything else passes through verbatim.
fn write_escaped(s: &str, out: &mut String) {
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\u{0008}' => out.push_str("\\b"),
            '\u{000c}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
}

fn push_spaces(count: usize, out: &mut String) {
    for _ in 0..count {
        out.push(' ');
    }
}
