//! Display formatting for run sequences.
//!
//! Produces a deterministic, human-readable rendering of converted runs for
//! previews and debugging. Formatting never changes the runs themselves.

use crate::{Result, StyledRun};
use serde_json::Value;

/// Layout used by [`RunFormatter`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormatStyle {
    /// Pretty-printed JSON with two-space indentation.
    #[default]
    Json,
    /// Object-literal layout with unquoted keys and each run's options on
    /// one line, as shown in editor previews.
    Literal,
}

/// Formatter for run sequences.
#[derive(Debug, Clone, Default)]
pub struct RunFormatter {
    style: FormatStyle,
}

impl RunFormatter {
    /// Create a formatter producing pretty JSON.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output layout.
    pub fn with_style(mut self, style: FormatStyle) -> Self {
        self.style = style;
        self
    }

    /// Format runs for display.
    ///
    /// Keys appear in field declaration order and unset style fields are
    /// omitted, so equal run sequences always format identically.
    ///
    /// # Example output
    /// ```text
    /// [
    ///   {
    ///     "text": "bold",
    ///     "options": {
    ///       "bold": true
    ///     }
    ///   }
    /// ]
    /// ```
    pub fn format(&self, runs: &[StyledRun]) -> Result<String> {
        log::debug!("Formatting {} runs as {:?}", runs.len(), self.style);
        match self.style {
            FormatStyle::Json => Ok(serde_json::to_string_pretty(runs)?),
            FormatStyle::Literal => {
                let value = serde_json::to_value(runs)?;
                Ok(write_literal(&value, 0))
            }
        }
    }

    /// Format and add a trailing newline.
    pub fn format_with_newline(&self, runs: &[StyledRun]) -> Result<String> {
        let mut formatted = self.format(runs)?;
        formatted.push('\n');
        Ok(formatted)
    }

    /// Read runs back from JSON formatter output.
    pub fn parse(json: &str) -> Result<Vec<StyledRun>> {
        Ok(serde_json::from_str(json)?)
    }
}

fn write_literal(value: &Value, indent: usize) -> String {
    let pad = "  ".repeat(indent);

    match value {
        Value::Array(items) => {
            if items.is_empty() {
                return "[]".to_string();
            }
            let body = items
                .iter()
                .map(|item| format!("{pad}  {}", write_literal(item, indent + 1)))
                .collect::<Vec<_>>()
                .join(",\n");
            format!("[\n{body}\n{pad}]")
        }
        Value::Object(map) => {
            if map.is_empty() {
                return "{}".to_string();
            }
            let body = map
                .iter()
                .map(|(key, v)| {
                    let rendered = if key == "options" && v.is_object() {
                        write_inline(v)
                    } else {
                        write_literal(v, indent + 1)
                    };
                    format!("{pad}  {key}: {rendered}")
                })
                .collect::<Vec<_>>()
                .join(",\n");
            format!("{{\n{body}\n{pad}}}")
        }
        Value::String(s) => format!("\"{}\"", escape_string(s)),
        other => other.to_string(),
    }
}

fn write_inline(value: &Value) -> String {
    match value {
        Value::Object(map) if !map.is_empty() => {
            let entries = map
                .iter()
                .map(|(key, v)| format!("{key}: {}", write_inline(v)))
                .collect::<Vec<_>>()
                .join(", ");
            format!("{{ {entries} }}")
        }
        Value::Array(items) if !items.is_empty() => {
            let entries = items.iter().map(write_inline).collect::<Vec<_>>().join(", ");
            format!("[{entries}]")
        }
        other => write_literal(other, 0),
    }
}

fn escape_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{b}' => out.push_str("\\v"),
            c if c.is_ascii_control() && (c as u32) < 0x20 => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out
}
