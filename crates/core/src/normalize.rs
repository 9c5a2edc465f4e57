//! Whitespace normalization for Markdown produced from HTML.
//!
//! Editors wrap every paragraph in block elements and sprinkle formatting
//! whitespace between them, so bridged Markdown needs its blank lines and
//! whitespace runs cleaned up before tokenizing.

use regex::Regex;
use std::sync::LazyLock;

/// Regex to collapse three or more line breaks (with blank lines between).
static EXCESS_BREAKS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n\s*\n").unwrap());

/// Regex to collapse any whitespace run, newlines included.
static WHITESPACE_COLLAPSE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Regex to collapse horizontal whitespace only.
static HORIZONTAL_WHITESPACE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\S\n]+").unwrap());

/// Normalizer for Markdown text bridged from HTML.
#[derive(Debug, Clone, Default)]
pub struct MarkdownNormalizer {
    /// Whether to keep single line breaks instead of flattening them.
    preserve_line_breaks: bool,
}

impl MarkdownNormalizer {
    /// Create a normalizer that flattens all whitespace, line breaks included.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to preserve line breaks.
    pub fn with_preserve_line_breaks(mut self, preserve: bool) -> Self {
        self.preserve_line_breaks = preserve;
        self
    }

    /// Normalize bridged Markdown.
    ///
    /// - Collapses runs of three or more line breaks to exactly two
    /// - Trims leading/trailing whitespace
    /// - Collapses whitespace runs to a single space; in the default mode
    ///   this also turns every remaining newline into a space
    pub fn normalize(&self, text: &str) -> String {
        let collapsed = EXCESS_BREAKS_REGEX.replace_all(text, "\n\n");
        let trimmed = collapsed.trim();

        let normalized = if self.preserve_line_breaks {
            trimmed
                .split('\n')
                .map(|line| HORIZONTAL_WHITESPACE_REGEX.replace_all(line, " ").trim().to_string())
                .collect::<Vec<_>>()
                .join("\n")
        } else {
            WHITESPACE_COLLAPSE_REGEX.replace_all(trimmed, " ").to_string()
        };

        log::debug!(
            "Normalized {} bytes of Markdown to {} bytes (line breaks {})",
            text.len(),
            normalized.len(),
            if self.preserve_line_breaks { "kept" } else { "flattened" }
        );

        normalized
    }
}
