//! Multi-line Markdown conversion.

use crate::tokenizer::tokenize;
use richtext_core::StyledRun;

/// Converter for Markdown-style rich text documents.
#[derive(Debug, Clone, Default)]
pub struct MarkdownConverter;

impl MarkdownConverter {
    /// Create a new Markdown converter.
    pub fn new() -> Self {
        Self
    }

    /// Convert a document into styled runs.
    ///
    /// Lines are split on `\n` or `\r\n` without trimming. A blank line
    /// becomes a single line-break sentinel; every other line is tokenized
    /// and, unless it is the last line, followed by a sentinel.
    pub fn convert(&self, document: &str) -> Vec<StyledRun> {
        if document.is_empty() {
            return Vec::new();
        }

        let lines: Vec<&str> = document
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect();
        let mut runs = Vec::new();

        for (idx, line) in lines.iter().enumerate() {
            if line.trim().is_empty() {
                runs.push(StyledRun::line_break());
                continue;
            }

            runs.extend(tokenize(line));

            if idx + 1 < lines.len() {
                runs.push(StyledRun::line_break());
            }
        }

        log::debug!(
            "Converted {} Markdown lines into {} runs",
            lines.len(),
            runs.len()
        );

        runs
    }
}
