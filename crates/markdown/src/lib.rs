//! Markdown-style rich text to styled slide runs.
//!
//! Understands the inline marks `**bold**`, `__bold__`, `*italic*`,
//! `_italic_`, `~~strike~~` and `<u>underline</u>`, one line at a time.

pub mod converter;
pub mod tokenizer;

pub use converter::MarkdownConverter;
pub use tokenizer::{scan_tokens, tokenize, MarkKind, MarkToken};
