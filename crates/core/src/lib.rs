//! Core domain types, run formatting, and Markdown normalization
//! for rich text to slide conversion.

pub mod error;
pub mod format;
pub mod normalize;
pub mod types;

pub use error::{Error, Result};
pub use format::{FormatStyle, RunFormatter};
pub use normalize::MarkdownNormalizer;
pub use types::{
    push_line_break, Align, Bullet, BulletKind, InputFormat, StyleSet, StyledRun, Underline,
    UnderlineOptions, UnderlineStyle,
};
