//! Editor HTML to styled slide runs.
//!
//! Parses HTML with `html5ever` and walks the tree, mapping recognized tags,
//! inline CSS and editor classes onto run styles. Also provides a bridge that
//! degrades HTML to the Markdown notation of `richtext-markdown`.

pub mod bridge;
pub mod css;
pub mod dom;
pub mod list;
pub mod tag;
pub mod walker;

pub use bridge::{html_to_markdown, html_to_markdown_with, MarkdownBridge};
pub use list::LIST_ITEM_SPACE_AFTER;
pub use tag::{Mark, TagKind};
pub use walker::{HtmlConverter, HEADING_SPACE_AFTER, MAX_NESTING_DEPTH, QUILL_FONT_FACE};
