//! HTML to Markdown bridge.
//!
//! Degrades editor HTML to the inline Markdown notation the Markdown
//! converter understands, for hosts that only run the simpler pipeline.

use crate::css::InlineStyle;
use crate::dom::{self, Fragment};
use crate::tag::{Mark, TagKind};
use crate::walker::{check_depth, DEFAULT_UI_CLASS};
use markup5ever_rcdom::{Handle, NodeData};
use richtext_core::{MarkdownNormalizer, Result};

/// Converts HTML fragments into Markdown-style text.
#[derive(Debug, Clone)]
pub struct MarkdownBridge {
    normalizer: MarkdownNormalizer,
    /// Elements with this class are editor chrome and skipped.
    ui_class: String,
}

impl Default for MarkdownBridge {
    fn default() -> Self {
        Self {
            normalizer: MarkdownNormalizer::new(),
            ui_class: DEFAULT_UI_CLASS.to_string(),
        }
    }
}

impl MarkdownBridge {
    /// Create a bridge with the default (flattening) normalizer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the normalizer applied to the rendered Markdown.
    pub fn with_normalizer(mut self, normalizer: MarkdownNormalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    /// Set the class that marks editor UI elements.
    pub fn with_ui_class(mut self, class: impl Into<String>) -> Self {
        self.ui_class = class.into();
        self
    }

    /// Convert an HTML fragment into normalized Markdown.
    pub fn convert(&self, html: &str) -> Result<String> {
        if html.trim().is_empty() {
            return Ok(String::new());
        }

        let fragment = Fragment::parse(html)?;
        let raw = self.render_children(&fragment.root(), 0)?;
        let markdown = self.normalizer.normalize(&raw);

        log::debug!(
            "Bridged {} bytes of HTML into {} bytes of Markdown",
            html.len(),
            markdown.len()
        );

        Ok(markdown)
    }

    fn render_children(&self, node: &Handle, depth: usize) -> Result<String> {
        let mut result = String::new();
        for child in node.children.borrow().iter() {
            match &child.data {
                NodeData::Text { contents } => result.push_str(&contents.borrow()),
                NodeData::Element { .. } => self.render_element(child, depth + 1, &mut result)?,
                _ => {}
            }
        }
        Ok(result)
    }

    fn render_element(&self, node: &Handle, depth: usize, out: &mut String) -> Result<()> {
        check_depth(depth)?;
        let Some(tag) = dom::tag_name(node) else {
            return Ok(());
        };
        if dom::has_class(node, &self.ui_class) {
            return Ok(());
        }

        let kind = TagKind::from_name(tag);
        if kind == TagKind::LineBreak {
            out.push('\n');
            return Ok(());
        }

        let content = self.render_children(node, depth)?;
        if content.trim().is_empty() {
            return Ok(());
        }

        match kind {
            TagKind::Mark(mark) => wrap(out, mark, &content),
            TagKind::Span => {
                let first_mark = dom::attr(node, "style")
                    .and_then(|declarations| InlineStyle::parse(&declarations).marks().first().copied());
                match first_mark {
                    Some(mark) => wrap(out, mark, &content),
                    None => out.push_str(&content),
                }
            }
            TagKind::Block => {
                out.push_str(&content);
                out.push_str("\n\n");
            }
            TagKind::Heading(_) => {
                wrap(out, Mark::Bold, &content);
                out.push_str("\n\n");
            }
            TagKind::ListItem => {
                out.push_str(&content);
                out.push('\n');
            }
            TagKind::List { .. } | TagKind::LineBreak | TagKind::Other => out.push_str(&content),
        }
        Ok(())
    }
}

fn wrap(out: &mut String, mark: Mark, content: &str) {
    let (open, close) = mark.delimiters();
    out.push_str(open);
    out.push_str(content);
    out.push_str(close);
}

/// Convert an HTML fragment into Markdown with the default bridge.
pub fn html_to_markdown(html: &str) -> Result<String> {
    MarkdownBridge::new().convert(html)
}

/// Convert an HTML fragment into Markdown, normalizing with `normalizer`.
pub fn html_to_markdown_with(html: &str, normalizer: &MarkdownNormalizer) -> Result<String> {
    MarkdownBridge::new()
        .with_normalizer(normalizer.clone())
        .convert(html)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_marks() {
        let markdown =
            html_to_markdown("<p><strong>b</strong> <em>i</em> <u>u</u> <s>s</s></p>").unwrap();
        assert_eq!(markdown, "**b** *i* <u>u</u> ~~s~~");
    }

    #[test]
    fn test_nested_marks() {
        let markdown = html_to_markdown("<b>bold <i>both</i></b>").unwrap();
        assert_eq!(markdown, "**bold *both***");
    }

    #[test]
    fn test_paragraphs_flatten() {
        let markdown = html_to_markdown("<h2>Title</h2><p>First</p><p>Second</p>").unwrap();
        assert_eq!(markdown, "**Title** First Second");
    }

    #[test]
    fn test_preserve_line_breaks() {
        let bridge = MarkdownBridge::new()
            .with_normalizer(MarkdownNormalizer::new().with_preserve_line_breaks(true));
        let markdown = bridge
            .convert("<h2>Title</h2><p>First<br>line</p><p>Second</p>")
            .unwrap();
        assert_eq!(markdown, "**Title**\n\nFirst\nline\n\nSecond");
    }

    #[test]
    fn test_span_mark_precedence() {
        let markdown = html_to_markdown(
            r#"<span style="text-decoration: line-through; font-weight:bold">x</span>"#,
        )
        .unwrap();
        assert_eq!(markdown, "**x**");

        let markdown =
            html_to_markdown(r#"<span style="text-decoration:underline">x</span>"#).unwrap();
        assert_eq!(markdown, "<u>x</u>");

        let markdown = html_to_markdown(r#"<span style="color: red">x</span>"#).unwrap();
        assert_eq!(markdown, "x");
    }

    #[test]
    fn test_blank_elements_are_dropped() {
        let markdown = html_to_markdown("<p>a</p><strong> </strong><p></p><p>b</p>").unwrap();
        assert_eq!(markdown, "a b");
    }

    #[test]
    fn test_list_items() {
        let markdown = html_to_markdown("<ul><li>one</li><li>two</li></ul>").unwrap();
        assert_eq!(markdown, "one two");
    }

    #[test]
    fn test_ui_elements_are_skipped() {
        let markdown =
            html_to_markdown(r#"<ol><li><span class="ql-ui"></span>item</li></ol>"#).unwrap();
        assert_eq!(markdown, "item");
    }

    #[test]
    fn test_explicit_normalizer() {
        let normalizer = MarkdownNormalizer::new().with_preserve_line_breaks(true);
        let html = "<p><em>one</em></p><p>two</p>";
        assert_eq!(html_to_markdown_with(html, &normalizer).unwrap(), "*one*\n\ntwo");
        assert_eq!(
            html_to_markdown_with(html, &MarkdownNormalizer::new()).unwrap(),
            html_to_markdown(html).unwrap()
        );
    }

    #[test]
    fn test_deep_nesting_is_an_error() {
        let depth = crate::walker::MAX_NESTING_DEPTH * 8;
        let html = format!("{}x{}", "<span>".repeat(depth), "</span>".repeat(depth));
        let err = html_to_markdown(&html).unwrap_err();
        assert!(err.to_string().contains("nesting too deep"));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(html_to_markdown("").unwrap(), "");
        assert_eq!(html_to_markdown("<p><br></p>").unwrap(), "");
    }
}
