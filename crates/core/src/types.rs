//! Domain types for representing styled slide text.
//!
//! A converted document is a flat, ordered `Vec<StyledRun>`. No tree
//! structure survives conversion: order is the only encoding of sequence,
//! and each run carries a full snapshot of the style in effect when its
//! text was emitted.

use crate::Error;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::LazyLock;

/// Regex to find tags that only appear in HTML documents.
///
/// `<u>` is deliberately absent: the Markdown notation uses it for underline.
static HTML_TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)</?(p|div|span|br|ul|ol|li|h[1-6]|strong|b|em|i|s|strike|del)\b[^>]*>")
        .unwrap()
});

/// A run of text sharing one style snapshot.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StyledRun {
    /// Literal text, free of formatting markers. May contain newlines.
    pub text: String,

    /// Style of this run. `None` means plain text.
    #[serde(
        rename = "options",
        alias = "style",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub style: Option<StyleSet>,
}

impl StyledRun {
    /// Create an unstyled run.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: None,
        }
    }

    /// Create a run with the given style. An empty style becomes `None`.
    pub fn styled(text: impl Into<String>, style: StyleSet) -> Self {
        Self {
            text: text.into(),
            style: if style.is_empty() { None } else { Some(style) },
        }
    }

    /// Create a line-break sentinel: empty text with only `breakLine` set.
    pub fn line_break() -> Self {
        Self {
            text: String::new(),
            style: Some(StyleSet {
                break_line: Some(true),
                ..StyleSet::default()
            }),
        }
    }

    /// Whether this run is a line-break sentinel.
    pub fn is_line_break(&self) -> bool {
        self.style
            .as_ref()
            .is_some_and(|s| s.break_line == Some(true))
    }

    /// Whether this run carries a list marker.
    pub fn has_bullet(&self) -> bool {
        self.style.as_ref().is_some_and(|s| s.bullet.is_some())
    }

    /// Mutable access to the style, creating an empty one if needed.
    pub fn style_mut(&mut self) -> &mut StyleSet {
        self.style.get_or_insert_with(StyleSet::default)
    }
}

/// Formatting attributes of a run.
///
/// Every field is optional; unset fields are omitted when serialized so the
/// output matches the text-props shape slide builders expect.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleSet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub strike: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub underline: Option<Underline>,

    /// Hex color. No converter produces it yet.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Font size in points.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_face: Option<String>,

    /// Marks a line-break sentinel run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub break_line: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<Align>,

    /// Nesting depth used for indentation, independent of the marker kind.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indent_level: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bullet: Option<Bullet>,

    /// Vertical spacing after a block element, in points.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub para_space_after: Option<u32>,
}

impl StyleSet {
    /// Whether no attribute is set.
    pub fn is_empty(&self) -> bool {
        *self == StyleSet::default()
    }

    /// A style with only `bold` set.
    pub fn bold() -> Self {
        Self {
            bold: Some(true),
            ..Self::default()
        }
    }

    /// A style with only `italic` set.
    pub fn italic() -> Self {
        Self {
            italic: Some(true),
            ..Self::default()
        }
    }

    /// A style with only `strike` set.
    pub fn strike() -> Self {
        Self {
            strike: Some(true),
            ..Self::default()
        }
    }

    /// A style with only a styled underline set.
    pub fn underline(style: UnderlineStyle) -> Self {
        Self {
            underline: Some(Underline::styled(style)),
            ..Self::default()
        }
    }
}

/// Underline, either a plain toggle or a styled line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Underline {
    Flag(bool),
    Styled(UnderlineOptions),
}

impl Underline {
    /// An underline drawn with the given line style.
    pub fn styled(style: UnderlineStyle) -> Self {
        Underline::Styled(UnderlineOptions { style: Some(style) })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnderlineOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<UnderlineStyle>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnderlineStyle {
    Single,
    Double,
    Heavy,
    Dotted,
    Dashed,
    Wavy,
}

/// Paragraph alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
    Center,
    Right,
    Justify,
}

impl Align {
    /// Parse a CSS `text-align` keyword.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword.trim().to_ascii_lowercase().as_str() {
            "left" | "start" => Some(Self::Left),
            "center" => Some(Self::Center),
            "right" | "end" => Some(Self::Right),
            "justify" => Some(Self::Justify),
            _ => None,
        }
    }
}

/// List marker attached to the first run of a list item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bullet {
    #[serde(rename = "type")]
    pub kind: BulletKind,
}

impl Bullet {
    pub fn new(kind: BulletKind) -> Self {
        Self { kind }
    }
}

/// Kind of list marker. Numbering is left to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BulletKind {
    Bullet,
    Number,
}

/// Append a line break to a run sequence.
///
/// The newline is appended to the last run's text unless that run carries a
/// list marker (or there is no run), in which case a bare `"\n"` run is pushed.
/// Every line-break site (paragraph close, `<br>`, list item separators)
/// goes through here.
pub fn push_line_break(runs: &mut Vec<StyledRun>) {
    match runs.last_mut() {
        Some(last) if !last.has_bullet() => last.text.push('\n'),
        _ => runs.push(StyledRun::plain("\n")),
    }
}

/// The notation of an input document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    /// Plain text with Markdown-style inline marks.
    Markdown,
    /// HTML produced by a WYSIWYG editor.
    Html,
}

impl InputFormat {
    /// Detect format from file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "md" | "markdown" | "txt" => Some(Self::Markdown),
            "html" | "htm" => Some(Self::Html),
            _ => None,
        }
    }

    /// Detect format from document content.
    ///
    /// Anything that contains an HTML tag other than `<u>` is treated as HTML.
    pub fn detect(content: &str) -> Self {
        if HTML_TAG_REGEX.is_match(content) {
            Self::Html
        } else {
            Self::Markdown
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Markdown => "markdown",
            Self::Html => "html",
        }
    }
}

impl FromStr for InputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "markdown" | "md" => Ok(Self::Markdown),
            "html" => Ok(Self::Html),
            other => Err(Error::UnsupportedFormat(other.to_string())),
        }
    }
}
