//! Reading the handful of inline CSS declarations and classes editors emit.

use crate::tag::Mark;
use richtext_core::Align;

/// Class prefix Quill uses for list item nesting.
const QUILL_INDENT_PREFIX: &str = "ql-indent-";

/// Formatting declared in an element's `style` attribute.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InlineStyle {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strike: bool,
    /// Font size in points.
    pub font_size: Option<f64>,
    pub align: Option<Align>,
}

impl InlineStyle {
    /// Parse a declaration list such as `font-weight:bold; font-size: 18pt`.
    ///
    /// Property names are case-insensitive and whitespace around `:` and `;`
    /// is ignored. Unknown or malformed declarations are skipped.
    pub fn parse(declarations: &str) -> Self {
        let mut style = Self::default();

        for declaration in declarations.split(';') {
            let Some((property, value)) = declaration.split_once(':') else {
                continue;
            };
            let property = property.trim().to_ascii_lowercase();
            let value = value.trim().to_ascii_lowercase();
            let value = value.trim_end_matches("!important").trim();

            match property.as_str() {
                "font-weight" => style.bold = is_bold_weight(value),
                "font-style" => style.italic = value == "italic" || value.starts_with("oblique"),
                "text-decoration" | "text-decoration-line" => {
                    style.underline |= value.contains("underline");
                    style.strike |= value.contains("line-through");
                }
                "font-size" => style.font_size = parse_points(value),
                "text-align" => style.align = Align::from_keyword(value),
                _ => {}
            }
        }

        style
    }

    /// Declared marks, in the order bold, italic, underline, strike.
    pub fn marks(&self) -> Vec<Mark> {
        [
            (self.bold, Mark::Bold),
            (self.italic, Mark::Italic),
            (self.underline, Mark::Underline),
            (self.strike, Mark::Strike),
        ]
        .into_iter()
        .filter_map(|(set, mark)| set.then_some(mark))
        .collect()
    }
}

fn is_bold_weight(value: &str) -> bool {
    match value {
        "bold" | "bolder" => true,
        numeric => numeric.parse::<u32>().is_ok_and(|weight| weight >= 600),
    }
}

fn parse_points(value: &str) -> Option<f64> {
    value
        .strip_suffix("pt")?
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|size| size.is_finite() && *size > 0.0)
}

/// Alignment named by an editor class such as `ql-align-center`.
pub fn alignment_from_class(class: &str) -> Option<Align> {
    if class.contains("align-justify") {
        Some(Align::Justify)
    } else if class.contains("align-center") {
        Some(Align::Center)
    } else if class.contains("align-right") {
        Some(Align::Right)
    } else {
        None
    }
}

/// Extra nesting depth from a Quill `ql-indent-N` class.
pub fn quill_indent(class: &str) -> u32 {
    class
        .split_whitespace()
        .find_map(|c| c.strip_prefix(QUILL_INDENT_PREFIX)?.parse().ok())
        .unwrap_or(0)
}
