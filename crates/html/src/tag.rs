//! Closed set of tag kinds the converters recognize.

use richtext_core::{StyleSet, Underline, UnderlineStyle};

/// Line style for underlines coming from HTML.
pub const UNDERLINE_STYLE: UnderlineStyle = UnderlineStyle::Heavy;

/// An inline formatting mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mark {
    Bold,
    Italic,
    Underline,
    Strike,
}

impl Mark {
    /// Add this mark to a style.
    pub fn apply(&self, style: &mut StyleSet) {
        match self {
            Mark::Bold => style.bold = Some(true),
            Mark::Italic => style.italic = Some(true),
            Mark::Underline => style.underline = Some(Underline::styled(UNDERLINE_STYLE)),
            Mark::Strike => style.strike = Some(true),
        }
    }

    /// Opening and closing Markdown delimiters.
    pub fn delimiters(&self) -> (&'static str, &'static str) {
        match self {
            Mark::Bold => ("**", "**"),
            Mark::Italic => ("*", "*"),
            Mark::Underline => ("<u>", "</u>"),
            Mark::Strike => ("~~", "~~"),
        }
    }
}

/// How an element is handled. Unrecognized tags are `Other` and pass
/// their children through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    /// `strong`/`b`, `em`/`i`, `u`, `s`/`strike`/`del`.
    Mark(Mark),
    /// `span`, styled through its inline CSS.
    Span,
    /// `p` and `div`: end with a line break.
    Block,
    /// `br`.
    LineBreak,
    /// `ul` or `ol`.
    List { ordered: bool },
    /// `li` outside list processing.
    ListItem,
    /// `h1` through `h6`.
    Heading(u8),
    Other,
}

impl TagKind {
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "strong" | "b" => TagKind::Mark(Mark::Bold),
            "em" | "i" => TagKind::Mark(Mark::Italic),
            "u" => TagKind::Mark(Mark::Underline),
            "s" | "strike" | "del" => TagKind::Mark(Mark::Strike),
            "span" => TagKind::Span,
            "p" | "div" => TagKind::Block,
            "br" => TagKind::LineBreak,
            "ul" => TagKind::List { ordered: false },
            "ol" => TagKind::List { ordered: true },
            "li" => TagKind::ListItem,
            "h1" => TagKind::Heading(1),
            "h2" => TagKind::Heading(2),
            "h3" => TagKind::Heading(3),
            "h4" => TagKind::Heading(4),
            "h5" => TagKind::Heading(5),
            "h6" => TagKind::Heading(6),
            _ => TagKind::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name() {
        assert_eq!(TagKind::from_name("b"), TagKind::Mark(Mark::Bold));
        assert_eq!(TagKind::from_name("EM"), TagKind::Mark(Mark::Italic));
        assert_eq!(TagKind::from_name("del"), TagKind::Mark(Mark::Strike));
        assert_eq!(TagKind::from_name("div"), TagKind::Block);
        assert_eq!(TagKind::from_name("ol"), TagKind::List { ordered: true });
        assert_eq!(TagKind::from_name("h3"), TagKind::Heading(3));
        assert_eq!(TagKind::from_name("h7"), TagKind::Other);
        assert_eq!(TagKind::from_name("a"), TagKind::Other);
    }

    #[test]
    fn test_mark_apply() {
        let mut style = StyleSet::default();
        Mark::Bold.apply(&mut style);
        Mark::Underline.apply(&mut style);
        assert_eq!(style.bold, Some(true));
        assert_eq!(style.underline, Some(Underline::styled(UnderlineStyle::Heavy)));
        assert_eq!(style.italic, None);
    }
}
