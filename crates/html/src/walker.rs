//! HTML tree walker producing styled runs.
//!
//! Walks the DOM depth-first, carrying the inherited style down as an owned
//! snapshot. Each element clones its parent's style before adding its own
//! contribution, so nothing a child adds is visible to its siblings, and an
//! emitted run never changes afterwards.

use crate::css::{self, InlineStyle};
use crate::dom::{self, Fragment};
use crate::tag::TagKind;
use markup5ever_rcdom::{Handle, NodeData};
use richtext_core::{push_line_break, Error, Result, StyleSet, StyledRun};

/// Paragraph spacing after headings, in points.
pub const HEADING_SPACE_AFTER: u32 = 12;

/// Font applied by [`HtmlConverter::for_quill`] when no font is inherited.
/// Covers most scripts, so mixed-language text renders.
pub const QUILL_FONT_FACE: &str = "Arial Unicode MS";

/// Class Quill puts on its own UI elements inside content.
pub const DEFAULT_UI_CLASS: &str = "ql-ui";

/// Deepest element nesting the walkers descend into before giving up.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Error for input nested deeper than [`MAX_NESTING_DEPTH`].
pub(crate) fn check_depth(depth: usize) -> Result<()> {
    if depth > MAX_NESTING_DEPTH {
        return Err(Error::HtmlParseError(format!(
            "nesting too deep (more than {} levels)",
            MAX_NESTING_DEPTH
        )));
    }
    Ok(())
}

/// Converter for editor-produced HTML.
#[derive(Debug, Clone)]
pub struct HtmlConverter {
    /// Font face for runs that inherit none.
    default_font_face: Option<String>,
    /// Elements with this class are editor chrome and skipped.
    ui_class: String,
}

impl Default for HtmlConverter {
    fn default() -> Self {
        Self {
            default_font_face: None,
            ui_class: DEFAULT_UI_CLASS.to_string(),
        }
    }
}

impl HtmlConverter {
    /// Create a converter without a font fallback.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a converter for Quill output, with its multi-script font fallback.
    pub fn for_quill() -> Self {
        Self::new().with_default_font_face(QUILL_FONT_FACE)
    }

    /// Set the font face applied when none is inherited.
    pub fn with_default_font_face(mut self, face: impl Into<String>) -> Self {
        self.default_font_face = Some(face.into());
        self
    }

    /// Set the class that marks editor UI elements.
    pub fn with_ui_class(mut self, class: impl Into<String>) -> Self {
        self.ui_class = class.into();
        self
    }

    /// Convert an HTML fragment into styled runs.
    pub fn convert(&self, html: &str) -> Result<Vec<StyledRun>> {
        if html.trim().is_empty() {
            return Ok(Vec::new());
        }

        let fragment = Fragment::parse(html)?;
        let runs = self.convert_node(&fragment.root())?;

        log::debug!("Converted {} bytes of HTML into {} runs", html.len(), runs.len());

        Ok(runs)
    }

    /// Convert the children of an already parsed node, starting from an
    /// empty style at indent level 0.
    ///
    /// Fails if elements nest deeper than [`MAX_NESTING_DEPTH`].
    pub fn convert_node(&self, root: &Handle) -> Result<Vec<StyledRun>> {
        let mut runs = Vec::new();
        self.walk_children(root, &StyleSet::default(), 0, 0, &mut runs)?;
        Ok(runs)
    }

    pub(crate) fn walk_children(
        &self,
        node: &Handle,
        inherited: &StyleSet,
        indent_level: u32,
        depth: usize,
        out: &mut Vec<StyledRun>,
    ) -> Result<()> {
        for child in node.children.borrow().iter() {
            self.walk_node(child, inherited, indent_level, depth, out)?;
        }
        Ok(())
    }

    fn walk_node(
        &self,
        node: &Handle,
        inherited: &StyleSet,
        indent_level: u32,
        depth: usize,
        out: &mut Vec<StyledRun>,
    ) -> Result<()> {
        match &node.data {
            NodeData::Text { contents } => {
                let contents = contents.borrow();
                if !contents.trim().is_empty() {
                    self.emit_text(&contents, inherited, indent_level, out);
                }
                Ok(())
            }
            NodeData::Element { .. } => {
                self.walk_element(node, inherited, indent_level, depth + 1, out)
            }
            _ => Ok(()),
        }
    }

    fn emit_text(
        &self,
        text: &str,
        inherited: &StyleSet,
        indent_level: u32,
        out: &mut Vec<StyledRun>,
    ) {
        let mut style = inherited.clone();
        if indent_level > 0 && style.bullet.is_none() {
            style.indent_level = Some(indent_level);
        }
        if style.font_face.is_none() {
            style.font_face = self.default_font_face.clone();
        }
        out.push(StyledRun::styled(text, style));
    }

    fn walk_element(
        &self,
        node: &Handle,
        inherited: &StyleSet,
        indent_level: u32,
        depth: usize,
        out: &mut Vec<StyledRun>,
    ) -> Result<()> {
        check_depth(depth)?;
        let Some(tag) = dom::tag_name(node) else {
            return Ok(());
        };
        if dom::has_class(node, &self.ui_class) {
            log::debug!("Skipping editor UI element <{}>", tag);
            return Ok(());
        }

        let inline = dom::attr(node, "style")
            .map(|declarations| InlineStyle::parse(&declarations))
            .unwrap_or_default();
        let mut style = inherited.clone();
        if let Some(align) = dom::attr(node, "class")
            .and_then(|class| css::alignment_from_class(&class))
            .or(inline.align)
        {
            style.align = Some(align);
        }

        match TagKind::from_name(tag) {
            TagKind::Mark(mark) => mark.apply(&mut style),
            TagKind::Span => {
                for mark in inline.marks() {
                    mark.apply(&mut style);
                }
                if inline.font_size.is_some() {
                    style.font_size = inline.font_size;
                }
            }
            TagKind::Block => {
                self.walk_children(node, &style, indent_level, depth, out)?;
                push_line_break(out);
                return Ok(());
            }
            TagKind::LineBreak => {
                push_line_break(out);
                return Ok(());
            }
            TagKind::List { ordered } => {
                return self.process_list(node, indent_level, ordered, depth, out);
            }
            TagKind::ListItem => style.indent_level = Some(indent_level),
            TagKind::Heading(_) => {
                style.bold = Some(true);
                style.para_space_after = Some(HEADING_SPACE_AFTER);
            }
            TagKind::Other => {}
        }

        self.walk_children(node, &style, indent_level, depth, out)
    }
}
