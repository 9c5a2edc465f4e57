//! Thin facade over the `html5ever` reference-counted DOM.

use html5ever::driver::ParseOpts;
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use html5ever::tree_builder::TreeBuilderOpts;
use markup5ever_rcdom::{Handle, NodeData, RcDom};
use richtext_core::{Error, Result};

/// A parsed HTML fragment.
///
/// Owns the whole DOM: dropping an `RcDom` detaches every node's children,
/// so handles into the tree are only walkable while the fragment lives.
pub struct Fragment {
    dom: RcDom,
}

impl Fragment {
    /// Parse an HTML fragment the way a browser parses `innerHTML` content
    /// of a body element.
    pub fn parse(html: &str) -> Result<Self> {
        let opts = ParseOpts {
            tree_builder: TreeBuilderOpts {
                drop_doctype: true,
                ..Default::default()
            },
            ..Default::default()
        };
        let dom = parse_document(RcDom::default(), opts)
            .from_utf8()
            .read_from(&mut html.as_bytes())
            .map_err(|e| Error::HtmlParseError(e.to_string()))?;

        Ok(Self { dom })
    }

    /// The element whose children are the fragment's content.
    pub fn root(&self) -> Handle {
        find_element(&self.dom.document, "body").unwrap_or_else(|| self.dom.document.clone())
    }
}

/// Lowercase tag name of an element node.
pub fn tag_name(handle: &Handle) -> Option<&str> {
    match &handle.data {
        NodeData::Element { name, .. } => Some(&*name.local),
        _ => None,
    }
}

/// Value of an attribute on an element node.
pub fn attr(handle: &Handle, key: &str) -> Option<String> {
    match &handle.data {
        NodeData::Element { attrs, .. } => attrs
            .borrow()
            .iter()
            .find(|a| &*a.name.local == key)
            .map(|a| String::from(&*a.value)),
        _ => None,
    }
}

/// Whether the element's class list contains `class`.
pub fn has_class(handle: &Handle, class: &str) -> bool {
    attr(handle, "class").is_some_and(|list| list.split_whitespace().any(|c| c == class))
}

fn find_element(handle: &Handle, tag: &str) -> Option<Handle> {
    if tag_name(handle) == Some(tag) {
        return Some(handle.clone());
    }
    handle
        .children
        .borrow()
        .iter()
        .find_map(|child| find_element(child, tag))
}
