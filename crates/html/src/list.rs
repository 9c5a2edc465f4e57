//! List processing for `<ul>` and `<ol>` elements.

use crate::css;
use crate::dom;
use crate::walker::HtmlConverter;
use markup5ever_rcdom::Handle;
use richtext_core::{push_line_break, Bullet, BulletKind, Result, StyleSet, StyledRun};

/// Paragraph spacing after each list item, in points.
pub const LIST_ITEM_SPACE_AFTER: u32 = 6;

/// State for one list item while its content is converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ListContext {
    indent_level: u32,
    ordered: bool,
    item_index: usize,
}

impl ListContext {
    /// Context for an item, honoring Quill's `data-list` and `ql-indent-N`
    /// item attributes over what the container implies.
    fn for_item(item: &Handle, indent_level: u32, ordered: bool, item_index: usize) -> Self {
        let ordered = match dom::attr(item, "data-list").as_deref() {
            Some("ordered") => true,
            Some("bullet") | Some("checked") | Some("unchecked") => false,
            _ => ordered,
        };
        let extra_indent = dom::attr(item, "class")
            .map(|class| css::quill_indent(&class))
            .unwrap_or(0);

        Self {
            indent_level: indent_level + extra_indent,
            ordered,
            item_index,
        }
    }

    fn bullet_kind(&self) -> BulletKind {
        if self.ordered {
            BulletKind::Number
        } else {
            BulletKind::Bullet
        }
    }

    /// Merge the item's marker into the style of its first run.
    fn apply_marker(&self, style: &mut StyleSet) {
        style.bullet = Some(Bullet::new(self.bullet_kind()));
        style.indent_level = Some(self.indent_level);
        style.para_space_after = Some(LIST_ITEM_SPACE_AFTER);
    }
}

impl HtmlConverter {
    /// Convert the `<li>` children of a list, appending to `out`.
    ///
    /// Item content starts from an empty style one level deeper than the
    /// list; only the first run of each item carries the marker. Items are
    /// separated by line breaks and the list is closed with one more.
    pub(crate) fn process_list(
        &self,
        list: &Handle,
        indent_level: u32,
        ordered: bool,
        depth: usize,
        out: &mut Vec<StyledRun>,
    ) -> Result<()> {
        let items: Vec<Handle> = list
            .children
            .borrow()
            .iter()
            .filter(|child| dom::tag_name(child) == Some("li"))
            .cloned()
            .collect();

        log::debug!(
            "Processing {} list with {} items at indent level {}",
            if ordered { "numbered" } else { "bulleted" },
            items.len(),
            indent_level
        );

        for (item_index, item) in items.iter().enumerate() {
            let context = ListContext::for_item(item, indent_level, ordered, item_index);
            let mut item_runs = Vec::new();
            self.walk_children(
                item,
                &StyleSet::default(),
                context.indent_level + 1,
                depth + 1,
                &mut item_runs,
            )?;

            match item_runs.first_mut() {
                Some(first) => context.apply_marker(first.style_mut()),
                None => log::trace!("List item {} produced no runs", context.item_index),
            }

            out.extend(item_runs);
            if item_index + 1 < items.len() {
                push_line_break(out);
            }
        }

        if !out.is_empty() {
            push_line_break(out);
        }
        Ok(())
    }
}
