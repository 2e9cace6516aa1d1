use navmenu_core::style::ITEM_SELECTOR;
use navmenu_core::{MenuNode, MenuTree, NodeId, NodeState, SubmenuStyle};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use crate::WebMenuError;
use crate::dom::{class_names, js_error_message};

/// Result of scanning the navigation markup.
#[derive(Debug, Clone)]
pub struct ScannedMenu {
    pub tree: MenuTree,
    /// Item elements indexed by `NodeId`.
    pub items: Vec<Element>,
    /// State already rendered in the markup.
    pub initial: Vec<(NodeId, NodeState)>,
}

/// Position of `el` among scanned items, as a node id.
#[must_use]
pub fn node_in(items: &[Element], el: &Element) -> Option<NodeId> {
    items
        .iter()
        .position(|item| item == el)
        .and_then(|idx| u32::try_from(idx).ok())
        .map(NodeId)
}

/// Collect every submenu-bearing item in the document, in document order.
///
/// Each item's style is resolved once here; its parent is the nearest
/// enclosing submenu-bearing item.
///
/// # Errors
///
/// Returns an error if the selector query fails.
pub fn scan(doc: &Document) -> Result<ScannedMenu, WebMenuError> {
    let list = doc
        .query_selector_all(ITEM_SELECTOR)
        .map_err(|e| WebMenuError::Dom(js_error_message(&e)))?;

    let mut builder = MenuTree::builder();
    let mut items: Vec<Element> = Vec::new();
    let mut initial = Vec::new();

    for idx in 0..list.length() {
        let Some(el) = list.get(idx).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let classes = class_names(&el);
        let Some(style) = SubmenuStyle::from_classes(classes.iter().map(String::as_str)) else {
            continue;
        };
        let Ok(raw_id) = u32::try_from(items.len()) else {
            break;
        };
        let id = NodeId(raw_id);
        let parent = el
            .parent_element()
            .and_then(|p| p.closest(ITEM_SELECTOR).ok().flatten())
            .and_then(|p| node_in(&items, &p));

        builder.push(MenuNode {
            id,
            style,
            parent,
            label: item_label(&el),
        })?;

        let state = NodeState::from_classes(classes.iter().map(String::as_str));
        if state != NodeState::CLOSED {
            initial.push((id, state));
        }
        items.push(el);
    }

    Ok(ScannedMenu {
        tree: builder.build(),
        items,
        initial,
    })
}

/// Text of the item's own link, for diagnostics.
fn item_label(el: &Element) -> Option<String> {
    let children = el.children();
    (0..children.length())
        .filter_map(|i| children.item(i))
        .find(|child| child.tag_name().eq_ignore_ascii_case("a"))
        .and_then(|link| link.text_content())
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}
