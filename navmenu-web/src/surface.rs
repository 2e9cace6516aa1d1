use navmenu_core::{MenuSurface, MenuTree, NodeId, NodeState, Rect, Viewport};
use web_sys::{Element, Window};

use crate::dom;
use crate::scan::node_in;

/// Renders controller state as CSS classes on the scanned item elements and
/// measures submenus from live layout.
#[derive(Debug, Clone)]
pub struct DomSurface {
    window: Window,
    tree: MenuTree,
    items: Vec<Element>,
}

impl DomSurface {
    #[must_use]
    pub fn new(window: Window, tree: MenuTree, items: Vec<Element>) -> Self {
        Self {
            window,
            tree,
            items,
        }
    }

    /// Node whose item element is exactly `el`.
    #[must_use]
    pub fn node_of(&self, el: &Element) -> Option<NodeId> {
        node_in(&self.items, el)
    }

    fn item(&self, id: NodeId) -> Option<&Element> {
        usize::try_from(id.0).ok().and_then(|idx| self.items.get(idx))
    }

    /// The item's immediate submenu element, chosen by its naming convention.
    fn submenu(&self, id: NodeId) -> Option<Element> {
        let style = self.tree.get(id)?.style;
        self.item(id)?
            .query_selector(style.submenu_selector())
            .ok()
            .flatten()
    }
}

impl MenuSurface for DomSurface {
    fn viewport(&self) -> Viewport {
        dom::viewport(&self.window)
    }

    fn submenu_rect(&self, id: NodeId) -> Option<Rect> {
        let rect = self.submenu(id)?.get_bounding_client_rect();
        Some(Rect::new(rect.left(), rect.top(), rect.right(), rect.bottom()))
    }

    fn has_submenu(&self, id: NodeId) -> bool {
        self.submenu(id).is_some()
    }

    fn apply(&mut self, id: NodeId, state: NodeState) {
        let Some(item) = self.item(id) else {
            return;
        };
        let classes = item.class_list();
        for (class, present) in state.class_toggles() {
            if let Err(err) = classes.toggle_with_force(class, present) {
                log::warn!(
                    "could not toggle {class} on menu item {id}: {}",
                    dom::js_error_message(&err)
                );
            }
        }
    }
}
