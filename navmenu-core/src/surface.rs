use std::collections::BTreeMap;

use crate::geometry::{Rect, Viewport};
use crate::state::NodeState;
use crate::tree::NodeId;

/// Host abstraction the controller renders through.
/// Platform-specific implementations should provide this
pub trait MenuSurface {
    /// Current layout viewport.
    fn viewport(&self) -> Viewport;

    /// Bounding box of the node's immediate submenu as currently laid out.
    ///
    /// Returns `None` when the item has no submenu element.
    fn submenu_rect(&self, id: NodeId) -> Option<Rect>;

    /// Whether the item owns a submenu element at all.
    fn has_submenu(&self, id: NodeId) -> bool {
        self.submenu_rect(id).is_some()
    }

    /// Render `state` for node `id`.
    fn apply(&mut self, id: NodeId, state: NodeState);
}

/// In-memory surface for tests and scenario replays.
///
/// Submenu boxes are fixed per node; `anchored_right` nodes are laid out
/// relative to the viewport's right edge so resizing moves them.
#[derive(Debug, Clone, Default)]
pub struct SimulatedSurface {
    pub viewport: Option<Viewport>,
    rects: BTreeMap<NodeId, Rect>,
    anchored_right: BTreeMap<NodeId, f64>,
    rendered: BTreeMap<NodeId, NodeState>,
    applied: Vec<(NodeId, NodeState)>,
}

impl SimulatedSurface {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport: Some(viewport),
            ..Self::default()
        }
    }

    /// Place a node's submenu at a fixed box.
    #[must_use]
    pub fn with_rect(mut self, id: NodeId, rect: Rect) -> Self {
        self.rects.insert(id, rect);
        self
    }

    /// Place a node's submenu `offset` pixels past the viewport's right edge
    /// (negative offsets sit inside the viewport).
    #[must_use]
    pub fn with_right_anchor(mut self, id: NodeId, offset: f64) -> Self {
        self.anchored_right.insert(id, offset);
        self
    }

    pub fn set_rect(&mut self, id: NodeId, rect: Rect) {
        self.rects.insert(id, rect);
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = Some(viewport);
    }

    /// Last state rendered for `id`.
    #[must_use]
    pub fn rendered(&self, id: NodeId) -> NodeState {
        self.rendered.get(&id).copied().unwrap_or_default()
    }

    /// Every projection in the order it happened.
    #[must_use]
    pub fn applied(&self) -> &[(NodeId, NodeState)] {
        &self.applied
    }

    pub fn clear_log(&mut self) {
        self.applied.clear();
    }
}

impl MenuSurface for SimulatedSurface {
    fn viewport(&self) -> Viewport {
        self.viewport.unwrap_or(Viewport::new(1280))
    }

    fn submenu_rect(&self, id: NodeId) -> Option<Rect> {
        if let Some(offset) = self.anchored_right.get(&id) {
            let right = f64::from(self.viewport().width) + offset;
            return Some(Rect::new(right - 200.0, 0.0, right, 240.0));
        }
        self.rects.get(&id).copied()
    }

    fn apply(&mut self, id: NodeId, state: NodeState) {
        self.rendered.insert(id, state);
        self.applied.push((id, state));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn right_anchor_follows_viewport() {
        let mut surface =
            SimulatedSurface::new(Viewport::new(1000)).with_right_anchor(NodeId(0), 5.0);
        assert_eq!(surface.submenu_rect(NodeId(0)).map(|r| r.right), Some(1005.0));
        surface.set_viewport(Viewport::new(1400));
        assert_eq!(surface.submenu_rect(NodeId(0)).map(|r| r.right), Some(1405.0));
        assert_eq!(surface.submenu_rect(NodeId(1)), None);
    }
}
