use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::style::{DROP_LEFT_CLASS, OPEN_CLASS};
use crate::tree::NodeId;

/// Visibility and placement of one submenu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NodeState {
    pub open: bool,
    pub repositioned: bool,
}

impl NodeState {
    pub const CLOSED: Self = Self {
        open: false,
        repositioned: false,
    };

    /// Class toggles that render this state: `(class, present)`.
    #[must_use]
    pub const fn class_toggles(self) -> [(&'static str, bool); 2] {
        [(OPEN_CLASS, self.open), (DROP_LEFT_CLASS, self.repositioned)]
    }

    /// Recover state from an item's class list.
    #[must_use]
    pub fn from_classes<'a>(classes: impl IntoIterator<Item = &'a str>) -> Self {
        let mut state = Self::CLOSED;
        for class in classes {
            if class == OPEN_CLASS {
                state.open = true;
            } else if class == DROP_LEFT_CLASS {
                state.repositioned = true;
            }
        }
        state
    }
}

/// Per-node state keyed by node identity. Absent entries are closed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuState {
    nodes: BTreeMap<NodeId, NodeState>,
}

impl MenuState {
    #[must_use]
    pub fn get(&self, id: NodeId) -> NodeState {
        self.nodes.get(&id).copied().unwrap_or_default()
    }

    #[must_use]
    pub fn is_open(&self, id: NodeId) -> bool {
        self.get(id).open
    }

    #[must_use]
    pub fn is_repositioned(&self, id: NodeId) -> bool {
        self.get(id).repositioned
    }

    /// Store `state`, returning whether anything changed.
    pub fn set(&mut self, id: NodeId, state: NodeState) -> bool {
        let previous = self.get(id);
        if state == NodeState::CLOSED {
            self.nodes.remove(&id);
        } else {
            self.nodes.insert(id, state);
        }
        previous != state
    }

    /// Open nodes in id order, which is document order for scanned trees.
    #[must_use]
    pub fn open_nodes(&self) -> Vec<NodeId> {
        self.nodes
            .iter()
            .filter(|(_, s)| s.open)
            .map(|(id, _)| *id)
            .collect()
    }

    /// Every node carrying any flag.
    #[must_use]
    pub fn flagged_nodes(&self) -> Vec<NodeId> {
        self.nodes.keys().copied().collect()
    }

    #[must_use]
    pub fn is_all_closed(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_entries_are_not_stored() {
        let mut state = MenuState::default();
        assert!(state.set(
            NodeId(1),
            NodeState {
                open: true,
                repositioned: false
            }
        ));
        assert_eq!(state.open_nodes(), vec![NodeId(1)]);
        assert!(state.set(NodeId(1), NodeState::CLOSED));
        assert!(state.is_all_closed());
        assert!(!state.set(NodeId(1), NodeState::CLOSED));
    }

    #[test]
    fn class_round_trip_for_markup_seeding() {
        let state = NodeState::from_classes(["has-drop-right", "open", "drop-left"]);
        assert!(state.open && state.repositioned);
        assert_eq!(
            state.class_toggles(),
            [("open", true), ("drop-left", true)]
        );
        assert_eq!(NodeState::from_classes(["has-dropright"]), NodeState::CLOSED);
    }
}
