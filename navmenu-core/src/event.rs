use serde::{Deserialize, Serialize};

use crate::tree::NodeId;

/// Where a tap on a submenu-bearing item landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TapTarget {
    /// The item's own link, i.e. the submenu toggler.
    OwnLink,
    /// Anything else inside the item: nested links, padding, leaf entries.
    Other,
}

/// Input the controller reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum MenuEvent {
    PointerEnter { node: NodeId },
    PointerLeave { node: NodeId },
    Tap { node: NodeId, target: TapTarget },
    /// A document-level click. `container` is the nearest submenu-bearing
    /// item enclosing the click target, if any.
    DocumentClick { container: Option<NodeId> },
    /// The viewport changed size; the surface reports the new width.
    Resize,
}

/// What the host must do with the originating browser event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EventResponse {
    pub prevent_default: bool,
    pub stop_propagation: bool,
}

impl EventResponse {
    /// Let the event continue untouched.
    pub const PASS: Self = Self {
        prevent_default: false,
        stop_propagation: false,
    };

    /// The event was a submenu toggle; swallow it.
    pub const CONSUMED: Self = Self {
        prevent_default: true,
        stop_propagation: true,
    };
}
