//! Navigation Menu Controller
//!
//! Platform-agnostic state, geometry and interaction rules for a multi-level
//! dropdown navigation menu. Hosts (the browser binding, the scenario tester)
//! supply a [`MenuSurface`] that measures submenus and renders node state.

pub mod config;
pub mod controller;
pub mod error;
pub mod event;
pub mod geometry;
pub mod state;
pub mod style;
pub mod surface;
pub mod tree;

// Re-export commonly used types
pub use config::MenuConfig;
pub use controller::MenuController;
pub use error::MenuError;
pub use event::{EventResponse, MenuEvent, TapTarget};
pub use geometry::{InteractionMode, Rect, Viewport};
pub use state::{MenuState, NodeState};
pub use style::SubmenuStyle;
pub use surface::{MenuSurface, SimulatedSurface};
pub use tree::{MenuNode, MenuOutline, MenuTree, MenuTreeBuilder, NodeId};
