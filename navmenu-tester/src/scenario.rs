use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use navmenu_core::{MenuConfig, MenuOutline, Rect, TapTarget};
use serde::{Deserialize, Serialize};

/// A scripted interaction with a menu and the state expected along the way.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub config: Option<MenuConfig>,
    /// Initial viewport width in CSS pixels.
    pub viewport: u32,
    pub menu: Vec<MenuOutline>,
    /// Fixed submenu boxes, by node name.
    #[serde(default)]
    pub rects: BTreeMap<String, Rect>,
    /// Submenus laid out relative to the right viewport edge, by node name.
    #[serde(default)]
    pub right_anchors: BTreeMap<String, f64>,
    pub steps: Vec<Step>,
}

impl Scenario {
    /// Load a scenario from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("failed to parse {}", path.display()))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Step {
    #[serde(flatten)]
    pub action: Action,
    #[serde(default)]
    pub expect: Option<Expect>,
}

impl Step {
    #[must_use]
    pub const fn new(action: Action) -> Self {
        Self {
            action,
            expect: None,
        }
    }

    #[must_use]
    pub fn expecting(mut self, expect: Expect) -> Self {
        self.expect = Some(expect);
        self
    }
}

/// Host events a step can simulate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    Hover {
        node: String,
    },
    Leave {
        node: String,
    },
    Tap {
        node: String,
        #[serde(default = "own_link")]
        target: TapTarget,
    },
    /// Document click; `inside` names the enclosing submenu item, if any.
    Click {
        #[serde(default)]
        inside: Option<String>,
    },
    Resize {
        width: u32,
    },
    CloseAll,
    Reposition {
        node: String,
    },
}

const fn own_link() -> TapTarget {
    TapTarget::OwnLink
}

impl Action {
    #[must_use]
    pub fn hover(node: &str) -> Self {
        Self::Hover {
            node: node.to_string(),
        }
    }

    #[must_use]
    pub fn leave(node: &str) -> Self {
        Self::Leave {
            node: node.to_string(),
        }
    }

    #[must_use]
    pub fn tap(node: &str) -> Self {
        Self::Tap {
            node: node.to_string(),
            target: TapTarget::OwnLink,
        }
    }

    #[must_use]
    pub fn tap_inside(node: &str) -> Self {
        Self::Tap {
            node: node.to_string(),
            target: TapTarget::Other,
        }
    }

    #[must_use]
    pub const fn click_outside() -> Self {
        Self::Click { inside: None }
    }

    #[must_use]
    pub const fn resize(width: u32) -> Self {
        Self::Resize { width }
    }
}

/// Assertions checked after a step. Omitted fields are not checked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expect {
    /// Exact set of open nodes.
    #[serde(default)]
    pub open: Option<Vec<String>>,
    /// Exact set of repositioned nodes.
    #[serde(default)]
    pub repositioned: Option<Vec<String>>,
    /// Whether the originating event should be swallowed.
    #[serde(default)]
    pub consumed: Option<bool>,
}

impl Expect {
    pub fn open(names: &[&str]) -> Self {
        Self {
            open: Some(names.iter().map(ToString::to_string).collect()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn repositioned(mut self, names: &[&str]) -> Self {
        self.repositioned = Some(names.iter().map(ToString::to_string).collect());
        self
    }

    #[must_use]
    pub const fn consumed(mut self, consumed: bool) -> Self {
        self.consumed = Some(consumed);
        self
    }
}
