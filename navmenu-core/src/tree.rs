use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::MenuError;
use crate::style::SubmenuStyle;

/// Stable identity of a submenu-bearing node for the lifetime of a controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u32);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Normalized descriptor of a submenu-bearing item, resolved once at scan time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuNode {
    pub id: NodeId,
    pub style: SubmenuStyle,
    /// Nearest submenu-bearing ancestor, `None` for items in the top bar.
    pub parent: Option<NodeId>,
    #[serde(default)]
    pub label: Option<String>,
}

/// The submenu-bearing items of a navigation bar and their nesting.
///
/// Items without a submenu are not part of the tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MenuTree {
    nodes: BTreeMap<NodeId, MenuNode>,
}

impl MenuTree {
    #[must_use]
    pub fn builder() -> MenuTreeBuilder {
        MenuTreeBuilder::default()
    }

    /// Build a tree from a nested outline, numbering nodes in document order.
    ///
    /// # Errors
    ///
    /// Returns an error if two outline entries share a name.
    pub fn from_outline(roots: &[MenuOutline]) -> Result<Self, MenuError> {
        let mut builder = Self::builder();
        let mut next = 0_u32;
        for root in roots {
            push_outline(&mut builder, root, None, &mut next)?;
        }
        Ok(builder.build())
    }

    /// Parse a JSON array of [`MenuOutline`] entries.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or names collide.
    pub fn from_json(json: &str) -> Result<Self, MenuError> {
        let roots: Vec<MenuOutline> = serde_json::from_str(json)?;
        Self::from_outline(&roots)
    }

    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&MenuNode> {
        self.nodes.get(&id)
    }

    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MenuNode> {
        self.nodes.values()
    }

    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.keys().copied()
    }

    pub fn roots(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .values()
            .filter(|n| n.parent.is_none())
            .map(|n| n.id)
    }

    pub fn children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .values()
            .filter(move |n| n.parent == Some(id))
            .map(|n| n.id)
    }

    /// Ancestors of `id`, nearest first. Empty for unknown ids.
    #[must_use]
    pub fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut cursor = self.get(id).and_then(|n| n.parent);
        while let Some(parent) = cursor {
            out.push(parent);
            cursor = self.get(parent).and_then(|n| n.parent);
        }
        out
    }

    #[must_use]
    pub fn is_ancestor(&self, ancestor: NodeId, of: NodeId) -> bool {
        self.ancestors(of).contains(&ancestor)
    }

    /// Nesting depth, 0 for top-bar items.
    #[must_use]
    pub fn depth(&self, id: NodeId) -> usize {
        self.ancestors(id).len()
    }

    /// Find a node by its label.
    #[must_use]
    pub fn lookup(&self, label: &str) -> Option<NodeId> {
        self.nodes
            .values()
            .find(|n| n.label.as_deref() == Some(label))
            .map(|n| n.id)
    }

    /// Human-readable name for logs and reports.
    #[must_use]
    pub fn describe(&self, id: NodeId) -> String {
        self.get(id)
            .and_then(|n| n.label.clone())
            .unwrap_or_else(|| id.to_string())
    }
}

fn push_outline(
    builder: &mut MenuTreeBuilder,
    entry: &MenuOutline,
    parent: Option<NodeId>,
    next: &mut u32,
) -> Result<(), MenuError> {
    let id = NodeId(*next);
    *next += 1;
    if builder.labels.contains_key(&entry.name) {
        return Err(MenuError::DuplicateName(entry.name.clone()));
    }
    builder.labels.insert(entry.name.clone(), id);
    builder.push(MenuNode {
        id,
        style: entry.style,
        parent,
        label: Some(entry.name.clone()),
    })?;
    for child in &entry.children {
        push_outline(builder, child, Some(id), next)?;
    }
    Ok(())
}

/// Incremental constructor used by DOM scans, where parents are seen before children.
#[derive(Debug, Default)]
pub struct MenuTreeBuilder {
    nodes: BTreeMap<NodeId, MenuNode>,
    labels: BTreeMap<String, NodeId>,
}

impl MenuTreeBuilder {
    /// Register a node under an already registered parent.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` is already registered or `parent` is unknown.
    pub fn add(
        &mut self,
        id: NodeId,
        style: SubmenuStyle,
        parent: Option<NodeId>,
    ) -> Result<&mut Self, MenuError> {
        self.push(MenuNode {
            id,
            style,
            parent,
            label: None,
        })?;
        Ok(self)
    }

    /// Register a fully described node.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is already registered or the parent is unknown.
    pub fn push(&mut self, node: MenuNode) -> Result<&mut Self, MenuError> {
        if self.nodes.contains_key(&node.id) {
            return Err(MenuError::DuplicateNode(node.id));
        }
        if let Some(parent) = node.parent
            && !self.nodes.contains_key(&parent)
        {
            return Err(MenuError::UnknownParent {
                node: node.id,
                parent,
            });
        }
        self.nodes.insert(node.id, node);
        Ok(self)
    }

    #[must_use]
    pub fn build(self) -> MenuTree {
        MenuTree { nodes: self.nodes }
    }
}

/// Nested description of a menu, as written in scenario files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuOutline {
    pub name: String,
    #[serde(default = "default_style")]
    pub style: SubmenuStyle,
    #[serde(default)]
    pub children: Vec<MenuOutline>,
}

const fn default_style() -> SubmenuStyle {
    SubmenuStyle::DropRight
}

impl MenuOutline {
    #[must_use]
    pub fn new(name: impl Into<String>, style: SubmenuStyle) -> Self {
        Self {
            name: name.into(),
            style,
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_children(mut self, children: Vec<Self>) -> Self {
        self.children = children;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn district_tree() -> MenuTree {
        MenuTree::from_outline(&[
            MenuOutline::new("lgus", SubmenuStyle::DropDown).with_children(vec![
                MenuOutline::new("district-1", SubmenuStyle::DropRight).with_children(vec![
                    MenuOutline::new("cities-1", SubmenuStyle::DropRight),
                ]),
                MenuOutline::new("district-2", SubmenuStyle::DropRight),
            ]),
            MenuOutline::new("services", SubmenuStyle::DropDown),
        ])
        .unwrap()
    }

    #[test]
    fn outline_numbers_nodes_in_document_order() {
        let tree = district_tree();
        assert_eq!(tree.len(), 5);
        assert_eq!(tree.lookup("lgus"), Some(NodeId(0)));
        assert_eq!(tree.lookup("cities-1"), Some(NodeId(2)));
        assert_eq!(tree.lookup("services"), Some(NodeId(4)));
        assert_eq!(tree.roots().collect::<Vec<_>>(), vec![NodeId(0), NodeId(4)]);
    }

    #[test]
    fn ancestors_walk_to_the_top_bar() {
        let tree = district_tree();
        let city = tree.lookup("cities-1").unwrap();
        assert_eq!(tree.ancestors(city), vec![NodeId(1), NodeId(0)]);
        assert_eq!(tree.depth(city), 2);
        assert!(tree.is_ancestor(NodeId(0), city));
        assert!(!tree.is_ancestor(NodeId(3), city));
        assert!(tree.ancestors(NodeId(99)).is_empty());
    }

    #[test]
    fn children_lists_direct_descendants_only() {
        let tree = district_tree();
        let kids: Vec<_> = tree.children(NodeId(0)).collect();
        assert_eq!(kids, vec![NodeId(1), NodeId(3)]);
    }

    #[test]
    fn builder_rejects_unknown_parent_and_duplicates() {
        let mut builder = MenuTree::builder();
        builder.add(NodeId(0), SubmenuStyle::DropDown, None).unwrap();
        let dup = builder.add(NodeId(0), SubmenuStyle::DropDown, None);
        assert!(matches!(dup, Err(MenuError::DuplicateNode(NodeId(0)))));
        let orphan = builder.add(NodeId(1), SubmenuStyle::DropRight, Some(NodeId(7)));
        assert!(matches!(
            orphan,
            Err(MenuError::UnknownParent {
                node: NodeId(1),
                parent: NodeId(7)
            })
        ));
    }

    #[test]
    fn outline_rejects_duplicate_names() {
        let err = MenuTree::from_outline(&[
            MenuOutline::new("a", SubmenuStyle::DropDown),
            MenuOutline::new("a", SubmenuStyle::DropRight),
        ])
        .unwrap_err();
        assert!(matches!(err, MenuError::DuplicateName(ref name) if name == "a"));
    }

    #[test]
    fn json_outline_defaults_style() {
        let tree =
            MenuTree::from_json(r#"[{ "name": "top", "children": [{ "name": "inner" }] }]"#)
                .unwrap();
        let inner = tree.get(tree.lookup("inner").unwrap()).unwrap();
        assert_eq!(inner.style, SubmenuStyle::DropRight);
        assert_eq!(inner.parent, Some(NodeId(0)));
    }
}
