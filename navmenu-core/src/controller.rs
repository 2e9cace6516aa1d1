use crate::config::MenuConfig;
use crate::event::{EventResponse, MenuEvent, TapTarget};
use crate::geometry::InteractionMode;
use crate::state::{MenuState, NodeState};
use crate::surface::MenuSurface;
use crate::tree::{MenuTree, NodeId};

/// Owns open/repositioned state for every submenu-bearing node and applies
/// the hover, tap, outside-click and resize rules.
///
/// The controller never touches rendering directly: every state change is
/// pushed through [`MenuSurface::apply`] before the next measurement, so a
/// submenu is always laid out in its current state when it is measured.
#[derive(Debug, Clone)]
pub struct MenuController {
    config: MenuConfig,
    tree: MenuTree,
    state: MenuState,
}

impl MenuController {
    #[must_use]
    pub fn new(tree: MenuTree, config: MenuConfig) -> Self {
        Self {
            config,
            tree,
            state: MenuState::default(),
        }
    }

    #[must_use]
    pub const fn tree(&self) -> &MenuTree {
        &self.tree
    }

    #[must_use]
    pub const fn state(&self) -> &MenuState {
        &self.state
    }

    /// Adopt state already rendered by the host, e.g. classes present in markup.
    /// Nothing is projected.
    pub fn seed(&mut self, id: NodeId, state: NodeState) {
        if self.tree.contains(id) {
            self.state.set(id, state);
        }
    }

    #[must_use]
    pub fn mode<S: MenuSurface + ?Sized>(&self, surface: &S) -> InteractionMode {
        surface.viewport().mode(&self.config)
    }

    /// Route a host event to the matching handler.
    pub fn dispatch<S: MenuSurface + ?Sized>(
        &mut self,
        event: MenuEvent,
        surface: &mut S,
    ) -> EventResponse {
        log::trace!("menu event {event:?}");
        match event {
            MenuEvent::PointerEnter { node } => {
                self.pointer_enter(node, surface);
                EventResponse::PASS
            }
            MenuEvent::PointerLeave { node } => {
                self.pointer_leave(node, surface);
                EventResponse::PASS
            }
            MenuEvent::Tap { node, target } => self.tap(node, target, surface),
            MenuEvent::DocumentClick { container } => {
                self.outside_click(container, surface);
                EventResponse::PASS
            }
            MenuEvent::Resize => {
                self.resize(surface);
                EventResponse::PASS
            }
        }
    }

    /// Flip the node's submenu leftward if it would cross the right viewport edge.
    ///
    /// Only meaningful while the submenu is laid out; a hidden submenu measures
    /// as an empty box and always fits. Items without a submenu element are skipped.
    pub fn check_and_reposition<S: MenuSurface + ?Sized>(&mut self, id: NodeId, surface: &mut S) {
        if !self.tree.contains(id) {
            log::debug!("reposition skipped: {id} is not a submenu item");
            return;
        }
        if !surface.has_submenu(id) {
            log::debug!(
                "reposition skipped: {} has no submenu element",
                self.tree.describe(id)
            );
            return;
        }

        let current = self.state.get(id);
        self.update(
            id,
            NodeState {
                repositioned: false,
                ..current
            },
            surface,
        );

        let Some(rect) = surface.submenu_rect(id) else {
            return;
        };
        if rect.overflows_right(surface.viewport(), &self.config) {
            log::debug!(
                "{} overflows at right={:.1}, opening leftward",
                self.tree.describe(id),
                rect.right
            );
            self.update(
                id,
                NodeState {
                    repositioned: true,
                    ..current
                },
                surface,
            );
        }
    }

    /// Close every open node at any depth and clear every leftward flag,
    /// including flags seeded on items that were never opened.
    pub fn close_all_open_menus<S: MenuSurface + ?Sized>(&mut self, surface: &mut S) {
        for id in self.state.flagged_nodes() {
            self.update(id, NodeState::CLOSED, surface);
        }
    }

    pub fn pointer_enter<S: MenuSurface + ?Sized>(&mut self, id: NodeId, surface: &mut S) {
        if self.mode(surface) != InteractionMode::Hover || !self.tree.contains(id) {
            return;
        }
        let current = self.state.get(id);
        self.update(
            id,
            NodeState {
                open: true,
                ..current
            },
            surface,
        );
        self.check_and_reposition(id, surface);
    }

    pub fn pointer_leave<S: MenuSurface + ?Sized>(&mut self, id: NodeId, surface: &mut S) {
        if self.mode(surface) != InteractionMode::Hover || !self.tree.contains(id) {
            return;
        }
        self.update(id, NodeState::CLOSED, surface);
    }

    /// Toggle a node from a tap on its own link.
    ///
    /// Every open node outside the tapped node's ancestor chain is closed
    /// before the node itself opens, so only one branch is ever expanded.
    pub fn tap<S: MenuSurface + ?Sized>(
        &mut self,
        id: NodeId,
        target: TapTarget,
        surface: &mut S,
    ) -> EventResponse {
        if self.mode(surface) != InteractionMode::Tap
            || target != TapTarget::OwnLink
            || !self.tree.contains(id)
        {
            return EventResponse::PASS;
        }

        let was_open = self.state.is_open(id);
        let keep = self.tree.ancestors(id);
        for open in self.state.open_nodes() {
            if !keep.contains(&open) {
                self.update(open, NodeState::CLOSED, surface);
            }
        }

        if !was_open {
            self.update(
                id,
                NodeState {
                    open: true,
                    repositioned: false,
                },
                surface,
            );
            self.check_and_reposition(id, surface);
        }
        EventResponse::CONSUMED
    }

    /// Handle a document click; clicks outside every submenu item close all branches.
    pub fn outside_click<S: MenuSurface + ?Sized>(
        &mut self,
        container: Option<NodeId>,
        surface: &mut S,
    ) {
        if container.is_none() {
            self.close_all_open_menus(surface);
        }
    }

    /// Recompute placement of every open node. Open/closed state is unchanged.
    pub fn resize<S: MenuSurface + ?Sized>(&mut self, surface: &mut S) {
        for id in self.state.open_nodes() {
            self.check_and_reposition(id, surface);
        }
    }

    fn update<S: MenuSurface + ?Sized>(&mut self, id: NodeId, next: NodeState, surface: &mut S) {
        if self.state.set(id, next) {
            log::trace!("{} -> {next:?}", self.tree.describe(id));
            surface.apply(id, next);
        }
    }
}
