use std::cell::RefCell;
use std::rc::Rc;

use navmenu_core::style::ITEM_SELECTOR;
use navmenu_core::{
    EventResponse, MenuConfig, MenuController, MenuEvent, MenuState, NodeId, TapTarget,
};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, Window};

use crate::WebMenuError;
use crate::dom::js_error_message;
use crate::scan::scan;
use crate::surface::DomSurface;

/// Controller plus the DOM surface it renders through.
#[derive(Debug)]
pub struct MenuSession {
    pub controller: MenuController,
    pub surface: DomSurface,
}

impl MenuSession {
    pub fn handle(&mut self, event: MenuEvent) -> EventResponse {
        self.controller.dispatch(event, &mut self.surface)
    }
}

/// One registered listener. Dropping it unregisters the callback.
struct Subscription {
    target: EventTarget,
    kind: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.callback.as_ref().unchecked_ref());
    }
}

/// Every listener attached by [`MenuBinding::attach`].
///
/// The binding owns its subscriptions: dropping it (or calling
/// [`MenuBinding::teardown`]) detaches them all.
pub struct MenuBinding {
    session: Rc<RefCell<MenuSession>>,
    subscriptions: Vec<Subscription>,
}

impl std::fmt::Debug for MenuBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MenuBinding")
            .field("subscriptions", &self.subscriptions.len())
            .finish_non_exhaustive()
    }
}

impl MenuBinding {
    /// Scan the document and attach hover, click, outside-click and resize listeners.
    ///
    /// # Errors
    ///
    /// Returns an error if the scan fails or a listener cannot be registered.
    pub fn attach(win: &Window, doc: &Document, config: MenuConfig) -> Result<Self, WebMenuError> {
        let scanned = scan(doc)?;
        let mut controller = MenuController::new(scanned.tree.clone(), config);
        for (id, state) in &scanned.initial {
            controller.seed(*id, *state);
        }
        let items = scanned.items;
        let session = Rc::new(RefCell::new(MenuSession {
            controller,
            surface: DomSurface::new(win.clone(), scanned.tree, items.clone()),
        }));

        let mut subscriptions = Vec::with_capacity(items.len() * 3 + 2);
        for (idx, item) in items.iter().enumerate() {
            let Ok(raw) = u32::try_from(idx) else {
                break;
            };
            let node = NodeId(raw);
            subscriptions.push(subscribe(item, "mouseenter", &session, move |s, _| {
                s.handle(MenuEvent::PointerEnter { node });
            })?);
            subscriptions.push(subscribe(item, "mouseleave", &session, move |s, _| {
                s.handle(MenuEvent::PointerLeave { node });
            })?);
            let owner = item.clone();
            subscriptions.push(subscribe(item, "click", &session, move |s, event| {
                let target = tap_target(&owner, event);
                let response = s.handle(MenuEvent::Tap { node, target });
                if response.prevent_default {
                    event.prevent_default();
                }
                if response.stop_propagation {
                    event.stop_propagation();
                }
            })?);
        }

        subscriptions.push(subscribe(doc, "click", &session, |s, event| {
            let enclosing = event
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .and_then(|el| el.closest(ITEM_SELECTOR).ok().flatten());
            match enclosing {
                None => {
                    s.handle(MenuEvent::DocumentClick { container: None });
                }
                Some(el) => {
                    if let Some(container) = s.surface.node_of(&el) {
                        s.handle(MenuEvent::DocumentClick {
                            container: Some(container),
                        });
                    }
                }
            }
        })?);
        subscriptions.push(subscribe(win, "resize", &session, |s, _| {
            s.handle(MenuEvent::Resize);
        })?);

        log::info!(
            "navigation menu bound: {} submenu items, {} listeners",
            items.len(),
            subscriptions.len()
        );
        Ok(Self {
            session,
            subscriptions,
        })
    }

    #[must_use]
    pub fn subscription_count(&self) -> usize {
        self.subscriptions.len()
    }

    #[must_use]
    pub fn item_count(&self) -> usize {
        self.session.borrow().controller.tree().len()
    }

    /// Snapshot of the controller's node state.
    #[must_use]
    pub fn state(&self) -> MenuState {
        self.session.borrow().controller.state().clone()
    }

    /// Detach every listener.
    pub fn teardown(self) {
        log::info!(
            "navigation menu unbound: {} listeners removed",
            self.subscriptions.len()
        );
        drop(self);
    }
}

fn subscribe<F>(
    target: &EventTarget,
    kind: &'static str,
    session: &Rc<RefCell<MenuSession>>,
    mut handler: F,
) -> Result<Subscription, WebMenuError>
where
    F: FnMut(&mut MenuSession, &Event) + 'static,
{
    let session = Rc::clone(session);
    let callback = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        let Ok(mut s) = session.try_borrow_mut() else {
            log::warn!("menu {kind} event dropped: session busy");
            return;
        };
        handler(&mut s, &event);
    });
    target
        .add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())
        .map_err(|e| WebMenuError::Listener {
            kind,
            message: js_error_message(&e),
        })?;
    Ok(Subscription {
        target: target.clone(),
        kind,
        callback,
    })
}

/// A tap toggles only when it lands on the item's own link; links of deeper
/// items belong to their own item.
fn tap_target(item: &Element, event: &Event) -> TapTarget {
    let link = event
        .target()
        .and_then(|t| t.dyn_into::<Element>().ok())
        .and_then(|el| el.closest("a").ok().flatten());
    match link {
        Some(link) if link.parent_element().as_ref() == Some(item) => TapTarget::OwnLink,
        _ => TapTarget::Other,
    }
}
