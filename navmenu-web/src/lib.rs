#![forbid(unsafe_code)]
//! Browser binding for the navigation menu controller.
//!
//! Scans the page for submenu-bearing items, wires their listeners to a
//! [`navmenu_core::MenuController`] and renders its state as `open` /
//! `drop-left` classes.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod binding;
pub mod config;
pub mod dom;
pub mod scan;
pub mod surface;

pub use binding::{MenuBinding, MenuSession};
pub use config::{config_from_text, load_config};
pub use surface::DomSurface;

#[derive(Debug, thiserror::Error)]
pub enum WebMenuError {
    #[error("DOM error: {0}")]
    Dom(String),
    #[error("could not register {kind} listener: {message}")]
    Listener { kind: &'static str, message: String },
    #[error("browser window unavailable")]
    NoWindow,
    #[error(transparent)]
    Menu(#[from] navmenu_core::MenuError),
}

/// Bind the menus of the current page using the page's config block.
///
/// # Errors
///
/// Returns an error outside a browser or when listeners cannot be attached.
pub fn initialize() -> Result<MenuBinding, WebMenuError> {
    let win = dom::window().ok_or(WebMenuError::NoWindow)?;
    let doc = win.document().ok_or(WebMenuError::NoWindow)?;
    let config = load_config(&doc);
    MenuBinding::attach(&win, &doc, config)
}

#[cfg(target_arch = "wasm32")]
thread_local! {
    static ACTIVE: std::cell::RefCell<Option<MenuBinding>> = const { std::cell::RefCell::new(None) };
}

/// Bind the page's menus, replacing any earlier binding.
///
/// # Errors
///
/// Returns the binding error as a JS string.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(js_name = initMenus)]
pub fn init_menus() -> Result<u32, JsValue> {
    teardown_menus();
    let binding = initialize().map_err(|e| JsValue::from_str(&e.to_string()))?;
    let count = u32::try_from(binding.item_count()).unwrap_or(u32::MAX);
    ACTIVE.with(|slot| *slot.borrow_mut() = Some(binding));
    Ok(count)
}

/// Detach every listener installed by [`init_menus`].
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(js_name = teardownMenus)]
pub fn teardown_menus() {
    let previous = ACTIVE.with(|slot| slot.borrow_mut().take());
    if let Some(binding) = previous {
        binding.teardown();
    }
}

/// Current node state as JSON, for debugging from the console.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(js_name = menuStateJson)]
pub fn menu_state_json() -> String {
    ACTIVE.with(|slot| {
        slot.borrow()
            .as_ref()
            .and_then(|binding| serde_json::to_string(&binding.state()).ok())
            .unwrap_or_else(|| "null".to_string())
    })
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    let Some(doc) = dom::document() else {
        return;
    };
    if dom::ready_state(&doc).as_deref() == Some("loading") {
        let on_ready = Closure::once_into_js(run_init);
        if let Err(err) =
            doc.add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref())
        {
            dom::console_error(&dom::js_error_message(&err));
        }
    } else {
        run_init();
    }
}

#[cfg(target_arch = "wasm32")]
fn run_init() {
    if let Err(err) = init_menus() {
        dom::console_error(&dom::js_error_message(&err));
    }
}
