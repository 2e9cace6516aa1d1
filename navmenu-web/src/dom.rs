use navmenu_core::Viewport;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Window};

/// Retrieve the global `window` object, if running in a browser.
#[must_use]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Retrieve the document object for DOM interactions.
#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Log an error message to the browser console.
pub fn console_error(message: &str) {
    web_sys::console::error_1(&JsValue::from(message));
}

/// Current layout viewport from `window.innerWidth`.
///
/// Falls back to a zero-width viewport when the width cannot be read.
#[must_use]
pub fn viewport(win: &Window) -> Viewport {
    let width = win
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    Viewport::new(width_to_px(width))
}

/// Clamp a JS width into whole CSS pixels.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn width_to_px(width: f64) -> u32 {
    if width.is_nan() || width <= 0.0 {
        0
    } else if width >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        width as u32
    }
}

/// Class names of an element, in attribute order.
#[must_use]
pub fn class_names(el: &Element) -> Vec<String> {
    let list = el.class_list();
    (0..list.length()).filter_map(|i| list.item(i)).collect()
}

/// `document.readyState`, read reflectively so no enum binding is needed.
#[must_use]
pub fn ready_state(doc: &Document) -> Option<String> {
    js_sys::Reflect::get(doc, &JsValue::from_str("readyState"))
        .ok()
        .and_then(|v| v.as_string())
}
