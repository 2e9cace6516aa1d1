use navmenu_core::MenuConfig;
use web_sys::Document;

/// Id of the optional inline JSON block carrying [`MenuConfig`] overrides.
pub const CONFIG_ELEMENT_ID: &str = "navmenu-config";

/// Read overrides from `<script type="application/json" id="navmenu-config">`.
#[must_use]
pub fn load_config(doc: &Document) -> MenuConfig {
    let text = doc
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content());
    config_from_text(text.as_deref())
}

/// Parse a config block, falling back to defaults when it is absent or invalid.
#[must_use]
pub fn config_from_text(text: Option<&str>) -> MenuConfig {
    let Some(text) = text.map(str::trim).filter(|t| !t.is_empty()) else {
        return MenuConfig::default();
    };
    match MenuConfig::from_json(text) {
        Ok(cfg) => cfg,
        Err(err) => {
            log::warn!("ignoring #{CONFIG_ELEMENT_ID}: {err}");
            MenuConfig::default()
        }
    }
}
