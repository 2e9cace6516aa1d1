use navmenu_core::MenuConfig;
use navmenu_web::config_from_text;
use navmenu_web::dom::width_to_px;

#[test]
fn config_block_overrides_defaults() {
    let cfg = config_from_text(Some(r#" { "breakpoint_px": 992 } "#));
    assert_eq!(cfg.breakpoint_px, 992);
    assert_eq!(cfg.edge_margin_px, 10);
}

#[test]
fn missing_or_blank_config_uses_defaults() {
    assert_eq!(config_from_text(None), MenuConfig::default());
    assert_eq!(config_from_text(Some("   \n")), MenuConfig::default());
}

#[test]
fn invalid_config_falls_back_to_defaults() {
    assert_eq!(config_from_text(Some("{ nope")), MenuConfig::default());
    assert_eq!(
        config_from_text(Some(r#"{ "breakpoint_px": 0 }"#)),
        MenuConfig::default()
    );
}

#[test]
fn js_widths_clamp_to_whole_pixels() {
    assert_eq!(width_to_px(1280.0), 1280);
    assert_eq!(width_to_px(767.9), 767);
    assert_eq!(width_to_px(-4.0), 0);
    assert_eq!(width_to_px(f64::NAN), 0);
    assert_eq!(width_to_px(1e12), u32::MAX);
}
