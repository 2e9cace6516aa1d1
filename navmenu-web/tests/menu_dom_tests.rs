#![cfg(target_arch = "wasm32")]

use navmenu_core::{MenuConfig, NodeId, SubmenuStyle};
use navmenu_web::{MenuBinding, dom, init_menus, scan::scan, teardown_menus};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, Event, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

const MARKUP: &str = r##"
<ul class="nav">
  <li class="has-dropright" id="lgus">
    <a href="#" id="lgus-link">LGUs</a>
    <ul class="dropdown-menu" style="position:fixed;left:0;top:0;width:120px">
      <li class="has-drop-right" id="district-1">
        <a href="#" id="district-1-link">1st District</a>
        <ul class="drop-right-menu" style="position:fixed;left:100vw;top:0;width:200px">
          <li><a href="#" id="city-link">City</a></li>
        </ul>
      </li>
      <li class="has-drop-right" id="district-2">
        <a href="#" id="district-2-link">2nd District</a>
        <ul class="drop-right-menu" style="position:fixed;left:0;top:0;width:80px"></ul>
      </li>
    </ul>
  </li>
  <li class="has-dropright open" id="about">
    <a href="#" id="about-link">About</a>
    <ul class="dropdown-menu"></ul>
  </li>
  <li class="has-dropright" id="bare"><a href="#">No submenu element</a></li>
</ul>
<p id="outside">Body text</p>
"##;

struct Fixture {
    root: Element,
}

impl Fixture {
    fn mount() -> Self {
        let doc = dom::document().expect("document");
        let root = doc.create_element("div").expect("div");
        root.set_inner_html(MARKUP);
        doc.body().expect("body").append_child(&root).expect("mount");
        Self { root }
    }

    /// Mount with a config block forcing tap mode at any viewport width.
    fn mount_tap_config() -> Self {
        let fx = Self::mount();
        let doc = dom::document().expect("document");
        let script = doc.create_element("script").expect("script");
        script.set_attribute("type", "application/json").expect("type");
        script.set_id("navmenu-config");
        script.set_text_content(Some(r#"{ "breakpoint_px": 4294967295 }"#));
        fx.root.append_child(&script).expect("config");
        fx
    }

    fn el(&self, id: &str) -> Element {
        dom::document()
            .and_then(|d| d.get_element_by_id(id))
            .expect("fixture element")
    }

    fn click(&self, id: &str) {
        self.el(id).unchecked_into::<HtmlElement>().click();
    }

    fn has_class(&self, id: &str, class: &str) -> bool {
        self.el(id).class_list().contains(class)
    }
}

impl Drop for Fixture {
    fn drop(&mut self) {
        self.root.remove();
    }
}

fn bind(breakpoint_px: u32) -> MenuBinding {
    let win = dom::window().expect("window");
    let doc = win.document().expect("document");
    MenuBinding::attach(
        &win,
        &doc,
        MenuConfig {
            breakpoint_px,
            edge_margin_px: 10,
        },
    )
    .expect("attach")
}

fn tap_mode() -> MenuBinding {
    bind(u32::MAX)
}

fn hover_mode() -> MenuBinding {
    bind(1)
}

#[wasm_bindgen_test]
fn scan_resolves_styles_parents_and_markup_state() {
    let _fx = Fixture::mount();
    let scanned = scan(&dom::document().unwrap()).expect("scan");
    assert_eq!(scanned.tree.len(), 5);
    let lgus = scanned.tree.get(NodeId(0)).unwrap();
    assert_eq!(lgus.style, SubmenuStyle::DropDown);
    assert_eq!(lgus.label.as_deref(), Some("LGUs"));
    let district = scanned.tree.get(NodeId(1)).unwrap();
    assert_eq!(district.style, SubmenuStyle::DropRight);
    assert_eq!(district.parent, Some(NodeId(0)));
    assert_eq!(scanned.initial.len(), 1);
    assert_eq!(scanned.initial[0].0, NodeId(3));
}

#[wasm_bindgen_test]
fn tap_opens_item_and_closes_preopened_sibling() {
    let fx = Fixture::mount();
    let binding = tap_mode();
    fx.click("lgus-link");
    assert!(fx.has_class("lgus", "open"));
    assert!(!fx.has_class("about", "open"));
    binding.teardown();
}

#[wasm_bindgen_test]
fn tapping_open_item_closes_it() {
    let fx = Fixture::mount();
    let binding = tap_mode();
    fx.click("lgus-link");
    fx.click("lgus-link");
    assert!(!fx.has_class("lgus", "open"));
    assert!(binding.state().is_all_closed());
}

#[wasm_bindgen_test]
fn nested_tap_keeps_parent_open_and_flips_overflowing_submenu() {
    let fx = Fixture::mount();
    let _binding = tap_mode();
    fx.click("lgus-link");
    fx.click("district-1-link");
    assert!(fx.has_class("lgus", "open"));
    assert!(fx.has_class("district-1", "open"));
    assert!(fx.has_class("district-1", "drop-left"));
    assert!(!fx.has_class("lgus", "drop-left"));

    fx.click("district-2-link");
    assert!(fx.has_class("lgus", "open"));
    assert!(!fx.has_class("district-1", "open"));
    assert!(!fx.has_class("district-1", "drop-left"));
    assert!(fx.has_class("district-2", "open"));
}

#[wasm_bindgen_test]
fn leaf_link_inside_menu_does_not_close_branch() {
    let fx = Fixture::mount();
    let _binding = tap_mode();
    fx.click("lgus-link");
    fx.click("district-1-link");
    fx.click("city-link");
    assert!(fx.has_class("district-1", "open"));
}

#[wasm_bindgen_test]
fn outside_click_closes_everything() {
    let fx = Fixture::mount();
    let binding = tap_mode();
    fx.click("lgus-link");
    fx.click("district-1-link");
    fx.click("outside");
    assert!(binding.state().is_all_closed());
    assert!(!fx.has_class("lgus", "open"));
    assert!(!fx.has_class("district-1", "drop-left"));
}

#[wasm_bindgen_test]
fn hover_enter_and_leave_toggle_classes() {
    let fx = Fixture::mount();
    let _binding = hover_mode();
    let item = fx.el("district-1");
    item.dispatch_event(&Event::new("mouseenter").unwrap()).unwrap();
    assert!(fx.has_class("district-1", "open"));
    assert!(fx.has_class("district-1", "drop-left"));
    item.dispatch_event(&Event::new("mouseleave").unwrap()).unwrap();
    assert!(!fx.has_class("district-1", "open"));
    assert!(!fx.has_class("district-1", "drop-left"));
}

#[wasm_bindgen_test]
fn item_without_submenu_element_is_skipped() {
    let fx = Fixture::mount();
    let _binding = hover_mode();
    fx.el("bare")
        .dispatch_event(&Event::new("mouseenter").unwrap())
        .unwrap();
    assert!(fx.has_class("bare", "open"));
    assert!(!fx.has_class("bare", "drop-left"));
}

#[wasm_bindgen_test]
fn teardown_detaches_listeners() {
    let fx = Fixture::mount();
    let binding = tap_mode();
    assert_eq!(binding.subscription_count(), 5 * 3 + 2);
    binding.teardown();
    fx.click("lgus-link");
    assert!(!fx.has_class("lgus", "open"));
}

#[wasm_bindgen_test]
fn reinitializing_replaces_the_previous_binding() {
    let fx = Fixture::mount_tap_config();
    assert_eq!(init_menus().expect("first init"), 5);
    assert_eq!(init_menus().expect("second init"), 5);

    // A doubled click listener would toggle the item twice and leave it closed.
    fx.click("lgus-link");
    assert!(fx.has_class("lgus", "open"));
    assert!(!fx.has_class("about", "open"));

    teardown_menus();
    fx.click("lgus-link");
    assert!(fx.has_class("lgus", "open"), "no listener left after teardown");
}
