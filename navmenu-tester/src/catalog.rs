//! Built-in scenarios covering the menu's interaction rules on the LGU menu layout.

use std::collections::BTreeMap;

use navmenu_core::{MenuConfig, MenuOutline, Rect, SubmenuStyle};

use crate::scenario::{Action, Expect, Scenario, Step};

const NARROW: u32 = 375;
const WIDE: u32 = 1280;

type Builder = fn() -> Scenario;

const CATALOG: &[(&str, &str, Builder)] = &[
    (
        "hover-flyout",
        "Desktop hover opens flyouts and leaving closes them",
        hover_flyout,
    ),
    (
        "tap-toggle",
        "Tapping a closed item opens it and closes the open sibling",
        tap_toggle,
    ),
    (
        "tap-close",
        "Tapping an open item's link closes it and leaves nothing open",
        tap_close,
    ),
    (
        "drill-down",
        "Nested taps keep ancestors open and toggle independently",
        drill_down,
    ),
    (
        "outside-click",
        "Clicks outside every submenu item close all branches",
        outside_click,
    ),
    (
        "edge-tie-break",
        "A submenu touching the edge margin exactly is not flipped",
        edge_tie_break,
    ),
    (
        "resize-reflow",
        "Resizing re-measures open submenus without closing them",
        resize_reflow,
    ),
];

#[must_use]
pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    CATALOG.iter().map(|(key, desc, _)| (*key, *desc)).collect()
}

#[must_use]
pub fn get_scenario(name: &str) -> Option<Scenario> {
    CATALOG
        .iter()
        .find(|(key, _, _)| *key == name)
        .map(|(_, _, build)| build())
}

/// LGUs > 1st District > Cities, LGUs > 2nd District, and an About dropdown.
fn lgu_menu() -> Vec<MenuOutline> {
    vec![
        MenuOutline::new("lgus", SubmenuStyle::DropDown).with_children(vec![
            MenuOutline::new("district-1", SubmenuStyle::DropRight).with_children(vec![
                MenuOutline::new("cities-1", SubmenuStyle::DropRight),
            ]),
            MenuOutline::new("district-2", SubmenuStyle::DropRight),
        ]),
        MenuOutline::new("about", SubmenuStyle::DropDown),
    ]
}

fn fitting_rects() -> BTreeMap<String, Rect> {
    ["lgus", "district-1", "cities-1", "district-2", "about"]
        .into_iter()
        .map(|name| (name.to_string(), Rect::new(0.0, 0.0, 220.0, 300.0)))
        .collect()
}

fn base(name: &str, description: &str, viewport: u32, steps: Vec<Step>) -> Scenario {
    Scenario {
        name: name.to_string(),
        description: description.to_string(),
        config: None,
        viewport,
        menu: lgu_menu(),
        rects: fitting_rects(),
        right_anchors: BTreeMap::new(),
        steps,
    }
}

fn hover_flyout() -> Scenario {
    let mut scenario = base(
        "hover-flyout",
        "Desktop hover opens flyouts and leaving closes them",
        WIDE,
        vec![
            Step::new(Action::hover("lgus")).expecting(Expect::open(&["lgus"])),
            Step::new(Action::hover("district-1")).expecting(
                Expect::open(&["lgus", "district-1"]).repositioned(&["district-1"]),
            ),
            Step::new(Action::leave("district-1"))
                .expecting(Expect::open(&["lgus"]).repositioned(&[])),
            Step::new(Action::leave("lgus")).expecting(Expect::open(&[])),
            Step::new(Action::tap("about")).expecting(Expect::open(&[]).consumed(false)),
        ],
    );
    scenario.rects.insert(
        "district-1".to_string(),
        Rect::new(1180.0, 40.0, 1400.0, 340.0),
    );
    scenario
}

fn tap_toggle() -> Scenario {
    base(
        "tap-toggle",
        "Tapping a closed item opens it and closes the open sibling",
        NARROW,
        vec![
            Step::new(Action::tap("about")).expecting(Expect::open(&["about"]).consumed(true)),
            Step::new(Action::tap("lgus")).expecting(Expect::open(&["lgus"]).consumed(true)),
            Step::new(Action::hover("about")).expecting(Expect::open(&["lgus"])),
        ],
    )
}

fn tap_close() -> Scenario {
    base(
        "tap-close",
        "Tapping an open item's link closes it and leaves nothing open",
        NARROW,
        vec![
            Step::new(Action::tap("lgus")).expecting(Expect::open(&["lgus"])),
            Step::new(Action::tap("lgus"))
                .expecting(Expect::open(&[]).repositioned(&[]).consumed(true)),
        ],
    )
}

fn drill_down() -> Scenario {
    base(
        "drill-down",
        "Nested taps keep ancestors open and toggle independently",
        NARROW,
        vec![
            Step::new(Action::tap("lgus")),
            Step::new(Action::tap("district-1"))
                .expecting(Expect::open(&["lgus", "district-1"]).consumed(true)),
            Step::new(Action::tap_inside("lgus"))
                .expecting(Expect::open(&["lgus", "district-1"]).consumed(false)),
            Step::new(Action::tap("cities-1"))
                .expecting(Expect::open(&["lgus", "district-1", "cities-1"])),
            Step::new(Action::tap("district-2"))
                .expecting(Expect::open(&["lgus", "district-2"])),
            Step::new(Action::tap("district-2")).expecting(Expect::open(&["lgus"])),
        ],
    )
}

fn outside_click() -> Scenario {
    base(
        "outside-click",
        "Clicks outside every submenu item close all branches",
        NARROW,
        vec![
            Step::new(Action::tap("lgus")),
            Step::new(Action::tap("district-1")),
            Step::new(Action::Click {
                inside: Some("district-1".to_string()),
            })
            .expecting(Expect::open(&["lgus", "district-1"])),
            Step::new(Action::click_outside())
                .expecting(Expect::open(&[]).repositioned(&[]).consumed(false)),
        ],
    )
}

fn edge_tie_break() -> Scenario {
    let mut scenario = base(
        "edge-tie-break",
        "A submenu touching the edge margin exactly is not flipped",
        WIDE,
        vec![
            Step::new(Action::hover("district-1"))
                .expecting(Expect::open(&["district-1"]).repositioned(&[])),
            Step::new(Action::hover("district-2"))
                .expecting(Expect::open(&["district-1", "district-2"]).repositioned(&["district-2"])),
        ],
    );
    let cfg = MenuConfig::default();
    let limit = f64::from(WIDE) - f64::from(cfg.edge_margin_px);
    scenario.rects.insert(
        "district-1".to_string(),
        Rect::new(limit - 220.0, 0.0, limit, 300.0),
    );
    scenario.rects.insert(
        "district-2".to_string(),
        Rect::new(limit - 219.0, 0.0, limit + 1.0, 300.0),
    );
    scenario
}

fn resize_reflow() -> Scenario {
    let mut scenario = base(
        "resize-reflow",
        "Resizing re-measures open submenus without closing them",
        1400,
        vec![
            Step::new(Action::hover("lgus")),
            Step::new(Action::hover("district-1"))
                .expecting(Expect::open(&["lgus", "district-1"]).repositioned(&[])),
            Step::new(Action::resize(1000)).expecting(
                Expect::open(&["lgus", "district-1"]).repositioned(&["district-1"]),
            ),
            Step::new(Action::resize(1400)).expecting(
                Expect::open(&["lgus", "district-1"]).repositioned(&[]),
            ),
        ],
    );
    scenario.rects.insert(
        "district-1".to_string(),
        Rect::new(960.0, 40.0, 1180.0, 340.0),
    );
    scenario
}
