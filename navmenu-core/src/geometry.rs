use serde::{Deserialize, Serialize};

use crate::config::MenuConfig;

/// Layout viewport, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
}

impl Viewport {
    #[must_use]
    pub const fn new(width: u32) -> Self {
        Self { width }
    }

    #[must_use]
    pub const fn mode(self, cfg: &MenuConfig) -> InteractionMode {
        if self.width > cfg.breakpoint_px {
            InteractionMode::Hover
        } else {
            InteractionMode::Tap
        }
    }

    /// Rightmost x coordinate a submenu may reach without being flipped.
    #[must_use]
    pub fn right_limit(self, cfg: &MenuConfig) -> f64 {
        f64::from(self.width) - f64::from(cfg.edge_margin_px)
    }
}

/// How the menu reacts to input at the current viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InteractionMode {
    /// Wide viewports: flyouts open on pointer enter.
    Hover,
    /// Narrow viewports: stacked submenus toggled by tapping their link.
    Tap,
}

/// A bounding box as reported by `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    #[must_use]
    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Whether the box crosses the right-hand limit of the viewport.
    ///
    /// Touching the limit exactly still fits.
    #[must_use]
    pub fn overflows_right(&self, viewport: Viewport, cfg: &MenuConfig) -> bool {
        self.right > viewport.right_limit(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_width_is_tap_mode() {
        let cfg = MenuConfig::default();
        assert_eq!(Viewport::new(768).mode(&cfg), InteractionMode::Tap);
        assert_eq!(Viewport::new(769).mode(&cfg), InteractionMode::Hover);
        assert_eq!(Viewport::new(320).mode(&cfg), InteractionMode::Tap);
    }

    #[test]
    fn overflow_is_strictly_past_the_margin() {
        let cfg = MenuConfig::default();
        let vp = Viewport::new(1024);
        assert!(!Rect::new(800.0, 0.0, 1014.0, 40.0).overflows_right(vp, &cfg));
        assert!(Rect::new(800.0, 0.0, 1015.0, 40.0).overflows_right(vp, &cfg));
        assert!(Rect::new(800.0, 0.0, 1014.5, 40.0).overflows_right(vp, &cfg));
    }
}
