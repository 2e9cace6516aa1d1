use serde::{Deserialize, Serialize};

use crate::error::MenuError;

/// Viewport widths at or below this value use tap interaction.
pub const DEFAULT_BREAKPOINT_PX: u32 = 768;
/// Safety gap kept between an open submenu and the right viewport edge.
pub const DEFAULT_EDGE_MARGIN_PX: u32 = 10;

/// Tunables for the menu controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuConfig {
    #[serde(default = "default_breakpoint")]
    pub breakpoint_px: u32,
    #[serde(default = "default_edge_margin")]
    pub edge_margin_px: u32,
}

const fn default_breakpoint() -> u32 {
    DEFAULT_BREAKPOINT_PX
}

const fn default_edge_margin() -> u32 {
    DEFAULT_EDGE_MARGIN_PX
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            breakpoint_px: DEFAULT_BREAKPOINT_PX,
            edge_margin_px: DEFAULT_EDGE_MARGIN_PX,
        }
    }
}

impl MenuConfig {
    /// Parse a config from JSON, filling omitted fields with defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the values fail [`MenuConfig::validate`].
    pub fn from_json(json: &str) -> Result<Self, MenuError> {
        let cfg: Self = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check that the config describes a usable layout.
    ///
    /// # Errors
    ///
    /// Returns [`MenuError::InvalidConfig`] when the breakpoint is zero.
    pub fn validate(&self) -> Result<(), MenuError> {
        if self.breakpoint_px == 0 {
            return Err(MenuError::InvalidConfig(
                "breakpoint_px must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_site_layout() {
        let cfg = MenuConfig::default();
        assert_eq!(cfg.breakpoint_px, 768);
        assert_eq!(cfg.edge_margin_px, 10);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let cfg = MenuConfig::from_json(r#"{ "edge_margin_px": 24 }"#).unwrap();
        assert_eq!(cfg.breakpoint_px, DEFAULT_BREAKPOINT_PX);
        assert_eq!(cfg.edge_margin_px, 24);
    }

    #[test]
    fn zero_breakpoint_is_rejected() {
        let err = MenuConfig::from_json(r#"{ "breakpoint_px": 0 }"#).unwrap_err();
        assert!(matches!(err, MenuError::InvalidConfig(_)));
    }

    #[test]
    fn malformed_json_surfaces_parse_error() {
        let err = MenuConfig::from_json("{ breakpoint").unwrap_err();
        assert!(format!("{err}").contains("JSON parsing error"));
    }
}
