use serde::{Deserialize, Serialize};

/// Class marking an open submenu-bearing item.
pub const OPEN_CLASS: &str = "open";
/// Class flipping a submenu to open leftward.
pub const DROP_LEFT_CLASS: &str = "drop-left";

/// Selector matching every submenu-bearing item in either naming convention.
pub const ITEM_SELECTOR: &str = ".has-dropright, .has-drop-right";

/// The two markup conventions for items that own a submenu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmenuStyle {
    /// `has-drop-right` item with a `drop-right-menu` child.
    DropRight,
    /// `has-dropright` item with a `dropdown-menu` child.
    DropDown,
}

impl SubmenuStyle {
    pub const ALL: [Self; 2] = [Self::DropRight, Self::DropDown];

    #[must_use]
    pub const fn item_class(self) -> &'static str {
        match self {
            Self::DropRight => "has-drop-right",
            Self::DropDown => "has-dropright",
        }
    }

    #[must_use]
    pub const fn submenu_selector(self) -> &'static str {
        match self {
            Self::DropRight => ".drop-right-menu",
            Self::DropDown => ".dropdown-menu",
        }
    }

    /// Resolve the style from an item's class list.
    ///
    /// `has-drop-right` is checked first, so an item carrying both classes is `DropRight`.
    #[must_use]
    pub fn from_classes<'a>(classes: impl IntoIterator<Item = &'a str>) -> Option<Self> {
        let mut found = None;
        for class in classes {
            if class == Self::DropRight.item_class() {
                return Some(Self::DropRight);
            }
            if class == Self::DropDown.item_class() {
                found = Some(Self::DropDown);
            }
        }
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_each_convention() {
        assert_eq!(
            SubmenuStyle::from_classes(["nav-item", "has-dropright"]),
            Some(SubmenuStyle::DropDown)
        );
        assert_eq!(
            SubmenuStyle::from_classes(["has-drop-right"]),
            Some(SubmenuStyle::DropRight)
        );
        assert_eq!(SubmenuStyle::from_classes(["has-dropdown"]), None);
    }

    #[test]
    fn both_conventions_prefer_drop_right() {
        assert_eq!(
            SubmenuStyle::from_classes(["has-dropright", "has-drop-right"]),
            Some(SubmenuStyle::DropRight)
        );
    }

    #[test]
    fn item_selector_covers_all_styles() {
        for style in SubmenuStyle::ALL {
            assert!(ITEM_SELECTOR.contains(&format!(".{}", style.item_class())));
        }
    }
}
