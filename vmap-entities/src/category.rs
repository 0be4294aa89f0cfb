use std::fmt;

use strum::EnumString;

/// Diet-friendliness classification of a place.
///
/// The five known categories drive marker grouping, icon styling and the
/// default layer visibility. Values outside the known set are preserved
/// verbatim in [`Category::Unknown`] instead of being rejected, so that new
/// categories published by the data feed do not break older clients.
#[derive(Debug, Clone, PartialEq, Eq, Hash, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum Category {
    VeganOnly,
    VegetarianOnly,
    VeganFriendly,
    VeganLimited,
    VegetarianFriendly,
    #[strum(default)]
    Unknown(String),
}

impl Category {
    pub const KEY_VEGAN_ONLY: &'static str = "vegan_only";
    pub const KEY_VEGETARIAN_ONLY: &'static str = "vegetarian_only";
    pub const KEY_VEGAN_FRIENDLY: &'static str = "vegan_friendly";
    pub const KEY_VEGAN_LIMITED: &'static str = "vegan_limited";
    pub const KEY_VEGETARIAN_FRIENDLY: &'static str = "vegetarian_friendly";

    /// All known categories in legend order.
    pub const KNOWN: [Self; 5] = [
        Self::VeganOnly,
        Self::VegetarianOnly,
        Self::VeganFriendly,
        Self::VeganLimited,
        Self::VegetarianFriendly,
    ];

    /// The key used by the data feed and the statistics document.
    pub fn key(&self) -> &str {
        match self {
            Self::VeganOnly => Self::KEY_VEGAN_ONLY,
            Self::VegetarianOnly => Self::KEY_VEGETARIAN_ONLY,
            Self::VeganFriendly => Self::KEY_VEGAN_FRIENDLY,
            Self::VeganLimited => Self::KEY_VEGAN_LIMITED,
            Self::VegetarianFriendly => Self::KEY_VEGETARIAN_FRIENDLY,
            Self::Unknown(key) => key,
        }
    }

    /// Human-readable legend label.
    pub fn label(&self) -> String {
        self.key().replace('_', " ")
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_categories() {
        for category in Category::KNOWN {
            assert_eq!(category, Category::from(category.key()));
            assert!(category.is_known());
        }
    }

    #[test]
    fn preserve_unknown_categories() {
        let category = Category::from("raw_food");
        assert_eq!(category, Category::Unknown("raw_food".to_string()));
        assert_eq!(category.key(), "raw_food");
        assert!(!category.is_known());
    }

    #[test]
    fn legend_label() {
        assert_eq!(Category::VeganOnly.label(), "vegan only");
        assert_eq!(Category::VegetarianFriendly.label(), "vegetarian friendly");
    }
}
