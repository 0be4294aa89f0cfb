use vmap_entities::category::Category;

/// Icon id used when a place carries no or an unrecognized icon id.
pub const DEFAULT_ICON_ID: &str = "restaurant";

const KNOWN_ICON_IDS: &[&str] = &[
    "restaurant",
    "cafe",
    "bar",
    "fast_food",
    "ice_cream",
    "bakery",
    "supermarket",
    "shop",
    "hotel",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerIcon {
    pub image_path: String,
    pub css_class: String,
}

/// Maps `(icon id, category)` to the visual marker icon.
///
/// Pure and total: unrecognized pairs fall back to the default icon of the
/// category, this function never fails.
pub fn resolve_icon(icon_id: Option<&str>, category: &Category) -> MarkerIcon {
    let id = icon_id
        .filter(|id| KNOWN_ICON_IDS.contains(id))
        .unwrap_or(DEFAULT_ICON_ID);
    MarkerIcon {
        image_path: format!("icons/{}/{id}.svg", category.key()),
        css_class: category.key().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_known_pair() {
        let icon = resolve_icon(Some("cafe"), &Category::VeganOnly);
        assert_eq!(icon.image_path, "icons/vegan_only/cafe.svg");
        assert_eq!(icon.css_class, "vegan_only");
    }

    #[test]
    fn fall_back_for_unrecognized_icon_id() {
        let icon = resolve_icon(Some("space_station"), &Category::VeganLimited);
        assert_eq!(icon.image_path, "icons/vegan_limited/restaurant.svg");
    }

    #[test]
    fn fall_back_for_absent_icon_id() {
        let icon = resolve_icon(None, &Category::VegetarianOnly);
        assert_eq!(icon.image_path, "icons/vegetarian_only/restaurant.svg");
    }
}
