use super::{
    prelude::*,
    resolve_icon::{resolve_icon, MarkerIcon},
};

/// One marker on the map, carrying the feature it was constructed from so
/// that tooltip/popup content can be synthesized lazily at interaction time.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub pos: MapPoint,
    pub icon: MarkerIcon,
    pub place: PlaceFeature,
}

impl From<PlaceFeature> for Marker {
    fn from(place: PlaceFeature) -> Self {
        let icon = resolve_icon(place.icon.as_deref(), &place.category);
        Self {
            pos: place.pos,
            icon,
            place,
        }
    }
}

/// Markers partitioned by category, preserving input order within each
/// group. The five known categories are always present (possibly empty) in
/// legend order; additional groups follow in order of first encounter.
pub type GroupedMarkers = Vec<(Category, Vec<Marker>)>;

/// How to handle a category value outside the known enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryPolicy {
    /// Create a group for the unknown category on first encounter
    /// (forward-compatible, matches the reference behavior).
    #[default]
    Permissive,
    /// Reject the load with an error.
    Strict,
}

/// Partitions place features into per-category marker groups.
///
/// Categorization is total and exclusive: every feature ends up in exactly
/// one group.
pub fn categorize_places(
    places: Vec<PlaceFeature>,
    policy: CategoryPolicy,
) -> Result<GroupedMarkers> {
    let mut groups: GroupedMarkers = Category::KNOWN
        .iter()
        .map(|category| (category.clone(), Vec::new()))
        .collect();
    for place in places {
        if !place.category.is_known() && policy == CategoryPolicy::Strict {
            return Err(Error::UnknownCategory(place.category.key().to_string()));
        }
        let idx = match groups.iter().position(|(c, _)| *c == place.category) {
            Some(idx) => idx,
            None => {
                groups.push((place.category.clone(), Vec::new()));
                groups.len() - 1
            }
        };
        groups[idx].1.push(Marker::from(place));
    }
    Ok(groups)
}
