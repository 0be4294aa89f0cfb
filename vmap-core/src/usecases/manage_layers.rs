use crate::MapSurface;

use super::{
    categorize_places::{GroupedMarkers, Marker},
    prelude::*,
};

/// Key of the umbrella overlay that carries all markers regardless of
/// category.
pub const UMBRELLA_KEY: &str = "all_places";

#[derive(Debug)]
struct MarkerGroup {
    label: String,
    markers: Vec<Marker>,
    visible: bool,
    count_hint: Option<u64>,
}

impl MarkerGroup {
    fn new(label: String) -> Self {
        Self {
            label,
            markers: Vec::new(),
            visible: true,
            count_hint: None,
        }
    }

    fn annotated_label(&self) -> String {
        match self.count_hint {
            Some(count) => format!("{} ({count})", self.label),
            None => self.label.clone(),
        }
    }
}

/// Owns one overlay per category plus the umbrella overlay and applies the
/// default-visibility policy.
///
/// Groups are created empty at startup and populated in one bulk operation
/// after the feature document has loaded; there is no incremental update
/// path. The caller must finish [`populate`](Self::populate) and
/// [`apply_default_visibility`](Self::apply_default_visibility) before the
/// layer-control UI becomes interactive.
#[derive(Debug)]
pub struct LayerState {
    groups: Vec<(Category, MarkerGroup)>,
    populated: bool,
}

impl LayerState {
    /// Creates the five known category groups (empty) and registers them
    /// with the layer-control surface.
    pub fn initialize<S: MapSurface>(surface: &mut S) -> Self {
        let groups: Vec<_> = Category::KNOWN
            .iter()
            .map(|category| (category.clone(), MarkerGroup::new(category.label())))
            .collect();
        for (category, group) in &groups {
            surface.register_overlay(category.key(), &group.label);
        }
        Self {
            groups,
            populated: false,
        }
    }

    /// Adds all markers of every category group in one bulk operation and
    /// activates the overlays on the map, the umbrella overlay last so that
    /// no partially populated state becomes visible.
    ///
    /// Must be called exactly once per session.
    pub fn populate<S: MapSurface>(
        &mut self,
        grouped: GroupedMarkers,
        surface: &mut S,
    ) -> Result<()> {
        if self.populated {
            return Err(Error::AlreadyPopulated);
        }
        for (category, markers) in grouped {
            let idx = match self.groups.iter().position(|(c, _)| *c == category) {
                Some(idx) => idx,
                None => {
                    // Unknown category published by the feed: register a
                    // group on the fly.
                    let group = MarkerGroup::new(category.label());
                    surface.register_overlay(category.key(), &group.label);
                    self.groups.push((category, group));
                    self.groups.len() - 1
                }
            };
            self.groups[idx].1.markers.extend(markers);
        }
        for (category, _) in &self.groups {
            surface.add_layer(category.key());
        }
        surface.add_layer(UMBRELLA_KEY);
        self.populated = true;
        Ok(())
    }

    /// Hides the `vegetarian_friendly` group; all other groups stay
    /// visible. Runs once, immediately after [`populate`](Self::populate).
    pub fn apply_default_visibility<S: MapSurface>(&mut self, surface: &mut S) {
        self.set_visible(&Category::VegetarianFriendly, false, surface);
    }

    /// Toggle hook for the external layer-control UI.
    pub fn set_visible<S: MapSurface>(
        &mut self,
        category: &Category,
        visible: bool,
        surface: &mut S,
    ) {
        if let Some((_, group)) = self.groups.iter_mut().find(|(c, _)| c == category) {
            group.visible = visible;
            if visible {
                surface.add_layer(category.key());
            } else {
                surface.remove_layer(category.key());
            }
        }
    }

    /// Attaches the per-category counts from the statistics document.
    /// Currently only reflected in [`labels`](Self::labels); the reference
    /// UI keeps this as a display hook.
    pub fn set_counts(&mut self, counts: Vec<(Category, u64)>) {
        for (category, count) in counts {
            if let Some((_, group)) = self.groups.iter_mut().find(|(c, _)| *c == category) {
                group.count_hint = Some(count);
            }
        }
    }

    pub fn is_populated(&self) -> bool {
        self.populated
    }

    pub fn is_visible(&self, category: &Category) -> bool {
        self.groups
            .iter()
            .find(|(c, _)| c == category)
            .is_some_and(|(_, group)| group.visible)
    }

    /// Overlay keys and (count-annotated) labels in legend order.
    pub fn labels(&self) -> Vec<(String, String)> {
        self.groups
            .iter()
            .map(|(category, group)| (category.key().to_string(), group.annotated_label()))
            .collect()
    }

    pub fn group_len(&self, category: &Category) -> usize {
        self.groups
            .iter()
            .find(|(c, _)| c == category)
            .map_or(0, |(_, group)| group.markers.len())
    }

    /// All markers of the umbrella group.
    pub fn umbrella_markers(&self) -> impl Iterator<Item = &Marker> {
        self.groups.iter().flat_map(|(_, group)| group.markers.iter())
    }

    /// Total number of markers (size of the umbrella group).
    pub fn marker_count(&self) -> usize {
        self.groups.iter().map(|(_, group)| group.markers.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::categorize_places::{categorize_places, CategoryPolicy};

    #[derive(Debug, Default)]
    struct RecordingSurface {
        registered: Vec<String>,
        active: Vec<String>,
    }

    impl MapSurface for RecordingSurface {
        fn register_overlay(&mut self, key: &str, _label: &str) {
            self.registered.push(key.to_string());
        }

        fn add_layer(&mut self, key: &str) {
            if !self.active.iter().any(|k| k == key) {
                self.active.push(key.to_string());
            }
        }

        fn remove_layer(&mut self, key: &str) {
            self.active.retain(|k| k != key);
        }
    }

    fn populated_state(surface: &mut RecordingSurface) -> LayerState {
        let places = vec![
            PlaceFeature::build("A", Category::VeganOnly).finish(),
            PlaceFeature::build("B", Category::VegetarianFriendly).finish(),
            PlaceFeature::build("C", Category::VeganOnly).finish(),
        ];
        let grouped = categorize_places(places, CategoryPolicy::default()).unwrap();
        let mut state = LayerState::initialize(surface);
        state.populate(grouped, surface).unwrap();
        state.apply_default_visibility(surface);
        state
    }

    #[test]
    fn default_visibility_after_load() {
        let mut surface = RecordingSurface::default();
        let state = populated_state(&mut surface);

        assert!(!state.is_visible(&Category::VegetarianFriendly));
        for category in Category::KNOWN {
            if category != Category::VegetarianFriendly {
                assert!(state.is_visible(&category));
                assert!(surface.active.iter().any(|k| k == category.key()));
            }
        }
        assert!(!surface
            .active
            .iter()
            .any(|k| k == Category::VegetarianFriendly.key()));
    }

    #[test]
    fn umbrella_group_contains_all_markers() {
        let mut surface = RecordingSurface::default();
        let state = populated_state(&mut surface);
        assert_eq!(state.marker_count(), 3);
        assert_eq!(state.group_len(&Category::VeganOnly), 2);
        // The umbrella overlay is activated last.
        assert_eq!(surface.active.last().map(String::as_str), Some(UMBRELLA_KEY));
    }

    #[test]
    fn populate_only_once() {
        let mut surface = RecordingSurface::default();
        let mut state = populated_state(&mut surface);
        let err = state.populate(Vec::new(), &mut surface).unwrap_err();
        assert_eq!(err, Error::AlreadyPopulated);
    }

    #[test]
    fn toggle_from_the_layer_control() {
        let mut surface = RecordingSurface::default();
        let mut state = populated_state(&mut surface);
        state.set_visible(&Category::VegetarianFriendly, true, &mut surface);
        assert!(state.is_visible(&Category::VegetarianFriendly));
        assert!(surface
            .active
            .iter()
            .any(|k| k == Category::VegetarianFriendly.key()));
    }

    #[test]
    fn count_annotated_labels() {
        let mut surface = RecordingSurface::default();
        let mut state = populated_state(&mut surface);
        state.set_counts(vec![(Category::VeganOnly, 12)]);
        let labels = state.labels();
        assert_eq!(labels[0], ("vegan_only".to_string(), "vegan only (12)".to_string()));
        assert_eq!(labels[1].1, "vegetarian only");
    }
}
