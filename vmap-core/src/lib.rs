//! # vmap-core
//!
//! The place-categorization, visibility-layering and content-synthesis
//! pipeline of the veggie map, together with the gateway traits for the
//! external collaborators (map surface, opening-hours evaluation library,
//! localized-string lookup, data feed).

use thiserror::Error;

use vmap_entities::{
    category::Category, geo::MapPoint, opening_hours::OpeningHours, place::PlaceFeature,
    time::Timestamp,
};

pub mod usecases;
pub mod util;

use crate::usecases::MissingFieldPolicy;

/// The mapping/rendering surface consumed by the layer manager.
///
/// Implementations wrap the actual map widget. Overlay keys are the
/// category keys plus the umbrella key; registration announces an overlay
/// to the layer-control UI while add/remove toggles its presence on the
/// live map.
pub trait MapSurface {
    fn register_overlay(&mut self, key: &str, label: &str);
    fn add_layer(&mut self, key: &str);
    fn remove_layer(&mut self, key: &str);
}

/// A compiled opening-hours specification, ready for evaluation.
pub trait OpeningHoursEvaluator {
    fn is_open(&self, at: Timestamp) -> bool;
    fn prettify(&self, options: &PrettifyOptions) -> String;
}

/// Wraps the external opening-hours evaluation library.
pub trait OpeningHoursGateway {
    type Evaluator: OpeningHoursEvaluator;

    /// Returns `None` if the specification cannot be evaluated; callers
    /// treat this as "opening hours unavailable" and omit the section.
    fn compile(&self, spec: &OpeningHours, hint: &LocationHint) -> Option<Self::Evaluator>;
}

/// Regional context passed to the opening-hours evaluator, e.g. to resolve
/// public holidays.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationHint {
    pub pos: MapPoint,
    pub country_code: String,
    pub state: String,
    pub locale: String,
}

/// Display options for the prettified opening-hours rule text.
#[derive(Debug, Clone, PartialEq)]
pub struct PrettifyOptions {
    pub locale: String,
    pub rule_separator: String,
    pub one_day_separator: String,
    pub print_semicolons: bool,
}

impl Default for PrettifyOptions {
    fn default() -> Self {
        Self {
            locale: "en".to_string(),
            rule_separator: "<br />".to_string(),
            one_day_separator: ", ".to_string(),
            print_semicolons: false,
        }
    }
}

/// Localized phrases used in synthesized content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phrase {
    Open,
    Closed,
    WillCloseSoon,
    WillOpenSoon,
    PublicHoliday,
    MoreInfo,
}

/// Localized-string lookup.
pub trait TranslationGateway {
    fn translate(&self, phrase: Phrase) -> String;
}

/// Retrieves the two feed documents over HTTP.
///
/// Each fetch is an independent operation with its own failure path; there
/// is no retry and, by default, no timeout.
pub trait FeedGateway {
    fn fetch_places(&self, policy: MissingFieldPolicy) -> Result<Vec<PlaceFeature>, FeedError>;
    fn fetch_category_counts(&self) -> Result<Vec<(Category, u64)>, FeedError>;
}

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("{0}")]
    Fetch(String),

    #[error(transparent)]
    UseCase(#[from] usecases::Error),
}
