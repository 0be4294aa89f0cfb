use thiserror::Error;

use crate::{
    address::Address, category::Category, contact::Contact, geo::MapPoint, links::Links,
    opening_hours::OpeningHours, osm::OsmRef,
};

/// One geocoded place record with its descriptive properties.
///
/// Name, category and position are required. Every other field is optional
/// and must be silently omitted from synthesized content when absent.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceFeature {
    pub osm_ref: Option<OsmRef>,
    pub pos: MapPoint,
    pub name: String,
    pub category: Category,
    pub symbol: Option<String>,
    pub icon: Option<String>,
    pub address: Option<Address>,
    pub contact: Option<Contact>,
    pub links: Option<Links>,
    pub cuisine: Option<String>,
    pub more_info: bool,
    pub opening_hours: Option<OpeningHours>,
}

impl PlaceFeature {
    pub fn has_complete_address(&self) -> bool {
        self.address
            .as_ref()
            .is_some_and(Address::is_complete)
    }
}

/// A record could not be turned into a [`PlaceFeature`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlaceFeatureError {
    #[error("Missing name")]
    MissingName,
    #[error("Missing category")]
    MissingCategory,
    #[error("Missing or invalid coordinates")]
    InvalidPosition,
}
