//! # vmap-boundary
//!
//! Serializable data structures for the two JSON documents published by the
//! upstream batch process: the place feature collection and the statistics
//! document. Conversions into domain entities live in [`conv`](self::conv).

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

mod conv;

pub use self::conv::*;

/// The place-data document: a GeoJSON-style feature collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacesDoc {
    #[serde(default)]
    pub features: Vec<PlaceJson>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceJson {
    pub geometry: Option<GeometryJson>,
    #[serde(default)]
    pub properties: PropertiesJson,
}

/// GeoJSON point geometry; coordinates are `[lng, lat]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeometryJson {
    #[serde(default)]
    pub coordinates: Vec<f64>,
}

#[rustfmt::skip]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PropertiesJson {
    #[serde(rename = "_id")]
    pub id                : Option<String>,
    #[serde(rename = "_type")]
    pub osm_type          : Option<String>,
    pub name              : Option<String>,
    pub category          : Option<String>,
    pub symbol            : Option<String>,
    pub icon              : Option<String>,
    pub addr_street       : Option<String>,
    pub addr_postcode     : Option<String>,
    pub addr_city         : Option<String>,
    pub addr_country      : Option<String>,
    pub contact_phone     : Option<String>,
    pub contact_email     : Option<String>,
    pub contact_website   : Option<String>,
    pub contact_facebook  : Option<String>,
    pub contact_instagram : Option<String>,
    pub cuisine           : Option<String>,
    pub more_info         : Option<bool>,
    pub opening_hours     : Option<String>,
}

/// The statistics document: an ordered sequence of per-category count
/// snapshots, most recent last.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsDoc {
    #[serde(default)]
    pub stat: Vec<BTreeMap<String, u64>>,
}
