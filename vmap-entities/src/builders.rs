//! Convenience builders for tests.

use crate::{
    address::Address, category::Category, contact::Contact, geo::MapPoint, links::Links,
    osm::OsmRef, place::PlaceFeature,
};

#[derive(Debug)]
pub struct PlaceFeatureBuilder(PlaceFeature);

impl PlaceFeature {
    pub fn build(name: &str, category: Category) -> PlaceFeatureBuilder {
        let pos = MapPoint::try_from_lat_lng_deg(51.49, 11.97).unwrap();
        PlaceFeatureBuilder(PlaceFeature {
            osm_ref: None,
            pos,
            name: name.to_string(),
            category,
            symbol: None,
            icon: None,
            address: None,
            contact: None,
            links: None,
            cuisine: None,
            more_info: false,
            opening_hours: None,
        })
    }
}

impl PlaceFeatureBuilder {
    pub fn pos(mut self, lat: f64, lng: f64) -> Self {
        self.0.pos = MapPoint::try_from_lat_lng_deg(lat, lng).unwrap();
        self
    }

    pub fn osm_ref(mut self, element_type: &str, id: &str) -> Self {
        self.0.osm_ref = Some(OsmRef {
            element_type: element_type.to_string(),
            id: id.to_string(),
        });
        self
    }

    pub fn symbol(mut self, symbol: &str) -> Self {
        self.0.symbol = Some(symbol.to_string());
        self
    }

    pub fn icon(mut self, icon: &str) -> Self {
        self.0.icon = Some(icon.to_string());
        self
    }

    pub fn address(mut self, address: Address) -> Self {
        self.0.address = Some(address);
        self
    }

    pub fn contact(mut self, contact: Contact) -> Self {
        self.0.contact = Some(contact);
        self
    }

    pub fn links(mut self, links: Links) -> Self {
        self.0.links = Some(links);
        self
    }

    pub fn cuisine(mut self, cuisine: &str) -> Self {
        self.0.cuisine = Some(cuisine.to_string());
        self
    }

    pub fn more_info(mut self) -> Self {
        self.0.more_info = true;
        self
    }

    pub fn opening_hours(mut self, spec: &str) -> Self {
        self.0.opening_hours = Some(spec.parse().unwrap());
        self
    }

    pub fn finish(self) -> PlaceFeature {
        self.0
    }
}
