use vmap_entities as e;

use e::place::PlaceFeatureError;

use super::*;

impl TryFrom<PlaceJson> for e::place::PlaceFeature {
    type Error = PlaceFeatureError;

    fn try_from(from: PlaceJson) -> Result<Self, Self::Error> {
        let PlaceJson {
            geometry,
            properties,
        } = from;

        // GeoJSON order is [lng, lat].
        let pos = geometry
            .as_ref()
            .and_then(|g| match g.coordinates[..] {
                [lng, lat] => e::geo::MapPoint::try_from_lat_lng_deg(lat, lng),
                _ => None,
            })
            .ok_or(PlaceFeatureError::InvalidPosition)?;

        let PropertiesJson {
            id,
            osm_type,
            name,
            category,
            symbol,
            icon,
            addr_street,
            addr_postcode,
            addr_city,
            addr_country,
            contact_phone,
            contact_email,
            contact_website,
            contact_facebook,
            contact_instagram,
            cuisine,
            more_info,
            opening_hours,
        } = properties;

        let name = name.ok_or(PlaceFeatureError::MissingName)?;
        let category = category
            .map(|c| e::category::Category::from(c.as_str()))
            .ok_or(PlaceFeatureError::MissingCategory)?;

        // The permalink requires both the element type and the id.
        let osm_ref = match (osm_type, id) {
            (Some(element_type), Some(id)) => Some(e::osm::OsmRef { element_type, id }),
            _ => None,
        };

        let address = e::address::Address {
            street: addr_street,
            postcode: addr_postcode,
            city: addr_city,
            country: addr_country,
        };
        let address = (!address.is_empty()).then_some(address);

        let contact = e::contact::Contact {
            phone: contact_phone,
            email: contact_email,
        };
        let contact = (!contact.is_empty()).then_some(contact);

        // Unparsable URLs are dropped; the fields are display-only.
        let links = e::links::Links {
            website: contact_website.and_then(|s| s.parse().ok()),
            facebook: contact_facebook.and_then(|s| s.parse().ok()),
            instagram: contact_instagram.and_then(|s| s.parse().ok()),
        };
        let links = (!links.is_empty()).then_some(links);

        Ok(Self {
            osm_ref,
            pos,
            name,
            category,
            symbol,
            icon,
            address,
            contact,
            links,
            cuisine,
            more_info: more_info.unwrap_or(false),
            opening_hours: opening_hours.and_then(|s| s.parse().ok()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use e::{category::Category, place::PlaceFeature};

    fn parse_doc(json: &str) -> PlacesDoc {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn convert_full_feature() {
        let doc = parse_doc(
            r#"{
              "type": "FeatureCollection",
              "features": [
                {
                  "type": "Feature",
                  "geometry": { "type": "Point", "coordinates": [11.9688, 51.4822] },
                  "properties": {
                    "_id": "20962297",
                    "_type": "node",
                    "name": "denn's Biomarkt",
                    "category": "vegan_friendly",
                    "symbol": "V",
                    "icon": "supermarket",
                    "addr_street": "Merseburger Straße 107a",
                    "addr_postcode": "06110",
                    "addr_city": "Halle",
                    "addr_country": "DE",
                    "contact_phone": "+49 345 422677",
                    "contact_website": "https://www.denns-biomarkt.de/markt",
                    "cuisine": "organic",
                    "more_info": true,
                    "opening_hours": "Mo-Fr 08:00-19:00; Sa 08:00-18:00"
                  }
                }
              ]
            }"#,
        );
        let feature = doc.features.into_iter().next().unwrap();
        let place = PlaceFeature::try_from(feature).unwrap();

        // Coordinates are swapped from GeoJSON order.
        assert_eq!(place.pos.lat(), 51.4822);
        assert_eq!(place.pos.lng(), 11.9688);

        assert_eq!(place.name, "denn's Biomarkt");
        assert_eq!(place.category, Category::VeganFriendly);
        assert_eq!(
            place.osm_ref.as_ref().unwrap().permalink(),
            "https://openstreetmap.org/node/20962297"
        );
        assert!(place.address.as_ref().unwrap().is_complete());
        assert_eq!(place.contact.as_ref().unwrap().phone.as_deref(), Some("+49 345 422677"));
        assert!(place.links.as_ref().unwrap().website.is_some());
        assert!(place.more_info);
        assert_eq!(
            place.opening_hours.as_ref().unwrap().as_str(),
            "Mo-Fr 08:00-19:00; Sa 08:00-18:00"
        );
    }

    #[test]
    fn convert_minimal_feature() {
        let doc = parse_doc(
            r#"{ "features": [ {
                "geometry": { "coordinates": [12.0, 51.42] },
                "properties": { "name": "Kiosk", "category": "vegan_limited" }
            } ] }"#,
        );
        let place = PlaceFeature::try_from(doc.features.into_iter().next().unwrap()).unwrap();
        assert!(place.osm_ref.is_none());
        assert!(place.address.is_none());
        assert!(place.contact.is_none());
        assert!(place.links.is_none());
        assert!(place.opening_hours.is_none());
        assert!(!place.more_info);
    }

    #[test]
    fn missing_required_fields() {
        let doc = parse_doc(
            r#"{ "features": [
                { "geometry": { "coordinates": [12.0, 51.42] }, "properties": { "category": "vegan_only" } },
                { "geometry": { "coordinates": [12.0, 51.42] }, "properties": { "name": "No category" } },
                { "properties": { "name": "No geometry", "category": "vegan_only" } },
                { "geometry": { "coordinates": [12.0] }, "properties": { "name": "Short", "category": "vegan_only" } }
            ] }"#,
        );
        let errors: Vec<_> = doc
            .features
            .into_iter()
            .map(|f| PlaceFeature::try_from(f).unwrap_err())
            .collect();
        assert_eq!(
            errors,
            vec![
                PlaceFeatureError::MissingName,
                PlaceFeatureError::MissingCategory,
                PlaceFeatureError::InvalidPosition,
                PlaceFeatureError::InvalidPosition,
            ]
        );
    }

    #[test]
    fn parse_stats_doc() {
        let doc: StatsDoc = serde_json::from_str(
            r#"{ "stat": [
                { "vegan_only": 10, "vegetarian_only": 4 },
                { "vegan_only": 12, "vegetarian_only": 5 }
            ] }"#,
        )
        .unwrap();
        assert_eq!(doc.stat.len(), 2);
        assert_eq!(doc.stat.last().unwrap()["vegan_only"], 12);
    }
}
