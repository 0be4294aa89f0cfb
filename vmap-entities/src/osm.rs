use std::fmt;

pub const OSM_BASE_URL: &str = "https://openstreetmap.org";

/// Reference to the OpenStreetMap element a place record originates from.
///
/// Both the element type (`node`, `way`, `relation`) and the numeric id are
/// required to build the permalink, which is why a place either carries a
/// complete reference or none at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OsmRef {
    pub element_type: String,
    pub id: String,
}

impl OsmRef {
    /// Permalink into the upstream data source, e.g.
    /// `https://openstreetmap.org/node/20962297`.
    pub fn permalink(&self) -> String {
        format!("{OSM_BASE_URL}/{}/{}", self.element_type, self.id)
    }

    /// Fragment token used to address a place on external info pages.
    pub fn anchor(&self) -> String {
        format!("{}{}", self.element_type, self.id)
    }
}

impl fmt::Display for OsmRef {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.permalink())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn permalink_path_shape() {
        let osm = OsmRef {
            element_type: "node".into(),
            id: "20962297".into(),
        };
        assert_eq!(osm.permalink(), "https://openstreetmap.org/node/20962297");
        assert_eq!(osm.anchor(), "node20962297");
    }
}
