use std::fmt;

/// A geographical position in degrees.
///
/// Values are validated on construction, so every `MapPoint` holds finite
/// coordinates within the WGS84 range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapPoint {
    lat: f64,
    lng: f64,
}

impl MapPoint {
    pub const LAT_DEG_MIN: f64 = -90.0;
    pub const LAT_DEG_MAX: f64 = 90.0;
    pub const LNG_DEG_MIN: f64 = -180.0;
    pub const LNG_DEG_MAX: f64 = 180.0;

    pub fn try_from_lat_lng_deg(lat: f64, lng: f64) -> Option<Self> {
        if !lat.is_finite() || !lng.is_finite() {
            return None;
        }
        if !(Self::LAT_DEG_MIN..=Self::LAT_DEG_MAX).contains(&lat) {
            return None;
        }
        if !(Self::LNG_DEG_MIN..=Self::LNG_DEG_MAX).contains(&lng) {
            return None;
        }
        Some(Self { lat, lng })
    }

    pub const fn lat(self) -> f64 {
        self.lat
    }

    pub const fn lng(self) -> f64 {
        self.lng
    }
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accept_valid_coordinates() {
        let pos = MapPoint::try_from_lat_lng_deg(51.42, 12.0).unwrap();
        assert_eq!(pos.lat(), 51.42);
        assert_eq!(pos.lng(), 12.0);
    }

    #[test]
    fn reject_out_of_range_coordinates() {
        assert!(MapPoint::try_from_lat_lng_deg(90.01, 0.0).is_none());
        assert!(MapPoint::try_from_lat_lng_deg(0.0, -180.5).is_none());
        assert!(MapPoint::try_from_lat_lng_deg(f64::NAN, 0.0).is_none());
    }
}
