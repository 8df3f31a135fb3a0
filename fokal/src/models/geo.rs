//! Geographic points.

use serde::{Deserialize, Serialize};

/// SRID of WGS 84 longitude/latitude coordinates.
pub const SRID_WGS84: i32 = 4326;

const EARTH_RADIUS_METERS: f64 = 6_371_008.8;

/// A point on the globe.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
    #[serde(default = "default_srid")]
    pub srid: i32,
}

fn default_srid() -> i32 {
    SRID_WGS84
}

impl GeoPoint {
    pub fn wgs84(lat: f64, lng: f64) -> Self {
        Self {
            lat,
            lng,
            srid: SRID_WGS84,
        }
    }

    /// Great-circle distance in metres (haversine).
    pub fn distance_meters(&self, other: &GeoPoint) -> f64 {
        let (lat1, lat2) = (self.lat.to_radians(), other.lat.to_radians());
        let dlat = lat2 - lat1;
        let dlng = (other.lng - self.lng).to_radians();

        let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlng / 2.0).sin().powi(2);
        2.0 * EARTH_RADIUS_METERS * a.sqrt().min(1.0).asin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_same_point() {
        let p = GeoPoint::wgs84(48.8566, 2.3522);
        assert_eq!(p.distance_meters(&p), 0.0);
    }

    #[test]
    fn test_distance_paris_london() {
        let paris = GeoPoint::wgs84(48.8566, 2.3522);
        let london = GeoPoint::wgs84(51.5074, -0.1278);
        let d = paris.distance_meters(&london);
        assert!((d - 343_500.0).abs() < 2_000.0, "got {d}");
    }
}
