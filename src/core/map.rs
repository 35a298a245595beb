//! Input for the map widget: a region centred on the fix plus one marker.

use crate::models::LocationFix;

pub const LATITUDE_DELTA: f64 = 0.0922;
pub const LONGITUDE_DELTA: f64 = 0.0421;

#[derive(Debug, Clone, PartialEq)]
pub struct MapRegion {
    pub latitude: f64,
    pub longitude: f64,
    pub latitude_delta: f64,
    pub longitude_delta: f64,
    pub marker_title: String,
}

impl MapRegion {
    pub fn around(fix: &LocationFix, marker_title: &str) -> Self {
        Self {
            latitude: fix.latitude(),
            longitude: fix.longitude(),
            latitude_delta: LATITUDE_DELTA,
            longitude_delta: LONGITUDE_DELTA,
            marker_title: marker_title.to_string(),
        }
    }

    /// (south, west, north, east), clamped to valid coordinates.
    pub fn bounds(&self) -> (f64, f64, f64, f64) {
        let half_lat = self.latitude_delta / 2.0;
        let half_lon = self.longitude_delta / 2.0;
        (
            (self.latitude - half_lat).max(-90.0),
            (self.longitude - half_lon).max(-180.0),
            (self.latitude + half_lat).min(90.0),
            (self.longitude + half_lon).min(180.0),
        )
    }
}
