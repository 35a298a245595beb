use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Local};
use serde::Serialize;

/// A single point-in-time location reading.
///
/// Built once per activation and never mutated afterwards; the flow hands out
/// shared references only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationFix {
    latitude: f64,
    longitude: f64,
    accuracy: Option<f64>, // metres, as reported by the platform
    captured_at: DateTime<Local>,
}

impl LocationFix {
    pub fn new(
        latitude: f64,
        longitude: f64,
        accuracy: Option<f64>,
        captured_at: DateTime<Local>,
    ) -> AppResult<Self> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(AppError::InvalidCoordinate(format!(
                "latitude {latitude} is outside [-90, 90]"
            )));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(AppError::InvalidCoordinate(format!(
                "longitude {longitude} is outside [-180, 180]"
            )));
        }
        if let Some(acc) = accuracy
            && (!acc.is_finite() || acc < 0.0)
        {
            return Err(AppError::InvalidCoordinate(format!(
                "accuracy {acc} must be a non-negative number of metres"
            )));
        }

        Ok(Self {
            latitude,
            longitude,
            accuracy,
            captured_at,
        })
    }

    /// Fix captured right now.
    pub fn now(latitude: f64, longitude: f64, accuracy: Option<f64>) -> AppResult<Self> {
        Self::new(latitude, longitude, accuracy, Local::now())
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn accuracy(&self) -> Option<f64> {
        self.accuracy
    }

    pub fn captured_at(&self) -> DateTime<Local> {
        self.captured_at
    }

    pub fn coords_str(&self) -> String {
        format!("{:.6}, {:.6}", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_valid_coordinates() {
        let fix = LocationFix::now(-23.5505, -46.6333, Some(12.5)).unwrap();
        assert_eq!(fix.latitude(), -23.5505);
        assert_eq!(fix.longitude(), -46.6333);
        assert_eq!(fix.accuracy(), Some(12.5));
        assert_eq!(fix.coords_str(), "-23.550500, -46.633300");
    }

    #[test]
    fn rejects_out_of_range_latitude() {
        let err = LocationFix::now(91.0, 0.0, None).unwrap_err();
        assert!(matches!(err, AppError::InvalidCoordinate(_)));
    }

    #[test]
    fn rejects_nan_longitude_and_negative_accuracy() {
        assert!(LocationFix::now(0.0, f64::NAN, None).is_err());
        assert!(LocationFix::now(0.0, 0.0, Some(-1.0)).is_err());
    }
}
