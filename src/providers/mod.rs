//! Host platform capabilities consumed by the check-in flow.
//!
//! The flow only talks to a [`LocationProvider`]; the terminal build ships
//! [`StaticProvider`], whose answers come from the configuration file.

pub mod static_provider;

pub use static_provider::{ProviderConfig, StaticProvider};

use crate::models::{Address, LocationFix};
use serde::{Deserialize, Serialize};
use std::future::Future;
use thiserror::Error;

/// Answer to a foreground location permission request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionStatus {
    Granted,
    Denied,
}

impl PermissionStatus {
    pub fn is_granted(&self) -> bool {
        matches!(self, PermissionStatus::Granted)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    #[error("location services are unavailable")]
    LocationUnavailable,

    #[error("the provider returned an invalid fix: {0}")]
    InvalidFix(String),

    #[error("reverse geocoding failed: {0}")]
    Geocoding(String),
}

/// Permission, one-shot position and reverse lookup.
///
/// Each call resolves exactly once; there is no cancellation.
pub trait LocationProvider {
    fn request_foreground_permission(&self) -> impl Future<Output = PermissionStatus> + Send;

    fn get_current_fix(&self) -> impl Future<Output = Result<LocationFix, ProviderError>> + Send;

    fn reverse_geocode(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> impl Future<Output = Result<Vec<Address>, ProviderError>> + Send;
}
