use super::{LocationProvider, PermissionStatus, ProviderError};
use crate::models::{Address, LocationFix};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Answers served by [`StaticProvider`]. Stored under `provider:` in the
/// configuration file and overridable from the command line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderConfig {
    #[serde(default = "default_permission")]
    pub permission: PermissionStatus,
    #[serde(default = "default_latitude")]
    pub latitude: f64,
    #[serde(default = "default_longitude")]
    pub longitude: f64,
    #[serde(default)]
    pub accuracy: Option<f64>,
    #[serde(default)]
    pub fail_fix: bool,
    #[serde(default = "default_streets")]
    pub streets: Vec<String>,
    #[serde(default)]
    pub fail_geocode: bool,
    #[serde(default)]
    pub delay_ms: u64,
}

fn default_permission() -> PermissionStatus {
    PermissionStatus::Granted
}
fn default_latitude() -> f64 {
    -23.5558
}
fn default_longitude() -> f64 {
    -46.6623
}
fn default_streets() -> Vec<String> {
    vec!["Rua Augusta".to_string()]
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            permission: default_permission(),
            latitude: default_latitude(),
            longitude: default_longitude(),
            accuracy: None,
            fail_fix: false,
            streets: default_streets(),
            fail_geocode: false,
            delay_ms: 0,
        }
    }
}

/// Provider for hosts without a positioning device.
#[derive(Debug, Clone)]
pub struct StaticProvider {
    cfg: ProviderConfig,
}

impl StaticProvider {
    pub fn new(cfg: ProviderConfig) -> Self {
        Self { cfg }
    }

    async fn latency(&self) {
        if self.cfg.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.cfg.delay_ms)).await;
        }
    }
}

impl LocationProvider for StaticProvider {
    async fn request_foreground_permission(&self) -> PermissionStatus {
        self.latency().await;
        debug!(permission = ?self.cfg.permission, "foreground permission answered");
        self.cfg.permission
    }

    async fn get_current_fix(&self) -> Result<LocationFix, ProviderError> {
        self.latency().await;
        if self.cfg.fail_fix {
            debug!("fix requested while location services are disabled");
            return Err(ProviderError::LocationUnavailable);
        }

        LocationFix::now(self.cfg.latitude, self.cfg.longitude, self.cfg.accuracy)
            .map_err(|e| ProviderError::InvalidFix(e.to_string()))
    }

    async fn reverse_geocode(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Vec<Address>, ProviderError> {
        self.latency().await;
        if self.cfg.fail_geocode {
            return Err(ProviderError::Geocoding(format!(
                "no geocoder available for {latitude:.6}, {longitude:.6}"
            )));
        }

        Ok(self
            .cfg
            .streets
            .iter()
            .map(|s| Address::with_street(s))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn serves_configured_fix() {
        let provider = StaticProvider::new(ProviderConfig {
            latitude: 10.0,
            longitude: 20.0,
            accuracy: Some(5.0),
            ..ProviderConfig::default()
        });

        let fix = provider.get_current_fix().await.unwrap();
        assert_eq!(fix.latitude(), 10.0);
        assert_eq!(fix.longitude(), 20.0);
        assert_eq!(fix.accuracy(), Some(5.0));
    }

    #[tokio::test]
    async fn invalid_configured_coordinates_become_provider_error() {
        let provider = StaticProvider::new(ProviderConfig {
            latitude: 200.0,
            ..ProviderConfig::default()
        });

        let err = provider.get_current_fix().await.unwrap_err();
        assert!(matches!(err, ProviderError::InvalidFix(_)));
    }

    #[tokio::test]
    async fn failing_services() {
        let provider = StaticProvider::new(ProviderConfig {
            permission: PermissionStatus::Denied,
            fail_fix: true,
            fail_geocode: true,
            ..ProviderConfig::default()
        });

        assert_eq!(
            provider.request_foreground_permission().await,
            PermissionStatus::Denied
        );
        assert_eq!(
            provider.get_current_fix().await,
            Err(ProviderError::LocationUnavailable)
        );
        assert!(provider.reverse_geocode(0.0, 0.0).await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn latency_is_applied_per_call() {
        let provider = StaticProvider::new(ProviderConfig {
            delay_ms: 250,
            ..ProviderConfig::default()
        });

        let started = tokio::time::Instant::now();
        provider.request_foreground_permission().await;
        assert!(started.elapsed() >= Duration::from_millis(250));
    }
}
