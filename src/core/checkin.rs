use crate::config::Config;
use crate::core::profile::{ProfileKind, ScreenProfile};
use crate::db::log::record_diagnostics;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::providers::{PermissionStatus, ProviderConfig, StaticProvider};
use crate::ui::messages::warning;
use crate::ui::screen::{InputMode, Screen, ScreenOutcome};
use crate::utils::time;
use std::io;
use tracing::debug;

/// Command-line adjustments on top of the configured provider answers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProviderOverrides {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub accuracy: Option<f64>,
    pub deny: bool,
    pub fail_fix: bool,
    pub street: Option<String>,
    pub no_street: bool,
    pub fail_geocode: bool,
    pub delay_ms: Option<u64>,
}

impl ProviderOverrides {
    pub fn apply(&self, base: &ProviderConfig) -> ProviderConfig {
        let mut cfg = base.clone();
        if let Some(lat) = self.latitude {
            cfg.latitude = lat;
        }
        if let Some(lon) = self.longitude {
            cfg.longitude = lon;
        }
        if self.accuracy.is_some() {
            cfg.accuracy = self.accuracy;
        }
        if self.deny {
            cfg.permission = PermissionStatus::Denied;
        }
        cfg.fail_fix |= self.fail_fix;
        cfg.fail_geocode |= self.fail_geocode;
        if let Some(street) = &self.street {
            cfg.streets = vec![street.clone()];
        }
        if self.no_street {
            cfg.streets.clear();
        }
        if let Some(ms) = self.delay_ms {
            cfg.delay_ms = ms;
        }
        cfg
    }
}

/// Where the screen stack starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry {
    Home,
    Location,
}

pub struct CheckinLogic;

impl CheckinLogic {
    pub async fn run(
        cfg: &Config,
        profile: ProfileKind,
        overrides: &ProviderOverrides,
        mode: InputMode,
        entry: Entry,
    ) -> AppResult<Option<ScreenOutcome>> {
        let provider = StaticProvider::new(overrides.apply(&cfg.provider));
        debug!(?profile, ?entry, "starting check-in screens");

        let stdin = io::stdin();
        let stdout = io::stdout();
        let mut screen = Screen::new(
            stdin.lock(),
            stdout.lock(),
            ScreenProfile::for_kind(profile),
            cfg.color,
        );

        let outcome = match entry {
            Entry::Home => screen.run_home(&provider, mode, time::now).await?,
            Entry::Location => Some(screen.run_location(&provider, mode, time::now).await?),
        };
        drop(screen);

        if let Some(o) = &outcome {
            Self::store_diagnostics(&cfg.database, o);
        }
        Ok(outcome)
    }

    /// Diagnostics never abort the flow: failures only produce a warning.
    fn store_diagnostics(database: &str, outcome: &ScreenOutcome) {
        if outcome.diagnostics.is_empty() {
            return;
        }
        let written = DbPool::open_ready(database)
            .and_then(|pool| record_diagnostics(&pool.conn, &outcome.diagnostics));
        if let Err(e) = written {
            warning(format!("Failed to write internal log: {e}"));
        }
    }
}
