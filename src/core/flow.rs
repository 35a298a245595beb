//! Location check-in workflow.
//!
//! ```text
//! Idle → RequestingPermission ─┬─ denied ─→ PermissionDenied
//!                              └─ granted → FetchingLocation ─┬─ error → LocationError
//!                                                             └─ fix ──→ Ready
//! Ready ─save→ ConfirmPending ─confirm→ Confirmed ─save→ ConfirmPending …
//!                             └cancel─→ (back to where save was pressed)
//! ```
//!
//! The state lives behind a shared handle owned by the screen. A running
//! [`Activation`] only keeps a weak reference, so a result that arrives after
//! the screen is gone is dropped instead of applied.

use crate::core::diagnostics::Diagnostic;
use crate::core::profile::ScreenProfile;
use crate::errors::{AppError, AppResult};
use crate::models::{CheckInRecord, FlowState, LocationFix, StreetLabel};
use crate::providers::LocationProvider;
use chrono::{DateTime, TimeZone};
use std::fmt::Display;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use tracing::{debug, info, warn};

pub const PERMISSION_DENIED_MSG: &str = "Permission to access location was denied";
pub const LOCATION_FAILED_MSG: &str = "Failed to get location";
pub const CHECKIN_SUCCESS_MSG: &str = "Ponto registrado com sucesso!";

#[derive(Debug)]
struct FlowCore {
    profile: ScreenProfile,
    state: FlowState,
    error: Option<&'static str>,
    fix: Option<LocationFix>,
    street: Option<StreetLabel>,
    resolving_street: bool,
    record: Option<CheckInRecord>,
    save_origin: FlowState,
    notification: Option<String>,
    diagnostics: Vec<Diagnostic>,
}

/// Read-only view of the flow for the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowSnapshot {
    pub state: FlowState,
    pub error_message: Option<String>,
    pub fix: Option<LocationFix>,
    pub street: Option<StreetLabel>,
    pub record: Option<CheckInRecord>,
    pub modal_visible: bool,
    pub loading: bool,
}

/// Result of driving an activation to the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationOutcome {
    Applied(FlowState),
    /// The flow was torn down before a provider answered.
    Discarded,
}

pub struct LocationCheckInFlow {
    core: Arc<Mutex<FlowCore>>,
}

fn lock(core: &Mutex<FlowCore>) -> MutexGuard<'_, FlowCore> {
    core.lock().unwrap_or_else(PoisonError::into_inner)
}

impl LocationCheckInFlow {
    pub fn new(profile: ScreenProfile) -> Self {
        Self {
            core: Arc::new(Mutex::new(FlowCore {
                profile,
                state: FlowState::Idle,
                error: None,
                fix: None,
                street: None,
                resolving_street: false,
                record: None,
                save_origin: FlowState::Ready,
                notification: None,
                diagnostics: Vec::new(),
            })),
        }
    }

    pub fn state(&self) -> FlowState {
        lock(&self.core).state
    }

    pub fn snapshot(&self) -> FlowSnapshot {
        let core = lock(&self.core);
        FlowSnapshot {
            state: core.state,
            error_message: core.error.map(str::to_string),
            fix: core.fix.clone(),
            street: core.street.clone(),
            record: core.record.clone(),
            modal_visible: core.state == FlowState::ConfirmPending,
            loading: core.state.is_loading() || core.resolving_street,
        }
    }

    /// Idle → RequestingPermission. The returned activation performs the
    /// provider calls.
    pub fn start(&self) -> AppResult<Activation> {
        let mut core = lock(&self.core);
        if core.state != FlowState::Idle {
            return Err(AppError::InvalidTransition {
                action: "activate",
                state: core.state,
            });
        }
        core.state = FlowState::RequestingPermission;
        debug!(profile = core.profile.kind.code(), "check-in flow activated");

        Ok(Activation {
            core: Arc::downgrade(&self.core),
            resolve_street: core.profile.resolve_street,
        })
    }

    /// Start and run the activation while this flow is alive.
    pub async fn activate<P: LocationProvider>(&self, provider: &P) -> AppResult<FlowState> {
        let activation = self.start()?;
        match activation.run(provider).await {
            ActivationOutcome::Applied(state) => Ok(state),
            // `self` is borrowed for the whole call, so the flow cannot vanish.
            ActivationOutcome::Discarded => Ok(self.state()),
        }
    }

    /// "Registrar Ponto": open the confirmation modal.
    pub fn save(&self) -> AppResult<()> {
        let mut core = lock(&self.core);
        if !core.state.can_save() || core.resolving_street {
            return Err(AppError::InvalidTransition {
                action: "save",
                state: core.state,
            });
        }
        core.save_origin = core.state;
        core.state = FlowState::ConfirmPending;
        Ok(())
    }

    /// Close the modal and stamp `now` with the profile's pattern.
    pub fn confirm<Tz>(&self, now: &DateTime<Tz>) -> AppResult<CheckInRecord>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let mut core = lock(&self.core);
        if core.state != FlowState::ConfirmPending {
            return Err(AppError::InvalidTransition {
                action: "confirm",
                state: core.state,
            });
        }

        let record = CheckInRecord::at(now, core.profile.timestamp_pattern);
        info!(timestamp = %record.timestamp, "check-in confirmed");
        core.record = Some(record.clone());
        core.state = FlowState::Confirmed;
        core.notification = Some(CHECKIN_SUCCESS_MSG.to_string());
        Ok(record)
    }

    /// Close the modal without creating a record.
    pub fn cancel(&self) -> AppResult<()> {
        let mut core = lock(&self.core);
        if core.state != FlowState::ConfirmPending {
            return Err(AppError::InvalidTransition {
                action: "cancel",
                state: core.state,
            });
        }
        core.state = core.save_origin;
        Ok(())
    }

    /// Pending success message, cleared once read.
    pub fn take_notification(&self) -> Option<String> {
        lock(&self.core).notification.take()
    }

    pub fn take_diagnostics(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut lock(&self.core).diagnostics)
    }

    /// Screen teardown. Any activation still running will discard its result.
    pub fn teardown(self) {
        debug!(state = %self.state(), "check-in flow torn down");
    }
}

/// One pass through permission → fix → optional street lookup.
#[must_use = "an activation does nothing until it is run"]
pub struct Activation {
    core: Weak<Mutex<FlowCore>>,
    resolve_street: bool,
}

impl Activation {
    pub async fn run<P: LocationProvider>(self, provider: &P) -> ActivationOutcome {
        let status = provider.request_foreground_permission().await;
        let Some(core) = self.alive() else {
            return ActivationOutcome::Discarded;
        };
        {
            let mut core = lock(&core);
            if !status.is_granted() {
                warn!("foreground location permission denied");
                core.state = FlowState::PermissionDenied;
                core.error = Some(PERMISSION_DENIED_MSG);
                core.diagnostics.push(Diagnostic::new(
                    "permission",
                    "foreground",
                    PERMISSION_DENIED_MSG,
                ));
                return ActivationOutcome::Applied(core.state);
            }
            core.state = FlowState::FetchingLocation;
        }
        drop(core);

        let fetched = provider.get_current_fix().await;
        let Some(core) = self.alive() else {
            return ActivationOutcome::Discarded;
        };
        let (latitude, longitude) = {
            let mut core = lock(&core);
            match fetched {
                Ok(fix) => {
                    debug!(coords = %fix.coords_str(), "location fix received");
                    let coords = (fix.latitude(), fix.longitude());
                    core.fix = Some(fix);
                    core.state = FlowState::Ready;
                    if !self.resolve_street {
                        return ActivationOutcome::Applied(core.state);
                    }
                    core.resolving_street = true;
                    coords
                }
                Err(e) => {
                    warn!(error = %e, "location fetch failed");
                    core.state = FlowState::LocationError;
                    core.error = Some(LOCATION_FAILED_MSG);
                    core.diagnostics
                        .push(Diagnostic::new("location", "fix", e.to_string()));
                    return ActivationOutcome::Applied(core.state);
                }
            }
        };
        drop(core);

        let lookup = provider.reverse_geocode(latitude, longitude).await;
        let Some(core) = self.alive() else {
            return ActivationOutcome::Discarded;
        };
        let mut core = lock(&core);
        core.resolving_street = false;
        match lookup {
            Ok(addresses) => {
                core.street = StreetLabel::from_lookup(&addresses);
                if core.street.is_none() {
                    debug!("reverse geocoding returned no street");
                }
            }
            Err(e) => {
                warn!(error = %e, "reverse geocoding failed");
                core.diagnostics.push(Diagnostic::new(
                    "geocode",
                    format!("{latitude:.6},{longitude:.6}"),
                    e.to_string(),
                ));
            }
        }
        ActivationOutcome::Applied(core.state)
    }

    fn alive(&self) -> Option<Arc<Mutex<FlowCore>>> {
        let core = self.core.upgrade();
        if core.is_none() {
            debug!("flow torn down, discarding provider result");
        }
        core
    }
}
