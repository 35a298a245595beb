use serde::Serialize;
use std::fmt;

/// Every state the check-in flow can be in during one screen activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FlowState {
    Idle,
    RequestingPermission,
    PermissionDenied,
    FetchingLocation,
    LocationError,
    Ready,
    ConfirmPending,
    Confirmed,
}

impl FlowState {
    pub fn as_str(&self) -> &'static str {
        match self {
            FlowState::Idle => "idle",
            FlowState::RequestingPermission => "requesting permission",
            FlowState::PermissionDenied => "permission denied",
            FlowState::FetchingLocation => "fetching location",
            FlowState::LocationError => "location error",
            FlowState::Ready => "ready",
            FlowState::ConfirmPending => "waiting for confirmation",
            FlowState::Confirmed => "confirmed",
        }
    }

    /// The platform is still answering (activity indicator visible).
    pub fn is_loading(&self) -> bool {
        matches!(
            self,
            FlowState::RequestingPermission | FlowState::FetchingLocation
        )
    }

    /// States where a fix is on screen and the "register" button works.
    pub fn can_save(&self) -> bool {
        matches!(self, FlowState::Ready | FlowState::Confirmed)
    }
}

impl fmt::Display for FlowState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
