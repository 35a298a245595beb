//! Presentation-only differences between the two check-in screens.

use crate::errors::{AppError, AppResult};
use crate::models::TimestampPattern;
use serde::{Deserialize, Serialize};

/// Built-in screen variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileKind {
    /// Plain screen: timestamp with seconds, no address lookup.
    Basic,
    /// Branded screen: street name lookup, timestamp without seconds.
    Street,
}

impl ProfileKind {
    pub fn code(&self) -> &'static str {
        match self {
            ProfileKind::Basic => "basic",
            ProfileKind::Street => "street",
        }
    }

    pub fn from_code(code: &str) -> AppResult<Self> {
        match code.trim().to_lowercase().as_str() {
            "basic" | "b" => Ok(ProfileKind::Basic),
            "street" | "s" => Ok(ProfileKind::Street),
            other => Err(AppError::InvalidProfile(format!(
                "unknown profile '{other}' (use 'basic' or 'street')"
            ))),
        }
    }
}

/// Hex colors (`#RRGGBB`) used when drawing a screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub text: &'static str,
    pub button: &'static str,
    pub modal: &'static str,
    pub cancel: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenProfile {
    pub kind: ProfileKind,
    pub resolve_street: bool,
    pub timestamp_pattern: TimestampPattern,
    pub palette: Palette,
    pub home_action: &'static str,
    pub save_label: &'static str,
    pub modal_prompt: &'static str,
    pub confirm_label: &'static str,
    pub cancel_label: &'static str,
    pub marker_title: &'static str,
}

impl ScreenProfile {
    pub fn basic() -> Self {
        Self::with_labels(
            ProfileKind::Basic,
            false,
            TimestampPattern::Seconds,
            Palette {
                background: "#FFFFFF",
                text: "#000000",
                button: "#2196F3",
                modal: "#FFFFFF",
                cancel: "#2196F3",
            },
        )
    }

    pub fn street() -> Self {
        Self::with_labels(
            ProfileKind::Street,
            true,
            TimestampPattern::Minutes,
            Palette {
                background: "#A0E3F2",
                text: "#FFFFFF",
                button: "#F2A341",
                modal: "#F29199",
                cancel: "#F24452",
            },
        )
    }

    pub fn for_kind(kind: ProfileKind) -> Self {
        match kind {
            ProfileKind::Basic => Self::basic(),
            ProfileKind::Street => Self::street(),
        }
    }

    fn with_labels(
        kind: ProfileKind,
        resolve_street: bool,
        timestamp_pattern: TimestampPattern,
        palette: Palette,
    ) -> Self {
        Self {
            kind,
            resolve_street,
            timestamp_pattern,
            palette,
            home_action: "MARCAR PONTO",
            save_label: "Registrar Ponto",
            modal_prompt: "Deseja confirmar o registro do ponto?",
            confirm_label: "Confirmar",
            cancel_label: "Cancelar",
            marker_title: "Localização Atual",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn street_profile_resolves_addresses_with_minute_precision() {
        let p = ScreenProfile::for_kind(ProfileKind::Street);
        assert!(p.resolve_street);
        assert_eq!(p.timestamp_pattern, TimestampPattern::Minutes);
        assert_eq!(p.palette.button, "#F2A341");
    }

    #[test]
    fn basic_profile_keeps_seconds_and_skips_lookup() {
        let p = ScreenProfile::for_kind(ProfileKind::Basic);
        assert!(!p.resolve_street);
        assert_eq!(p.timestamp_pattern, TimestampPattern::Seconds);
        assert_eq!(p.save_label, "Registrar Ponto");
    }

    #[test]
    fn profile_codes() {
        assert_eq!(ProfileKind::from_code("STREET").unwrap(), ProfileKind::Street);
        assert_eq!(ProfileKind::Basic.code(), "basic");
        assert!(matches!(
            ProfileKind::from_code("fancy"),
            Err(AppError::InvalidProfile(_))
        ));
    }
}
