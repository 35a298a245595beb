use serde::{Deserialize, Serialize};
use std::fmt;

/// One entry returned by a reverse lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default)]
    pub street: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

impl Address {
    pub fn with_street(street: &str) -> Self {
        Self {
            street: Some(street.to_string()),
            ..Self::default()
        }
    }
}

/// Human readable street name for a fix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StreetLabel(String);

impl StreetLabel {
    /// Street of the first address, if the lookup produced a usable one.
    pub fn from_lookup(addresses: &[Address]) -> Option<Self> {
        addresses
            .first()
            .and_then(|a| a.street.as_deref())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| StreetLabel(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StreetLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn takes_street_of_first_address() {
        let found = vec![
            Address::with_street("Rua Augusta"),
            Address::with_street("Av. Paulista"),
        ];
        assert_eq!(
            StreetLabel::from_lookup(&found).map(|s| s.to_string()),
            Some("Rua Augusta".to_string())
        );
    }

    #[test]
    fn empty_lookup_or_blank_street_yields_none() {
        assert_eq!(StreetLabel::from_lookup(&[]), None);
        assert_eq!(StreetLabel::from_lookup(&[Address::with_street("   ")]), None);
        assert_eq!(StreetLabel::from_lookup(&[Address::default()]), None);
    }
}
