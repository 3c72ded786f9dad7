//! Booking configuration.
//!
//! Configuration values should be provided by the application, not hardcoded.
//! [`BookingConfig::from_env`] reads them from environment variables with
//! defaults matching the historical behavior.

use crate::constants::DEFAULT_ORGANIZER_ADDRESS;
use serde::{Deserialize, Serialize};
use std::env;

/// Environment variable overriding [`NotificationConfig::organizer_address`].
pub const ORGANIZER_ADDRESS_VAR: &str = "BOOKING_ORGANIZER_ADDRESS";

/// Environment variable enabling [`NotificationConfig::resolve_organizer`].
pub const RESOLVE_ORGANIZER_VAR: &str = "BOOKING_RESOLVE_ORGANIZER";

/// Routing of booking confirmation emails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// Recipient of confirmations, and the fallback when the organizer
    /// cannot be resolved.
    ///
    /// Default: `organisateur@gmail.com`
    pub organizer_address: String,

    /// Look up the webinar's organizer in the user repository and mail them
    /// directly.
    ///
    /// Default: `false`
    pub resolve_organizer: bool,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            organizer_address: DEFAULT_ORGANIZER_ADDRESS.to_string(),
            resolve_organizer: false,
        }
    }
}

/// Top-level configuration of the booking use case.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingConfig {
    /// Confirmation email routing.
    pub notification: NotificationConfig,
}

impl BookingConfig {
    /// Set the fixed organizer address.
    #[must_use]
    pub fn with_organizer_address(mut self, address: impl Into<String>) -> Self {
        self.notification.organizer_address = address.into();
        self
    }

    /// Enable or disable organizer resolution through the user repository.
    #[must_use]
    pub const fn with_resolve_organizer(mut self, resolve: bool) -> Self {
        self.notification.resolve_organizer = resolve;
        self
    }

    /// Load configuration from environment variables.
    ///
    /// Missing or unparsable values fall back to their defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = NotificationConfig::default();

        Self {
            notification: NotificationConfig {
                organizer_address: lookup(ORGANIZER_ADDRESS_VAR)
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .unwrap_or(defaults.organizer_address),
                resolve_organizer: lookup(RESOLVE_ORGANIZER_VAR)
                    .and_then(|s| parse_flag(&s))
                    .unwrap_or(defaults.resolve_organizer),
            },
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = BookingConfig::default();
        assert_eq!(config.notification.organizer_address, "organisateur@gmail.com");
        assert!(!config.notification.resolve_organizer);
    }

    #[test]
    fn test_from_lookup_empty_uses_defaults() {
        let config = BookingConfig::from_lookup(|_| None);
        assert_eq!(config, BookingConfig::default());
    }

    #[test]
    fn test_from_lookup_overrides() {
        let config = BookingConfig::from_lookup(lookup_from(&[
            (ORGANIZER_ADDRESS_VAR, " events@example.com "),
            (RESOLVE_ORGANIZER_VAR, "TRUE"),
        ]));
        assert_eq!(config.notification.organizer_address, "events@example.com");
        assert!(config.notification.resolve_organizer);
    }

    #[test]
    fn test_from_lookup_ignores_invalid_values() {
        let config = BookingConfig::from_lookup(lookup_from(&[
            (ORGANIZER_ADDRESS_VAR, "   "),
            (RESOLVE_ORGANIZER_VAR, "maybe"),
        ]));
        assert_eq!(config, BookingConfig::default());
    }

    #[test]
    fn test_builders() {
        let config = BookingConfig::default()
            .with_organizer_address("team@example.com")
            .with_resolve_organizer(true);
        assert_eq!(config.notification.organizer_address, "team@example.com");
        assert!(config.notification.resolve_organizer);
    }
}
