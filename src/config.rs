//! Runtime settings for the toggle-sprint tool.

use std::time::Duration;

/// Seat the input context binds to unless overridden.
pub const DEFAULT_SEAT: &str = "seat0";

/// Name of the virtual keyboard as shown by the kernel.
pub const DEFAULT_DEVICE_NAME: &str = "Virtual Keyboard (toggle-sprint)";

/// Environment variable overriding [`SprintConfig::seat`].
pub const SEAT_ENV: &str = "TOGGLE_SPRINT_SEAT";

/// Environment variable enabling [`SprintConfig::quick_release`].
pub const QUICK_RELEASE_ENV: &str = "TOGGLE_SPRINT_QUICK_RELEASE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SprintConfig {
    /// udev seat to read input from.
    pub seat: String,
    /// Name given to the virtual keyboard.
    pub device_name: String,
    /// Re-press the sprint key after closing a GUI or releasing sneak.
    ///
    /// Bedrock edition stops noticing a held key in these situations.
    pub quick_release: bool,
    /// Gap between the release and re-press of a quick release.
    ///
    /// The game polls input, so it has to observe the key up.
    pub repress_delay: Duration,
    /// Wait after Enter/Esc/E/Z before re-pressing, for the GUI to close.
    pub ui_close_delay: Duration,
    /// Wait after releasing Shift before re-pressing, for sneak to end.
    pub sneak_delay: Duration,
}

impl Default for SprintConfig {
    fn default() -> Self {
        Self {
            seat: DEFAULT_SEAT.to_string(),
            device_name: DEFAULT_DEVICE_NAME.to_string(),
            quick_release: false,
            repress_delay: Duration::from_millis(50),
            ui_close_delay: Duration::from_millis(100),
            sneak_delay: Duration::from_millis(50),
        }
    }
}

impl SprintConfig {
    /// Defaults overridden by the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(seat) = lookup(SEAT_ENV).filter(|s| !s.trim().is_empty()) {
            config.seat = seat.trim().to_string();
        }

        if let Some(value) = lookup(QUICK_RELEASE_ENV) {
            match parse_flag(&value) {
                Some(enabled) => config.quick_release = enabled,
                None => log::warn!("ignoring {}={:?}: expected a boolean", QUICK_RELEASE_ENV, value),
            }
        }

        config
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> SprintConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        SprintConfig::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]);
        assert_eq!(config, SprintConfig::default());
        assert_eq!(config.seat, "seat0");
        assert!(!config.quick_release);
    }

    #[test]
    fn test_env_overrides() {
        let config = config_from(&[(SEAT_ENV, " seat1 "), (QUICK_RELEASE_ENV, "Yes")]);
        assert_eq!(config.seat, "seat1");
        assert!(config.quick_release);
    }

    #[test]
    fn test_invalid_values_ignored() {
        let config = config_from(&[(SEAT_ENV, "  "), (QUICK_RELEASE_ENV, "sometimes")]);
        assert_eq!(config.seat, DEFAULT_SEAT);
        assert!(!config.quick_release);
    }
}
