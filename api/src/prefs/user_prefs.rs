use std::env;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

/// Represents all user prefs. Intended for saving to a file, editing in a
/// settings dialog, etc.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct UserPrefs {
    notification_max: u32,
    default_rating: f32,
    notification_refresh_secs: u64,
}

impl UserPrefs {
    pub const DEFAULT_NOTIFICATION_MAX: u32 = 99;
    pub const DEFAULT_RATING: f32 = 4.5;
    pub const DEFAULT_NOTIFICATION_REFRESH_SECS: u64 = 60;

    /// Builds prefs from environment variables, with in-code defaults.
    ///
    /// # Environment Variables
    /// - `BITLEND_NOTIFICATION_MAX`: badge cap, above which "{max}+" is shown.
    /// - `BITLEND_DEFAULT_RATING`: rating shown on marketplace cards lacking one.
    /// - `BITLEND_NOTIFICATION_REFRESH_SECS`: polling interval for the badge.
    ///
    /// Missing or unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Like [`Self::from_env`], reading values through `lookup` instead.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        fn parsed<T: FromStr>(raw: Option<String>) -> Option<T> {
            raw.and_then(|s| s.trim().parse().ok())
        }

        let notification_max = parsed(lookup("BITLEND_NOTIFICATION_MAX"))
            .filter(|max: &u32| *max > 0)
            .unwrap_or(Self::DEFAULT_NOTIFICATION_MAX);

        let default_rating = parsed(lookup("BITLEND_DEFAULT_RATING"))
            .filter(|rating: &f32| (0.0..=5.0).contains(rating))
            .unwrap_or(Self::DEFAULT_RATING);

        let notification_refresh_secs = parsed(lookup("BITLEND_NOTIFICATION_REFRESH_SECS"))
            .filter(|secs: &u64| *secs > 0)
            .unwrap_or(Self::DEFAULT_NOTIFICATION_REFRESH_SECS);

        Self {
            notification_max,
            default_rating,
            notification_refresh_secs,
        }
    }

    pub fn notification_max(&self) -> u32 {
        self.notification_max
    }

    pub fn default_rating(&self) -> f32 {
        self.default_rating
    }

    pub fn notification_refresh_secs(&self) -> u64 {
        self.notification_refresh_secs
    }
}

impl Default for UserPrefs {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn prefs_with(vars: &[(&str, &str)]) -> UserPrefs {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        UserPrefs::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_env() {
        let prefs = prefs_with(&[]);
        assert_eq!(prefs.notification_max(), 99);
        assert_eq!(prefs.default_rating(), 4.5);
        assert_eq!(prefs.notification_refresh_secs(), 60);
    }

    #[test]
    fn env_overrides() {
        let prefs = prefs_with(&[
            ("BITLEND_NOTIFICATION_MAX", "9"),
            ("BITLEND_DEFAULT_RATING", " 3.5 "),
            ("BITLEND_NOTIFICATION_REFRESH_SECS", "15"),
        ]);
        assert_eq!(prefs.notification_max(), 9);
        assert_eq!(prefs.default_rating(), 3.5);
        assert_eq!(prefs.notification_refresh_secs(), 15);
    }

    #[test]
    fn invalid_values_fall_back() {
        let prefs = prefs_with(&[
            ("BITLEND_NOTIFICATION_MAX", "0"),
            ("BITLEND_DEFAULT_RATING", "11"),
            ("BITLEND_NOTIFICATION_REFRESH_SECS", "soon"),
        ]);
        assert_eq!(prefs, prefs_with(&[]));
    }
}
