//! Widget settings.

use std::env;
use std::time::Duration;

use log::warn;

use crate::error::{Error, Result};
use crate::pass::{ClassSet, LengthControl};

const ENV_PREFIX: &str = "REVEALPASS_";

#[derive(Debug, Clone)]
pub struct Settings {
    pub min_length: usize,
    pub max_length: usize,
    pub default_length: usize,
    pub mask_char: char,
    pub step_delay: Duration,
    pub toast_duration: Duration,
    pub initial_classes: ClassSet,
}

impl Settings {
    /// Defaults overridden by `REVEALPASS_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Settings::default();
        let get = |name: &str| lookup(&format!("{ENV_PREFIX}{name}"));

        if let Some(n) = parse_var("MIN_LENGTH", get("MIN_LENGTH")) {
            settings.min_length = n;
        }
        if let Some(n) = parse_var("MAX_LENGTH", get("MAX_LENGTH")) {
            settings.max_length = n;
        }
        if let Some(n) = parse_var("DEFAULT_LENGTH", get("DEFAULT_LENGTH")) {
            settings.default_length = n;
        }
        if let Some(ms) = parse_var("STEP_MS", get("STEP_MS")) {
            settings.step_delay = Duration::from_millis(ms);
        }
        if let Some(ms) = parse_var("TOAST_MS", get("TOAST_MS")) {
            settings.toast_duration = Duration::from_millis(ms);
        }
        if let Some(raw) = get("MASK") {
            let mut chars = raw.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if !c.is_control() => settings.mask_char = c,
                _ => warn!("ignoring {ENV_PREFIX}MASK={raw:?}: expected one printable character"),
            }
        }

        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_length == 0 {
            return Err(Error::config("minimum length must be at least 1"));
        }
        if self.min_length > self.max_length {
            return Err(Error::config(format!(
                "minimum length {} exceeds maximum {}",
                self.min_length, self.max_length
            )));
        }
        if !(self.min_length..=self.max_length).contains(&self.default_length) {
            return Err(Error::config(format!(
                "default length {} is outside {}..={}",
                self.default_length, self.min_length, self.max_length
            )));
        }
        Ok(())
    }

    pub fn clamp_length(&self, length: usize) -> usize {
        length.clamp(self.min_length, self.max_length)
    }

    pub fn length_control(&self) -> LengthControl {
        LengthControl::new(self.min_length, self.max_length, self.default_length)
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, raw: Option<String>) -> Option<T> {
    let raw = raw?;
    match raw.trim().parse() {
        Ok(v) => Some(v),
        Err(_) => {
            warn!("ignoring {ENV_PREFIX}{name}={raw:?}: not a number");
            None
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            min_length: 4,
            max_length: 64,
            default_length: 16,
            mask_char: '*',
            step_delay: Duration::from_millis(75),
            toast_duration: Duration::from_millis(3000),
            initial_classes: ClassSet::all(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (format!("{ENV_PREFIX}{k}"), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.step_delay, Duration::from_millis(75));
        assert_eq!(settings.toast_duration, Duration::from_secs(3));
    }

    #[test]
    fn overrides_apply() {
        let settings = Settings::from_lookup(lookup(&[
            ("MAX_LENGTH", "128"),
            ("DEFAULT_LENGTH", "32"),
            ("MASK", "•"),
            ("STEP_MS", "10"),
        ]))
        .unwrap();
        assert_eq!(settings.max_length, 128);
        assert_eq!(settings.default_length, 32);
        assert_eq!(settings.mask_char, '•');
        assert_eq!(settings.step_delay, Duration::from_millis(10));
    }

    #[test]
    fn junk_values_are_ignored() {
        let settings =
            Settings::from_lookup(lookup(&[("STEP_MS", "fast"), ("MASK", "**")])).unwrap();
        assert_eq!(settings.step_delay, Duration::from_millis(75));
        assert_eq!(settings.mask_char, '*');
    }

    #[test]
    fn inconsistent_range_is_rejected() {
        let err = Settings::from_lookup(lookup(&[("MIN_LENGTH", "50"), ("MAX_LENGTH", "10")]))
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn clamp_length_respects_bounds() {
        let settings = Settings::default();
        assert_eq!(settings.clamp_length(0), 4);
        assert_eq!(settings.clamp_length(1000), 64);
        assert_eq!(settings.clamp_length(20), 20);
    }
}
