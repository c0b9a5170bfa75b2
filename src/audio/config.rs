use std::{path::PathBuf, str::FromStr, time::Duration};

use tracing::warn;

#[derive(Debug, Clone, PartialEq)]
pub struct AudioConfig {
    pub media_root: PathBuf,
    pub volume: f32,
    pub volume_step: f32,
    pub seek_step_secs: u64,
    pub tick: Duration,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            media_root: PathBuf::from("public"),
            volume: 1.0,
            volume_step: 0.05,
            seek_step_secs: 10,
            tick: Duration::from_millis(250),
        }
    }
}

impl AudioConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        Self {
            media_root: lookup("DITTY_MEDIA_ROOT")
                .map(PathBuf::from)
                .unwrap_or(defaults.media_root),
            volume: parse_or(&lookup, "DITTY_VOLUME", defaults.volume, |v: &f32| {
                v.is_finite()
            }),
            volume_step: parse_or(&lookup, "DITTY_VOLUME_STEP", defaults.volume_step, |v: &f32| {
                v.is_finite() && *v > 0.0
            }),
            seek_step_secs: parse_or(
                &lookup,
                "DITTY_SEEK_STEP_SECS",
                defaults.seek_step_secs,
                |v: &u64| *v > 0,
            ),
            tick: Duration::from_millis(parse_or(
                &lookup,
                "DITTY_TICK_MS",
                defaults.tick.as_millis() as u64,
                |v: &u64| *v > 0,
            )),
        }
    }
}

fn parse_or<T: FromStr + Copy>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
    valid: impl Fn(&T) -> bool,
) -> T {
    let Some(raw) = lookup(key) else {
        return default;
    };

    match raw.trim().parse::<T>() {
        Ok(value) if valid(&value) => value,
        _ => {
            warn!(key, value = raw.as_str(), "config_invalid_value");
            default
        }
    }
}
