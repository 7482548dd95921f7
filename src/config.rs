use std::time::Duration;

use serde::Deserialize;

use crate::logging::LogLevel;
use crate::rain::{self, RainSettings};
use crate::typewriter::{self, TypewriterTiming};

const TYPE_INTERVAL_MS_BOUNDS: (u64, u64) = (10, 2_000);
const DELETE_INTERVAL_MS_BOUNDS: (u64, u64) = (10, 2_000);
const PAUSE_MS_BOUNDS: (u64, u64) = (0, 60_000);
const RAIN_FRAME_MS_BOUNDS: (u64, u64) = (16, 1_000);
const RAIN_FONT_SIZE_BOUNDS: (u64, u64) = (8, 48);
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

/// Shape of the `data-config` JSON on the mount element. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSiteConfig {
    type_interval_ms: Option<u64>,
    delete_interval_ms: Option<u64>,
    pause_before_delete_ms: Option<u64>,
    pause_before_retype_ms: Option<u64>,
    rain: Option<bool>,
    rain_frame_ms: Option<u64>,
    rain_font_size: Option<u64>,
    log_level: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SiteConfig {
    pub typewriter: TypewriterTiming,
    pub rain: RainSettings,
    pub log_level: LogLevel,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::from_raw(RawSiteConfig::default())
    }
}

#[derive(Debug)]
pub struct ConfigError(serde_json::Error);

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid site config: {}", self.0)
    }
}

impl std::error::Error for ConfigError {}

impl SiteConfig {
    /// Parses the mount element's JSON. Blank input means "all defaults".
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_json::from_str::<RawSiteConfig>(raw)
            .map(Self::from_raw)
            .map_err(ConfigError)
    }

    fn from_raw(raw: RawSiteConfig) -> Self {
        let typewriter = TypewriterTiming {
            type_interval: millis_with_bounds(
                raw.type_interval_ms,
                typewriter::DEFAULT_TYPE_INTERVAL,
                TYPE_INTERVAL_MS_BOUNDS,
            ),
            delete_interval: millis_with_bounds(
                raw.delete_interval_ms,
                typewriter::DEFAULT_DELETE_INTERVAL,
                DELETE_INTERVAL_MS_BOUNDS,
            ),
            pause_before_delete: millis_with_bounds(
                raw.pause_before_delete_ms,
                typewriter::DEFAULT_PAUSE_BEFORE_DELETE,
                PAUSE_MS_BOUNDS,
            ),
            pause_before_retype: millis_with_bounds(
                raw.pause_before_retype_ms,
                typewriter::DEFAULT_PAUSE_BEFORE_RETYPE,
                PAUSE_MS_BOUNDS,
            ),
        };

        let rain = RainSettings {
            enabled: raw.rain.unwrap_or(true),
            frame_interval: millis_with_bounds(
                raw.rain_frame_ms,
                rain::DEFAULT_FRAME_INTERVAL,
                RAIN_FRAME_MS_BOUNDS,
            ),
            font_size: with_bounds(raw.rain_font_size, RAIN_FONT_SIZE_BOUNDS)
                .map(|size| size as f64)
                .unwrap_or(rain::DEFAULT_FONT_SIZE),
        };

        let log_level = raw
            .log_level
            .as_deref()
            .and_then(LogLevel::parse)
            .unwrap_or(DEFAULT_LOG_LEVEL);

        Self {
            typewriter,
            rain,
            log_level,
        }
    }
}

fn with_bounds(value: Option<u64>, bounds: (u64, u64)) -> Option<u64> {
    value.filter(|value| (bounds.0..=bounds.1).contains(value))
}

fn millis_with_bounds(value: Option<u64>, default: Duration, bounds: (u64, u64)) -> Duration {
    with_bounds(value, bounds)
        .map(Duration::from_millis)
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_config_uses_defaults() {
        let config = SiteConfig::from_json("  ").expect("blank is valid");

        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.typewriter, TypewriterTiming::default());
        assert_eq!(config.rain, RainSettings::default());
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn camel_case_keys_override_defaults() {
        let config = SiteConfig::from_json(
            r#"{"typeIntervalMs":80,"deleteIntervalMs":30,"pauseBeforeDeleteMs":1500,"pauseBeforeRetypeMs":400,"rain":false,"rainFrameMs":50,"rainFontSize":18,"logLevel":"debug"}"#,
        )
        .expect("valid config");

        assert_eq!(config.typewriter.type_interval, Duration::from_millis(80));
        assert_eq!(config.typewriter.delete_interval, Duration::from_millis(30));
        assert_eq!(
            config.typewriter.pause_before_delete,
            Duration::from_millis(1_500)
        );
        assert_eq!(
            config.typewriter.pause_before_retype,
            Duration::from_millis(400)
        );
        assert!(!config.rain.enabled);
        assert_eq!(config.rain.frame_interval, Duration::from_millis(50));
        assert_eq!(config.rain.font_size, 18.0);
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn out_of_range_values_fall_back_to_defaults() {
        let config = SiteConfig::from_json(
            r#"{"typeIntervalMs":1,"deleteIntervalMs":99999,"rainFontSize":2,"logLevel":"loud"}"#,
        )
        .expect("valid JSON");

        assert_eq!(config.typewriter.type_interval, typewriter::DEFAULT_TYPE_INTERVAL);
        assert_eq!(
            config.typewriter.delete_interval,
            typewriter::DEFAULT_DELETE_INTERVAL
        );
        assert_eq!(config.rain.font_size, rain::DEFAULT_FONT_SIZE);
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn zero_retype_pause_is_allowed() {
        let config =
            SiteConfig::from_json(r#"{"pauseBeforeRetypeMs":0}"#).expect("valid config");
        assert!(config.typewriter.pause_before_retype.is_zero());
    }

    #[test]
    fn malformed_json_is_an_error() {
        let error = SiteConfig::from_json("{typeIntervalMs:").expect_err("not JSON");
        assert!(error.to_string().starts_with("invalid site config"));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let config = SiteConfig::from_json(r#"{"theme":"dark"}"#).expect("valid config");
        assert_eq!(config, SiteConfig::default());
    }
}
