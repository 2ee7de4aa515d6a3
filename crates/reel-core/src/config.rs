//! Carousel tuning, with defaults from [`crate::constants`] and optional
//! overrides read from host-element attributes.

use crate::constants::{AUTO_SCROLL_DURATION_SEC, DRAG_SENSITIVITY, VIEWPORT_FALLBACK_WIDTH};
use crate::error::ConfigError;
use std::time::Duration;

pub const ATTR_DURATION: &str = "data-duration";
pub const ATTR_SENSITIVITY: &str = "data-sensitivity";

#[derive(Clone, Debug, PartialEq)]
pub struct CarouselConfig {
    /// Time for the track to travel one full copy of the item list.
    pub auto_scroll_duration: Duration,
    /// Scroll distance per unit of pointer travel while dragging.
    pub drag_sensitivity: f64,
    /// Cycle width assumed until the track is measured.
    pub viewport_fallback_width: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            auto_scroll_duration: Duration::from_secs_f64(AUTO_SCROLL_DURATION_SEC),
            drag_sensitivity: DRAG_SENSITIVITY,
            viewport_fallback_width: VIEWPORT_FALLBACK_WIDTH,
        }
    }
}

impl CarouselConfig {
    /// Build a config from attribute lookups, falling back to defaults for
    /// anything missing. `lookup` receives the attribute name.
    pub fn from_attributes<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        if let Some(secs) = parse_number(&lookup, ATTR_DURATION)? {
            if !secs.is_finite() || secs <= 0.0 {
                return Err(ConfigError::Duration(secs));
            }
            cfg.auto_scroll_duration =
                Duration::try_from_secs_f64(secs).map_err(|_| ConfigError::Duration(secs))?;
        }
        if let Some(s) = parse_number(&lookup, ATTR_SENSITIVITY)? {
            cfg.drag_sensitivity = s;
        }
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.auto_scroll_duration.is_zero() {
            return Err(ConfigError::Duration(0.0));
        }
        if !self.drag_sensitivity.is_finite() || self.drag_sensitivity <= 0.0 {
            return Err(ConfigError::Sensitivity(self.drag_sensitivity));
        }
        Ok(())
    }
}

fn parse_number<F>(lookup: &F, name: &'static str) -> Result<Option<f64>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|_| ConfigError::NotANumber { name, value: raw }),
    }
}
