use std::time::Duration;

use serde::Deserialize;

use crate::constants::*;
use crate::error::{CarouselError, Result};

/// Timing of a carousel.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselConfig {
    /// Delay between the track snap and the commit of the next index.
    pub advance_delay: Duration,
    /// Seconds an indicator takes to fill. Presentation only; the surface
    /// signals transition-end when it completes.
    pub duration: f32,
    /// Visual slide animation of the track.
    pub transition: Duration,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            advance_delay: ADVANCE_DELAY,
            duration: INDICATOR_DURATION,
            transition: TRANSITION_DURATION,
        }
    }
}

/// Partial settings from a manifest or the command line.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
pub struct ConfigOverrides {
    pub duration: Option<f32>,
    pub advance_delay_ms: Option<u64>,
    pub transition_ms: Option<u64>,
}

impl CarouselConfig {
    /// Applies every field present in `overrides`.
    pub fn merge(mut self, overrides: &ConfigOverrides) -> Self {
        if let Some(duration) = overrides.duration {
            self.duration = duration;
        }
        if let Some(ms) = overrides.advance_delay_ms {
            self.advance_delay = Duration::from_millis(ms);
        }
        if let Some(ms) = overrides.transition_ms {
            self.transition = Duration::from_millis(ms);
        }
        self
    }

    pub fn validate(self) -> Result<Self> {
        if !self.duration.is_finite() || self.duration <= 0.0 {
            return Err(CarouselError::InvalidConfig(format!(
                "indicator duration must be positive, got {}",
                self.duration
            )));
        }
        if self.advance_delay.is_zero() {
            return Err(CarouselError::InvalidConfig("advance delay must be positive".into()));
        }
        Ok(self)
    }
}
