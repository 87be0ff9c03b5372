use serde::{Deserialize, Serialize};

use crate::errors::CleanError;

/// Sentinel-markøren sensoren skriver for droppede avlesninger.
pub const DEFAULT_SENTINEL: &str = "*****";

/// Konfigurasjon for hele renseløpet. Leses én gang før start og
/// muteres aldri underveis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Tid (x-enhet) per rad i datakilden, f.eks. sekunder. Må være > 0.
    #[serde(default = "default_interval")]
    pub interval_per_datapoint: f64,
    /// Følsomhetsfaktor for avviksterskelen – lavere = mer følsom. Må være > 0.
    #[serde(default = "default_deviation_factor")]
    pub acceptable_deviation_factor: f64,
    /// Kernelvekt s i (0, 0.5]; midtpunktet vektes 1 − 2s.
    #[serde(default = "default_smoothing_strength")]
    pub smoothing_strength: f64,
    /// Token som markerer manglende avlesning.
    #[serde(default = "default_sentinel")]
    pub sentinel_marker: String,
}

fn default_interval() -> f64 {
    1.0
}

fn default_deviation_factor() -> f64 {
    1.8
}

fn default_smoothing_strength() -> f64 {
    0.3
}

fn default_sentinel() -> String {
    DEFAULT_SENTINEL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            interval_per_datapoint: default_interval(),
            acceptable_deviation_factor: default_deviation_factor(),
            smoothing_strength: default_smoothing_strength(),
            sentinel_marker: default_sentinel(),
        }
    }
}

impl Config {
    /// Valider hele parametersettet før pipelinen starter.
    pub fn validate(&self) -> Result<(), CleanError> {
        if !self.interval_per_datapoint.is_finite() || self.interval_per_datapoint <= 0.0 {
            return Err(CleanError::InvalidConfiguration(format!(
                "interval_per_datapoint må være > 0 (fikk {})",
                self.interval_per_datapoint
            )));
        }
        if !self.acceptable_deviation_factor.is_finite() || self.acceptable_deviation_factor <= 0.0
        {
            return Err(CleanError::InvalidConfiguration(format!(
                "acceptable_deviation_factor må være > 0 (fikk {})",
                self.acceptable_deviation_factor
            )));
        }
        if !self.smoothing_strength.is_finite()
            || self.smoothing_strength <= 0.0
            || self.smoothing_strength > 0.5
        {
            return Err(CleanError::InvalidConfiguration(format!(
                "smoothing_strength må ligge i (0, 0.5] (fikk {})",
                self.smoothing_strength
            )));
        }
        if self.sentinel_marker.is_empty() {
            return Err(CleanError::InvalidConfiguration(
                "sentinel_marker kan ikke være tom".to_string(),
            ));
        }
        Ok(())
    }

    /// Totalt tidsspenn for en serie på `n` punkter.
    pub fn total_time(&self, n: usize) -> f64 {
        n as f64 * self.interval_per_datapoint
    }
}
