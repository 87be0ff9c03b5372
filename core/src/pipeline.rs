use log::info;
use serde::Serialize;

use crate::errors::CleanError;
use crate::gapfill::fill_gaps;
use crate::metrics;
use crate::models::Config;
use crate::outliers::correct_outliers;
use crate::smoothing::kernel_pass;

/// Utdata fra ett renseløp. Alle tre seriene har samme lengde N
/// (antall rader etter trimming av sentinel-runs i endene).
#[derive(Debug, Clone, Serialize)]
pub struct CleanResult {
    /// Hullfylt serie før korrigering – "unsmoothed"-baselinen for plotting.
    pub unsmoothed: Vec<f64>,
    /// Serien etter avvikskorrigering (alle residualer ≤ terskel).
    pub corrected: Vec<f64>,
    /// Korrigert serie etter ett sluttglattingspass – primærutdata.
    pub smoothed: Vec<f64>,
    /// Antall punkter avvikskorrigeringen erstattet.
    pub iterations: usize,
    /// Terskelen korrigeringen brukte.
    pub acceptable_deviation: f64,
}

/// Kjør hele renseløpet: hullfylling → avvikskorrigering → sluttglatting.
///
/// Synkront og entrådet; pipelinen eier én arbeidsbuffer og hvert stegskille
/// er et kopipunkt (baselinen tas som snapshot rett etter hullfyllingen).
pub fn clean<S: AsRef<str>>(tokens: &[S], cfg: &Config) -> Result<CleanResult, CleanError> {
    cfg.validate()?;

    let filled = fill_gaps(tokens, &cfg.sentinel_marker)?;
    let unsmoothed = filled.clone();

    let correction = correct_outliers(&filled, cfg)?;
    let smoothed = kernel_pass(&correction.series, cfg.smoothing_strength);

    info!(
        "clean: {} punkter, {} korrigeringer, terskel {:.4}",
        unsmoothed.len(),
        correction.iterations,
        correction.acceptable_deviation
    );
    metrics::clean_runs_total().inc();

    Ok(CleanResult {
        unsmoothed,
        corrected: correction.series,
        smoothed,
        iterations: correction.iterations,
        acceptable_deviation: correction.acceptable_deviation,
    })
}
