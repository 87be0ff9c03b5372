use log::{debug, warn};
use ordered_float::OrderedFloat;

use crate::errors::CleanError;
use crate::metrics;
use crate::models::Config;
use crate::smoothing::kernel_pass;

/// Ett avvik målt i én skanning: |est(i) − v[i]| og indeksen det gjelder.
/// Flyktig – lever bare innenfor én iterasjon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeviationRecord {
    pub deviation: f64,
    pub index: usize,
}

/// Resultat av avvikskorrigeringen.
#[derive(Debug, Clone)]
pub struct Correction {
    /// Serien etter konvergens: alle residualer ≤ `acceptable_deviation`.
    pub series: Vec<f64>,
    /// Antall punkter som ble erstattet før konvergens.
    pub iterations: usize,
    /// Terskelen som ble brukt (låst fra inngangsserien).
    pub acceptable_deviation: f64,
}

/// Tilstandene i korrigeringsløkken. Erstatter en ubegrenset `while` med en
/// eksplisitt maskin slik at iterasjonstaket har ett sted å gripe inn.
#[derive(Debug)]
enum State {
    Scanning,
    Correcting(DeviationRecord),
    Converged,
    Failed,
}

/// Iterasjonstak: lineært i serielengden, med gulv for korte serier.
/// Ingen analytisk konvergensgaranti finnes, men hver korrigering demper
/// nøyaktig ett punkt, så ekte sensordata konvergerer langt under taket.
fn max_iterations(n: usize) -> usize {
    1000 + 50 * n
}

/// Adaptiv terskel: (max − min) / N × følsomhetsfaktor.
/// Beregnes én gang fra den hullfylte serien – ikke per iterasjon – slik at
/// resultatet er deterministisk uavhengig av korrigeringsrekkefølgen.
pub fn acceptable_deviation(values: &[f64], factor: f64) -> f64 {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &v in values {
        if v < min {
            min = v;
        }
        if v > max {
            max = v;
        }
    }
    if values.is_empty() {
        return 0.0;
    }
    (max - min) / values.len() as f64 * factor
}

/// Finn punktet med størst residual mot kernelestimatet.
///
/// Tie-break: ved eksakt likt avvik vinner størst indeks – samme semantikk
/// som en synkende sortering av (avvik, indeks)-par. `max_by_key` beholder
/// siste maksimum i skanningen, som er nettopp det.
fn worst_deviation(values: &[f64], strength: f64) -> Option<DeviationRecord> {
    let estimate = kernel_pass(values, strength);
    values
        .iter()
        .zip(estimate.iter())
        .enumerate()
        .map(|(i, (v, e))| DeviationRecord {
            deviation: (e - v).abs(),
            index: i,
        })
        .max_by_key(|r| (OrderedFloat(r.deviation), r.index))
}

/// Gjennomsnitt av nærmeste naboer i den *gjeldende* serien. Endepunkter
/// bruker sin egen dupliserte verdi som manglende nabo (speiling).
fn neighbor_average(values: &[f64], i: usize) -> f64 {
    let n = values.len();
    let left = if i == 0 { values[0] } else { values[i - 1] };
    let right = if i + 1 == n { values[n - 1] } else { values[i + 1] };
    (left + right) / 2.0
}

/// Iterativ avvikskorrigering: skann → erstatt verste punkt → skann på nytt,
/// til ingen residual overstiger terskelen.
pub fn correct_outliers(values: &[f64], cfg: &Config) -> Result<Correction, CleanError> {
    let n = values.len();
    let threshold = acceptable_deviation(values, cfg.acceptable_deviation_factor);
    let ceiling = max_iterations(n);

    let mut series = values.to_vec();
    let mut iterations = 0usize;
    let mut state = State::Scanning;

    loop {
        state = match state {
            State::Scanning => match worst_deviation(&series, cfg.smoothing_strength) {
                Some(worst) if worst.deviation > threshold => {
                    if iterations >= ceiling {
                        State::Failed
                    } else {
                        State::Correcting(worst)
                    }
                }
                _ => State::Converged,
            },
            State::Correcting(record) => {
                let replacement = neighbor_average(&series, record.index);
                debug!(
                    "outliers: erstatter indeks {} ({} → {}, avvik {:.4} > terskel {:.4})",
                    record.index, series[record.index], replacement, record.deviation, threshold
                );
                series[record.index] = replacement;
                iterations += 1;
                metrics::corrections_total().inc();
                State::Scanning
            }
            State::Converged => {
                debug!(
                    "outliers: konvergert etter {} korrigeringer (terskel {:.4})",
                    iterations, threshold
                );
                return Ok(Correction {
                    series,
                    iterations,
                    acceptable_deviation: threshold,
                });
            }
            State::Failed => {
                warn!("outliers: iterasjonstak {} nådd uten konvergens", ceiling);
                metrics::no_convergence_total().inc();
                return Err(CleanError::NoConvergence { iterations: ceiling });
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terskel_bruker_range_og_lengde() {
        let v = vec![40.0, 90.0, 100.0, 92.0];
        // (100 − 40) / 4 × 1.8 = 27.0
        assert!((acceptable_deviation(&v, 1.8) - 27.0).abs() < 1e-12);
    }

    #[test]
    fn tie_break_velger_storst_indeks() {
        // Symmetrisk serie: indeks 1 og 3 får eksakt samme residual.
        let v = vec![0.0, 10.0, 0.0, 10.0, 0.0];
        let worst = worst_deviation(&v, 0.3).expect("serien er ikke tom");
        assert_eq!(worst.index, 3, "ved likt avvik skal størst indeks vinne");
    }

    #[test]
    fn nabo_snitt_ved_endepunkt_speiler() {
        let v = vec![10.0, 20.0, 30.0];
        assert!((neighbor_average(&v, 0) - 15.0).abs() < 1e-12);
        assert!((neighbor_average(&v, 2) - 25.0).abs() < 1e-12);
        assert!((neighbor_average(&v, 1) - 20.0).abs() < 1e-12);
    }
}
