use log::debug;

use crate::errors::CleanError;

/// Fyller sentinel-hull i en råserie med lineær interpolasjon.
///
/// Sentinel-runs helt i start og slutt droppes (serien begynner/slutter
/// effektivt ved første/siste gyldige avlesning – ingen ekstrapolering).
/// Indre runs på k manglende verdier mellom `prev` og `next` fylles med
/// slope = (next − prev) / (k + 1), slot i = prev + i·slope.
pub fn fill_gaps<S: AsRef<str>>(tokens: &[S], sentinel: &str) -> Result<Vec<f64>, CleanError> {
    // Trim sentinel-runs i begge ender. Indeksene under refererer til
    // originale rader, slik at feilmeldinger peker på riktig rad i kilden.
    let start = tokens
        .iter()
        .position(|t| t.as_ref().trim() != sentinel)
        .unwrap_or(tokens.len());
    let end = tokens
        .iter()
        .rposition(|t| t.as_ref().trim() != sentinel)
        .map(|i| i + 1)
        .unwrap_or(start);

    let trimmed = &tokens[start..end];

    // Parse til Option<f64>: None = sentinel, Some = gyldig måleverdi.
    let mut series: Vec<Option<f64>> = Vec::with_capacity(trimmed.len());
    let mut valid = 0usize;
    for (i, token) in trimmed.iter().enumerate() {
        let raw = token.as_ref().trim();
        if raw == sentinel {
            series.push(None);
            continue;
        }
        match raw.parse::<f64>() {
            Ok(v) if v.is_finite() => {
                series.push(Some(v));
                valid += 1;
            }
            _ => {
                return Err(CleanError::MalformedSample {
                    index: start + i,
                    token: raw.to_string(),
                });
            }
        }
    }

    if valid < 2 {
        return Err(CleanError::InsufficientData { valid });
    }

    debug!(
        "gapfill: {} rader inn, {} etter trimming, {} gyldige",
        tokens.len(),
        series.len(),
        valid
    );

    // Fyll indre runs. Etter trimming er første og siste element alltid Some,
    // så hvert None-run har gyldige naboer på begge sider.
    let mut out: Vec<f64> = Vec::with_capacity(series.len());
    let mut i = 0usize;
    while i < series.len() {
        match series[i] {
            Some(v) => {
                out.push(v);
                i += 1;
            }
            None => {
                let run_start = i;
                while series[i].is_none() {
                    i += 1;
                }
                let k = i - run_start;
                let prev = out[run_start - 1];
                let next = series[i].unwrap_or(prev);
                let slope = (next - prev) / (k + 1) as f64;
                for j in 1..=k {
                    out.push(prev + j as f64 * slope);
                }
            }
        }
    }

    Ok(out)
}
