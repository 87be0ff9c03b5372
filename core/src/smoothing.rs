use crate::errors::CleanError;

/// Ett LOESS-aktig kernelpass over hele serien.
///
/// est(i) = v[i]·(1 − 2s) + v[i−1]·s + v[i+1]·s, der s er kernelvekten.
/// Endepunktene håndteres ved å duplisere første verdi to ganger foran og
/// siste verdi to ganger bak i en lokal scratch-buffer; bufferen kastes
/// etter passet (speiling, ikke ekstrapolering).
pub fn kernel_pass(values: &[f64], strength: f64) -> Vec<f64> {
    let n = values.len();
    if n == 0 {
        return Vec::new();
    }

    let mut padded = Vec::with_capacity(n + 4);
    padded.push(values[0]);
    padded.push(values[0]);
    padded.extend_from_slice(values);
    padded.push(values[n - 1]);
    padded.push(values[n - 1]);

    let center = 1.0 - 2.0 * strength;
    let mut out = Vec::with_capacity(n);
    for i in 2..n + 2 {
        out.push(padded[i] * center + padded[i - 1] * strength + padded[i + 1] * strength);
    }
    out
}

/// Sluttglatting: ett enkelt kernelpass over den korrigerte serien.
/// Ingen iterasjon, ingen konvergenskrav – ren funksjon.
pub fn smooth_series(values: &[f64], strength: f64) -> Result<Vec<f64>, CleanError> {
    if !strength.is_finite() || strength <= 0.0 || strength > 0.5 {
        return Err(CleanError::InvalidConfiguration(format!(
            "smoothing_strength må ligge i (0, 0.5] (fikk {strength})"
        )));
    }
    Ok(kernel_pass(values, strength))
}
