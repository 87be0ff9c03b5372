// core/src/physics.rs
// Domenespesifikk konvertering: trykk (hPa-rådata fra sensoren) → høyde.
// Pipelinen selv er enhetsagnostisk; dette er en tynn konsument av den
// rensede serien, ment å byttes ut for andre datasett.

pub const G: f64 = 9.807; // gravitasjon (m/s²)
pub const RHO_AIR: f64 = 1.2; // lufttetthet (kg/m³)

/// Høyde fra trykkdifferanse via P = ρgh-tilnærmingen:
/// h = (bakketrykk − p) / (g·ρ).
#[inline]
pub fn height_from_pressure(pressure: f64, ground_pressure: f64) -> f64 {
    (ground_pressure - pressure) / (G * RHO_AIR)
}

/// Konverter en hel serie. `ground_pressure` er normalt første verdi i den
/// glattede serien, slik at høyden starter på 0.
pub fn height_series(pressures: &[f64], ground_pressure: f64) -> Vec<f64> {
    pressures
        .iter()
        .map(|&p| height_from_pressure(p, ground_pressure))
        .collect()
}

/// Bakketrykk = første verdi i serien (None for tom serie).
pub fn ground_pressure(series: &[f64]) -> Option<f64> {
    series.first().copied()
}
