// Python-bindinger for renseløpet. Alt som krysser grensen er enten
// JSON-strenger eller enkle lister; feil mappes til PyValueError slik at
// Python-siden kan fange dem som vanlige ValueError.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::models::Config;
use crate::physics;
use crate::pipeline;
use crate::resample;

/// JSON-inngang: tokens som JSON-liste av strenger, valgfri konfigurasjon
/// som JSON-objekt. Returnerer hele CleanResult som JSON-streng.
#[pyfunction]
pub fn clean_session_from_json(tokens_json: &str, cfg_json: Option<&str>) -> PyResult<String> {
    crate::clean_session_json(tokens_json, cfg_json).map_err(PyValueError::new_err)
}

/// Typet inngang for enkel bruk fra Python: rå tokens inn,
/// (glattet, uglattet baseline) ut.
#[pyfunction]
pub fn clean_pressure_series(
    tokens: Vec<String>,
    sentinel: Option<String>,
    acceptable_deviation_factor: Option<f64>,
    smoothing_strength: Option<f64>,
) -> PyResult<(Vec<f64>, Vec<f64>)> {
    let mut cfg = Config::default();
    if let Some(s) = sentinel {
        cfg.sentinel_marker = s;
    }
    if let Some(f) = acceptable_deviation_factor {
        cfg.acceptable_deviation_factor = f;
    }
    if let Some(s) = smoothing_strength {
        cfg.smoothing_strength = s;
    }

    let result = pipeline::clean(&tokens, &cfg).map_err(|e| PyValueError::new_err(e.to_string()))?;
    Ok((result.smoothed, result.unsmoothed))
}

/// Resampling for avspilling: N-punkts serie → num_points punkter over
/// samme tidsspenn (stykkevis lineær, som np.interp).
#[pyfunction]
pub fn resample_series(values: Vec<f64>, num_points: usize) -> PyResult<Vec<f64>> {
    Ok(resample::resample_linear(&values, num_points))
}

/// Antall frames for avspilling ved gitt fps og speedup.
#[pyfunction]
pub fn playback_frame_count(total_time: f64, fps: f64, speedup: f64) -> PyResult<usize> {
    Ok(resample::frame_count(total_time, fps, speedup))
}

/// Trykk → høyde via P = ρgh. Uten eksplisitt bakketrykk brukes seriens
/// første verdi (høyden starter da på 0).
#[pyfunction]
pub fn pressure_to_height(values: Vec<f64>, ground_pressure: Option<f64>) -> PyResult<Vec<f64>> {
    let ground = match ground_pressure.or_else(|| physics::ground_pressure(&values)) {
        Some(g) => g,
        None => return Err(PyValueError::new_err("tom serie – ingen bakketrykk å bruke")),
    };
    Ok(physics::height_series(&values, ground))
}
