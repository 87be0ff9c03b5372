use pyo3::prelude::*;
use pyo3::wrap_pyfunction;

pub mod errors;
pub mod gapfill;
pub mod metrics;
pub mod models;
pub mod outliers;
pub mod physics;
pub mod pipeline;
pub mod py;
pub mod report;
pub mod resample;
pub mod smoothing;
pub mod storage;

pub use errors::CleanError;
pub use models::Config;
pub use pipeline::{clean, CleanResult};
pub use storage::{load_config, save_config};

/// JSON-inngangspunkt, også kallbart direkte fra Rust-tester:
/// `tokens_json` er en JSON-liste av strenger (rå tokens fra én kolonne),
/// `cfg_json` et valgfritt konfigurasjonsobjekt. Returnerer CleanResult
/// serialisert som JSON.
pub fn clean_session_json(tokens_json: &str, cfg_json: Option<&str>) -> Result<String, String> {
    let mut de = serde_json::Deserializer::from_str(tokens_json);
    let tokens: Vec<String> = serde_path_to_error::deserialize(&mut de)
        .map_err(|e| format!("parse error (tokens) at {}: {}", e.path(), e))?;

    let cfg = match cfg_json {
        Some(json) => storage::config_from_json(json).map_err(|e| e.to_string())?,
        None => Config::default(),
    };

    let result = pipeline::clean(&tokens, &cfg).map_err(|e| e.to_string())?;
    serde_json::to_string(&result).map_err(|e| e.to_string())
}

#[pymodule]
fn barograph_core(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(py::clean_session_from_json, m)?)?;
    m.add_function(wrap_pyfunction!(py::clean_pressure_series, m)?)?;
    m.add_function(wrap_pyfunction!(py::resample_series, m)?)?;
    m.add_function(wrap_pyfunction!(py::playback_frame_count, m)?)?;
    m.add_function(wrap_pyfunction!(py::pressure_to_height, m)?)?;
    Ok(())
}
