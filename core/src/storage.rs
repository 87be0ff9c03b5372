use crate::errors::CleanError;
use crate::models::Config;
use std::error::Error;
use std::path::Path;

/// Leser inn konfigurasjon fra disk (JSON).
/// Hvis filen ikke finnes, returneres default-konfigurasjonen.
pub fn load_config(path: &str) -> Result<Config, Box<dyn Error>> {
    if Path::new(path).exists() {
        let contents = std::fs::read_to_string(path)?;
        let cfg = config_from_json(&contents)?;
        println!(
            "📂 Konfigurasjon lastet fra {} (sentinel='{}')",
            path, cfg.sentinel_marker
        );
        Ok(cfg)
    } else {
        println!(
            "⚠️ Fant ikke konfigurasjon på {}, returnerer default (sentinel='*****')",
            path
        );
        Ok(Config::default())
    }
}

/// Lagrer konfigurasjon til disk som JSON (pretty-print).
pub fn save_config(cfg: &Config, path: &str) -> Result<(), Box<dyn Error>> {
    let json = serde_json::to_string_pretty(cfg)?;
    std::fs::write(path, json)?;
    println!("✅ Konfigurasjon lagret til {}", path);
    Ok(())
}

/// Parse konfigurasjon fra en JSON-streng med sti-kvalifiserte feilmeldinger
/// (serde_path_to_error), og valider parametersettet etterpå.
pub fn config_from_json(json: &str) -> Result<Config, CleanError> {
    let mut de = serde_json::Deserializer::from_str(json);
    let cfg: Config = serde_path_to_error::deserialize(&mut de).map_err(|e| {
        CleanError::InvalidConfiguration(format!("config parse at {}: {}", e.path(), e))
    })?;
    cfg.validate()?;
    Ok(cfg)
}
