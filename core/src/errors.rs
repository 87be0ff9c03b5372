use thiserror::Error;

/// Feiltyper for renseløpet. Alle er terminale – ingen intern retry;
/// kalleren (Rust eller Python) må selv avgjøre hva som skjer videre.
#[derive(Debug, Error)]
pub enum CleanError {
    /// Etter trimming av sentinel-runs i start/slutt er det for få gyldige
    /// målepunkter igjen til å interpolere noe som helst.
    #[error("for få gyldige målepunkter etter trimming ({valid} gyldige, trenger minst 2)")]
    InsufficientData { valid: usize },

    #[error("ugyldig konfigurasjon: {0}")]
    InvalidConfiguration(String),

    /// Avvikskorrigeringen nådde iterasjonstaket uten å konvergere.
    /// Skal ikke skje på ekte sensordata; taket er en sikring mot evig løkke.
    #[error("avvikskorrigering konvergerte ikke etter {iterations} iterasjoner")]
    NoConvergence { iterations: usize },

    /// Et råtoken var hverken tall eller sentinel-markør.
    #[error("ugyldig måleverdi '{token}' på rad {index}")]
    MalformedSample { index: usize, token: String },
}
