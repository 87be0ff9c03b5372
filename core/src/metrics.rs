use once_cell::sync::Lazy;
use prometheus::{IntCounter, Opts};

// Tellere for renseløpet. Registreres ikke i default-registry automatisk;
// verter som vil eksponere dem kaller `register_metrics` med sitt registry.

static CLEAN_RUNS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::with_opts(Opts::new(
        "baro_clean_runs_total",
        "Antall fullførte renseløp",
    ))
    .expect("gyldige opts")
});

static CORRECTIONS_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::with_opts(Opts::new(
        "baro_corrections_total",
        "Antall punkter erstattet av avvikskorrigeringen",
    ))
    .expect("gyldige opts")
});

static NO_CONVERGENCE_TOTAL: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::with_opts(Opts::new(
        "baro_no_convergence_total",
        "Antall renseløp som nådde iterasjonstaket",
    ))
    .expect("gyldige opts")
});

pub fn clean_runs_total() -> &'static IntCounter {
    &CLEAN_RUNS_TOTAL
}

pub fn corrections_total() -> &'static IntCounter {
    &CORRECTIONS_TOTAL
}

pub fn no_convergence_total() -> &'static IntCounter {
    &NO_CONVERGENCE_TOTAL
}

/// Registrer tellerne i et eksternt registry (f.eks. vertens default).
pub fn register_metrics(registry: &prometheus::Registry) -> prometheus::Result<()> {
    registry.register(Box::new(CLEAN_RUNS_TOTAL.clone()))?;
    registry.register(Box::new(CORRECTIONS_TOTAL.clone()))?;
    registry.register(Box::new(NO_CONVERGENCE_TOTAL.clone()))?;
    Ok(())
}
