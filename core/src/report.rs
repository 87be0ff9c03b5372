use crate::models::Config;
use crate::pipeline::CleanResult;

pub fn print_clean_report(result: &CleanResult, cfg: &Config) {
    let n = result.smoothed.len();
    let (min, max) = result
        .smoothed
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });

    println!("--- Clean Report ---");
    println!("Punkter: {} ({}s spenn)", n, cfg.total_time(n));
    println!("Sample: {:?}", &result.smoothed[..5.min(n)]);
    println!("Korrigeringer: {}", result.iterations);
    println!("Terskel: {:.4}", result.acceptable_deviation);
    println!("Range (glattet): {:.2}..{:.2}", min, max);
}
