/// Resampling av en uniform serie til et vilkårlig antall punkter.
///
/// Serien tolkes som N punkter jevnt fordelt over [0, T]; målgittret er M
/// punkter over samme spenn. Stykkevis lineær interpolasjon, ekvivalent med
/// np.interp over to linspace-gitre. Siden begge gitre er uniforme trengs
/// ikke T i selve regnestykket – posisjonen er j·(N−1)/(M−1).
pub fn resample_linear(values: &[f64], num_points: usize) -> Vec<f64> {
    let n = values.len();
    if n == 0 || num_points == 0 {
        return Vec::new();
    }
    if n == 1 || num_points == 1 {
        return vec![values[0]; num_points];
    }

    let scale = (n - 1) as f64 / (num_points - 1) as f64;
    let mut out = Vec::with_capacity(num_points);
    for j in 0..num_points {
        let pos = j as f64 * scale;
        let idx = (pos.floor() as usize).min(n - 2);
        let frac = pos - idx as f64;
        out.push(values[idx] * (1.0 - frac) + values[idx + 1] * frac);
    }
    out
}

/// Antall frames for avspilling: (total tid × fps) / speedup, avrundet ned.
/// `speedup` = sekunder av data som vises per virkelig sekund.
pub fn frame_count(total_time: f64, fps: f64, speedup: f64) -> usize {
    if !total_time.is_finite() || !fps.is_finite() || total_time <= 0.0 || fps <= 0.0 {
        return 0;
    }
    let speedup = if speedup.is_finite() && speedup > 0.0 { speedup } else { 1.0 };
    ((total_time * fps) / speedup).floor() as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midtpunkt_interpoleres_lineaert() {
        let v = vec![0.0, 10.0];
        let out = resample_linear(&v, 3);
        assert_eq!(out, vec![0.0, 5.0, 10.0]);
    }

    #[test]
    fn frame_count_matcher_fps_og_speedup() {
        assert_eq!(frame_count(10.0, 20.0, 1.0), 200);
        assert_eq!(frame_count(10.0, 20.0, 2.0), 100);
        assert_eq!(frame_count(0.0, 20.0, 1.0), 0);
    }
}
