use barograph_core::resample::{frame_count, resample_linear};

#[test]
fn roundtrip_m_lik_n_er_eksakt() {
    // Interpolasjon i gitterpunktene skal være eksakt – ingen drift
    let v = vec![1013.2, 1012.8, 1011.1, 1012.0, 1009.4, 1008.8];
    let out = resample_linear(&v, v.len());
    assert_eq!(out, v);
}

#[test]
fn oppsampling_interpolerer_lineaert() {
    let v = vec![0.0, 10.0, 20.0];
    let out = resample_linear(&v, 5);
    assert_eq!(out, vec![0.0, 5.0, 10.0, 15.0, 20.0]);
}

#[test]
fn nedsampling_beholder_endepunktene() {
    let v: Vec<f64> = (0..101).map(|i| i as f64).collect();
    let out = resample_linear(&v, 11);
    assert_eq!(out.len(), 11);
    assert_eq!(out[0], 0.0);
    assert_eq!(out[10], 100.0);
    // Uniform rampe resamples til uniform rampe
    assert!((out[5] - 50.0).abs() < 1e-9);
}

#[test]
fn glattet_og_uglattet_kan_deles_pa_samme_tidsakse() {
    let smoothed = vec![0.0, 1.0, 2.0, 3.0];
    let unsmoothed = vec![0.0, 2.0, 1.0, 3.0];
    let m = 9;
    let a = resample_linear(&smoothed, m);
    let b = resample_linear(&unsmoothed, m);
    assert_eq!(a.len(), b.len());
}

#[test]
fn degenererte_storrelser() {
    assert!(resample_linear(&[], 10).is_empty());
    assert!(resample_linear(&[1.0, 2.0], 0).is_empty());
    assert_eq!(resample_linear(&[1.0, 2.0], 1), vec![1.0]);
    assert_eq!(resample_linear(&[5.0], 3), vec![5.0, 5.0, 5.0]);
}

#[test]
fn frame_count_folger_fps_og_speedup() {
    // total_time × fps / speedup, avrundet ned – som avspillingslaget forventer
    assert_eq!(frame_count(60.0, 20.0, 1.0), 1200);
    assert_eq!(frame_count(60.0, 20.0, 3.0), 400);
    assert_eq!(frame_count(-1.0, 20.0, 1.0), 0);
    assert_eq!(frame_count(60.0, 20.0, 0.0), 1200, "ugyldig speedup faller tilbake til 1");
}
