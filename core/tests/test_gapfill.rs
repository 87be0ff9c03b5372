use barograph_core::errors::CleanError;
use barograph_core::gapfill::fill_gaps;

#[test]
fn hull_fylles_med_eksakt_lineaer_interpolasjon() {
    // Run på 3 manglende mellom 10 og 22: slope = 12/4 = 3
    let tokens = ["10", "*****", "*****", "*****", "22"];
    let filled = fill_gaps(&tokens, "*****").expect("gapfill feilet");
    assert_eq!(filled, vec![10.0, 13.0, 16.0, 19.0, 22.0]);
}

#[test]
fn sentinel_runs_i_endene_trimmes_uten_ekstrapolering() {
    let tokens = ["*****", "*****", "5", "6", "*****"];
    let filled = fill_gaps(&tokens, "*****").expect("gapfill feilet");
    // Resultatlengden ekskluderer de trimmede radene
    assert_eq!(filled, vec![5.0, 6.0]);
}

#[test]
fn flere_indre_runs_fylles_uavhengig() {
    let tokens = ["100", "*****", "*****", "91", "90", "*****", "92"];
    let filled = fill_gaps(&tokens, "*****").expect("gapfill feilet");
    assert_eq!(filled, vec![100.0, 97.0, 94.0, 91.0, 90.0, 91.0, 92.0]);
}

#[test]
fn ugyldig_token_gir_malformed_sample_med_original_rad() {
    let tokens = ["*****", "100", "abc", "90"];
    let err = fill_gaps(&tokens, "*****").expect_err("skulle feilet på 'abc'");
    match err {
        CleanError::MalformedSample { index, token } => {
            // Indeksen skal peke på raden i den *originale* kilden
            assert_eq!(index, 2);
            assert_eq!(token, "abc");
        }
        other => panic!("feil feiltype: {other}"),
    }
}

#[test]
fn faerre_enn_to_gyldige_gir_insufficient_data() {
    let err = fill_gaps(&["*****", "7.5", "*****"], "*****").expect_err("skulle feilet");
    match err {
        CleanError::InsufficientData { valid } => assert_eq!(valid, 1),
        other => panic!("feil feiltype: {other}"),
    }

    let err = fill_gaps(&["*****", "*****"], "*****").expect_err("skulle feilet");
    match err {
        CleanError::InsufficientData { valid } => assert_eq!(valid, 0),
        other => panic!("feil feiltype: {other}"),
    }
}

#[test]
fn tokens_med_whitespace_parses() {
    let tokens = [" 10 ", "*****", " 12"];
    let filled = fill_gaps(&tokens, "*****").expect("gapfill feilet");
    assert_eq!(filled, vec![10.0, 11.0, 12.0]);
}
