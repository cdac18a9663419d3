use proptest::prelude::*;

use qsoconv::types::{
    Band, Frequency, Mode, band_to_frequency, frequency_to_band, normalize_mode,
};

#[test]
fn band_labels_round_trip_through_frequency_codes() {
    for band in Band::ALL {
        let freq = band_to_frequency(band.label());
        assert_eq!(freq, Frequency::Band(band));
        assert_eq!(frequency_to_band(&freq.to_string()), Some(band.label()));
    }
}

#[test]
fn band_table_matches_submission_codes() {
    let codes: Vec<u32> = Band::ALL.iter().map(|b| b.frequency_code()).collect();
    assert_eq!(codes, vec![1800, 3500, 7000, 14000, 21000, 28000]);
    assert_eq!(band_to_frequency("40M").to_string(), "7000");
    assert_eq!(band_to_frequency("160m").to_string(), "1800");
}

#[test]
fn unknown_band_label_passes_through() {
    assert_eq!(band_to_frequency("2M"), Frequency::Unmapped("2M".to_string()));
    assert_eq!(band_to_frequency("2M").to_string(), "2M");
    assert_eq!(band_to_frequency("2M").band(), None);
}

#[test]
fn unknown_frequency_code_has_no_band() {
    assert_eq!(frequency_to_band("5000"), None);
    assert_eq!(frequency_to_band("50"), None);
    assert_eq!(frequency_to_band("abc"), None);
    assert_eq!(frequency_to_band(""), None);
}

#[test]
fn band_edges_resolve_operating_frequencies() {
    assert_eq!(Band::from_khz(14_074.0), Some(Band::B20m));
    assert_eq!(Band::from_khz(1_840.0), Some(Band::B160m));
    assert_eq!(Band::from_khz(28_400.0), Some(Band::B10m));
    assert_eq!(Band::from_khz(10_136.0), None);
    assert_eq!(Band::from_khz(50_313.0), None);
}

#[test]
fn mode_normalization_rules() {
    assert_eq!(normalize_mode("SSB"), Mode::PH);
    assert_eq!(normalize_mode("CW"), Mode::CW);
    assert_eq!(normalize_mode("RTTY"), Mode::RY);
    assert_eq!(normalize_mode("PSK31"), Mode::DG);
    assert_eq!(normalize_mode("FT8"), Mode::DG);
    assert_eq!(normalize_mode(""), Mode::DG);
    // Exact match only.
    assert_eq!(normalize_mode("ssb"), Mode::DG);
}

#[test]
fn canonical_mode_tokens_parse_without_folding() {
    for mode in Mode::ALL {
        assert_eq!(Mode::from_canonical(mode.as_str()), Some(mode));
    }
    assert_eq!(Mode::from_canonical("FM"), None);
}

proptest! {
    #[test]
    fn normalize_mode_is_total(raw in "\\PC*") {
        let mode = normalize_mode(&raw);
        prop_assert!(Mode::ALL.contains(&mode));
        if !matches!(raw.as_str(), "SSB" | "CW" | "RTTY") {
            prop_assert_eq!(mode, Mode::DG);
        }
    }
}
