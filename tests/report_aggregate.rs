use proptest::prelude::*;

use qsoconv::{
    report::{CountMatrix, aggregate, render_table},
    types::{Band, Mode},
};

const LOG: &str = "\
START-OF-LOG: 3.0
CALLSIGN: K2XYZ

QSO: 7000 PH 2024-07-06 1600 AA1A 6A NNJ K1ABC 3A WMA
QSO: 14000 CW 2024-07-06 1530 K2XYZ 6A NNJ W1AW 2A CT
QSO: 14000 CW 2024-07-06 1531 K2XYZ 6A NNJ N1MM 1D EMA
QSO: 5000 CW 2024-07-06 1532 K2XYZ 6A NNJ N1MM 1D EMA
QSO: 14000 FM 2024-07-06 1533 K2XYZ 6A NNJ N1MM 1D EMA
QSO:
END-OF-LOG:
";

#[test]
fn empty_input_gives_dense_zero_matrix() {
    let tally = aggregate(Vec::<String>::new());
    let cells: Vec<_> = tally.matrix.cells().collect();
    assert_eq!(cells.len(), 24);
    assert!(cells.iter().all(|(_, _, count)| *count == 0));
    assert_eq!(tally.matrix, CountMatrix::new());
    assert_eq!((tally.counted, tally.dropped), (0, 0));
}

#[test]
fn qso_lines_are_counted_by_band_and_mode() {
    let tally = aggregate(LOG.lines());
    assert_eq!(tally.matrix.get(Band::B40m, Mode::PH), 1);
    assert_eq!(tally.matrix.get(Band::B20m, Mode::CW), 2);
    assert_eq!(tally.matrix.get(Band::B20m, Mode::PH), 0);
    assert_eq!(tally.matrix.total(), 3);
    assert_eq!(tally.matrix.band_total(Band::B20m), 2);
    assert_eq!(tally.matrix.mode_total(Mode::CW), 2);
    assert_eq!(tally.counted, 3);
    // Unknown frequency, non-canonical mode, and a bare marker.
    assert_eq!(tally.dropped, 3);
}

#[test]
fn json_report_lists_every_band_and_mode_in_order() {
    let tally = aggregate(LOG.lines());
    let value = serde_json::to_value(tally.matrix).unwrap();
    let bands: Vec<&str> = value
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(bands, vec!["10m", "15m", "20m", "40m", "80m", "160m"]);

    let modes: Vec<&str> = value["20m"]
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(modes, vec!["CW", "PH", "RY", "DG"]);
    assert_eq!(value["20m"]["CW"], 2);
    assert_eq!(value["160m"]["DG"], 0);
}

#[test]
fn cells_run_from_highest_band_down() {
    let matrix = aggregate(LOG.lines()).matrix;
    let bands: Vec<Band> = matrix.cells().map(|(band, ..)| band).step_by(4).collect();
    assert_eq!(bands, Band::REPORT_ORDER.to_vec());
    assert_eq!(matrix.cells().next(), Some((Band::B10m, Mode::CW, 0)));
}

#[test]
fn table_has_a_row_per_band() {
    let table = render_table(&aggregate(LOG.lines()).matrix);
    let rows: Vec<usize> = Band::REPORT_ORDER
        .iter()
        .map(|band| table.find(band.label()).expect("band row"))
        .collect();
    assert!(rows.windows(2).all(|w| w[0] < w[1]), "rows out of order: {rows:?}");
    assert!(table.find("10m") < table.find("160m"));
    for mode in Mode::ALL {
        assert!(table.contains(mode.as_str()));
    }
    assert!(table.contains("Total"));
}

fn qso_line() -> impl Strategy<Value = String> {
    (
        prop::sample::select(vec!["1800", "3500", "7000", "14000", "21000", "28000", "50000"]),
        prop::sample::select(vec!["CW", "PH", "RY", "DG", "FM"]),
        0u16..2400,
    )
        .prop_map(|(freq, mode, t)| {
            format!("QSO: {freq} {mode} 2024-07-06 {t:04} K2XYZ 6A NNJ W1AW 2A CT")
        })
}

proptest! {
    #[test]
    fn aggregation_ignores_line_order(
        (lines, shuffled) in prop::collection::vec(qso_line(), 0..64)
            .prop_flat_map(|lines| (Just(lines.clone()), Just(lines).prop_shuffle()))
    ) {
        let a = aggregate(&lines);
        let b = aggregate(&shuffled);
        prop_assert_eq!(a.clone(), b);
        prop_assert_eq!(a.counted + a.dropped, lines.len() as u64);
        prop_assert_eq!(a.matrix.total(), a.counted);
    }
}
