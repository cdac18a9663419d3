use qsoconv::{
    error::ParseError,
    parse::{
        adif::{group_adif_records, parse_adif_line},
        filename::{FILE_BAND, FILE_CALL, FILE_MODE, StationFileMeta},
        fixed::parse_fixed_line,
    },
    qso::RawFields,
};

fn get<'a>(fields: &'a RawFields, key: &str) -> Option<&'a str> {
    fields.get(key).map(String::as_str)
}

#[test]
fn adif_line_yields_lowercased_fields() {
    let fields = parse_adif_line(
        "<band:3>40M<mode:3>SSB<qso_date:8>20240706<time_on:4>1530<call:5>W1AW<comment:6>6A NNJ",
    );
    assert_eq!(fields.len(), 6);
    assert_eq!(get(&fields, "band"), Some("40M"));
    assert_eq!(get(&fields, "mode"), Some("SSB"));
    assert_eq!(get(&fields, "qso_date"), Some("20240706"));
    assert_eq!(get(&fields, "time_on"), Some("1530"));
    // Declared length is not trusted; the value ends at the next marker.
    assert_eq!(get(&fields, "call"), Some("W1AW"));
    assert_eq!(get(&fields, "comment"), Some("6A NNJ"));
}

#[test]
fn adif_names_are_case_folded_and_type_indicators_ignored() {
    let fields = parse_adif_line("<CALL:4>W1AW <QSO_DATE:8:D>20240706 <Band:3>20M <eor>");
    assert_eq!(get(&fields, "call"), Some("W1AW"));
    assert_eq!(get(&fields, "qso_date"), Some("20240706"));
    assert_eq!(get(&fields, "band"), Some("20M"));
    assert!(!fields.contains_key("eor"));
}

#[test]
fn adif_line_without_markers_is_empty() {
    assert!(parse_adif_line("Exported by some logger").is_empty());
    assert!(parse_adif_line("").is_empty());
    assert!(parse_adif_line("<eoh>").is_empty());
}

#[test]
fn eor_terminated_records_merge_across_lines() {
    let text = "ADIF export\n\
                <adif_ver:5>3.1.0\n\
                <eoh>\n\
                <call:4>W1AW <band:3>20M\n\
                <mode:2>CW <eor>\n\
                <call:4>N1MM <band:3>40M <mode:3>SSB <eor>\n";
    let records = group_adif_records(text.lines());
    assert_eq!(records.len(), 2);

    assert_eq!(records[0].line, 4);
    assert_eq!(get(&records[0].fields, "call"), Some("W1AW"));
    assert_eq!(get(&records[0].fields, "mode"), Some("CW"));
    assert!(!records[0].fields.contains_key("adif_ver"));

    assert_eq!(records[1].line, 6);
    assert_eq!(get(&records[1].fields, "call"), Some("N1MM"));
}

#[test]
fn lines_are_records_when_no_eor_marker_exists() {
    let text = "<call:4>W1AW<band:3>20M\n\nnot a record\n<call:4>N1MM<band:3>40M\n";
    let records = group_adif_records(text.lines());
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].line, 1);
    assert_eq!(records[1].line, 4);
    assert_eq!(get(&records[1].fields, "band"), Some("40M"));
}

#[test]
fn header_is_dropped_when_lines_are_records() {
    let text = "<adif_ver:5>3.1.0\n\
                <programid:6>LOGGER\n\
                <eoh>\n\
                <band:3>40M<mode:3>SSB<qso_date:8>20240706<time_on:4>1530<call:4>W1AW<comment:6>6A NNJ\n";
    let records = group_adif_records(text.lines());
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].line, 4);
    assert_eq!(get(&records[0].fields, "call"), Some("W1AW"));
    assert!(!records[0].fields.contains_key("programid"));
}

#[test]
fn fixed_line_splits_positional_tokens() {
    let fields = parse_fixed_line("17 07/06/24 15:30:00 UTC W1AW 2A CT").unwrap();
    assert_eq!(get(&fields, "id"), Some("17"));
    assert_eq!(get(&fields, "timestamp"), Some("07/06/24 15:30:00 UTC"));
    assert_eq!(get(&fields, "call"), Some("W1AW"));
    assert_eq!(get(&fields, "class"), Some("2A"));
    assert_eq!(get(&fields, "section"), Some("CT"));
}

#[test]
fn short_fixed_line_is_malformed() {
    assert_eq!(
        parse_fixed_line("17 07/06/24 15:30:00 W1AW"),
        Err(ParseError::MalformedRecord {
            found: 4,
            required: 7,
        })
    );
    assert!(parse_fixed_line("").is_err());
}

#[test]
fn station_filename_carries_call_band_mode() {
    let meta = StationFileMeta::from_filename("K2XYZ-20M-CW.txt").unwrap();
    assert_eq!(meta.callsign, "K2XYZ");
    assert_eq!(meta.band, "20M");
    assert_eq!(meta.mode, "CW");

    let meta = StationFileMeta::from_filename("W1-ABC-40M-SSB.txt").unwrap();
    assert_eq!(meta.callsign, "W1-ABC");
    assert_eq!(meta.band, "40M");
    assert_eq!(meta.mode, "SSB");
}

#[test]
fn unrelated_filenames_have_no_metadata() {
    assert_eq!(StationFileMeta::from_filename("notes.txt"), None);
    assert_eq!(StationFileMeta::from_filename("K2XYZ-20M.txt"), None);
    assert_eq!(StationFileMeta::from_filename("K2XYZ-20M-CW.log"), None);
}

#[test]
fn filename_metadata_fills_fallback_fields() {
    let meta = StationFileMeta::from_filename("K2XYZ-20M-CW.txt").unwrap();
    let mut fields = parse_fixed_line("1 07/06/24 15:30:00 UTC W1AW 2A CT").unwrap();
    meta.fill_fields(&mut fields);
    assert_eq!(get(&fields, FILE_CALL), Some("K2XYZ"));
    assert_eq!(get(&fields, FILE_BAND), Some("20M"));
    assert_eq!(get(&fields, FILE_MODE), Some("CW"));
    assert_eq!(get(&fields, "call"), Some("W1AW"));
}
