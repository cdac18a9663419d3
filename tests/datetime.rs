use qsoconv::{
    datetime::{normalize_date, normalize_time},
    error::NormalizeError,
    types::Dialect,
};

#[test]
fn adif_date_is_reformatted() {
    assert_eq!(normalize_date(Dialect::Adif, "20240706").unwrap(), "2024-07-06");
    assert_eq!(normalize_date(Dialect::Adif, "19991231").unwrap(), "1999-12-31");
}

#[test]
fn fixed_token_timestamp_yields_date_and_time() {
    let ts = "07/06/24 1530:00z";
    assert_eq!(normalize_date(Dialect::FixedToken, ts).unwrap(), "2024-07-06");
    assert_eq!(normalize_time(Dialect::FixedToken, ts).unwrap(), "1530");

    let ts = "07/06/24 15:30:00 UTC";
    assert_eq!(normalize_date(Dialect::FixedToken, ts).unwrap(), "2024-07-06");
    assert_eq!(normalize_time(Dialect::FixedToken, ts).unwrap(), "1530");
}

#[test]
fn adif_time_accepts_minutes_or_seconds_precision() {
    assert_eq!(normalize_time(Dialect::Adif, "0905").unwrap(), "0905");
    assert_eq!(normalize_time(Dialect::Adif, "153012").unwrap(), "1530");
}

#[test]
fn cabrillo_forms_validate_as_is() {
    assert_eq!(normalize_date(Dialect::Cabrillo, "2024-07-06").unwrap(), "2024-07-06");
    assert_eq!(normalize_time(Dialect::Cabrillo, "2359").unwrap(), "2359");
    assert!(normalize_time(Dialect::Cabrillo, "2400").is_err());
}

#[test]
fn malformed_dates_are_rejected_not_guessed() {
    assert_eq!(
        normalize_date(Dialect::Adif, "2024-07-06"),
        Err(NormalizeError::MalformedDate {
            dialect: Dialect::Adif,
            raw: "2024-07-06".to_string(),
        })
    );
    assert!(normalize_date(Dialect::Adif, "20241306").is_err());
    assert!(normalize_date(Dialect::Adif, "2024070").is_err());
    assert!(normalize_date(Dialect::Adif, "").is_err());
    assert!(normalize_date(Dialect::FixedToken, "7-6-24 15:30:00").is_err());
    assert!(normalize_date(Dialect::FixedToken, "02/30/24 15:30:00").is_err());
    assert!(normalize_date(Dialect::FixedToken, "").is_err());
}

#[test]
fn malformed_times_are_rejected_not_guessed() {
    assert_eq!(
        normalize_time(Dialect::Adif, "15:30"),
        Err(NormalizeError::MalformedTime {
            dialect: Dialect::Adif,
            raw: "15:30".to_string(),
        })
    );
    assert!(normalize_time(Dialect::Adif, "2460").is_err());
    assert!(normalize_time(Dialect::Adif, "12a4").is_err());
    assert!(normalize_time(Dialect::FixedToken, "07/06/24").is_err());
    assert!(normalize_time(Dialect::FixedToken, "07/06/24 15z").is_err());
    assert!(normalize_time(Dialect::FixedToken, "07/06/24 25:00:00").is_err());
}
