//! Amateur-radio contact log conversion into contest submission logs.
//!
//! Tag/value exchange files and per-station fixed-token exports are parsed
//! into raw field maps, normalized into canonical [`qso::QsoRecord`]s, and
//! written out as `QSO:` lines. Submission logs can be tallied into a dense
//! band x mode [`report::CountMatrix`].
//!
//! # Examples
//!
//! Tag/value line to submission line:
//! ```
//! use qsoconv::{
//!     build::build_record,
//!     emit::emit_record,
//!     parse::adif::parse_adif_line,
//!     qso::SessionContext,
//!     types::Dialect,
//! };
//!
//! let ctx = SessionContext {
//!     my_callsign: "K2XYZ".to_string(),
//!     my_class: "6A".to_string(),
//!     my_section: "NNJ".to_string(),
//! };
//! let raw = parse_adif_line(
//!     "<band:3>40M<mode:3>SSB<qso_date:8>20240706<time_on:4>1530<call:4>W1AW<comment:6>6A NNJ",
//! );
//! let rec = build_record(Dialect::Adif, &raw, &ctx).expect("build");
//! assert_eq!(
//!     emit_record(&rec),
//!     "QSO: 7000 PH 2024-07-06 1530 K2XYZ 6A NNJ W1AW 6A NNJ"
//! );
//! ```
//!
//! Tallying a submission log:
//! ```
//! use qsoconv::{report::aggregate, types::{Band, Mode}};
//!
//! let tally = aggregate([
//!     "QSO: 14000 CW 2024-07-06 1530 K2XYZ 6A NNJ W1AW 2A CT",
//!     "QSO: 14000 CW 2024-07-06 1531 K2XYZ 6A NNJ N1MM 1D EMA",
//! ]);
//! assert_eq!(tally.matrix.get(Band::B20m, Mode::CW), 2);
//! assert_eq!(tally.matrix.total(), 2);
//! ```
#![deny(missing_docs)]

/// Canonical record builder.
pub mod build;
/// Whole-run conversions and error policy.
pub mod convert;
/// Date and time normalizers.
pub mod datetime;
/// Submission-log emitter.
pub mod emit;
/// Error types.
pub mod error;
/// Session header metadata.
pub mod header;
/// Subscriber setup for binaries.
pub mod logging;
/// Dialect tokenizers.
pub mod parse;
/// Canonical record and session context.
pub mod qso;
/// Band x mode tallies.
pub mod report;
/// Concurrent station-log loading.
pub mod runtime;
/// Station-log discovery.
pub mod source;
/// Band, mode, and dialect enums and lookup tables.
pub mod types;
