//! Whole-run conversions into canonical records, with skip/abort handling.

use std::io::Write;

use tracing::{info, warn};

use crate::{
    build::{BuildOptions, RecordBuilder},
    emit::CabrilloWriter,
    error::{ConvertError, ConvertResult, RecordError},
    header::SessionHeader,
    parse::adif::group_adif_records,
    qso::{QsoRecord, SessionContext},
    source::StationLog,
    types::Dialect,
};

/// What to do when one record fails to tokenize or normalize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Leave the record out, remember why, keep going.
    #[default]
    Skip,
    /// Stop the run at the first failure.
    Abort,
}

/// Per-run conversion settings.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConvertConfig {
    /// Failure handling.
    pub on_error: ErrorPolicy,
    /// Record builder options.
    pub build: BuildOptions,
}

/// A record left out of the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    /// File or stream name.
    pub source_name: String,
    /// 1-based line number.
    pub line: usize,
    /// Why it was skipped.
    pub error: RecordError,
}

/// Records produced by one run, in emission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Conversion {
    /// Built records.
    pub records: Vec<QsoRecord>,
    /// Records that failed under [`ErrorPolicy::Skip`].
    pub skipped: Vec<SkippedRecord>,
}

impl Conversion {
    fn accept(
        &mut self,
        policy: ErrorPolicy,
        source_name: &str,
        line: usize,
        result: Result<QsoRecord, RecordError>,
    ) -> ConvertResult<()> {
        match result {
            Ok(rec) => self.records.push(rec),
            Err(error) if policy == ErrorPolicy::Abort => {
                return Err(ConvertError::Aborted {
                    source_name: source_name.to_string(),
                    line,
                    error,
                });
            }
            Err(error) => {
                warn!(source = source_name, line, %error, "skipping record");
                self.skipped.push(SkippedRecord {
                    source_name: source_name.to_string(),
                    line,
                    error,
                });
            }
        }
        Ok(())
    }

    /// Writes header, records, and end-of-log sentinel to `out`.
    pub fn write_cabrillo<W: Write>(&self, out: W, header: &SessionHeader) -> ConvertResult<W> {
        let mut writer = CabrilloWriter::start(out, header)?;
        for rec in &self.records {
            writer.write_record(rec)?;
        }
        Ok(writer.finish()?)
    }
}

/// Converts tag/value text into canonical records.
pub fn convert_adif(
    text: &str,
    source_name: &str,
    ctx: &SessionContext,
    cfg: ConvertConfig,
) -> ConvertResult<Conversion> {
    let builder = RecordBuilder::with_options(ctx, cfg.build);
    let mut out = Conversion::default();
    for record in group_adif_records(text.lines()) {
        let built = builder
            .build(Dialect::Adif, &record.fields)
            .map_err(RecordError::from);
        out.accept(cfg.on_error, source_name, record.line, built)?;
    }
    info!(
        source = source_name,
        records = out.records.len(),
        skipped = out.skipped.len(),
        "converted tag/value log"
    );
    Ok(out)
}

/// Converts station logs into canonical records, keeping the order of `logs`
/// and of lines within each log.
pub fn convert_station_logs(
    logs: &[StationLog],
    ctx: &SessionContext,
    cfg: ConvertConfig,
) -> ConvertResult<Conversion> {
    let builder = RecordBuilder::with_options(ctx, cfg.build);
    let mut out = Conversion::default();
    for log in logs {
        for line in &log.lines {
            let built = match &line.fields {
                Ok(fields) => builder
                    .build(Dialect::FixedToken, fields)
                    .map_err(RecordError::from),
                Err(err) => Err(RecordError::from(err.clone())),
            };
            out.accept(cfg.on_error, &log.file.filename, line.line, built)?;
        }
    }
    info!(
        files = logs.len(),
        records = out.records.len(),
        skipped = out.skipped.len(),
        "converted station logs"
    );
    Ok(out)
}
