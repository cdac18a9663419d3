//! Band x mode contact tallies over submission-log lines.

use comfy_table::{Cell, CellAlignment, Table};
use serde::{Serialize, Serializer, ser::SerializeMap};
use tracing::warn;

use crate::{
    emit::QSO_MARKER,
    types::{Band, Mode, frequency_to_band},
};

/// Dense band x mode count table; every cell exists from construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CountMatrix {
    counts: [[u64; 4]; 6],
}

impl CountMatrix {
    /// All 24 cells at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count for one cell.
    pub fn get(&self, band: Band, mode: Mode) -> u64 {
        self.counts[band.index()][mode.index()]
    }

    /// Adds one contact to a cell.
    pub fn increment(&mut self, band: Band, mode: Mode) {
        self.counts[band.index()][mode.index()] += 1;
    }

    /// Sum across modes for `band`.
    pub fn band_total(&self, band: Band) -> u64 {
        self.counts[band.index()].iter().sum()
    }

    /// Sum across bands for `mode`.
    pub fn mode_total(&self, mode: Mode) -> u64 {
        self.counts.iter().map(|row| row[mode.index()]).sum()
    }

    /// Sum of every cell.
    pub fn total(&self) -> u64 {
        self.counts.iter().flatten().sum()
    }

    /// Every `(band, mode, count)` in row-major report order.
    pub fn cells(&self) -> impl Iterator<Item = (Band, Mode, u64)> + '_ {
        Band::REPORT_ORDER.into_iter().flat_map(move |band| {
            Mode::ALL
                .into_iter()
                .map(move |mode| (band, mode, self.get(band, mode)))
        })
    }
}

struct Row<'a>(&'a [u64; 4]);

impl Serialize for Row<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Mode::ALL.len()))?;
        for mode in Mode::ALL {
            map.serialize_entry(mode.as_str(), &self.0[mode.index()])?;
        }
        map.end()
    }
}

impl Serialize for CountMatrix {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Band::REPORT_ORDER.len()))?;
        for band in Band::REPORT_ORDER {
            map.serialize_entry(band.label(), &Row(&self.counts[band.index()]))?;
        }
        map.end()
    }
}

/// Outcome of one aggregation pass.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Tally {
    /// Dense counts.
    pub matrix: CountMatrix,
    /// `QSO:` lines that landed in a cell.
    pub counted: u64,
    /// `QSO:` lines with an unknown frequency, a non-canonical mode, or too
    /// few fields.
    pub dropped: u64,
}

/// Counts `QSO:` lines by band and mode. Other lines are ignored.
pub fn aggregate<I, S>(lines: I) -> Tally
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut tally = Tally::default();
    for (idx, line) in lines.into_iter().enumerate() {
        let line = line.as_ref().trim();
        let Some(rest) = line.strip_prefix(QSO_MARKER) else {
            continue;
        };

        let mut tokens = rest.split_whitespace();
        let cell = tokens
            .next()
            .and_then(frequency_to_band)
            .and_then(Band::from_label)
            .zip(tokens.next().and_then(Mode::from_canonical));

        match cell {
            Some((band, mode)) => {
                tally.matrix.increment(band, mode);
                tally.counted += 1;
            }
            None => {
                warn!(line = idx + 1, "dropping QSO line with no band/mode cell");
                tally.dropped += 1;
            }
        }
    }
    tally
}

/// Renders the matrix as a table: one row per band from 10m down to 160m,
/// one column per mode, plus totals.
pub fn render_table(matrix: &CountMatrix) -> String {
    let mut table = Table::new();
    let mut header = vec![Cell::new("Band")];
    header.extend(Mode::ALL.iter().map(|m| Cell::new(m.as_str())));
    header.push(Cell::new("Total"));
    table.set_header(header);

    for band in Band::REPORT_ORDER {
        let mut row = vec![Cell::new(band.label())];
        row.extend(Mode::ALL.iter().map(|m| Cell::new(matrix.get(band, *m))));
        row.push(Cell::new(matrix.band_total(band)));
        table.add_row(row);
    }

    let mut totals = vec![Cell::new("Total")];
    totals.extend(Mode::ALL.iter().map(|m| Cell::new(matrix.mode_total(*m))));
    totals.push(Cell::new(matrix.total()));
    table.add_row(totals);

    for idx in 1..=Mode::ALL.len() + 1 {
        if let Some(column) = table.column_mut(idx) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }
    table.to_string()
}
