//! On-disk access to the pre-generated reanalysis CSV datasets.

use std::fmt::Display;
use std::path::{Path, PathBuf};

use csv::ReaderBuilder;
use tracing::debug;

use polar_common::{ChartError, ChartResult, Hemisphere, Level};

use crate::matrix::{TempMatrix, DAYS_PER_YEAR, YEARS_SPANNED};

/// Read-only root of the pre-generated CSV datasets.
///
/// Every load reads the whole file fresh; nothing is cached between
/// requests.
#[derive(Debug, Clone)]
pub struct DataStore {
    root: PathBuf,
}

impl DataStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Path of the per-hemisphere regional table for a level.
    pub fn regional_path(&self, hemisphere: Hemisphere, level: Level) -> PathBuf {
        self.root.join(format!(
            "ncep-{}{}-regional.csv",
            hemisphere.file_prefix(),
            level.regional_fragment()
        ))
    }

    /// Path of the Arctic-Ocean-wide table for a level.
    pub fn arctic_ocean_path(&self, level: Level) -> PathBuf {
        self.root.join(format!(
            "ncep-arctic-ocean-{}-1979-to-2023.csv",
            level.arctic_ocean_fragment()
        ))
    }

    /// Load one region column from the regional table and reshape the flat
    /// year-major series into a (45 × 365) matrix.
    pub fn load_regional(
        &self,
        hemisphere: Hemisphere,
        level: Level,
        column: usize,
    ) -> ChartResult<TempMatrix> {
        let path = self.regional_path(hemisphere, level);
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(&path)
            .map_err(|err| open_error(&path, err))?;

        let mut series = Vec::with_capacity(YEARS_SPANNED * DAYS_PER_YEAR);
        for (line, record) in reader.records().enumerate() {
            let record = record.map_err(|err| malformed(&path, err))?;
            let cell = record.get(column).ok_or_else(|| {
                malformed(&path, format!("row {line} has no column {column}"))
            })?;
            series.push(parse_cell(cell).map_err(|message| malformed(&path, message))?);
        }

        debug!(path = %path.display(), days = series.len(), column, "loaded regional series");
        TempMatrix::from_flat(series, YEARS_SPANNED)
    }

    /// Load the wide-format Arctic Ocean table: one row per year, a leading
    /// year label, up to 365 day values per row.
    pub fn load_arctic_ocean(&self, level: Level) -> ChartResult<TempMatrix> {
        let path = self.arctic_ocean_path(level);
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(&path)
            .map_err(|err| open_error(&path, err))?;

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|err| malformed(&path, err))?;
            let mut days = Vec::with_capacity(DAYS_PER_YEAR);
            // First field is the year label.
            for cell in record.iter().skip(1) {
                days.push(parse_cell(cell).map_err(|message| malformed(&path, message))?);
            }
            rows.push(days);
        }

        debug!(path = %path.display(), years = rows.len(), "loaded arctic-ocean series");
        TempMatrix::from_rows(rows)
    }
}

fn open_error(path: &Path, err: csv::Error) -> ChartError {
    ChartError::DatasetIo(format!("{}: {}", path.display(), err))
}

fn malformed(path: &Path, message: impl Display) -> ChartError {
    ChartError::MalformedDataset(format!("{}: {}", path.display(), message))
}

/// Parse one raw cell. Blank cells are missing; anything else must be a
/// float, allowing surrounding whitespace.
fn parse_cell(raw: &str) -> Result<f64, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(f64::NAN);
    }
    trimmed
        .parse::<f64>()
        .map_err(|_| format!("unparseable value {trimmed:?}"))
}
