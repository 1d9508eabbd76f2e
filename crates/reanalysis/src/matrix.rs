//! Dense (years × day-of-year) temperature storage.

use std::ops::Range;

use polar_common::{ChartError, ChartResult};

/// Day columns in every matrix row.
pub const DAYS_PER_YEAR: usize = 365;

/// Year rows in a regional matrix, 1979 through 2023.
pub const YEARS_SPANNED: usize = 45;

/// Row-major grid of daily temperatures, one row per year, NaN for missing.
///
/// Every row has exactly [`DAYS_PER_YEAR`] columns regardless of how many
/// days the source actually recorded for the trailing partial year.
#[derive(Debug, Clone)]
pub struct TempMatrix {
    values: Vec<f64>,
    years: usize,
}

impl TempMatrix {
    /// Reshape a year-major, day-minor flat series into `years` rows,
    /// right-padding the tail with NaN.
    pub fn from_flat(mut values: Vec<f64>, years: usize) -> ChartResult<Self> {
        let expected = years * DAYS_PER_YEAR;
        if values.len() > expected {
            return Err(ChartError::MalformedDataset(format!(
                "expected at most {} values, found {}",
                expected,
                values.len()
            )));
        }
        values.resize(expected, f64::NAN);
        Ok(Self { values, years })
    }

    /// Stack already-year-major rows, right-padding each to a full year.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> ChartResult<Self> {
        let years = rows.len();
        let mut values = Vec::with_capacity(years * DAYS_PER_YEAR);
        for (index, mut row) in rows.into_iter().enumerate() {
            if row.len() > DAYS_PER_YEAR {
                return Err(ChartError::MalformedDataset(format!(
                    "row {} has {} day values, expected at most {}",
                    index,
                    row.len(),
                    DAYS_PER_YEAR
                )));
            }
            row.resize(DAYS_PER_YEAR, f64::NAN);
            values.append(&mut row);
        }
        Ok(Self { values, years })
    }

    pub fn years(&self) -> usize {
        self.years
    }

    /// One year's 365-day trace, if the row exists.
    pub fn row(&self, index: usize) -> Option<&[f64]> {
        if index >= self.years {
            return None;
        }
        let start = index * DAYS_PER_YEAR;
        Some(&self.values[start..start + DAYS_PER_YEAR])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.values.chunks_exact(DAYS_PER_YEAR)
    }

    /// Per-day mean over a row range, skipping missing cells.
    ///
    /// A day with no recorded value anywhere in the range stays missing.
    pub fn column_mean(&self, rows: Range<usize>) -> Vec<f64> {
        let (sums, counts) = self.column_totals(rows);
        sums.into_iter()
            .zip(counts)
            .map(|(sum, count)| if count == 0 { f64::NAN } else { sum / count as f64 })
            .collect()
    }

    /// Per-day sum of finite cells plus the finite-cell count, over a row
    /// range. Rows outside the matrix contribute nothing.
    pub(crate) fn column_totals(&self, rows: Range<usize>) -> (Vec<f64>, Vec<usize>) {
        let mut sums = vec![0.0f64; DAYS_PER_YEAR];
        let mut counts = vec![0usize; DAYS_PER_YEAR];
        for index in rows {
            let Some(row) = self.row(index) else {
                continue;
            };
            for (day, &value) in row.iter().enumerate() {
                if value.is_finite() {
                    sums[day] += value;
                    counts[day] += 1;
                }
            }
        }
        (sums, counts)
    }
}
