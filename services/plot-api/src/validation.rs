//! Query-parameter validation for the plot endpoints.

use polar_common::{ChartError, ChartResult, Region, FIRST_YEAR, LAST_YEAR};

/// Validate the raw `year` query value: decimal digits only, within the
/// supported span.
pub fn parse_year(raw: Option<&str>) -> ChartResult<i32> {
    let raw = raw.ok_or(ChartError::InvalidYear)?;
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ChartError::InvalidYear);
    }
    // Digit strings too long for i32 are still years, just absurd ones.
    let year: i32 = raw.parse().map_err(|_| ChartError::YearOutOfRange)?;
    if !(FIRST_YEAR..=LAST_YEAR).contains(&year) {
        return Err(ChartError::YearOutOfRange);
    }
    Ok(year)
}

/// Validate the raw `region` query value against the closed region set.
pub fn parse_region(raw: Option<&str>) -> ChartResult<Region> {
    raw.ok_or(ChartError::UnknownRegion)?.parse()
}
