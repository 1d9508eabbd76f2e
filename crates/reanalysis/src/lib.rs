//! Loading and shaping of the NCEP reanalysis CSV datasets.

pub mod climatology;
pub mod dataset;
pub mod matrix;

pub use climatology::{chart_series, ClimatologySeries};
pub use dataset::DataStore;
pub use matrix::{TempMatrix, DAYS_PER_YEAR, YEARS_SPANNED};
