//! Atmospheric levels and hemisphere classification.

use serde::{Deserialize, Serialize};

/// Atmospheric reference level a chart is drawn for.
///
/// Each level has its own dataset files and per-region y-axis bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Level {
    Surface,
    Mb925,
}

impl Level {
    /// File-name fragment used by the per-hemisphere regional datasets.
    pub fn regional_fragment(&self) -> &'static str {
        match self {
            Level::Surface => "surface",
            Level::Mb925 => "925mb",
        }
    }

    /// File-name fragment used by the Arctic-Ocean-wide dataset.
    pub fn arctic_ocean_fragment(&self) -> &'static str {
        match self {
            Level::Surface => "surface-temperature",
            Level::Mb925 => "temperature-925-mb",
        }
    }
}

/// Which polar dataset family a region belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Hemisphere {
    Arctic,
    Antarctic,
}

impl Hemisphere {
    /// File-name prefix of the hemisphere's regional dataset.
    pub fn file_prefix(&self) -> &'static str {
        match self {
            Hemisphere::Arctic => "",
            Hemisphere::Antarctic => "south-",
        }
    }
}
