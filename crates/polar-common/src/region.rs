//! Polar region identifiers and their chart profiles.

use std::fmt;
use std::str::FromStr;

use crate::error::ChartError;
use crate::level::{Hemisphere, Level};

/// Inclusive y-axis bounds for one atmospheric level, in °C.
///
/// These are presentation bounds carried over from the published charts,
/// not derived from the data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisBounds {
    pub min: f64,
    pub max: f64,
}

impl AxisBounds {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

/// Column lookup and presentation parameters for a column-backed region.
#[derive(Debug, Clone, Copy)]
pub struct RegionalProfile {
    /// Column index into the hemisphere's regional dataset.
    pub column: usize,
    pub display_name: &'static str,
    pub surface: AxisBounds,
    pub mb925: AxisBounds,
}

impl RegionalProfile {
    pub fn bounds(&self, level: Level) -> AxisBounds {
        match level {
            Level::Surface => self.surface,
            Level::Mb925 => self.mb925,
        }
    }
}

/// How a region maps onto the on-disk datasets.
#[derive(Debug, Clone, Copy)]
pub enum RegionProfile {
    /// One column of the per-hemisphere regional table.
    Regional(RegionalProfile),
    /// The Arctic-Ocean-wide aggregate, backed by its own wide-format file.
    ArcticOceanWide {
        surface: AxisBounds,
        mb925: AxisBounds,
    },
}

impl RegionProfile {
    pub fn bounds(&self, level: Level) -> AxisBounds {
        match self {
            RegionProfile::Regional(profile) => profile.bounds(level),
            RegionProfile::ArcticOceanWide { surface, mb925 } => match level {
                Level::Surface => *surface,
                Level::Mb925 => *mb925,
            },
        }
    }
}

macro_rules! regional {
    ($col:expr, $name:expr, [$smin:expr, $smax:expr], [$mmin:expr, $mmax:expr]) => {
        RegionProfile::Regional(RegionalProfile {
            column: $col,
            display_name: $name,
            surface: AxisBounds::new($smin, $smax),
            mb925: AxisBounds::new($mmin, $mmax),
        })
    };
}

/// The closed set of regions the service can chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    // Arctic
    Slater,
    Cab,
    Beaufort,
    Chukchi,
    Ess,
    Laptev,
    Kara,
    Barents,
    Greenland,
    Baffin,
    Hudson,
    Caa,
    Bering,
    Okhotsk,
    // Antarctic
    Southern,
    Weddell,
    Bellamu,
    Ross,
    Pacific,
    Indian,
}

impl Region {
    pub const ALL: [Region; 20] = [
        Region::Slater,
        Region::Cab,
        Region::Beaufort,
        Region::Chukchi,
        Region::Ess,
        Region::Laptev,
        Region::Kara,
        Region::Barents,
        Region::Greenland,
        Region::Baffin,
        Region::Hudson,
        Region::Caa,
        Region::Bering,
        Region::Okhotsk,
        Region::Southern,
        Region::Weddell,
        Region::Bellamu,
        Region::Ross,
        Region::Pacific,
        Region::Indian,
    ];

    /// The identifier used in query strings and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Slater => "slater",
            Region::Cab => "cab",
            Region::Beaufort => "beaufort",
            Region::Chukchi => "chukchi",
            Region::Ess => "ess",
            Region::Laptev => "laptev",
            Region::Kara => "kara",
            Region::Barents => "barents",
            Region::Greenland => "greenland",
            Region::Baffin => "baffin",
            Region::Hudson => "hudson",
            Region::Caa => "caa",
            Region::Bering => "bering",
            Region::Okhotsk => "okhotsk",
            Region::Southern => "southern",
            Region::Weddell => "weddell",
            Region::Bellamu => "bellamu",
            Region::Ross => "ross",
            Region::Pacific => "pacific",
            Region::Indian => "indian",
        }
    }

    /// Static partition into the two dataset families.
    pub fn hemisphere(&self) -> Hemisphere {
        match self {
            Region::Slater
            | Region::Cab
            | Region::Beaufort
            | Region::Chukchi
            | Region::Ess
            | Region::Laptev
            | Region::Kara
            | Region::Barents
            | Region::Greenland
            | Region::Baffin
            | Region::Hudson
            | Region::Caa
            | Region::Bering
            | Region::Okhotsk => Hemisphere::Arctic,

            Region::Southern
            | Region::Weddell
            | Region::Bellamu
            | Region::Ross
            | Region::Pacific
            | Region::Indian => Hemisphere::Antarctic,
        }
    }

    /// Dataset column, display name, and y-axis bounds for this region.
    pub fn profile(&self) -> RegionProfile {
        match self {
            Region::Slater => RegionProfile::ArcticOceanWide {
                surface: AxisBounds::new(-40.0, 5.0),
                mb925: AxisBounds::new(-30.0, 10.0),
            },

            Region::Beaufort => regional!(4, "Beaufort Sea", [-40.0, 12.0], [-40.0, 20.0]),
            Region::Chukchi => regional!(5, "Chukchi Sea", [-40.0, 12.0], [-40.0, 20.0]),
            Region::Ess => regional!(6, "East Siberian Sea", [-40.0, 12.0], [-35.0, 20.0]),
            Region::Laptev => regional!(7, "Laptev Sea", [-40.0, 14.0], [-35.0, 20.0]),
            Region::Kara => regional!(8, "Kara Sea", [-40.0, 12.0], [-35.0, 20.0]),
            Region::Barents => regional!(9, "Barents Sea", [-25.0, 12.0], [-25.0, 20.0]),
            Region::Greenland => regional!(10, "Greenland Sea", [-15.0, 10.0], [-20.0, 15.0]),
            Region::Cab => regional!(11, "Central Arctic Basin", [-40.0, 5.0], [-35.0, 10.0]),
            Region::Caa => {
                regional!(12, "Canadian Arctic Archipelago", [-40.0, 13.0], [-40.0, 15.0])
            }
            Region::Baffin => regional!(13, "Baffin Bay", [-25.0, 12.0], [-25.0, 15.0]),
            Region::Hudson => regional!(14, "Hudson Bay", [-40.0, 15.0], [-35.0, 20.0]),
            Region::Bering => regional!(3, "Bering Sea", [-15.0, 13.0], [-20.0, 15.0]),
            Region::Okhotsk => regional!(2, "Sea of Okhotsk", [-25.0, 18.0], [-25.0, 20.0]),

            Region::Weddell => regional!(2, "Weddell Sea", [-40.0, 2.0], [-30.0, 2.0]),
            Region::Bellamu => {
                regional!(3, "Bellingshausen-Amundsen Sea", [-45.0, 5.0], [-40.0, 3.0])
            }
            Region::Ross => regional!(4, "Ross Sea", [-40.0, 2.0], [-35.0, 2.0]),
            Region::Pacific => {
                regional!(5, "West Pacific southern ocean", [-40.0, 5.0], [-35.0, 5.0])
            }
            Region::Indian => regional!(6, "Indian southern ocean", [-40.0, 2.0], [-30.0, 2.0]),
            Region::Southern => regional!(7, "Southern ocean", [-30.0, 2.0], [-30.0, 2.0]),
        }
    }
}

impl FromStr for Region {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Region::ALL
            .iter()
            .find(|region| region.as_str() == s)
            .copied()
            .ok_or(ChartError::UnknownRegion)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
