//! Seasons and their wind intensity ranges.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// Season label attached to every generated record
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Season {
    #[serde(alias = "spring")]
    Spring,
    #[serde(alias = "summer")]
    Summer,
    #[serde(alias = "autumn")]
    Autumn,
    #[serde(alias = "winter")]
    Winter,
}

impl Season {
    /// All seasons in calendar order (Spring first)
    pub fn all() -> Vec<Season> {
        Season::iter().collect()
    }
}

/// Bounds of the random wind-intensity draw for a season
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindRange {
    pub min: f64,
    pub max: f64,
}

impl WindRange {
    /// Range used for seasons that have no explicit entry
    pub const DEFAULT: WindRange = WindRange { min: 0.4, max: 0.7 };

    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }
}

impl Default for WindRange {
    fn default() -> Self {
        Self::DEFAULT
    }
}
