//! # Wind Production Simulation
//!
//! Wind output is independent of the hour: a seasonal intensity drawn from
//! the season's [`WindRange`], times installed capacity, times a gust
//! multiplier.

use super::sampling::{round_mw, uniform};
use crate::config::Config;
use crate::domain::{Season, WindRange};
use rand::Rng;
use std::collections::BTreeMap;

/// Bounds of the gust multiplier applied on top of the seasonal draw
pub const WIND_VARIABILITY: (f64, f64) = (0.7, 1.0);

/// Aggregated wind production model
#[derive(Debug, Clone)]
pub struct WindModel {
    /// Installed wind capacity in MW
    max_capacity_mw: f64,
    seasonal_ranges: BTreeMap<Season, WindRange>,
}

impl WindModel {
    pub fn new(max_capacity_mw: f64, seasonal_ranges: BTreeMap<Season, WindRange>) -> Self {
        Self {
            max_capacity_mw,
            seasonal_ranges,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.market.max_wind_mw, config.seasons.wind_ranges.clone())
    }

    pub fn max_capacity_mw(&self) -> f64 {
        self.max_capacity_mw
    }

    /// Seasonal range, falling back to [`WindRange::DEFAULT`]
    pub fn seasonal_range(&self, season: Season) -> WindRange {
        self.seasonal_ranges.get(&season).copied().unwrap_or_default()
    }

    /// Lowest and highest value [`WindModel::sample`] can return for a season
    pub fn bounds(&self, season: Season) -> (f64, f64) {
        let range = self.seasonal_range(season);
        (
            self.max_capacity_mw * range.min * WIND_VARIABILITY.0,
            self.max_capacity_mw * range.max * WIND_VARIABILITY.1,
        )
    }

    /// Sample production in MW for one hour, rounded to two decimals
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R, season: Season) -> f64 {
        let range = self.seasonal_range(season);
        let intensity = uniform(rng, range.min, range.max);
        let variability = uniform(rng, WIND_VARIABILITY.0, WIND_VARIABILITY.1);
        round_mw(intensity * self.max_capacity_mw * variability)
    }
}
