//! # Solar Production Simulation
//!
//! Models aggregated solar output as a diurnal sine curve scaled by installed
//! capacity, a short-term variability multiplier, and a seasonal intensity
//! factor.

use super::sampling::{round_mw, uniform};
use crate::config::Config;
use crate::domain::Season;
use rand::Rng;
use std::collections::BTreeMap;
use std::f64::consts::PI;

/// Solar factor for seasons that have no explicit entry
pub const DEFAULT_SOLAR_FACTOR: f64 = 0.0;

/// Bounds of the short-term variability multiplier (clouds, haze)
pub const SOLAR_VARIABILITY: (f64, f64) = (0.8, 1.0);

/// Diurnal shape factor for an hour of the day.
///
/// `max(0, sin((hour - 6) * PI / 12))`: zero before 06:00 and after 18:00,
/// 1.0 at solar noon (hour 12).
pub fn diurnal_shape_factor(hour_of_day: u32) -> f64 {
    ((hour_of_day as f64 - 6.0) * PI / 12.0).sin().max(0.0)
}

/// Aggregated solar production model
#[derive(Debug, Clone)]
pub struct SolarModel {
    /// Installed solar capacity in MW
    max_capacity_mw: f64,
    /// Relative seasonal intensity (Summer = 1.0)
    seasonal_factors: BTreeMap<Season, f64>,
}

impl SolarModel {
    pub fn new(max_capacity_mw: f64, seasonal_factors: BTreeMap<Season, f64>) -> Self {
        Self {
            max_capacity_mw,
            seasonal_factors,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.market.max_solar_mw,
            config.seasons.solar_factors.clone(),
        )
    }

    pub fn max_capacity_mw(&self) -> f64 {
        self.max_capacity_mw
    }

    /// Seasonal factor, falling back to [`DEFAULT_SOLAR_FACTOR`]
    pub fn seasonal_factor(&self, season: Season) -> f64 {
        self.seasonal_factors
            .get(&season)
            .copied()
            .unwrap_or(DEFAULT_SOLAR_FACTOR)
    }

    /// Sample production in MW for one hour, rounded to two decimals.
    ///
    /// The variability multiplier is drawn even at night so every row consumes
    /// the same number of random values.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R, season: Season, hour_of_day: u32) -> f64 {
        let shape = diurnal_shape_factor(hour_of_day);
        let variability = uniform(rng, SOLAR_VARIABILITY.0, SOLAR_VARIABILITY.1);
        round_mw(shape * self.max_capacity_mw * variability * self.seasonal_factor(season))
    }
}
