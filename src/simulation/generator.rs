//! # Power Data Generator
//!
//! Walks every (season, day, hour) triple in emission order and produces one
//! [`PowerRecord`] per triple from the solar, wind and demand models.

use super::{DemandModel, SolarModel, WindModel};
use crate::config::Config;
use crate::domain::{PowerRecord, Season};
use itertools::iproduct;
use rand::{rngs::StdRng, SeedableRng};
use tracing::debug;

pub struct PowerDataGenerator {
    solar: SolarModel,
    wind: WindModel,
    demand: DemandModel,
    seasons: Vec<Season>,
    days_per_season: u32,
    hours_per_day: u32,
    rng: StdRng,
}

impl PowerDataGenerator {
    pub fn new(config: &Config) -> Self {
        let rng = match config.generation.random_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            solar: SolarModel::from_config(config),
            wind: WindModel::from_config(config),
            demand: DemandModel::from_config(config),
            seasons: config.seasons.order.clone(),
            days_per_season: config.generation.days_per_season,
            hours_per_day: config.generation.hours_per_day,
            rng,
        }
    }

    /// Number of records one call to [`PowerDataGenerator::generate`] yields
    pub fn expected_row_count(&self) -> usize {
        self.seasons.len() * self.days_per_season as usize * self.hours_per_day as usize
    }

    pub fn solar(&self) -> &SolarModel {
        &self.solar
    }

    pub fn wind(&self) -> &WindModel {
        &self.wind
    }

    pub fn demand(&self) -> &DemandModel {
        &self.demand
    }

    /// Generate records ordered by season, then day, then hour.
    ///
    /// Per row the random draws happen in a fixed order: solar variability,
    /// wind intensity, wind variability, demand variability.
    pub fn generate(&mut self) -> Vec<PowerRecord> {
        let mut records = Vec::with_capacity(self.expected_row_count());

        for (season, day, hour) in iproduct!(
            self.seasons.iter().copied(),
            0..self.days_per_season,
            0..self.hours_per_day
        ) {
            let solar_mw = self.solar.sample(&mut self.rng, season, hour);
            let wind_mw = self.wind.sample(&mut self.rng, season);
            let demand_mw = self.demand.sample(&mut self.rng);

            records.push(PowerRecord {
                hour: hour + day * self.hours_per_day,
                solar_mw,
                wind_mw,
                demand_mw,
                season,
            });
        }

        debug!(
            rows = records.len(),
            seasons = self.seasons.len(),
            days_per_season = self.days_per_season,
            "generated power records"
        );
        records
    }
}
