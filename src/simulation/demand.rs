//! Market demand: the configured average with a ±5% jitter.

use super::sampling::{round_mw, uniform};
use crate::config::Config;
use rand::Rng;

/// Bounds of the demand multiplier around the average
pub const DEMAND_VARIABILITY: (f64, f64) = (0.95, 1.05);

#[derive(Debug, Clone)]
pub struct DemandModel {
    average_demand_mw: f64,
}

impl DemandModel {
    pub fn new(average_demand_mw: f64) -> Self {
        Self { average_demand_mw }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.market.average_demand_mw)
    }

    pub fn average_demand_mw(&self) -> f64 {
        self.average_demand_mw
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let variability = uniform(rng, DEMAND_VARIABILITY.0, DEMAND_VARIABILITY.1);
        round_mw(self.average_demand_mw * variability)
    }
}
