//! # Synthetic Market Simulation
//!
//! ## Components
//!
//! - **Solar**: diurnal sine curve scaled by capacity, variability and season
//! - **Wind**: seasonal intensity range with an independent gust multiplier
//! - **Demand**: average demand with a ±5% jitter
//! - **Generator**: iterates (season, day, hour) and assembles the records
//!
//! ## Usage
//!
//! ```rust
//! use synthetic_power_market::config::Config;
//! use synthetic_power_market::simulation::PowerDataGenerator;
//!
//! let mut config = Config::default();
//! config.generation.random_seed = Some(42);
//!
//! let mut generator = PowerDataGenerator::new(&config);
//! let records = generator.generate();
//! assert_eq!(records.len(), 192);
//! ```

pub mod demand;
pub mod generator;
pub mod sampling;
pub mod solar;
pub mod wind;

pub use demand::{DemandModel, DEMAND_VARIABILITY};
pub use generator::PowerDataGenerator;
pub use solar::{diurnal_shape_factor, SolarModel, DEFAULT_SOLAR_FACTOR, SOLAR_VARIABILITY};
pub use wind::{WindModel, WIND_VARIABILITY};
