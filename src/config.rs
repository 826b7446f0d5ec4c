use crate::domain::{Season, WindRange};
use anyhow::Result;
use figment::{providers::{Env, Format, Toml}, Figment};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";
pub const ENV_PREFIX: &str = "SPM__";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub market: MarketConfig,
    pub seasons: SeasonsConfig,
    pub generation: GenerationConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketConfig {
    pub name: String,
    pub max_solar_mw: f64,
    pub max_wind_mw: f64,
    pub average_demand_mw: f64,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            name: "Generic Market".to_string(),
            max_solar_mw: 14500.0,
            max_wind_mw: 26900.0,
            average_demand_mw: 48000.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SeasonsConfig {
    /// Seasons to generate, in output order
    pub order: Vec<Season>,
    pub solar_factors: BTreeMap<Season, f64>,
    pub wind_ranges: BTreeMap<Season, WindRange>,
}

impl Default for SeasonsConfig {
    fn default() -> Self {
        Self {
            order: Season::all(),
            solar_factors: BTreeMap::from([
                (Season::Spring, 0.7),
                (Season::Summer, 1.0),
                (Season::Autumn, 0.5),
                (Season::Winter, 0.3),
            ]),
            wind_ranges: BTreeMap::from([
                (Season::Spring, WindRange::new(0.4, 0.7)),
                (Season::Summer, WindRange::new(0.4, 0.7)),
                (Season::Autumn, WindRange::new(0.7, 1.0)),
                (Season::Winter, WindRange::new(0.7, 1.0)),
            ]),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub days_per_season: u32,
    pub hours_per_day: u32,
    /// Random seed for reproducibility (None = random)
    pub random_seed: Option<u64>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            days_per_season: 2,
            hours_per_day: 24,
            random_seed: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub directory: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(DEFAULT_CONFIG_PATH)
    }

    /// Layer an optional TOML file and `SPM__` environment variables over the defaults
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let figment = Figment::new()
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));
        Ok(figment.extract()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_defaults_without_sources() {
        Jail::expect_with(|_jail| {
            let cfg = Config::load_from("missing.toml").expect("defaults");
            assert_eq!(cfg.market.name, "Generic Market");
            assert_eq!(cfg.market.max_solar_mw, 14500.0);
            assert_eq!(cfg.market.max_wind_mw, 26900.0);
            assert_eq!(cfg.market.average_demand_mw, 48000.0);
            assert_eq!(cfg.seasons.order, Season::all());
            assert_eq!(cfg.generation.days_per_season, 2);
            assert_eq!(cfg.generation.hours_per_day, 24);
            assert_eq!(cfg.generation.random_seed, None);
            assert_eq!(cfg.output.directory, PathBuf::from("."));
            Ok(())
        });
    }

    #[test]
    fn test_toml_overrides() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "market.toml",
                r#"
                [market]
                name = "Faroe Islands"
                max_solar_mw = 100.0

                [seasons]
                order = ["Winter", "Summer"]

                [seasons.solar_factors]
                Summer = 0.9

                [seasons.wind_ranges]
                Winter = { min = 0.8, max = 0.9 }

                [generation]
                days_per_season = 3
                random_seed = 7
                "#,
            )?;

            let cfg = Config::load_from("market.toml").expect("config");
            assert_eq!(cfg.market.name, "Faroe Islands");
            assert_eq!(cfg.market.max_solar_mw, 100.0);
            assert_eq!(cfg.market.max_wind_mw, 26900.0);
            assert_eq!(cfg.seasons.order, vec![Season::Winter, Season::Summer]);
            assert_eq!(cfg.seasons.solar_factors.get(&Season::Summer), Some(&0.9));
            assert_eq!(cfg.seasons.solar_factors.get(&Season::Spring), None);
            assert_eq!(
                cfg.seasons.wind_ranges.get(&Season::Winter),
                Some(&WindRange::new(0.8, 0.9))
            );
            assert_eq!(cfg.generation.days_per_season, 3);
            assert_eq!(cfg.generation.random_seed, Some(7));
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file("market.toml", "[market]\nname = \"DK1\"\n")?;
            jail.set_env("SPM__MARKET__NAME", "DK2");
            jail.set_env("SPM__GENERATION__DAYS_PER_SEASON", "1");

            let cfg = Config::load_from("market.toml").expect("config");
            assert_eq!(cfg.market.name, "DK2");
            assert_eq!(cfg.generation.days_per_season, 1);
            Ok(())
        });
    }
}
