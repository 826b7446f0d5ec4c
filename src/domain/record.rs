//! # Generated Records
//!
//! One [`PowerRecord`] is produced per (season, day, hour) triple. Field
//! renames define the CSV header, so the column order here is the column
//! order of the output file.

use super::Season;
use serde::{Deserialize, Serialize};

/// One hourly row of synthetic market data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerRecord {
    /// Hour index within the season's multi-day window
    #[serde(rename = "Hour")]
    pub hour: u32,
    /// Solar production in MW
    #[serde(rename = "Solar - Actual Aggregated [MW]")]
    pub solar_mw: f64,
    /// Wind production in MW
    #[serde(rename = "Wind - Actual Aggregated [MW]")]
    pub wind_mw: f64,
    /// Demand in MW
    #[serde(rename = "Demand [MW]")]
    pub demand_mw: f64,
    #[serde(rename = "Season")]
    pub season: Season,
}

/// CSV header in output column order
pub const CSV_HEADER: [&str; 5] = [
    "Hour",
    "Solar - Actual Aggregated [MW]",
    "Wind - Actual Aggregated [MW]",
    "Demand [MW]",
    "Season",
];

/// Aggregate view of the records belonging to one season
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonSummary {
    pub season: Season,
    pub rows: usize,
    pub mean_solar_mw: f64,
    pub peak_solar_mw: f64,
    pub mean_wind_mw: f64,
    pub peak_wind_mw: f64,
    pub mean_demand_mw: f64,
    pub peak_demand_mw: f64,
}

/// Summarize records per season, in order of first appearance
pub fn summarize(records: &[PowerRecord]) -> Vec<SeasonSummary> {
    let mut seasons: Vec<Season> = Vec::new();
    for record in records {
        if !seasons.contains(&record.season) {
            seasons.push(record.season);
        }
    }

    seasons
        .into_iter()
        .map(|season| {
            let group: Vec<&PowerRecord> =
                records.iter().filter(|r| r.season == season).collect();
            let rows = group.len();
            let mean = |f: fn(&PowerRecord) -> f64| {
                group.iter().map(|r| f(r)).sum::<f64>() / rows as f64
            };
            let peak = |f: fn(&PowerRecord) -> f64| {
                group.iter().map(|r| f(r)).fold(f64::MIN, f64::max)
            };

            SeasonSummary {
                season,
                rows,
                mean_solar_mw: mean(|r| r.solar_mw),
                peak_solar_mw: peak(|r| r.solar_mw),
                mean_wind_mw: mean(|r| r.wind_mw),
                peak_wind_mw: peak(|r| r.wind_mw),
                mean_demand_mw: mean(|r| r.demand_mw),
                peak_demand_mw: peak(|r| r.demand_mw),
            }
        })
        .collect()
}
