use anyhow::{Context, Result};
use synthetic_power_market::{config, domain, export, simulation, telemetry};
use config::Config;
use export::CsvExporter;
use simulation::PowerDataGenerator;
use telemetry::init_tracing;
use tracing::{debug, info};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let cfg = Config::load()?;

    info!(
        market = %cfg.market.name,
        seasons = cfg.seasons.order.len(),
        days_per_season = cfg.generation.days_per_season,
        seeded = cfg.generation.random_seed.is_some(),
        "generating synthetic power data"
    );

    let mut generator = PowerDataGenerator::new(&cfg);
    let records = generator.generate();

    for summary in domain::summarize(&records) {
        debug!(
            season = %summary.season,
            rows = summary.rows,
            mean_solar_mw = summary.mean_solar_mw,
            peak_solar_mw = summary.peak_solar_mw,
            mean_wind_mw = summary.mean_wind_mw,
            mean_demand_mw = summary.mean_demand_mw,
            "season summary"
        );
    }

    let exporter = CsvExporter::new(&cfg.output.directory);
    let path = exporter
        .export(&cfg.market.name, &records)
        .with_context(|| format!("exporting dataset for {}", cfg.market.name))?;

    info!(market = %cfg.market.name, path = %path.display(), rows = records.len(), "dataset saved");
    println!("Dataset for {} saved as '{}'.", cfg.market.name, path.display());
    Ok(())
}
