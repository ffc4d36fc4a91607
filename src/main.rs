use std::env;
use anyhow::{Context, Result};
use log::{error, info, warn};
use stormwatch::advisory::run;
use stormwatch::config::load_config;
use stormwatch::logging::setup_logger;
use stormwatch::manager_feed::FileFeed;
use stormwatch::models::storm_report::StormReport;
use stormwatch::snapshot::{load_snapshot, save_snapshot};

fn main() -> Result<()> {
    let config_path = env::args()
        .nth(1)
        .or_else(|| env::var("CONFIG_PATH").ok())
        .unwrap_or_else(|| "config.toml".to_string());

    let config = load_config(&config_path)
        .with_context(|| format!("loading configuration from {}", config_path))?;
    setup_logger(&config.general)?;

    info!("stormwatch version: {}", env!("CARGO_PKG_VERSION"));

    let previous = load_snapshot(&config.files.snapshot_dir).unwrap_or_else(|e| {
        warn!("could not read last known report: {}", e);
        None
    });

    let feed = FileFeed::new(&config.feed.path);
    let report = match run(&feed, &config.extraction) {
        Ok(report) => report,
        Err(e) => {
            error!("no report from {}: {}", config.feed.path, e);
            if let Some(previous) = previous {
                info!("last known report: {}", previous);
            }
            return Err(e.into());
        }
    };

    match &report {
        StormReport::NoCurrentStorm => info!("no current storm in {}", config.feed.path),
        StormReport::Advisory(record) => info!("current storm: {}", record),
    }
    if previous.as_ref().is_some_and(|p| *p != report) {
        info!("report changed since last run");
    }

    save_snapshot(&config.files.snapshot_dir, &report, config.files.history_hours)?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
