use std::fs;
use std::path::Path;
use chrono::{DateTime, Duration, NaiveDateTime, Utc};
use glob::glob;
use log::{debug, warn};
use crate::errors::SnapshotError;
use crate::models::storm_report::StormReport;

const SNAPSHOT_FILE: &str = "stormdata.json";

/// Saves the report as the last known one and keeps a timestamped copy of it.
/// Timestamped copies older than 'history_hours' are removed.
///
/// # Arguments
///
/// * 'snapshot_dir' - the directory to save the files to, including trailing separator
/// * 'report' - the report to save
/// * 'history_hours' - how long timestamped copies are kept
pub fn save_snapshot(snapshot_dir: &str, report: &StormReport, history_hours: u32) -> Result<(), SnapshotError> {
    save_snapshot_at(snapshot_dir, report, history_hours, Utc::now())
}

fn save_snapshot_at(snapshot_dir: &str, report: &StormReport, history_hours: u32, now: DateTime<Utc>) -> Result<(), SnapshotError> {
    let json = serde_json::to_string_pretty(report)?;

    fs::write(format!("{}{}", snapshot_dir, SNAPSHOT_FILE), &json)?;
    fs::write(format!("{}{}_{}", snapshot_dir, now.format("%Y%m%d%H%M%S"), SNAPSHOT_FILE), &json)?;

    // Remove timestamped copies older than the history limit
    let pattern = format!("{}*_{}", snapshot_dir, SNAPSHOT_FILE);
    let keep = Duration::hours(i64::from(history_hours));
    for entry in glob(&pattern)? {
        let path = match entry {
            Ok(path) => path,
            Err(e) => {
                warn!("skipping unreadable snapshot {}: {}", e.path().display(), e.error());
                continue;
            }
        };
        if let Some(filename) = path.file_name().and_then(|n| n.to_str()) {
            let Some(stamp) = filename.get(0..14) else { continue };
            match NaiveDateTime::parse_from_str(stamp, "%Y%m%d%H%M%S") {
                Ok(datetime) => {
                    if now - datetime.and_utc() > keep {
                        debug!("removing old snapshot {}", path.display());
                        fs::remove_file(&path)?;
                    }
                }
                Err(e) => warn!("skipping snapshot with unexpected name {}: {}", filename, e),
            }
        }
    }

    Ok(())
}

/// Loads the last saved report, if any
///
/// # Arguments
///
/// * 'snapshot_dir' - the directory to load the file from, including trailing separator
pub fn load_snapshot(snapshot_dir: &str) -> Result<Option<StormReport>, SnapshotError> {
    let file_path = format!("{}{}", snapshot_dir, SNAPSHOT_FILE);

    if Path::new(&file_path).exists() {
        let json = fs::read_to_string(file_path)?;
        let report: StormReport = serde_json::from_str(&json)?;

        Ok(Some(report))
    } else {
        Ok(None)
    }
}
