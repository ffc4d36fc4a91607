pub mod alerts;
pub mod fields;
pub mod forecast;
pub mod normalizer;
pub mod selector;

use log::debug;
use crate::advisory::alerts::segment_alerts;
use crate::advisory::fields::{extract_issue_time, extract_movement, extract_position, extract_pressure, extract_radius, extract_wind};
use crate::advisory::forecast::landfall_timing;
use crate::advisory::normalizer::normalize;
use crate::advisory::selector::select_advisory;
use crate::config::ExtractionParameters;
use crate::errors::{ExtractError, RunError};
use crate::manager_feed::FeedSource;
use crate::models::feed_entry::FeedEntry;
use crate::models::storm_report::{AdvisoryRecord, StormReport};

/// Builds a storm report from a snapshot of feed entries.
///
/// Returns `StormReport::NoCurrentStorm` if the feed holds no public advisory. If it
/// does, every mandatory field must be extracted or the whole extraction fails.
/// The function does no I/O and keeps no state between calls.
///
/// # Arguments
///
/// * 'entries' - feed entries in feed order
/// * 'params' - fallback values for optional fields
pub fn extract_report(entries: &[FeedEntry], params: &ExtractionParameters) -> Result<StormReport, ExtractError> {
    let Some(index) = select_advisory(entries) else {
        debug!("no public advisory among {} feed entries", entries.len());
        return Ok(StormReport::NoCurrentStorm);
    };

    let entry = &entries[index];
    debug!("extracting advisory '{}'", entry.title);

    let current = normalize(&entry.summary);

    let pressure_mbar = extract_pressure(&current)?;
    let wind_mph = extract_wind(&current)?;
    let radius_mi = extract_radius(&normalize(&entry.description), params.default_radius_mi);
    let landfall_text = landfall_timing(entries, &params.landfall_unknown);
    let (latitude, longitude) = extract_position(&current)?;
    let issued_at = extract_issue_time(&current)?;
    let movement = extract_movement(&current)?;
    let alerts = segment_alerts(&current)?;

    Ok(StormReport::Advisory(AdvisoryRecord {
        issued_at,
        latitude,
        longitude,
        wind_mph,
        pressure_mbar,
        radius_mi,
        landfall_text,
        movement_dir_deg: movement.direction_deg,
        movement_speed_mph: movement.speed_mph,
        watch_text: alerts.watch_text,
        warning_text: alerts.warning_text,
        summary_text: alerts.summary_text,
    }))
}

/// Takes a snapshot from the given source and builds a storm report from it
///
/// # Arguments
///
/// * 'source' - where the feed entries come from
/// * 'params' - fallback values for optional fields
pub fn run<S: FeedSource + ?Sized>(source: &S, params: &ExtractionParameters) -> Result<StormReport, RunError> {
    let entries = source.entries()?;

    Ok(extract_report(&entries, params)?)
}
