use std::path::Path;
use stormwatch::advisory::{extract_report, run};
use stormwatch::config::{ExtractionParameters, LANDFALL_UNKNOWN};
use stormwatch::errors::{ExtractError, Field, RunError};
use stormwatch::manager_feed::{parse_rss, FeedSource, FileFeed};
use stormwatch::models::feed_entry::FeedEntry;
use stormwatch::models::storm_report::{AdvisoryRecord, StormCategory, StormReport};
use stormwatch::snapshot::{load_snapshot, save_snapshot};

fn fixture(name: &str) -> String {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
        .display()
        .to_string()
}

fn archived_advisory() -> AdvisoryRecord {
    let feed = FileFeed::new(&fixture("index-at.xml"));
    match run(&feed, &ExtractionParameters::default()) {
        Ok(StormReport::Advisory(record)) => record,
        other => panic!("expected an advisory record, got {:?}", other),
    }
}

#[test]
fn archived_feed_yields_current_advisory() {
    let record = archived_advisory();

    assert_eq!(record.issued_at, "1100 AM EDT THU SEP 29 2022");
    assert_eq!(record.latitude, 28.7);
    assert_eq!(record.longitude, -80.4);
    assert_eq!(record.wind_mph, 70);
    assert_eq!(record.category(), StormCategory::TropicalStorm);
    assert_eq!(record.pressure_mbar, 987);
    assert_eq!(record.radius_mi, 45.0);
    assert_eq!(record.movement_dir_deg, 45);
    assert_eq!(record.movement_speed_mph, 9);
}

#[test]
fn archived_feed_links_forecast_discussion() {
    let record = archived_advisory();

    assert_eq!(record.landfall_text,
               "THE CENTER IS FORECAST TO MAKE LANDFALL ALONG THE COAST OF SOUTH CAROLINA FRIDAY AFTERNOON");
}

#[test]
fn archived_feed_segments_alerts() {
    let record = archived_advisory();

    assert_eq!(record.watch_text, "");
    assert!(record.warning_text.contains("HURRICANE  WARNING  HAS BEEN ISSUED FROM THE SAVANNAH RIVER TO CAPE FEAR"));
    assert!(record.warning_text.contains("TROPICAL STORM  WARNING  FOR THE DRY TORTUGAS HAS BEEN DISCONTINUED"));

    assert!(record.summary_text.starts_with(" WATCHES AND WARNINGS IN EFFECT:"));
    assert!(record.summary_text.contains("FLAGLER/VOLUSIA LINE TO SAVANNAH RIVER"));
    assert!(!record.summary_text.contains("MEANS THAT HURRICANE CONDITIONS"));
    assert!(!record.summary_text.contains("LOCAL NATIONAL WEATHER SERVICE FORECAST OFFICE"));
    assert!(!record.summary_text.contains("DISCUSSION AND OUTLOOK"));
}

#[test]
fn file_and_memory_sources_agree() {
    let params = ExtractionParameters::default();
    let feed = FileFeed::new(&fixture("index-at.xml"));
    let entries = feed.entries().unwrap();

    let from_file = run(&feed, &params).unwrap();
    let from_memory = run(entries.as_slice(), &params).unwrap();

    assert_eq!(from_file, from_memory);
    assert_eq!(from_file, extract_report(&entries, &params).unwrap());
}

#[test]
fn feed_without_public_advisory_has_no_current_storm() {
    let xml = r#"<rss version="2.0"><channel>
        <title>National Hurricane Center (Atlantic)</title>
        <item>
            <title>Atlantic Tropical Weather Outlook</title>
            <description>Tropical cyclone formation is not expected during the next 7 days.</description>
        </item>
    </channel></rss>"#;

    let entries = parse_rss(xml).unwrap();
    let report = extract_report(&entries, &ExtractionParameters::default()).unwrap();

    assert_eq!(report, StormReport::NoCurrentStorm);
    assert_eq!(serde_json::to_value(&report).unwrap(), serde_json::json!({"status": "no_current_storm"}));
}

#[test]
fn advisory_without_forecast_discussion_has_unknown_landfall() {
    let entries = FileFeed::new(&fixture("index-at.xml"))
        .entries()
        .unwrap()
        .into_iter()
        .filter(|e| !e.title.contains("Forecast Discussion"))
        .collect::<Vec<FeedEntry>>();

    let Ok(StormReport::Advisory(record)) = extract_report(&entries, &ExtractionParameters::default()) else {
        panic!("expected an advisory record");
    };
    assert_eq!(record.landfall_text, LANDFALL_UNKNOWN);
}

#[test]
fn truncated_advisory_fails_distinctly() {
    let entries = vec![FeedEntry::new(
        "Hurricane Ian Public Advisory Number 31",
        "MINIMUM CENTRAL PRESSURE...987 MB...29.15 INCHES",
        "")];

    match run(&entries, &ExtractionParameters::default()) {
        Err(RunError::Extract(e)) => assert_eq!(e, ExtractError::MissingField { field: Field::Wind }),
        other => panic!("expected a missing field error, got {:?}", other),
    }
}

#[test]
fn report_is_persisted_by_the_caller() {
    let dir = tempfile::tempdir().unwrap();
    let snapshot_dir = format!("{}/", dir.path().display());
    let report = StormReport::Advisory(archived_advisory());

    save_snapshot(&snapshot_dir, &report, 48).unwrap();

    assert_eq!(load_snapshot(&snapshot_dir).unwrap(), Some(report));
}
