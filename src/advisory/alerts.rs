use crate::advisory::normalizer::{section, until};
use crate::errors::{ExtractError, Field};

const CHANGES_MARKER: &str = "CHANGES WITH THIS ADVISORY";
const SUMMARY_MARKER: &str = "SUMMARY OF";
const DISCUSSION_MARKER: &str = " DISCUSSION";

pub const NO_CHANGES_PREFIX: &str = "NO CHANGES: ";

/// Standard sentences of the watches and warnings section carrying no storm specific information
const BOILERPLATE: [&str; 5] = [
    " A TROPICAL STORM WARNING MEANS THAT TROPICAL STORM CONDITIONS ARE EXPECTED SOMEWHERE WITHIN THE WARNING AREA WITHIN 36 HOURS.",
    " A TROPICAL STORM WATCH MEANS THAT TROPICAL STORM CONDITIONS ARE POSSIBLE WITHIN THE WATCH AREA-GENERALLY WITHIN 48 HOURS.",
    " A HURRICANE WARNING MEANS THAT HURRICANE CONDITIONS ARE EXPECTED SOMEWHERE WITHIN THE WARNING AREA WITHIN 36 HOURS.",
    " A HURRICANE WATCH MEANS THAT HURRICANE CONDITIONS ARE POSSIBLE WITHIN THE WATCH AREA-GENERALLY WITHIN 48 HOURS.",
    " FOR STORM INFORMATION SPECIFIC TO YOUR AREA-INCLUDING POSSIBLE INLAND WATCHES AND WARNINGS-PLEASE MONITOR PRODUCTS ISSUED BY YOUR LOCAL NATIONAL WEATHER SERVICE FORECAST OFFICE.",
];

#[derive(Debug, Clone, PartialEq)]
pub struct AlertSegments {
    pub watch_text: String,
    pub warning_text: String,
    pub summary_text: String,
}

/// Splits the changes section of an advisory into watch text, warning text and summary.
///
/// The changes section runs from "CHANGES WITH THIS ADVISORY" to the discussion
/// section, and is divided by "SUMMARY OF" into the alert block and the summary block.
///
/// # Arguments
///
/// * 'text' - normalized advisory summary
pub fn segment_alerts(text: &str) -> Result<AlertSegments, ExtractError> {
    let changes = section(text, CHANGES_MARKER).ok_or(ExtractError::missing(Field::Changes))?;
    let changes = until(changes, DISCUSSION_MARKER);

    let (alert_block, rest) = changes
        .split_once(SUMMARY_MARKER)
        .ok_or(ExtractError::missing(Field::Summary))?;
    let summary_block = until(rest, SUMMARY_MARKER);

    let alerts = clean_alert_block(alert_block);
    let clauses = alerts.split('.').collect::<Vec<&str>>();

    let watch_text = clauses.iter().filter(|c| c.contains("WATCH")).copied().collect::<String>();
    let warning_text = clauses.iter().filter(|c| c.contains("WARNING")).copied().collect::<String>();

    let mut summary_text = clean_summary_block(summary_block);
    if watch_text.is_empty() && warning_text.is_empty() {
        summary_text.insert_str(0, NO_CHANGES_PREFIX);
    }

    Ok(AlertSegments { watch_text, warning_text, summary_text })
}

/// Rewrites abbreviations and ellipses so that periods only end clauses
fn clean_alert_block(block: &str) -> String {
    block
        .replace("ST.", "ST")
        .replace("WARNING", " WARNING ")
        .replace("WATCH", " WATCH ")
        .replace("U.S.", "US")
        .replace("...", "-")
}

fn clean_summary_block(block: &str) -> String {
    BOILERPLATE
        .iter()
        .fold(block.to_string(), |summary, sentence| summary.replace(sentence, ""))
}
