use crate::advisory::normalizer::normalize;
use crate::advisory::selector::find_title;
use crate::models::feed_entry::FeedEntry;

pub const FORECAST_DISCUSSION: &str = "Forecast Discussion";

const TIMES_OF_DAY: [&str; 4] = ["MORNING", "AFTERNOON", "EVENING", "NIGHT"];

/// Returns the landfall timing sentence from the first forecast discussion in the feed.
///
/// A sentence qualifies if it mentions landfall together with a time of day, sentences
/// only mentioning landfall are usually about coastal effects within some distance of it.
/// When there is no forecast discussion or no qualifying sentence 'fallback' is returned.
///
/// # Arguments
///
/// * 'entries' - all feed entries in feed order
/// * 'fallback' - text to return when no landfall time is stated
pub fn landfall_timing(entries: &[FeedEntry], fallback: &str) -> String {
    find_title(entries, FORECAST_DISCUSSION)
        .and_then(|i| landfall_sentence(&normalize(&entries[i].summary)))
        .unwrap_or_else(|| fallback.to_string())
}

fn landfall_sentence(discussion: &str) -> Option<String> {
    discussion
        .split(". ")
        .find(|s| s.contains("LANDFALL") && TIMES_OF_DAY.iter().any(|t| s.contains(t)))
        .map(|s| s.to_string())
}
