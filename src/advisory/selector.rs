use crate::models::feed_entry::FeedEntry;

pub const PUBLIC_ADVISORY: &str = "Public Advisory";

/// Returns the index of the first entry whose title marks it as a public advisory.
/// The feed mixes several bulletin types per storm but only the advisory carries
/// the attribute block, so no match means there is no current storm.
///
/// # Arguments
///
/// * 'entries' - feed entries in feed order
pub fn select_advisory(entries: &[FeedEntry]) -> Option<usize> {
    find_title(entries, PUBLIC_ADVISORY)
}

/// Returns the index of the first entry with a title containing the given text
///
/// # Arguments
///
/// * 'entries' - feed entries in feed order
/// * 'needle' - text to look for, case sensitive
pub fn find_title(entries: &[FeedEntry], needle: &str) -> Option<usize> {
    entries.iter().position(|e| e.title.contains(needle))
}
