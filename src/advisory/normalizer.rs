/// Canonical form of bulletin prose used for every marker search: line breaks
/// removed without separator, every "--" removed, all characters uppercased.
///
/// Carriage returns are removed together with newlines.
///
/// # Arguments
///
/// * 'text' - summary or description of a feed entry
pub fn normalize(text: &str) -> String {
    text.replace(['\n', '\r'], "")
        .replace("--", "")
        .to_uppercase()
}

/// Returns the text following the first occurrence of 'marker', up to the next
/// occurrence of the same marker or the end of the text
///
/// # Arguments
///
/// * 'text' - normalized text to search
/// * 'marker' - literal marker
pub fn section<'a>(text: &'a str, marker: &str) -> Option<&'a str> {
    let start = text.find(marker)? + marker.len();
    let rest = &text[start..];

    Some(until(rest, marker))
}

/// Returns the text before the first occurrence of 'delimiter', or all of it
///
/// # Arguments
///
/// * 'text' - text to cut
/// * 'delimiter' - literal delimiter
pub fn until<'a>(text: &'a str, delimiter: &str) -> &'a str {
    match text.find(delimiter) {
        Some(end) => &text[..end],
        None => text,
    }
}
