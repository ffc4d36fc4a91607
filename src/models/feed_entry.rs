/// One entry of a syndicated advisory feed, as handed over by a feed source
#[derive(Debug, Clone, PartialEq)]
pub struct FeedEntry {
    pub title: String,
    pub summary: String,
    pub description: String,
}

impl FeedEntry {
    pub fn new(title: &str, summary: &str, description: &str) -> FeedEntry {
        FeedEntry {
            title: title.to_string(),
            summary: summary.to_string(),
            description: description.to_string(),
        }
    }
}
