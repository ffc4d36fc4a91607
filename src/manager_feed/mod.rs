use std::fs;
use std::path::PathBuf;
use log::debug;
use quick_xml::events::Event;
use quick_xml::Reader;
use crate::errors::FeedError;
use crate::models::feed_entry::FeedEntry;

/// Anything able to hand over a snapshot of feed entries in feed order.
///
/// The extraction pipeline only ever sees the entries, never where they came from.
pub trait FeedSource {
    fn entries(&self) -> Result<Vec<FeedEntry>, FeedError>;
}

impl FeedSource for [FeedEntry] {
    fn entries(&self) -> Result<Vec<FeedEntry>, FeedError> {
        Ok(self.to_vec())
    }
}

impl FeedSource for Vec<FeedEntry> {
    fn entries(&self) -> Result<Vec<FeedEntry>, FeedError> {
        Ok(self.clone())
    }
}

/// Feed saved to disk as an RSS document, e.g. an archived copy of the NHC Atlantic feed
pub struct FileFeed {
    path: PathBuf,
}

impl FileFeed {
    /// Returns a FileFeed reading from the given path on every call to `entries`
    ///
    /// # Arguments
    ///
    /// * 'path' - path to the RSS document
    pub fn new(path: &str) -> FileFeed {
        FileFeed { path: PathBuf::from(path) }
    }
}

impl FeedSource for FileFeed {
    fn entries(&self) -> Result<Vec<FeedEntry>, FeedError> {
        let xml = fs::read_to_string(&self.path)?;
        let entries = parse_rss(&xml)?;
        debug!("read {} feed entries from {}", entries.len(), self.path.display());

        Ok(entries)
    }
}

#[derive(Clone, Copy)]
enum ItemField {
    Title,
    Summary,
    Description,
}

#[derive(Default)]
struct PartialEntry {
    title: String,
    summary: Option<String>,
    description: String,
}

impl PartialEntry {
    fn push(&mut self, field: ItemField, text: &str) {
        match field {
            ItemField::Title => self.title.push_str(text),
            ItemField::Summary => self.summary.get_or_insert_with(String::new).push_str(text),
            ItemField::Description => self.description.push_str(text),
        }
    }

    /// Feeds without a separate summary element use the description as summary
    fn into_entry(self) -> FeedEntry {
        let summary = self.summary.unwrap_or_else(|| self.description.clone());
        FeedEntry {
            title: self.title,
            summary,
            description: self.description,
        }
    }
}

/// Parses the items of an RSS document into feed entries, text and CDATA content
/// are both accepted and elements outside of items (channel title etc.) are ignored
///
/// # Arguments
///
/// * 'xml' - the RSS document
pub fn parse_rss(xml: &str) -> Result<Vec<FeedEntry>, FeedError> {
    let mut reader = Reader::from_str(xml);
    let mut entries = Vec::new();
    let mut item: Option<PartialEntry> = None;
    let mut field: Option<ItemField> = None;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"item" => item = Some(PartialEntry::default()),
                b"title" => field = Some(ItemField::Title),
                b"summary" => field = Some(ItemField::Summary),
                b"description" => field = Some(ItemField::Description),
                _ => {}
            },
            Ok(Event::Text(e)) => {
                if let (Some(partial), Some(f)) = (item.as_mut(), field) {
                    let text = e.unescape().map_err(|e| FeedError::Document(e.to_string()))?;
                    partial.push(f, &text);
                }
            }
            Ok(Event::CData(e)) => {
                if let (Some(partial), Some(f)) = (item.as_mut(), field) {
                    partial.push(f, &String::from_utf8_lossy(&e.into_inner()));
                }
            }
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"item" => {
                    if let Some(partial) = item.take() {
                        entries.push(partial.into_entry());
                    }
                }
                b"title" | b"summary" | b"description" => field = None,
                _ => {}
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(FeedError::Document(e.to_string())),
            _ => {}
        }
        buf.clear();
    }

    Ok(entries)
}
