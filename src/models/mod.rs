pub mod feed_entry;
pub mod storm_report;
