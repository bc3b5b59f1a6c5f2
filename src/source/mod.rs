//! Producers of item records.
//!
//! Extraction of attribute records from raw documents happens upstream of
//! the engine. Each extractor is modeled as a [`RecordSource`]: given a raw
//! document, produce zero or more [`ItemRecord`]s. The engine never depends
//! on a particular source.
//!
//! [`ItemRecord`]: crate::matrix::ItemRecord

mod json;
mod types;

pub use json::JsonRecordSource;
pub use types::RecordSource;
