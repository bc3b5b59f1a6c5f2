//! Core trait for record producers.

use crate::error::ParetoError;
use crate::matrix::ItemRecord;

/// Turns a raw document into attribute records.
///
/// Implementations are expected to be best-effort: partial records are
/// fine, since the engine treats missing attributes as 0.0. An `Err`
/// means the document as a whole could not be read.
///
/// # Examples
///
/// ```ignore
/// // Retailer listing page → one record per product tile
/// struct ListingSource;
///
/// impl RecordSource for ListingSource {
///     fn name(&self) -> &str { "listing" }
///     fn extract(&self, document: &str) -> Result<Vec<ItemRecord>, ParetoError> {
///         Ok(parse_tiles(document).map(tile_to_record).collect())
///     }
/// }
/// ```
pub trait RecordSource: Send + Sync {
    /// Returns the name of this source.
    fn name(&self) -> &str;

    /// Extracts zero or more records from `document`.
    fn extract(&self, document: &str) -> Result<Vec<ItemRecord>, ParetoError>;
}
