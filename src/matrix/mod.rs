//! Attribute matrix construction.
//!
//! Converts heterogeneous [`ItemRecord`]s into a uniform numeric
//! [`AttributeMatrix`] given an ordered list of criteria. Missing and
//! non-numeric values are a documented lossy default (0.0), never an
//! error: upstream extraction routinely yields partial records.

mod builder;
mod value;

pub use builder::AttributeMatrix;
pub use value::{AttributeValue, ItemRecord};
