//! Comparison criteria.
//!
//! A [`Criterion`] describes one comparison axis: which attribute to read,
//! how much it weighs, and whether higher or lower raw values are preferred.
//!
//! # Key Types
//!
//! - [`Criterion`]: validated, immutable comparison axis
//! - [`Direction`]: maximize or minimize
//! - [`CriterionSpec`]: serde wire form supplied by the dispatch layer
//! - [`DirectionPolicy`]: how unknown direction strings are handled

mod spec;
mod types;

pub use spec::{CriterionSpec, DirectionPolicy};
pub use types::{Criterion, Direction};
