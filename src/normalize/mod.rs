//! Stateless normalization helpers.
//!
//! These utilities are independent of [`crate::engine::ParetoEngine`] and
//! can be used on their own:
//!
//! - [`z_score`]: standardize to mean 0, std 1
//! - [`min_max`]: rescale to `[0, 1]`, optionally inverted
//! - [`weighted_sum`]: weighted average of attribute scores
//! - [`composite_score`]: ranking score from weighted per-criterion scores
//! - [`normalize_attributes`]: per-attribute min-max across item records

mod batch;
mod stats;

pub use batch::{composite_score, normalize_attributes, weighted_sum};
pub use stats::{mean, min_max, std_dev, z_score};
