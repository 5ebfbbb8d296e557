//! rowsync core - ordered row-stream delta classification
//!
//! This crate provides the data model and merge-diff engine for computing
//! the difference between two id-ordered snapshots of a dataset:
//! - [`Record`]/[`RecordId`]/[`Value`]/[`Stamp`] models for keyed,
//!   timestamped, column-bearing rows
//! - [`Op`] change-kind enumeration with stable wire codes
//! - [`delta()`]/[`delta_partial()`] lazy merge-join classifiers
//!
//! How the streams are produced, how they are kept sorted, and how the
//! resulting operations are applied to a destination store are caller
//! concerns; the crate itself performs no I/O.

pub mod delta;
pub mod errors;
pub mod model;

// Re-export commonly used types
pub use delta::{delta, delta_partial, Delta, DeltaPartial};
pub use errors::{Result, RowSyncError};
pub use model::{Op, Record, RecordId, Stamp, Value};
