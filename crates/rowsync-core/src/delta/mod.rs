//! Row-stream delta engine.
//!
//! Compares two id-ordered streams of keyed records and classifies every
//! discrepancy so a downstream synchronizer can apply only the necessary
//! mutations (ADD → insert, MOD → full update, UPD → timestamp-only update,
//! DEL → delete).
//!
//! ## Entry points
//!
//! ```ignore
//! use rowsync_core::delta::{delta, delta_partial};
//!
//! for (op, record) in delta(old_rows, new_rows) {
//!     apply(op, record)?;
//! }
//! ```
//!
//! ## Guarantees
//!
//! - **Single pass**: O(n+m) time, O(1) state beyond the two stream cursors.
//! - **Laziness**: production suspends after each yielded pair; the inputs
//!   are pulled exactly as far as emission requires.
//! - **Freshness tie-break**: a missing `modified` stamp counts as zero, and
//!   the new record must be strictly fresher before any column is compared.
//! - **Timestamp exemption**: a column difference is ignored when both sides
//!   flag that position as the mirror of their own `modified` value.
//! - **Purity**: no side effects, no retained records, safe to run from
//!   independent threads over independent inputs.

pub mod engine;

pub use engine::{delta, delta_partial, Delta, DeltaPartial};
