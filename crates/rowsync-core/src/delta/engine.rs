//! Merge-diff engine over two id-ordered record streams.
//!
//! The entry points are [`delta`] and [`delta_partial`], which build lazy
//! iterators classifying each discrepancy between an "old" and a "new"
//! snapshot stream into an [`Op`].

use std::cmp::Ordering;

use tracing::trace;

use crate::model::{Op, Record, Stamp};

/// Project a possibly-absent stamp onto the freshness axis, with `None`
/// counting as zero.
fn freshness(stamp: &Option<Stamp>) -> f64 {
    stamp.as_ref().map_or(0.0, Stamp::as_f64)
}

/// Classify a same-id old/new pair.
///
/// Returns `None` when the old record is at least as fresh as the new one
/// (nothing to emit), `Some(Op::Upd)` when only flagged timestamp columns
/// differ, and `Some(Op::Mod)` when any other column differs.
///
/// # Panics
///
/// Panics if the two column lists differ in length (caller contract
/// violation: mismatched schemas between the old and new sources).
fn classify_pair(old: &Record, new: &Record) -> Option<Op> {
    // Tie-break rule: freshness decides before any column is looked at.
    if freshness(&old.modified) >= freshness(&new.modified) {
        return None;
    }

    assert_eq!(
        old.columns.len(),
        new.columns.len(),
        "mismatched column arity for id {:?}",
        old.id,
    );

    for (index, (old_value, new_value)) in
        old.columns.iter().zip(new.columns.iter()).enumerate()
    {
        if old_value != new_value {
            // A difference at the position both sides flag as the mirrored
            // timestamp is expected propagation, not a content change.
            if old.timestamp_column == Some(index) && new.timestamp_column == Some(index) {
                continue;
            }
            trace!(id = ?new.id, column = index, "substantive column change");
            return Some(Op::Mod);
        }
    }

    Some(Op::Upd)
}

/// Lazy iterator over the classified differences between two record streams.
///
/// Created by [`delta`]. Each call to `next` pulls at most as many records
/// from the two inputs as needed to produce one `(Op, Record)` pair; nothing
/// is pulled before the first call. The iterator holds no records beyond its
/// two cursor heads and is not restartable.
#[derive(Debug)]
pub struct Delta<O, N> {
    old: O,
    new: N,
    old_head: Option<Record>,
    new_head: Option<Record>,
    primed: bool,
}

impl<O, N> Iterator for Delta<O, N>
where
    O: Iterator<Item = Record>,
    N: Iterator<Item = Record>,
{
    type Item = (Op, Record);

    fn next(&mut self) -> Option<Self::Item> {
        if !self.primed {
            self.old_head = self.old.next();
            self.new_head = self.new.next();
            self.primed = true;
        }

        loop {
            match (self.old_head.take(), self.new_head.take()) {
                (Some(old), Some(new)) => match old.id.cmp(&new.id) {
                    Ordering::Less => {
                        // Old record with no counterpart in new.
                        self.new_head = Some(new);
                        self.old_head = self.old.next();
                        return Some((Op::Del, old));
                    }
                    Ordering::Greater => {
                        // New record with no counterpart in old.
                        self.old_head = Some(old);
                        self.new_head = self.new.next();
                        return Some((Op::Add, new));
                    }
                    Ordering::Equal => {
                        // Get the advance out of the way before classifying.
                        self.old_head = self.old.next();
                        self.new_head = self.new.next();
                        match classify_pair(&old, &new) {
                            Some(op) => return Some((op, new)),
                            // Old side at least as fresh: nothing to emit,
                            // keep walking.
                            None => continue,
                        }
                    }
                },
                // One side exhausted: drain the other, one record per call.
                (Some(old), None) => {
                    self.old_head = self.old.next();
                    return Some((Op::Del, old));
                }
                (None, Some(new)) => {
                    self.new_head = self.new.next();
                    return Some((Op::Add, new));
                }
                (None, None) => return None,
            }
        }
    }
}

/// Compare two id-ordered record streams and lazily yield each discrepancy
/// with the [`Op`] describing it.
///
/// Records present only in `new` are yielded as `Add`; records present only
/// in `old` as `Del`. For a same-id pair the old record must be strictly less
/// fresh (missing stamps count as zero) for anything to be emitted; the pair
/// is then `Upd` if only flagged timestamp columns differ and `Mod` if any
/// other column differs.
///
/// Both inputs must yield records in non-decreasing id order. Violating this
/// produces incorrect (but memory-safe) results; it is a documented caller
/// obligation, not a runtime check. Duplicate-id runs within one stream have
/// no defined pairing semantics.
///
/// # Panics
///
/// The returned iterator panics if a same-id pair with a freshness delta has
/// column lists of different lengths (mismatched schemas upstream).
pub fn delta<O, N>(old: O, new: N) -> Delta<O::IntoIter, N::IntoIter>
where
    O: IntoIterator<Item = Record>,
    N: IntoIterator<Item = Record>,
{
    Delta {
        old: old.into_iter(),
        new: new.into_iter(),
        old_head: None,
        new_head: None,
        primed: false,
    }
}

/// Lazy iterator created by [`delta_partial`]: the full delta with every
/// `Del` entry filtered out.
#[derive(Debug)]
pub struct DeltaPartial<O, N> {
    inner: Delta<O, N>,
}

impl<O, N> Iterator for DeltaPartial<O, N>
where
    O: Iterator<Item = Record>,
    N: Iterator<Item = Record>,
{
    type Item = (Op, Record);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.inner.next() {
                Some((Op::Del, _)) => continue,
                other => return other,
            }
        }
    }
}

/// A convenience wrapper for [`delta`] that does not produce `Del`
/// operations, for callers that only ever insert into or update a
/// destination.
///
/// Identical contract to [`delta`] otherwise, including the arity panic.
pub fn delta_partial<O, N>(old: O, new: N) -> DeltaPartial<O::IntoIter, N::IntoIter>
where
    O: IntoIterator<Item = Record>,
    N: IntoIterator<Item = Record>,
{
    DeltaPartial {
        inner: delta(old, new),
    }
}
