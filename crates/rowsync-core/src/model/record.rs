use serde::{Deserialize, Serialize};

use super::{Stamp, Value};

/// Ordering key for a [`Record`].
///
/// The derived `Ord` compares the variant first, then the payload, so both
/// streams of a delta pair must use a single id shape for the ordering to
/// match the upstream sort.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RecordId {
    /// Integer key
    Int(i64),
    /// Text key
    Text(String),
    /// Composite two-integer key, ordered lexicographically
    Pair(i64, i64),
}

impl From<i64> for RecordId {
    fn from(v: i64) -> Self {
        RecordId::Int(v)
    }
}

impl From<&str> for RecordId {
    fn from(v: &str) -> Self {
        RecordId::Text(v.to_string())
    }
}

impl From<String> for RecordId {
    fn from(v: String) -> Self {
        RecordId::Text(v)
    }
}

impl From<(i64, i64)> for RecordId {
    fn from(v: (i64, i64)) -> Self {
        RecordId::Pair(v.0, v.1)
    }
}

/// One row from either side of a dataset snapshot pair.
///
/// A record surfaces its `id` and `modified` fields independently of the
/// column list so the delta engine can match rows by id and order same-id
/// pairs by freshness. Records are plain values: the engine never constructs
/// or mutates them, it only reads fields and forwards records it yields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Ordering key; both streams of a pair must be sorted ascending by it
    pub id: RecordId,

    /// Modification timestamp; `None` counts as zero for freshness ordering
    pub modified: Option<Stamp>,

    /// Ordered column values. Same-id old/new pairs must have equal arity
    /// whenever a content comparison is required.
    pub columns: Vec<Value>,

    /// Position in `columns` that mirrors this record's own `modified` value.
    ///
    /// When both records of a same-id pair flag the same position, a
    /// difference at that position is expected timestamp propagation and does
    /// not count as a content change. Unflagged (or one-sided) differences
    /// are always substantive.
    #[serde(default)]
    pub timestamp_column: Option<usize>,
}

impl Record {
    /// Create a new record with no timestamp column flagged.
    pub fn new(id: impl Into<RecordId>, modified: Option<Stamp>, columns: Vec<Value>) -> Self {
        Self {
            id: id.into(),
            modified,
            columns,
            timestamp_column: None,
        }
    }

    /// Flag the column position that carries a copy of `modified`.
    pub fn with_timestamp_column(mut self, index: usize) -> Self {
        self.timestamp_column = Some(index);
        self
    }
}
