use thiserror::Error;

/// Result type alias using RowSyncError
pub type Result<T> = std::result::Result<T, RowSyncError>;

/// Errors surfaced by the rowsync core.
///
/// The delta engine itself has no recoverable failure mode: a column arity
/// mismatch between a same-id pair is a caller contract violation and panics
/// (see [`delta`](crate::delta::delta)). This type covers the remaining
/// fallible surfaces, currently only decoding an [`Op`](crate::model::Op)
/// from its wire code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowSyncError {
    /// An integer code that does not map to any known operation
    #[error("unknown operation code: {code}")]
    UnknownOpCode {
        /// The unrecognised code
        code: u8,
    },
}
