use serde::{Deserialize, Serialize};

use crate::errors::{Result, RowSyncError};

/// Enumerates the operations the delta engine can describe for a row.
///
/// Each tag carries a fixed integer identity for wire/debug use; the values
/// are stable and must not be reassigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Op {
    /// New record, present only in the new stream
    Add = 1,
    /// Substantively modified record
    Mod = 2,
    /// Deleted record, present only in the old stream
    Del = 3,
    /// Timestamp-only update
    Upd = 4,
}

impl Op {
    /// Stable integer code for this operation.
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Decode an operation from its stable integer code.
    ///
    /// # Errors
    ///
    /// - `UnknownOpCode` — the code does not name any operation
    pub fn from_code(code: u8) -> Result<Self> {
        match code {
            1 => Ok(Op::Add),
            2 => Ok(Op::Mod),
            3 => Ok(Op::Del),
            4 => Ok(Op::Upd),
            code => Err(RowSyncError::UnknownOpCode { code }),
        }
    }
}

impl TryFrom<u8> for Op {
    type Error = RowSyncError;

    fn try_from(code: u8) -> std::result::Result<Self, Self::Error> {
        Op::from_code(code)
    }
}
