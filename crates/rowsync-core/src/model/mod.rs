pub mod op;
pub mod record;
pub mod stamp;
pub mod value;

pub use op::Op;
pub use record::{Record, RecordId};
pub use stamp::Stamp;
pub use value::Value;
