/// Bluetooth address type
pub mod address;
/// Segment keys and decoded field records
pub mod field;

pub use address::AddressType;
pub use field::{FieldKey, FieldRecord};
