//! Broadcast Audio URI encoding
//!
//! Produces the `BLUETOOTH:` payload a broadcast source renders as a QR code.

/// Segment-by-segment URI builder
pub mod builder;

pub use builder::{BROADCAST_AUDIO_ANNOUNCEMENT_UUID, UriBuilder};
