//! Broadcast Audio URI decoding
//!
//! This module turns a scanned `BLUETOOTH:` payload into display-ready fields:
//! - Scheme check and `;`-separated segmentation
//! - Key table (display name and value transform per key)
//! - Value transforms (hex regrouping, base64 text, zero padding)

/// Decoder settings (malformed value policy)
pub mod config;
/// Segmentation of the URI payload
pub mod segment;
/// Key to display name / transform table
pub mod table;
/// Per-key value transforms
pub mod transform;
/// Main decoder
pub mod uri_decoder;

pub use config::{DecoderConfig, MalformedPolicy};
pub use uri_decoder::UriDecoder;
