//! bau_scanner - Bluetooth Broadcast Audio URI decoder
//!
//! Turns the text payload of a scanned Broadcast Audio QR code
//! (`BLUETOOTH:UUID:184F;BN:...;AD:...;;`) into display-ready fields, and
//! builds such payloads on the broadcast source side.
//!
//! # Example
//! ```
//! let fields = bau_scanner::decode("BLUETOOTH:AT:1;BI:A0;BN:VGVzdA==");
//! let lines: Vec<String> = fields.iter().map(|f| f.to_string()).collect();
//! assert_eq!(
//!     lines,
//!     ["Address type: Random", "Broadcast ID: 0x0000A0", "Broadcast Name: Test"]
//! );
//! ```

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// URI decoding (segmentation, key table, value transforms)
pub mod decoder;
/// URI encoding for broadcast sources
pub mod encoder;
/// Error types
pub mod error;
/// Core data structures (FieldKey, FieldRecord, AddressType)
pub mod models;
/// Helpers behind the `bautool` binary
pub mod tools;

pub use decoder::{DecoderConfig, MalformedPolicy, UriDecoder};
pub use encoder::UriBuilder;
pub use error::{DecodeError, EncodeError};
pub use models::{AddressType, FieldKey, FieldRecord};

/// Decode a Broadcast Audio URI
///
/// Returns an empty list when `input` is not a Broadcast Audio URI.
/// Unknown keys and malformed values are dropped, so scanning garbage never
/// fails; at worst it yields fewer fields.
pub fn decode(input: &str) -> Vec<FieldRecord> {
    // Skip policy never reports an error
    UriDecoder::new().decode(input).unwrap_or_default()
}

/// Decode a Broadcast Audio URI, failing on the first malformed value
///
/// Missing scheme and unknown keys are still not errors.
pub fn try_decode(input: &str) -> Result<Vec<FieldRecord>, DecodeError> {
    UriDecoder::with_config(DecoderConfig::strict()).decode(input)
}

/// Decode the first payload that is a Broadcast Audio URI
///
/// Payloads are tried in order (e.g. detection order of several codes in one
/// frame); the first one with at least one field wins.
pub fn decode_first<'a, I>(payloads: I) -> Option<(&'a str, Vec<FieldRecord>)>
where
    I: IntoIterator<Item = &'a str>,
{
    payloads.into_iter().find_map(|payload| {
        let fields = decode(payload);
        if fields.is_empty() {
            None
        } else {
            Some((payload, fields))
        }
    })
}

/// Decode many payloads in parallel
///
/// Output order matches input order.
pub fn decode_batch<S>(payloads: &[S]) -> Vec<Vec<FieldRecord>>
where
    S: AsRef<str> + Sync,
{
    // Skip policy never reports an error
    UriDecoder::new().decode_batch(payloads).unwrap_or_default()
}
