//! Error types for decoding and encoding Broadcast Audio URIs

use crate::models::FieldKey;
use thiserror::Error;

/// A segment value that does not have the shape its key requires.
///
/// The lenient entry points never return this; they drop the segment instead.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// `AD` token is not an even-length run of hex digits
    #[error("{key} value is not valid hex: {source}")]
    InvalidHex {
        /// Offending key
        key: FieldKey,
        /// Underlying decoder error
        #[source]
        source: hex::FromHexError,
    },

    /// `AD` token is empty
    #[error("AD value is empty")]
    EmptyAddress,

    /// `BN`/`BC` token is not base64
    #[error("{key} value is not valid base64: {source}")]
    InvalidBase64 {
        /// Offending key
        key: FieldKey,
        /// Underlying decoder error
        #[source]
        source: base64::DecodeError,
    },
}

/// Errors raised while building a URI
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EncodeError {
    /// Broadcast name must not be empty
    #[error("broadcast name is empty")]
    EmptyName,

    /// Segment delimiters cannot appear inside raw keys or values
    #[error("{key} contains reserved character {ch:?}")]
    ReservedCharacter {
        /// Key of the rejected segment
        key: String,
        /// Character that was found
        ch: char,
    },

    /// Broadcast ID is a 24-bit value
    #[error("broadcast ID {0:#x} does not fit in 24 bits")]
    BroadcastIdOutOfRange(u32),
}
