//! Value transforms applied to segment tokens
//!
//! Each recognized key maps to one of a handful of pure transforms:
//! - address type lookup (`0`/`1` to a label)
//! - hex regrouping (`AABBCC` -> `AA:BB:CC`)
//! - base64 to UTF-8 text
//! - `0x` prefixing, optionally zero-padded to a fixed width

use crate::error::DecodeError;
use crate::models::{AddressType, FieldKey};
use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};

// Standard alphabet, padding optional, non-zero trailing bits accepted (same as `atob`)
const BASE64_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// How a raw token becomes a display value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    /// `0` -> `Public`, `1` -> `Random`, anything else -> blank
    AddressType,
    /// Hex digits regrouped in pairs joined by `:`
    HexGroups,
    /// Standard base64 holding UTF-8 text
    Base64Text,
    /// Raw token with a `0x` prefix
    Prefixed,
    /// Raw token left-padded with `0` to `width`, then `0x` prefixed
    ZeroPad {
        /// Minimum digit count
        width: usize,
    },
}

impl Transform {
    /// Apply the transform to `raw`, the token of a `key` segment
    pub fn apply(&self, key: FieldKey, raw: &str) -> Result<String, DecodeError> {
        match *self {
            Transform::AddressType => Ok(address_type_name(raw).to_string()),
            Transform::HexGroups => hex_groups(key, raw),
            Transform::Base64Text => base64_text(key, raw),
            Transform::Prefixed => Ok(format!("0x{}", raw)),
            Transform::ZeroPad { width } => Ok(zero_pad_prefixed(raw, width)),
        }
    }
}

/// Label for an `AT` token; unknown tokens give an empty label
pub fn address_type_name(raw: &str) -> &'static str {
    AddressType::from_token(raw).map_or("", |t| t.name())
}

/// Regroup a hex string into byte pairs: `AABBCC` -> `AA:BB:CC`.
///
/// The digits are kept as written (no case change).
pub fn hex_groups(key: FieldKey, raw: &str) -> Result<String, DecodeError> {
    if raw.is_empty() {
        return Err(DecodeError::EmptyAddress);
    }
    hex::decode(raw).map_err(|source| DecodeError::InvalidHex { key, source })?;

    // Valid hex is ASCII, so char positions are byte positions
    let mut out = String::with_capacity(raw.len() + raw.len() / 2);
    for (i, ch) in raw.chars().enumerate() {
        if i > 0 && i % 2 == 0 {
            out.push(':');
        }
        out.push(ch);
    }
    Ok(out)
}

/// Decode standard base64 and interpret the bytes as UTF-8.
///
/// Byte sequences that are not UTF-8 become U+FFFD, so binary broadcast
/// codes still produce a value.
pub fn base64_text(key: FieldKey, raw: &str) -> Result<String, DecodeError> {
    let bytes = BASE64_LENIENT
        .decode(raw)
        .map_err(|source| DecodeError::InvalidBase64 { key, source })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Left-pad with `0` to `width` characters and prefix `0x`.
///
/// Longer tokens are kept whole; the token is never parsed as a number.
pub fn zero_pad_prefixed(raw: &str, width: usize) -> String {
    format!("0x{:0>width$}", raw, width = width)
}
