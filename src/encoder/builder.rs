use crate::decoder::segment::{KEY_SEPARATOR, SCHEME, SEGMENT_SEPARATOR};
use crate::error::EncodeError;
use crate::models::{AddressType, FieldKey};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::fmt::Write;

/// Basic Audio Announcement service UUID advertised by broadcast sources
pub const BROADCAST_AUDIO_ANNOUNCEMENT_UUID: u16 = 0x184F;

const MAX_BROADCAST_ID: u32 = 0x00FF_FFFF;

/// Builds a Broadcast Audio URI one segment at a time.
///
/// Segments are emitted in the order they are added.
///
/// # Example
/// ```
/// use bau_scanner::encoder::UriBuilder;
/// use bau_scanner::models::AddressType;
///
/// let mut builder = UriBuilder::new();
/// builder
///     .address_type(AddressType::Public)
///     .broadcast_id(0xA0)
///     .unwrap();
/// assert_eq!(builder.build(), "BLUETOOTH:AT:0;BI:0000A0;;");
/// ```
#[derive(Debug, Clone, Default)]
pub struct UriBuilder {
    segments: Vec<(String, String)>,
}

impl UriBuilder {
    /// Empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Payload shown by a broadcast source. Only the address, broadcast ID
    /// and name vary; the remaining segments carry fixed values.
    pub fn broadcast_source(
        address_type: AddressType,
        address: [u8; 6],
        broadcast_id: u32,
        name: &str,
    ) -> Result<Self, EncodeError> {
        let mut builder = Self::new();
        builder
            .uuid(BROADCAST_AUDIO_ANNOUNCEMENT_UUID)
            .broadcast_name(name)?
            .raw("SQ", "1")?
            .address_type(address_type)
            .address(address)
            .advertising_sid(0)
            .broadcast_id(broadcast_id)?
            .pa_interval(0xFFFF)
            .subgroups(1)
            .raw("BS", "1")?;
        Ok(builder)
    }

    fn push(&mut self, key: FieldKey, value: String) -> &mut Self {
        self.segments.push((key.code().to_string(), value));
        self
    }

    /// `UUID` segment, four upper-case hex digits
    pub fn uuid(&mut self, uuid: u16) -> &mut Self {
        self.push(FieldKey::Uuid, format!("{:04X}", uuid))
    }

    /// `BN` segment; the name must not be empty
    pub fn broadcast_name(&mut self, name: &str) -> Result<&mut Self, EncodeError> {
        if name.is_empty() {
            return Err(EncodeError::EmptyName);
        }
        Ok(self.push(FieldKey::BroadcastName, STANDARD.encode(name)))
    }

    /// `BC` segment
    pub fn broadcast_code(&mut self, code: &str) -> &mut Self {
        self.push(FieldKey::BroadcastCode, STANDARD.encode(code))
    }

    /// `AT` segment
    pub fn address_type(&mut self, address_type: AddressType) -> &mut Self {
        self.push(FieldKey::AddressType, address_type.token().to_string())
    }

    /// `AD` segment from an address in controller (little-endian) byte order.
    ///
    /// Printed most significant byte first, so `[0x66, .., 0x11]` becomes
    /// `11..66`.
    pub fn address(&mut self, address: [u8; 6]) -> &mut Self {
        let mut msb_first = address;
        msb_first.reverse();
        self.push(FieldKey::Address, hex::encode_upper(msb_first))
    }

    /// `BI` segment, six upper-case hex digits
    pub fn broadcast_id(&mut self, broadcast_id: u32) -> Result<&mut Self, EncodeError> {
        if broadcast_id > MAX_BROADCAST_ID {
            return Err(EncodeError::BroadcastIdOutOfRange(broadcast_id));
        }
        Ok(self.push(FieldKey::BroadcastId, format!("{:06X}", broadcast_id)))
    }

    /// `PI` segment
    pub fn pa_interval(&mut self, interval: u16) -> &mut Self {
        self.push(FieldKey::PaInterval, format!("{:X}", interval))
    }

    /// `AS` segment
    pub fn advertising_sid(&mut self, sid: u8) -> &mut Self {
        self.push(FieldKey::AdvertisingSid, format!("{:X}", sid))
    }

    /// `NS` segment
    pub fn subgroups(&mut self, count: u8) -> &mut Self {
        self.push(FieldKey::Subgroups, format!("{:X}", count))
    }

    /// Arbitrary segment, for keys the decoder does not interpret (`SQ`, `BS`, ...)
    pub fn raw(&mut self, key: &str, value: &str) -> Result<&mut Self, EncodeError> {
        let reserved = key
            .chars()
            .find(|&c| c == SEGMENT_SEPARATOR || c == KEY_SEPARATOR)
            .or_else(|| value.chars().find(|&c| c == SEGMENT_SEPARATOR));
        if let Some(ch) = reserved {
            return Err(EncodeError::ReservedCharacter {
                key: key.to_string(),
                ch,
            });
        }
        self.segments.push((key.to_string(), value.to_string()));
        Ok(self)
    }

    /// Render the URI: scheme, `KEY:VALUE;` per segment, closing `;`
    pub fn build(&self) -> String {
        let mut out = String::from(SCHEME);
        for (key, value) in &self.segments {
            // Writing to a String cannot fail
            let _ = write!(out, "{}{}{}{}", key, KEY_SEPARATOR, value, SEGMENT_SEPARATOR);
        }
        out.push(SEGMENT_SEPARATOR);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_broadcast_source_payload() {
        let address = [0x66, 0x55, 0x44, 0x33, 0x22, 0xC1];
        let uri = UriBuilder::broadcast_source(AddressType::Random, address, 0x123456, "Test")
            .unwrap()
            .build();
        assert_eq!(
            uri,
            "BLUETOOTH:UUID:184F;BN:VGVzdA==;SQ:1;AT:1;AD:C12233445566;AS:0;BI:123456;PI:FFFF;NS:1;BS:1;;"
        );
    }

    #[test]
    fn test_empty_builder() {
        assert_eq!(UriBuilder::new().build(), "BLUETOOTH:;");
    }

    #[test]
    fn test_rejects_bad_input() {
        let mut builder = UriBuilder::new();
        assert_eq!(builder.broadcast_name("").unwrap_err(), EncodeError::EmptyName);
        assert_eq!(
            builder.broadcast_id(0x0100_0000).unwrap_err(),
            EncodeError::BroadcastIdOutOfRange(0x0100_0000)
        );
        assert!(matches!(
            builder.raw("SQ", "1;AT:0"),
            Err(EncodeError::ReservedCharacter { ch: ';', .. })
        ));
        assert!(matches!(
            builder.raw("S:Q", "1"),
            Err(EncodeError::ReservedCharacter { ch: ':', .. })
        ));
        // Values may carry ':' since only the first one splits a segment
        assert!(builder.raw("XX", "a:b").is_ok());
    }
}
