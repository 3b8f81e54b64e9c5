use serde::Serialize;
use std::fmt;

/// Segment key of a Broadcast Audio URI
///
/// This is the closed set of keys the decoder understands. Keys outside it
/// are dropped during decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FieldKey {
    /// `AT` - address type
    #[serde(rename = "AT")]
    AddressType,
    /// `AD` - device address
    #[serde(rename = "AD")]
    Address,
    /// `BN` - broadcast name (base64)
    #[serde(rename = "BN")]
    BroadcastName,
    /// `BC` - broadcast code (base64)
    #[serde(rename = "BC")]
    BroadcastCode,
    /// `UUID` - service UUID
    #[serde(rename = "UUID")]
    Uuid,
    /// `BI` - broadcast ID
    #[serde(rename = "BI")]
    BroadcastId,
    /// `PI` - periodic advertising interval
    #[serde(rename = "PI")]
    PaInterval,
    /// `AS` - advertising SID
    #[serde(rename = "AS")]
    AdvertisingSid,
    /// `NS` - number of subgroups
    #[serde(rename = "NS")]
    Subgroups,
}

impl FieldKey {
    /// Every recognized key
    pub const ALL: [FieldKey; 9] = [
        FieldKey::AddressType,
        FieldKey::Address,
        FieldKey::BroadcastName,
        FieldKey::BroadcastCode,
        FieldKey::Uuid,
        FieldKey::BroadcastId,
        FieldKey::PaInterval,
        FieldKey::AdvertisingSid,
        FieldKey::Subgroups,
    ];

    /// Look up a key by its wire code (case-sensitive)
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "AT" => Some(FieldKey::AddressType),
            "AD" => Some(FieldKey::Address),
            "BN" => Some(FieldKey::BroadcastName),
            "BC" => Some(FieldKey::BroadcastCode),
            "UUID" => Some(FieldKey::Uuid),
            "BI" => Some(FieldKey::BroadcastId),
            "PI" => Some(FieldKey::PaInterval),
            "AS" => Some(FieldKey::AdvertisingSid),
            "NS" => Some(FieldKey::Subgroups),
            _ => None,
        }
    }

    /// Wire code as it appears in the URI
    pub fn code(&self) -> &'static str {
        match self {
            FieldKey::AddressType => "AT",
            FieldKey::Address => "AD",
            FieldKey::BroadcastName => "BN",
            FieldKey::BroadcastCode => "BC",
            FieldKey::Uuid => "UUID",
            FieldKey::BroadcastId => "BI",
            FieldKey::PaInterval => "PI",
            FieldKey::AdvertisingSid => "AS",
            FieldKey::Subgroups => "NS",
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// One decoded attribute of a Broadcast Audio URI
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldRecord {
    /// Which attribute this is
    pub key: FieldKey,
    /// Human-readable label for the key
    pub display_name: &'static str,
    /// Formatted value, ready for display
    pub value: String,
}

impl FieldRecord {
    /// Create a record
    pub fn new(key: FieldKey, display_name: &'static str, value: impl Into<String>) -> Self {
        Self {
            key,
            display_name,
            value: value.into(),
        }
    }
}

impl fmt::Display for FieldRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.display_name, self.value)
    }
}
