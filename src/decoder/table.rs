use super::transform::Transform;
use crate::models::FieldKey;

/// Display name and value transform for one recognized key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Key this entry describes
    pub key: FieldKey,
    /// Label shown next to the value
    pub display_name: &'static str,
    /// How the raw token is turned into the value
    pub transform: Transform,
}

// Index: FieldKey discriminant (same order as FieldKey::ALL)
static FIELD_TABLE: [FieldSpec; 9] = [
    FieldSpec {
        key: FieldKey::AddressType,
        display_name: "Address type",
        transform: Transform::AddressType,
    },
    FieldSpec {
        key: FieldKey::Address,
        display_name: "Address",
        transform: Transform::HexGroups,
    },
    FieldSpec {
        key: FieldKey::BroadcastName,
        display_name: "Broadcast Name",
        transform: Transform::Base64Text,
    },
    FieldSpec {
        key: FieldKey::BroadcastCode,
        display_name: "Broadcast Code",
        transform: Transform::Base64Text,
    },
    FieldSpec {
        key: FieldKey::Uuid,
        display_name: "UUID",
        transform: Transform::Prefixed,
    },
    FieldSpec {
        key: FieldKey::BroadcastId,
        display_name: "Broadcast ID",
        transform: Transform::ZeroPad { width: 6 },
    },
    FieldSpec {
        key: FieldKey::PaInterval,
        display_name: "PA interval",
        transform: Transform::ZeroPad { width: 4 },
    },
    FieldSpec {
        key: FieldKey::AdvertisingSid,
        display_name: "Advertising SID",
        transform: Transform::ZeroPad { width: 2 },
    },
    FieldSpec {
        key: FieldKey::Subgroups,
        display_name: "No. of subgroups",
        transform: Transform::ZeroPad { width: 2 },
    },
];

/// Table entry for `key`
pub fn field_spec(key: FieldKey) -> &'static FieldSpec {
    &FIELD_TABLE[key as usize]
}
