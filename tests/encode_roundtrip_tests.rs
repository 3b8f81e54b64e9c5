//! Payloads built by the encoder must decode back to what went in.

use bau_scanner::{AddressType, FieldKey, UriBuilder, decode};
use proptest::prelude::*;

fn value_of(records: &[bau_scanner::FieldRecord], key: FieldKey) -> Option<String> {
    records.iter().find(|r| r.key == key).map(|r| r.value.clone())
}

#[test]
fn test_broadcast_source_roundtrip() {
    let address = [0x01, 0x02, 0x03, 0x04, 0x05, 0xC6];
    let mut builder =
        UriBuilder::broadcast_source(AddressType::Public, address, 0xBEEF, "Kitchen speaker")
            .unwrap();
    builder.broadcast_code("0000");
    let records = decode(&builder.build());

    assert_eq!(value_of(&records, FieldKey::Uuid).unwrap(), "0x184F");
    assert_eq!(value_of(&records, FieldKey::BroadcastName).unwrap(), "Kitchen speaker");
    assert_eq!(value_of(&records, FieldKey::AddressType).unwrap(), "Public");
    assert_eq!(value_of(&records, FieldKey::Address).unwrap(), "C6:05:04:03:02:01");
    assert_eq!(value_of(&records, FieldKey::BroadcastId).unwrap(), "0x00BEEF");
    assert_eq!(value_of(&records, FieldKey::BroadcastCode).unwrap(), "0000");
    assert_eq!(records.len(), 9);
}

proptest! {
    #[test]
    fn prop_name_roundtrip(name in "\\PC{1,32}") {
        let mut builder = UriBuilder::new();
        builder.broadcast_name(&name).unwrap();
        let records = decode(&builder.build());
        prop_assert_eq!(records.len(), 1);
        prop_assert_eq!(&records[0].value, &name);
    }

    #[test]
    fn prop_code_roundtrip(code in any::<String>()) {
        let mut builder = UriBuilder::new();
        builder.broadcast_code(&code);
        let records = decode(&builder.build());
        prop_assert_eq!(&records[0].value, &code);
    }

    #[test]
    fn prop_numeric_fields_roundtrip(id in 0u32..=0xFF_FFFF, interval: u16, sid in 0u8..16, subgroups: u8) {
        let mut builder = UriBuilder::new();
        builder
            .broadcast_id(id)
            .unwrap()
            .pa_interval(interval)
            .advertising_sid(sid)
            .subgroups(subgroups);
        let records = decode(&builder.build());

        prop_assert_eq!(&records[0].value, &format!("0x{:06X}", id));
        prop_assert_eq!(&records[1].value, &format!("0x{:04X}", interval));
        prop_assert_eq!(&records[2].value, &format!("0x{:02X}", sid));
        prop_assert_eq!(&records[3].value, &format!("0x{:02X}", subgroups));
    }

    #[test]
    fn prop_address_roundtrip(address: [u8; 6]) {
        let mut builder = UriBuilder::new();
        builder.address(address);
        let records = decode(&builder.build());

        let expected: Vec<String> = address.iter().rev().map(|b| format!("{:02X}", b)).collect();
        prop_assert_eq!(&records[0].value, &expected.join(":"));
    }
}
