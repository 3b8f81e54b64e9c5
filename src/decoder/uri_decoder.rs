use super::config::{DecoderConfig, MalformedPolicy};
use super::segment::{Segment, segments, strip_scheme};
use super::table::field_spec;
use crate::error::DecodeError;
use crate::models::{FieldKey, FieldRecord};
use rayon::prelude::*;

/// Broadcast Audio URI decoder
///
/// Stateless apart from its configuration; one value can be shared across
/// threads and reused for any number of payloads.
#[derive(Debug, Clone, Copy, Default)]
pub struct UriDecoder {
    config: DecoderConfig,
}

impl UriDecoder {
    /// Decoder with default settings (malformed segments are skipped)
    pub fn new() -> Self {
        Self::default()
    }

    /// Decoder with explicit settings
    pub fn with_config(config: DecoderConfig) -> Self {
        Self { config }
    }

    /// Active settings
    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Decode `input` into field records, in segment order.
    ///
    /// Input without the `BLUETOOTH:` scheme gives an empty list. Unknown keys
    /// and segments without a `:` are dropped. A value that fails its
    /// transform is dropped too, unless the policy is
    /// [`MalformedPolicy::Abort`], in which case its error is returned.
    pub fn decode(&self, input: &str) -> Result<Vec<FieldRecord>, DecodeError> {
        let Some(payload) = strip_scheme(input) else {
            return Ok(Vec::new());
        };

        let mut records = Vec::new();
        for segment in segments(payload) {
            match decode_segment(segment) {
                Some(Ok(record)) => records.push(record),
                Some(Err(err)) => match self.config.malformed {
                    MalformedPolicy::SkipSegment => {
                        tracing::debug!(key = segment.key, error = %err, "skipping malformed segment");
                    }
                    MalformedPolicy::Abort => return Err(err),
                },
                None => {
                    tracing::trace!(key = segment.key, "dropping unrecognized key");
                }
            }
        }

        tracing::debug!(fields = records.len(), "decoded broadcast audio URI");
        Ok(records)
    }

    /// Decode many payloads in parallel, output in input order.
    ///
    /// Under [`MalformedPolicy::Abort`] the error of the first failing payload
    /// (in input order) is returned.
    pub fn decode_batch<S>(&self, payloads: &[S]) -> Result<Vec<Vec<FieldRecord>>, DecodeError>
    where
        S: AsRef<str> + Sync,
    {
        payloads
            .par_iter()
            .map(|p| self.decode(p.as_ref()))
            .collect::<Vec<_>>()
            .into_iter()
            .collect()
    }
}

/// Decode one segment; `None` when its key is not recognized
fn decode_segment(segment: Segment<'_>) -> Option<Result<FieldRecord, DecodeError>> {
    let key = FieldKey::from_code(segment.key)?;
    let spec = field_spec(key);
    Some(
        spec.transform
            .apply(key, segment.value)
            .map(|value| FieldRecord::new(key, spec.display_name, value)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "BLUETOOTH:AT:1;AD:AABBCCDDEEFF;UUID:184E;BI:0000A0;PI:00A0;AS:01;NS:01;BN:VGVzdA==;BC:U2VjcmV0";

    fn values(records: &[FieldRecord]) -> Vec<(&'static str, &str)> {
        records
            .iter()
            .map(|r| (r.display_name, r.value.as_str()))
            .collect()
    }

    #[test]
    fn test_decode_sample() {
        let records = UriDecoder::new().decode(SAMPLE).unwrap();
        assert_eq!(
            values(&records),
            vec![
                ("Address type", "Random"),
                ("Address", "AA:BB:CC:DD:EE:FF"),
                ("UUID", "0x184E"),
                ("Broadcast ID", "0x0000A0"),
                ("PA interval", "0x00A0"),
                ("Advertising SID", "0x01"),
                ("No. of subgroups", "0x01"),
                ("Broadcast Name", "Test"),
                ("Broadcast Code", "Secret"),
            ]
        );
    }

    #[test]
    fn test_missing_scheme() {
        let decoder = UriDecoder::new();
        assert!(decoder.decode("AT:1;AD:AABB").unwrap().is_empty());
        assert!(decoder.decode("https://example.com").unwrap().is_empty());
        assert!(decoder.decode("").unwrap().is_empty());
    }

    #[test]
    fn test_unknown_key_dropped() {
        let records = UriDecoder::new().decode("BLUETOOTH:XX:foo;AT:0").unwrap();
        assert_eq!(values(&records), vec![("Address type", "Public")]);
        assert_eq!(records[0].key, FieldKey::AddressType);
    }

    #[test]
    fn test_unknown_address_type_is_blank() {
        let records = UriDecoder::new().decode("BLUETOOTH:AT:2").unwrap();
        assert_eq!(values(&records), vec![("Address type", "")]);
    }

    #[test]
    fn test_duplicate_keys_kept() {
        let records = UriDecoder::new().decode("BLUETOOTH:AS:1;AS:2").unwrap();
        assert_eq!(
            values(&records),
            vec![("Advertising SID", "0x01"), ("Advertising SID", "0x02")]
        );
    }

    #[test]
    fn test_malformed_segment_skipped() {
        let records = UriDecoder::new()
            .decode("BLUETOOTH:AD:XYZ;BN:***;AT:1")
            .unwrap();
        assert_eq!(values(&records), vec![("Address type", "Random")]);
    }

    #[test]
    fn test_malformed_segment_aborts_when_strict() {
        let decoder = UriDecoder::with_config(DecoderConfig::strict());
        let err = decoder.decode("BLUETOOTH:AT:1;AD:ABC").unwrap_err();
        assert!(matches!(err, DecodeError::InvalidHex { key: FieldKey::Address, .. }));

        // Unknown keys are still not an error
        assert_eq!(decoder.decode("BLUETOOTH:SQ:1;AT:0").unwrap().len(), 1);
    }

    #[test]
    fn test_decode_batch_follows_policy() {
        let payloads = ["BLUETOOTH:AT:0", "BLUETOOTH:AD:ABC;AT:1", "BLUETOOTH:AD:XY"];

        let lenient = UriDecoder::new().decode_batch(&payloads).unwrap();
        assert_eq!(lenient.len(), 3);
        assert_eq!(lenient[1].len(), 1);
        assert!(lenient[2].is_empty());

        let err = UriDecoder::with_config(DecoderConfig::strict())
            .decode_batch(&payloads)
            .unwrap_err();
        assert!(matches!(err, DecodeError::InvalidHex { .. }));
    }
}
