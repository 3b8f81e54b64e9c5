/// Scheme prefix every Broadcast Audio URI starts with
pub const SCHEME: &str = "BLUETOOTH:";

/// Segment delimiter
pub const SEGMENT_SEPARATOR: char = ';';

/// Key/value delimiter inside a segment
pub const KEY_SEPARATOR: char = ':';

/// One `KEY:VALUE` unit of the payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    /// Text before the first `:`
    pub key: &'a str,
    /// Text after the first `:`
    pub value: &'a str,
}

/// Strip the scheme, returning the payload after it
pub fn strip_scheme(input: &str) -> Option<&str> {
    input.strip_prefix(SCHEME)
}

/// Split a payload into segments, in order.
///
/// The value is everything after the first `:`, so values may contain `:`.
/// Parts without a `:` (including the empty parts around `;;`) are dropped.
pub fn segments(payload: &str) -> impl Iterator<Item = Segment<'_>> {
    payload.split(SEGMENT_SEPARATOR).filter_map(|part| {
        match part.split_once(KEY_SEPARATOR) {
            Some((key, value)) => Some(Segment { key, value }),
            None => {
                if !part.is_empty() {
                    tracing::trace!(segment = part, "dropping segment without key separator");
                }
                None
            }
        }
    })
}
