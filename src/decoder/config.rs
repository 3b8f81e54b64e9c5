use std::sync::OnceLock;

/// What to do with a segment whose value fails its key's transform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedPolicy {
    /// Drop the segment and keep decoding the rest
    #[default]
    SkipSegment,
    /// Stop and report the first malformed value
    Abort,
}

impl MalformedPolicy {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "skip" => Some(MalformedPolicy::SkipSegment),
            "abort" => Some(MalformedPolicy::Abort),
            _ => None,
        }
    }
}

/// Decoder settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecoderConfig {
    /// Handling of malformed segment values
    pub malformed: MalformedPolicy,
}

impl DecoderConfig {
    /// Strict settings: the first malformed value aborts the decode
    pub fn strict() -> Self {
        Self {
            malformed: MalformedPolicy::Abort,
        }
    }

    /// Settings from the environment (`BAU_MALFORMED_POLICY=skip|abort`).
    ///
    /// Read once per process; unset or unknown values fall back to the default.
    pub fn from_env() -> Self {
        Self {
            malformed: malformed_policy_from_env(),
        }
    }
}

static MALFORMED_POLICY: OnceLock<MalformedPolicy> = OnceLock::new();

fn malformed_policy_from_env() -> MalformedPolicy {
    *MALFORMED_POLICY.get_or_init(|| {
        std::env::var("BAU_MALFORMED_POLICY")
            .ok()
            .and_then(|v| MalformedPolicy::parse(&v))
            .unwrap_or_default()
    })
}
