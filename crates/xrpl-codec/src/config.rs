//! Facade configuration.

use serde::{Deserialize, Serialize};
use xrpl_codec_core::UnknownFieldPolicy;

/// Configuration for a [`Codec`](crate::Codec).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecConfig {
    /// What to do with JSON keys that name no known field.
    #[serde(default, with = "policy")]
    pub unknown_fields: UnknownFieldPolicy,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            unknown_fields: UnknownFieldPolicy::Ignore,
        }
    }
}

impl CodecConfig {
    /// Reject unknown JSON keys instead of skipping them.
    pub fn strict() -> Self {
        Self {
            unknown_fields: UnknownFieldPolicy::Reject,
        }
    }
}

/// `"ignore"` / `"reject"` on the wire.
mod policy {
    use serde::{Deserialize, Deserializer, Serializer};
    use xrpl_codec_core::UnknownFieldPolicy;

    pub fn serialize<S: Serializer>(policy: &UnknownFieldPolicy, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(match policy {
            UnknownFieldPolicy::Ignore => "ignore",
            UnknownFieldPolicy::Reject => "reject",
        })
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<UnknownFieldPolicy, D::Error> {
        match String::deserialize(d)?.as_str() {
            "ignore" => Ok(UnknownFieldPolicy::Ignore),
            "reject" => Ok(UnknownFieldPolicy::Reject),
            other => Err(serde::de::Error::unknown_variant(other, &["ignore", "reject"])),
        }
    }
}
