use std::fmt;
use std::str::FromStr;

use ring::hmac;
use serde::{Deserialize, Serialize};

use crate::error::HotpError;

/// HMAC algorithms usable for code generation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum HmacAlgorithm {
    /// HMAC-SHA1, the RFC 4226 default (20-byte digest)
    #[default]
    #[serde(rename = "SHA1")]
    Sha1,
    /// HMAC-SHA256 (32-byte digest)
    #[serde(rename = "SHA256")]
    Sha256,
    /// HMAC-SHA512 (64-byte digest)
    #[serde(rename = "SHA512")]
    Sha512,
}

impl HmacAlgorithm {
    /// Name of the algorithm as it appears in provisioning URIs
    pub fn name(&self) -> &'static str {
        match self {
            HmacAlgorithm::Sha1 => "SHA1",
            HmacAlgorithm::Sha256 => "SHA256",
            HmacAlgorithm::Sha512 => "SHA512",
        }
    }

    pub(crate) fn hmac_algorithm(&self) -> hmac::Algorithm {
        match self {
            HmacAlgorithm::Sha1 => hmac::HMAC_SHA1_FOR_LEGACY_USE_ONLY,
            HmacAlgorithm::Sha256 => hmac::HMAC_SHA256,
            HmacAlgorithm::Sha512 => hmac::HMAC_SHA512,
        }
    }
}

impl fmt::Display for HmacAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HmacAlgorithm {
    type Err = HotpError;

    /// Matches case-insensitively against the closed algorithm set
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "SHA1" => Ok(HmacAlgorithm::Sha1),
            "SHA256" => Ok(HmacAlgorithm::Sha256),
            "SHA512" => Ok(HmacAlgorithm::Sha512),
            _ => Err(HotpError::InvalidArgument(format!(
                "unknown HMAC algorithm: {s}"
            ))),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("sha1".parse::<HmacAlgorithm>().unwrap(), HmacAlgorithm::Sha1);
        assert_eq!("Sha256".parse::<HmacAlgorithm>().unwrap(), HmacAlgorithm::Sha256);
        assert_eq!("SHA512".parse::<HmacAlgorithm>().unwrap(), HmacAlgorithm::Sha512);
    }

    #[test]
    fn parse_rejects_unknown_names() {
        let err = "MD5".parse::<HmacAlgorithm>().unwrap_err();
        assert!(matches!(err, HotpError::InvalidArgument(_)));
    }

    #[test]
    fn name_round_trips_through_parse() {
        for algorithm in [HmacAlgorithm::Sha1, HmacAlgorithm::Sha256, HmacAlgorithm::Sha512] {
            assert_eq!(algorithm.name().parse::<HmacAlgorithm>().unwrap(), algorithm);
        }
    }

    #[test]
    fn default_is_sha1() {
        assert_eq!(HmacAlgorithm::default(), HmacAlgorithm::Sha1);
    }
}
