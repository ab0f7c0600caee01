use ring::hmac;

use crate::algorithm::HmacAlgorithm;
use crate::error::{HotpError, HotpResult};
use crate::{secret, uri};

const URI_SCHEME: &str = "otpauth";
const OTP_TYPE: &str = "hotp";

/// Default number of digits for generated codes
pub const DEFAULT_PASSWORD_LENGTH: usize = 6;

/// Generates and verifies counter-based one-time passwords (RFC 4226).
///
/// Immutable once built; holds no state between calls, so a single instance
/// may be shared across threads freely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HotpGenerator {
    /// Base32 text of the secret key
    secret: Box<[u8]>,
    /// Number of digits for generated codes, in range 6..=8
    password_length: usize,
    /// HMAC algorithm used to generate codes
    algorithm: HmacAlgorithm,
}

impl HotpGenerator {
    /// Start building a generator for a Base32 secret
    pub fn builder(secret: &[u8]) -> HotpResult<Builder> {
        Builder::new(secret)
    }

    /// Create a generator with the default password length and algorithm
    pub fn with_default_values(secret: &[u8]) -> HotpResult<Self> {
        Ok(Builder::new(secret)?.build())
    }

    /// Build a generator from an otpauth URI.
    ///
    /// The `secret` query parameter is mandatory. `digits` and `algorithm`
    /// are optional and default to 6 and SHA1; if present but invalid the
    /// whole URI is rejected as [`HotpError::MalformedUri`]. The `counter`
    /// parameter is left to callers that need it.
    pub fn from_uri(uri: &str) -> HotpResult<Self> {
        let query = uri::query_items(uri)?;
        let lookup =
            |key: &str| query.iter().find(|(k, _)| k == key).map(|(_, value)| value.as_str());

        let secret = lookup("secret").ok_or_else(|| {
            HotpError::InvalidArgument("secret query parameter must be set".to_string())
        })?;
        let mut builder = Builder::new(secret.as_bytes())?;

        if let Some(digits) = lookup("digits") {
            let digits = digits.parse::<usize>().map_err(|err| {
                malformed(
                    uri,
                    HotpError::InvalidArgument(format!("digits must be an integer: {err}")),
                )
            })?;
            builder = builder.password_length(digits).map_err(|err| malformed(uri, err))?;
        }

        if let Some(algorithm) = lookup("algorithm") {
            builder = builder.algorithm(algorithm.parse().map_err(|err| malformed(uri, err))?);
        }

        let generator = builder.build();
        tracing::debug!(
            digits = generator.password_length,
            algorithm = %generator.algorithm,
            "parsed provisioning URI"
        );
        Ok(generator)
    }

    /// Number of digits of generated codes
    pub fn password_length(&self) -> usize {
        self.password_length
    }

    /// HMAC algorithm used to generate codes
    pub fn algorithm(&self) -> HmacAlgorithm {
        self.algorithm
    }

    /// Generate the code for a counter value.
    ///
    /// Fails with [`HotpError::InvalidEncoding`] if the secret is not valid
    /// Base32 and with [`HotpError::InvalidKey`] if it decodes to zero bytes.
    pub fn generate(&self, counter: u64) -> HotpResult<String> {
        let key_bytes = secret::decode(&self.secret)?;
        if key_bytes.is_empty() {
            return Err(HotpError::InvalidKey);
        }

        let key = hmac::Key::new(self.algorithm.hmac_algorithm(), &key_bytes);
        let hash = hmac::sign(&key, &counter.to_be_bytes());

        Ok(self.code_from_hash(hash.as_ref()))
    }

    /// Check a code against a counter with a delay window of 0
    pub fn verify(&self, code: &str, counter: u64) -> bool {
        self.verify_with_window(code, counter, 0)
    }

    /// Check a code against every counter within `delay_window` of `counter`.
    ///
    /// Window offsets that would take the counter below zero are skipped.
    /// Returns false for a code of the wrong length without hashing, and for
    /// a secret that cannot produce codes at all.
    pub fn verify_with_window(&self, code: &str, counter: u64, delay_window: u64) -> bool {
        if code.len() != self.password_length {
            return false;
        }

        tracing::trace!(counter, delay_window, "verifying code within delay window");

        let start = counter.saturating_sub(delay_window);
        let end = counter.saturating_add(delay_window);
        (start..=end).any(|candidate| self.generate(candidate).is_ok_and(|expected| expected == code))
    }

    /// Create an otpauth URI with only an issuer
    pub fn to_uri(&self, counter: u64, issuer: &str) -> String {
        self.to_uri_with_account(counter, issuer, "")
    }

    /// Create an otpauth URI with an issuer and account name.
    ///
    /// An empty account collapses the `:account` suffix in the label.
    pub fn to_uri_with_account(&self, counter: u64, issuer: &str, account: &str) -> String {
        let label = if account.is_empty() {
            urlencoding::encode(issuer).into_owned()
        } else {
            format!("{}:{}", urlencoding::encode(issuer), urlencoding::encode(account))
        };

        let secret = String::from_utf8_lossy(&self.secret);
        let digits = self.password_length.to_string();
        let counter = counter.to_string();
        let query = uri::build_query(&[
            ("secret", secret.as_ref()),
            ("digits", digits.as_str()),
            ("algorithm", self.algorithm.name()),
            ("issuer", issuer),
            ("counter", counter.as_str()),
        ]);

        format!("{URI_SCHEME}://{OTP_TYPE}/{label}?{query}")
    }

    /// RFC 4226 dynamic truncation: the low nibble of the last hash byte
    /// selects a 4-byte window, read big-endian with the sign bit cleared,
    /// then reduced modulo 10^password_length and left-padded with zeros.
    fn code_from_hash(&self, hash: &[u8]) -> String {
        let offset = (hash[hash.len() - 1] & 0x0f) as usize;
        let binary = (u32::from(hash[offset] & 0x7f) << 24)
            | (u32::from(hash[offset + 1]) << 16)
            | (u32::from(hash[offset + 2]) << 8)
            | u32::from(hash[offset + 3]);

        let code = binary % 10u32.pow(self.password_length as u32);
        format!("{code:0width$}", width = self.password_length)
    }
}

fn malformed(uri: &str, source: HotpError) -> HotpError {
    HotpError::MalformedUri {
        uri: uri.to_string(),
        source: Box::new(source),
    }
}

/// Validates and assembles the immutable [`HotpGenerator`] configuration
#[derive(Debug, Clone)]
pub struct Builder {
    secret: Box<[u8]>,
    password_length: usize,
    algorithm: HmacAlgorithm,
}

impl Builder {
    /// Start from a Base32 secret; the secret must not be empty
    pub fn new(secret: &[u8]) -> HotpResult<Self> {
        if secret.is_empty() {
            return Err(HotpError::InvalidArgument("secret must not be empty".to_string()));
        }

        Ok(Self {
            secret: secret.into(),
            password_length: DEFAULT_PASSWORD_LENGTH,
            algorithm: HmacAlgorithm::default(),
        })
    }

    /// Set the number of digits, in range 6..=8
    pub fn password_length(mut self, password_length: usize) -> HotpResult<Self> {
        if !(6..=8).contains(&password_length) {
            return Err(HotpError::InvalidArgument(
                "password length must be between 6 and 8 digits".to_string(),
            ));
        }

        self.password_length = password_length;
        Ok(self)
    }

    /// Set the HMAC algorithm
    pub fn algorithm(mut self, algorithm: HmacAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Finalize the configuration
    pub fn build(self) -> HotpGenerator {
        HotpGenerator {
            secret: self.secret,
            password_length: self.password_length,
            algorithm: self.algorithm,
        }
    }
}
