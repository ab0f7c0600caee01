use thiserror::Error;

/// Result alias for fallible operations in this crate
pub type HotpResult<T> = Result<T, HotpError>;

/// Failures surfaced by configuration, code generation and URI parsing
#[derive(Error, Debug)]
pub enum HotpError {
    /// A caller-supplied value violates a precondition
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The configured secret is not valid Base32
    #[error("secret is not valid base32: {0}")]
    InvalidEncoding(#[from] fast32::DecodeError),

    /// The secret decodes to zero bytes and cannot be used as an HMAC key
    #[error("decoded secret is empty and cannot be used as an HMAC key")]
    InvalidKey,

    /// A provisioning URI could not be parsed into a configuration
    #[error("URI could not be parsed: {uri}")]
    MalformedUri {
        /// The offending URI text
        uri: String,
        /// The underlying failure
        #[source]
        source: Box<HotpError>,
    },
}
