use fast32::base32;
use rand::Rng;

use crate::error::HotpResult;

/// Length in bytes of generated secrets (160 bits, RFC 4226 recommendation)
pub const DEFAULT_SECRET_LENGTH: usize = 20;

/// Generate a random secret of [`DEFAULT_SECRET_LENGTH`] bytes as Base32 text
pub fn generate() -> String {
    generate_with_length(DEFAULT_SECRET_LENGTH)
}

/// Generate a random secret of `length` bytes as Base32 text
pub fn generate_with_length(length: usize) -> String {
    let mut bytes = vec![0u8; length];
    rand::rng().fill(&mut bytes[..]);
    base32::RFC4648_NOPAD.encode(&bytes)
}

/// Decode a Base32 secret into raw key bytes. Trailing `=` padding is
/// tolerated; anything else outside the Base32 alphabet is an error.
pub(crate) fn decode(secret: &[u8]) -> HotpResult<Vec<u8>> {
    let mut unpadded = secret;
    while let [rest @ .., b'='] = unpadded {
        unpadded = rest;
    }
    Ok(base32::RFC4648_NOPAD.decode(unpadded)?)
}
