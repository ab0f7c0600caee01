#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![warn(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![doc = include_str!("../README.md")]

/// Supported HMAC algorithms
pub mod algorithm;

/// Error taxonomy for generation, configuration and URI parsing
pub mod error;

/// HOTP (HMAC-based One-Time Password) generation and verification
pub mod hotp;

/// Secret decoding and random secret generation
pub mod secret;

mod uri;
