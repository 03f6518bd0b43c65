//! HOTP ([RFC 4226](https://datatracker.ietf.org/doc/html/rfc4226)) and
//! TOTP ([RFC 6238](https://datatracker.ietf.org/doc/html/rfc6238)) code generation.
//!
//! ```
//! use otp::{generate_totp, HashAlgorithm};
//!
//! let code = generate_totp("GEZDGNBVGY3TQOJQGEZDGNBVGY3TQOJQ", 8, 30, HashAlgorithm::Sha1, Some(59));
//! assert_eq!(code.unwrap(), "94287082");
//! ```

pub mod algorithm;
pub mod cmd;
pub mod config;
pub mod error;
pub mod hotp;
pub mod secret;
pub mod totp;
pub mod writer;

#[cfg(test)]
mod tests;

pub use algorithm::HashAlgorithm;
pub use error::{OtpError, Result};
pub use hotp::generate;
pub use totp::{generate_totp, generate_totp_with_clock, Clock, GetTime};
