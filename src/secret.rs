use data_encoding::{Encoding, Specification};

use crate::error::{OtpError, Result};

const SYMBOLS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const PADDING: char = '=';

/// Decode a base32 (RFC 4648) secret into raw key bytes.
///
/// Decoding is case-insensitive and ignores unused low bits in the final
/// symbol. Padding is optional, but when any `=` is present the input must be
/// padded to a whole 8-character block.
pub fn decode_secret(secret: &str) -> Result<Vec<u8>> {
    let padded = secret.contains(PADDING);
    base32(padded)?
        .decode(secret.as_bytes())
        .map_err(|err| OtpError::InvalidSecretEncoding(err.to_string()))
}

// RFC 4648 alphabet, lowercase translated to uppercase
fn base32(padded: bool) -> Result<Encoding> {
    let mut spec = Specification::new();
    spec.symbols.push_str(SYMBOLS);
    spec.translate.from.push_str(LOWERCASE);
    spec.translate.to.push_str(UPPERCASE);
    spec.check_trailing_bits = false;
    if padded {
        spec.padding = Some(PADDING);
    }

    spec.encoding()
        .map_err(|err| OtpError::InvalidSecretEncoding(err.to_string()))
}

// Validate key provided in arguments is a valid base32 encoding
pub fn is_base32_key(value: &str) -> std::result::Result<(), String> {
    match decode_secret(value) {
        Ok(_) => Ok(()),
        Err(_) => Err(String::from("the key is not a valid base32 encoding")),
    }
}
