use crate::algorithm::HashAlgorithm;
use crate::error::{OtpError, Result};
use crate::secret::decode_secret;

// HOTP https://datatracker.ietf.org/doc/html/rfc4226

/// Largest supported code length. The truncated value is capped at 31 bits,
/// so anything past 10 digits would only ever be left-padding.
pub const MAX_DIGITS: u32 = 10;

/// Shortest digest dynamic truncation can read from (HMAC-SHA-1).
pub const MIN_DIGEST_LEN: usize = 20;

/// Generate an HOTP code of `digits` characters for a base32 `secret` and `counter`.
///
/// ```
/// use otp::{hotp, HashAlgorithm};
///
/// let code = hotp::generate("GEZDGNBVGY3TQOJQGEZDGNBVGY3TQOJQ", 1, 6, HashAlgorithm::Sha1);
/// assert_eq!(code.unwrap(), "287082");
/// ```
pub fn generate(
    secret: &str,
    counter: u64,
    digits: u32,
    algorithm: HashAlgorithm,
) -> Result<String> {
    let digits = validate_digits(digits)?;
    let key = decode_secret(secret)?;
    let hmac = algorithm.hmac(&key, &counter.to_be_bytes())?;
    debug_assert_eq!(hmac.len(), algorithm.digest_len());

    Ok(render(truncate(&hmac, digits), digits))
}

pub fn validate_digits(digits: u32) -> Result<u32> {
    match digits {
        1..=MAX_DIGITS => Ok(digits),
        _ => Err(OtpError::InvalidDigitCount(digits)),
    }
}

/// Narrow any integer moving factor to a counter, refusing to wrap or truncate.
pub fn checked_counter<T>(value: T) -> Result<u64>
where
    T: TryInto<u64>,
{
    value.try_into().map_err(|_| OtpError::CounterOutOfRange)
}

// reduce to 4 byte string
// then s to num mod 10^Digit
fn truncate(hmac: &[u8], digits: u32) -> u64 {
    let base_code = dynamic_truncation(hmac) as u64;

    base_code % u64::pow(10, digits)
}

fn render(code: u64, digits: u32) -> String {
    format!("{:0>width$}", code, width = digits as usize)
}

/// Dynamic truncation of an HMAC digest of at least 20 bytes to a 31-bit value.
///
/// # Panics
///
/// Panics if `hmac` is shorter than [`MIN_DIGEST_LEN`].
//
// DT(String) // String = String[0]...String[n-1]
// Let OffsetBits be the low-order 4 bits of String[n-1]
// Offset = StToNum(OffsetBits) // 0 <= OffSet <= 15
// Let P = String[OffSet]...String[OffSet+3]
// Return the Last 31 bits of P
pub fn dynamic_truncation(hmac: &[u8]) -> u32 {
    assert!(
        hmac.len() >= MIN_DIGEST_LEN,
        "digest of {} bytes is too short to truncate",
        hmac.len()
    );
    let offset = (hmac[hmac.len() - 1] & 0xf) as usize;
    (hmac[offset] as u32 & 0x7f) << 24
        | (hmac[offset + 1] as u32 & 0xff) << 16
        | (hmac[offset + 2] as u32 & 0xff) << 8
        | (hmac[offset + 3] as u32 & 0xff)
}
