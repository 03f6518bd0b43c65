use hmac::digest::KeyInit;
use hmac::{Hmac, Mac};
use serde::Deserialize;
use sha1::Sha1;
use sha2::{Sha256, Sha512};
use std::fmt;
use std::str::FromStr;

use crate::error::{OtpError, Result};

type HmacSha1 = Hmac<Sha1>;
type HmacSha256 = Hmac<Sha256>;
type HmacSha512 = Hmac<Sha512>;

/// Hash function underlying the HMAC. RFC 4226 fixes SHA-1, RFC 6238 adds the SHA-2 variants.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    #[default]
    Sha1,
    Sha256,
    Sha512,
}

impl HashAlgorithm {
    pub fn as_str(&self) -> &str {
        match self {
            HashAlgorithm::Sha1 => "sha1",
            HashAlgorithm::Sha256 => "sha256",
            HashAlgorithm::Sha512 => "sha512",
        }
    }

    /// Length in bytes of the digest produced by this algorithm.
    pub fn digest_len(&self) -> usize {
        match self {
            HashAlgorithm::Sha1 => 20,
            HashAlgorithm::Sha256 => 32,
            HashAlgorithm::Sha512 => 64,
        }
    }

    /// HMAC(key, message). The key is used as-is, any length is accepted.
    pub fn hmac(&self, key: &[u8], message: &[u8]) -> Result<Vec<u8>> {
        match self {
            HashAlgorithm::Sha1 => make_hmac::<HmacSha1>(key, message),
            HashAlgorithm::Sha256 => make_hmac::<HmacSha256>(key, message),
            HashAlgorithm::Sha512 => make_hmac::<HmacSha512>(key, message),
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HashAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "").as_str() {
            "sha1" => Ok(HashAlgorithm::Sha1),
            "sha256" => Ok(HashAlgorithm::Sha256),
            "sha512" => Ok(HashAlgorithm::Sha512),
            _ => Err(format!(
                "unknown hash algorithm \"{}\", expected sha1, sha256 or sha512",
                s
            )),
        }
    }
}

fn make_hmac<M>(key: &[u8], message: &[u8]) -> Result<Vec<u8>>
where
    M: Mac + KeyInit,
{
    let mut mac = <M as KeyInit>::new_from_slice(key)
        .map_err(|err| OtpError::InvalidSecretEncoding(err.to_string()))?;
    mac.update(message);
    let result = mac.finalize();

    Ok(result.into_bytes().to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_sha1() {
        assert_eq!(HashAlgorithm::default(), HashAlgorithm::Sha1);
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("sha1".parse::<HashAlgorithm>(), Ok(HashAlgorithm::Sha1));
        assert_eq!("SHA256".parse::<HashAlgorithm>(), Ok(HashAlgorithm::Sha256));
        assert_eq!("Sha-512".parse::<HashAlgorithm>(), Ok(HashAlgorithm::Sha512));
        assert!("md5".parse::<HashAlgorithm>().is_err());
    }

    #[test]
    fn digest_length_matches_algorithm() {
        for algorithm in [
            HashAlgorithm::Sha1,
            HashAlgorithm::Sha256,
            HashAlgorithm::Sha512,
        ] {
            let digest = algorithm.hmac(b"key", b"message").unwrap();
            assert_eq!(digest.len(), algorithm.digest_len(), "{}", algorithm);
        }
    }

    #[test]
    fn matches_rfc_2202_sha1_vector() {
        // RFC 2202 test case 2
        let digest = HashAlgorithm::Sha1
            .hmac(b"Jefe", b"what do ya want for nothing?")
            .unwrap();
        let expected: [u8; 20] = [
            0xef, 0xfc, 0xdf, 0x6a, 0xe5, 0xeb, 0x2f, 0xa2, 0xd2, 0x74, 0x16, 0xd5, 0xf1, 0x84,
            0xdf, 0x9c, 0x25, 0x9a, 0x7c, 0x79,
        ];
        assert_eq!(digest, expected);
    }

    #[test]
    fn accepts_keys_of_any_length() {
        assert!(HashAlgorithm::Sha1.hmac(&[], b"message").is_ok());
        assert!(HashAlgorithm::Sha256.hmac(&[0u8; 200], b"message").is_ok());
    }

    #[test]
    fn deserializes_lowercase_names() {
        #[derive(Deserialize)]
        struct Wrapper {
            algorithm: HashAlgorithm,
        }

        let wrapper: Wrapper = toml::from_str("algorithm = \"sha512\"").unwrap();
        assert_eq!(wrapper.algorithm, HashAlgorithm::Sha512);
    }
}
