use std::fmt;
use std::str::FromStr;

use sha1::{Digest, Sha1};

use crate::{DIGEST_LEN, FINGERPRINT_LEN, HEX_CHARS, PREFIX_LEN};

/// Uppercase hex SHA1 of a password.
///
/// `Debug` only shows the prefix, which is the part that gets sent over the wire
/// anyway. Use `Display` or [`Fingerprint::as_str`] when the full value is wanted.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Fingerprint {
    hex: [u8; FINGERPRINT_LEN],
}

/// Returned when parsing a string that is not 40 hex characters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected 40 hex characters, got {len} characters")]
pub struct InvalidFingerprint {
    len: usize,
}

impl Fingerprint {
    /// Hashes the UTF-8 bytes of `password`.
    pub fn of(password: &str) -> Self {
        let mut hasher = Sha1::new();
        hasher.update(password.as_bytes());
        let hash: [u8; DIGEST_LEN] = hasher.finalize().into();
        Self::from_digest(&hash)
    }

    /// Renders a raw SHA1 digest as uppercase hex.
    pub fn from_digest(hash: &[u8; DIGEST_LEN]) -> Self {
        let mut hex = [0u8; FINGERPRINT_LEN];
        for (i, byte) in hash.iter().enumerate() {
            hex[i * 2] = HEX_CHARS[(byte >> 4) as usize];
            hex[i * 2 + 1] = HEX_CHARS[(byte & 0x0f) as usize];
        }
        Self { hex }
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        // SAFETY: hex only ever holds bytes from HEX_CHARS or validated ASCII hex digits
        unsafe { std::str::from_utf8_unchecked(&self.hex) }
    }

    /// The first 5 hex characters, used as the range query key.
    #[inline]
    pub fn prefix(&self) -> &str {
        &self.as_str()[..PREFIX_LEN]
    }

    /// The remaining 35 hex characters, matched locally against the range response.
    #[inline]
    pub fn suffix(&self) -> &str {
        &self.as_str()[PREFIX_LEN..]
    }

    #[inline]
    pub fn split(&self) -> (&str, &str) {
        self.as_str().split_at(PREFIX_LEN)
    }
}

impl FromStr for Fingerprint {
    type Err = InvalidFingerprint;

    /// Accepts 40 hex characters in either case and normalizes them to uppercase.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != FINGERPRINT_LEN || !bytes.iter().all(u8::is_ascii_hexdigit) {
            return Err(InvalidFingerprint { len: s.chars().count() });
        }

        let mut hex = [0u8; FINGERPRINT_LEN];
        for (out, b) in hex.iter_mut().zip(bytes) {
            *out = b.to_ascii_uppercase();
        }
        Ok(Self { hex })
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fingerprint({}...)", self.prefix())
    }
}

#[cfg(test)]
mod tests {
    use hex_literal::hex;

    use super::*;

    #[test]
    fn test_fingerprint_of_password() {
        let fingerprint = Fingerprint::of("password");
        assert_eq!(fingerprint.as_str(), "5BAA61E4C9B93F3F0682250B6CF8331B7EE68FD8");
        assert_eq!(fingerprint.prefix(), "5BAA6");
        assert_eq!(fingerprint.suffix(), "1E4C9B93F3F0682250B6CF8331B7EE68FD8");
    }

    #[test]
    fn test_fingerprint_is_deterministic() {
        for password in ["", "password", "hAwT?}cuC:r#kW5", "pässwörd", "🔑🔑🔑"] {
            assert_eq!(Fingerprint::of(password), Fingerprint::of(password));
        }
        assert_ne!(Fingerprint::of("password"), Fingerprint::of("Password"));
    }

    #[test]
    fn test_prefix_suffix_partition() {
        for password in ["", "a", "password123", "correct horse battery staple"] {
            let fingerprint = Fingerprint::of(password);
            let (prefix, suffix) = fingerprint.split();

            assert_eq!(prefix.len(), PREFIX_LEN);
            assert_eq!(format!("{prefix}{suffix}"), fingerprint.as_str());
            assert_eq!(prefix, fingerprint.prefix());
            assert_eq!(suffix, fingerprint.suffix());
        }
    }

    #[test]
    fn test_fingerprint_is_uppercase_hex() {
        let fingerprint = Fingerprint::of("password123");
        assert!(
            fingerprint
                .as_str()
                .bytes()
                .all(|b| b.is_ascii_digit() || (b'A'..=b'F').contains(&b))
        );
    }

    #[test]
    fn test_from_digest() {
        let fingerprint = Fingerprint::from_digest(&hex!("cbfdac6008f9cab4083784cbd1874f76618d2a97"));
        assert_eq!(fingerprint, Fingerprint::of("password123"));
    }

    #[test]
    fn test_parse_normalizes_case() {
        let parsed: Fingerprint = "5baa61e4c9b93f3f0682250b6cf8331b7ee68fd8".parse().unwrap();
        assert_eq!(parsed, Fingerprint::of("password"));
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(
            "5BAA6".parse::<Fingerprint>(),
            Err(InvalidFingerprint { len: 5 })
        );
        assert!("ZBAA61E4C9B93F3F0682250B6CF8331B7EE68FD8".parse::<Fingerprint>().is_err());
        assert!("".parse::<Fingerprint>().is_err());
    }

    #[test]
    fn test_debug_hides_suffix() {
        let fingerprint = Fingerprint::of("password");
        let debug = format!("{fingerprint:?}");
        assert_eq!(debug, "Fingerprint(5BAA6...)");
        assert!(!debug.contains(fingerprint.suffix()));
    }
}
