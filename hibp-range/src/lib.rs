//! Breached password checker using the Have I Been Pwned range API.
//!
//! The password never leaves the process. It is hashed locally with SHA-1, and only
//! the first five hex characters of that hash are sent to the range endpoint
//! (`GET https://api.pwnedpasswords.com/range/{PREFIX}`). The service answers with
//! every known hash suffix sharing that prefix, and the match is decided locally.
//! Since each prefix is shared by hundreds of breached hashes, the service cannot
//! tell which password was checked (k-anonymity).
//!
//! # Example
//!
//! ```no_run
//! use hibp_range::{BreachChecker, ClientConfig, MatchResult};
//!
//! fn main() -> Result<(), hibp_range::Error> {
//!     let checker = BreachChecker::from_config(ClientConfig::default())?;
//!     match checker.check("password123")? {
//!         MatchResult::Match(count) => println!("seen {count} times"),
//!         MatchResult::NoMatch => println!("not found"),
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Testing without a network
//!
//! [`BreachChecker`] is generic over [`RangeTransport`], so a stub returning a canned
//! response body can stand in for [`HttpTransport`].

pub mod checker;
pub mod config;
pub mod error;
pub mod fingerprint;
pub mod range;
pub mod transport;

pub use checker::{BreachChecker, MatchResult};
pub use config::{API_URL_ENV, ClientConfig, DEFAULT_API_BASE_URL, DEFAULT_TIMEOUT, TIMEOUT_MS_ENV};
pub use error::Error;
pub use fingerprint::{Fingerprint, InvalidFingerprint};
pub use range::{LineError, RangeEntry, find_suffix, parse_line};
pub use transport::{HttpTransport, RangeTransport};

/// The length of a raw SHA1 digest in bytes.
pub const DIGEST_LEN: usize = 20;

/// The length of a fingerprint rendered as hex (40 characters).
pub const FINGERPRINT_LEN: usize = DIGEST_LEN * 2;

/// The length of the hash prefix sent to the range API (5 hex characters).
pub const PREFIX_LEN: usize = 5;

/// The length of the hash suffix matched locally (35 hex characters).
pub const SUFFIX_LEN: usize = FINGERPRINT_LEN - PREFIX_LEN;

/// Hex lookup table for fingerprint rendering.
pub const HEX_CHARS: &[u8; 16] = b"0123456789ABCDEF";
