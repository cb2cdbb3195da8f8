//! Parsing of range API response bodies.
//!
//! A body is a list of `SUFFIX:COUNT` lines separated by CRLF, for example:
//!
//! ```text
//! 1E4C9B93F3F0682250B6CF8331B7EE68FD8:3730471
//! 1E4E9F1F56B2F5C8A7F3B7A5EAE5C7D9F21:0
//! ```
//!
//! When padding is requested the service mixes in random suffixes with a count of
//! zero. Those are skipped only for padded responses; otherwise an entry is reported
//! with whatever count it carries.

use tracing::{trace, warn};

use crate::SUFFIX_LEN;

/// One `SUFFIX:COUNT` line of a range response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeEntry<'a> {
    pub suffix: &'a str,
    pub count: u64,
}

impl RangeEntry<'_> {
    /// Padding entries carry a count of zero.
    #[inline]
    pub fn is_padding(&self) -> bool {
        self.count == 0
    }
}

/// Why a single response line was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LineError {
    #[error("missing ':' separator")]
    MissingSeparator,

    #[error("suffix is not 35 hex characters")]
    InvalidSuffix,

    #[error("count is not a decimal integer")]
    InvalidCount,
}

/// Parses one response line. Surrounding whitespace, including a trailing `\r`, is ignored.
pub fn parse_line(line: &str) -> Result<RangeEntry<'_>, LineError> {
    let (suffix, count) = line.trim().split_once(':').ok_or(LineError::MissingSeparator)?;

    let suffix = suffix.trim_end();
    if suffix.len() != SUFFIX_LEN || !suffix.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(LineError::InvalidSuffix);
    }

    let count = count.trim_start().parse::<u64>().map_err(|_| LineError::InvalidCount)?;

    Ok(RangeEntry { suffix, count })
}

/// Scans a range response body for `suffix` and returns its count.
///
/// Suffixes are compared ignoring ASCII case. Malformed lines are logged by line
/// number and skipped so one bad entry cannot hide a valid match further down.
/// With `skip_padding`, zero-count entries are treated as decoys.
pub fn find_suffix(body: &str, suffix: &str, skip_padding: bool) -> Option<u64> {
    for (idx, line) in body.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        match parse_line(line) {
            Ok(entry) if entry.suffix.eq_ignore_ascii_case(suffix) => {
                if skip_padding && entry.is_padding() {
                    trace!(line = idx + 1, "matched a padding entry, ignoring");
                    continue;
                }
                return Some(entry.count);
            }
            Ok(_) => {}
            Err(error) => warn!(line = idx + 1, %error, "skipping malformed range line"),
        }
    }

    None
}
