use tracing::{debug, trace};

use crate::config::ClientConfig;
use crate::error::Error;
use crate::fingerprint::Fingerprint;
use crate::range::find_suffix;
use crate::transport::{HttpTransport, RangeTransport};

/// Outcome of a breach check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult {
    /// The password was seen this many times in known breaches.
    Match(u64),
    NoMatch,
}

impl MatchResult {
    pub fn is_breached(&self) -> bool {
        matches!(self, MatchResult::Match(_))
    }

    /// Occurrence count, zero for [`MatchResult::NoMatch`].
    pub fn count(&self) -> u64 {
        match self {
            MatchResult::Match(count) => *count,
            MatchResult::NoMatch => 0,
        }
    }
}

/// Checks if a password has been found in known data breaches.
///
/// Each check hashes the password locally, sends only the 5-character hash prefix
/// through the transport, and matches the 35-character suffix against the response.
/// The checker holds no mutable state, so checks can be issued back to back.
pub struct BreachChecker<T = HttpTransport> {
    transport: T,
}

impl BreachChecker<HttpTransport> {
    /// Creates a checker talking to the range API described by `config`.
    pub fn from_config(config: ClientConfig) -> Result<Self, Error> {
        Ok(Self::new(HttpTransport::new(config)?))
    }
}

impl<T: RangeTransport> BreachChecker<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Checks if the given password has been found in a data breach.
    ///
    /// Returns `Ok(Match(count))` if it was found, `Ok(NoMatch)` if it was not, or an
    /// error if the range service could not be queried. A failed query never turns
    /// into `NoMatch`.
    pub fn check(&self, password: &str) -> Result<MatchResult, Error> {
        let fingerprint = Fingerprint::of(password);
        self.check_fingerprint(&fingerprint)
    }

    /// Like [`check`](Self::check), for a password that was already hashed.
    pub fn check_fingerprint(&self, fingerprint: &Fingerprint) -> Result<MatchResult, Error> {
        let (prefix, suffix) = fingerprint.split();
        trace!(prefix, "fingerprinted");

        let body = self.transport.fetch_range(prefix)?;
        debug!(prefix, bytes = body.len(), "range received");

        let result = match find_suffix(&body, suffix, self.transport.pads_responses()) {
            Some(count) => MatchResult::Match(count),
            None => MatchResult::NoMatch,
        };
        debug!(prefix, breached = result.is_breached(), "check decided");

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    /// Serves a canned body and records every prefix it was asked for.
    struct StubTransport {
        body: &'static str,
        padded: bool,
        requests: RefCell<Vec<String>>,
    }

    impl StubTransport {
        fn new(body: &'static str) -> Self {
            Self { body, padded: false, requests: RefCell::new(Vec::new()) }
        }

        fn padded(body: &'static str) -> Self {
            Self { padded: true, ..Self::new(body) }
        }
    }

    impl RangeTransport for StubTransport {
        fn fetch_range(&self, prefix: &str) -> Result<String, Error> {
            self.requests.borrow_mut().push(prefix.to_string());
            Ok(self.body.to_string())
        }

        fn pads_responses(&self) -> bool {
            self.padded
        }
    }

    struct FailingTransport(Option<u16>);

    impl RangeTransport for FailingTransport {
        fn fetch_range(&self, prefix: &str) -> Result<String, Error> {
            match self.0 {
                Some(status) => Err(Error::Service { prefix: prefix.to_string(), status }),
                None => Err(Error::transport(prefix, "connection refused")),
            }
        }
    }

    // password -> SHA1: 5BAA61E4C9B93F3F0682250B6CF8331B7EE68FD8
    const PASSWORD_RANGE: &str = "1D2DA4053E34E76F6576ED1DA63134B5E2A:2\r\n\
                                  1D72CD07550416C216D8AD296BF5C0AE8E0:10\r\n\
                                  1E2AAA439972480CEC7F16C795BBB429372:1\r\n\
                                  1E3687A61BFCE35F69B7408158101C8E414:1\r\n\
                                  1E4C9B93F3F0682250B6CF8331B7EE68FD8:3730471\r\n\
                                  1F2B668E8AABEF1C59E9EC6F82E3F3CD786:1\r\n";

    #[test]
    fn test_end_to_end_password() {
        let transport = StubTransport::new(PASSWORD_RANGE);
        let checker = BreachChecker::new(&transport);

        assert_eq!(checker.check("password").unwrap(), MatchResult::Match(3730471));
        assert_eq!(*transport.requests.borrow(), vec!["5BAA6".to_string()]);
    }

    #[test]
    fn test_match_count() {
        let transport = StubTransport::new("1E4C9B93F3F0682250B6CF8331B7EE68FD8:42\r\n");
        let checker = BreachChecker::new(transport);

        let result = checker.check("password").unwrap();
        assert_eq!(result, MatchResult::Match(42));
        assert!(result.is_breached());
        assert_eq!(result.count(), 42);
    }

    #[test]
    fn test_no_match() {
        let transport = StubTransport::new(PASSWORD_RANGE);
        let checker = BreachChecker::new(&transport);

        // hAwT?}cuC:r#kW5 hashes to a different prefix, so the canned body has no match
        let result = checker.check("hAwT?}cuC:r#kW5").unwrap();
        assert_eq!(result, MatchResult::NoMatch);
        assert!(!result.is_breached());
        assert_eq!(result.count(), 0);
    }

    #[test]
    fn test_malformed_line_does_not_mask_match() {
        let transport = StubTransport::new(
            "1D2DA4053E34E76F6576ED1DA63134B5E2A\r\n\
             1E4C9B93F3F0682250B6CF8331B7EE68FD8:17\r\n",
        );
        let checker = BreachChecker::new(transport);
        assert_eq!(checker.check("password").unwrap(), MatchResult::Match(17));
    }

    #[test]
    fn test_lowercase_response_matches() {
        let transport = StubTransport::new("1e4c9b93f3f0682250b6cf8331b7ee68fd8:5\n");
        let checker = BreachChecker::new(transport);
        assert_eq!(checker.check("password").unwrap(), MatchResult::Match(5));
    }

    #[test]
    fn test_only_prefix_is_sent() {
        let transport = StubTransport::new("");
        let checker = BreachChecker::new(&transport);

        for password in ["password", "password123", "hAwT?}cuC:r#kW5"] {
            checker.check(password).unwrap();
        }

        let requests = transport.requests.borrow();
        assert_eq!(requests.len(), 3);
        for (request, password) in requests.iter().zip(["password", "password123", "hAwT?}cuC:r#kW5"]) {
            assert_eq!(request.len(), crate::PREFIX_LEN);
            assert_eq!(request, Fingerprint::of(password).prefix());
            assert!(!request.contains(password));
        }
    }

    #[test]
    fn test_zero_count_is_a_match_when_unpadded() {
        let checker = BreachChecker::new(StubTransport::new("1E4C9B93F3F0682250B6CF8331B7EE68FD8:0\r\n"));
        assert_eq!(checker.check("password").unwrap(), MatchResult::Match(0));
    }

    #[test]
    fn test_zero_count_is_padding_when_padded() {
        let checker = BreachChecker::new(StubTransport::padded(
            "1E4C9B93F3F0682250B6CF8331B7EE68FD8:0\r\n\
             1D2DA4053E34E76F6576ED1DA63134B5E2A:0\r\n",
        ));
        assert_eq!(checker.check("password").unwrap(), MatchResult::NoMatch);

        // A padded response still reports real entries
        let checker = BreachChecker::new(StubTransport::padded(PASSWORD_RANGE));
        assert_eq!(checker.check("password").unwrap(), MatchResult::Match(3730471));
    }

    #[test]
    fn test_check_fingerprint() {
        let transport = StubTransport::new(PASSWORD_RANGE);
        let checker = BreachChecker::new(transport);

        let fingerprint: Fingerprint = "5baa61e4c9b93f3f0682250b6cf8331b7ee68fd8".parse().unwrap();
        assert_eq!(checker.check_fingerprint(&fingerprint).unwrap(), MatchResult::Match(3730471));
    }

    #[test]
    fn test_transport_error_is_not_no_match() {
        let checker = BreachChecker::new(FailingTransport(None));
        let err = checker.check("password").unwrap_err();
        assert!(err.is_transport());
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_service_error_keeps_status() {
        let checker = BreachChecker::new(FailingTransport(Some(429)));
        let err = checker.check("password").unwrap_err();
        assert!(!err.is_transport());
        assert_eq!(err.status(), Some(429));
        assert_eq!(err.to_string(), "HTTP 429 for prefix 5BAA6");
    }
}
