use reqwest::blocking::Client;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::Error;

/// Fetches the raw body of a range query.
///
/// Implementations receive only the 5-character uppercase hex prefix and must not
/// be handed anything else about the password.
pub trait RangeTransport {
    fn fetch_range(&self, prefix: &str) -> Result<String, Error>;

    /// Whether responses carry zero-count padding entries that must not count as matches.
    fn pads_responses(&self) -> bool {
        false
    }
}

impl<T: RangeTransport + ?Sized> RangeTransport for &T {
    fn fetch_range(&self, prefix: &str) -> Result<String, Error> {
        (**self).fetch_range(prefix)
    }

    fn pads_responses(&self) -> bool {
        (**self).pads_responses()
    }
}

/// Blocking HTTP transport for the Pwned Passwords range API.
pub struct HttpTransport {
    client: Client,
    config: ClientConfig,
}

impl HttpTransport {
    /// Builds the client and rejects a base URL that cannot form a request.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()
            .map_err(Error::ClientBuild)?;

        client.get(config.range_url("00000")).build().map_err(Error::ClientBuild)?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

impl RangeTransport for HttpTransport {
    fn pads_responses(&self) -> bool {
        self.config.add_padding
    }

    fn fetch_range(&self, prefix: &str) -> Result<String, Error> {
        let url = self.config.range_url(prefix);

        let mut request = self.client.get(&url);
        if self.config.add_padding {
            request = request.header("Add-Padding", "true");
        }

        debug!(%url, padded = self.config.add_padding, "requesting range");
        let response = request.send().map_err(|e| Error::transport(prefix, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Service { prefix: prefix.to_string(), status: status.as_u16() });
        }

        response.text().map_err(|e| Error::transport(prefix, e))
    }
}
