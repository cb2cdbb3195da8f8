/// Boxed source error, so stub transports can report failures without an HTTP client.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("range request failed for prefix {prefix}: {source}")]
    Transport {
        prefix: String,
        #[source]
        source: BoxError,
    },

    #[error("HTTP {status} for prefix {prefix}")]
    Service { prefix: String, status: u16 },

    #[error("invalid HTTP client configuration: {0}")]
    ClientBuild(#[source] reqwest::Error),
}

impl Error {
    pub fn transport(prefix: &str, source: impl Into<BoxError>) -> Self {
        Error::Transport { prefix: prefix.to_string(), source: source.into() }
    }

    /// True when the service could not be reached or timed out.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport { .. })
    }

    /// The HTTP status when the service answered with a non-success code.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Service { status, .. } => Some(*status),
            _ => None,
        }
    }
}
