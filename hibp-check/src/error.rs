#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Could not read password: {0}")]
    Prompt(#[source] std::io::Error),

    #[error("Password must not be empty")]
    EmptyPassword,

    #[error("Invalid range API configuration: {0}")]
    Config(#[source] hibp_range::Error),

    #[error("Breach check inconclusive, the password was NOT verified: {0}")]
    Check(#[from] hibp_range::Error),

    #[error("Failed to encode report: {0}")]
    Report(#[from] serde_json::Error),
}

impl Error {
    /// Process exit status for this error. Usage problems share clap's code 2.
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::EmptyPassword | Error::Config(_) => 2,
            Error::Prompt(_) | Error::Check(_) | Error::Report(_) => 1,
        }
    }
}
