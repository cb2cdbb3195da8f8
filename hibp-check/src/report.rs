use hibp_range::MatchResult;
use serde::Serialize;

use crate::error::Error;

/// How the result is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    /// A sentence for humans
    Text,
    /// `{"breached": bool, "count": N}`
    Json,
}

#[derive(Debug, Serialize)]
struct JsonReport {
    breached: bool,
    count: u64,
}

/// Renders a completed check. Failed checks are reported through [`Error`] instead,
/// so a transport failure can never be printed as "no breaches".
pub fn render(result: MatchResult, format: Format) -> Result<String, Error> {
    match format {
        Format::Text => Ok(match result {
            MatchResult::Match(count) => {
                format!("The password appears {count} times in the database.")
            }
            MatchResult::NoMatch => "No breaches found for your password.".to_string(),
        }),
        Format::Json => Ok(serde_json::to_string(&JsonReport {
            breached: result.is_breached(),
            count: result.count(),
        })?),
    }
}
