use std::io;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use hibp_check::{Error, Format, prompt_password, read_password_line, render};
use hibp_range::config::timeout_from_millis;
use hibp_range::{API_URL_ENV, BreachChecker, ClientConfig, DEFAULT_API_BASE_URL, Fingerprint, TIMEOUT_MS_ENV};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "hibp-check", version)]
#[command(about = "Check whether a password appears in the Have I Been Pwned breach database")]
struct Args {
    /// Base URL of the range API; the 5-character hash prefix is appended to it
    #[arg(long, env = API_URL_ENV, default_value = DEFAULT_API_BASE_URL)]
    api_url: String,

    /// Give up on the request after this many milliseconds (0 waits forever)
    #[arg(long, env = TIMEOUT_MS_ENV, default_value_t = 10_000)]
    timeout_ms: u64,

    /// Do not ask the service to pad its response with decoy entries
    #[arg(long)]
    no_padding: bool,

    /// Read the password from the first line of stdin instead of prompting
    #[arg(long)]
    stdin: bool,

    /// Print the password's SHA1 fingerprint and exit without querying the service
    #[arg(long)]
    hash_only: bool,

    /// Output format for the result
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Increase log verbosity (-v, -vv, -vvv). RUST_LOG takes precedence when set
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn verbosity(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    fn client_config(&self) -> ClientConfig {
        ClientConfig::default()
            .with_base_url(self.api_url.as_str())
            .with_timeout(timeout_from_millis(self.timeout_ms))
            .with_padding(!self.no_padding)
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.verbosity()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(args: &Args) -> Result<(), Error> {
    let password = if args.stdin {
        read_password_line(&mut io::stdin().lock())?
    } else {
        prompt_password()?
    };

    let fingerprint = Fingerprint::of(&password);
    drop(password);

    if args.hash_only {
        println!("{fingerprint}");
        return Ok(());
    }

    let config = args.client_config();
    info!(api_url = %config.base_url, timeout = ?config.timeout, padded = config.add_padding, "checking password");

    let checker = BreachChecker::from_config(config).map_err(Error::Config)?;
    let result = checker.check_fingerprint(&fingerprint)?;

    println!("{}", render(result, args.format)?);
    Ok(())
}
