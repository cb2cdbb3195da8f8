//! Command line front end for [hibp-range](https://crates.io/crates/hibp-range).
//!
//! Asks for a password without echoing it, checks it against the Pwned Passwords
//! range API, and prints how often it appears in known breaches. Only the first
//! five hex characters of the password's SHA1 ever leave the machine.
//!
//! # Usage
//!
//! ```sh
//! hibp-check
//! Password:
//! The password appears 3730471 times in the database.
//! ```
//!
//! Exit status is 0 whenever the check completed (breached or not), 1 when it could
//! not be completed, and 2 for usage errors such as an empty password.

pub mod error;
pub mod prompt;
pub mod report;

pub use error::Error;
pub use prompt::{PROMPT, prompt_password, read_password_line};
pub use report::{Format, render};
