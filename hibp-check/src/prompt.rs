use std::io::BufRead;

use zeroize::Zeroizing;

use crate::error::Error;

pub const PROMPT: &str = "Password: ";

/// Asks for the password on the terminal without echoing it.
pub fn prompt_password() -> Result<Zeroizing<String>, Error> {
    let password = Zeroizing::new(rpassword::prompt_password(PROMPT).map_err(Error::Prompt)?);
    non_empty(password)
}

/// Reads the password from the first line of `reader`, for piping into the tool.
///
/// Only the line terminator is stripped; other whitespace is part of the password.
pub fn read_password_line<R: BufRead>(reader: &mut R) -> Result<Zeroizing<String>, Error> {
    // Preallocated so typical passwords never trigger a reallocation that leaves copies behind
    let mut line = Zeroizing::new(String::with_capacity(256));
    reader.read_line(&mut line).map_err(Error::Prompt)?;

    let len = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(len);
    non_empty(line)
}

fn non_empty(password: Zeroizing<String>) -> Result<Zeroizing<String>, Error> {
    if password.is_empty() {
        return Err(Error::EmptyPassword);
    }
    Ok(password)
}
