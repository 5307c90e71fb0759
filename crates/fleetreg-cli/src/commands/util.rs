//! Shared helpers for command handlers.

use secrecy::SecretString;

use crate::error::CliError;

/// Prompt for confirmation, auto-approving if `--yes` was passed.
pub fn confirm(message: &str, yes_flag: bool) -> Result<bool, CliError> {
    if yes_flag {
        return Ok(true);
    }
    let confirmed = dialoguer::Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
    Ok(confirmed)
}

/// Resolve a password from a `--password` flag, prompting when absent.
pub fn resolve_password(flag: Option<String>) -> Result<SecretString, CliError> {
    match flag {
        Some(pw) => Ok(SecretString::from(pw)),
        None => {
            let pw = rpassword::prompt_password("Password: ")?;
            Ok(SecretString::from(pw))
        }
    }
}
