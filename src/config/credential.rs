//! Access token handling
//!
//! The token is read from the environment once, at startup, and then moved
//! into the session. It never shows up in `Debug` or `Display` output.

use super::validation::{self, ValidationError};
use anyhow::Result;
use std::env::VarError;

/// Secret used as the password half of HTTP Basic credentials
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wrap a token read from `var`, applying the length sanity check
    pub fn new(var: &str, token: String) -> Result<Self, ValidationError> {
        validation::validate_token(var, &token)?;
        Ok(Self(token))
    }

    /// Read and validate the token from the environment variable `var`
    pub fn from_env(var: &str) -> Result<Self> {
        let token = match std::env::var(var) {
            Ok(token) => token,
            Err(VarError::NotPresent) => String::new(),
            Err(VarError::NotUnicode(_)) => {
                return Err(ValidationError::TokenNotUnicode(var.to_string()).into());
            }
        };
        Ok(Self::new(var, token)?)
    }

    /// The raw token, for handing to the transport layer only
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Credential(***)")
    }
}

impl std::fmt::Display for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("***")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const TEST_VAR: &str = "GITPLOY_TEST_CREDENTIAL";

    fn with_env<T>(value: Option<&str>, f: impl FnOnce() -> T) -> T {
        let original = std::env::var(TEST_VAR).ok();
        unsafe {
            match value {
                Some(v) => std::env::set_var(TEST_VAR, v),
                None => std::env::remove_var(TEST_VAR),
            }
        }

        let result = f();

        unsafe {
            match original {
                Some(v) => std::env::set_var(TEST_VAR, v),
                None => std::env::remove_var(TEST_VAR),
            }
        }
        result
    }

    #[test]
    fn test_credential_is_redacted() {
        let credential = Credential::new("VAR", "ghp_abcdefghijklmnopqrstuvwxyz".to_string()).unwrap();

        assert_eq!(format!("{credential:?}"), "Credential(***)");
        assert_eq!(credential.to_string(), "***");
        assert_eq!(credential.expose(), "ghp_abcdefghijklmnopqrstuvwxyz");
    }

    #[test]
    fn test_credential_rejects_short_token() {
        let result = Credential::new("VAR", "short".to_string());
        assert!(matches!(
            result,
            Err(ValidationError::TokenTooShort { actual: 5, .. })
        ));
    }

    #[test]
    #[serial]
    fn test_credential_from_env() {
        let result = with_env(Some("0123456789abcdefghij"), || Credential::from_env(TEST_VAR));
        assert_eq!(result.unwrap().expose(), "0123456789abcdefghij");
    }

    #[test]
    #[serial]
    fn test_credential_from_env_missing() {
        let result = with_env(None, || Credential::from_env(TEST_VAR));
        let error = result.unwrap_err().to_string();
        assert!(error.contains("not found"));
        assert!(error.contains(TEST_VAR));
    }

    #[cfg(unix)]
    #[test]
    #[serial]
    fn test_credential_from_env_not_unicode() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let original = std::env::var_os(TEST_VAR);
        unsafe {
            std::env::set_var(TEST_VAR, OsStr::from_bytes(b"ghp_\xff\xfe0123456789abcdef"));
        }

        let result = Credential::from_env(TEST_VAR);

        unsafe {
            match original {
                Some(v) => std::env::set_var(TEST_VAR, v),
                None => std::env::remove_var(TEST_VAR),
            }
        }

        let error = result.unwrap_err().to_string();
        assert!(error.contains("not valid UTF-8"), "unexpected error: {error}");
        assert!(!error.contains("not found"));
    }

    #[test]
    #[serial]
    fn test_credential_from_env_too_short() {
        let result = with_env(Some("tooshort"), || Credential::from_env(TEST_VAR));
        assert!(result.unwrap_err().to_string().contains("too short"));
    }
}
