//! Secure credential handling using the secrecy crate
//!
//! The database password read from the credential store is wrapped in a
//! [`SecretString`] as soon as it is read. The wrapper zeros its memory on drop,
//! redacts itself in `Debug` output, and must be opened explicitly with
//! `expose_secret()`.
//!
//! # Example
//!
//! ```rust
//! use unit_export::config::secret_string;
//! use secrecy::ExposeSecret;
//!
//! let password = secret_string("my-password".to_string());
//! assert_eq!(password.expose_secret().as_ref(), "my-password");
//! println!("{:?}", password); // Prints: Secret([REDACTED ...])
//! ```

use secrecy::{DebugSecret, Secret};
use zeroize::Zeroize;

/// Newtype wrapper for String that implements the required traits for Secret
#[derive(Clone, Zeroize)]
#[zeroize(drop)]
pub struct SecretValue(String);

impl DebugSecret for SecretValue {}

impl From<String> for SecretValue {
    fn from(s: String) -> Self {
        SecretValue(s)
    }
}

impl AsRef<str> for SecretValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Type alias for a secret string
pub type SecretString = Secret<SecretValue>;

/// Wrap a plain string read from a credential store
#[inline]
pub fn secret_string(value: String) -> SecretString {
    Secret::new(SecretValue::from(value))
}
