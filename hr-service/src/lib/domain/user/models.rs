use std::fmt;
use std::str::FromStr;

use session::Role;
use session::Status;

use crate::user::errors::EmailError;

/// Account record held by the credential store.
///
/// The `secret` field is plaintext credential material. It exists only inside
/// the store and the issuer; it never crosses the HTTP boundary.
#[derive(Debug, Clone)]
pub struct UserRecord {
    pub id: String,
    pub email: EmailAddress,
    pub name: String,
    pub role: Role,
    pub status: Status,
    pub secret: String,
}

impl UserRecord {
    /// Construct a record for a fixture data set.
    ///
    /// # Errors
    /// * `InvalidFormat` - `email` does not conform to RFC 5322
    pub fn new(
        id: impl Into<String>,
        email: &str,
        name: impl Into<String>,
        role: Role,
        status: Status,
        secret: impl Into<String>,
    ) -> Result<Self, EmailError> {
        Ok(Self {
            id: id.into(),
            email: EmailAddress::new(email.to_string())?,
            name: name.into(),
            role,
            status,
            secret: secret.into(),
        })
    }
}

/// Email address type
///
/// Validates email format using RFC 5322 compliant parser. Unique lookup key
/// into the credential store.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Create a new validated email address.
    ///
    /// # Arguments
    /// * `email` - Raw email string
    ///
    /// # Returns
    /// Validated EmailAddress value object
    ///
    /// # Errors
    /// * `InvalidFormat` - Email does not conform to RFC 5322
    pub fn new(email: String) -> Result<Self, EmailError> {
        email_address::EmailAddress::from_str(&email)
            .map(|_| EmailAddress(email))
            .map_err(|e| EmailError::InvalidFormat(e.to_string()))
    }

    /// Get email as string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Result of a successful issuance: the matched record plus the encoded token.
///
/// The record still carries its secret here; stripping happens at the wire
/// boundary when the record is mapped to a response body.
#[derive(Debug, Clone)]
pub struct IssuedSession {
    pub user: UserRecord,
    pub token: String,
}
