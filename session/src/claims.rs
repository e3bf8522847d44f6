use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

/// Role held by an account.
///
/// Closed enumeration; serialized lowercase on the wire and inside tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Recruiter,
    Employee,
    Candidate,
}

impl Role {
    /// Get role as its lowercase wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Recruiter => "recruiter",
            Role::Employee => "employee",
            Role::Candidate => "candidate",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "recruiter" => Ok(Role::Recruiter),
            "employee" => Ok(Role::Employee),
            "candidate" => Ok(Role::Candidate),
            other => Err(UnknownVariant(other.to_string())),
        }
    }
}

/// Account status.
///
/// Informational only: neither issuance nor resolution gates on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Active,
    Suspended,
}

impl Status {
    /// Get status as its lowercase wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Active => "active",
            Status::Suspended => "suspended",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for parsing a closed enumeration from a wire string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown variant: {0}")]
pub struct UnknownVariant(pub String);

/// Identity claims carried inside an issued session token.
///
/// Copied from the matched account record at issuance time. Carries no
/// issuance timestamp, no expiry and no signature: the resolver treats the
/// claims purely as a lookup key and re-fetches the current record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Opaque account identifier
    pub id: String,

    /// Lookup key used by the resolver
    pub email: String,

    /// Role at issuance time (informational; the resolved record wins)
    pub role: Role,
}

impl SessionClaims {
    /// Create claims for an authenticated account.
    ///
    /// # Arguments
    /// * `id` - Opaque account identifier
    /// * `email` - Account email (resolver lookup key)
    /// * `role` - Role at issuance time
    pub fn new(id: impl Into<String>, email: impl Into<String>, role: Role) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_claims() {
        let claims = SessionClaims::new("1", "admin@company.com", Role::Admin);
        assert_eq!(claims.id, "1");
        assert_eq!(claims.email, "admin@company.com");
        assert_eq!(claims.role, Role::Admin);
    }

    #[test]
    fn test_role_serializes_lowercase() {
        let json = serde_json::to_string(&Role::Recruiter).unwrap();
        assert_eq!(json, "\"recruiter\"");

        let role: Role = serde_json::from_str("\"candidate\"").unwrap();
        assert_eq!(role, Role::Candidate);
    }

    #[test]
    fn test_role_from_str() {
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
        assert!("manager".parse::<Role>().is_err());
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&Status::Suspended).unwrap();
        assert_eq!(json, "\"suspended\"");
    }

    #[test]
    fn test_claims_wire_shape() {
        let claims = SessionClaims::new("1", "admin@company.com", Role::Admin);
        let value = serde_json::to_value(&claims).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "id": "1",
                "email": "admin@company.com",
                "role": "admin",
            })
        );
    }
}
