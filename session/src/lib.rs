//! Session token library
//!
//! Shared identity vocabulary for the HRMS services and clients:
//! - Role and account status enumerations
//! - Session claims carried inside issued tokens
//! - The reversible token codec (base64-encoded JSON)
//!
//! The token produced here is deliberately NOT a security boundary: it is a
//! stable, reversible encoding of the identity claims, trusted only as a
//! lookup key by the resolver, which re-fetches the authoritative record.
//!
//! # Examples
//!
//! ```
//! use session::{Role, SessionClaims, TokenCodec};
//!
//! let codec = TokenCodec::new();
//! let claims = SessionClaims::new("1", "admin@company.com", Role::Admin);
//! let token = codec.encode(&claims).unwrap();
//! let decoded: SessionClaims = codec.decode(&token).unwrap();
//! assert_eq!(decoded, claims);
//! ```

pub mod claims;
pub mod codec;
pub mod errors;

// Re-export commonly used items
pub use claims::Role;
pub use claims::SessionClaims;
pub use claims::Status;
pub use codec::TokenCodec;
pub use errors::TokenError;
