use serde::Deserialize;
use session::Role;
use session::Status;

/// Account as the client sees it: the wire shape of the `user` object, which
/// never includes credential material.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub status: Status,
}

/// Result of a successful login call against the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginOutcome {
    pub user: UserProfile,
    pub token: String,
}
