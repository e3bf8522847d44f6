use std::collections::HashMap;

use async_trait::async_trait;
use session::Role;
use session::Status;

use crate::user::errors::AuthError;
use crate::user::models::UserRecord;
use crate::user::ports::CredentialStore;

/// In-memory credential store seeded with the fixed HRMS account table.
///
/// Immutable after construction: the map is built once and only read
/// afterwards, so lookups need no locking.
pub struct FixtureCredentialStore {
    by_email: HashMap<String, UserRecord>,
}

impl FixtureCredentialStore {
    /// Build a store from an explicit record set.
    ///
    /// Last record wins on duplicate emails, preserving the email-uniqueness
    /// invariant of the table.
    pub fn new(records: Vec<UserRecord>) -> Self {
        let by_email = records
            .into_iter()
            .map(|record| (record.email.as_str().to_string(), record))
            .collect();

        Self { by_email }
    }

    /// Build the store with the standard demo accounts.
    ///
    /// Every account uses the password `password123`. One record is
    /// suspended; suspension is informational and does not gate login.
    pub fn seeded() -> Self {
        let records = vec![
            UserRecord::new(
                "1",
                "admin@company.com",
                "Admin User",
                Role::Admin,
                Status::Active,
                "password123",
            ),
            UserRecord::new(
                "2",
                "recruiter@company.com",
                "Sarah Mitchell",
                Role::Recruiter,
                Status::Active,
                "password123",
            ),
            UserRecord::new(
                "3",
                "employee@company.com",
                "James Carter",
                Role::Employee,
                Status::Active,
                "password123",
            ),
            UserRecord::new(
                "4",
                "candidate@company.com",
                "Priya Nair",
                Role::Candidate,
                Status::Active,
                "password123",
            ),
            UserRecord::new(
                "5",
                "former@company.com",
                "Daniel Brooks",
                Role::Employee,
                Status::Suspended,
                "password123",
            ),
        ];

        let records: Result<Vec<_>, _> = records.into_iter().collect();
        Self::new(records.expect("seed emails are valid"))
    }
}

#[async_trait]
impl CredentialStore for FixtureCredentialStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, AuthError> {
        Ok(self.by_email.get(email).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seeded_store_finds_admin() {
        let store = FixtureCredentialStore::seeded();

        let record = store
            .find_by_email("admin@company.com")
            .await
            .unwrap()
            .expect("admin fixture missing");

        assert_eq!(record.id, "1");
        assert_eq!(record.role, Role::Admin);
        assert_eq!(record.secret, "password123");
    }

    #[tokio::test]
    async fn test_absence_is_not_an_error() {
        let store = FixtureCredentialStore::seeded();

        let record = store.find_by_email("nobody@company.com").await.unwrap();
        assert!(record.is_none());
    }

    #[tokio::test]
    async fn test_seed_contains_a_suspended_account() {
        let store = FixtureCredentialStore::seeded();

        let record = store
            .find_by_email("former@company.com")
            .await
            .unwrap()
            .expect("suspended fixture missing");

        assert_eq!(record.status, Status::Suspended);
    }
}
