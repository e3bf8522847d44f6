pub mod credentials;
pub mod jobs;

pub use credentials::FixtureCredentialStore;
pub use jobs::FixtureJobBoard;
