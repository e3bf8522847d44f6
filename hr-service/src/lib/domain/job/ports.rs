use async_trait::async_trait;

use crate::job::errors::JobError;
use crate::job::models::JobPosting;

/// Port for job listing operations.
#[async_trait]
pub trait JobServicePort: Send + Sync + 'static {
    /// Retrieve all postings for the listings page.
    ///
    /// # Errors
    /// * `Unexpected` - Board adapter failure
    async fn list_jobs(&self) -> Result<Vec<JobPosting>, JobError>;
}

/// Read-only source of job postings.
///
/// Fixed at build/deploy time, mirroring the credential store: no mutation
/// operations are exposed.
#[async_trait]
pub trait JobBoard: Send + Sync + 'static {
    /// Retrieve all postings.
    ///
    /// # Errors
    /// * `Unexpected` - Adapter I/O failure
    async fn list(&self) -> Result<Vec<JobPosting>, JobError>;
}
