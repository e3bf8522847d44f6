use async_trait::async_trait;

use crate::job::errors::JobError;
use crate::job::models::JobPosting;
use crate::job::models::JobStatus;
use crate::job::ports::JobBoard;

/// In-memory job board seeded with the fixed listings data set.
pub struct FixtureJobBoard {
    postings: Vec<JobPosting>,
}

impl FixtureJobBoard {
    pub fn new(postings: Vec<JobPosting>) -> Self {
        Self { postings }
    }

    /// Build the board with the standard demo postings.
    pub fn seeded() -> Self {
        Self::new(vec![
            JobPosting::new(
                "j1",
                "Senior Backend Engineer",
                "Engineering",
                "Remote",
                JobStatus::Open,
            ),
            JobPosting::new(
                "j2",
                "Technical Recruiter",
                "People",
                "New York, NY",
                JobStatus::Open,
            ),
            JobPosting::new(
                "j3",
                "Payroll Specialist",
                "Finance",
                "Austin, TX",
                JobStatus::Closed,
            ),
        ])
    }
}

#[async_trait]
impl JobBoard for FixtureJobBoard {
    async fn list(&self) -> Result<Vec<JobPosting>, JobError> {
        Ok(self.postings.clone())
    }
}
