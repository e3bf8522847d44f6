use std::sync::Arc;

use async_trait::async_trait;

use crate::job::errors::JobError;
use crate::job::models::JobPosting;
use crate::job::ports::JobBoard;
use crate::job::ports::JobServicePort;

/// Domain service for the job listings page.
pub struct JobService<JB>
where
    JB: JobBoard,
{
    board: Arc<JB>,
}

impl<JB> JobService<JB>
where
    JB: JobBoard,
{
    pub fn new(board: Arc<JB>) -> Self {
        Self { board }
    }
}

#[async_trait]
impl<JB> JobServicePort for JobService<JB>
where
    JB: JobBoard,
{
    async fn list_jobs(&self) -> Result<Vec<JobPosting>, JobError> {
        self.board.list().await
    }
}
