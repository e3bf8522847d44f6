use axum::extract::State;
use axum::Json;
use serde::Serialize;

use super::ApiError;
use crate::inbound::http::router::AppState;
use crate::job::errors::JobError;
use crate::job::models::JobPosting;
use crate::job::models::JobStatus;
use crate::job::ports::JobServicePort;

pub async fn list_jobs(
    State(state): State<AppState>,
) -> Result<Json<JobsResponseData>, ApiError> {
    let jobs = state.job_service.list_jobs().await.map_err(|e| match e {
        JobError::Unexpected(msg) => ApiError::InternalServerError(msg),
    })?;

    Ok(Json(JobsResponseData {
        jobs: jobs.iter().map(JobData::from).collect(),
    }))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobsResponseData {
    pub jobs: Vec<JobData>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobData {
    pub id: String,
    pub title: String,
    pub department: String,
    pub location: String,
    pub status: JobStatus,
}

impl From<&JobPosting> for JobData {
    fn from(job: &JobPosting) -> Self {
        Self {
            id: job.id.clone(),
            title: job.title.clone(),
            department: job.department.clone(),
            location: job.location.clone(),
            status: job.status,
        }
    }
}
