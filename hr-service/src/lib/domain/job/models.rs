use std::fmt;

use serde::Deserialize;
use serde::Serialize;

/// Publication state of a job posting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Open,
    Closed,
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobStatus::Open => f.write_str("open"),
            JobStatus::Closed => f.write_str("closed"),
        }
    }
}

/// A job opening shown on the listings page.
#[derive(Debug, Clone)]
pub struct JobPosting {
    pub id: String,
    pub title: String,
    pub department: String,
    pub location: String,
    pub status: JobStatus,
}

impl JobPosting {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        department: impl Into<String>,
        location: impl Into<String>,
        status: JobStatus,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            department: department.into(),
            location: location.into(),
            status,
        }
    }
}
