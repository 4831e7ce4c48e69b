use std::{
    collections::HashSet,
    fmt::Display,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use crate::job::Job;

/// Where a board gets its jobs from.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub enum JobSource {
    /// A live API serving a JSON array of jobs at `{url}/jobs`.
    Api(Url),
    /// A RON file containing a list of jobs.
    Mock(PathBuf),
}

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Ron {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
    #[error("cannot append /jobs to {0}")]
    BaseUrl(Url),
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
}

impl Display for JobSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JobSource::Api(url) => write!(f, "API {}", url),
            JobSource::Mock(path) => write!(f, "Mock {}", path.display()),
        }
    }
}

impl JobSource {
    /// Retrieves the full collection of jobs.
    pub fn fetch(&self) -> Result<Vec<Job>, FetchError> {
        let jobs = match self {
            JobSource::Api(base_url) => {
                let url =
                    jobs_url(base_url).ok_or_else(|| FetchError::BaseUrl(base_url.clone()))?;
                log::debug!("[{}] GET {}", self, url);
                reqwest::blocking::get(url)?
                    .error_for_status()?
                    .json::<Vec<Job>>()?
            }
            JobSource::Mock(path) => read_jobs(path)?,
        };

        let mut ids = HashSet::with_capacity(jobs.len());
        for job in &jobs {
            if !ids.insert(job.id) {
                log::warn!("[{}] Job found with duplicate ID: {}", self, job.id);
            }
        }
        log::info!("[{}] Fetched {} jobs", self, jobs.len());

        Ok(jobs)
    }
}

/// Appends a `jobs` path segment, keeping any query or fragment. `None` for URLs without a path.
fn jobs_url(base_url: &Url) -> Option<Url> {
    let mut url = base_url.clone();
    url.path_segments_mut().ok()?.pop_if_empty().push("jobs");
    Some(url)
}

fn read_jobs(path: &Path) -> Result<Vec<Job>, FetchError> {
    let jobs_str = std::fs::read_to_string(path).map_err(|source| FetchError::Io {
        path: path.to_owned(),
        source,
    })?;
    ron::from_str(&jobs_str).map_err(|source| FetchError::Ron {
        path: path.to_owned(),
        source,
    })
}
