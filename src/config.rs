use std::{path::PathBuf, sync::LazyLock};

use serde::{Deserialize, Serialize};
use url::Url;

use crate::job_source::JobSource;

static DEFAULT_API_BASE_URL: LazyLock<Url> =
    LazyLock::new(|| Url::parse("http://localhost:8000").unwrap());

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
#[serde(deny_unknown_fields, default)]
pub struct Config {
    /// The server whose `/jobs` endpoint lists live jobs.
    pub api_base_url: Url,
    /// Read jobs from `mock_jobs_path` instead of the API.
    pub use_mock_data: bool,
    pub mock_jobs_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.clone(),
            use_mock_data: false,
            mock_jobs_path: PathBuf::from("data/mock_jobs.ron"),
        }
    }
}

impl Config {
    pub const FILE_PATH: &str = "data/config.ron";

    pub fn job_source(&self) -> JobSource {
        if self.use_mock_data {
            JobSource::Mock(self.mock_jobs_path.clone())
        } else {
            JobSource::Api(self.api_base_url.clone())
        }
    }
}
