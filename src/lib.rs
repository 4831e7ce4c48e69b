mod board;
mod config;
mod filter;
mod job;
mod job_source;
mod level;

pub use board::Board;
pub use config::Config;
pub use filter::{filter_jobs, Filters};
pub use job::Job;
pub use job_source::{FetchError, JobSource};
pub use level::{Level, LEVEL_SYNONYMS};

pub fn init_logger(default_level: log::LevelFilter) {
    pretty_env_logger::formatted_timed_builder()
        .filter_level(default_level)
        .parse_default_env()
        .init();
}
