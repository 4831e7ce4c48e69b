use std::path::Path;

use tiny_bail::prelude::*;

use crate::{
    config::Config,
    filter::{filter_jobs, Filters},
    job::Job,
};

/// A browsing session: the latest fetched jobs and the user's current filters.
#[derive(Default)]
pub struct Board {
    pub config: Config,
    pub jobs: Vec<Job>,
    pub filters: Filters,
}

impl Board {
    pub const NO_MATCHES: &str = "No jobs match the selected filters.";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_config(&mut self, path: impl AsRef<Path>) {
        let config_str = r!(std::fs::read_to_string(path.as_ref()));
        self.config = r!(ron::from_str(&config_str));
    }

    /// Replaces the job collection with a fresh fetch. On failure the previous jobs stay.
    pub fn refresh(&mut self) {
        let source = self.config.job_source();
        match source.fetch() {
            Ok(jobs) => self.jobs = jobs,
            Err(e) => log::error!("[{}] Error fetching jobs: {}", source, e),
        }
    }

    /// Switches between live and mock data, then refreshes.
    pub fn set_use_mock_data(&mut self, use_mock_data: bool) {
        self.config.use_mock_data = use_mock_data;
        self.refresh();
    }

    pub fn visible_jobs(&self) -> Vec<&Job> {
        filter_jobs(&self.jobs, &self.filters)
    }

    pub fn job(&self, id: u64) -> Option<&Job> {
        self.jobs.iter().find(|job| job.id == id)
    }

    pub fn render_jobs(&self) -> String {
        let visible = self.visible_jobs();
        if visible.is_empty() {
            return Self::NO_MATCHES.to_string();
        }

        visible
            .into_iter()
            .map(|job| format!("{:>4}  {}", job.id, job.summary()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn list_jobs(&self) {
        println!("{}", self.render_jobs());
    }

    pub fn show_job(&self, id: u64) {
        let job = r!(self.job(id));
        println!("{}", job.details());
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn fixture_path() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("data/mock_jobs.ron")
    }

    fn mock_board() -> Board {
        let mut board = Board::new();
        board.config.mock_jobs_path = fixture_path();
        board.set_use_mock_data(true);
        board
    }

    #[test]
    fn refresh_replaces_jobs() {
        let mut board = mock_board();
        assert_eq!(board.jobs.len(), 3);

        board.jobs.push(Job::new(99, "Stale", "Old", "Nowhere", "Mid"));
        board.refresh();
        assert_eq!(board.jobs.len(), 3);
        assert_eq!(board.job(99), None);
    }

    #[test]
    fn failed_refresh_keeps_jobs() {
        let mut board = mock_board();
        board.config.mock_jobs_path = PathBuf::from("data/does_not_exist.ron");
        board.refresh();
        assert_eq!(board.jobs.len(), 3);
    }

    #[test]
    fn visible_jobs_follow_filters() {
        let mut board = mock_board();
        assert_eq!(board.visible_jobs().len(), 3);

        board.filters = Filters::new("", "Senior");
        let visible = board.visible_jobs();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].title, "Backend Developer");

        board.filters = Filters::new("sketch", "Junior");
        assert_eq!(board.visible_jobs()[0].id, 3);

        board.filters = Filters::new("css", "Senior");
        assert!(board.visible_jobs().is_empty());
        assert_eq!(board.render_jobs(), Board::NO_MATCHES);
    }

    #[test]
    fn render() {
        let mut board = mock_board();
        board.filters = Filters::new("react", "");
        assert_eq!(
            board.render_jobs(),
            "   1  Frontend Developer | TechCorp | Remote | React, JavaScript, CSS | Intermediate",
        );
        assert!(board
            .job(2)
            .unwrap()
            .details()
            .contains("Salary: $90,000 - $120,000"));
    }

    #[test]
    fn load_config() {
        let path =
            std::env::temp_dir().join(format!("vagago-config-{}.ron", std::process::id()));
        std::fs::write(&path, "(use_mock_data: true, mock_jobs_path: \"mock.ron\")").unwrap();
        let mut board = Board::new();
        board.load_config(&path);
        std::fs::remove_file(&path).unwrap();
        assert!(board.config.use_mock_data);
        assert_eq!(board.config.mock_jobs_path, PathBuf::from("mock.ron"));

        let mut board = Board::new();
        board.load_config("data/does_not_exist.ron");
        assert_eq!(board.config, Config::default());
    }
}
