use crate::{job::Job, level::Level};

/// The user's current query. Empty fields match everything.
#[derive(Default, Clone, PartialEq, Eq, Debug)]
pub struct Filters {
    /// A substring to look for in a job's joined skills, ignoring case.
    pub skills: String,
    /// A canonical level key, or empty.
    pub level: String,
}

impl Filters {
    pub fn new(skills: impl Into<String>, level: impl Into<String>) -> Self {
        Self {
            skills: skills.into(),
            level: level.into(),
        }
    }

    pub fn matches(&self, job: &Job) -> bool {
        self.matcher().matches(job)
    }

    fn matcher(&self) -> Matcher {
        Matcher {
            skills: self.skills.to_lowercase(),
            level: if self.level.is_empty() {
                LevelQuery::Any
            } else {
                match Level::from_key(&self.level) {
                    Some(level) => LevelQuery::Tier(level),
                    None => LevelQuery::Unknown,
                }
            },
        }
    }
}

/// A `Filters` with its query pre-processed once per pass.
struct Matcher {
    skills: String,
    level: LevelQuery,
}

enum LevelQuery {
    Any,
    Tier(Level),
    Unknown,
}

impl Matcher {
    fn matches(&self, job: &Job) -> bool {
        self.skills_match(job) && self.level_match(job)
    }

    fn skills_match(&self, job: &Job) -> bool {
        self.skills.is_empty() || job.skills_text().contains(&self.skills)
    }

    fn level_match(&self, job: &Job) -> bool {
        match self.level {
            LevelQuery::Any => true,
            LevelQuery::Tier(level) => level.is_named_by(&job.level),
            LevelQuery::Unknown => false,
        }
    }
}

/// Returns the jobs that pass `filters`, in their original order.
pub fn filter_jobs<'a>(
    jobs: impl IntoIterator<Item = &'a Job>,
    filters: &Filters,
) -> Vec<&'a Job> {
    let matcher = filters.matcher();
    if let LevelQuery::Unknown = matcher.level {
        log::debug!("Unknown level filter: {:?}", filters.level);
    }

    let mut total = 0usize;
    let visible = jobs
        .into_iter()
        .inspect(|_| total += 1)
        .filter(|job| matcher.matches(job))
        .collect::<Vec<_>>();
    log::debug!(
        "Filtered {} of {} jobs with {:?}",
        visible.len(),
        total,
        filters,
    );

    visible
}
