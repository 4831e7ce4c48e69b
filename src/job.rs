use std::fmt::Display;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{
    de::{self, SeqAccess, Visitor},
    Deserialize, Deserializer, Serialize,
};
use url::Url;

/// A job posting as delivered by a job source.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct Job {
    /// Unique within the current collection.
    pub id: u64,
    pub title: String,
    pub company_name: String,
    pub location: String,
    /// The skills the job asks for, in display order.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub required_skills: Vec<String>,
    /// The seniority label exactly as the source spells it ("Sênior", "jr", "Mid Level", etc.).
    pub level: String,
    /// Employment types (full-time, contract, etc.).
    #[serde(default, deserialize_with = "null_as_empty")]
    pub job_type: Vec<String>,
    #[serde(default)]
    pub expertise: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub salary: Option<String>,
    /// Unparsable dates are dropped rather than failing the whole record.
    #[serde(default, deserialize_with = "lenient_date")]
    pub published_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub url: Option<Url>,
}

impl Display for Job {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", &self.title)
    }
}

impl Job {
    pub fn new(
        id: u64,
        title: impl Into<String>,
        company_name: impl Into<String>,
        location: impl Into<String>,
        level: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            company_name: company_name.into(),
            location: location.into(),
            required_skills: Vec::new(),
            level: level.into(),
            job_type: Vec::new(),
            expertise: None,
            description: None,
            salary: None,
            published_date: None,
            url: None,
        }
    }

    pub fn with_skills<S: Into<String>>(mut self, skills: impl IntoIterator<Item = S>) -> Self {
        self.required_skills = skills.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_job_type<S: Into<String>>(mut self, job_type: impl IntoIterator<Item = S>) -> Self {
        self.job_type = job_type.into_iter().map(Into::into).collect();
        self
    }

    /// The required skills joined by single spaces and lower-cased, in their original order.
    pub fn skills_text(&self) -> String {
        self.required_skills.join(" ").to_lowercase()
    }

    /// A one-line summary for listings.
    pub fn summary(&self) -> String {
        format!(
            "{} | {} | {} | {} | {}",
            self.title,
            self.company_name,
            self.location,
            self.required_skills.join(", "),
            self.level,
        )
    }

    /// Every field, one per line.
    pub fn details(&self) -> String {
        let or_na = |x: Option<&str>| x.unwrap_or("N/A").to_string();
        [
            format!("Title: {}", self.title),
            format!("Company: {}", self.company_name),
            format!("Location: {}", self.location),
            format!("Skills: {}", self.required_skills.join(", ")),
            format!("Level: {}", self.level),
            format!("Job Type: {}", self.job_type.join(", ")),
            format!("Description: {}", or_na(self.description.as_deref())),
            format!("Salary: {}", or_na(self.salary.as_deref())),
            format!(
                "Posted Date: {}",
                or_na(self.published_date.map(|x| x.to_string()).as_deref()),
            ),
            format!("Link: {}", or_na(self.url.as_ref().map(Url::as_str))),
        ]
        .join("\n")
    }
}

/// Reads a list of strings, treating `null` the same as a missing list.
fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    struct NullAsEmpty;

    impl<'de> Visitor<'de> for NullAsEmpty {
        type Value = Vec<String>;

        fn expecting(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
            write!(f, "a list of strings or null")
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(Vec::new())
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(Vec::new())
        }

        fn visit_some<D2: Deserializer<'de>>(
            self,
            deserializer: D2,
        ) -> Result<Self::Value, D2::Error> {
            Vec::deserialize(deserializer)
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
            let mut items = Vec::with_capacity(seq.size_hint().unwrap_or_default());
            while let Some(item) = seq.next_element()? {
                items.push(item);
            }
            Ok(items)
        }
    }

    deserializer.deserialize_any(NullAsEmpty)
}

fn lenient_date<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<DateTime<Utc>>, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?
        .as_deref()
        .and_then(parse_date))
}

fn parse_date(date: &str) -> Option<DateTime<Utc>> {
    if let Ok(x) = DateTime::parse_from_rfc3339(date) {
        return Some(x.with_timezone(&Utc));
    }
    if let Some(x) = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .and_then(|x| x.and_hms_opt(0, 0, 0))
    {
        return Some(x.and_utc());
    }
    log::warn!("Ignoring unparsable published date: {:?}", date);
    None
}
