use std::{fmt::Display, sync::LazyLock};

/// A canonical seniority tier, independent of how a job source spells it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Level {
    Junior,
    Mid,
    Senior,
}

/// Every accepted spelling of each tier.
///
/// A job's `level` belongs to a tier if any of that tier's synonyms occurs inside it, ignoring
/// case. Add new spellings here; the matching code never needs to change.
pub static LEVEL_SYNONYMS: [(Level, &[&str]); 3] = [
    (
        Level::Junior,
        &["Junior", "Júnior", "junio", "jr", "Beginner"],
    ),
    (Level::Mid, &["Mid", "Mid Level", "Pleno", "Intermediate"]),
    (Level::Senior, &["Senior", "Sênior", "sr", "Expert"]),
];

impl Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Junior, Level::Mid, Level::Senior];

    /// The key a filter uses to select this tier.
    pub fn key(self) -> &'static str {
        match self {
            Level::Junior => "Junior",
            Level::Mid => "Mid",
            Level::Senior => "Senior",
        }
    }

    /// Finds the tier for a canonical key. Keys are case-sensitive; anything else is `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.key() == key)
    }

    pub fn synonyms(self) -> &'static [&'static str] {
        LEVEL_SYNONYMS
            .iter()
            .find(|(level, _)| *level == self)
            .map(|&(_, synonyms)| synonyms)
            .unwrap_or_default()
    }

    /// True if some synonym of this tier is a substring of `label`, ignoring case.
    pub fn is_named_by(self, label: &str) -> bool {
        let label = label.to_lowercase();
        self.lowercase_synonyms()
            .iter()
            .any(|synonym| label.contains(synonym.as_str()))
    }

    fn lowercase_synonyms(self) -> &'static [String] {
        static LOWERCASE: LazyLock<[Vec<String>; 3]> = LazyLock::new(|| {
            Level::ALL.map(|level| level.synonyms().iter().map(|s| s.to_lowercase()).collect())
        });

        &LOWERCASE[self as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys() {
        for level in Level::ALL {
            assert_eq!(Level::from_key(level.key()), Some(level));
        }
        for key in ["", "junior", "SENIOR", "Beginner", "Expert", "Lead", " Mid"] {
            assert_eq!(Level::from_key(key), None, "{:?}", key);
        }
    }

    #[test]
    fn every_tier_has_synonyms() {
        assert_eq!(LEVEL_SYNONYMS.len(), Level::ALL.len());
        for level in Level::ALL {
            assert!(level.synonyms().contains(&level.key()), "{}", level);
            assert_eq!(level.lowercase_synonyms().len(), level.synonyms().len());
        }
    }

    #[test]
    fn named_by() {
        for (label, level) in TEST_CASES {
            for other in Level::ALL {
                assert_eq!(
                    other.is_named_by(label),
                    Some(other) == level,
                    "{:?} as {}",
                    label,
                    other,
                );
            }
        }
    }

    #[test]
    fn synonym_must_be_inside_label() {
        // "Mid Level" contains "Mid", but "M" does not contain any synonym.
        assert!(Level::Mid.is_named_by("Mid Level"));
        assert!(!Level::Mid.is_named_by("M"));
        assert!(!Level::Junior.is_named_by("j"));
        assert!(!Level::Senior.is_named_by(""));
    }

    const TEST_CASES: [(&str, Option<Level>); 20] = [
        ("Junior", Some(Level::Junior)),
        ("Júnior", Some(Level::Junior)),
        ("JÚNIOR", Some(Level::Junior)),
        ("jr", Some(Level::Junior)),
        ("Jr. Developer", Some(Level::Junior)),
        ("Beginner", Some(Level::Junior)),
        ("Mid", Some(Level::Mid)),
        ("Mid Level", Some(Level::Mid)),
        ("Pleno", Some(Level::Mid)),
        ("pleno", Some(Level::Mid)),
        ("Intermediate", Some(Level::Mid)),
        ("Senior", Some(Level::Senior)),
        ("Sênior", Some(Level::Senior)),
        ("SÊNIOR", Some(Level::Senior)),
        ("Sr", Some(Level::Senior)),
        ("Expert", Some(Level::Senior)),
        ("Lead", None),
        ("Intern", None),
        ("Staff", None),
        ("", None),
    ];
}
