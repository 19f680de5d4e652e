//! Leaderboard entries.

use std::fmt;

/// A name/score pair.
///
/// Names are optional and need not be unique; neither do scores.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Record {
    name: Option<String>,
    score: i64,
}

impl Record {
    pub fn new(name: impl Into<String>, score: i64) -> Self {
        Self {
            name: Some(name.into()),
            score,
        }
    }

    /// A record with no name attached.
    pub fn anonymous(score: i64) -> Self {
        Self { name: None, score }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn score(&self) -> i64 {
        self.score
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{} {}", name, self.score),
            None => write!(f, "<anonymous> {}", self.score),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_missing_names_are_distinct() {
        let empty = Record::new("", 100);
        let missing = Record::anonymous(100);
        assert_eq!(empty.name(), Some(""));
        assert_eq!(missing.name(), None);
        assert_ne!(empty, missing);
    }

    #[test]
    fn display_formats() {
        assert_eq!(Record::new("Alice", 7).to_string(), "Alice 7");
        assert_eq!(Record::anonymous(-3).to_string(), "<anonymous> -3");
    }
}
