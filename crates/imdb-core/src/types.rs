//! Data types for IMDb Movie Star Search
//!
//! Both types live only for a single run. Filmography is also the shape of
//! the exported JSON document.

use serde::{Deserialize, Serialize};

/// One entry of an actor search result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Name as shown in the result row
    pub display_name: String,
    /// Link target of the row, either a site-relative path or an absolute URL
    pub profile_reference: String,
}

impl Candidate {
    pub fn new(display_name: impl Into<String>, profile_reference: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            profile_reference: profile_reference.into(),
        }
    }
}

/// Ordered list of titles credited to one actor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filmography {
    /// Display name of the actor
    #[serde(rename = "name")]
    pub subject_name: String,
    /// Titles in display order
    #[serde(rename = "movies")]
    pub titles: Vec<String>,
}

impl Filmography {
    /// Build a filmography from titles in profile page order.
    ///
    /// The profile page lists credits newest first. With `newest_first` the
    /// page order is kept; without it the list is reversed so the oldest
    /// credit comes first.
    pub fn from_page_order(
        subject_name: impl Into<String>,
        mut titles: Vec<String>,
        newest_first: bool,
    ) -> Self {
        if !newest_first {
            titles.reverse();
        }
        Self {
            subject_name: subject_name.into(),
            titles,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn titles() -> Vec<String> {
        vec!["A".to_string(), "B".to_string(), "C".to_string()]
    }

    #[test]
    fn test_newest_first_keeps_page_order() {
        let filmography = Filmography::from_page_order("Someone", titles(), true);
        assert_eq!(filmography.titles, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_oldest_first_reverses_page_order() {
        let filmography = Filmography::from_page_order("Someone", titles(), false);
        assert_eq!(filmography.titles, vec!["C", "B", "A"]);
    }

    #[test]
    fn test_empty_filmography_is_not_an_error() {
        let filmography = Filmography::from_page_order("Nobody", Vec::new(), false);
        assert!(filmography.is_empty());
        assert_eq!(filmography.subject_name, "Nobody");
    }

    #[test]
    fn test_filmography_field_names() {
        let filmography = Filmography {
            subject_name: "Tom Cruise".to_string(),
            titles: vec!["X".to_string()],
        };
        let json = serde_json::to_value(&filmography).unwrap();
        assert_eq!(json, serde_json::json!({"name": "Tom Cruise", "movies": ["X"]}));
    }

    #[test]
    fn test_candidate_new() {
        let candidate = Candidate::new("Tom Cruise", "/name/nm0000129/");
        assert_eq!(candidate.display_name, "Tom Cruise");
        assert_eq!(candidate.profile_reference, "/name/nm0000129/");
    }
}
