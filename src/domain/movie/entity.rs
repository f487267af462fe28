use serde::{Deserialize, Serialize};

/// A single movie record, either part of the bundled reference set or
/// entered by the user.
///
/// Serialized field names are camelCase so the persisted catalog and the
/// bundled dataset share one wire shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    /// Title, the identifier within a catalog snapshot.
    /// Duplicates are allowed by the store; lookups are first-match-wins.
    pub title: String,

    /// Critic score, expected range 0-100
    pub critic_score: f64,

    /// Audience score, expected range 0-100
    pub audience_score: f64,

    /// Domestic box-office gross, in millions of dollars
    pub domestic: f64,

    /// Genre label; absent for records without one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
}

impl Movie {
    pub fn new(
        title: impl Into<String>,
        critic_score: f64,
        audience_score: f64,
        domestic: f64,
        genre: Option<String>,
    ) -> Self {
        Self {
            title: title.into(),
            critic_score,
            audience_score,
            domestic,
            genre,
        }
    }

    /// Genre with the empty string treated as unset.
    ///
    /// Grouping and dropdown population only consider records where this
    /// returns `Some`; an empty genre stays on the wire but never forms a
    /// group of its own.
    pub fn genre_label(&self) -> Option<&str> {
        self.genre.as_deref().filter(|genre| !genre.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_are_camel_case() {
        let movie = Movie::new("Oppenheimer", 93.0, 91.0, 326.1, Some("Drama".to_string()));
        let json = serde_json::to_string(&movie).unwrap();

        assert!(json.contains("\"criticScore\""));
        assert!(json.contains("\"audienceScore\""));
        assert!(json.contains("\"domestic\""));
        assert!(json.contains("\"genre\""));
    }

    #[test]
    fn test_missing_genre_round_trips_as_none() {
        let movie = Movie::new("Untracked", 50.0, 50.0, 10.0, None);
        let json = serde_json::to_string(&movie).unwrap();

        // The key is omitted entirely, not serialized as null
        assert!(!json.contains("genre"));

        let back: Movie = serde_json::from_str(&json).unwrap();
        assert_eq!(back, movie);
    }

    #[test]
    fn test_genre_label_filters_empty_string() {
        let tagged = Movie::new("A", 1.0, 1.0, 1.0, Some("Drama".to_string()));
        let blank = Movie::new("B", 1.0, 1.0, 1.0, Some(String::new()));
        let absent = Movie::new("C", 1.0, 1.0, 1.0, None);

        assert_eq!(tagged.genre_label(), Some("Drama"));
        assert_eq!(blank.genre_label(), None);
        assert_eq!(absent.genre_label(), None);
    }
}
