// src/domain/catalog.rs
//
// Pure query functions over an in-memory catalog.
//
// RULES:
// - No persistence access, no side effects
// - Inputs are never mutated
// - Deterministic output order (charts and dropdowns render from these)

use serde::{Deserialize, Serialize};

use crate::domain::movie::Movie;

/// Summed domestic gross for one genre.
///
/// Aggregation results keep first-occurrence order, so they are carried as
/// a sequence rather than a map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenreTotal {
    pub genre: String,
    pub domestic_total: f64,
}

/// First movie whose title matches the input, ignoring case.
///
/// This is the autofill lookup: typing "oppenheimer" finds "Oppenheimer".
/// With duplicate titles the first match in catalog order wins.
pub fn find_by_title<'a>(movies: &'a [Movie], title: &str) -> Option<&'a Movie> {
    let wanted = title.to_lowercase();
    movies
        .iter()
        .find(|movie| movie.title.to_lowercase() == wanted)
}

/// First movie whose title equals the input exactly.
///
/// The confirm-and-display path uses this; unlike [`find_by_title`] it is
/// case-sensitive.
pub fn find_by_title_exact<'a>(movies: &'a [Movie], title: &str) -> Option<&'a Movie> {
    movies.iter().find(|movie| movie.title == title)
}

/// Domestic gross summed per genre, in first-occurrence order.
///
/// Records without a genre (absent or empty string) are excluded entirely;
/// there is no "unknown" bucket. Genre keys compare case-sensitively.
pub fn domestic_by_genre(movies: &[Movie]) -> Vec<GenreTotal> {
    let mut totals: Vec<GenreTotal> = Vec::new();

    for movie in movies {
        let Some(genre) = movie.genre_label() else {
            continue;
        };

        match totals.iter_mut().find(|total| total.genre == genre) {
            Some(total) => total.domestic_total += movie.domestic,
            None => totals.push(GenreTotal {
                genre: genre.to_string(),
                domestic_total: movie.domestic,
            }),
        }
    }

    totals
}

/// New catalog sorted by domestic gross, highest first.
///
/// The sort is stable: movies with equal grosses keep their original
/// relative order, so repeated renders produce identical charts.
pub fn sort_by_domestic_descending(movies: &[Movie]) -> Vec<Movie> {
    let mut sorted = movies.to_vec();
    sorted.sort_by(|a, b| b.domestic.total_cmp(&a.domestic));
    sorted
}

/// Distinct present genres in first-occurrence order.
///
/// Feeds the genre dropdown; absent and empty genres contribute nothing.
pub fn unique_genres(movies: &[Movie]) -> Vec<String> {
    let mut genres: Vec<String> = Vec::new();

    for movie in movies {
        let Some(genre) = movie.genre_label() else {
            continue;
        };
        if !genres.iter().any(|known| known == genre) {
            genres.push(genre.to_string());
        }
    }

    genres
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(title: &str, domestic: f64, genre: Option<&str>) -> Movie {
        Movie::new(title, 80.0, 80.0, domestic, genre.map(String::from))
    }

    #[test]
    fn test_find_by_title_is_case_insensitive() {
        let movies = vec![movie("Oppenheimer", 326.1, Some("Drama"))];

        for needle in ["oppenheimer", "OPPENHEIMER", "Oppenheimer"] {
            let found = find_by_title(&movies, needle);
            assert_eq!(found.map(|m| m.title.as_str()), Some("Oppenheimer"));
        }
    }

    #[test]
    fn test_find_by_title_miss_returns_none() {
        let movies = vec![movie("Oppenheimer", 326.1, Some("Drama"))];
        assert!(find_by_title(&movies, "Barbenheimer").is_none());
    }

    #[test]
    fn test_find_by_title_first_match_wins_on_duplicates() {
        let movies = vec![
            movie("Dune", 108.3, Some("Sci-Fi")),
            movie("dune", 1.0, None),
        ];

        let found = find_by_title(&movies, "DUNE").unwrap();
        assert_eq!(found.domestic, 108.3);
    }

    #[test]
    fn test_find_exact_is_case_sensitive() {
        let movies = vec![movie("Oppenheimer", 326.1, Some("Drama"))];

        assert!(find_by_title_exact(&movies, "Oppenheimer").is_some());
        assert!(find_by_title_exact(&movies, "oppenheimer").is_none());
    }

    #[test]
    fn test_domestic_by_genre_excludes_genreless_records() {
        let movies = vec![
            movie("A", 100.0, Some("Drama")),
            movie("B", 50.0, None),
        ];

        let totals = domestic_by_genre(&movies);
        assert_eq!(
            totals,
            vec![GenreTotal {
                genre: "Drama".to_string(),
                domestic_total: 100.0,
            }]
        );
    }

    #[test]
    fn test_domestic_by_genre_excludes_empty_string_genre() {
        let movies = vec![
            movie("A", 100.0, Some("Drama")),
            movie("B", 50.0, Some("")),
        ];

        let totals = domestic_by_genre(&movies);
        assert_eq!(totals.len(), 1);
        assert_eq!(totals[0].genre, "Drama");
    }

    #[test]
    fn test_domestic_by_genre_sums_and_keeps_first_occurrence_order() {
        let movies = vec![
            movie("A", 100.0, Some("Action")),
            movie("B", 40.0, Some("Drama")),
            movie("C", 60.0, Some("Action")),
            movie("D", 10.0, Some("Drama")),
        ];

        let totals = domestic_by_genre(&movies);
        assert_eq!(totals.len(), 2);
        assert_eq!(totals[0].genre, "Action");
        assert_eq!(totals[0].domestic_total, 160.0);
        assert_eq!(totals[1].genre, "Drama");
        assert_eq!(totals[1].domestic_total, 50.0);
    }

    #[test]
    fn test_genre_keys_are_case_sensitive() {
        let movies = vec![
            movie("A", 100.0, Some("Drama")),
            movie("B", 50.0, Some("drama")),
        ];

        let totals = domestic_by_genre(&movies);
        assert_eq!(totals.len(), 2);
    }

    #[test]
    fn test_sort_by_domestic_descending_is_stable() {
        let movies = vec![
            movie("A", 50.0, None),
            movie("B", 50.0, None),
            movie("C", 90.0, None),
        ];

        let sorted = sort_by_domestic_descending(&movies);
        let titles: Vec<&str> = sorted.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_sort_does_not_mutate_input() {
        let movies = vec![movie("A", 1.0, None), movie("B", 2.0, None)];
        let _ = sort_by_domestic_descending(&movies);

        assert_eq!(movies[0].title, "A");
        assert_eq!(movies[1].title, "B");
    }

    #[test]
    fn test_unique_genres_first_occurrence_order() {
        let movies = vec![
            movie("A", 1.0, Some("Action")),
            movie("B", 1.0, Some("Drama")),
            movie("C", 1.0, Some("Action")),
            movie("D", 1.0, None),
            movie("E", 1.0, Some("")),
            movie("F", 1.0, Some("Horror")),
        ];

        assert_eq!(unique_genres(&movies), vec!["Action", "Drama", "Horror"]);
    }
}
