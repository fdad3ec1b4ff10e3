use serde::{Deserialize, Serialize};

/// A movie scraped from a product page.
///
/// Fields stay `None` until their anchor node is found in the page, so a
/// missing element can be told apart from one that was present but empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Movie {
    pub title: Option<String>,
    pub release_year: Option<i64>,
    pub actors: Option<Vec<String>>,
    pub poster: Option<String>,
    pub similar_ids: Option<Vec<String>>,
}

impl Movie {
    /// A movie without a title is treated as not found.
    pub fn is_empty(&self) -> bool {
        self.title.as_deref().is_none_or(str::is_empty)
    }
}

/// JSON shape returned by the API.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MoviePayload {
    pub title: String,
    pub release_year: i64,
    pub actors: Vec<String>,
    pub poster: String,
    pub similar_ids: Vec<String>,
}

impl From<Movie> for MoviePayload {
    fn from(movie: Movie) -> Self {
        MoviePayload {
            title: movie.title.unwrap_or_default(),
            release_year: movie.release_year.unwrap_or_default(),
            actors: movie.actors.unwrap_or_default(),
            poster: movie.poster.unwrap_or_default(),
            similar_ids: movie.similar_ids.unwrap_or_default(),
        }
    }
}
