//! Extracts a [`Movie`] from an Amazon Prime Video product page.
//!
//! Layout the extraction relies on:
//!
//! ```text
//! #aiv-main-content
//!     #dv-dp-title-content
//!         h1#aiv-content-title      movie title
//!             span.release-year     release year
//!     #dv-dp-left-content
//!         img                       poster
//!     .dv-info
//!         dl.dv-meta-info
//!             dt
//!             dd                    actors
//! #dv-sims
//!     ul
//!         li > a                    related movie
//! ```
//!
//! Anything missing from the page leaves the matching field unset.

use scraper::{ElementRef, Html};
use tracing::debug;

use crate::dom::{self, Matcher};
use crate::models::Movie;

const MAIN_CONTENT_ID: &str = "aiv-main-content";
const TITLE_ID: &str = "aiv-content-title";
const RELEASE_YEAR_CLASS: &str = "release-year";
const META_INFO_CLASS: &str = "dv-meta-info";
const LEFT_CONTENT_ID: &str = "dv-dp-left-content";
const SIMILAR_ID: &str = "dv-sims";
const PRODUCT_MARKER: &str = "product/";

pub fn parse_movie(html: &str) -> Movie {
    let doc = Html::parse_document(html);
    if !doc.errors.is_empty() {
        debug!(errors = doc.errors.len(), "recovered from html parse errors");
    }
    let root = doc.root_element();

    let mut movie = Movie::default();

    if let Some(main) = dom::find(root, Matcher::Id(MAIN_CONTENT_ID)) {
        movie.title = find_title(main);
        movie.release_year = find_release_year(main);
        movie.actors = find_actors(main);
        movie.poster = find_poster(main);
    }

    if let Some(similar) = dom::find(root, Matcher::Id(SIMILAR_ID)) {
        movie.similar_ids = find_similar_ids(similar);
    }

    movie
}

// the title node also holds the year, only its first text segment is the title
fn find_title(node: ElementRef<'_>) -> Option<String> {
    dom::find(node, Matcher::Id(TITLE_ID)).map(dom::first_text)
}

fn find_release_year(node: ElementRef<'_>) -> Option<i64> {
    let year = dom::find(node, Matcher::Class(RELEASE_YEAR_CLASS))?;
    dom::text(year).parse().ok()
}

// actors are in the first <dd> of .dv-meta-info
fn find_actors(node: ElementRef<'_>) -> Option<Vec<String>> {
    let meta = dom::find(node, Matcher::Class(META_INFO_CLASS))?;
    let dd = dom::find(meta, Matcher::Tag("dd"))?;
    Some(dom::text(dd).split(", ").map(str::to_string).collect())
}

fn find_poster(node: ElementRef<'_>) -> Option<String> {
    let left = dom::find(node, Matcher::Id(LEFT_CONTENT_ID))?;
    let img = dom::find(left, Matcher::Tag("img"))?;
    dom::attr(img, "src").map(str::to_string)
}

fn find_similar_ids(node: ElementRef<'_>) -> Option<Vec<String>> {
    let list = dom::find(node, Matcher::Tag("ul"))?;
    let ids = dom::find_all(list, Matcher::Tag("a"))
        .into_iter()
        .filter_map(|a| dom::attr(a, "href"))
        .filter_map(parse_id)
        .map(str::to_string)
        .collect();
    Some(ids)
}

/// Product id from a product URL: the path segment right after `product/`.
pub fn parse_id(url: &str) -> Option<&str> {
    let (_, rest) = url.split_once(PRODUCT_MARKER)?;
    let id = rest.split('/').next().unwrap_or_default();
    (!id.is_empty()).then_some(id)
}
