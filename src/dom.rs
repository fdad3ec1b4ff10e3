//! Read-only lookups over a parsed HTML tree.
//!
//! Searches are depth-first in document order and include the node they
//! start from.

use scraper::ElementRef;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matcher<'m> {
    Id(&'m str),
    Class(&'m str),
    Tag(&'m str),
}

impl Matcher<'_> {
    pub fn matches(&self, element: &ElementRef<'_>) -> bool {
        let el = element.value();
        match *self {
            Matcher::Id(id) => el.id() == Some(id),
            Matcher::Class(class) => el.classes().any(|c| c == class),
            Matcher::Tag(tag) => el.name().eq_ignore_ascii_case(tag),
        }
    }
}

fn elements<'a>(node: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    node.descendants().filter_map(ElementRef::wrap)
}

/// First element under `node` (or `node` itself) that matches.
pub fn find<'a>(node: ElementRef<'a>, matcher: Matcher<'_>) -> Option<ElementRef<'a>> {
    elements(node).find(|e| matcher.matches(e))
}

pub fn find_all<'a>(node: ElementRef<'a>, matcher: Matcher<'_>) -> Vec<ElementRef<'a>> {
    elements(node).filter(|e| matcher.matches(e)).collect()
}

/// Text of every descendant text node, trimmed, blanks dropped, joined by a space.
pub fn text(node: ElementRef<'_>) -> String {
    node.text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Only the first descendant text node, trimmed.
pub fn first_text(node: ElementRef<'_>) -> String {
    node.text().next().unwrap_or_default().trim().to_string()
}

/// Attribute value; missing and empty attributes both read as `None`.
pub fn attr<'a>(node: ElementRef<'a>, name: &str) -> Option<&'a str> {
    node.value().attr(name).filter(|v| !v.is_empty())
}
