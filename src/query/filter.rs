//! Record predicates: title/author substring matches and price bounds.

use crate::book::Book;

/// Inclusive price bounds. An absent bound is not applied.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PriceRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl PriceRange {
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, price: f64) -> bool {
        let above_min = match self.min {
            Some(min) => price >= min,
            None => true,
        };
        let below_max = match self.max {
            Some(max) => price <= max,
            None => true,
        };
        above_min && below_max
    }
}

/// Case-insensitive substring test. An empty needle matches everything.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// The AND-combination of every filter the advanced query accepts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookFilter {
    pub title: Option<String>,
    pub author: Option<String>,
    pub price: PriceRange,
}

impl BookFilter {
    pub fn matches(&self, book: &Book) -> bool {
        let title = match &self.title {
            Some(needle) => contains_ignore_case(&book.title, needle),
            None => true,
        };
        let author = match &self.author {
            Some(needle) => contains_ignore_case(&book.author, needle),
            None => true,
        };
        title && author && self.price.contains(book.price)
    }

    pub fn apply(&self, books: Vec<Book>) -> Vec<Book> {
        books.into_iter().filter(|book| self.matches(book)).collect()
    }
}

/// Keep records whose title contains `title`, ignoring case.
///
/// An empty `title` returns the input unchanged.
pub fn search_by_title(books: Vec<Book>, title: &str) -> Vec<Book> {
    if title.is_empty() {
        return books;
    }
    books
        .into_iter()
        .filter(|book| contains_ignore_case(&book.title, title))
        .collect()
}

pub fn filter_by_price(books: Vec<Book>, range: PriceRange) -> Vec<Book> {
    books
        .into_iter()
        .filter(|book| range.contains(book.price))
        .collect()
}
