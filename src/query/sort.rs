//! Record ordering.
//!
//! Field names resolve through [`FIELD_NAMES`]; anything not listed (or not
//! allowed for the caller) resolves to [`SortField::DEFAULT`]. Text fields
//! compare by their raw value with no case folding, and the sort is stable,
//! so records with equal keys keep their collection order in both
//! directions.

use std::cmp::Ordering;

use crate::book::Book;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortField {
    #[default]
    Title,
    Author,
    Price,
}

/// Wire names accepted for each sort field, matched ignoring ASCII case.
pub const FIELD_NAMES: [(&str, SortField); 3] = [
    ("title", SortField::Title),
    ("author", SortField::Author),
    ("price", SortField::Price),
];

impl SortField {
    pub const DEFAULT: SortField = SortField::Title;

    /// Fields the plain sorted listing accepts.
    pub const BASIC: &'static [SortField] = &[SortField::Title, SortField::Author];

    /// Fields the advanced query accepts.
    pub const ALL: &'static [SortField] = &[SortField::Title, SortField::Author, SortField::Price];

    /// Resolve a field name against `allowed`, falling back to
    /// [`SortField::DEFAULT`].
    pub fn from_param(name: &str, allowed: &[SortField]) -> SortField {
        FIELD_NAMES
            .iter()
            .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
            .map(|(_, field)| *field)
            .filter(|field| allowed.contains(field))
            .unwrap_or(SortField::DEFAULT)
    }

    pub fn compare(self, a: &Book, b: &Book) -> Ordering {
        match self {
            SortField::Title => a.title.cmp(&b.title),
            SortField::Author => a.author.cmp(&b.author),
            SortField::Price => a.price.total_cmp(&b.price),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// `desc` in any case means descending; every other value is ascending.
    pub fn from_param(value: &str) -> SortDirection {
        if value.eq_ignore_ascii_case("desc") {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    pub fn from_params(field: &str, direction: &str, allowed: &[SortField]) -> Self {
        Self {
            field: SortField::from_param(field, allowed),
            direction: SortDirection::from_param(direction),
        }
    }

    pub fn compare(&self, a: &Book, b: &Book) -> Ordering {
        match self.direction {
            SortDirection::Asc => self.field.compare(a, b),
            SortDirection::Desc => self.field.compare(a, b).reverse(),
        }
    }

    pub fn apply(&self, mut books: Vec<Book>) -> Vec<Book> {
        books.sort_by(|a, b| self.compare(a, b));
        books
    }
}
