use crate::book::{Book, BookId, BookPatch, NewBook};
use crate::error::CatalogError;
use crate::query::{self, AdvancedQuery, Page, PriceRange, SortSpec};

/// Result of a delete. A missing record is a normal outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
}

impl DeleteOutcome {
    pub fn message(self) -> &'static str {
        match self {
            DeleteOutcome::Deleted => "The book is deleted.",
            DeleteOutcome::NotFound => "The book is not found",
        }
    }
}

/// Ordered book storage with a never-reused identifier generator.
///
/// Implementors provide lookup and mutation; the read-only queries are
/// derived from a single `list()` snapshot so each one observes one
/// consistent state of the collection.
pub trait BookRepository: Send + Sync {
    /// All records in collection order.
    fn list(&self) -> Result<Vec<Book>, CatalogError>;

    fn get(&self, id: BookId) -> Result<Option<Book>, CatalogError>;

    /// Append a record under a freshly issued identifier and return the
    /// whole collection. The new record is last.
    fn create(&self, book: NewBook) -> Result<Vec<Book>, CatalogError>;

    /// Replace the record in place. The stored identifier stays `id`
    /// whatever the replacement carries.
    fn update(&self, id: BookId, replacement: NewBook) -> Result<Option<Book>, CatalogError>;

    /// Overwrite only the fields present in `patch`.
    fn patch(&self, id: BookId, patch: BookPatch) -> Result<Option<Book>, CatalogError>;

    fn delete(&self, id: BookId) -> Result<DeleteOutcome, CatalogError>;

    fn count(&self) -> Result<usize, CatalogError> {
        Ok(self.list()?.len())
    }

    fn search_by_title(&self, title: &str) -> Result<Vec<Book>, CatalogError> {
        Ok(query::search_by_title(self.list()?, title))
    }

    fn filter_by_price(&self, range: PriceRange) -> Result<Vec<Book>, CatalogError> {
        Ok(query::filter_by_price(self.list()?, range))
    }

    fn sorted(&self, sort: SortSpec) -> Result<Vec<Book>, CatalogError> {
        Ok(sort.apply(self.list()?))
    }

    fn page(&self, page: Page) -> Result<Vec<Book>, CatalogError> {
        Ok(page.apply(self.list()?))
    }

    fn query(&self, query: &AdvancedQuery) -> Result<Vec<Book>, CatalogError> {
        Ok(query.run(self.list()?))
    }
}
