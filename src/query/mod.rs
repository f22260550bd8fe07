//! Query composition over a snapshot of the catalog.
//!
//! Every function here is pure: it takes an owned `Vec<Book>` and returns a
//! new one, leaving the store untouched. The advanced query always runs in
//! the same order (filter, then sort, then page) so page boundaries are
//! computed over the final matching set.
//!
//! ## Example
//!
//! ```
//! use book_catalog::query::{AdvancedQuery, BookFilter, Page, PriceRange, SortField, SortSpec};
//! use book_catalog::Book;
//!
//! let books = vec![
//!     Book { id: 1, title: "A".into(), author: "x".into(), price: 10.0 },
//!     Book { id: 2, title: "B".into(), author: "x".into(), price: 20.0 },
//!     Book { id: 3, title: "C".into(), author: "x".into(), price: 30.0 },
//! ];
//!
//! let query = AdvancedQuery {
//!     filter: BookFilter { price: PriceRange::new(Some(15.0), None), ..Default::default() },
//!     sort: SortSpec::from_params("price", "desc", SortField::ALL),
//!     page: Page::new(0, 1),
//! };
//!
//! let page = query.run(books);
//! assert_eq!(page.len(), 1);
//! assert_eq!(page[0].title, "C");
//! ```

mod filter;
mod page;
mod sort;

pub use filter::{contains_ignore_case, filter_by_price, search_by_title, BookFilter, PriceRange};
pub use page::Page;
pub use sort::{SortDirection, SortField, SortSpec, FIELD_NAMES};

use crate::book::Book;

/// Filter, sort and page in one pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdvancedQuery {
    pub filter: BookFilter,
    pub sort: SortSpec,
    pub page: Page,
}

impl AdvancedQuery {
    pub fn run(&self, books: Vec<Book>) -> Vec<Book> {
        let matching = self.filter.apply(books);
        let ordered = self.sort.apply(matching);
        self.page.apply(ordered)
    }
}
