use std::sync::{Arc, RwLock};

use tracing::{debug, info};

use super::{BookRepository, DeleteOutcome};
use crate::book::{Book, BookId, BookPatch, NewBook};
use crate::error::CatalogError;
use crate::seed;

/// The collection and its identifier counter, guarded together.
struct Shelf {
    books: Vec<Book>,
    next_id: BookId,
}

impl Shelf {
    fn issue_id(&mut self) -> BookId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn position(&self, id: BookId) -> Option<usize> {
        self.books.iter().position(|book| book.id == id)
    }
}

/// In-memory catalog backed by a `Vec` under one `RwLock`.
///
/// Every call takes the lock once, so each operation sees and mutates a
/// single consistent state. Clone-friendly via Arc; clones share storage.
#[derive(Clone)]
pub struct InMemoryBookRepository {
    shelf: Arc<RwLock<Shelf>>,
}

impl Default for InMemoryBookRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryBookRepository {
    /// Create an empty catalog whose first issued identifier is 1.
    pub fn new() -> Self {
        Self {
            shelf: Arc::new(RwLock::new(Shelf {
                books: Vec::new(),
                next_id: 1,
            })),
        }
    }

    /// Create a catalog pre-populated with `books`, numbered from 1 in order.
    pub fn with_books<I>(books: I) -> Self
    where
        I: IntoIterator<Item = NewBook>,
    {
        let mut shelf = Shelf {
            books: Vec::new(),
            next_id: 1,
        };
        for book in books {
            let id = shelf.issue_id();
            shelf.books.push(book.into_book(id));
        }
        info!(books = shelf.books.len(), "catalog initialized");
        Self {
            shelf: Arc::new(RwLock::new(shelf)),
        }
    }

    /// Create a catalog holding the fifteen sample books.
    pub fn with_sample_books() -> Self {
        Self::with_books(seed::sample_books())
    }
}

impl BookRepository for InMemoryBookRepository {
    fn list(&self) -> Result<Vec<Book>, CatalogError> {
        let shelf = self
            .shelf
            .read()
            .map_err(|_| CatalogError::LockPoisoned("read"))?;
        Ok(shelf.books.clone())
    }

    fn get(&self, id: BookId) -> Result<Option<Book>, CatalogError> {
        let shelf = self
            .shelf
            .read()
            .map_err(|_| CatalogError::LockPoisoned("read"))?;
        Ok(shelf.books.iter().find(|book| book.id == id).cloned())
    }

    fn create(&self, book: NewBook) -> Result<Vec<Book>, CatalogError> {
        let mut shelf = self
            .shelf
            .write()
            .map_err(|_| CatalogError::LockPoisoned("write"))?;
        let id = shelf.issue_id();
        if let Some(requested) = book.id.filter(|requested| *requested != id) {
            debug!(requested, assigned = id, "ignoring caller-supplied book id");
        }
        shelf.books.push(book.into_book(id));
        debug!(id, "book created");
        Ok(shelf.books.clone())
    }

    fn update(&self, id: BookId, replacement: NewBook) -> Result<Option<Book>, CatalogError> {
        let mut shelf = self
            .shelf
            .write()
            .map_err(|_| CatalogError::LockPoisoned("write"))?;
        let Some(index) = shelf.position(id) else {
            return Ok(None);
        };
        let book = replacement.into_book(id);
        shelf.books[index] = book.clone();
        debug!(id, "book replaced");
        Ok(Some(book))
    }

    fn patch(&self, id: BookId, patch: BookPatch) -> Result<Option<Book>, CatalogError> {
        let mut shelf = self
            .shelf
            .write()
            .map_err(|_| CatalogError::LockPoisoned("write"))?;
        let Some(index) = shelf.position(id) else {
            return Ok(None);
        };
        let book = shelf.books[index].merged(&patch);
        shelf.books[index] = book.clone();
        debug!(id, "book patched");
        Ok(Some(book))
    }

    fn delete(&self, id: BookId) -> Result<DeleteOutcome, CatalogError> {
        let mut shelf = self
            .shelf
            .write()
            .map_err(|_| CatalogError::LockPoisoned("write"))?;
        match shelf.position(id) {
            Some(index) => {
                shelf.books.remove(index);
                debug!(id, "book deleted");
                Ok(DeleteOutcome::Deleted)
            }
            None => Ok(DeleteOutcome::NotFound),
        }
    }

    fn count(&self) -> Result<usize, CatalogError> {
        let shelf = self
            .shelf
            .read()
            .map_err(|_| CatalogError::LockPoisoned("read"))?;
        Ok(shelf.books.len())
    }
}
