//! Book records and the request bodies that create or change them.

use serde::{Deserialize, Serialize};

/// Store-assigned book identifier. Issued from a monotonically increasing
/// counter and never reused.
pub type BookId = i64;

/// A single catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub price: f64,
}

impl Book {
    /// Build a new value with every field present in `patch` laid over `self`.
    ///
    /// The identifier is never taken from the patch.
    pub fn merged(&self, patch: &BookPatch) -> Book {
        Book {
            id: self.id,
            title: patch.title.clone().unwrap_or_else(|| self.title.clone()),
            author: patch.author.clone().unwrap_or_else(|| self.author.clone()),
            price: patch.price.unwrap_or(self.price),
        }
    }
}

/// A full record body, used for create and full replacement.
///
/// `id` is accepted on the wire for compatibility but the store always
/// decides the identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBook {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<BookId>,
    pub title: String,
    pub author: String,
    pub price: f64,
}

impl NewBook {
    pub fn new(title: impl Into<String>, author: impl Into<String>, price: f64) -> Self {
        Self {
            id: None,
            title: title.into(),
            author: author.into(),
            price,
        }
    }

    /// Turn the body into a stored record under `id`, discarding any
    /// caller-supplied identifier.
    pub fn into_book(self, id: BookId) -> Book {
        Book {
            id,
            title: self.title,
            author: self.author,
            price: self.price,
        }
    }
}

/// A partial record body. Absent fields leave the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BookPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

impl BookPatch {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }
}
