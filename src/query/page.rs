use crate::book::Book;

/// A skip/take window: skip `index * size` records, then take up to `size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub index: i64,
    pub size: i64,
}

impl Page {
    pub const DEFAULT_INDEX: i64 = 0;
    pub const DEFAULT_SIZE: i64 = 5;

    pub fn new(index: i64, size: i64) -> Self {
        Self { index, size }
    }

    /// Number of records skipped. Negative products clamp to zero.
    pub fn offset(&self) -> usize {
        let skip = self.index.saturating_mul(self.size).max(0);
        usize::try_from(skip).unwrap_or(usize::MAX)
    }

    /// Maximum number of records taken. Zero or negative sizes take nothing.
    pub fn limit(&self) -> usize {
        usize::try_from(self.size.max(0)).unwrap_or(usize::MAX)
    }

    pub fn apply(&self, books: Vec<Book>) -> Vec<Book> {
        books
            .into_iter()
            .skip(self.offset())
            .take(self.limit())
            .collect()
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INDEX, Self::DEFAULT_SIZE)
    }
}
