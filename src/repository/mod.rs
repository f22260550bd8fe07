mod in_memory;
mod repository;

pub use in_memory::InMemoryBookRepository;
pub use repository::{BookRepository, DeleteOutcome};
