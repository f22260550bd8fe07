//! CRUD behavior of the in-memory catalog.

use book_catalog::{BookPatch, BookRepository, DeleteOutcome, InMemoryBookRepository, NewBook};

use crate::support::{ids, sample_repo};

#[test]
fn list_returns_insertion_order() {
    let repo = sample_repo();
    let books = repo.list().unwrap();
    assert_eq!(books.len(), 15);
    assert_eq!(ids(&books), (1..=15).collect::<Vec<i64>>());
    assert_eq!(books[0].title, "Spring Boot in Action");
    assert_eq!(books[14].title, "Automate the Boring Stuff");
}

#[test]
fn get_finds_existing_book() {
    let repo = sample_repo();
    let book = repo.get(3).unwrap().unwrap();
    assert_eq!(book.title, "Clean Code");
    assert_eq!(book.author, "Robert Martin");
    assert_eq!(book.price, 42.50);
}

#[test]
fn get_missing_book_is_none() {
    let repo = sample_repo();
    assert!(repo.get(999).unwrap().is_none());
    assert!(repo.get(0).unwrap().is_none());
}

#[test]
fn create_then_get_round_trips_fields() {
    let repo = sample_repo();
    let books = repo
        .create(NewBook::new("Programming Rust", "Jim Blandy", 59.99))
        .unwrap();
    assert_eq!(books.len(), 16);

    let created = books.last().unwrap().clone();
    let fetched = repo.get(created.id).unwrap().unwrap();
    assert_eq!(fetched, created);
    assert_eq!(fetched.title, "Programming Rust");
    assert_eq!(fetched.author, "Jim Blandy");
    assert_eq!(fetched.price, 59.99);
}

#[test]
fn create_ignores_caller_supplied_id() {
    let repo = sample_repo();
    let mut body = NewBook::new("Duplicate", "Someone", 1.0);
    body.id = Some(3);

    let books = repo.create(body).unwrap();
    let created = books.last().unwrap();
    assert_eq!(created.id, 16);
    assert_eq!(repo.get(3).unwrap().unwrap().title, "Clean Code");
}

#[test]
fn ids_are_never_reused_after_delete() {
    let repo = sample_repo();
    assert_eq!(repo.delete(15).unwrap(), DeleteOutcome::Deleted);

    let books = repo.create(NewBook::new("Next", "Writer", 5.0)).unwrap();
    let created = books.last().unwrap();
    assert_ne!(created.id, 15);
    assert_eq!(created.id, 16);
}

#[test]
fn ids_are_never_reused_in_empty_catalog() {
    let repo = InMemoryBookRepository::new();
    let first = repo.create(NewBook::new("One", "x", 1.0)).unwrap()[0].id;
    repo.delete(first).unwrap();

    let books = repo.create(NewBook::new("Two", "x", 2.0)).unwrap();
    assert_eq!(books.len(), 1);
    assert_ne!(books[0].id, first);
}

#[test]
fn update_replaces_and_forces_path_id() {
    let repo = sample_repo();
    let mut body = NewBook::new("Clean Code (2nd ed.)", "Robert C. Martin", 49.00);
    body.id = Some(42);

    let updated = repo.update(3, body).unwrap().unwrap();
    assert_eq!(updated.id, 3);
    assert_eq!(updated.title, "Clean Code (2nd ed.)");

    let stored = repo.get(3).unwrap().unwrap();
    assert_eq!(stored, updated);
    assert!(repo.get(42).unwrap().is_none());
    assert_eq!(repo.count().unwrap(), 15);
}

#[test]
fn update_missing_book_creates_nothing() {
    let repo = sample_repo();
    let result = repo.update(99, NewBook::new("Ghost", "Nobody", 1.0)).unwrap();
    assert!(result.is_none());
    assert_eq!(repo.count().unwrap(), 15);
    assert!(repo.get(99).unwrap().is_none());
}

#[test]
fn patch_price_only_leaves_other_fields() {
    let repo = sample_repo();
    let patched = repo
        .patch(2, BookPatch::default().price(30.00))
        .unwrap()
        .unwrap();

    assert_eq!(patched.id, 2);
    assert_eq!(patched.title, "Effective Java");
    assert_eq!(patched.author, "Joshua Bloch");
    assert_eq!(patched.price, 30.00);
    assert_eq!(repo.get(2).unwrap().unwrap(), patched);
}

#[test]
fn patch_title_and_author() {
    let repo = sample_repo();
    let patched = repo
        .patch(9, BookPatch::default().title("Refactoring, 2nd").author("M. Fowler"))
        .unwrap()
        .unwrap();

    assert_eq!(patched.title, "Refactoring, 2nd");
    assert_eq!(patched.author, "M. Fowler");
    assert_eq!(patched.price, 47.50);
}

#[test]
fn patch_missing_book_is_none() {
    let repo = sample_repo();
    assert!(repo
        .patch(77, BookPatch::default().price(1.0))
        .unwrap()
        .is_none());
}

#[test]
fn delete_removes_exactly_one() {
    let repo = sample_repo();
    assert_eq!(repo.delete(5).unwrap(), DeleteOutcome::Deleted);
    assert_eq!(repo.count().unwrap(), 14);
    assert!(repo.get(5).unwrap().is_none());

    let remaining = repo.list().unwrap();
    assert_eq!(ids(&remaining[3..5]), vec![4, 6]);
}

#[test]
fn delete_missing_book_reports_not_found() {
    let repo = sample_repo();
    let outcome = repo.delete(500).unwrap();
    assert_eq!(outcome, DeleteOutcome::NotFound);
    assert_ne!(outcome.message(), DeleteOutcome::Deleted.message());
    assert_eq!(repo.count().unwrap(), 15);
}

#[test]
fn delete_twice_reports_not_found_second_time() {
    let repo = sample_repo();
    assert_eq!(repo.delete(1).unwrap(), DeleteOutcome::Deleted);
    assert_eq!(repo.delete(1).unwrap(), DeleteOutcome::NotFound);
}

#[test]
fn negative_id_is_simply_absent() {
    let repo = sample_repo();
    assert!(repo.get(-1).unwrap().is_none());
    assert!(repo
        .update(-1, NewBook::new("Ghost", "Nobody", 1.0))
        .unwrap()
        .is_none());
    assert!(repo
        .patch(-1, BookPatch::default().price(1.0))
        .unwrap()
        .is_none());
    assert_eq!(repo.delete(-1).unwrap(), DeleteOutcome::NotFound);
    assert_eq!(repo.count().unwrap(), 15);
}
