//! The sample books a fresh catalog starts with.

use crate::book::NewBook;

pub fn sample_books() -> Vec<NewBook> {
    vec![
        NewBook::new("Spring Boot in Action", "Craig Walls", 39.99),
        NewBook::new("Effective Java", "Joshua Bloch", 45.00),
        NewBook::new("Clean Code", "Robert Martin", 42.50),
        NewBook::new("Java Concurrency in Practice", "Brian Goetz", 49.99),
        NewBook::new("Design Patterns", "Gang of Four", 54.99),
        NewBook::new("Head First Java", "Kathy Sierra", 35.00),
        NewBook::new("Spring in Action", "Craig Walls", 44.99),
        NewBook::new("Clean Architecture", "Robert Martin", 39.99),
        NewBook::new("Refactoring", "Martin Fowler", 47.50),
        NewBook::new("The Pragmatic Programmer", "Andrew Hunt", 41.99),
        NewBook::new("You Don't Know JS", "Kyle Simpson", 29.99),
        NewBook::new("JavaScript: The Good Parts", "Douglas Crockford", 32.50),
        NewBook::new("Eloquent JavaScript", "Marijn Haverbeke", 27.99),
        NewBook::new("Python Crash Course", "Eric Matthes", 38.00),
        NewBook::new("Automate the Boring Stuff", "Al Sweigart", 33.50),
    ]
}
