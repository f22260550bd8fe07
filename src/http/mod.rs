//! HTTP transport for the catalog.
//!
//! Requires the `http` feature. Uses axum for routing.
//!
//! ## Routes
//!
//! - `GET /api/books` — every book in collection order.
//! - `POST /api/books` — create a book; responds with the whole collection.
//! - `GET|PUT|PATCH|DELETE /api/books/:id` — lookup, replace, patch, remove.
//! - `GET /api/books/search?title=` — case-insensitive title search.
//! - `GET /api/books/price-range?minPrice=&maxPrice=` — inclusive price filter.
//! - `GET /api/books/sorted?sortBy=&order=` — ordered by title or author.
//! - `GET /api/books/paged?indexOfPage=&itemsPerPage=` — a page of the collection.
//! - `GET /api/books/advanced?...` — filter, sort and page combined.
//! - `GET /health` — `{ "ok": true, "books": <count> }`.
//!
//! Every failure, including extractor rejections, answers with
//! `{ "error": <message> }`. Delete answers with `{ "message": .. }` either way.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use book_catalog::{http, InMemoryBookRepository};
//!
//! let repo = Arc::new(InMemoryBookRepository::with_sample_books());
//!
//! // Get the router to compose with other axum routes
//! let app = http::router(repo.clone());
//!
//! // Or serve directly
//! http::serve(repo, "0.0.0.0:8080").await?;
//! ```

mod error;
mod params;

pub use error::ApiError;
pub use params::{AdvancedParams, PageParams, PriceRangeParams, SearchParams, SortParams};

use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use tracing::{debug, info};

use crate::book::{Book, BookId, BookPatch, NewBook};
use crate::query::{AdvancedQuery, Page, PriceRange, SortSpec};
use crate::repository::{BookRepository, DeleteOutcome};

/// Build an axum `Router` serving the catalog held by `repo`.
pub fn router<R: BookRepository + 'static>(repo: Arc<R>) -> Router {
    Router::new()
        .route("/health", get(health_handler::<R>))
        .route(
            "/api/books",
            get(list_handler::<R>).post(create_handler::<R>),
        )
        .route("/api/books/search", get(search_handler::<R>))
        .route("/api/books/price-range", get(price_range_handler::<R>))
        .route("/api/books/sorted", get(sorted_handler::<R>))
        .route("/api/books/paged", get(paged_handler::<R>))
        .route("/api/books/advanced", get(advanced_handler::<R>))
        .route(
            "/api/books/:id",
            get(get_handler::<R>)
                .put(update_handler::<R>)
                .patch(patch_handler::<R>)
                .delete(delete_handler::<R>),
        )
        .with_state(repo)
}

/// Serve the catalog over HTTP at the given address (e.g. `"0.0.0.0:8080"`).
pub async fn serve<R: BookRepository + 'static>(
    repo: Arc<R>,
    addr: &str,
) -> Result<(), std::io::Error> {
    let app = router(repo);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "catalog listening");
    axum::serve(listener, app).await
}

/// `GET /health`
async fn health_handler<R: BookRepository + 'static>(
    State(repo): State<Arc<R>>,
) -> Result<impl IntoResponse, ApiError> {
    let books = repo.count()?;
    Ok(Json(json!({ "ok": true, "books": books })))
}

/// `GET /api/books`
async fn list_handler<R: BookRepository + 'static>(
    State(repo): State<Arc<R>>,
) -> Result<Json<Vec<Book>>, ApiError> {
    debug!("list books");
    Ok(Json(repo.list()?))
}

/// `GET /api/books/:id`
async fn get_handler<R: BookRepository + 'static>(
    State(repo): State<Arc<R>>,
    path: Result<Path<BookId>, PathRejection>,
) -> Result<Json<Book>, ApiError> {
    let Path(id) = path?;
    debug!(id, "get book");
    repo.get(id)?.map(Json).ok_or(ApiError::NotFound(id))
}

/// `POST /api/books`
async fn create_handler<R: BookRepository + 'static>(
    State(repo): State<Arc<R>>,
    body: Result<Json<NewBook>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(book) = body?;
    debug!(title = %book.title, "create book");
    let books = repo.create(book)?;
    Ok((StatusCode::CREATED, Json(books)))
}

/// `GET /api/books/search`
async fn search_handler<R: BookRepository + 'static>(
    State(repo): State<Arc<R>>,
    query: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<Vec<Book>>, ApiError> {
    let Query(params) = query?;
    debug!(title = %params.title, "search books");
    Ok(Json(repo.search_by_title(&params.title)?))
}

/// `GET /api/books/price-range`
async fn price_range_handler<R: BookRepository + 'static>(
    State(repo): State<Arc<R>>,
    query: Result<Query<PriceRangeParams>, QueryRejection>,
) -> Result<Json<Vec<Book>>, ApiError> {
    let Query(params) = query?;
    let range = PriceRange::from(params);
    debug!(min = ?range.min, max = ?range.max, "filter books by price");
    Ok(Json(repo.filter_by_price(range)?))
}

/// `GET /api/books/sorted`
async fn sorted_handler<R: BookRepository + 'static>(
    State(repo): State<Arc<R>>,
    query: Result<Query<SortParams>, QueryRejection>,
) -> Result<Json<Vec<Book>>, ApiError> {
    let Query(params) = query?;
    let sort = SortSpec::from(params);
    debug!(field = ?sort.field, direction = ?sort.direction, "sort books");
    Ok(Json(repo.sorted(sort)?))
}

/// `GET /api/books/paged`
async fn paged_handler<R: BookRepository + 'static>(
    State(repo): State<Arc<R>>,
    query: Result<Query<PageParams>, QueryRejection>,
) -> Result<Json<Vec<Book>>, ApiError> {
    let Query(params) = query?;
    let page = Page::from(params);
    debug!(index = page.index, size = page.size, "page books");
    Ok(Json(repo.page(page)?))
}

/// `GET /api/books/advanced`
async fn advanced_handler<R: BookRepository + 'static>(
    State(repo): State<Arc<R>>,
    query: Result<Query<AdvancedParams>, QueryRejection>,
) -> Result<Json<Vec<Book>>, ApiError> {
    let Query(params) = query?;
    let query = AdvancedQuery::from(params);
    debug!(?query, "advanced book query");
    Ok(Json(repo.query(&query)?))
}

/// `PUT /api/books/:id`
async fn update_handler<R: BookRepository + 'static>(
    State(repo): State<Arc<R>>,
    path: Result<Path<BookId>, PathRejection>,
    body: Result<Json<NewBook>, JsonRejection>,
) -> Result<Json<Book>, ApiError> {
    let Path(id) = path?;
    let Json(replacement) = body?;
    debug!(id, "replace book");
    repo.update(id, replacement)?
        .map(Json)
        .ok_or(ApiError::NotFound(id))
}

/// `PATCH /api/books/:id`
async fn patch_handler<R: BookRepository + 'static>(
    State(repo): State<Arc<R>>,
    path: Result<Path<BookId>, PathRejection>,
    body: Result<Json<BookPatch>, JsonRejection>,
) -> Result<Json<Book>, ApiError> {
    let Path(id) = path?;
    let Json(patch) = body?;
    debug!(id, "patch book");
    repo.patch(id, patch)?
        .map(Json)
        .ok_or(ApiError::NotFound(id))
}

/// `DELETE /api/books/:id`: 200 when removed, 404 with a distinct message
/// when there was nothing to remove.
async fn delete_handler<R: BookRepository + 'static>(
    State(repo): State<Arc<R>>,
    path: Result<Path<BookId>, PathRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Path(id) = path?;
    debug!(id, "delete book");
    let outcome = repo.delete(id)?;
    let status = match outcome {
        DeleteOutcome::Deleted => StatusCode::OK,
        DeleteOutcome::NotFound => StatusCode::NOT_FOUND,
    };
    Ok((status, Json(json!({ "message": outcome.message() }))))
}
