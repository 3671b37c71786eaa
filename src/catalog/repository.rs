pub mod memory_book_repository;

use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::core::library::{BookStatus, LibraryResult};

#[async_trait]
pub trait BookRepository: Sync + Send {
    // appends a book to the collection; duplicate ids are the caller's problem
    async fn add(&self, book: &BookEntity) -> LibraryResult<()>;

    // case-insensitive substring match over title and author, in insertion
    // order; the empty query matches every book
    async fn search(&self, query: &str) -> LibraryResult<Vec<BookEntity>>;

    // first book with the given id, whatever its status
    async fn find_by_id(&self, book_id: i64) -> LibraryResult<BookEntity>;

    // flips the availability of the first book with the given id
    async fn mark_status(&self, book_id: i64, status: BookStatus) -> LibraryResult<()>;

    // all books in insertion order
    async fn list(&self) -> LibraryResult<Vec<BookEntity>>;
}
