use std::sync::Mutex;
use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::catalog::repository::BookRepository;
use crate::core::library::{BookStatus, LibraryError, LibraryResult};

// MemoryBookRepository keeps the catalog in a mutex-guarded vector, in
// insertion order.
pub struct MemoryBookRepository {
    books: Mutex<Vec<BookEntity>>,
}

impl MemoryBookRepository {
    pub fn new() -> Self {
        Self {
            books: Mutex::new(Vec::new()),
        }
    }

    fn locked(&self) -> LibraryResult<std::sync::MutexGuard<'_, Vec<BookEntity>>> {
        self.books.lock().map_err(|e| {
            LibraryError::runtime(format!("catalog lock poisoned {:?}", e).as_str(), None)
        })
    }
}

impl Default for MemoryBookRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookRepository for MemoryBookRepository {
    async fn add(&self, book: &BookEntity) -> LibraryResult<()> {
        let mut books = self.locked()?;
        books.push(book.clone());
        Ok(())
    }

    async fn search(&self, query: &str) -> LibraryResult<Vec<BookEntity>> {
        let needle = query.to_lowercase();
        let books = self.locked()?;
        Ok(books.iter()
            .filter(|b| b.title.to_lowercase().contains(needle.as_str())
                || b.author.to_lowercase().contains(needle.as_str()))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, book_id: i64) -> LibraryResult<BookEntity> {
        let books = self.locked()?;
        books.iter()
            .find(|b| b.book_id == book_id)
            .cloned()
            .ok_or_else(|| LibraryError::not_found(
                format!("book with id {} not found", book_id).as_str()))
    }

    async fn mark_status(&self, book_id: i64, status: BookStatus) -> LibraryResult<()> {
        let mut books = self.locked()?;
        match books.iter_mut().find(|b| b.book_id == book_id) {
            Some(book) => {
                book.book_status = status;
                Ok(())
            }
            None => Err(LibraryError::not_found(
                format!("book with id {} not found", book_id).as_str())),
        }
    }

    async fn list(&self) -> LibraryResult<Vec<BookEntity>> {
        let books = self.locked()?;
        Ok(books.clone())
    }
}
