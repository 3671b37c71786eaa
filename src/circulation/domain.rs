use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::circulation::dto::{LoanDto, ReturnReceipt};
use crate::core::library::LibraryResult;
use crate::patrons::dto::PatronDto;

pub mod model;
pub mod service;

#[async_trait]
pub trait LibraryService: Sync + Send {
    async fn register_patron(&self, patron: &PatronDto) -> LibraryResult<()>;
    async fn add_book(&self, book: &BookDto) -> LibraryResult<()>;
    async fn search_books(&self, query: &str) -> LibraryResult<Vec<BookDto>>;
    async fn lend(&self, patron_id: i64, book_id: i64) -> LibraryResult<LoanDto>;
    async fn return_loan(&self, patron_id: i64, book_id: i64) -> LibraryResult<ReturnReceipt>;
    async fn list_patrons(&self) -> LibraryResult<Vec<PatronDto>>;
    async fn list_books(&self) -> LibraryResult<Vec<BookDto>>;
    async fn list_loans(&self) -> LibraryResult<Vec<LoanDto>>;
}
