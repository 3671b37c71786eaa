use std::collections::HashMap;
use std::sync::Arc;
use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::info;
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::catalog::repository::BookRepository;
use crate::circulation::domain::LibraryService;
use crate::circulation::domain::model::LoanEntity;
use crate::circulation::dto::{LoanDto, ReturnReceipt};
use crate::core::domain::Configuration;
use crate::core::library::{BookStatus, LibraryError, LibraryResult};
use crate::patrons::domain::model::PatronEntity;
use crate::patrons::dto::PatronDto;
use crate::utils::clock::Clock;

struct CirculationState {
    catalog: Box<dyn BookRepository>,
    patrons: Vec<PatronEntity>,
    loans: Vec<LoanEntity>,
}

// LibraryServiceImpl orchestrates patrons, the book catalog and the loan
// list. A single lock guards the combined state so that lend and return stay
// atomic with respect to availability checks, which keeps the "at most one
// pending loan per book" invariant.
pub struct LibraryServiceImpl {
    config: Configuration,
    clock: Arc<dyn Clock>,
    state: Mutex<CirculationState>,
}

impl LibraryServiceImpl {
    pub fn new(config: &Configuration, catalog: Box<dyn BookRepository>,
               clock: Arc<dyn Clock>) -> Self {
        Self {
            config: config.clone(),
            clock,
            state: Mutex::new(CirculationState {
                catalog,
                patrons: Vec::new(),
                loans: Vec::new(),
            }),
        }
    }
}

#[async_trait]
impl LibraryService for LibraryServiceImpl {
    async fn register_patron(&self, patron: &PatronDto) -> LibraryResult<()> {
        let mut state = self.state.lock().await;
        state.patrons.push(PatronEntity::from(patron));
        Ok(())
    }

    async fn add_book(&self, book: &BookDto) -> LibraryResult<()> {
        let state = self.state.lock().await;
        state.catalog.add(&BookEntity::from(book)).await
    }

    async fn search_books(&self, query: &str) -> LibraryResult<Vec<BookDto>> {
        let state = self.state.lock().await;
        let found = state.catalog.search(query).await?;
        Ok(found.iter().map(BookDto::from).collect())
    }

    async fn lend(&self, patron_id: i64, book_id: i64) -> LibraryResult<LoanDto> {
        let mut state = self.state.lock().await;
        let patron_name = state.patrons.iter()
            .find(|p| p.patron_id == patron_id)
            .map(|p| p.name.to_string())
            .ok_or_else(|| LibraryError::not_found(
                format!("patron with id {} not registered", patron_id).as_str()))?;
        let book = state.catalog.find_by_id(book_id).await?;
        if !book.is_available() {
            return Err(LibraryError::validation(
                format!("book {} is not available", book_id).as_str(), Some("400".to_string())));
        }
        let loan = LoanEntity::new(patron_id, book_id, self.clock.now());
        state.catalog.mark_status(book_id, BookStatus::Loaned).await?;
        state.loans.push(loan.clone());
        info!("book {} lent to patron {}", book_id, patron_id);
        Ok(LoanDto::from_loan(&loan, patron_name.as_str(), book.title.as_str(), 0))
    }

    async fn return_loan(&self, patron_id: i64, book_id: i64) -> LibraryResult<ReturnReceipt> {
        let mut state = self.state.lock().await;
        let now = self.clock.now();
        let ndx = state.loans.iter()
            .position(|l| l.patron_id == patron_id && l.book_id == book_id && l.is_pending())
            .ok_or_else(|| LibraryError::not_found(
                format!("no pending loan for patron {} and book {}", patron_id, book_id).as_str()))?;
        // resolve every lookup before mutating so a failure leaves no side effects
        let patron_ndx = state.patrons.iter()
            .position(|p| p.patron_id == patron_id)
            .ok_or_else(|| LibraryError::not_found(
                format!("patron with id {} not registered", patron_id).as_str()))?;
        let book = state.catalog.find_by_id(book_id).await?;
        state.loans[ndx].mark_returned(now);
        state.catalog.mark_status(book_id, BookStatus::Available).await?;
        let loan = state.loans[ndx].clone();
        let fine = loan.fine_as_of(now, &self.config);
        let patron = &mut state.patrons[patron_ndx];
        patron.add_fine(fine);
        let patron_name = patron.name.to_string();
        info!("book {} returned by patron {} with fine {}", book_id, patron_id, fine);
        Ok(ReturnReceipt {
            loan: LoanDto::from_loan(&loan, patron_name.as_str(), book.title.as_str(), fine),
            fine,
        })
    }

    async fn list_patrons(&self) -> LibraryResult<Vec<PatronDto>> {
        let state = self.state.lock().await;
        Ok(state.patrons.iter().map(PatronDto::from).collect())
    }

    async fn list_books(&self) -> LibraryResult<Vec<BookDto>> {
        let state = self.state.lock().await;
        let books = state.catalog.list().await?;
        Ok(books.iter().map(BookDto::from).collect())
    }

    async fn list_loans(&self) -> LibraryResult<Vec<LoanDto>> {
        let state = self.state.lock().await;
        let now = self.clock.now();
        let mut titles = HashMap::new();
        for book in state.catalog.list().await? {
            titles.entry(book.book_id).or_insert(book.title);
        }
        let mut names = HashMap::new();
        for patron in state.patrons.iter() {
            names.entry(patron.patron_id).or_insert(patron.name.to_string());
        }
        Ok(state.loans.iter()
            .map(|loan| {
                let name = names.get(&loan.patron_id).cloned().unwrap_or_default();
                let title = titles.get(&loan.book_id).cloned().unwrap_or_default();
                LoanDto::from_loan(loan, name.as_str(), title.as_str(),
                                   loan.fine_as_of(now, &self.config))
            })
            .collect())
    }
}
