use std::sync::Arc;
use crate::catalog::factory::create_book_repository;
use crate::circulation::domain::LibraryService;
use crate::circulation::domain::service::LibraryServiceImpl;
use crate::core::domain::Configuration;
use crate::core::repository::RepositoryStore;
use crate::utils::clock::SystemClock;

pub fn create_library_service(config: &Configuration, store: RepositoryStore) -> Box<dyn LibraryService> {
    let catalog = create_book_repository(store);
    Box::new(LibraryServiceImpl::new(config, catalog, Arc::new(SystemClock)))
}

#[cfg(test)]
mod tests {
    use crate::books::dto::BookDto;
    use crate::circulation::factory::create_library_service;
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;
    use crate::patrons::dto::PatronDto;

    #[tokio::test]
    async fn test_should_create_library_service() {
        let svc = create_library_service(&Configuration::new("test"), RepositoryStore::Memory);
        svc.register_patron(&PatronDto::new(2, "Sebastian")).await.expect("should register patron");
        svc.add_book(&BookDto::new(30, "1984", "George Orwell")).await.expect("should add book");

        let loan = svc.lend(2, 30).await.expect("should lend book");
        assert_eq!(30, loan.book_id);
        let receipt = svc.return_loan(2, 30).await.expect("should return book");
        assert_eq!(0, receipt.fine);
    }
}
