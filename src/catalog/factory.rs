use crate::catalog::repository::BookRepository;
use crate::catalog::repository::memory_book_repository::MemoryBookRepository;
use crate::core::repository::RepositoryStore;

pub fn create_book_repository(store: RepositoryStore) -> Box<dyn BookRepository> {
    match store {
        RepositoryStore::Memory => {
            Box::new(MemoryBookRepository::new())
        }
    }
}
