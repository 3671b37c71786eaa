use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use crate::books::domain::model::BookEntity;
use crate::core::library::BookStatus;

// BookDto is a data transfer object for the catalog surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    pub book_id: i64,
    pub title: String,
    pub author: String,
    pub book_status: BookStatus,
}

impl BookDto {
    pub fn new(book_id: i64, title: &str, author: &str) -> BookDto {
        BookDto {
            book_id,
            title: title.to_string(),
            author: author.to_string(),
            book_status: BookStatus::Available,
        }
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            book_id: other.book_id,
            title: other.title.to_string(),
            author: other.author.to_string(),
            book_status: other.book_status,
        }
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        Self {
            book_id: other.book_id,
            title: other.title.to_string(),
            author: other.author.to_string(),
            book_status: other.book_status,
        }
    }
}

impl Display for BookDto {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) - {}", self.title, self.author, self.book_status)
    }
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::BookEntity;
    use crate::books::dto::BookDto;
    use crate::core::library::BookStatus;

    #[tokio::test]
    async fn test_should_build_book_dto() {
        let book = BookDto::new(2, "1984", "George Orwell");
        assert_eq!(2, book.book_id);
        assert_eq!(BookStatus::Available, book.book_status);
    }

    #[tokio::test]
    async fn test_should_convert_book_entity() {
        let entity = BookEntity::new(7, "Dune", "Frank Herbert");
        let dto = BookDto::from(&entity);
        assert_eq!(entity, BookEntity::from(&dto));
    }

    #[tokio::test]
    async fn test_should_format_book() {
        let book = BookDto::new(2, "1984", "George Orwell");
        assert_eq!("1984 (George Orwell) - Available", book.to_string());
    }
}
