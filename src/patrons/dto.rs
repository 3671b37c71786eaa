use std::fmt;
use std::fmt::{Display, Formatter};
use serde::{Deserialize, Serialize};
use crate::patrons::domain::model::PatronEntity;

// PatronDto is a data transfer object for the patron surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatronDto {
    pub patron_id: i64,
    pub name: String,
    pub fine_balance: i64,
}

impl PatronDto {
    pub fn new(patron_id: i64, name: &str) -> Self {
        Self {
            patron_id,
            name: name.to_string(),
            fine_balance: 0,
        }
    }
}

impl From<&PatronEntity> for PatronDto {
    fn from(other: &PatronEntity) -> Self {
        Self {
            patron_id: other.patron_id,
            name: other.name.to_string(),
            fine_balance: other.fine_balance,
        }
    }
}

impl From<&PatronDto> for PatronEntity {
    fn from(other: &PatronDto) -> Self {
        Self {
            patron_id: other.patron_id,
            name: other.name.to_string(),
            fine_balance: other.fine_balance,
        }
    }
}

impl Display for PatronDto {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} (ID: {}), Fines: ${}", self.name, self.patron_id, self.fine_balance)
    }
}

#[cfg(test)]
mod tests {
    use crate::patrons::domain::model::PatronEntity;
    use crate::patrons::dto::PatronDto;

    #[tokio::test]
    async fn test_should_build_patron_dto() {
        let patron = PatronDto::new(1, "Felipe Toro");
        assert_eq!(1, patron.patron_id);
        assert_eq!(0, patron.fine_balance);
    }

    #[tokio::test]
    async fn test_should_convert_patron_entity() {
        let entity = PatronEntity::new(1, "Felipe Toro");
        let dto = PatronDto::from(&entity);
        assert_eq!(entity, PatronEntity::from(&dto));
    }

    #[tokio::test]
    async fn test_should_format_patron() {
        let patron = PatronDto::new(1, "Felipe Toro");
        assert_eq!("Felipe Toro (ID: 1), Fines: $0", patron.to_string());
    }
}
