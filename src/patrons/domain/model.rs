use serde::{Deserialize, Serialize};

// PatronEntity abstracts a registered library member. The fine balance only
// accumulates; no operation reduces it.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct PatronEntity {
    pub patron_id: i64,
    pub name: String,
    pub fine_balance: i64,
}

impl PatronEntity {
    pub fn new(patron_id: i64, name: &str) -> Self {
        Self {
            patron_id,
            name: name.to_string(),
            fine_balance: 0,
        }
    }

    pub fn add_fine(&mut self, fine: i64) {
        self.fine_balance += fine;
    }
}
