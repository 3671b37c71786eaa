use serde::{Deserialize, Serialize};

// Configuration abstracts circulation policy knobs for the library system
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub branch_id: String,
    pub grace_period_days: i64,
    pub daily_fine: i64,
}

impl Configuration {
    pub fn new(branch_id: &str) -> Self {
        Configuration {
            branch_id: branch_id.to_string(),
            grace_period_days: 7,
            daily_fine: 500,
        }
    }
}
