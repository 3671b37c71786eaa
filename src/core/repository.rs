use serde::{Deserialize, Serialize};

// Selects the backing store for repositories. A persistent variant can be
// added here without touching the services that consume the repositories.
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub enum RepositoryStore {
    Memory,
}
