//! Token storage implementations.

mod file_token_storage;
mod memory_token_storage;

pub use file_token_storage::{FileTokenStorage, SCHEMA_VERSION};
pub use memory_token_storage::InMemoryTokenStorage;
