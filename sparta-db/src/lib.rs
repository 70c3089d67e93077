pub mod client;
pub mod memory;
mod record;
pub mod store;

pub use client::DbClient;
pub use memory::MemoryPostStore;
pub use store::{PostStore, Result, StorageError};
