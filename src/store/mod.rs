//! Store module - data-access contract and the in-memory reference store.

mod memory_store;
mod store_traits;

// Re-export the public interface
pub use memory_store::MemoryDataStore;
pub use store_traits::DataStoreTrait;
