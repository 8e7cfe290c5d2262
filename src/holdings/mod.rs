//! Holdings module - holding aggregate and its derived cache.

mod holdings_model;

// Re-export the public interface
pub use holdings_model::{Holding, HoldingDerived};
