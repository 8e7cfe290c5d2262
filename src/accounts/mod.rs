//! Accounts module - account aggregate, derived cache, and input models.

mod accounts_model;

// Re-export the public interface
pub use accounts_model::{Account, AccountDerived, NewAccount};
