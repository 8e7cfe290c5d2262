//! Ledger module - entry domain model and adjustment classification.

mod adjustment;
mod ledger_model;

// Re-export the public interface
pub use adjustment::classify_adjustment;
pub use ledger_model::{EntryCategory, EntrySubCategory, LedgerEntry, NewLedgerEntry};

#[cfg(test)]
mod adjustment_tests;
