//! Data-access contract between the aggregation core and persistence.
//!
//! The contract is deliberately narrow: the core never sees the store's sync
//! protocol, subscriptions, or conflict handling. Implementations must apply
//! derived-field writes inside a scoped single-writer transaction.

use crate::accounts::{Account, AccountDerived};
use crate::errors::Result;
use crate::holdings::HoldingDerived;

/// Contract for reading and writing account aggregates.
///
/// The `update_*_derived` write gates return `Ok(false)` without writing
/// when:
/// - no field actually changed (per-field value equality),
/// - the target was deleted concurrently (stale write, abandoned silently),
/// - a write transaction is already open (re-entrant recompute must no-op).
pub trait DataStoreTrait: Send + Sync {
    /// Looks up an account by id. `Ok(None)` is "not found", not an error;
    /// callers skip recomputation for missing targets.
    fn get_account(&self, account_id: &str) -> Result<Option<Account>>;

    fn list_accounts(&self) -> Result<Vec<Account>>;

    /// Replaces the stored account aggregate wholesale (entries and holdings
    /// included). Derived fields are carried as-is; they are recomputed by
    /// the pipeline afterwards.
    fn save_account(&self, account: Account) -> Result<()>;

    /// Removes an account. Returns whether it existed.
    fn delete_account(&self, account_id: &str) -> Result<bool>;

    /// Writes a holding's derived figures if they changed. See the trait
    /// docs for the `Ok(false)` cases.
    fn update_holding_derived(
        &self,
        account_id: &str,
        holding_name: &str,
        derived: HoldingDerived,
    ) -> Result<bool>;

    /// Writes an account's derived figures if they changed. See the trait
    /// docs for the `Ok(false)` cases.
    fn update_account_derived(&self, account_id: &str, derived: AccountDerived) -> Result<bool>;
}
