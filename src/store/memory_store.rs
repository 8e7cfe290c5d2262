//! In-memory reference implementation of the data-access contract.
//!
//! Backs the test suite and embedders that run without an external store.
//! Mirrors the single-writer discipline of the real persistence layer: all
//! mutation happens inside a scoped write transaction, and a write attempted
//! while a transaction is already open no-ops instead of interleaving.

use log::{debug, warn};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use crate::accounts::{Account, AccountDerived};
use crate::errors::Result;
use crate::holdings::HoldingDerived;
use crate::store::store_traits::DataStoreTrait;

#[derive(Default)]
pub struct MemoryDataStore {
    accounts: RwLock<HashMap<String, Account>>,
    /// Re-entrancy guard for the scoped write transaction.
    transaction_open: AtomicBool,
}

impl MemoryDataStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `f` inside the scoped write transaction. Returns `None` when a
    /// transaction is already open (re-entrant mutation is disallowed).
    pub(crate) fn with_write_transaction<T>(
        &self,
        f: impl FnOnce(&mut HashMap<String, Account>) -> T,
    ) -> Option<T> {
        if self.transaction_open.swap(true, Ordering::Acquire) {
            warn!("Write transaction already open; mutation skipped");
            return None;
        }
        let result = {
            let mut accounts = self.accounts.write().unwrap();
            f(&mut accounts)
        };
        self.transaction_open.store(false, Ordering::Release);
        Some(result)
    }
}

impl DataStoreTrait for MemoryDataStore {
    fn get_account(&self, account_id: &str) -> Result<Option<Account>> {
        Ok(self.accounts.read().unwrap().get(account_id).cloned())
    }

    fn list_accounts(&self) -> Result<Vec<Account>> {
        let accounts = self.accounts.read().unwrap();
        let mut list: Vec<Account> = accounts.values().cloned().collect();
        list.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        Ok(list)
    }

    fn save_account(&self, account: Account) -> Result<()> {
        self.with_write_transaction(|accounts| {
            accounts.insert(account.id.clone(), account);
        });
        Ok(())
    }

    fn delete_account(&self, account_id: &str) -> Result<bool> {
        Ok(self
            .with_write_transaction(|accounts| accounts.remove(account_id).is_some())
            .unwrap_or(false))
    }

    fn update_holding_derived(
        &self,
        account_id: &str,
        holding_name: &str,
        derived: HoldingDerived,
    ) -> Result<bool> {
        let written = self.with_write_transaction(|accounts| {
            let Some(account) = accounts.get_mut(account_id) else {
                // Target vanished mid-recompute; abandon the write silently.
                warn!(
                    "Account {} no longer exists; holding write abandoned",
                    account_id
                );
                return false;
            };
            let Some(holding) = account.holding_mut(holding_name) else {
                warn!(
                    "Holding '{}' no longer exists on account {}; write abandoned",
                    holding_name, account_id
                );
                return false;
            };
            if holding.derived == derived {
                debug!(
                    "Holding '{}' derived fields unchanged; write skipped",
                    holding_name
                );
                return false;
            }
            holding.derived = derived;
            true
        });
        Ok(written.unwrap_or(false))
    }

    fn update_account_derived(&self, account_id: &str, derived: AccountDerived) -> Result<bool> {
        let written = self.with_write_transaction(|accounts| {
            let Some(account) = accounts.get_mut(account_id) else {
                warn!(
                    "Account {} no longer exists; account write abandoned",
                    account_id
                );
                return false;
            };
            if account.derived == derived {
                debug!(
                    "Account {} derived fields unchanged; write skipped",
                    account_id
                );
                return false;
            }
            account.derived = derived;
            true
        });
        Ok(written.unwrap_or(false))
    }
}
