//! Two-phase recompute pipeline and entry save/remove operations.

use chrono::Utc;
use log::debug;
use std::sync::Arc;

use crate::accounts::{Account, NewAccount};
use crate::errors::Result;
use crate::holdings::Holding;
use crate::ledger::{classify_adjustment, EntryCategory, EntrySubCategory, LedgerEntry};
use crate::portfolio::account_aggregator::aggregate_account;
use crate::portfolio::checksum::{compute_account_checksum, compute_entries_checksum};
use crate::portfolio::holding_aggregator::{aggregate_holding, gather_holding_entries};
use crate::portfolio::overview::{overall_summary, overall_value_history, OverviewSummary};
use crate::portfolio::series::SeriesPoint;
use crate::store::DataStoreTrait;

/// Orchestrates aggregation over a data store.
///
/// Recomputation is explicit and ordered: all holdings of an account first,
/// then the account from the holdings' already-updated outputs. Every
/// recompute is checksum-gated, so unchanged entry sets cost one fingerprint
/// and no write.
pub struct PortfolioService {
    store: Arc<dyn DataStoreTrait>,
}

impl PortfolioService {
    pub fn new(store: Arc<dyn DataStoreTrait>) -> Self {
        Self { store }
    }

    /// Creates and persists a new, empty account.
    pub fn create_account(&self, new_account: NewAccount) -> Result<Account> {
        let account = new_account.build()?;
        self.store.save_account(account.clone())?;
        Ok(account)
    }

    /// Recomputes one holding's derived figures. Returns whether anything
    /// was written. Missing account or holding is "not found": the recompute
    /// is skipped, never an error.
    pub fn recompute_holding(&self, account_id: &str, holding_name: &str) -> Result<bool> {
        let Some(account) = self.store.get_account(account_id)? else {
            debug!("Account {} not found; recompute skipped", account_id);
            return Ok(false);
        };
        let Some(holding) = account.holding(holding_name) else {
            debug!(
                "Holding '{}' not found on account {}; recompute skipped",
                holding_name, account_id
            );
            return Ok(false);
        };

        let entries = gather_holding_entries(holding, &account.entries);
        let checksum = compute_entries_checksum(&entries);
        if checksum == holding.derived.checksum {
            debug!(
                "Holding '{}' checksum unchanged; recompute skipped",
                holding_name
            );
            return Ok(false);
        }

        let mut derived = aggregate_holding(&entries);
        derived.checksum = checksum;
        self.store
            .update_holding_derived(account_id, holding_name, derived)
    }

    /// Recomputes an account: phase one refreshes every child holding, phase
    /// two folds the account from the holdings' fresh outputs. Returns
    /// whether the account's derived figures were written.
    pub fn recompute_account(&self, account_id: &str) -> Result<bool> {
        let Some(account) = self.store.get_account(account_id)? else {
            debug!("Account {} not found; recompute skipped", account_id);
            return Ok(false);
        };
        for holding in &account.holdings {
            self.recompute_holding(account_id, &holding.name)?;
        }

        // Reload to observe the holdings' freshly written derived figures.
        let Some(account) = self.store.get_account(account_id)? else {
            debug!("Account {} vanished mid-recompute; abandoned", account_id);
            return Ok(false);
        };
        let checksum = compute_account_checksum(&account.entries, &account.holdings);
        if checksum == account.derived.checksum {
            debug!("Account {} checksum unchanged; recompute skipped", account_id);
            return Ok(false);
        }

        let mut derived = aggregate_account(&account.entries, &account.holdings);
        derived.checksum = checksum;
        self.store.update_account_derived(account_id, derived)
    }

    /// Recomputes every account, e.g. before the overview rollup.
    pub fn recompute_all(&self) -> Result<()> {
        for account in self.store.list_accounts()? {
            self.recompute_account(&account.id)?;
        }
        Ok(())
    }

    /// Saves a ledger entry with whole-object replace semantics and triggers
    /// the two-phase recompute.
    ///
    /// Editing an adjustment entry re-classifies its sub-type against the
    /// previously persisted price/amount. A trading or dividend entry naming
    /// an unknown holding auto-creates it.
    pub fn save_entry(&self, mut entry: LedgerEntry) -> Result<()> {
        entry.validate()?;
        let account_id = entry.account_id.clone();
        let Some(mut account) = self.store.get_account(&account_id)? else {
            debug!("Account {} not found; entry not saved", account_id);
            return Ok(());
        };

        let previous = find_entry(&account, &entry.id).cloned();
        if entry.category == EntryCategory::Adjustment {
            if let Some(prev) = &previous {
                entry.sub_category = classify_adjustment(prev, &entry);
            }
        }
        if previous.is_some() {
            remove_entry_from(&mut account, &entry.id);
        }
        entry.updated_at = Utc::now();

        if let Some(name) = entry.holding_name.clone() {
            let creates_holding =
                entry.is_holding_entry() || entry.sub_category == EntrySubCategory::Dividend;
            if creates_holding && account.holding(&name).is_none() {
                debug!("Auto-creating holding '{}' on account {}", name, account_id);
                account.holdings.push(Holding::new(name));
            }
        }

        if entry.is_holding_entry() {
            // validate() guarantees the holding reference, and it was just
            // auto-created if unknown.
            if let Some(name) = entry.holding_name.clone() {
                if let Some(holding) = account.holding_mut(&name) {
                    holding.entries.push(entry);
                }
            }
        } else {
            account.entries.push(entry);
        }
        account.updated_at = Utc::now();

        self.store.save_account(account)?;
        self.recompute_account(&account_id)?;
        Ok(())
    }

    /// Removes a ledger entry by id and triggers the recompute. A missing
    /// entry is a no-op.
    pub fn remove_entry(&self, account_id: &str, entry_id: &str) -> Result<()> {
        let Some(mut account) = self.store.get_account(account_id)? else {
            debug!("Account {} not found; nothing removed", account_id);
            return Ok(());
        };
        if !remove_entry_from(&mut account, entry_id) {
            debug!("Entry {} not found on account {}", entry_id, account_id);
            return Ok(());
        }
        account.updated_at = Utc::now();
        self.store.save_account(account)?;
        self.recompute_account(account_id)?;
        Ok(())
    }

    /// Combined value history across all accounts (sparse event-date axis).
    pub fn overview_history(&self) -> Result<Vec<SeriesPoint>> {
        let accounts = self.store.list_accounts()?;
        Ok(overall_value_history(&accounts))
    }

    /// Scalar overview summary across all accounts.
    pub fn overview_summary(&self) -> Result<OverviewSummary> {
        let accounts = self.store.list_accounts()?;
        Ok(overall_summary(&accounts))
    }
}

fn find_entry<'a>(account: &'a Account, entry_id: &str) -> Option<&'a LedgerEntry> {
    account
        .entries
        .iter()
        .chain(account.holdings.iter().flat_map(|h| h.entries.iter()))
        .find(|e| e.id == entry_id)
}

fn remove_entry_from(account: &mut Account, entry_id: &str) -> bool {
    let before = account.entries.len();
    account.entries.retain(|e| e.id != entry_id);
    let mut removed = account.entries.len() != before;
    for holding in &mut account.holdings {
        let before = holding.entries.len();
        holding.entries.retain(|e| e.id != entry_id);
        removed |= holding.entries.len() != before;
    }
    removed
}
