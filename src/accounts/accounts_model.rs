//! Account domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};
use crate::holdings::Holding;
use crate::ledger::LedgerEntry;
use crate::portfolio::SeriesPoint;

/// Domain model representing an account.
///
/// Owns its holdings plus the account-level ledger entries (plain cash
/// movements, dividends, loans). Trading and adjustment entries live on the
/// holdings they affect.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub name: String,
    pub currency: String,
    pub holdings: Vec<Holding>,
    /// Cash and loan entries, including holding-attributed dividends.
    pub entries: Vec<LedgerEntry>,
    /// Materialized aggregation cache; recomputed, never user-edited.
    #[serde(default)]
    pub derived: AccountDerived,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Account {
    pub fn holding(&self, name: &str) -> Option<&Holding> {
        self.holdings.iter().find(|h| h.name == name)
    }

    pub fn holding_mut(&mut self, name: &str) -> Option<&mut Holding> {
        self.holdings.iter_mut().find(|h| h.name == name)
    }
}

/// Derived figures for one account, produced by the account aggregator.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountDerived {
    /// Cash on hand from all non-loan entries plus loan flows.
    pub cash_amount: Decimal,
    /// Outstanding loan principal.
    pub loan_amount: Decimal,
    /// `cash_amount - total_cost`.
    pub balance: Decimal,
    /// Sum of the holdings' total cost.
    pub total_cost: Decimal,
    /// Sum of the holdings' current value.
    pub holdings_value: Decimal,
    /// Cumulative account-level dividends (not attributed to a holding).
    pub dividend_amount: Decimal,
    /// `holdings_value + balance - loan_amount`.
    pub value: Decimal,
    pub return_value: Decimal,
    pub return_percentage: Decimal,
    pub value_history: Vec<SeriesPoint>,
    pub return_history: Vec<SeriesPoint>,
    pub loan_history: Vec<SeriesPoint>,
    /// Fingerprint of the entries and holdings these figures were derived from.
    pub checksum: String,
}

/// Input model for creating a new account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAccount {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub currency: String,
}

impl NewAccount {
    /// Validates the input and builds an empty account aggregate.
    pub fn build(self) -> Result<Account> {
        if self.name.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Account name cannot be empty".to_string(),
            )));
        }
        if self.currency.trim().is_empty() {
            return Err(Error::Validation(ValidationError::InvalidInput(
                "Currency cannot be empty".to_string(),
            )));
        }
        let now = Utc::now();
        Ok(Account {
            id: self
                .id
                .unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
            name: self.name,
            currency: self.currency,
            holdings: Vec::new(),
            entries: Vec::new(),
            derived: AccountDerived::default(),
            created_at: now,
            updated_at: now,
        })
    }
}
