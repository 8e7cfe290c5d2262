//! Ledger entry domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::{CalculatorError, Error, Result, ValidationError};

/// Top-level classification of a ledger entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EntryCategory {
    /// Buys and sells of a holding.
    Trading,
    /// Cash movements: deposits, withdrawals, dividends.
    Cash,
    /// Corrective restatement of a holding's position or price.
    Adjustment,
    /// Loan principal movements.
    Loan,
}

impl EntryCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryCategory::Trading => "trading",
            EntryCategory::Cash => "cash",
            EntryCategory::Adjustment => "adjustment",
            EntryCategory::Loan => "loan",
        }
    }
}

impl fmt::Display for EntryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntryCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "trading" => Ok(EntryCategory::Trading),
            "cash" => Ok(EntryCategory::Cash),
            "adjustment" => Ok(EntryCategory::Adjustment),
            "loan" => Ok(EntryCategory::Loan),
            other => Err(CalculatorError::UnsupportedCategory(other.to_string()).into()),
        }
    }
}

/// Fine-grained classification of a ledger entry, scoped to its category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EntrySubCategory {
    // Trading
    Buy,
    Sell,
    // Cash
    Deposit,
    Withdrawal,
    Dividend,
    // Adjustment
    StockSplit,
    Merger,
    PriceUpdate,
    AmountUpdate,
    /// Unclassified adjustment (no recognized price/amount change).
    Update,
    // Loan
    Disbursement,
    Repayment,
}

impl EntrySubCategory {
    /// The category this sub-category belongs to.
    pub fn category(&self) -> EntryCategory {
        match self {
            EntrySubCategory::Buy | EntrySubCategory::Sell => EntryCategory::Trading,
            EntrySubCategory::Deposit
            | EntrySubCategory::Withdrawal
            | EntrySubCategory::Dividend => EntryCategory::Cash,
            EntrySubCategory::StockSplit
            | EntrySubCategory::Merger
            | EntrySubCategory::PriceUpdate
            | EntrySubCategory::AmountUpdate
            | EntrySubCategory::Update => EntryCategory::Adjustment,
            EntrySubCategory::Disbursement | EntrySubCategory::Repayment => EntryCategory::Loan,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            EntrySubCategory::Buy => "buy",
            EntrySubCategory::Sell => "sell",
            EntrySubCategory::Deposit => "deposit",
            EntrySubCategory::Withdrawal => "withdrawal",
            EntrySubCategory::Dividend => "dividend",
            EntrySubCategory::StockSplit => "stockSplit",
            EntrySubCategory::Merger => "merger",
            EntrySubCategory::PriceUpdate => "priceUpdate",
            EntrySubCategory::AmountUpdate => "amountUpdate",
            EntrySubCategory::Update => "update",
            EntrySubCategory::Disbursement => "disbursement",
            EntrySubCategory::Repayment => "repayment",
        }
    }
}

impl fmt::Display for EntrySubCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EntrySubCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "buy" => Ok(EntrySubCategory::Buy),
            "sell" => Ok(EntrySubCategory::Sell),
            "deposit" => Ok(EntrySubCategory::Deposit),
            "withdrawal" => Ok(EntrySubCategory::Withdrawal),
            "dividend" => Ok(EntrySubCategory::Dividend),
            "stockSplit" => Ok(EntrySubCategory::StockSplit),
            "merger" => Ok(EntrySubCategory::Merger),
            "priceUpdate" => Ok(EntrySubCategory::PriceUpdate),
            "amountUpdate" => Ok(EntrySubCategory::AmountUpdate),
            "update" => Ok(EntrySubCategory::Update),
            "disbursement" => Ok(EntrySubCategory::Disbursement),
            "repayment" => Ok(EntrySubCategory::Repayment),
            other => Err(CalculatorError::UnsupportedSubCategory(other.to_string()).into()),
        }
    }
}

/// Domain model representing a single financial event.
///
/// Entries are immutable once recorded; edits go through whole-object replace
/// via `PortfolioService::save_entry`. Sign convention for `amount` and
/// `total`: positive = increase of position/cash, negative = decrease.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerEntry {
    pub id: String,
    pub account_id: String,
    /// Name of the holding this entry affects. Absent for account-level
    /// entries (plain cash, loans).
    pub holding_name: Option<String>,
    pub category: EntryCategory,
    pub sub_category: EntrySubCategory,
    pub date: DateTime<Utc>,
    /// Unit price; set for trading and adjustment entries.
    #[serde(default)]
    pub price: Option<Decimal>,
    /// Signed quantity delta: shares, cash amount, or loan principal.
    pub amount: Decimal,
    /// Signed monetary total (price x amount +/- fees for trades).
    pub total: Decimal,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl LedgerEntry {
    /// Unit price, defaulting to zero when not set.
    pub fn price_or_zero(&self) -> Decimal {
        self.price.unwrap_or(Decimal::ZERO)
    }

    /// True for entries that live on a holding rather than the account.
    pub fn is_holding_entry(&self) -> bool {
        matches!(
            self.category,
            EntryCategory::Trading | EntryCategory::Adjustment
        )
    }

    /// Checks structural consistency: sub-category scope, holding reference
    /// presence for trading/adjustment entries.
    pub fn validate(&self) -> Result<()> {
        if self.sub_category.category() != self.category {
            return Err(Error::Validation(ValidationError::InvalidInput(format!(
                "Sub-category '{}' does not belong to category '{}'",
                self.sub_category, self.category
            ))));
        }
        if self.is_holding_entry() && self.holding_name.is_none() {
            return Err(Error::Validation(ValidationError::MissingField(
                "holdingName".to_string(),
            )));
        }
        if self.account_id.trim().is_empty() {
            return Err(Error::Validation(ValidationError::MissingField(
                "accountId".to_string(),
            )));
        }
        Ok(())
    }
}

/// Input model for creating a new ledger entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewLedgerEntry {
    pub account_id: String,
    pub holding_name: Option<String>,
    pub sub_category: EntrySubCategory,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub price: Option<Decimal>,
    pub amount: Decimal,
    pub total: Decimal,
    pub notes: Option<String>,
}

impl NewLedgerEntry {
    /// Validates the input and stamps identity and audit fields.
    /// The category is derived from the sub-category, so it can never
    /// disagree with it.
    pub fn build(self) -> Result<LedgerEntry> {
        let now = Utc::now();
        let entry = LedgerEntry {
            id: uuid::Uuid::new_v4().to_string(),
            account_id: self.account_id,
            holding_name: self.holding_name,
            category: self.sub_category.category(),
            sub_category: self.sub_category,
            date: self.date,
            price: self.price,
            amount: self.amount,
            total: self.total,
            notes: self.notes,
            created_at: now,
            updated_at: now,
        };
        entry.validate()?;
        Ok(entry)
    }
}
