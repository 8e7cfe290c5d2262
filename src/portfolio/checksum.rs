//! Content fingerprints gating the aggregation recompute.
//!
//! The aggregators only re-run when the freshly computed checksum differs
//! from the one stored on the aggregate. The fingerprint covers every field
//! the fold reads, so equal checksums mean the derived figures are current.
//! Change-detection only, not integrity: a truncated SHA-256 rendered as hex.

use rust_decimal::Decimal;
use sha2::{Digest, Sha256};

use crate::holdings::Holding;
use crate::ledger::LedgerEntry;

/// Number of digest bytes kept for the fingerprint (64 bits).
const CHECKSUM_BYTES: usize = 8;

/// Computes the fingerprint of an entry set.
///
/// Same entries, same field values, same order => same checksum. Any change
/// to an included field or to the set itself produces a different checksum
/// with overwhelming probability.
pub fn compute_entries_checksum(entries: &[LedgerEntry]) -> String {
    let mut hasher = Sha256::new();
    for entry in entries {
        hash_entry(&mut hasher, entry);
    }
    finish(hasher)
}

/// Computes the fingerprint of an account's own entries plus its holdings.
///
/// Each holding contributes its name and stored checksum, so the account
/// fingerprint shifts whenever any child holding's entry set changed. The
/// holdings must have been recomputed first (two-phase pipeline).
pub fn compute_account_checksum(entries: &[LedgerEntry], holdings: &[Holding]) -> String {
    let mut hasher = Sha256::new();
    for entry in entries {
        hash_entry(&mut hasher, entry);
    }
    for holding in holdings {
        hasher.update(holding.name.as_bytes());
        hasher.update(b"|");
        hasher.update(holding.derived.checksum.as_bytes());
        hasher.update(b";");
    }
    finish(hasher)
}

fn hash_entry(hasher: &mut Sha256, entry: &LedgerEntry) {
    hasher.update(entry.id.as_bytes());
    hasher.update(b"|");
    hasher.update(entry.date.timestamp_millis().to_string().as_bytes());
    hasher.update(b"|");
    hasher.update(entry.category.as_str().as_bytes());
    hasher.update(b"|");
    hasher.update(entry.sub_category.as_str().as_bytes());
    hasher.update(b"|");
    if let Some(price) = entry.price {
        hasher.update(normalize_decimal(price).as_bytes());
    }
    hasher.update(b"|");
    hasher.update(normalize_decimal(entry.amount).as_bytes());
    hasher.update(b"|");
    hasher.update(normalize_decimal(entry.total).as_bytes());
    hasher.update(b"|");
    if let Some(name) = &entry.holding_name {
        hasher.update(name.as_bytes());
    }
    hasher.update(b";");
}

/// Normalizes a decimal so that representation differences (trailing zeros,
/// scale) never shift the fingerprint.
fn normalize_decimal(value: Decimal) -> String {
    value.normalize().to_string()
}

fn finish(hasher: Sha256) -> String {
    let digest = hasher.finalize();
    hex::encode(&digest[..CHECKSUM_BYTES])
}
