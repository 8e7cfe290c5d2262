/// Decimal precision for derived valuation figures.
pub const DECIMAL_PRECISION: u32 = 6;

/// Decimal precision for display values.
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;
