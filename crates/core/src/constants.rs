use rust_decimal::RoundingStrategy;

/// Decimal precision for dashboard totals and percentages
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Decimal precision for the allocated income percentage shown to the user
pub const PERCENTAGE_DISPLAY_PRECISION: u32 = 1;

/// Rounding used for every displayed value (round-half-away-from-zero)
pub const DISPLAY_ROUNDING: RoundingStrategy = RoundingStrategy::MidpointAwayFromZero;
