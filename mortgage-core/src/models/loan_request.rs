use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::MortgageType;

/// A normalized, validated calculation request.
///
/// Instances are only constructed after every field has passed validation:
/// all numeric fields are finite and non-negative, and a mortgage type has
/// been selected. Partial requests never exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanRequest {
    /// The borrowed amount, in currency units.
    pub principal: Decimal,

    /// Annual interest rate as a percentage (5.5 means 5.5% per year).
    pub annual_rate_percent: Decimal,

    /// Loan term in years. Whole years expected, but fractional values
    /// are accepted and handled by the calculation engine.
    pub term_years: Decimal,

    /// Which payment formula applies to this loan.
    pub mortgage_type: MortgageType,
}
