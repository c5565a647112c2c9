use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Result of a payment calculation.
///
/// Derived from exactly one [`LoanRequest`](crate::models::LoanRequest) and
/// recomputed on demand, never cached. Both amounts are rounded to two
/// decimal places.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentSummary {
    /// Payment due each month, in currency units.
    pub monthly_payment: Decimal,

    /// Total amount repaid over the full term.
    pub total_repayment: Decimal,
}

impl PaymentSummary {
    /// The defined result when no request exists (cleared or never submitted).
    pub const ZERO: Self = Self {
        monthly_payment: Decimal::ZERO,
        total_repayment: Decimal::ZERO,
    };
}
