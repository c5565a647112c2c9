//! Monthly payment and total repayment calculations.
//!
//! This module implements the two payment formulas offered by the
//! calculator:
//!
//! | Type          | Monthly payment                                 | Total repayment              |
//! |---------------|-------------------------------------------------|------------------------------|
//! | Repayment     | `P * (r * (1+r)^n) / ((1+r)^n - 1)`             | `monthly * n`                |
//! | Interest Only | `P * r`                                         | `monthly * n + P` (balloon)  |
//!
//! where `P` is the principal, `r` the monthly interest rate
//! (`annual_rate_percent / 100 / 12`) and `n` the number of monthly
//! payments (`term_years * 12`).
//!
//! # Zero-rate, zero-term, and overflow handling
//!
//! A zero interest rate would divide by `(1+0)^n - 1 = 0` in the amortization
//! formula, so it is special-cased: with no interest accruing, the monthly
//! payment is simply `principal / n`. A zero-length term schedules no
//! payments at all and yields the zero-valued summary. Inputs whose
//! magnitude overflows the decimal range (an astronomical rate, principal,
//! or term) also yield the zero-valued summary, with a warning; every
//! arithmetic step uses checked operations, so the engine never panics.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use mortgage_core::{LoanRequest, MortgageType, compute};
//!
//! let request = LoanRequest {
//!     principal: dec!(200000.00),
//!     annual_rate_percent: dec!(5.0),
//!     term_years: dec!(25),
//!     mortgage_type: MortgageType::Repayment,
//! };
//!
//! let summary = compute(Some(&request));
//!
//! assert_eq!(summary.monthly_payment, dec!(1169.18));
//! assert_eq!(summary.total_repayment, dec!(350754.02));
//! ```

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, MathematicalOps};
use tracing::warn;

use crate::calculations::common::round_half_up;
use crate::models::{LoanRequest, MortgageType, PaymentSummary};

/// Computes the payment summary for the given request.
///
/// This is the engine's single entry point. It is pure and deterministic:
/// no side effects, and no panics for any request satisfying the validator's
/// guarantee (all numeric fields finite and non-negative). Requests whose
/// magnitude overflows the decimal range return [`PaymentSummary::ZERO`]
/// after logging a warning, like the zero-term case.
///
/// `None` represents the cleared state and returns
/// [`PaymentSummary::ZERO`] — a defined default, not an error.
///
/// Both output amounts are rounded to two decimal places; the total is
/// derived from the unrounded monthly payment so that rounding residue does
/// not accumulate over the term.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use mortgage_core::{LoanRequest, MortgageType, PaymentSummary, compute};
///
/// // Cleared state: defined zero result.
/// assert_eq!(compute(None), PaymentSummary::ZERO);
///
/// // Interest-only: monthly interest plus a final balloon principal payment.
/// let request = LoanRequest {
///     principal: dec!(200000.00),
///     annual_rate_percent: dec!(5.0),
///     term_years: dec!(25),
///     mortgage_type: MortgageType::InterestOnly,
/// };
/// let summary = compute(Some(&request));
///
/// assert_eq!(summary.monthly_payment, dec!(833.33));
/// assert_eq!(summary.total_repayment, dec!(450000.00));
/// ```
pub fn compute(request: Option<&LoanRequest>) -> PaymentSummary {
    let Some(request) = request else {
        return PaymentSummary::ZERO;
    };

    let rate = monthly_rate(request.annual_rate_percent);
    let Some(payments) = total_payments(request.term_years) else {
        return overflowed(request);
    };

    // A zero-length term schedules no payments; both formulas would
    // otherwise divide by (or degenerate at) zero.
    if payments.is_zero() {
        warn!(
            term_years = %request.term_years,
            "zero-length term; no payments to schedule"
        );
        return PaymentSummary::ZERO;
    }

    let monthly = match request.mortgage_type {
        MortgageType::Repayment => repayment_monthly(request.principal, rate, payments),
        MortgageType::InterestOnly => request.principal.checked_mul(rate),
    };

    let total = monthly.and_then(|monthly| match request.mortgage_type {
        MortgageType::Repayment => monthly.checked_mul(payments),
        MortgageType::InterestOnly => monthly
            .checked_mul(payments)
            .and_then(|interest| interest.checked_add(request.principal)),
    });

    match (monthly, total) {
        (Some(monthly), Some(total)) => PaymentSummary {
            monthly_payment: round_half_up(monthly),
            total_repayment: round_half_up(total),
        },
        _ => overflowed(request),
    }
}

/// The defined result for inputs whose magnitude exceeds the decimal range.
fn overflowed(request: &LoanRequest) -> PaymentSummary {
    warn!(
        principal = %request.principal,
        annual_rate_percent = %request.annual_rate_percent,
        term_years = %request.term_years,
        "calculation overflows the decimal range; returning the zero summary"
    );
    PaymentSummary::ZERO
}

/// Converts an annual percentage rate into a monthly fractional rate.
fn monthly_rate(annual_rate_percent: Decimal) -> Decimal {
    annual_rate_percent / Decimal::ONE_HUNDRED / months_per_year()
}

/// Converts a term in years into a number of monthly payments.
///
/// `None` when the term is so long the payment count overflows.
fn total_payments(term_years: Decimal) -> Option<Decimal> {
    term_years.checked_mul(months_per_year())
}

fn months_per_year() -> Decimal {
    Decimal::from(12)
}

/// Calculates the unrounded monthly payment for a repayment mortgage.
///
/// Uses the standard amortization formula, special-casing a zero rate to a
/// straight division of principal over the payment count. `None` when any
/// step overflows the decimal range.
fn repayment_monthly(
    principal: Decimal,
    rate: Decimal,
    payments: Decimal,
) -> Option<Decimal> {
    if rate.is_zero() {
        return principal.checked_div(payments);
    }

    let factor = growth_factor(rate, payments)?;
    principal
        .checked_mul(rate.checked_mul(factor)?)?
        .checked_div(factor - Decimal::ONE)
}

/// Calculates the compound growth factor `(1 + rate)^payments`.
///
/// Whole payment counts use exact integer exponentiation; fractional counts
/// (from a fractional term) fall back to the decimal power function.
/// `None` when the factor overflows the decimal range.
fn growth_factor(
    rate: Decimal,
    payments: Decimal,
) -> Option<Decimal> {
    let base = Decimal::ONE.checked_add(rate)?;

    if payments.fract().is_zero() {
        if let Some(n) = payments.to_i64() {
            return base.checked_powi(n);
        }
    }
    base.checked_powd(payments)
}
