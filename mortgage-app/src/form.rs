//! Form input validation.
//!
//! Turns the raw text collected from the calculator form into a typed
//! [`LoanRequest`], or a field-keyed map of errors for the presentation
//! layer to render next to each input. Every field is checked even when an
//! earlier one fails, so the user sees all problems at once.

use std::collections::BTreeMap;

use mortgage_core::{LoanRequest, MortgageType};
use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

/// Raw values collected from the calculator form, before validation.
#[derive(Clone, Debug, Default)]
pub struct RawLoanFields {
    pub principal: String,
    pub annual_rate_percent: String,
    pub term_years: String,
    /// `None` when no option has been selected. The form widget offers
    /// exactly the two [`MortgageType`] choices, so presence is the only
    /// thing left to check here.
    pub mortgage_type: Option<MortgageType>,
}

/// Form fields that can carry a validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Field {
    Principal,
    AnnualRatePercent,
    TermYears,
    MortgageType,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Principal => "principal",
            Self::AnnualRatePercent => "annual_rate_percent",
            Self::TermYears => "term_years",
            Self::MortgageType => "mortgage_type",
        }
    }
}

/// A single field's validation failure, with a user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
pub enum FieldError {
    /// A mandatory field was left blank or unselected.
    #[error("This field is required")]
    Required,

    /// A numeric field's text could not be parsed as a finite,
    /// non-negative number. Carries the offending input.
    #[error("'{0}' is not a valid non-negative number")]
    InvalidNumber(String),
}

/// Validation errors keyed by the field they belong to.
pub type FieldErrors = BTreeMap<Field, FieldError>;

/// Validates the raw form fields into a [`LoanRequest`].
///
/// On success every numeric field is finite and non-negative, and a
/// mortgage type is selected; the calculation engine relies on this without
/// re-checking. On failure the returned map is never empty, and no partial
/// request is constructed.
pub fn validate(fields: &RawLoanFields) -> Result<LoanRequest, FieldErrors> {
    let mut errors = FieldErrors::new();

    let principal = numeric_field(&fields.principal, Field::Principal, &mut errors);
    let annual_rate_percent = numeric_field(
        &fields.annual_rate_percent,
        Field::AnnualRatePercent,
        &mut errors,
    );
    let term_years = numeric_field(&fields.term_years, Field::TermYears, &mut errors);

    if fields.mortgage_type.is_none() {
        errors.insert(Field::MortgageType, FieldError::Required);
    }

    match (
        principal,
        annual_rate_percent,
        term_years,
        fields.mortgage_type,
    ) {
        (Some(principal), Some(annual_rate_percent), Some(term_years), Some(mortgage_type)) => {
            Ok(LoanRequest {
                principal,
                annual_rate_percent,
                term_years,
                mortgage_type,
            })
        }
        _ => {
            debug!(error_count = errors.len(), "form validation failed");
            Err(errors)
        }
    }
}

/// Checks one numeric field, recording any failure under `field`.
///
/// Trims whitespace and strips comma thousands separators before parsing,
/// so `"1,234.56"` is accepted. Returns the parsed value only when the text
/// is present, parseable, and non-negative.
fn numeric_field(
    raw: &str,
    field: Field,
    errors: &mut FieldErrors,
) -> Option<Decimal> {
    let normalized = raw.trim().replace(',', "");
    if normalized.is_empty() {
        errors.insert(field, FieldError::Required);
        return None;
    }

    match normalized.parse::<Decimal>() {
        Ok(value) if value >= Decimal::ZERO => Some(value),
        Ok(_) | Err(_) => {
            errors.insert(field, FieldError::InvalidNumber(raw.trim().to_string()));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn valid_fields() -> RawLoanFields {
        RawLoanFields {
            principal: "200000".to_string(),
            annual_rate_percent: "5".to_string(),
            term_years: "25".to_string(),
            mortgage_type: Some(MortgageType::Repayment),
        }
    }

    // =========================================================================
    // successful validation
    // =========================================================================

    #[test]
    fn validate_accepts_well_formed_fields() {
        let request = validate(&valid_fields()).unwrap();

        assert_eq!(request.principal, dec!(200000));
        assert_eq!(request.annual_rate_percent, dec!(5));
        assert_eq!(request.term_years, dec!(25));
        assert_eq!(request.mortgage_type, MortgageType::Repayment);
    }

    #[test]
    fn validate_accepts_comma_thousands_separator_and_whitespace() {
        let fields = RawLoanFields {
            principal: "  1,234,567.89  ".to_string(),
            ..valid_fields()
        };

        let request = validate(&fields).unwrap();

        assert_eq!(request.principal, dec!(1234567.89));
    }

    #[test]
    fn validate_accepts_zero_values() {
        let fields = RawLoanFields {
            annual_rate_percent: "0".to_string(),
            ..valid_fields()
        };

        let request = validate(&fields).unwrap();

        assert_eq!(request.annual_rate_percent, dec!(0));
    }

    // =========================================================================
    // per-field failures
    // =========================================================================

    #[test]
    fn validate_blank_principal_fails_with_exactly_one_required_error() {
        let fields = RawLoanFields {
            principal: "".to_string(),
            ..valid_fields()
        };

        let errors = validate(&fields).unwrap_err();

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(&Field::Principal), Some(&FieldError::Required));
    }

    #[test]
    fn validate_whitespace_only_counts_as_blank() {
        let fields = RawLoanFields {
            term_years: "   ".to_string(),
            ..valid_fields()
        };

        let errors = validate(&fields).unwrap_err();

        assert_eq!(errors.get(&Field::TermYears), Some(&FieldError::Required));
    }

    #[test]
    fn validate_rejects_non_numeric_text() {
        let fields = RawLoanFields {
            annual_rate_percent: "five".to_string(),
            ..valid_fields()
        };

        let errors = validate(&fields).unwrap_err();

        assert_eq!(
            errors.get(&Field::AnnualRatePercent),
            Some(&FieldError::InvalidNumber("five".to_string()))
        );
    }

    #[test]
    fn validate_rejects_negative_numbers() {
        let fields = RawLoanFields {
            principal: "-100".to_string(),
            ..valid_fields()
        };

        let errors = validate(&fields).unwrap_err();

        assert_eq!(
            errors.get(&Field::Principal),
            Some(&FieldError::InvalidNumber("-100".to_string()))
        );
    }

    #[test]
    fn validate_requires_a_mortgage_type_selection() {
        let fields = RawLoanFields {
            mortgage_type: None,
            ..valid_fields()
        };

        let errors = validate(&fields).unwrap_err();

        assert_eq!(
            errors.get(&Field::MortgageType),
            Some(&FieldError::Required)
        );
    }

    // =========================================================================
    // additive errors
    // =========================================================================

    #[test]
    fn validate_reports_every_failing_field_at_once() {
        let fields = RawLoanFields {
            principal: "".to_string(),
            annual_rate_percent: "abc".to_string(),
            term_years: "-1".to_string(),
            mortgage_type: None,
        };

        let errors = validate(&fields).unwrap_err();

        assert_eq!(errors.len(), 4);
        assert_eq!(errors.get(&Field::Principal), Some(&FieldError::Required));
        assert_eq!(
            errors.get(&Field::AnnualRatePercent),
            Some(&FieldError::InvalidNumber("abc".to_string()))
        );
        assert_eq!(
            errors.get(&Field::TermYears),
            Some(&FieldError::InvalidNumber("-1".to_string()))
        );
        assert_eq!(
            errors.get(&Field::MortgageType),
            Some(&FieldError::Required)
        );
    }

    #[test]
    fn validate_error_messages_are_user_facing() {
        assert_eq!(FieldError::Required.to_string(), "This field is required");
        assert_eq!(
            FieldError::InvalidNumber("abc".to_string()).to_string(),
            "'abc' is not a valid non-negative number"
        );
    }
}
