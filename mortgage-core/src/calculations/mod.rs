//! Payment calculation modules for the mortgage calculator.
//!
//! This module provides the pure calculation logic that turns a validated
//! loan request into a monthly payment and total repayment figure.

pub mod common;
pub mod payment;

pub use payment::compute;
