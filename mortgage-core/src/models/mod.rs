mod loan_request;
mod mortgage_type;
mod payment_summary;

pub use loan_request::LoanRequest;
pub use mortgage_type::MortgageType;
pub use payment_summary::PaymentSummary;
