pub mod form;
pub mod logging;
pub mod session;
pub mod state;

pub use form::{Field, FieldError, FieldErrors, RawLoanFields, validate};
pub use session::SharedSession;
pub use state::SessionState;
