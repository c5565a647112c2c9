//! Session state for the calculator.
//!
//! This holds the in-memory state shared by all presentation collaborators:
//! the last submitted request and whether its result should be shown.
//! Nothing here is persisted; the state lives for the running session only.

use mortgage_core::{LoanRequest, PaymentSummary, compute};
use tracing::debug;

/// Result-visibility state machine.
///
/// Request presence and result visibility change only together, through the
/// two named transitions: [`submit`](Self::submit) sets both, and
/// [`clear`](Self::clear) unsets both. There is no independent visibility
/// toggle.
///
/// Starts with no request and the result hidden; cycles between the two
/// states indefinitely.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    current_request: Option<LoanRequest>,
    result_visible: bool,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a validated request and makes the result visible.
    ///
    /// Always succeeds: well-formedness is guaranteed by the caller having
    /// gone through [`validate`](crate::form::validate).
    pub fn submit(
        &mut self,
        request: LoanRequest,
    ) {
        debug!(?request, "submitting calculation request");
        self.current_request = Some(request);
        self.result_visible = true;
    }

    /// Drops the current request and hides the result.
    ///
    /// Idempotent: clearing an already-clear session changes nothing.
    pub fn clear(&mut self) {
        debug!("clearing calculation request");
        self.current_request = None;
        self.result_visible = false;
    }

    pub fn current_request(&self) -> Option<&LoanRequest> {
        self.current_request.as_ref()
    }

    pub fn is_result_visible(&self) -> bool {
        self.result_visible
    }

    /// Recomputes the payment summary from the current request.
    ///
    /// Invokes the engine on every call; results are never cached. With no
    /// request present this returns [`PaymentSummary::ZERO`].
    pub fn current_result(&self) -> PaymentSummary {
        compute(self.current_request())
    }
}
