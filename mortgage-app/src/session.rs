use std::sync::{Arc, Mutex, MutexGuard};

use mortgage_core::{LoanRequest, PaymentSummary};

use crate::state::SessionState;

/// Process-wide handle to the shared [`SessionState`].
///
/// Clones share the one underlying state, so every presentation collaborator
/// observes the same session. Each transition and read happens inside a
/// single lock acquisition; a multi-threaded host can never observe a stored
/// request without its visibility flag or vice versa.
#[derive(Clone, Debug, Default)]
pub struct SharedSession {
    inner: Arc<Mutex<SessionState>>,
}

impl SharedSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a validated request and makes the result visible.
    pub fn submit(
        &self,
        request: LoanRequest,
    ) {
        self.lock().submit(request);
    }

    /// Drops the current request and hides the result. Idempotent.
    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn current_request(&self) -> Option<LoanRequest> {
        self.lock().current_request().cloned()
    }

    pub fn is_result_visible(&self) -> bool {
        self.lock().is_result_visible()
    }

    /// Recomputes the payment summary from the current request.
    pub fn current_result(&self) -> PaymentSummary {
        self.lock().current_result()
    }

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.inner.lock().unwrap()
    }
}
