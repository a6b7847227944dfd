//! Toast notification queue state.
//!
//! DESIGN
//! ======
//! The auth flow emits success/error notifications into this queue; the
//! `ToastHost` component renders whatever is queued. Keeping the queue as a
//! plain struct lets the emit/dismiss rules be unit tested headlessly.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Severity of a toast notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastSeverity {
    Success,
    Error,
}

/// A single queued toast.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    /// Queue-assigned identifier, unique for the lifetime of the queue.
    pub id: u64,
    pub severity: ToastSeverity,
    pub message: String,
}

/// Shared toast queue; pushes assign monotonically increasing ids.
#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub next_id: u64,
    pub toasts: Vec<Toast>,
}

impl ToastState {
    /// Queues a success toast, returning its id.
    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.push(ToastSeverity::Success, message.into())
    }

    /// Queues an error toast, returning its id.
    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.push(ToastSeverity::Error, message.into())
    }

    fn push(&mut self, severity: ToastSeverity, message: String) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.toasts.push(Toast {
            id,
            severity,
            message,
        });
        id
    }

    /// Removes a toast by id. Unknown ids are ignored, so auto-dismiss and
    /// click-dismiss may race without harm.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }
}
