use crate::constants::TOAST_DURATION_MS;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    shown_at: Duration,
}

impl Toast {
    pub fn shown_at(&self) -> Duration {
        self.shown_at
    }
}

/// Holds at most one transient notification.
///
/// Each toast expires a fixed time after its own show time, so replacing a
/// toast also restarts the clock.
#[derive(Debug, Clone)]
pub struct ToastSlot {
    current: Option<Toast>,
    lifetime: Duration,
}

impl Default for ToastSlot {
    fn default() -> Self {
        Self::new(Duration::from_millis(TOAST_DURATION_MS))
    }
}

impl ToastSlot {
    pub fn new(lifetime: Duration) -> Self {
        Self {
            current: None,
            lifetime,
        }
    }

    pub fn show(&mut self, kind: ToastKind, message: impl Into<String>, now: Duration) {
        self.current = Some(Toast {
            kind,
            message: message.into(),
            shown_at: now,
        });
    }

    /// Drops the toast once its lifetime has elapsed. Returns true if it
    /// expired during this call.
    pub fn tick(&mut self, now: Duration) -> bool {
        let expired = self
            .current
            .as_ref()
            .is_some_and(|toast| now.saturating_sub(toast.shown_at) >= self.lifetime);
        if expired {
            self.current = None;
        }
        expired
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }
}
