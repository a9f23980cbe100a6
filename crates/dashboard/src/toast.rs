//! Transient notifications.

use serde::Serialize;

pub const DEFAULT_TOAST_DURATION_MS: u64 = 3000;

/// Length of the hide animation before a toast is removed.
pub const TOAST_EXIT_MS: u64 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    pub fn title(self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Error => "Error",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ToastId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ToastPhase {
    Showing,
    Leaving,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Toast {
    pub id: ToastId,
    pub kind: ToastKind,
    pub message: String,
    pub phase: ToastPhase,
    hide_at_ms: u64,
}

impl Toast {
    fn remove_at_ms(&self) -> u64 {
        self.hide_at_ms.saturating_add(TOAST_EXIT_MS)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ToastQueue {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(
        &mut self,
        message: &str,
        kind: ToastKind,
        duration_ms: u64,
        now_ms: u64,
    ) -> ToastId {
        self.next_id += 1;
        let id = ToastId(self.next_id);

        self.toasts.push(Toast {
            id,
            kind,
            message: message.to_owned(),
            phase: ToastPhase::Showing,
            hide_at_ms: now_ms.saturating_add(duration_ms),
        });

        id
    }

    /// Advances toast timers; returns the ids removed on this tick.
    pub fn tick(&mut self, now_ms: u64) -> Vec<ToastId> {
        for toast in &mut self.toasts {
            if toast.phase == ToastPhase::Showing && now_ms >= toast.hide_at_ms {
                toast.phase = ToastPhase::Leaving;
            }
        }

        let mut removed = Vec::new();
        self.toasts.retain(|toast| {
            let expired = now_ms >= toast.remove_at_ms();
            if expired {
                removed.push(toast.id);
            }
            !expired
        });

        removed
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
