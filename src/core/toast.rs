use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
}

/// A transient notification shown after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub level: ToastLevel,
    pub message: String,
}

/// Shared notification queue. Forms and the wizard push, the surface drains.
#[derive(Debug, Clone, Default)]
pub struct Toasts {
    queue: Arc<Mutex<Vec<Toast>>>,
}

impl Toasts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn success(&self, message: impl Into<String>) {
        let message = message.into();
        tracing::info!("toast: {}", message);
        self.push(Toast {
            level: ToastLevel::Success,
            message,
        });
    }

    pub fn error(&self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!("toast: {}", message);
        self.push(Toast {
            level: ToastLevel::Error,
            message,
        });
    }

    pub fn latest(&self) -> Option<Toast> {
        self.lock().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn drain(&self) -> Vec<Toast> {
        std::mem::take(&mut *self.lock())
    }

    fn push(&self, toast: Toast) {
        self.lock().push(toast);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Toast>> {
        // A poisoned queue still holds valid toasts.
        self.queue.lock().unwrap_or_else(|e| e.into_inner())
    }
}
