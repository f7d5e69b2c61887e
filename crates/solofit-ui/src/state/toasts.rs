//! Toast notifications
//!
//! [`ToastQueue`] is the plain data structure; [`Toaster`] wraps it in a
//! signal, provides it through context and schedules auto-dismissal.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use solofit_core::Notice;
use solofit_core::config::ToastConfig;

/// A notice currently on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
}

/// Ordered list of visible toasts, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastQueue {
    next_id: u64,
    toasts: Vec<Toast>,
}

impl ToastQueue {
    /// At most this many toasts are visible; older ones are dropped.
    pub const MAX_VISIBLE: usize = 3;

    /// Append a notice and return its id.
    pub fn push(&mut self, notice: Notice) -> u64 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.toasts.push(Toast { id, notice });

        let overflow = self.toasts.len().saturating_sub(Self::MAX_VISIBLE);
        self.toasts.drain(..overflow);
        id
    }

    /// Remove a toast. Returns false if it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        self.toasts.len() != before
    }

    #[must_use]
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

/// Reactive handle to the toast queue.
#[derive(Clone, Copy)]
pub struct Toaster {
    queue: RwSignal<ToastQueue>,
    duration_ms: u32,
}

impl Toaster {
    #[must_use]
    pub fn new(duration_ms: u32) -> Self {
        Self {
            queue: RwSignal::new(ToastQueue::default()),
            duration_ms,
        }
    }

    /// Show a notice and dismiss it after the configured duration.
    pub fn push(&self, notice: Notice) {
        tracing::info!(notice_level = %notice.level, title = %notice.title, "showing notice");
        let queue = self.queue;
        if let Some(id) = queue.try_update(|q| q.push(notice)) {
            Timeout::new(self.duration_ms, move || {
                queue.try_update(|q| q.dismiss(id));
            })
            .forget();
        }
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.try_update(|q| q.dismiss(id));
    }

    /// Snapshot of the visible toasts, tracked.
    #[must_use]
    pub fn visible(&self) -> Vec<Toast> {
        self.queue.with(|q| q.toasts().to_vec())
    }
}

/// The toaster provided by the app root, or a detached one.
#[must_use]
pub fn use_toaster() -> Toaster {
    use_context::<Toaster>().unwrap_or_else(|| Toaster::new(ToastConfig::default().duration_ms))
}
