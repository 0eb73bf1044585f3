//! Toast notification queue and slide-in animation state

use crate::form::{Notification, NotificationKind, Notifier};
use std::time::{Duration, Instant};

/// A notification currently on screen
#[derive(Debug, Clone)]
pub struct Toast {
    pub notification: Notification,
    pub shown_at: Instant,
    pub duration: Duration,
}

impl Toast {
    /// Duration of the slide-in animation
    const SLIDE_DURATION: Duration = Duration::from_millis(250);

    pub fn kind(&self) -> NotificationKind {
        self.notification.kind
    }

    pub fn message(&self) -> &str {
        &self.notification.message
    }

    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= self.duration
    }

    /// Slide-in progress (0.0 just shown, 1.0 fully in place)
    pub fn slide_progress_at(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.shown_at);
        if elapsed >= Self::SLIDE_DURATION {
            return 1.0;
        }
        let progress = elapsed.as_secs_f32() / Self::SLIDE_DURATION.as_secs_f32();
        simple_easing::cubic_out(progress)
    }

    pub fn is_animating_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) < Self::SLIDE_DURATION
    }

    /// Remaining display time as a 0.0..=1.0 fraction, for the countdown bar
    pub fn remaining_fraction_at(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.shown_at).as_secs_f32();
        let total = self.duration.as_secs_f32();
        if total <= 0.0 {
            return 0.0;
        }
        (1.0 - elapsed / total).clamp(0.0, 1.0)
    }
}

/// Stack of toasts, newest last
#[derive(Debug, Default)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    duration_override: Option<Duration>,
}

impl ToastQueue {
    /// Upper bound on toasts kept on screen; older ones are dropped first
    pub const MAX_VISIBLE: usize = 4;

    pub fn new(duration_override: Option<Duration>) -> Self {
        Self {
            toasts: Vec::new(),
            duration_override,
        }
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    pub fn push_at(&mut self, notification: Notification, now: Instant) {
        let duration = self.duration_override.unwrap_or(notification.duration);
        self.toasts.push(Toast {
            notification,
            shown_at: now,
            duration,
        });
        if self.toasts.len() > Self::MAX_VISIBLE {
            let overflow = self.toasts.len() - Self::MAX_VISIBLE;
            self.toasts.drain(..overflow);
        }
    }

    /// Drop expired toasts
    pub fn prune_at(&mut self, now: Instant) {
        self.toasts.retain(|t| !t.is_expired_at(now));
    }

    pub fn prune(&mut self) {
        self.prune_at(Instant::now());
    }

    pub fn is_animating_at(&self, now: Instant) -> bool {
        self.toasts.iter().any(|t| t.is_animating_at(now))
    }

    /// Dismiss every toast (e.g. on Esc)
    pub fn clear(&mut self) {
        self.toasts.clear();
    }
}

impl Notifier for ToastQueue {
    fn notify(&mut self, notification: Notification) {
        tracing::debug!(event = ?notification.event, message = %notification.message, "toast");
        self.push_at(notification, Instant::now());
    }
}
