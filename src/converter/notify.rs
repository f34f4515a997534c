//! Notification surface: short-lived toasts with a title, a description and a severity.
//!
//! Toasts are fire-and-forget. The queue is bounded; when it is full the oldest toast
//! makes room for the newest one. Expired toasts are pruned lazily whenever the queue
//! is read.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Visual weight of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Normal,
    /// Errors the user should act on
    Destructive,
}

/// A single user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Notification {
    pub fn normal(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Normal,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Destructive,
        }
    }

    pub fn is_destructive(&self) -> bool {
        self.severity == Severity::Destructive
    }
}

/// A notification together with its display deadline.
#[derive(Debug, Clone)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
    expires_at: Instant,
}

impl Toast {
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Bounded queue of visible toasts.
#[derive(Debug)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
    limit: usize,
    duration: Duration,
    next_id: u64,
}

impl ToastQueue {
    pub fn new(limit: usize, duration: Duration) -> Self {
        Self {
            toasts: VecDeque::new(),
            limit: limit.max(1),
            duration,
            next_id: 0,
        }
    }

    /// Show a notification now
    pub fn push(&mut self, notification: Notification) -> u64 {
        self.push_at(notification, Instant::now())
    }

    /// Show a notification as of `now` (used by tests to control time)
    pub fn push_at(&mut self, notification: Notification, now: Instant) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        while self.toasts.len() >= self.limit {
            self.toasts.pop_front();
        }
        self.toasts.push_back(Toast {
            id,
            notification,
            expires_at: now + self.duration,
        });
        id
    }

    /// Drop expired toasts
    pub fn prune(&mut self, now: Instant) {
        self.toasts.retain(|toast| !toast.is_expired(now));
    }

    /// Toasts still visible at `now`, oldest first
    pub fn visible(&self, now: Instant) -> impl Iterator<Item = &Toast> {
        self.toasts.iter().filter(move |toast| !toast.is_expired(now))
    }

    /// Most recently pushed toast, expired or not
    pub fn latest(&self) -> Option<&Notification> {
        self.toasts.back().map(|toast| &toast.notification)
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|toast| toast.id != id);
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::new(1, Duration::from_secs(4))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_keeps_newest() {
        let mut queue = ToastQueue::new(2, Duration::from_secs(5));
        let now = Instant::now();

        queue.push_at(Notification::normal("one", ""), now);
        queue.push_at(Notification::normal("two", ""), now);
        queue.push_at(Notification::destructive("three", ""), now);

        let titles: Vec<_> = queue
            .visible(now)
            .map(|toast| toast.notification.title.as_str())
            .collect();
        assert_eq!(titles, vec!["two", "three"]);
        assert!(queue.latest().unwrap().is_destructive());
    }

    #[test]
    fn test_expiry() {
        let mut queue = ToastQueue::new(3, Duration::from_millis(100));
        let start = Instant::now();

        queue.push_at(Notification::normal("early", ""), start);
        queue.push_at(
            Notification::normal("late", ""),
            start + Duration::from_millis(60),
        );

        let later = start + Duration::from_millis(120);
        assert_eq!(queue.visible(later).count(), 1);

        queue.prune(later);
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.latest().unwrap().title, "late");

        queue.prune(start + Duration::from_millis(200));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_dismiss_and_zero_limit() {
        let mut queue = ToastQueue::new(0, Duration::from_secs(1));
        let id = queue.push(Notification::normal("hello", "world"));
        assert_eq!(queue.len(), 1);

        queue.dismiss(id);
        assert!(queue.is_empty());
    }
}
