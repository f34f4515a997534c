//! Display-frame scheduling.
//!
//! A [`FrameScheduler`] hands out one [`FrameId`] per requested frame and can cancel a
//! request before it is delivered. The production [`FrameClock`] is ticked by the app
//! loop on a fixed interval; each tick delivers at most the one pending request.

use parking_lot::Mutex;
use std::sync::Arc;

/// Token identifying one requested frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameId(pub u64);

/// Requests and cancels per-frame callbacks.
pub trait FrameScheduler: Send {
    /// Ask for a callback on the next display frame
    fn request_frame(&mut self) -> FrameId;

    /// Withdraw a request; a cancelled id is never delivered
    fn cancel_frame(&mut self, id: FrameId);
}

#[derive(Debug, Default)]
struct ClockState {
    next_id: u64,
    pending: Option<FrameId>,
    cancelled: u64,
}

/// Frame scheduler driven by the application's tick interval.
///
/// Clones share state: the renderer holds one clone as its scheduler, the app loop
/// holds another and calls [`FrameClock::take_due`] on every tick.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    state: Arc<Mutex<ClockState>>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the pending request for delivery on this tick
    pub fn take_due(&self) -> Option<FrameId> {
        self.state.lock().pending.take()
    }

    pub fn has_pending(&self) -> bool {
        self.state.lock().pending.is_some()
    }

    /// Number of requests withdrawn before delivery
    pub fn cancelled_count(&self) -> u64 {
        self.state.lock().cancelled
    }
}

impl FrameScheduler for FrameClock {
    fn request_frame(&mut self) -> FrameId {
        let mut state = self.state.lock();
        let id = FrameId(state.next_id);
        state.next_id += 1;
        // A newer request supersedes one that was never delivered
        state.pending = Some(id);
        id
    }

    fn cancel_frame(&mut self, id: FrameId) {
        let mut state = self.state.lock();
        if state.pending == Some(id) {
            state.pending = None;
            state.cancelled += 1;
        }
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;

    /// Scheduler double that records every request and cancellation
    #[derive(Debug, Clone, Default)]
    pub struct ManualScheduler {
        pub log: Arc<Mutex<ScheduleLog>>,
    }

    #[derive(Debug, Default)]
    pub struct ScheduleLog {
        pub requested: Vec<FrameId>,
        pub cancelled: Vec<FrameId>,
    }

    impl ScheduleLog {
        /// Requested and not cancelled, newest last
        pub fn outstanding(&self) -> Vec<FrameId> {
            self.requested
                .iter()
                .copied()
                .filter(|id| !self.cancelled.contains(id))
                .collect()
        }
    }

    impl FrameScheduler for ManualScheduler {
        fn request_frame(&mut self) -> FrameId {
            let mut log = self.log.lock();
            let id = FrameId(log.requested.len() as u64);
            log.requested.push(id);
            id
        }

        fn cancel_frame(&mut self, id: FrameId) {
            self.log.lock().cancelled.push(id);
        }
    }

    #[test]
    fn test_clock_delivers_once() {
        let clock = FrameClock::new();
        let mut scheduler = clock.clone();

        let id = scheduler.request_frame();
        assert!(clock.has_pending());
        assert_eq!(clock.take_due(), Some(id));
        assert_eq!(clock.take_due(), None);
    }

    #[test]
    fn test_clock_cancel() {
        let clock = FrameClock::new();
        let mut scheduler = clock.clone();

        let first = scheduler.request_frame();
        scheduler.cancel_frame(first);
        assert_eq!(clock.take_due(), None);
        assert_eq!(clock.cancelled_count(), 1);

        // Cancelling something already delivered is a no-op
        let second = scheduler.request_frame();
        assert_eq!(clock.take_due(), Some(second));
        scheduler.cancel_frame(second);
        assert_eq!(clock.cancelled_count(), 1);
        assert_ne!(first, second);
    }
}
