//! Time control and search limits.
//!
//! A [`TimeControl`] is shared by every branch of one search. Its stop flag
//! only ever goes from running to stopped until the next [`TimeControl::start`].

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock};
use std::time::{Duration, Instant};

/// Depth of the first iteration when none is given.
pub const DEFAULT_DEPTH: u8 = 6;
/// Deepest iteration iterative deepening will attempt.
pub const DEFAULT_MAX_DEPTH: u8 = 32;
/// Thinking time per move when none is given.
pub const DEFAULT_MOVE_TIME: Duration = Duration::from_secs(5);

/// Limits for one move search.
///
/// `depth` is the first iteration. With a `move_time` the engine keeps
/// deepening one ply at a time until the clock runs out or `max_depth` is
/// reached; without one it searches `depth` exactly once.
#[derive(Debug, Clone)]
pub struct SearchLimits {
    /// Depth of the first iteration in plies
    pub depth: u8,
    /// Upper bound for iterative deepening
    pub max_depth: u8,
    /// Maximum time allowed for this move (None = no deadline)
    pub move_time: Option<Duration>,
    /// Shared stop flag and clock
    pub time_control: TimeControl,
}

impl SearchLimits {
    /// Create limits with only depth constraint (no time limit).
    pub fn depth(depth: u8) -> Self {
        Self {
            depth,
            max_depth: depth,
            move_time: None,
            time_control: TimeControl::new(None),
        }
    }

    /// Create limits with both depth and time constraints.
    pub fn depth_and_time(depth: u8, move_time: Duration) -> Self {
        Self {
            depth,
            max_depth: DEFAULT_MAX_DEPTH.max(depth),
            move_time: Some(move_time),
            time_control: TimeControl::new(Some(move_time)),
        }
    }

    /// Create limits with only a time constraint, deepening from one ply.
    pub fn time(move_time: Duration) -> Self {
        Self::depth_and_time(1, move_time)
    }

    pub fn with_max_depth(mut self, max_depth: u8) -> Self {
        self.max_depth = max_depth.max(self.depth);
        self
    }

    #[inline]
    pub fn should_stop(&self) -> bool {
        self.time_control.is_stopped()
    }

    /// Start the time control clock. Call this when search begins.
    pub fn start(&self) {
        self.time_control.start();
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::depth_and_time(DEFAULT_DEPTH, DEFAULT_MOVE_TIME)
    }
}

/// Thread-safe stop flag plus clock, cheap to clone into worker threads.
#[derive(Debug, Clone)]
pub struct TimeControl {
    stopped: Arc<AtomicBool>,
    start_time: Arc<RwLock<Option<Instant>>>,
    time_limit: Option<Duration>,
    /// Nodes between clock reads on the sequential path.
    check_interval: u64,
}

impl TimeControl {
    pub fn new(time_limit: Option<Duration>) -> Self {
        Self {
            stopped: Arc::new(AtomicBool::new(false)),
            start_time: Arc::new(RwLock::new(None)),
            time_limit,
            check_interval: 1024,
        }
    }

    /// Start the clock and clear the stop flag.
    pub fn start(&self) {
        *self
            .start_time
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(Instant::now());
        self.stopped.store(false, Ordering::SeqCst);
    }

    /// Force stop the search immediately.
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::SeqCst);
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Relaxed)
    }

    /// Reads the clock and sets the stop flag once the limit has passed.
    pub fn check_time(&self) -> bool {
        if self.is_stopped() {
            return true;
        }

        if let Some(limit) = self.time_limit
            && let Some(start) = self.started_at()
            && start.elapsed() >= limit
        {
            self.stop();
            return true;
        }

        false
    }

    /// True every `check_interval` nodes.
    #[inline]
    pub fn should_check_time(&self, nodes: u64) -> bool {
        nodes % self.check_interval == 0
    }

    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit
    }

    pub fn elapsed(&self) -> Duration {
        self.started_at()
            .map(|s| s.elapsed())
            .unwrap_or(Duration::ZERO)
    }

    /// Remaining time (None if no limit).
    pub fn remaining(&self) -> Option<Duration> {
        let limit = self.time_limit?;
        Some(limit.saturating_sub(self.elapsed()))
    }

    fn started_at(&self) -> Option<Instant> {
        *self
            .start_time
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for TimeControl {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
#[path = "time_control_tests.rs"]
mod time_control_tests;
