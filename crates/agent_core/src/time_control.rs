//! Search limits: an optional node-expansion budget and an optional deadline.
//!
//! Frontier searches can grow without bound on large or cyclic state graphs.
//! Hosts that need a decision within a fixed latency pass limits; agents
//! check them before every expansion and stop with their best fallback.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock};
use std::time::{Duration, Instant};

/// Limits that control when a search agent must stop expanding.
///
/// Either limit may be absent. When both are set, whichever is hit first
/// ends the search.
#[derive(Debug, Clone, Default)]
pub struct SearchLimits {
    /// Maximum number of node expansions (None = unbounded)
    pub max_expansions: Option<u64>,
    /// Maximum time allowed for this decision (None = infinite)
    pub move_time: Option<Duration>,
    /// Time controller for checking if search should stop
    pub time_control: TimeControl,
}

impl SearchLimits {
    /// No limits at all: the search runs until the adapter or frontier ends it.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Limits with only an expansion budget.
    pub fn expansions(max_expansions: u64) -> Self {
        Self {
            max_expansions: Some(max_expansions),
            ..Self::default()
        }
    }

    /// Limits with only a deadline.
    pub fn time(move_time: Duration) -> Self {
        Self {
            max_expansions: None,
            move_time: Some(move_time),
            time_control: TimeControl::new(Some(move_time)),
        }
    }

    /// Limits with both an expansion budget and a deadline.
    pub fn expansions_and_time(max_expansions: u64, move_time: Duration) -> Self {
        Self {
            max_expansions: Some(max_expansions),
            ..Self::time(move_time)
        }
    }

    /// Start the clock. Agents call this when a decision begins.
    pub fn start(&self) {
        self.time_control.start();
    }

    /// Whether the search must stop before performing expansion number
    /// `expanded + 1`.
    pub fn should_stop(&self, expanded: u64) -> bool {
        if self.max_expansions.is_some_and(|max| expanded >= max) {
            return true;
        }
        if self.time_control.should_check_time(expanded) {
            return self.time_control.check_time();
        }
        self.time_control.is_stopped()
    }
}

/// Thread-safe time controller that tracks whether search should stop.
///
/// Cheap to clone; clones share the stop flag, so a host thread can call
/// [`TimeControl::stop`] to abort a search running elsewhere.
#[derive(Debug, Clone)]
pub struct TimeControl {
    /// Shared stop flag
    stopped: Arc<AtomicBool>,
    /// Start time of the search
    start_time: Arc<RwLock<Option<Instant>>>,
    /// Time limit for this search (None = infinite)
    time_limit: Option<Duration>,
    /// How often to check the clock (in expansions).
    check_interval: u64,
}

impl TimeControl {
    pub fn new(time_limit: Option<Duration>) -> Self {
        Self {
            stopped: Arc::new(AtomicBool::new(false)),
            start_time: Arc::new(RwLock::new(None)),
            time_limit,
            check_interval: 64,
        }
    }

    /// Check the clock every `interval` expansions instead of the default 64.
    pub fn with_check_interval(mut self, interval: u64) -> Self {
        self.check_interval = interval.max(1);
        self
    }

    /// Start the clock and clear any previous stop request.
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

    /// Check time and update the stopped flag if time expired.
    pub fn check_time(&self) -> bool {
        if self.is_stopped() {
            return true;
        }

        let expired = match (self.time_limit, self.started_at()) {
            (Some(limit), Some(start)) => start.elapsed() >= limit,
            _ => false,
        };
        if expired {
            self.stop();
        }
        expired
    }

    /// Returns true every `check_interval` expansions.
    #[inline]
    pub fn should_check_time(&self, expanded: u64) -> bool {
        expanded % self.check_interval == 0
    }

    /// Elapsed time since the clock started (zero if never started).
    pub fn elapsed(&self) -> Duration {
        self.started_at()
            .map(|s| s.elapsed())
            .unwrap_or(Duration::ZERO)
    }

    /// Remaining time (None if there is no limit).
    pub fn remaining(&self) -> Option<Duration> {
        let limit = self.time_limit?;
        Some(limit.saturating_sub(self.elapsed()))
    }

    fn started_at(&self) -> Option<Instant> {
        *self.start_time.read().unwrap_or_else(PoisonError::into_inner)
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
