//! Startup pacing between the loading and ready modes.

use std::time::{Duration, Instant};

/// Delay between store start and the ready mode.
pub const DEFAULT_READY_DELAY: Duration = Duration::from_millis(1000);

/// Externally visible store mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreMode {
    /// Presentation shows a blocking loading indicator.
    Loading,
    /// Full CRUD is available.
    Ready,
}

impl StoreMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Ready => "ready",
        }
    }
}

/// Fixed-delay gate deriving the store mode from elapsed time.
///
/// The transition is one-way: once `delay` has elapsed since `started_at`
/// the mode stays `Ready`, because `Instant` never goes backwards.
#[derive(Debug, Clone, Copy)]
pub struct LoadingGate {
    started_at: Instant,
    delay: Duration,
}

impl LoadingGate {
    pub fn new(started_at: Instant, delay: Duration) -> Self {
        Self { started_at, delay }
    }

    pub fn mode(&self) -> StoreMode {
        self.mode_at(Instant::now())
    }

    pub fn mode_at(&self, now: Instant) -> StoreMode {
        if self.remaining_at(now).is_zero() {
            StoreMode::Ready
        } else {
            StoreMode::Loading
        }
    }

    pub fn remaining_at(&self, now: Instant) -> Duration {
        self.delay
            .saturating_sub(now.saturating_duration_since(self.started_at))
    }

    /// Blocks the calling thread until the gate reports `Ready`.
    pub fn wait_until_ready(&self) {
        let remaining = self.remaining_at(Instant::now());
        if !remaining.is_zero() {
            std::thread::sleep(remaining);
        }
    }
}
