// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Multi-click counting.
//!
//! Desktop toolkits report a click count with every press so that views can
//! tell a single click from a double or triple click. The count grows while
//! presses follow the previous release quickly enough, and falls back to `1`
//! otherwise.
//!
//! ## Usage
//!
//! ```
//! use understory_event_state::click::ClickCounter;
//!
//! let mut clicks = ClickCounter::new();
//!
//! assert_eq!(clicks.on_down(1000), 1);
//! clicks.on_up(1040);
//!
//! // Pressed again 100ms after the release: a double click.
//! assert_eq!(clicks.on_down(1140), 2);
//! clicks.on_up(1180);
//!
//! // Too slow: the count starts over.
//! assert_eq!(clicks.on_down(1500), 1);
//! ```
//!
//! ## Counting Rules
//!
//! 1. **First press**: a press with no recorded release counts as `1`.
//! 2. **Within interval**: a press at most `interval` milliseconds after the
//!    previous release increments the count.
//! 3. **Past interval**: a press more than `interval` milliseconds after the
//!    previous release resets the count to `1`.
//! 4. **Position is ignored**: only timing decides; hit testing is the caller's job.
//!
//! Timestamps are milliseconds from any monotonic origin chosen by the host.
//! A timestamp that goes backwards is treated as zero elapsed time.

/// Default maximum gap, in milliseconds, between a release and the next press
/// for the press to continue a multi-click.
pub const DEFAULT_MULTI_CLICK_INTERVAL: u64 = 200;

/// Click count state machine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClickCounter {
    /// Maximum gap between release and next press that still continues a multi-click (milliseconds)
    pub interval: u64,
    /// Count reported for the current (or most recent) press
    count: u32,
    /// Timestamp of the last release
    last_up: Option<u64>,
}

impl ClickCounter {
    /// Create a counter with the default 200ms interval.
    pub fn new() -> Self {
        Self::with_interval(DEFAULT_MULTI_CLICK_INTERVAL)
    }

    /// Create a counter with a custom interval in milliseconds.
    pub fn with_interval(interval: u64) -> Self {
        Self {
            interval,
            count: 0,
            last_up: None,
        }
    }

    /// Record a press at `timestamp` and return its click count.
    pub fn on_down(&mut self, timestamp: u64) -> u32 {
        let continues = self
            .last_up
            .is_some_and(|up| timestamp.saturating_sub(up) <= self.interval);
        self.count = if continues {
            self.count.saturating_add(1)
        } else {
            1
        };
        self.count
    }

    /// Record a release at `timestamp` and return the count of the press it ends.
    ///
    /// A release without a press reports `0`; it still starts the interval
    /// for the next press.
    pub fn on_up(&mut self, timestamp: u64) -> u32 {
        self.last_up = Some(timestamp);
        self.count
    }

    /// Click count of the current (or most recent) press, `0` before any press.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Timestamp of the last recorded release.
    pub fn last_up(&self) -> Option<u64> {
        self.last_up
    }

    /// Override the count of the current press.
    ///
    /// Useful for hosts that report double clicks as a separate native event.
    pub fn set_count(&mut self, count: u32) {
        self.count = count;
    }

    /// Forget all history.
    pub fn reset(&mut self) {
        self.count = 0;
        self.last_up = None;
    }
}

impl Default for ClickCounter {
    fn default() -> Self {
        Self::new()
    }
}
