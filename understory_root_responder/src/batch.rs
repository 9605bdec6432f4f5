// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Coalesced update batches.
//!
//! Some events touch many observers at once: a window resize notifies every
//! pane, a pointer move may enter and exit a dozen views. Opening a batch
//! around such a burst lets the host recompute dependent state once, when the
//! outermost batch closes, instead of after every single change.
//!
//! Batches nest. Only closing the outermost one calls
//! [`Environment::flush_updates`].

use core::fmt::Debug;

use crate::RootResponder;
use crate::host::Environment;
use crate::logging::trace;

/// Nesting counter for update batches.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct UpdateBatch {
    depth: u32,
}

impl UpdateBatch {
    /// Create a closed batch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a (possibly nested) batch.
    pub fn begin(&mut self) {
        self.depth += 1;
    }

    /// Close the innermost batch.
    ///
    /// Returns `true` when this closed the outermost batch and updates should
    /// be flushed. Closing a batch that was never opened returns `false`.
    pub fn end(&mut self) -> bool {
        match self.depth {
            0 => false,
            1 => {
                self.depth = 0;
                true
            }
            _ => {
                self.depth -= 1;
                false
            }
        }
    }

    /// Whether a batch is open.
    pub fn is_open(&self) -> bool {
        self.depth > 0
    }

    /// Current nesting depth.
    pub fn depth(&self) -> u32 {
        self.depth
    }
}

impl<K: Copy + Eq + Debug> RootResponder<K> {
    /// Run `f` inside an update batch.
    ///
    /// If this is the outermost batch, the host's
    /// [`flush_updates`](Environment::flush_updates) runs exactly once after
    /// `f` returns.
    pub fn batched<H, R>(&mut self, host: &mut H, f: impl FnOnce(&mut Self, &mut H) -> R) -> R
    where
        H: Environment<K> + ?Sized,
    {
        self.batch.begin();
        let out = f(self, host);
        if self.batch.end() {
            trace!("flushing coalesced updates");
            host.flush_updates();
        }
        out
    }

    /// Whether an update batch is currently open.
    pub fn in_batch(&self) -> bool {
        self.batch.is_open()
    }
}
