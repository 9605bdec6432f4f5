// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover tracking over responder chains.
//!
//! Each pointer move produces the chain of views under the pointer, innermost
//! first (the hit view, then its ancestors). [`HoverState`] compares it to the
//! previous chain and reports, per view:
//!
//! - [`HoverEvent::Move`] for views hovered before and still hovered,
//! - [`HoverEvent::Enter`] for views hovered for the first time,
//! - [`HoverEvent::Exit`] for views no longer under the pointer.
//!
//! Move/Enter events come first, in chain order. Exit events follow, in the
//! order of the previous chain.
//!
//! ```
//! use understory_event_state::hover::{HoverEvent, HoverState};
//!
//! let mut hover = HoverState::new();
//!
//! // Pointer over child 3 of parent 2 in pane 1.
//! let events = hover.update_chain([3, 2, 1]);
//! assert_eq!(events, vec![HoverEvent::Enter(3), HoverEvent::Enter(2), HoverEvent::Enter(1)]);
//!
//! // Pointer moves to sibling 4.
//! let events = hover.update_chain([4, 2, 1]);
//! assert_eq!(events, vec![
//!     HoverEvent::Enter(4),
//!     HoverEvent::Move(2),
//!     HoverEvent::Move(1),
//!     HoverEvent::Exit(3),
//! ]);
//! ```

use alloc::vec::Vec;
use smallvec::SmallVec;

/// A hover transition for a single view.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum HoverEvent<K> {
    /// The pointer entered this view.
    Enter(K),
    /// The pointer moved within a view it was already over.
    Move(K),
    /// The pointer left this view.
    Exit(K),
}

impl<K> HoverEvent<K> {
    /// The view this transition concerns.
    pub fn node(&self) -> &K {
        match self {
            Self::Enter(k) | Self::Move(k) | Self::Exit(k) => k,
        }
    }
}

/// The set of views under the pointer as of the last move.
#[derive(Clone, Debug)]
pub struct HoverState<K> {
    current: SmallVec<[K; 8]>,
}

impl<K: Copy + PartialEq> HoverState<K> {
    /// Create an empty hover state.
    pub fn new() -> Self {
        Self {
            current: SmallVec::new(),
        }
    }

    /// Views currently hovered, innermost first.
    pub fn current(&self) -> &[K] {
        &self.current
    }

    /// Whether `node` is currently hovered.
    pub fn is_hovered(&self, node: &K) -> bool {
        self.current.contains(node)
    }

    /// Replace the hovered chain and return the transitions.
    ///
    /// Duplicate nodes in `chain` are kept once, at their first position.
    pub fn update_chain(&mut self, chain: impl IntoIterator<Item = K>) -> Vec<HoverEvent<K>> {
        let mut next: SmallVec<[K; 8]> = SmallVec::new();
        let mut out = Vec::new();
        for node in chain {
            if next.contains(&node) {
                continue;
            }
            next.push(node);
            if self.is_hovered(&node) {
                out.push(HoverEvent::Move(node));
            } else {
                out.push(HoverEvent::Enter(node));
            }
        }
        out.extend(
            self.current
                .iter()
                .filter(|n| !next.contains(n))
                .map(|n| HoverEvent::Exit(*n)),
        );
        self.current = next;
        out
    }

    /// Forget the hovered chain and return an exit for each view in it.
    pub fn clear(&mut self) -> Vec<HoverEvent<K>> {
        self.current.drain(..).map(HoverEvent::Exit).collect()
    }
}

impl<K: Copy + PartialEq> Default for HoverState<K> {
    fn default() -> Self {
        Self::new()
    }
}
