// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types shared by the chain walker and the dispatcher.

/// Source of parent links for the responder chain.
///
/// The chain is never materialized: every walk asks this lookup for the next
/// responder of the node it just visited. Implementations must keep ancestry
/// acyclic; a cycle makes a walk run forever.
pub trait ParentLookup<K> {
    /// Return the next responder of `node`, or `None` at the end of the chain.
    fn parent_of(&self, node: &K) -> Option<K>;
}

/// A parent lookup where every node is its own root.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct NoParent;

impl<K> ParentLookup<K> for NoParent {
    fn parent_of(&self, _node: &K) -> Option<K> {
        None
    }
}

impl<K, P: ParentLookup<K> + ?Sized> ParentLookup<K> for &P {
    fn parent_of(&self, node: &K) -> Option<K> {
        (**self).parent_of(node)
    }
}

/// Propagation control returned by a handler.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Outcome {
    /// The node did not handle the event; keep walking the chain.
    #[default]
    Continue,
    /// The node handled the event; stop at this node.
    Stop,
}

impl Outcome {
    /// Map a "was handled" flag to an outcome.
    #[inline]
    pub fn from_handled(handled: bool) -> Self {
        if handled { Self::Stop } else { Self::Continue }
    }

    /// Whether this outcome stops propagation.
    #[inline]
    pub fn is_stop(self) -> bool {
        matches!(self, Self::Stop)
    }
}
