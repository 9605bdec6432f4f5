// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Upward responder chain iteration.
//!
//! A [`Chain`] starts at a node and follows [`ParentLookup::parent_of`] until
//! the lookup runs out of parents. An optional bound ends the walk right after
//! a given node has been yielded, which is how a walk is kept inside a pane.
//!
//! ```
//! use understory_responder::chain::Chain;
//! use understory_responder::types::ParentLookup;
//!
//! struct Parents;
//! impl ParentLookup<u32> for Parents {
//!     fn parent_of(&self, node: &u32) -> Option<u32> {
//!         (*node > 1).then(|| node - 1)
//!     }
//! }
//!
//! let all: Vec<u32> = Chain::new(Some(4), &Parents).collect();
//! assert_eq!(all, vec![4, 3, 2, 1]);
//!
//! let bounded: Vec<u32> = Chain::new(Some(4), &Parents).stop_after(3).collect();
//! assert_eq!(bounded, vec![4, 3]);
//! ```

use crate::types::ParentLookup;

/// Iterator over a node and its ancestors, innermost first.
#[derive(Clone, Debug)]
pub struct Chain<'a, K, P: ?Sized> {
    parents: &'a P,
    next: Option<K>,
    bound: Option<K>,
}

impl<'a, K: Copy + Eq, P: ParentLookup<K> + ?Sized> Chain<'a, K, P> {
    /// Start a walk at `start`. A `None` start yields nothing.
    pub fn new(start: Option<K>, parents: &'a P) -> Self {
        Self {
            parents,
            next: start,
            bound: None,
        }
    }

    /// End the walk after `node` has been yielded.
    ///
    /// If `node` is not an ancestor of the start, the walk runs to the root.
    pub fn stop_after(mut self, node: K) -> Self {
        self.bound = Some(node);
        self
    }
}

impl<K: Copy + Eq, P: ParentLookup<K> + ?Sized> Iterator for Chain<'_, K, P> {
    type Item = K;

    fn next(&mut self) -> Option<K> {
        let cur = self.next.take()?;
        if self.bound != Some(cur) {
            self.next = self.parents.parent_of(&cur);
        }
        Some(cur)
    }
}

impl<K: Copy + Eq, P: ParentLookup<K> + ?Sized> core::iter::FusedIterator for Chain<'_, K, P> {}
