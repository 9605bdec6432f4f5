// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dispatcher helper: deliver an event up the responder chain until handled.
//!
//! [`send`] is the delivery primitive behind every pointer event: it offers
//! the event to the start node, then to each next responder, and stops at the
//! first node whose handler reports [`Outcome::Stop`].
//!
//! ## Semantics
//!
//! - Nodes are visited innermost first, following [`ParentLookup::parent_of`].
//! - [`Outcome::Continue`] means "not handled here" (including "no handler").
//! - [`Outcome::Stop`] ends the walk; the node that stopped it is returned.
//! - The parent of a node is looked up after its handler ran, so a handler may
//!   mutate the host it is given.
//!
//! ## Minimal example
//!
//! ```
//! use understory_responder::dispatcher;
//! use understory_responder::types::{Outcome, ParentLookup};
//!
//! // 3 -> 2 -> 1; only node 2 handles the event.
//! struct Host {
//!     seen: Vec<u32>,
//! }
//! impl ParentLookup<u32> for Host {
//!     fn parent_of(&self, node: &u32) -> Option<u32> {
//!         (*node > 1).then(|| node - 1)
//!     }
//! }
//!
//! let mut host = Host { seen: Vec::new() };
//! let handler = dispatcher::send(Some(3), &mut host, |host, node| {
//!     host.seen.push(*node);
//!     Outcome::from_handled(*node == 2)
//! });
//!
//! assert_eq!(handler, Some(2));
//! assert_eq!(host.seen, vec![3, 2]);
//! ```

use crate::types::{Outcome, ParentLookup};

/// Walk from `start` up the chain, calling `handler` on each node.
///
/// Returns the first node whose handler returned [`Outcome::Stop`], or `None`
/// if the chain was exhausted (or `start` was `None`).
pub fn send<K, H>(
    start: Option<K>,
    host: &mut H,
    mut handler: impl FnMut(&mut H, &K) -> Outcome,
) -> Option<K>
where
    K: Copy,
    H: ParentLookup<K> + ?Sized,
{
    let mut cur = start;
    while let Some(node) = cur {
        if handler(host, &node).is_stop() {
            return Some(node);
        }
        cur = host.parent_of(&node);
    }
    None
}
