// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_responder --heading-base-level=0

//! Understory Responder: deterministic, `no_std` responder chain walking.
//!
//! ## Overview
//!
//! A responder chain is the path an unhandled event or action takes from the
//! view it originated in, through that view's ancestors, up to the top-level
//! pane that contains it. This crate does not store the chain. It follows
//! parent links supplied by a [`ParentLookup`](crate::types::ParentLookup)
//! every time a walk is needed, so the chain always reflects the current view
//! hierarchy.
//!
//! It does not perform hit testing, and it does not know what a pane is.
//! Callers decide where a walk starts and, when needed, where it ends.
//!
//! ## Walking
//!
//! [`Chain`](crate::chain::Chain) is an iterator over a node and its ancestors,
//! innermost first. Use [`Chain::stop_after`](crate::chain::Chain::stop_after)
//! to end the walk at a boundary node (for example the pane a first responder
//! lives in).
//!
//! ## Delivering
//!
//! [`dispatcher::send`] offers an event to each node of the chain and stops at
//! the first handler that reports [`Outcome::Stop`](crate::types::Outcome::Stop).
//! It returns the node that handled the event, or `None` if nobody did.
//!
//! ```
//! use understory_responder::dispatcher;
//! use understory_responder::types::{NoParent, Outcome};
//!
//! let mut host = NoParent;
//! let handler = dispatcher::send(Some(7_u32), &mut host, |_, _| Outcome::Stop);
//! assert_eq!(handler, Some(7));
//! ```
//!
//! This crate is `no_std` and uses `alloc` in tests only.

#![no_std]

#[cfg(test)]
extern crate alloc;

pub mod chain;
pub mod dispatcher;
pub mod types;
