// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_event_state --heading-base-level=0

//! Understory Event State: small state machines for pointer gestures.
//!
//! Each module tracks just enough state across events to answer one question:
//!
//! - [`click`]: how many clicks does this press belong to?
//! - [`hover`]: which views did the pointer enter, stay in, or leave?
//!
//! ## Design Philosophy
//!
//! - **Minimal and focused**: one interaction pattern per module.
//! - **Integration-friendly**: inputs are timestamps and pre-computed responder
//!   chains (for example from `understory_responder::chain::Chain`), never
//!   framework event types.
//! - **Generic**: hover tracking accepts any small, copyable node key.
//!
//! ## Example
//!
//! ```rust
//! use understory_event_state::click::ClickCounter;
//! use understory_event_state::hover::{HoverEvent, HoverState};
//!
//! let mut clicks = ClickCounter::new();
//! let mut hover = HoverState::new();
//!
//! assert_eq!(hover.update_chain([7_u32, 1]), vec![HoverEvent::Enter(7), HoverEvent::Enter(1)]);
//! assert_eq!(clicks.on_down(0), 1);
//! clicks.on_up(10);
//! assert_eq!(clicks.on_down(50), 2);
//! ```
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

pub mod click;
pub mod hover;
