// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_root_responder --heading-base-level=0

//! Understory Root Responder: desktop-style event and action routing.
//!
//! ## Overview
//!
//! The root responder sits between the host window system and the view tree.
//! It receives every pointer, key and window event, and:
//!
//! - keeps top-level panes in layered z-order and tracks the focused, key and
//!   main panes ([`RootResponder::order_before`], [`RootResponder::make_key_pane`]);
//! - resolves named actions to a handler ([`RootResponder::target_for_action`]);
//! - routes pointer events through responder chains, tracking the gesture
//!   owner, click counts, hover and drags ([`mouse`]);
//! - tracks window focus and size ([`window`]);
//! - offers unhandled key presses as key equivalents ([`key`]).
//!
//! It never owns views or panes. Everything is addressed by a key `K`, and the
//! host answers questions about keys through the [`host`] traits.
//!
//! ## Usage
//!
//! ```
//! use kurbo::Size;
//! use understory_pane_stack::{OrderLayer, PaneFocus};
//! use understory_responder::types::{Outcome, ParentLookup};
//! use understory_root_responder::RootResponder;
//! use understory_root_responder::host::{Environment, MouseAction, ResponderHost};
//! use understory_root_responder::mouse::MouseEvent;
//!
//! struct App {
//!     saved: bool,
//! }
//!
//! impl ParentLookup<u32> for App {
//!     fn parent_of(&self, node: &u32) -> Option<u32> {
//!         // Views 10.. live in pane 1.
//!         (*node >= 10).then_some(1)
//!     }
//! }
//! impl PaneFocus<u32> for App {
//!     fn order_layer(&self, _: &u32) -> OrderLayer {
//!         OrderLayer::PANEL
//!     }
//!     fn blur_to(&mut self, _: &u32, _: Option<u32>) {}
//!     fn focus_from(&mut self, _: &u32, _: Option<u32>) {}
//! }
//! impl ResponderHost<u32> for App {
//!     fn has_action(&self, node: &u32, action: &str) -> bool {
//!         *node == 1 && action == "save"
//!     }
//!     fn perform_action(&mut self, _: &u32, _: &str, _: Option<u32>) {
//!         self.saved = true;
//!     }
//!     fn responds_to_mouse(&self, _: &u32, _: MouseAction) -> bool {
//!         false
//!     }
//!     fn mouse_event(&mut self, _: &u32, _: MouseAction, _: &MouseEvent) -> Outcome {
//!         Outcome::Continue
//!     }
//!     fn first_responder(&self, _: &u32) -> Option<u32> {
//!         Some(10)
//!     }
//!     fn default_responder(&self, _: &u32) -> Option<u32> {
//!         None
//!     }
//! }
//! impl Environment<u32> for App {
//!     fn target_view_for_event(&self, _: &MouseEvent) -> Option<u32> {
//!         Some(10)
//!     }
//!     fn window_size(&self) -> Size {
//!         Size::new(800.0, 600.0)
//!     }
//! }
//!
//! let mut app = App { saved: false };
//! let mut root = RootResponder::new();
//! root.setup(&mut app);
//! root.order_front(&mut app, 1);
//! root.make_key_pane(&mut app, Some(1));
//!
//! // The first responder (10) does not save; its pane does.
//! assert_eq!(root.target_for_action(&app, "save", None, None), Some(1));
//! assert!(root.send_action(&mut app, "save", None, Some(10), None));
//! assert!(app.saved);
//! ```
//!
//! ## Features
//!
//! - `std` (default): forwarded to `kurbo`.
//! - `libm`: `no_std` math support for `kurbo`.
//! - `tracing`: log routing decisions through `tracing`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use core::fmt::Debug;

use understory_event_state::click::ClickCounter;
use understory_pane_stack::{FocusChange, PaneStack};

pub mod action;
pub mod batch;
pub mod host;
pub mod key;
pub mod mouse;
pub mod registry;
pub mod window;

mod logging;
#[cfg(test)]
mod test_host;

use crate::batch::UpdateBatch;
use crate::host::ResponderHost;
use crate::logging::debug;
use crate::mouse::MouseState;
use crate::registry::TargetRegistry;
use crate::window::WindowState;

/// Event and action router for one window.
#[derive(Clone, Debug)]
pub struct RootResponder<K> {
    panes: PaneStack<K>,
    key_pane: Option<K>,
    main_pane: Option<K>,
    main_menu: Option<K>,
    default_responder: Option<K>,
    targets: TargetRegistry<K>,
    mouse: MouseState<K>,
    window: WindowState,
    batch: UpdateBatch,
}

impl<K: Copy + Eq + Debug> RootResponder<K> {
    /// Create a root responder with the default multi-click interval.
    pub fn new() -> Self {
        Self::with_clicks(ClickCounter::new())
    }

    /// Create a root responder whose multi-click interval is `interval`
    /// milliseconds.
    pub fn with_click_interval(interval: u64) -> Self {
        Self::with_clicks(ClickCounter::with_interval(interval))
    }

    fn with_clicks(clicks: ClickCounter) -> Self {
        Self {
            panes: PaneStack::new(),
            key_pane: None,
            main_pane: None,
            main_menu: None,
            default_responder: None,
            targets: TargetRegistry::new(),
            mouse: MouseState::new(clicks),
            window: WindowState::default(),
            batch: UpdateBatch::new(),
        }
    }

    /// Ordered panes, back to front.
    pub fn ordered_panes(&self) -> &[K] {
        self.panes.as_slice()
    }

    /// The frontmost pane.
    pub fn focused_pane(&self) -> Option<K> {
        self.panes.focused()
    }

    /// Order `pane` just behind `before`, or at the front of its layer.
    ///
    /// See [`PaneStack::insert_before`].
    pub fn order_before<H: ResponderHost<K> + ?Sized>(
        &mut self,
        host: &mut H,
        pane: K,
        before: Option<K>,
    ) -> Option<FocusChange<K>> {
        self.panes.insert_before(host, pane, before)
    }

    /// Bring `pane` to the front of its layer.
    pub fn order_front<H: ResponderHost<K> + ?Sized>(
        &mut self,
        host: &mut H,
        pane: K,
    ) -> Option<FocusChange<K>> {
        self.panes.order_front(host, pane)
    }

    /// Send `pane` behind the other panes of its layer.
    pub fn order_back<H: ResponderHost<K> + ?Sized>(
        &mut self,
        host: &mut H,
        pane: K,
    ) -> Option<FocusChange<K>> {
        self.panes.order_back(host, pane)
    }

    /// Remove `pane` from the pane stack.
    ///
    /// If `pane` was the key pane, key status moves to the newly focused pane
    /// when `pane` was also focused and the new pane accepts it. Otherwise
    /// there is no key pane afterwards.
    pub fn order_out<H: ResponderHost<K> + ?Sized>(
        &mut self,
        host: &mut H,
        pane: K,
    ) -> Option<FocusChange<K>> {
        let change = self.panes.remove(host, pane);
        if self.key_pane == Some(pane) {
            let next = change
                .and_then(|c| c.to)
                .filter(|p| host.accepts_key_pane(p));
            self.set_key_pane(host, next);
        }
        change
    }

    /// Make `pane` the key pane, or clear key status with `None`.
    ///
    /// Returns `false` if `pane` refuses key status; nothing changes then.
    pub fn make_key_pane<H: ResponderHost<K> + ?Sized>(
        &mut self,
        host: &mut H,
        pane: Option<K>,
    ) -> bool {
        if let Some(p) = pane
            && !host.accepts_key_pane(&p)
        {
            debug!(pane = ?p, "pane refused key status");
            return false;
        }
        self.set_key_pane(host, pane);
        true
    }

    fn set_key_pane<H: ResponderHost<K> + ?Sized>(&mut self, host: &mut H, pane: Option<K>) {
        let old = self.key_pane;
        if old == pane {
            return;
        }
        if let Some(o) = old {
            host.will_lose_key_pane_to(&o, pane);
        }
        self.key_pane = pane;
        if let Some(p) = pane {
            host.did_become_key_pane_from(&p, old);
        }
        debug!(from = ?old, to = ?pane, "key pane changed");
    }

    /// The pane receiving keyboard input and untargeted actions first.
    pub fn key_pane(&self) -> Option<K> {
        self.key_pane
    }

    /// Set the main pane, searched for actions after the key pane.
    pub fn set_main_pane(&mut self, pane: Option<K>) {
        self.main_pane = pane;
    }

    /// The main pane.
    pub fn main_pane(&self) -> Option<K> {
        self.main_pane
    }

    /// Set the main menu, offered key equivalents last.
    pub fn set_main_menu(&mut self, menu: Option<K>) {
        self.main_menu = menu;
    }

    /// The main menu.
    pub fn main_menu(&self) -> Option<K> {
        self.main_menu
    }

    /// Set the global default responder, the last resort for actions.
    pub fn set_default_responder(&mut self, responder: Option<K>) {
        self.default_responder = responder;
    }

    /// The global default responder.
    pub fn default_responder(&self) -> Option<K> {
        self.default_responder
    }

    /// Named action targets.
    pub fn targets(&self) -> &TargetRegistry<K> {
        &self.targets
    }

    /// Named action targets, for registration.
    pub fn targets_mut(&mut self) -> &mut TargetRegistry<K> {
        &mut self.targets
    }
}

impl<K: Copy + Eq + Debug> Default for RootResponder<K> {
    fn default() -> Self {
        Self::new()
    }
}
