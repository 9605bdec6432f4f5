// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_pane_stack --heading-base-level=0

//! Understory Pane Stack: layered z-ordering of top-level panes.
//!
//! A desktop-style application shows several top-level panes at once: regular
//! panels, floating palettes and transient popups. This crate keeps them in a
//! single back-to-front sequence and tells panes when the frontmost (focused)
//! one changes.
//!
//! ## Ordering
//!
//! Every pane has an [`OrderLayer`]. The sequence is always sorted by layer,
//! ascending, so a popup stays in front of every palette and every palette in
//! front of every panel, whatever order the calls arrive in. Within a layer,
//! panes keep the order they were inserted in.
//!
//! [`PaneStack::insert_before`] takes an optional pane to insert behind.
//! When that pane lives in a different layer, the insertion point slides along
//! the sequence to the nearest position that keeps the layers sorted. Without
//! one, the pane goes to the front of its layer.
//!
//! ## Focus
//!
//! The last pane of the sequence is the focused pane. Whenever a mutation
//! changes it, the stack calls [`PaneFocus::blur_to`] on the old focused pane
//! and then [`PaneFocus::focus_from`] on the new one. A side that does not
//! exist (the stack was empty, or became empty) is skipped.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_pane_stack::{OrderLayer, PaneFocus, PaneStack};
//!
//! struct Host {
//!     log: Vec<(&'static str, u32)>,
//! }
//! impl PaneFocus<u32> for Host {
//!     fn order_layer(&self, pane: &u32) -> OrderLayer {
//!         if *pane >= 100 { OrderLayer::POPUP } else { OrderLayer::PANEL }
//!     }
//!     fn blur_to(&mut self, pane: &u32, _new_focus: Option<u32>) {
//!         self.log.push(("blur", *pane));
//!     }
//!     fn focus_from(&mut self, pane: &u32, _old_focus: Option<u32>) {
//!         self.log.push(("focus", *pane));
//!     }
//! }
//!
//! let mut host = Host { log: Vec::new() };
//! let mut stack = PaneStack::new();
//!
//! stack.insert_before(&mut host, 100, None); // popup
//! stack.insert_before(&mut host, 1, None); // panel goes behind the popup
//! assert_eq!(stack.as_slice(), &[1, 100]);
//! assert_eq!(stack.focused(), Some(100));
//!
//! stack.remove(&mut host, 100);
//! assert_eq!(stack.focused(), Some(1));
//! assert_eq!(host.log, vec![("focus", 100), ("blur", 100), ("focus", 1)]);
//! ```
//!
//! ## Features
//!
//! - `tracing`: log ordering and focus changes through `tracing`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use core::cmp::Ordering;

#[cfg(feature = "tracing")]
macro_rules! trace {
    ($($arg:tt)*) => { tracing::trace!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace {
    ($($arg:tt)*) => {};
}

/// Coarse z-ordering tier of a pane.
///
/// Higher layers are always in front of lower ones.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OrderLayer(pub u32);

impl OrderLayer {
    /// Regular panels: in front of the main view, behind palettes and popups.
    pub const PANEL: Self = Self(0x1000);
    /// Palettes: in front of panels, behind popups.
    pub const PALETTE: Self = Self(0x2000);
    /// Popups: in front of everything else.
    pub const POPUP: Self = Self(0x3000);
}

impl Default for OrderLayer {
    fn default() -> Self {
        Self::PANEL
    }
}

/// What the stack needs to know about, and tell to, panes.
pub trait PaneFocus<K> {
    /// The layer `pane` is ordered in.
    ///
    /// Must not change while the pane is in a stack.
    fn order_layer(&self, pane: &K) -> OrderLayer;

    /// `pane` stops being the focused pane; `new_focus` takes over.
    fn blur_to(&mut self, pane: &K, new_focus: Option<K>);

    /// `pane` becomes the focused pane, taking over from `old_focus`.
    fn focus_from(&mut self, pane: &K, old_focus: Option<K>);
}

/// A change of focused pane reported by a stack mutation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FocusChange<K> {
    /// The previously focused pane.
    pub from: Option<K>,
    /// The newly focused pane.
    pub to: Option<K>,
}

/// Back-to-front sequence of panes.
#[derive(Clone, Debug)]
pub struct PaneStack<K> {
    panes: Vec<K>,
}

impl<K: Copy + Eq + core::fmt::Debug> PaneStack<K> {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self { panes: Vec::new() }
    }

    /// The frontmost pane, if any.
    pub fn focused(&self) -> Option<K> {
        self.panes.last().copied()
    }

    /// Panes back to front.
    pub fn as_slice(&self) -> &[K] {
        &self.panes
    }

    /// Iterate panes back to front.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = K> + '_ {
        self.panes.iter().copied()
    }

    /// Number of panes.
    pub fn len(&self) -> usize {
        self.panes.len()
    }

    /// Whether the stack holds no panes.
    pub fn is_empty(&self) -> bool {
        self.panes.is_empty()
    }

    /// Whether `pane` is in the stack.
    pub fn contains(&self, pane: &K) -> bool {
        self.panes.contains(pane)
    }

    /// Position of `pane`, counted from the back.
    pub fn position(&self, pane: &K) -> Option<usize> {
        self.panes.iter().position(|p| p == pane)
    }

    /// Insert `pane` just behind `before`, or at the front of its layer.
    ///
    /// A pane already in the stack is moved. If `before` is in another layer
    /// the insertion point slides to the nearest position that keeps layers
    /// sorted. A `before` that is not in the stack (including `pane` itself)
    /// is treated as `None`.
    ///
    /// Returns the focus change, if the frontmost pane changed.
    pub fn insert_before<H: PaneFocus<K> + ?Sized>(
        &mut self,
        host: &mut H,
        pane: K,
        before: Option<K>,
    ) -> Option<FocusChange<K>> {
        let old = self.focused();
        self.panes.retain(|p| *p != pane);
        let layer = host.order_layer(&pane);
        let idx = self.insertion_index(&*host, layer, before);
        self.panes.insert(idx, pane);
        trace!(pane = ?pane, index = idx, layer = layer.0, "pane ordered");

        let new = self.focused();
        (new != old).then(|| Self::transfer(host, old, new))
    }

    /// Bring `pane` to the front of its layer.
    pub fn order_front<H: PaneFocus<K> + ?Sized>(
        &mut self,
        host: &mut H,
        pane: K,
    ) -> Option<FocusChange<K>> {
        self.insert_before(host, pane, None)
    }

    /// Send `pane` behind every other pane of its layer.
    pub fn order_back<H: PaneFocus<K> + ?Sized>(
        &mut self,
        host: &mut H,
        pane: K,
    ) -> Option<FocusChange<K>> {
        let layer = host.order_layer(&pane);
        let before = self
            .panes
            .iter()
            .copied()
            .find(|p| *p != pane && host.order_layer(p) >= layer);
        self.insert_before(host, pane, before)
    }

    /// Remove `pane` from the stack.
    ///
    /// If it was the focused pane, exactly one blur/focus transfer happens
    /// and is returned. Removing a pane that is not in the stack is a no-op.
    pub fn remove<H: PaneFocus<K> + ?Sized>(
        &mut self,
        host: &mut H,
        pane: K,
    ) -> Option<FocusChange<K>> {
        let idx = self.position(&pane)?;
        let was_focused = idx + 1 == self.panes.len();
        self.panes.remove(idx);
        trace!(pane = ?pane, was_focused, "pane removed");
        if !was_focused {
            return None;
        }
        let new = self.focused();
        Some(Self::transfer(host, Some(pane), new))
    }

    fn insertion_index<H: PaneFocus<K> + ?Sized>(
        &self,
        host: &H,
        layer: OrderLayer,
        before: Option<K>,
    ) -> usize {
        let len = self.panes.len();
        let layer_at = |i: usize| host.order_layer(&self.panes[i]);
        // Just behind the first pane of a higher layer.
        let front_of_layer = |upto: usize| {
            (0..upto)
                .rev()
                .find(|&i| layer_at(i) <= layer)
                .map_or(0, |i| i + 1)
        };

        let Some(idx) = before.and_then(|b| self.position(&b)) else {
            return front_of_layer(len);
        };
        match layer_at(idx).cmp(&layer) {
            Ordering::Equal => idx,
            Ordering::Less => (idx..len).find(|&i| layer_at(i) >= layer).unwrap_or(len),
            Ordering::Greater => front_of_layer(idx + 1),
        }
    }

    fn transfer<H: PaneFocus<K> + ?Sized>(
        host: &mut H,
        from: Option<K>,
        to: Option<K>,
    ) -> FocusChange<K> {
        trace!(from = ?from, to = ?to, "focused pane changed");
        if let Some(old) = from {
            host.blur_to(&old, to);
        }
        if let Some(new) = to {
            host.focus_from(&new, from);
        }
        FocusChange { from, to }
    }
}

impl<K: Copy + Eq + core::fmt::Debug> Default for PaneStack<K> {
    fn default() -> Self {
        Self::new()
    }
}
