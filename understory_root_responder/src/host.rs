// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Capability contracts the root responder relies on.
//!
//! The root responder never owns views or panes. It addresses them by key and
//! asks the host what they can do:
//!
//! - [`ResponderHost`]: what views, panes and default responders implement.
//! - [`Environment`]: what the surrounding window system knows (hit testing,
//!   window size) and wants to hear (focus changes, end of an update batch).
//!
//! [`Host`] is implemented for every type providing both.

use kurbo::Size;
use understory_pane_stack::PaneFocus;
use understory_responder::types::{Outcome, ParentLookup};

use crate::key::KeyEvent;
use crate::mouse::MouseEvent;

/// Pointer handlers a view may implement.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MouseAction {
    /// A button was pressed over the view.
    MouseDown,
    /// The button pressed over the view was released.
    MouseUp,
    /// The pointer moved while the button pressed over the view is held.
    MouseDragged,
    /// The pointer moved within the view.
    MouseMoved,
    /// The pointer entered the view.
    MouseEntered,
    /// The pointer left the view.
    MouseExited,
    /// The wheel turned over the view.
    MouseWheel,
    /// A press and release formed a single click.
    Click,
    /// A press and release formed the second click of a double click.
    DoubleClick,
}

/// Views, panes and responders as seen by the root responder.
///
/// Every key may stand for a view, a pane, a default responder, a drag session
/// or a registered action target. [`ParentLookup::parent_of`] gives the next
/// responder of a view; a pane is the last view of its chain.
pub trait ResponderHost<K>: ParentLookup<K> + PaneFocus<K> {
    /// Explicit capability check.
    ///
    /// Return `None` if `node` has no such check; the resolver then falls back
    /// to [`has_action`](Self::has_action).
    fn responds_to_action(&self, _node: &K, _action: &str) -> Option<bool> {
        None
    }

    /// Whether `node` has a callable member named `action`.
    fn has_action(&self, node: &K, action: &str) -> bool;

    /// Invoke `action` on `node`.
    fn perform_action(&mut self, node: &K, action: &str, sender: Option<K>);

    /// Whether `node` implements the pointer handler `action`.
    fn responds_to_mouse(&self, node: &K, action: MouseAction) -> bool;

    /// Deliver a pointer event to `node`.
    ///
    /// Return [`Outcome::Stop`] if the node handled it. A node without the
    /// handler returns [`Outcome::Continue`].
    fn mouse_event(&mut self, node: &K, action: MouseAction, event: &MouseEvent) -> Outcome;

    /// The view currently focused inside `pane`.
    fn first_responder(&self, pane: &K) -> Option<K>;

    /// Fallback responder of `pane`.
    fn default_responder(&self, pane: &K) -> Option<K>;

    /// The window was resized from `old` to `new`.
    fn window_size_did_change(&mut self, _pane: &K, _old: Size, _new: Size) {}

    /// Offer a key equivalent such as `ctrl_s` to `pane`; return `true` if handled.
    fn perform_key_equivalent(
        &mut self,
        _pane: &K,
        _keystring: &str,
        _event: &KeyEvent<'_>,
    ) -> bool {
        false
    }

    /// Whether `pane` may become the key pane.
    fn accepts_key_pane(&self, _pane: &K) -> bool {
        true
    }

    /// `pane` is about to stop being the key pane.
    fn will_lose_key_pane_to(&mut self, _pane: &K, _new_key: Option<K>) {}

    /// `pane` just became the key pane.
    fn did_become_key_pane_from(&mut self, _pane: &K, _old_key: Option<K>) {}
}

/// The window system hosting the panes.
pub trait Environment<K> {
    /// Hit test: the innermost view under the pointer of `event`.
    fn target_view_for_event(&self, event: &MouseEvent) -> Option<K>;

    /// Current inner size of the window.
    fn window_size(&self) -> Size;

    /// The window gained or lost focus.
    fn window_focus_did_change(&mut self, _has_focus: bool) {}

    /// An outermost update batch closed; recompute dependent state once.
    fn flush_updates(&mut self) {}
}

/// Everything the root responder needs from its host.
pub trait Host<K>: ResponderHost<K> + Environment<K> {}

impl<K, T: ResponderHost<K> + Environment<K> + ?Sized> Host<K> for T {}
