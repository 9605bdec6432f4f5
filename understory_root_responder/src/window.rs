// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Window focus and size tracking.

use core::fmt::Debug;

use kurbo::Size;

use crate::RootResponder;
use crate::host::{Environment, Host};
use crate::logging::{debug, trace};

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub(crate) struct WindowState {
    pub(crate) has_focus: bool,
    pub(crate) size: Size,
}

impl<K: Copy + Eq + Debug> RootResponder<K> {
    /// Record the initial window size and assume the window has focus.
    pub fn setup<H: Environment<K> + ?Sized>(&mut self, host: &mut H) {
        self.window.size = host.window_size();
        self.focus(host);
    }

    /// Re-read the window size and notify panes if it changed.
    ///
    /// Every ordered pane, and the main pane when it is not ordered, receives
    /// [`window_size_did_change`](crate::host::ResponderHost::window_size_did_change)
    /// inside one update batch. Returns whether the size changed.
    pub fn resize<H: Host<K> + ?Sized>(&mut self, host: &mut H) -> bool {
        let new = host.window_size();
        let old = self.window.size;
        if new == old {
            return false;
        }
        self.window.size = new;
        debug!(width = new.width, height = new.height, "window resized");

        self.batched(host, |this, host| {
            for pane in this.panes.iter() {
                host.window_size_did_change(&pane, old, new);
            }
            if let Some(main) = this.main_pane
                && !this.panes.contains(&main)
            {
                host.window_size_did_change(&main, old, new);
            }
        });
        true
    }

    /// The window gained focus.
    pub fn focus<H: Environment<K> + ?Sized>(&mut self, host: &mut H) {
        self.set_focus(host, true);
    }

    /// The window lost focus.
    ///
    /// Click counting starts over, so a press after refocusing is never
    /// taken as part of a double click.
    pub fn blur<H: Environment<K> + ?Sized>(&mut self, host: &mut H) {
        self.set_focus(host, false);
    }

    fn set_focus<H: Environment<K> + ?Sized>(&mut self, host: &mut H, has_focus: bool) {
        if self.window.has_focus == has_focus {
            return;
        }
        trace!(has_focus, "window focus changed");
        if !has_focus {
            self.mouse.clicks.reset();
        }
        self.batched(host, |this, host| {
            this.window.has_focus = has_focus;
            host.window_focus_did_change(has_focus);
        });
    }

    /// Whether the window has focus.
    pub fn has_focus(&self) -> bool {
        self.window.has_focus
    }

    /// The last recorded window size.
    pub fn window_size(&self) -> Size {
        self.window.size
    }
}
