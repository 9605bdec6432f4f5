// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Key equivalents.
//!
//! A key press nobody in the focused chain handled may still be a shortcut.
//! The root responder turns it into a keystring such as `ctrl_shift_s` and
//! offers it, top-down, to the key pane, the main pane and the main menu.

use alloc::string::String;
use core::fmt::Debug;

use bitflags::bitflags;

use crate::RootResponder;
use crate::host::ResponderHost;
use crate::logging::debug;

bitflags! {
    /// Modifier keys held during a key event.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Control.
        const CTRL = 1 << 0;
        /// Alt / Option.
        const ALT = 1 << 1;
        /// Meta / Command.
        const META = 1 << 2;
        /// Shift.
        const SHIFT = 1 << 3;
    }
}

const PREFIXES: [(Modifiers, &str); 4] = [
    (Modifiers::CTRL, "ctrl_"),
    (Modifiers::ALT, "alt_"),
    (Modifiers::META, "meta_"),
    (Modifiers::SHIFT, "shift_"),
];

/// A normalized key event.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct KeyEvent<'a> {
    /// Key name, for example `"s"`, `"escape"` or `"f5"`.
    pub key: &'a str,
    /// Modifiers held.
    pub modifiers: Modifiers,
}

impl<'a> KeyEvent<'a> {
    /// Create a key event.
    pub fn new(key: &'a str, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// The keystring naming this key combination.
    ///
    /// Modifiers come first, in the order ctrl, alt, meta, shift, each followed
    /// by `_`; the lowercased key name comes last. Returns `None` for an empty
    /// key name.
    ///
    /// ```
    /// use understory_root_responder::key::{KeyEvent, Modifiers};
    ///
    /// let evt = KeyEvent::new("Escape", Modifiers::SHIFT | Modifiers::ALT);
    /// assert_eq!(evt.command_code().as_deref(), Some("alt_shift_escape"));
    /// ```
    pub fn command_code(&self) -> Option<String> {
        if self.key.is_empty() {
            return None;
        }
        let mut code = String::new();
        for (flag, prefix) in PREFIXES {
            if self.modifiers.contains(flag) {
                code.push_str(prefix);
            }
        }
        code.push_str(&self.key.to_lowercase());
        Some(code)
    }
}

impl<K: Copy + Eq + Debug> RootResponder<K> {
    /// Offer an unhandled key event as a key equivalent.
    ///
    /// Tries the key pane, then the main pane (if it is not also the key
    /// pane), then the main menu. Returns the pane that handled it.
    pub fn attempt_key_equivalent<H: ResponderHost<K> + ?Sized>(
        &self,
        host: &mut H,
        event: &KeyEvent<'_>,
    ) -> Option<K> {
        let keystring = event.command_code()?;
        let main = self.main_pane.filter(|m| Some(*m) != self.key_pane);
        let handler = [self.key_pane, main, self.main_menu]
            .into_iter()
            .flatten()
            .find(|pane| host.perform_key_equivalent(pane, &keystring, event));
        debug!(keystring = %keystring, handler = ?handler, "key equivalent");
        handler
    }
}
