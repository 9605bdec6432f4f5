// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Action resolution.
//!
//! Controls send named actions (`"copy"`, `"save"`, …) without knowing who will
//! handle them. [`RootResponder::target_for_action`] picks the handler; the
//! first match wins:
//!
//! 1. An explicit [`ActionTarget::Path`], looked up in the
//!    [`TargetRegistry`](crate::registry::TargetRegistry).
//! 2. An explicit [`ActionTarget::Node`].
//! 3. With a pane: the pane's first responder and its ancestors up to the
//!    pane, then the pane's default responder, then the global default
//!    responder.
//! 4. Without a pane: the same walk in the key pane, then in the main pane,
//!    then the global default responder.
//!
//! A candidate handles an action if the host's capability check says so or,
//! when the candidate has no capability check, if it has a member of that name.
//! A pane with no first responder contributes only its default responder.

use core::fmt::Debug;

use understory_responder::chain::Chain;

use crate::RootResponder;
use crate::host::ResponderHost;
use crate::logging::{debug, trace};

/// An explicit action target.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ActionTarget<'a, K> {
    /// A dotted path resolved through the root responder's target registry.
    Path(&'a str),
    /// A concrete responder.
    Node(K),
}

/// Whether `node` implements `action`.
///
/// Uses the host's capability check when there is one, member presence
/// otherwise.
pub fn implements<K, H: ResponderHost<K> + ?Sized>(host: &H, node: &K, action: &str) -> bool {
    host.responds_to_action(node, action)
        .unwrap_or_else(|| host.has_action(node, action))
}

impl<K: Copy + Eq + Debug> RootResponder<K> {
    /// Find the responder that should handle `action`.
    ///
    /// See the [module docs](crate::action) for the search order. Returns
    /// `None` if no candidate implements the action.
    pub fn target_for_action<H: ResponderHost<K> + ?Sized>(
        &self,
        host: &H,
        action: &str,
        target: Option<ActionTarget<'_, K>>,
        pane: Option<K>,
    ) -> Option<K> {
        let found = match (target, pane) {
            (Some(ActionTarget::Path(path)), _) => self
                .targets
                .resolve(path)
                .filter(|node| implements(host, node, action)),
            (Some(ActionTarget::Node(node)), _) => {
                Some(node).filter(|node| implements(host, node, action))
            }
            (None, Some(pane)) => self
                .responder_in_pane(host, pane, action)
                .or_else(|| self.global_responder(host, action)),
            (None, None) => {
                let main = self.main_pane.filter(|m| Some(*m) != self.key_pane);
                [self.key_pane, main]
                    .into_iter()
                    .flatten()
                    .find_map(|pane| self.responder_in_pane(host, pane, action))
                    .or_else(|| self.global_responder(host, action))
            }
        };
        if found.is_none() {
            debug!(action, "no target for action");
        }
        found
    }

    /// Resolve `action` and invoke it with `sender`.
    ///
    /// Returns `true` if a target was found and invoked; otherwise nothing
    /// happens.
    pub fn send_action<H: ResponderHost<K> + ?Sized>(
        &self,
        host: &mut H,
        action: &str,
        target: Option<ActionTarget<'_, K>>,
        sender: Option<K>,
        pane: Option<K>,
    ) -> bool {
        let Some(node) = self.target_for_action(&*host, action, target, pane) else {
            return false;
        };
        trace!(action, target = ?node, sender = ?sender, "sending action");
        host.perform_action(&node, action, sender);
        true
    }

    fn responder_in_pane<H: ResponderHost<K> + ?Sized>(
        &self,
        host: &H,
        pane: K,
        action: &str,
    ) -> Option<K> {
        Chain::new(host.first_responder(&pane), host)
            .stop_after(pane)
            .find(|node| implements(host, node, action))
            .or_else(|| {
                host.default_responder(&pane)
                    .filter(|node| implements(host, node, action))
            })
    }

    fn global_responder<H: ResponderHost<K> + ?Sized>(&self, host: &H, action: &str) -> Option<K> {
        self.default_responder
            .filter(|node| implements(host, node, action))
    }
}
