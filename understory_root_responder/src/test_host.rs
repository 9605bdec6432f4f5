// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording host shared by the unit tests.

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;

use kurbo::Size;
use understory_pane_stack::{OrderLayer, PaneFocus};
use understory_responder::types::{Outcome, ParentLookup};

use crate::host::{Environment, MouseAction, ResponderHost};
use crate::key::KeyEvent;
use crate::mouse::MouseEvent;

pub(crate) mod ids {
    pub(crate) const PANE: u32 = 1;
    pub(crate) const BAR_VIEW: u32 = 2;
    pub(crate) const FOO_VIEW: u32 = 3;
    pub(crate) const PANE_DEFAULT: u32 = 4;
    pub(crate) const KEY_PANE: u32 = 5;
    pub(crate) const MAIN_PANE: u32 = 6;
    pub(crate) const GLOBAL: u32 = 7;
    pub(crate) const OBJECT: u32 = 8;
    pub(crate) const HASH: u32 = 9;
    pub(crate) const SENDER: u32 = 10;
    pub(crate) const MENU: u32 = 11;
    pub(crate) const OTHER_VIEW: u32 = 12;
    pub(crate) const DRAG: u32 = 13;
    pub(crate) const PALETTE: u32 = 20;
    pub(crate) const POPUP: u32 = 30;
}

use ids::*;

/// Pane notifications, in the order they were made.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum PaneCall {
    Blur(u32, Option<u32>),
    Focus(u32, Option<u32>),
    Resized(u32, Size, Size),
    WillLoseKey(u32, Option<u32>),
    BecameKey(u32, Option<u32>),
}

#[derive(Debug, Default)]
pub(crate) struct TestHost {
    pub(crate) parents: BTreeMap<u32, u32>,
    pub(crate) layers: BTreeMap<u32, OrderLayer>,
    /// Members each node has.
    pub(crate) actions: BTreeMap<u32, Vec<&'static str>>,
    /// Capability checks; nodes without an entry have none.
    pub(crate) capabilities: BTreeMap<u32, Vec<&'static str>>,
    pub(crate) first_responders: BTreeMap<u32, u32>,
    pub(crate) default_responders: BTreeMap<u32, u32>,
    pub(crate) performed: Vec<(u32, String, Option<u32>)>,
    /// Pointer handlers that report the event handled.
    pub(crate) handles: Vec<(u32, MouseAction)>,
    /// Pointer handlers that exist but let the event continue.
    pub(crate) listens: Vec<(u32, MouseAction)>,
    pub(crate) mouse_calls: Vec<(MouseAction, u32)>,
    pub(crate) key_equivalents: Vec<(u32, &'static str)>,
    pub(crate) key_equivalents_offered: Vec<(u32, String)>,
    pub(crate) refuses_key: Vec<u32>,
    pub(crate) pane_calls: Vec<PaneCall>,
    pub(crate) hit: Option<u32>,
    pub(crate) size: Size,
    pub(crate) flushes: u32,
    pub(crate) focus_changes: Vec<bool>,
}

impl TestHost {
    /// A pane with a two-level view hierarchy plus key, main, global and
    /// registered targets.
    pub(crate) fn action_fixture() -> Self {
        let mut host = Self::default();
        host.parents.insert(BAR_VIEW, PANE);
        host.parents.insert(FOO_VIEW, BAR_VIEW);
        for (node, action) in [
            (PANE, "paneAction"),
            (BAR_VIEW, "bar"),
            (FOO_VIEW, "foo"),
            (PANE_DEFAULT, "defaultAction"),
            (KEY_PANE, "keyAction"),
            (MAIN_PANE, "mainAction"),
            (GLOBAL, "globalAction"),
            (OBJECT, "foo"),
            (HASH, "foo"),
        ] {
            host.actions.insert(node, vec![action]);
            if node != HASH {
                host.capabilities.insert(node, vec![action]);
            }
        }
        host.default_responders.insert(PANE, PANE_DEFAULT);
        host.first_responders.insert(KEY_PANE, KEY_PANE);
        host.first_responders.insert(MAIN_PANE, MAIN_PANE);
        host
    }

    /// `PANE` holding `BAR_VIEW`, which holds `FOO_VIEW` and `OTHER_VIEW`.
    pub(crate) fn view_fixture() -> Self {
        let mut host = Self::default();
        host.parents.insert(BAR_VIEW, PANE);
        host.parents.insert(FOO_VIEW, BAR_VIEW);
        host.parents.insert(OTHER_VIEW, BAR_VIEW);
        host.size = Size::new(800.0, 600.0);
        host
    }
}

impl ParentLookup<u32> for TestHost {
    fn parent_of(&self, node: &u32) -> Option<u32> {
        self.parents.get(node).copied()
    }
}

impl PaneFocus<u32> for TestHost {
    fn order_layer(&self, pane: &u32) -> OrderLayer {
        self.layers.get(pane).copied().unwrap_or_default()
    }

    fn blur_to(&mut self, pane: &u32, new_focus: Option<u32>) {
        self.pane_calls.push(PaneCall::Blur(*pane, new_focus));
    }

    fn focus_from(&mut self, pane: &u32, old_focus: Option<u32>) {
        self.pane_calls.push(PaneCall::Focus(*pane, old_focus));
    }
}

impl ResponderHost<u32> for TestHost {
    fn responds_to_action(&self, node: &u32, action: &str) -> Option<bool> {
        self.capabilities
            .get(node)
            .map(|caps| caps.iter().any(|c| *c == action))
    }

    fn has_action(&self, node: &u32, action: &str) -> bool {
        self.actions
            .get(node)
            .is_some_and(|members| members.iter().any(|m| *m == action))
    }

    fn perform_action(&mut self, node: &u32, action: &str, sender: Option<u32>) {
        self.performed.push((*node, action.to_string(), sender));
    }

    fn responds_to_mouse(&self, node: &u32, action: MouseAction) -> bool {
        let entry = (*node, action);
        self.handles.contains(&entry) || self.listens.contains(&entry)
    }

    fn mouse_event(&mut self, node: &u32, action: MouseAction, _event: &MouseEvent) -> Outcome {
        self.mouse_calls.push((action, *node));
        Outcome::from_handled(self.handles.contains(&(*node, action)))
    }

    fn first_responder(&self, pane: &u32) -> Option<u32> {
        self.first_responders.get(pane).copied()
    }

    fn default_responder(&self, pane: &u32) -> Option<u32> {
        self.default_responders.get(pane).copied()
    }

    fn window_size_did_change(&mut self, pane: &u32, old: Size, new: Size) {
        self.pane_calls.push(PaneCall::Resized(*pane, old, new));
    }

    fn perform_key_equivalent(
        &mut self,
        pane: &u32,
        keystring: &str,
        _event: &KeyEvent<'_>,
    ) -> bool {
        self.key_equivalents_offered
            .push((*pane, keystring.to_string()));
        self.key_equivalents
            .iter()
            .any(|(p, k)| p == pane && *k == keystring)
    }

    fn accepts_key_pane(&self, pane: &u32) -> bool {
        !self.refuses_key.contains(pane)
    }

    fn will_lose_key_pane_to(&mut self, pane: &u32, new_key: Option<u32>) {
        self.pane_calls.push(PaneCall::WillLoseKey(*pane, new_key));
    }

    fn did_become_key_pane_from(&mut self, pane: &u32, old_key: Option<u32>) {
        self.pane_calls.push(PaneCall::BecameKey(*pane, old_key));
    }
}

impl Environment<u32> for TestHost {
    fn target_view_for_event(&self, _event: &MouseEvent) -> Option<u32> {
        self.hit
    }

    fn window_size(&self) -> Size {
        self.size
    }

    fn window_focus_did_change(&mut self, has_focus: bool) {
        self.focus_changes.push(has_focus);
    }

    fn flush_updates(&mut self) {
        self.flushes += 1;
    }
}
