// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer event dispatch.
//!
//! The root responder turns raw pointer events into view handler calls:
//!
//! - **Down**: asserts window focus, counts clicks, and offers
//!   [`MouseAction::MouseDown`] to the hit view and its ancestors. The view that
//!   handles it owns the gesture until the button is released.
//! - **Move**: forwards [`MouseAction::MouseDragged`] to an active drag session
//!   only. Otherwise updates hover state (entered / moved / exited) along the
//!   chain under the pointer, then sends `MouseDragged` to the gesture owner.
//! - **Up**: ends a drag session, or offers `MouseUp`, then `DoubleClick` (on
//!   the second click), then `Click` to the gesture owner's chain. Without an
//!   owner, the double click / click attempts start at the view under the
//!   pointer.
//! - **Native double click**: a release that counts as the second click
//!   whatever its timing.
//! - **Leave**: every hovered view is exited.
//! - **Wheel**: one-shot delivery through the hit view's chain.
//!
//! While a capture view is set, it replaces the hit test result.

use core::fmt::Debug;

use kurbo::Point;
use understory_event_state::click::ClickCounter;
use understory_event_state::hover::{HoverEvent, HoverState};
use understory_responder::chain::Chain;
use understory_responder::dispatcher;

use crate::RootResponder;
use crate::host::{Environment, Host, MouseAction};
use crate::logging::trace;

/// A normalized pointer event.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MouseEvent {
    /// Pointer position in window coordinates.
    pub position: Point,
    /// Event time in milliseconds.
    pub timestamp: u64,
    /// Click count of the current gesture, filled in by the root responder.
    pub click_count: u32,
    /// Whether handlers want the host's default behaviour suppressed when
    /// they handle this event.
    pub custom_handling: bool,
}

impl MouseEvent {
    /// Create an event at `position` and `timestamp`.
    ///
    /// Handled events suppress the host's default behaviour.
    pub fn new(position: Point, timestamp: u64) -> Self {
        Self {
            position,
            timestamp,
            click_count: 0,
            custom_handling: true,
        }
    }
}

/// Result of delivering a host event.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Response<K> {
    /// The responder that handled the event.
    pub handler: Option<K>,
    /// Whether the host should run its default behaviour for the event.
    pub allow_default: bool,
}

impl<K> Response<K> {
    fn new(handler: Option<K>, event: &MouseEvent) -> Self {
        let allow_default = handler.is_none() || !event.custom_handling;
        Self {
            handler,
            allow_default,
        }
    }
}

/// Per-gesture pointer state.
#[derive(Clone, Debug)]
pub(crate) struct MouseState<K> {
    pub(crate) mouse_down_view: Option<K>,
    pub(crate) clicks: ClickCounter,
    pub(crate) can_drag: bool,
    pub(crate) drag: Option<K>,
    pub(crate) hover: HoverState<K>,
    pub(crate) capture: Option<K>,
}

impl<K: Copy + PartialEq> MouseState<K> {
    pub(crate) fn new(clicks: ClickCounter) -> Self {
        Self {
            mouse_down_view: None,
            clicks,
            // Selection is blocked until the first gesture settles it.
            can_drag: true,
            drag: None,
            hover: HoverState::new(),
            capture: None,
        }
    }
}

fn send_event<K: Copy, H: Host<K> + ?Sized>(
    host: &mut H,
    action: MouseAction,
    event: &MouseEvent,
    start: Option<K>,
) -> Option<K> {
    dispatcher::send(start, host, |host, node| host.mouse_event(node, action, event))
}

fn send_hover<K: Copy, H: Host<K> + ?Sized>(
    host: &mut H,
    transitions: &[HoverEvent<K>],
    event: &MouseEvent,
) {
    for transition in transitions {
        let action = match transition {
            HoverEvent::Enter(_) => MouseAction::MouseEntered,
            HoverEvent::Move(_) => MouseAction::MouseMoved,
            HoverEvent::Exit(_) => MouseAction::MouseExited,
        };
        host.mouse_event(transition.node(), action, event);
    }
}

impl<K: Copy + Eq + Debug> RootResponder<K> {
    /// Handle a button press.
    ///
    /// Sets `event.click_count`.
    pub fn mouse_down<H: Host<K> + ?Sized>(
        &mut self,
        host: &mut H,
        event: &mut MouseEvent,
    ) -> Response<K> {
        self.focus(host);
        event.click_count = self.mouse.clicks.on_down(event.timestamp);

        let target = self.target_view_for_event(&*host, event);
        let view = send_event(host, MouseAction::MouseDown, event, target);
        self.mouse.mouse_down_view = view;
        if let Some(v) = view
            && host.responds_to_mouse(&v, MouseAction::MouseDragged)
        {
            self.mouse.can_drag = true;
        }
        trace!(hit = ?target, handler = ?view, clicks = event.click_count, "mouse down");
        Response::new(view, event)
    }

    /// Handle a button release.
    ///
    /// Sets `event.click_count` to the count of the press being released.
    pub fn mouse_up<H: Host<K> + ?Sized>(
        &mut self,
        host: &mut H,
        event: &mut MouseEvent,
    ) -> Response<K> {
        event.click_count = self.mouse.clicks.on_up(event.timestamp);
        let event = &*event;

        let handler = if let Some(drag) = self.mouse.drag.take() {
            host.mouse_event(&drag, MouseAction::MouseUp, event)
                .is_stop()
                .then_some(drag)
        } else if let Some(view) = self.mouse.mouse_down_view {
            send_event(host, MouseAction::MouseUp, event, Some(view))
                .or_else(|| Self::send_clicks(host, event, Some(view)))
        } else {
            let view = self.target_view_for_event(&*host, event);
            Self::send_clicks(host, event, view)
        };

        trace!(handler = ?handler, clicks = event.click_count, "mouse up");
        self.mouse.mouse_down_view = None;
        self.mouse.can_drag = false;
        Response::new(handler, event)
    }

    /// Handle pointer movement.
    pub fn mouse_moved<H: Host<K> + ?Sized>(&mut self, host: &mut H, event: &MouseEvent) {
        self.batched(host, |this, host| {
            this.focus(host);

            if let Some(drag) = this.mouse.drag {
                host.mouse_event(&drag, MouseAction::MouseDragged, event);
                return;
            }

            let target = this.target_view_for_event(&*host, event);
            let transitions = this.mouse.hover.update_chain(Chain::new(target, &*host));
            send_hover(host, &transitions, event);

            if let Some(view) = this.mouse.mouse_down_view {
                host.mouse_event(&view, MouseAction::MouseDragged, event);
            }
        });
    }

    /// Handle the pointer leaving the window.
    ///
    /// Every hovered view receives [`MouseAction::MouseExited`], innermost
    /// first. The gesture owner and any drag session are kept.
    pub fn mouse_left_window<H: Host<K> + ?Sized>(&mut self, host: &mut H, event: &MouseEvent) {
        self.batched(host, |this, host| {
            let exits = this.mouse.hover.clear();
            send_hover(host, &exits, event);
        });
    }

    /// Handle a native double click reported by the host.
    ///
    /// Some hosts deliver the second release of a double click as a separate
    /// event, without the timing that [`mouse_up`](Self::mouse_up) relies on.
    /// The release is treated as the second click regardless of timing.
    pub fn double_click<H: Host<K> + ?Sized>(
        &mut self,
        host: &mut H,
        event: &mut MouseEvent,
    ) -> Response<K> {
        self.mouse.clicks.set_count(2);
        self.mouse_up(host, event)
    }

    /// Handle a wheel turn.
    pub fn mouse_wheel<H: Host<K> + ?Sized>(
        &mut self,
        host: &mut H,
        event: &MouseEvent,
    ) -> Response<K> {
        let target = self.target_view_for_event(&*host, event);
        let handler = send_event(host, MouseAction::MouseWheel, event, target);
        Response::new(handler, event)
    }

    /// Hand pointer events to a drag session until the next button release.
    pub fn drag_did_start(&mut self, drag: K) {
        trace!(drag = ?drag, "drag started");
        self.mouse.drag = Some(drag);
    }

    /// Route pointer events to `view` regardless of what is under the pointer.
    pub fn start_capturing_mouse_events(&mut self, view: K) {
        self.mouse.capture = Some(view);
    }

    /// Return to hit testing.
    pub fn stop_capturing_mouse_events(&mut self) {
        self.mouse.capture = None;
    }

    /// Whether the host may start a native text selection.
    ///
    /// Selection is refused while the current gesture may turn into a drag.
    pub fn select_start(&self) -> bool {
        !self.mouse.can_drag
    }

    /// The view a pointer event is aimed at: the capture view, or the hit view.
    pub fn target_view_for_event<H: Environment<K> + ?Sized>(
        &self,
        host: &H,
        event: &MouseEvent,
    ) -> Option<K> {
        self.mouse
            .capture
            .or_else(|| host.target_view_for_event(event))
    }

    /// The view that handled the current button press.
    pub fn mouse_down_view(&self) -> Option<K> {
        self.mouse.mouse_down_view
    }

    /// Click count of the current (or last) gesture.
    pub fn click_count(&self) -> u32 {
        self.mouse.clicks.count()
    }

    /// Whether the current gesture owner can be dragged.
    pub fn can_drag(&self) -> bool {
        self.mouse.can_drag
    }

    /// The active drag session.
    pub fn active_drag(&self) -> Option<K> {
        self.mouse.drag
    }

    /// The view receiving all pointer events, if any.
    pub fn capture_view(&self) -> Option<K> {
        self.mouse.capture
    }

    /// Views under the pointer as of the last move, innermost first.
    pub fn hovered_views(&self) -> &[K] {
        self.mouse.hover.current()
    }

    fn send_clicks<H: Host<K> + ?Sized>(
        host: &mut H,
        event: &MouseEvent,
        start: Option<K>,
    ) -> Option<K> {
        let double = if event.click_count == 2 {
            send_event(host, MouseAction::DoubleClick, event, start)
        } else {
            None
        };
        double.or_else(|| send_event(host, MouseAction::Click, event, start))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::ResponderHost;
    use crate::test_host::{TestHost, ids::*};
    use alloc::vec;
    use alloc::vec::Vec;
    use understory_responder::types::Outcome;

    use MouseAction::*;

    fn at(t: u64) -> MouseEvent {
        MouseEvent::new(Point::new(10.0, 10.0), t)
    }

    fn setup() -> (RootResponder<u32>, TestHost) {
        let host = TestHost::view_fixture();
        let root = RootResponder::new();
        (root, host)
    }

    fn calls_of(host: &TestHost, action: MouseAction) -> Vec<u32> {
        host.mouse_calls
            .iter()
            .filter(|(a, _)| *a == action)
            .map(|(_, n)| *n)
            .collect()
    }

    #[test]
    fn mouse_down_walks_up_to_handler() {
        let (mut root, mut host) = setup();
        host.hit = Some(FOO_VIEW);
        host.handles.push((BAR_VIEW, MouseDown));
        let r = root.mouse_down(&mut host, &mut at(0));
        assert_eq!(r.handler, Some(BAR_VIEW));
        assert!(!r.allow_default);
        assert_eq!(calls_of(&host, MouseDown), vec![FOO_VIEW, BAR_VIEW]);
        assert_eq!(root.mouse_down_view(), Some(BAR_VIEW));
    }

    #[test]
    fn mouse_down_asserts_window_focus() {
        let (mut root, mut host) = setup();
        assert!(!root.has_focus());
        root.mouse_down(&mut host, &mut at(0));
        assert!(root.has_focus());
        assert_eq!(host.focus_changes, vec![true]);
    }

    #[test]
    fn unclaimed_mouse_down_allows_default() {
        let (mut root, mut host) = setup();
        host.hit = Some(FOO_VIEW);
        let r = root.mouse_down(&mut host, &mut at(0));
        assert_eq!(r.handler, None);
        assert!(r.allow_default);
        assert_eq!(calls_of(&host, MouseDown), vec![FOO_VIEW, BAR_VIEW, PANE]);
        assert_eq!(root.mouse_down_view(), None);
    }

    #[test]
    fn handled_without_custom_handling_allows_default() {
        let (mut root, mut host) = setup();
        host.hit = Some(FOO_VIEW);
        host.handles.push((FOO_VIEW, MouseDown));
        let mut evt = at(0);
        evt.custom_handling = false;
        let r = root.mouse_down(&mut host, &mut evt);
        assert_eq!(r.handler, Some(FOO_VIEW));
        assert!(r.allow_default);
    }

    #[test]
    fn drag_capable_owner_sets_can_drag() {
        let (mut root, mut host) = setup();
        host.hit = Some(FOO_VIEW);
        host.handles.push((FOO_VIEW, MouseDown));
        host.listens.push((FOO_VIEW, MouseDragged));
        root.mouse_up(&mut host, &mut at(0));
        assert!(!root.can_drag());
        assert!(root.select_start());

        root.mouse_down(&mut host, &mut at(1000));
        assert!(root.can_drag());
        assert!(!root.select_start());

        root.mouse_up(&mut host, &mut at(1010));
        assert!(!root.can_drag());
        assert_eq!(root.mouse_down_view(), None);
    }

    #[test]
    fn selection_blocked_before_first_gesture() {
        let (root, _) = setup();
        assert!(root.can_drag());
        assert!(!root.select_start());
    }

    #[test]
    fn click_count_resets_after_interval() {
        let (mut root, mut host) = setup();
        let mut evt = at(1000);
        root.mouse_down(&mut host, &mut evt);
        assert_eq!(evt.click_count, 1);
        root.mouse_up(&mut host, &mut at(1050));

        let mut evt = at(1150);
        root.mouse_down(&mut host, &mut evt);
        assert_eq!(evt.click_count, 2);
        root.mouse_up(&mut host, &mut at(1160));

        let mut evt = at(1400);
        root.mouse_down(&mut host, &mut evt);
        assert_eq!(evt.click_count, 1);
        assert_eq!(root.click_count(), 1);
    }

    #[test]
    fn custom_click_interval() {
        let mut root = RootResponder::<u32>::with_click_interval(500);
        let mut host = TestHost::view_fixture();
        root.mouse_down(&mut host, &mut at(0));
        root.mouse_up(&mut host, &mut at(10));
        let mut evt = at(400);
        root.mouse_down(&mut host, &mut evt);
        assert_eq!(evt.click_count, 2);
    }

    #[test]
    fn mouse_up_goes_to_owner_first() {
        let (mut root, mut host) = setup();
        host.hit = Some(FOO_VIEW);
        host.handles.push((FOO_VIEW, MouseDown));
        host.handles.push((FOO_VIEW, MouseUp));
        root.mouse_down(&mut host, &mut at(0));
        // Pointer moved off the owner before release.
        host.hit = Some(OTHER_VIEW);
        let r = root.mouse_up(&mut host, &mut at(10));
        assert_eq!(r.handler, Some(FOO_VIEW));
        assert!(calls_of(&host, Click).is_empty());
        assert!(calls_of(&host, DoubleClick).is_empty());
    }

    #[test]
    fn unhandled_mouse_up_falls_back_to_click() {
        let (mut root, mut host) = setup();
        host.hit = Some(FOO_VIEW);
        host.handles.push((FOO_VIEW, MouseDown));
        host.handles.push((BAR_VIEW, Click));
        root.mouse_down(&mut host, &mut at(0));
        let r = root.mouse_up(&mut host, &mut at(10));
        assert_eq!(r.handler, Some(BAR_VIEW));
        assert_eq!(calls_of(&host, MouseUp), vec![FOO_VIEW, BAR_VIEW, PANE]);
        // First click: no double click attempt.
        assert!(calls_of(&host, DoubleClick).is_empty());
        assert_eq!(calls_of(&host, Click), vec![FOO_VIEW, BAR_VIEW]);
    }

    #[test]
    fn second_click_tries_double_click_after_mouse_up() {
        let (mut root, mut host) = setup();
        host.hit = Some(FOO_VIEW);
        host.handles.push((FOO_VIEW, MouseDown));
        host.handles.push((FOO_VIEW, DoubleClick));
        root.mouse_down(&mut host, &mut at(0));
        root.mouse_up(&mut host, &mut at(10));
        host.mouse_calls.clear();

        root.mouse_down(&mut host, &mut at(100));
        let mut up = at(110);
        let r = root.mouse_up(&mut host, &mut up);
        assert_eq!(up.click_count, 2);
        assert_eq!(r.handler, Some(FOO_VIEW));
        let order: Vec<MouseAction> = host
            .mouse_calls
            .iter()
            .map(|(a, _)| *a)
            .filter(|a| matches!(a, MouseUp | DoubleClick | Click))
            .collect();
        assert_eq!(order, vec![MouseUp, MouseUp, MouseUp, DoubleClick]);
    }

    #[test]
    fn unclaimed_gesture_clicks_view_under_pointer() {
        let (mut root, mut host) = setup();
        host.hit = Some(FOO_VIEW);
        root.mouse_down(&mut host, &mut at(0));
        host.hit = Some(OTHER_VIEW);
        host.handles.push((OTHER_VIEW, Click));
        let r = root.mouse_up(&mut host, &mut at(10));
        assert_eq!(r.handler, Some(OTHER_VIEW));
        assert!(calls_of(&host, MouseUp).is_empty());
    }

    #[test]
    fn unclaimed_double_click_goes_to_view_under_pointer() {
        let (mut root, mut host) = setup();
        host.hit = Some(FOO_VIEW);
        host.handles.push((FOO_VIEW, DoubleClick));
        root.mouse_down(&mut host, &mut at(0));
        root.mouse_up(&mut host, &mut at(10));
        root.mouse_down(&mut host, &mut at(20));
        let r = root.mouse_up(&mut host, &mut at(30));
        assert_eq!(r.handler, Some(FOO_VIEW));
        assert_eq!(calls_of(&host, DoubleClick), vec![FOO_VIEW]);
        // The first gesture's click went all the way up unhandled.
        assert_eq!(calls_of(&host, Click), vec![FOO_VIEW, BAR_VIEW, PANE]);
    }

    #[test]
    fn hover_enter_move_exit_between_siblings() {
        let (mut root, mut host) = setup();
        host.hit = Some(FOO_VIEW);
        root.mouse_moved(&mut host, &at(0));
        assert_eq!(calls_of(&host, MouseEntered), vec![FOO_VIEW, BAR_VIEW, PANE]);
        assert_eq!(root.hovered_views(), &[FOO_VIEW, BAR_VIEW, PANE]);
        host.mouse_calls.clear();

        // OTHER_VIEW is a sibling of FOO_VIEW under BAR_VIEW.
        host.hit = Some(OTHER_VIEW);
        root.mouse_moved(&mut host, &at(10));
        assert_eq!(
            host.mouse_calls,
            vec![
                (MouseEntered, OTHER_VIEW),
                (MouseMoved, BAR_VIEW),
                (MouseMoved, PANE),
                (MouseExited, FOO_VIEW),
            ]
        );
    }

    #[test]
    fn moving_off_everything_exits_all() {
        let (mut root, mut host) = setup();
        host.hit = Some(BAR_VIEW);
        root.mouse_moved(&mut host, &at(0));
        host.mouse_calls.clear();
        host.hit = None;
        root.mouse_moved(&mut host, &at(10));
        assert_eq!(calls_of(&host, MouseExited), vec![BAR_VIEW, PANE]);
        assert!(root.hovered_views().is_empty());
    }

    #[test]
    fn move_drags_gesture_owner_after_hover() {
        let (mut root, mut host) = setup();
        host.hit = Some(FOO_VIEW);
        host.handles.push((FOO_VIEW, MouseDown));
        root.mouse_down(&mut host, &mut at(0));
        host.mouse_calls.clear();
        host.hit = Some(OTHER_VIEW);
        root.mouse_moved(&mut host, &at(10));
        assert_eq!(host.mouse_calls.last(), Some(&(MouseDragged, FOO_VIEW)));
        assert_eq!(calls_of(&host, MouseDragged), vec![FOO_VIEW]);
    }

    #[test]
    fn move_is_one_batch() {
        let (mut root, mut host) = setup();
        host.hit = Some(FOO_VIEW);
        root.mouse_moved(&mut host, &at(0));
        // Focus change and hover updates share one flush.
        assert_eq!(host.flushes, 1);
        root.mouse_moved(&mut host, &at(5));
        assert_eq!(host.flushes, 2);
    }

    #[test]
    fn drag_session_takes_over_moves_and_release() {
        let (mut root, mut host) = setup();
        host.hit = Some(FOO_VIEW);
        host.handles.push((FOO_VIEW, MouseDown));
        host.handles.push((DRAG, MouseUp));
        root.mouse_down(&mut host, &mut at(0));
        root.drag_did_start(DRAG);
        host.mouse_calls.clear();

        host.hit = Some(OTHER_VIEW);
        root.mouse_moved(&mut host, &at(10));
        assert_eq!(host.mouse_calls, vec![(MouseDragged, DRAG)]);
        assert!(root.hovered_views().is_empty());

        let r = root.mouse_up(&mut host, &mut at(20));
        assert_eq!(r.handler, Some(DRAG));
        assert_eq!(
            host.mouse_calls,
            vec![(MouseDragged, DRAG), (MouseUp, DRAG)]
        );
        assert_eq!(root.active_drag(), None);
        assert_eq!(root.mouse_down_view(), None);
        assert!(!root.can_drag());
    }

    #[test]
    fn native_double_click_ignores_timing() {
        let (mut root, mut host) = setup();
        host.hit = Some(FOO_VIEW);
        host.handles.push((FOO_VIEW, DoubleClick));
        root.mouse_down(&mut host, &mut at(0));
        root.mouse_up(&mut host, &mut at(10));
        // Too slow for a double click by timing alone.
        let mut down = at(1000);
        root.mouse_down(&mut host, &mut down);
        assert_eq!(down.click_count, 1);

        let mut up = at(1010);
        let r = root.double_click(&mut host, &mut up);
        assert_eq!(up.click_count, 2);
        assert_eq!(r.handler, Some(FOO_VIEW));
        assert_eq!(calls_of(&host, DoubleClick), vec![FOO_VIEW]);
        assert_eq!(root.mouse_down_view(), None);
    }

    #[test]
    fn native_double_click_after_mouse_up_of_owner() {
        let (mut root, mut host) = setup();
        host.hit = Some(FOO_VIEW);
        host.handles.push((FOO_VIEW, MouseDown));
        host.handles.push((BAR_VIEW, DoubleClick));
        root.mouse_down(&mut host, &mut at(500));
        let r = root.double_click(&mut host, &mut at(900));
        assert_eq!(r.handler, Some(BAR_VIEW));
        assert_eq!(calls_of(&host, MouseUp), vec![FOO_VIEW, BAR_VIEW, PANE]);
        assert!(calls_of(&host, Click).is_empty());
    }

    #[test]
    fn leaving_window_exits_hovered_views() {
        let (mut root, mut host) = setup();
        host.hit = Some(FOO_VIEW);
        root.mouse_moved(&mut host, &at(0));
        host.mouse_calls.clear();
        let flushes = host.flushes;

        root.mouse_left_window(&mut host, &at(10));
        assert_eq!(
            host.mouse_calls,
            vec![
                (MouseExited, FOO_VIEW),
                (MouseExited, BAR_VIEW),
                (MouseExited, PANE),
            ]
        );
        assert!(root.hovered_views().is_empty());
        assert_eq!(host.flushes, flushes + 1);

        // Coming back enters the chain again.
        host.mouse_calls.clear();
        root.mouse_moved(&mut host, &at(20));
        assert_eq!(calls_of(&host, MouseEntered), vec![FOO_VIEW, BAR_VIEW, PANE]);
    }

    #[test]
    fn wheel_is_one_shot() {
        let (mut root, mut host) = setup();
        host.hit = Some(FOO_VIEW);
        host.handles.push((PANE, MouseWheel));
        let r = root.mouse_wheel(&mut host, &at(0));
        assert_eq!(r.handler, Some(PANE));
        assert_eq!(calls_of(&host, MouseWheel), vec![FOO_VIEW, BAR_VIEW, PANE]);
        assert_eq!(root.mouse_down_view(), None);
    }

    #[test]
    fn capture_overrides_hit_testing() {
        let (mut root, mut host) = setup();
        host.hit = Some(FOO_VIEW);
        host.handles.push((OTHER_VIEW, MouseDown));
        root.start_capturing_mouse_events(OTHER_VIEW);
        assert_eq!(root.capture_view(), Some(OTHER_VIEW));
        let r = root.mouse_down(&mut host, &mut at(0));
        assert_eq!(r.handler, Some(OTHER_VIEW));
        assert_eq!(calls_of(&host, MouseDown), vec![OTHER_VIEW]);

        root.stop_capturing_mouse_events();
        assert_eq!(root.target_view_for_event(&host, &at(0)), Some(FOO_VIEW));
    }

    #[test]
    fn outcome_from_handler_drives_send_event() {
        let mut host = TestHost::view_fixture();
        host.handles.push((PANE, Click));
        let out = send_event(&mut host, Click, &at(0), Some(FOO_VIEW));
        assert_eq!(out, Some(PANE));
        assert_eq!(
            host.mouse_event(&BAR_VIEW, Click, &at(0)),
            Outcome::Continue
        );
    }
}
