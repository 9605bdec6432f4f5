// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A small document window driven by the root responder.
//!
//! This example shows how to:
//! - order a panel and a floating palette,
//! - route a press/release through the view under the pointer,
//! - send a named action that the key pane's chain resolves,
//! - offer an unhandled shortcut as a key equivalent.
//!
//! Run:
//! - `cargo run -p understory_demos --example root_responder_window`

use std::collections::HashMap;

use kurbo::{Point, Rect, Size};
use understory_pane_stack::{OrderLayer, PaneFocus};
use understory_responder::types::{Outcome, ParentLookup};
use understory_root_responder::RootResponder;
use understory_root_responder::host::{Environment, MouseAction, ResponderHost};
use understory_root_responder::key::{KeyEvent, Modifiers};
use understory_root_responder::mouse::MouseEvent;

const DOCUMENT: u32 = 1;
const PALETTE: u32 = 2;
const TOOLBAR: u32 = 10;
const SAVE_BUTTON: u32 = 11;
const TEXT: u32 = 12;
const SWATCH: u32 = 20;

struct View {
    name: &'static str,
    parent: Option<u32>,
    frame: Rect,
    actions: &'static [&'static str],
    mouse: &'static [MouseAction],
}

struct Window {
    views: HashMap<u32, View>,
    /// Back to front, for hit testing.
    paint_order: Vec<u32>,
    size: Size,
}

fn view(
    name: &'static str,
    parent: Option<u32>,
    frame: Rect,
    actions: &'static [&'static str],
    mouse: &'static [MouseAction],
) -> View {
    View {
        name,
        parent,
        frame,
        actions,
        mouse,
    }
}

impl Window {
    fn new() -> Self {
        use MouseAction::{Click, MouseDown, MouseDragged};

        let views = HashMap::from([
            (
                DOCUMENT,
                view("document", None, Rect::new(0.0, 0.0, 800.0, 600.0), &["save"], &[]),
            ),
            (
                TOOLBAR,
                view("toolbar", Some(DOCUMENT), Rect::new(0.0, 0.0, 800.0, 40.0), &[], &[]),
            ),
            (
                SAVE_BUTTON,
                view(
                    "save button",
                    Some(TOOLBAR),
                    Rect::new(10.0, 5.0, 90.0, 35.0),
                    &[],
                    &[MouseDown, Click],
                ),
            ),
            (
                TEXT,
                view(
                    "text",
                    Some(DOCUMENT),
                    Rect::new(0.0, 40.0, 800.0, 600.0),
                    &["copy", "paste"],
                    &[MouseDown, MouseDragged],
                ),
            ),
            (
                PALETTE,
                view("palette", None, Rect::new(600.0, 60.0, 780.0, 300.0), &[], &[]),
            ),
            (
                SWATCH,
                view("swatch", Some(PALETTE), Rect::new(610.0, 70.0, 650.0, 110.0), &[], &[Click]),
            ),
        ]);
        Self {
            views,
            paint_order: vec![DOCUMENT, TOOLBAR, SAVE_BUTTON, TEXT, PALETTE, SWATCH],
            size: Size::new(800.0, 600.0),
        }
    }

    fn name(&self, id: &u32) -> &'static str {
        self.views.get(id).map_or("?", |v| v.name)
    }
}

impl ParentLookup<u32> for Window {
    fn parent_of(&self, node: &u32) -> Option<u32> {
        self.views.get(node).and_then(|v| v.parent)
    }
}

impl PaneFocus<u32> for Window {
    fn order_layer(&self, pane: &u32) -> OrderLayer {
        if *pane == PALETTE {
            OrderLayer::PALETTE
        } else {
            OrderLayer::PANEL
        }
    }

    fn blur_to(&mut self, pane: &u32, new_focus: Option<u32>) {
        println!("  {} blurs (to {:?})", self.name(pane), new_focus);
    }

    fn focus_from(&mut self, pane: &u32, old_focus: Option<u32>) {
        println!("  {} focuses (from {:?})", self.name(pane), old_focus);
    }
}

impl ResponderHost<u32> for Window {
    fn has_action(&self, node: &u32, action: &str) -> bool {
        self.views
            .get(node)
            .is_some_and(|v| v.actions.iter().any(|a| *a == action))
    }

    fn perform_action(&mut self, node: &u32, action: &str, sender: Option<u32>) {
        let sender = sender.map_or("nobody", |s| self.name(&s));
        println!("  {} performs `{action}` for {sender}", self.name(node));
    }

    fn responds_to_mouse(&self, node: &u32, action: MouseAction) -> bool {
        self.views
            .get(node)
            .is_some_and(|v| v.mouse.contains(&action))
    }

    fn mouse_event(&mut self, node: &u32, action: MouseAction, event: &MouseEvent) -> Outcome {
        let handled = self.responds_to_mouse(node, action);
        if handled {
            println!(
                "  {} handles {action:?} (click count {})",
                self.name(node),
                event.click_count
            );
        }
        Outcome::from_handled(handled)
    }

    fn first_responder(&self, pane: &u32) -> Option<u32> {
        (*pane == DOCUMENT).then_some(TEXT)
    }

    fn default_responder(&self, _pane: &u32) -> Option<u32> {
        None
    }

    fn perform_key_equivalent(
        &mut self,
        pane: &u32,
        keystring: &str,
        _event: &KeyEvent<'_>,
    ) -> bool {
        let handled = *pane == DOCUMENT && keystring == "meta_s";
        if handled {
            println!("  {} handles key equivalent `{keystring}`", self.name(pane));
        }
        handled
    }

    fn accepts_key_pane(&self, pane: &u32) -> bool {
        *pane != PALETTE
    }
}

impl Environment<u32> for Window {
    fn target_view_for_event(&self, event: &MouseEvent) -> Option<u32> {
        self.paint_order
            .iter()
            .rev()
            .copied()
            .find(|id| self.views[id].frame.contains(event.position))
    }

    fn window_size(&self) -> Size {
        self.size
    }

    fn flush_updates(&mut self) {
        println!("  (flush)");
    }
}

fn main() {
    let mut window = Window::new();
    let mut root = RootResponder::new();
    root.setup(&mut window);

    println!("== Ordering panes ==");
    root.order_front(&mut window, DOCUMENT);
    root.order_front(&mut window, PALETTE);
    root.make_key_pane(&mut window, Some(DOCUMENT));
    // The palette refuses key status.
    assert!(!root.make_key_pane(&mut window, Some(PALETTE)));
    println!("  order: {:?}", root.ordered_panes());

    println!("\n== Double click on the save button ==");
    for t in [0, 100] {
        let mut down = MouseEvent::new(Point::new(20.0, 20.0), t);
        root.mouse_down(&mut window, &mut down);
        let mut up = MouseEvent::new(Point::new(20.0, 20.0), t + 40);
        let response = root.mouse_up(&mut window, &mut up);
        println!("  -> handler {:?}", response.handler);
    }

    println!("\n== Click on the palette swatch ==");
    let mut down = MouseEvent::new(Point::new(620.0, 80.0), 1000);
    root.mouse_down(&mut window, &mut down);
    let mut up = MouseEvent::new(Point::new(620.0, 80.0), 1010);
    let response = root.mouse_up(&mut window, &mut up);
    println!(
        "  -> handler {:?}, default allowed: {}",
        response.handler, response.allow_default
    );

    println!("\n== Hovering ==");
    root.mouse_moved(&mut window, &MouseEvent::new(Point::new(20.0, 20.0), 2000));
    println!("  hovered: {:?}", root.hovered_views());

    println!("\n== Actions ==");
    root.send_action(&mut window, "copy", None, Some(SAVE_BUTTON), None);
    root.send_action(&mut window, "save", None, Some(SAVE_BUTTON), None);
    let sent = root.send_action(&mut window, "print", None, Some(SAVE_BUTTON), None);
    println!("  print handled: {sent}");

    println!("\n== Key equivalent ==");
    let handler = root.attempt_key_equivalent(&mut window, &KeyEvent::new("S", Modifiers::META));
    println!("  -> {:?}", handler.map(|p| window.name(&p)));

    println!("\n== Resize ==");
    window.size = Size::new(1024.0, 768.0);
    root.resize(&mut window);
    println!("  window size: {:?}", root.window_size());
}
