// Copyright 2025 the Infinitree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end tests for the `infinitree_interaction` handlers.
//!
//! The canvas is fixed at 600x400 with a 400px height basis over 4 levels, so
//! the horizontal scale is 1200 px/unit and the vertical scale 100 px/unit.

use core::cell::{Cell, RefCell};

use infinitree_interaction::{Handlers, InteractionBox, PointerEvent, Surface, WheelEvent};
use infinitree_view::{ConfigError, ViewConfig, ViewState};
use kurbo::{Point, Rect, Vec2};
use proptest::prelude::*;

/// A canvas placed at (300, 200) in client coordinates.
#[derive(Debug)]
struct Canvas {
    id: u32,
}

impl Surface for Canvas {
    type Id = u32;

    fn id(&self) -> u32 {
        self.id
    }

    fn bounding_client_rect(&self) -> Rect {
        Rect::new(300.0, 200.0, 900.0, 600.0)
    }
}

static CANVAS: Canvas = Canvas { id: 42 };

fn base_view() -> ViewState {
    ViewState::new()
        .with_canvas_width(600)
        .with_canvas_height(400)
        .with_view_config(ViewConfig {
            infinite_levels: 4.0,
            infinite_height: 400.0,
            ..ViewConfig::default()
        })
}

/// Pointer event at a position relative to the canvas.
fn at(x: f64, y: f64) -> PointerEvent<'static, Canvas> {
    PointerEvent::new(Point::new(300.0 + x, 200.0 + y), &CANVAS)
}

fn wheel(dx: f64, dy: f64) -> WheelEvent<'static, Canvas> {
    WheelEvent::new(Vec2::new(dx, dy), &CANVAS)
}

#[test]
fn initial_box_wraps_view_state() {
    let b = InteractionBox::new(base_view());
    assert_eq!(b.view_state(), &base_view());
    assert!(!b.mouse_down());
    assert_eq!(b.last_pointer(), None);
    assert_eq!(b.view_state().position(), Point::ZERO);
}

#[test]
fn pointer_down_is_idempotent() {
    let cell = RefCell::new(InteractionBox::new(base_view()));
    let handlers = Handlers::new(&cell, || None::<u32>);
    assert!(!cell.borrow().mouse_down());
    handlers.on_pointer_down(&at(0.0, 0.0));
    assert!(cell.borrow().mouse_down());
    handlers.on_pointer_down(&at(0.0, 0.0));
    assert!(cell.borrow().mouse_down());
}

#[test]
fn pointer_up_is_idempotent() {
    let cell = RefCell::new(InteractionBox::new(base_view()));
    let handlers = Handlers::new(&cell, || None::<u32>);
    handlers.on_pointer_down(&at(0.0, 0.0));
    handlers.on_pointer_up(&at(0.0, 0.0));
    assert!(!cell.borrow().mouse_down());
    handlers.on_pointer_up(&at(0.0, 0.0));
    assert!(!cell.borrow().mouse_down());
}

#[test]
fn hover_then_drag() {
    let cell = RefCell::new(InteractionBox::new(base_view()));
    let handlers = Handlers::new(&cell, || None::<u32>);
    assert_eq!(cell.borrow().last_pointer(), None);

    // Hovering initialises the baseline without panning.
    handlers.on_pointer_move(&at(200.0, 300.0)).unwrap();
    assert_eq!(cell.borrow().last_pointer(), Some(Point::new(200.0, 300.0)));
    assert_eq!(cell.borrow().view_state().position(), Point::ZERO);

    // 50px up, still hovering.
    handlers.on_pointer_move(&at(200.0, 250.0)).unwrap();
    assert_eq!(cell.borrow().last_pointer(), Some(Point::new(200.0, 250.0)));
    assert_eq!(cell.borrow().view_state().position(), Point::ZERO);

    // 150px up while pressed: the view moves the other way, 150 / 100.
    handlers.on_pointer_down(&at(200.0, 250.0));
    handlers.on_pointer_move(&at(200.0, 100.0)).unwrap();
    assert_eq!(cell.borrow().last_pointer(), Some(Point::new(200.0, 100.0)));
    assert_eq!(cell.borrow().view_state().position(), Point::new(0.0, 1.5));
}

#[test]
fn drag_right_and_down_pans_left_and_up() {
    let cell = RefCell::new(InteractionBox::new(base_view()));
    let handlers = Handlers::new(&cell, || None::<u32>);
    handlers.on_pointer_move(&at(0.0, 0.0)).unwrap();
    handlers.on_pointer_down(&at(0.0, 0.0));
    handlers.on_pointer_move(&at(300.0, 50.0)).unwrap();
    assert_eq!(
        cell.borrow().view_state().position(),
        Point::new(-0.25, -0.5)
    );

    // Releasing stops panning but keeps tracking.
    handlers.on_pointer_up(&at(300.0, 50.0));
    handlers.on_pointer_move(&at(0.0, 0.0)).unwrap();
    assert_eq!(
        cell.borrow().view_state().position(),
        Point::new(-0.25, -0.5)
    );
    assert_eq!(cell.borrow().last_pointer(), Some(Point::ZERO));
}

#[test]
fn first_move_after_press_does_not_jump() {
    let cell = RefCell::new(InteractionBox::new(base_view()));
    let handlers = Handlers::new(&cell, || None::<u32>);
    handlers.on_pointer_down(&at(0.0, 0.0));
    handlers.on_pointer_move(&at(500.0, 350.0)).unwrap();
    assert_eq!(cell.borrow().view_state().position(), Point::ZERO);
    assert_eq!(cell.borrow().last_pointer(), Some(Point::new(500.0, 350.0)));
}

#[test]
fn wheel_sequence() {
    let cell = RefCell::new(InteractionBox::new(base_view()));
    let focused = Cell::new(None);
    let handlers = Handlers::new(&cell, || focused.get());

    // (1) Unfocused: nothing happens, and the page may scroll.
    let mut e = wheel(10.0, 20.0);
    handlers.on_wheel(&mut e).unwrap();
    assert!(!e.default_prevented());
    assert_eq!(cell.borrow().view_state(), &base_view());

    // (2) Focused: vertical scroll pans down directly.
    focused.set(Some(CANVAS.id));
    let mut e = wheel(0.0, 50.0);
    handlers.on_wheel(&mut e).unwrap();
    assert!(e.default_prevented());
    assert_eq!(cell.borrow().view_state().position(), Point::new(0.0, 0.5));

    // (3) Diagonal.
    let mut e = wheel(300.0, 50.0);
    handlers.on_wheel(&mut e).unwrap();
    assert!(e.default_prevented());
    assert_eq!(cell.borrow().view_state().position(), Point::new(0.25, 1.0));

    // (4) Unfocused again.
    focused.set(None);
    let mut e = wheel(123.0, 234.0);
    handlers.on_wheel(&mut e).unwrap();
    assert!(!e.default_prevented());
    assert_eq!(cell.borrow().view_state().position(), Point::new(0.25, 1.0));

    // (5) Focused, scrolling left.
    focused.set(Some(CANVAS.id));
    let mut e = wheel(-600.0, 0.0);
    handlers.on_wheel(&mut e).unwrap();
    assert!(e.default_prevented());
    assert_eq!(cell.borrow().view_state().position(), Point::new(-0.25, 1.0));
}

#[test]
fn wheel_over_other_focused_element_is_ignored() {
    let cell = RefCell::new(InteractionBox::new(base_view()));
    let handlers = Handlers::new(&cell, || Some(7_u32));
    let mut e = wheel(0.0, 50.0);
    handlers.on_wheel(&mut e).unwrap();
    assert!(!e.default_prevented());
    assert_eq!(cell.borrow().view_state().position(), Point::ZERO);
}

#[test]
fn wheel_leaves_pointer_tracking_alone() {
    let cell = RefCell::new(InteractionBox::new(base_view()));
    let handlers = Handlers::new(&cell, || Some(CANVAS.id));
    handlers.on_pointer_move(&at(10.0, 10.0)).unwrap();
    handlers.on_pointer_down(&at(10.0, 10.0));
    handlers.on_wheel(&mut wheel(0.0, 100.0)).unwrap();
    let b = cell.borrow().clone();
    assert!(b.mouse_down());
    assert_eq!(b.last_pointer(), Some(Point::new(10.0, 10.0)));
    assert_eq!(b.view_state().position(), Point::new(0.0, 1.0));
}

#[test]
fn drag_and_scroll_conventions_differ() {
    let dragged = RefCell::new(InteractionBox::new(base_view()));
    let scrolled = RefCell::new(InteractionBox::new(base_view()));
    let drag = Handlers::new(&dragged, || None::<u32>);
    let scroll = Handlers::new(&scrolled, || Some(CANVAS.id));

    drag.on_pointer_move(&at(0.0, 0.0)).unwrap();
    drag.on_pointer_down(&at(0.0, 0.0));
    drag.on_pointer_move(&at(120.0, 40.0)).unwrap();
    scroll.on_wheel(&mut wheel(120.0, 40.0)).unwrap();

    assert_eq!(drag.view_state().position(), Point::new(-0.1, -0.4));
    assert_eq!(scroll.view_state().position(), Point::new(0.1, 0.4));
}

#[test]
fn fewer_levels_slow_vertical_pan_without_moving() {
    let cell = RefCell::new(InteractionBox::new(base_view()));
    let handlers = Handlers::new(&cell, || Some(CANVAS.id));
    handlers.on_wheel(&mut wheel(0.0, 100.0)).unwrap();
    assert_eq!(handlers.view_state().position(), Point::new(0.0, 1.0));

    handlers.on_view_config(ViewConfig {
        infinite_levels: 2.0,
        ..handlers.view_state().view_config().clone()
    });
    assert_eq!(handlers.view_state().position(), Point::new(0.0, 1.0));

    handlers.on_wheel(&mut wheel(0.0, 100.0)).unwrap();
    assert_eq!(handlers.view_state().position(), Point::new(0.0, 1.5));
}

#[test]
fn zero_levels_fault_instead_of_nan() {
    let view = base_view().with_view_config(ViewConfig {
        infinite_levels: 0.0,
        infinite_height: 400.0,
        ..ViewConfig::default()
    });
    let cell = RefCell::new(InteractionBox::new(view.clone()));
    let handlers = Handlers::new(&cell, || Some(CANVAS.id));

    let mut e = wheel(0.0, 50.0);
    assert_eq!(
        handlers.on_wheel(&mut e),
        Err(ConfigError::NonPositiveLevels(0.0))
    );
    assert!(!e.default_prevented());

    handlers.on_pointer_move(&at(0.0, 0.0)).unwrap();
    handlers.on_pointer_down(&at(0.0, 0.0));
    assert_eq!(
        handlers.on_pointer_move(&at(0.0, 50.0)),
        Err(ConfigError::NonPositiveLevels(0.0))
    );
    // The offset stays put, but the pointer is still tracked.
    assert_eq!(cell.borrow().last_pointer(), Some(Point::new(0.0, 50.0)));
    assert_eq!(handlers.view_state().position(), Point::ZERO);
}

#[test]
fn recovered_config_does_not_replay_missed_drag() {
    let cell = RefCell::new(InteractionBox::new(base_view()));
    let handlers = Handlers::new(&cell, || None::<u32>);
    handlers.on_pointer_move(&at(0.0, 0.0)).unwrap();
    handlers.on_pointer_down(&at(0.0, 0.0));

    let good = handlers.view_state().view_config().clone();
    handlers.on_view_config(ViewConfig {
        infinite_levels: 0.0,
        ..good.clone()
    });
    assert!(handlers.on_pointer_move(&at(0.0, 300.0)).is_err());

    handlers.on_view_config(good);
    handlers.on_pointer_move(&at(0.0, 310.0)).unwrap();
    assert_eq!(handlers.view_state().position(), Point::new(0.0, -0.1));
    assert_eq!(cell.borrow().last_pointer(), Some(Point::new(0.0, 310.0)));
}

#[derive(Clone, Debug)]
enum Input {
    Down,
    Up,
    Move(f64, f64),
    Wheel(f64, f64),
}

fn input() -> impl Strategy<Value = Input> {
    let coord = -2_000.0_f64..2_000.0;
    prop_oneof![
        Just(Input::Down),
        Just(Input::Up),
        (coord.clone(), coord.clone()).prop_map(|(x, y)| Input::Move(x, y)),
        (coord.clone(), coord).prop_map(|(x, y)| Input::Wheel(x, y)),
    ]
}

proptest! {
    #[test]
    fn position_stays_finite(
        levels in prop_oneof![Just(0.0_f64), Just(f64::NAN), 0.05_f64..9.0],
        inputs in prop::collection::vec(input(), 0..64),
    ) {
        let view = base_view().with_view_config(ViewConfig {
            infinite_levels: levels,
            infinite_height: 400.0,
            ..ViewConfig::default()
        });
        let cell = RefCell::new(InteractionBox::new(view));
        let handlers = Handlers::new(&cell, || Some(CANVAS.id));
        for i in inputs {
            let _ = match i {
                Input::Down => {
                    handlers.on_pointer_down(&at(0.0, 0.0));
                    Ok(())
                }
                Input::Up => {
                    handlers.on_pointer_up(&at(0.0, 0.0));
                    Ok(())
                }
                Input::Move(x, y) => handlers.on_pointer_move(&at(x, y)),
                Input::Wheel(x, y) => handlers.on_wheel(&mut wheel(x, y)),
            };
            let p = cell.borrow().view_state().position();
            prop_assert!(p.x.is_finite() && p.y.is_finite(), "position became {:?}", p);
        }
    }
}
