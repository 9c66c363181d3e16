// Copyright 2025 the Infinitree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless panning demo.
//!
//! Drives the interaction handlers with a scripted session over a simulated
//! canvas and prints the view state after each step.
//!
//! Run:
//! - `cargo run -p infinitree_demos --bin pan_headless`
//! - `RUST_LOG=infinitree_interaction=trace cargo run -p infinitree_demos --bin pan_headless`

use std::cell::{Cell, RefCell};

use infinitree_interaction::{Handlers, InteractionBox, PointerEvent, Surface, WheelEvent};
use infinitree_view::{ViewConfig, ViewOptionEdit, ViewState};
use kurbo::{Point, Rect, Vec2};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// A canvas whose client rect can move between events.
struct Canvas {
    rect: Cell<Rect>,
}

impl Surface for Canvas {
    type Id = &'static str;

    fn id(&self) -> &'static str {
        "canvas"
    }

    fn bounding_client_rect(&self) -> Rect {
        self.rect.get()
    }
}

#[derive(Debug)]
enum Step {
    Hover(f64, f64),
    Press,
    Release,
    Wheel(f64, f64),
    Focus(Option<&'static str>),
    Scroll(f64),
    /// A settings-form edit, clamped by `ViewConfig::apply`.
    Edit(ViewOptionEdit),
    /// A record written by the host as-is, bypassing the form's clamping.
    Configure(ViewConfig),
    Resize(u32, u32),
}

fn script() -> Vec<Step> {
    let broken = ViewConfig {
        infinite_levels: 0.0,
        ..ViewConfig::default()
    };
    vec![
        Step::Hover(400.0, 300.0),
        Step::Press,
        Step::Hover(400.0, 150.0),
        Step::Hover(200.0, 150.0),
        Step::Release,
        Step::Wheel(0.0, 120.0),
        Step::Focus(Some("canvas")),
        Step::Wheel(0.0, 120.0),
        Step::Wheel(-160.0, 0.0),
        Step::Edit(ViewOptionEdit::SetInfiniteLevels(8.0)),
        Step::Wheel(0.0, 120.0),
        Step::Scroll(40.0),
        Step::Resize(1024, 768),
        // Clamped to the slider minimum, so panning keeps working.
        Step::Edit(ViewOptionEdit::SetInfiniteLevels(0.0)),
        Step::Wheel(0.0, 120.0),
        // Written raw: scale derivation fails and drags and scrolls are rejected.
        Step::Configure(broken),
        Step::Press,
        Step::Hover(500.0, 500.0),
        Step::Wheel(0.0, 120.0),
        Step::Configure(ViewConfig::default()),
        Step::Hover(500.0, 520.0),
        Step::Release,
        Step::Focus(None),
    ]
}

/// Plays `steps` against a fresh canvas and returns how many were rejected.
fn run(steps: Vec<Step>) -> usize {
    let config = ViewConfig {
        infinite_height: 600.0,
        infinite_levels: 4.0,
        ..ViewConfig::default()
    };
    let view = ViewState::new()
        .with_canvas_size(800, 600)
        .with_view_config(config);

    let cell = RefCell::new(InteractionBox::new(view));
    let focused = Cell::new(None);
    let handlers = Handlers::new(&cell, || focused.get());
    let canvas = Canvas {
        rect: Cell::new(Rect::new(100.0, 50.0, 900.0, 650.0)),
    };

    let mut rejected = 0;
    for step in steps {
        let origin = canvas.rect.get().origin();
        let pointer = |x: f64, y: f64| {
            PointerEvent::new(Point::new(origin.x + x, origin.y + y), &canvas)
        };
        let outcome = match &step {
            Step::Hover(x, y) => handlers.on_pointer_move(&pointer(*x, *y)),
            Step::Press => {
                handlers.on_pointer_down(&pointer(0.0, 0.0));
                Ok(())
            }
            Step::Release => {
                handlers.on_pointer_up(&pointer(0.0, 0.0));
                Ok(())
            }
            Step::Wheel(dx, dy) => {
                let mut event = WheelEvent::new(Vec2::new(*dx, *dy), &canvas);
                let result = handlers.on_wheel(&mut event);
                info!(prevented = event.default_prevented(), "wheel");
                result
            }
            Step::Focus(id) => {
                focused.set(*id);
                Ok(())
            }
            Step::Scroll(dy) => {
                // The page scrolled: the canvas moves, the pointer stays put.
                let rect = canvas.rect.get();
                canvas.rect.set(rect - Vec2::new(0.0, *dy));
                Ok(())
            }
            Step::Edit(edit) => {
                let next = handlers.view_state().view_config().apply(edit.clone());
                handlers.on_view_config(next);
                Ok(())
            }
            Step::Configure(config) => {
                handlers.on_view_config(config.clone());
                Ok(())
            }
            Step::Resize(width, height) => {
                handlers.on_resize(*width, *height);
                Ok(())
            }
        };

        let view = handlers.view_state();
        match outcome {
            Ok(()) => info!(
                ?step,
                position = ?view.position(),
                width = view.width(),
                height = view.height(),
                levels = view.view_config().infinite_levels,
                "applied"
            ),
            Err(err) => {
                rejected += 1;
                info!(?step, %err, "rejected");
            }
        }
    }
    rejected
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let rejected = run(script());
    info!(rejected, "session finished");
}
