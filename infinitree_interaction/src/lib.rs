// Copyright 2025 the Infinitree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Infinitree Interaction: turn pointer and wheel input into pan updates.
//!
//! This crate interprets raw input over the infinite tree canvas and applies
//! it to a host-owned [`InteractionBox`]. It owns no storage: the host hands
//! [`Handlers`] a [`StateCell`] (a read/replace pair) and a [`FocusQuery`],
//! and every handler performs one read, computes the next box, and writes it
//! back whole.
//!
//! - [`Handlers::on_pointer_down`] / [`Handlers::on_pointer_up`]: track the
//!   button state.
//! - [`Handlers::on_pointer_move`]: always track the pointer; while pressed,
//!   pan with the *inverted* drag convention.
//! - [`Handlers::on_wheel`]: only when the canvas itself has focus, suppress
//!   the default action and pan with the *direct* scroll convention.
//!
//! ## Minimal example
//!
//! ```rust
//! use core::cell::{Cell, RefCell};
//! use kurbo::{Point, Rect, Vec2};
//! use infinitree_interaction::{Handlers, InteractionBox, PointerEvent, Surface, WheelEvent};
//! use infinitree_view::{ViewConfig, ViewState};
//!
//! struct Canvas;
//! impl Surface for Canvas {
//!     type Id = u32;
//!     fn id(&self) -> u32 { 7 }
//!     fn bounding_client_rect(&self) -> Rect { Rect::new(300.0, 200.0, 900.0, 600.0) }
//! }
//!
//! let view = ViewState::new()
//!     .with_canvas_size(600, 400)
//!     .with_view_config(ViewConfig { infinite_height: 400.0, infinite_levels: 4.0, ..ViewConfig::default() });
//! let cell = RefCell::new(InteractionBox::new(view));
//! let focused = Cell::new(Some(7_u32));
//! let handlers = Handlers::new(&cell, || focused.get());
//!
//! let canvas = Canvas;
//! handlers.on_pointer_move(&PointerEvent::new(Point::new(500.0, 450.0), &canvas)).unwrap();
//! handlers.on_pointer_down(&PointerEvent::new(Point::new(500.0, 450.0), &canvas));
//! handlers.on_pointer_move(&PointerEvent::new(Point::new(500.0, 300.0), &canvas)).unwrap();
//! assert_eq!(handlers.view_state().position(), Point::new(0.0, 1.5));
//!
//! let mut wheel = WheelEvent::new(Vec2::new(0.0, -50.0), &canvas);
//! handlers.on_wheel(&mut wheel).unwrap();
//! assert!(wheel.default_prevented());
//! assert_eq!(handlers.view_state().position(), Point::new(0.0, 1.0));
//! ```
//!
//! ## Threading
//!
//! Handlers are synchronous and expect to be called one at a time from the
//! host's event loop. They are not reentrant: a [`StateCell`] implementation
//! must not dispatch another handler from inside `get` or `set`.
//!
//! ## Logging
//!
//! Decisions are reported through `tracing` (`trace` for skipped input,
//! `debug` for applied pans, `warn` for configuration faults). No subscriber
//! is installed by this crate.
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod cell;
mod event;
mod handlers;
mod interaction_box;

pub use cell::{FnCell, StateCell};
pub use event::{FocusQuery, PointerEvent, Surface, WheelEvent};
pub use handlers::Handlers;
pub use interaction_box::InteractionBox;
