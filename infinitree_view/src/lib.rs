// Copyright 2025 the Infinitree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Infinitree View: headless view state for the infinite interval tree.
//!
//! This crate models everything the drawing pass needs to know about *where*
//! the tree is being looked at, without knowing anything about how it is drawn:
//! - Canvas dimensions in device pixels.
//! - The accumulated pan offset, in logical units.
//! - The [`ViewConfig`] record written by the settings layer.
//! - Derivation of the [`PanScale`] that converts pixel deltas into logical
//!   pan deltas.
//!
//! It does **not** interpret pointer or wheel events; that lives in
//! `infinitree_interaction`, which drives the two pan rules exposed here
//! ([`ViewState::drag`] and [`ViewState::scroll`]).
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use infinitree_view::{ViewConfig, ViewState};
//!
//! let config = ViewConfig {
//!     infinite_levels: 4.0,
//!     infinite_height: 400.0,
//!     ..ViewConfig::default()
//! };
//! let mut state = ViewState::new()
//!     .with_canvas_width(600)
//!     .with_canvas_height(400)
//!     .with_view_config(config);
//!
//! let scale = state.pan_scale().unwrap();
//! assert_eq!(scale.horizontal(), 1200.0);
//! assert_eq!(scale.vertical(), 100.0);
//!
//! // Dragging the pointer 150px up reveals content below.
//! state.drag(Point::new(200.0, 250.0), Point::new(200.0, 100.0)).unwrap();
//! assert_eq!(state.position(), Point::new(0.0, 1.5));
//!
//! // Scrolling is not inverted.
//! state.scroll(Vec2::new(0.0, -50.0)).unwrap();
//! assert_eq!(state.position(), Point::new(0.0, 1.0));
//! ```
//!
//! ## Design notes
//!
//! - The pan offset is only ever changed by the two scale-derived rules; resizing
//!   or replacing the configuration keeps it intact.
//! - [`ViewConfig`] is a pass-through record. Only `infinite_height` and
//!   `infinite_levels` are read here.
//! - Degenerate configurations surface as [`ConfigError`] when a scale is
//!   derived, so `NaN` or infinities never reach the pan offset.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod config;
mod error;
mod view_state;

pub use config::{IntervalLimit, Limits, RangeSetting, ViewConfig, ViewOptionEdit};
pub use error::ConfigError;
pub use view_state::{HORIZONTAL_SPAN_FACTOR, PanScale, ViewState};
