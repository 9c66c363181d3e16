// Copyright 2025 the Infinitree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input event shapes and the host capabilities they refer to.

use kurbo::{Point, Rect, Vec2};

/// The element an event was dispatched to.
pub trait Surface {
    /// Identity used to compare the target against the focused element.
    type Id: PartialEq;

    /// Returns the identity of this surface.
    fn id(&self) -> Self::Id;

    /// Returns the surface's current bounds in client coordinates.
    ///
    /// Queried on every pointer move; the surface may have moved or resized
    /// since the previous event.
    fn bounding_client_rect(&self) -> Rect;
}

/// Reports which element currently holds focus in the host.
///
/// Implemented for any `Fn() -> Option<Id>` closure.
pub trait FocusQuery<Id> {
    /// Returns the focused element, or `None` if nothing is focused.
    fn focused(&self) -> Option<Id>;
}

impl<Id, F: Fn() -> Option<Id>> FocusQuery<Id> for F {
    fn focused(&self) -> Option<Id> {
        self()
    }
}

/// A pointer press, release, or move.
#[derive(Clone, Copy, Debug)]
pub struct PointerEvent<'a, S> {
    /// Pointer position in client coordinates.
    pub client: Point,
    /// The surface the event was dispatched to.
    pub target: &'a S,
}

impl<'a, S: Surface> PointerEvent<'a, S> {
    /// Creates a pointer event at `client` over `target`.
    pub fn new(client: Point, target: &'a S) -> Self {
        Self { client, target }
    }

    /// Returns the pointer position relative to the target's top-left corner.
    #[must_use]
    pub fn local_position(&self) -> Point {
        let rect = self.target.bounding_client_rect();
        self.client - rect.origin().to_vec2()
    }
}

/// A wheel or trackpad scroll.
#[derive(Clone, Copy, Debug)]
pub struct WheelEvent<'a, S> {
    /// Scroll distance in pixels.
    pub delta: Vec2,
    /// The surface the event was dispatched to.
    pub target: &'a S,
    default_prevented: bool,
}

impl<'a, S> WheelEvent<'a, S> {
    /// Creates a wheel event with its default action still enabled.
    pub fn new(delta: Vec2, target: &'a S) -> Self {
        Self {
            delta,
            target,
            default_prevented: false,
        }
    }

    /// Suppresses the host's default action (page scroll) for this event.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Returns `true` once [`WheelEvent::prevent_default`] has been called.
    #[must_use]
    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}
