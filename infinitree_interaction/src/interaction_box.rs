// Copyright 2025 the Infinitree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host-owned interaction box and its transitions.
//!
//! ## Button state
//!
//! `mouse_down` has two states, `up` and `down`. [`InteractionBox::pressed`]
//! moves to `down`, [`InteractionBox::released`] to `up`; both are defined in
//! either state and the self-transition is a no-op.
//!
//! ## Pointer baseline
//!
//! `last_pointer` starts absent and is refreshed by every move, pressed or not.
//! Once present it never becomes absent again, so the first move after a press
//! pans from where the pointer actually was.

use infinitree_view::{ConfigError, ViewConfig, ViewState};
use kurbo::{Point, Vec2};

/// View state plus the transient pointer tracking needed to interpret drags.
///
/// Transitions consume the box and return the next one; the host stores the
/// result wholesale.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InteractionBox {
    view_state: ViewState,
    mouse_down: bool,
    last_pointer: Option<Point>,
}

impl InteractionBox {
    /// Wraps `view_state` with the button up and no pointer baseline.
    #[must_use]
    pub fn new(view_state: ViewState) -> Self {
        Self {
            view_state,
            mouse_down: false,
            last_pointer: None,
        }
    }

    /// The wrapped view state.
    #[must_use]
    pub fn view_state(&self) -> &ViewState {
        &self.view_state
    }

    /// Unwraps the view state.
    #[must_use]
    pub fn into_view_state(self) -> ViewState {
        self.view_state
    }

    /// Whether the primary button is held.
    #[must_use]
    pub fn mouse_down(&self) -> bool {
        self.mouse_down
    }

    /// Last pointer position relative to the surface, if one was seen.
    #[must_use]
    pub fn last_pointer(&self) -> Option<Point> {
        self.last_pointer
    }

    /// Returns the box with the button held.
    #[must_use]
    pub fn pressed(mut self) -> Self {
        self.mouse_down = true;
        self
    }

    /// Returns the box with the button released.
    #[must_use]
    pub fn released(mut self) -> Self {
        self.mouse_down = false;
        self
    }

    /// Records a pointer move to `pointer` (surface-relative).
    ///
    /// While the button is held and a baseline exists, the view is dragged from
    /// the baseline to `pointer`. The baseline is then replaced regardless,
    /// even when the drag fails, so a later move never pans across the
    /// distance travelled while the configuration was broken.
    ///
    /// # Errors
    ///
    /// Fails if a drag was due but the view cannot derive a pan scale. The pan
    /// offset is unchanged and the baseline is still updated.
    pub fn pointer_moved(&mut self, pointer: Point) -> Result<(), ConfigError> {
        let dragged = match self.last_pointer {
            Some(last) if self.mouse_down => self.view_state.drag(last, pointer).map(|_delta| ()),
            _ => Ok(()),
        };
        self.last_pointer = Some(pointer);
        dragged
    }

    /// Returns the box after a scroll of `delta` pixels.
    ///
    /// Button state and pointer baseline are untouched.
    ///
    /// # Errors
    ///
    /// Fails if the view cannot derive a pan scale.
    pub fn scrolled(mut self, delta: Vec2) -> Result<Self, ConfigError> {
        self.view_state.scroll(delta)?;
        Ok(self)
    }

    /// Returns the box with new canvas dimensions; the pan offset is kept.
    #[must_use]
    pub fn resized(mut self, width: u32, height: u32) -> Self {
        self.view_state = self.view_state.with_canvas_size(width, height);
        self
    }

    /// Returns the box with the configuration replaced; the pan offset is kept.
    #[must_use]
    pub fn reconfigured(mut self, view_config: ViewConfig) -> Self {
        self.view_state = self.view_state.with_view_config(view_config);
        self
    }
}

#[cfg(test)]
mod tests {
    use infinitree_view::{ConfigError, ViewConfig, ViewState};
    use kurbo::{Point, Vec2};

    use super::InteractionBox;

    fn fresh() -> InteractionBox {
        InteractionBox::new(
            ViewState::new()
                .with_canvas_size(600, 400)
                .with_view_config(ViewConfig {
                    infinite_levels: 4.0,
                    infinite_height: 400.0,
                    ..ViewConfig::default()
                }),
        )
    }

    #[test]
    fn new_box_is_up_without_baseline() {
        let b = fresh();
        assert!(!b.mouse_down());
        assert_eq!(b.last_pointer(), None);
        assert_eq!(b.view_state().position(), Point::ZERO);
    }

    #[test]
    fn button_transitions_are_idempotent() {
        let b = fresh().pressed().pressed();
        assert!(b.mouse_down());
        let b = b.released().released();
        assert!(!b.mouse_down());
        assert_eq!(b, fresh());
    }

    #[test]
    fn first_move_after_press_sets_baseline_only() {
        let mut b = fresh().pressed();
        b.pointer_moved(Point::new(100.0, 100.0)).unwrap();
        assert_eq!(b.last_pointer(), Some(Point::new(100.0, 100.0)));
        assert_eq!(b.view_state().position(), Point::ZERO);
    }

    #[test]
    fn hover_with_broken_config_still_tracks() {
        let mut b = fresh().resized(0, 400);
        b.pointer_moved(Point::new(5.0, 5.0)).unwrap();
        assert_eq!(b.last_pointer(), Some(Point::new(5.0, 5.0)));
    }

    #[test]
    fn failed_drag_still_moves_baseline() {
        let mut b = fresh();
        b.pointer_moved(Point::new(5.0, 5.0)).unwrap();
        let mut b = b.pressed().reconfigured(ViewConfig {
            infinite_levels: 0.0,
            ..ViewConfig::default()
        });
        assert_eq!(
            b.pointer_moved(Point::new(5.0, 50.0)),
            Err(ConfigError::NonPositiveLevels(0.0))
        );
        assert_eq!(b.last_pointer(), Some(Point::new(5.0, 50.0)));
        assert_eq!(b.view_state().position(), Point::ZERO);

        // Once the configuration is usable again, only the next step pans.
        let mut b = b.reconfigured(ViewConfig {
            infinite_levels: 4.0,
            infinite_height: 400.0,
            ..ViewConfig::default()
        });
        b.pointer_moved(Point::new(5.0, 60.0)).unwrap();
        assert_eq!(b.view_state().position(), Point::new(0.0, -0.1));
    }

    #[test]
    fn scroll_keeps_tracking_fields() {
        let mut b = fresh();
        b.pointer_moved(Point::new(1.0, 2.0)).unwrap();
        let b = b.pressed().scrolled(Vec2::new(0.0, 50.0)).unwrap();
        assert!(b.mouse_down());
        assert_eq!(b.last_pointer(), Some(Point::new(1.0, 2.0)));
        assert_eq!(b.view_state().position(), Point::new(0.0, 0.5));
    }
}
