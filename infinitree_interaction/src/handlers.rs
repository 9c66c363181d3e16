// Copyright 2025 the Infinitree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Event handlers that read, transform, and replace the interaction box.

use infinitree_view::{ConfigError, ViewConfig, ViewState};
use tracing::{debug, trace, warn};

use crate::{FocusQuery, InteractionBox, PointerEvent, StateCell, Surface, WheelEvent};

/// The handler set attached to one canvas surface.
///
/// `Handlers` closes over the host's [`StateCell`] and [`FocusQuery`]. Each
/// handler reads the box once and writes it back at most once. Ignored wheel
/// events and failed scrolls do not write; a failed drag still records the
/// pointer position.
#[derive(Clone, Debug)]
pub struct Handlers<C, F> {
    cell: C,
    focus: F,
}

impl<C, F> Handlers<C, F>
where
    C: StateCell<InteractionBox>,
{
    /// Creates the handler set over `cell`, consulting `focus` for wheel input.
    pub fn new(cell: C, focus: F) -> Self {
        Self { cell, focus }
    }

    /// The cell the handlers read and write.
    pub fn cell(&self) -> &C {
        &self.cell
    }

    /// Snapshot of the current view state, for a render pass.
    #[must_use]
    pub fn view_state(&self) -> ViewState {
        self.cell.get().into_view_state()
    }

    /// Marks the button as held.
    pub fn on_pointer_down<S: Surface>(&self, _event: &PointerEvent<'_, S>) {
        let current = self.cell.get();
        if !current.mouse_down() {
            self.cell.set(current.pressed());
        }
    }

    /// Marks the button as released.
    pub fn on_pointer_up<S: Surface>(&self, _event: &PointerEvent<'_, S>) {
        let current = self.cell.get();
        if current.mouse_down() {
            self.cell.set(current.released());
        }
    }

    /// Tracks the pointer and, while the button is held, drags the view.
    ///
    /// The target's bounds are queried on every call.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a drag was due but no pan scale can be
    /// derived. The pan offset is left alone in that case, but the new pointer
    /// position is still stored as the drag baseline.
    pub fn on_pointer_move<S: Surface>(
        &self,
        event: &PointerEvent<'_, S>,
    ) -> Result<(), ConfigError> {
        let pointer = event.local_position();
        let mut next = self.cell.get();
        if next.mouse_down() && next.last_pointer().is_none() {
            trace!(?pointer, "no drag baseline yet");
        }
        let before = next.view_state().position();
        let moved = next.pointer_moved(pointer).inspect_err(|err| {
            warn!(%err, "drag ignored");
        });
        let after = next.view_state().position();
        if after != before {
            debug!(?before, ?after, "drag pan");
        }
        self.cell.set(next);
        moved
    }

    /// Pans the view by the scroll delta, if the target surface has focus.
    ///
    /// When the target is not the focused element the event is left alone,
    /// so the host can scroll the surrounding page instead.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if no pan scale can be derived. The box is
    /// left untouched and the default action is not suppressed.
    pub fn on_wheel<S>(&self, event: &mut WheelEvent<'_, S>) -> Result<(), ConfigError>
    where
        S: Surface,
        F: FocusQuery<S::Id>,
    {
        let target = event.target.id();
        if self.focus.focused().as_ref() != Some(&target) {
            trace!(delta = ?event.delta, "wheel over unfocused surface");
            return Ok(());
        }
        let next = self.cell.get().scrolled(event.delta).inspect_err(|err| {
            warn!(%err, "scroll ignored");
        })?;
        event.prevent_default();
        debug!(delta = ?event.delta, position = ?next.view_state().position(), "scroll pan");
        self.cell.set(next);
        Ok(())
    }

    /// Applies new canvas dimensions. The pan offset and tracking are kept.
    pub fn on_resize(&self, width: u32, height: u32) {
        self.cell.set(self.cell.get().resized(width, height));
    }

    /// Replaces the configuration record. The pan offset and tracking are kept.
    pub fn on_view_config(&self, view_config: ViewConfig) {
        self.cell.set(self.cell.get().reconfigured(view_config));
    }
}
