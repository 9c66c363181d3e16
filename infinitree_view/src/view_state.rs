// Copyright 2025 the Infinitree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};

use crate::{ConfigError, ViewConfig};

/// Canvas widths spanned by one logical unit of horizontal pan.
///
/// The tree is laid out mirrored about its centre, so a full horizontal
/// traversal covers two canvas widths. This must change together with the
/// drawing pass if that layout ever stops being symmetric.
pub const HORIZONTAL_SPAN_FACTOR: f64 = 2.0;

/// Where and how the infinite tree is being viewed.
///
/// `ViewState` holds the canvas dimensions, the accumulated pan offset, and the
/// [`ViewConfig`] record. The setters consume and return the state; the pan
/// offset is only changed by [`ViewState::drag`] and [`ViewState::scroll`] and
/// survives resizes and configuration changes.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewState {
    width: u32,
    height: u32,
    position: Point,
    view_config: ViewConfig,
}

impl ViewState {
    /// Creates a state with unset (zero) dimensions, zero pan, and the default
    /// configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Canvas width in device pixels; zero until the host reports a size.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Canvas height in device pixels; zero until the host reports a size.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Current pan offset in logical units.
    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    /// The current configuration record.
    #[must_use]
    pub fn view_config(&self) -> &ViewConfig {
        &self.view_config
    }

    /// Returns this state with the canvas width replaced.
    #[must_use]
    pub fn with_canvas_width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    /// Returns this state with the canvas height replaced.
    #[must_use]
    pub fn with_canvas_height(mut self, height: u32) -> Self {
        self.height = height;
        self
    }

    /// Returns this state with both canvas dimensions replaced.
    #[must_use]
    pub fn with_canvas_size(self, width: u32, height: u32) -> Self {
        self.with_canvas_width(width).with_canvas_height(height)
    }

    /// Returns this state with the configuration record replaced wholesale.
    #[must_use]
    pub fn with_view_config(mut self, view_config: ViewConfig) -> Self {
        self.view_config = view_config;
        self
    }

    /// Derives the pixel-to-logical conversion for the current state.
    ///
    /// - horizontal: `2 × width`
    /// - vertical: `infinite_height / infinite_levels`
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the width is zero, if either configuration
    /// input is not positive and finite, or if their ratio is not.
    pub fn pan_scale(&self) -> Result<PanScale, ConfigError> {
        if self.width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        let height = self.view_config.infinite_height;
        if !is_positive(height) {
            return Err(ConfigError::NonPositiveHeight(height));
        }
        let levels = self.view_config.infinite_levels;
        if !is_positive(levels) {
            return Err(ConfigError::NonPositiveLevels(levels));
        }
        let vertical = height / levels;
        if !is_positive(vertical) {
            return Err(ConfigError::VerticalScaleOutOfRange(vertical));
        }
        Ok(PanScale {
            horizontal: HORIZONTAL_SPAN_FACTOR * f64::from(self.width),
            vertical,
        })
    }

    /// Pans for a pointer drag from `from` to `to`, in surface pixels.
    ///
    /// Drags are inverted: the offset moves opposite to the pointer, so
    /// dragging up or left reveals content below or to the right.
    ///
    /// # Errors
    ///
    /// Propagates [`ViewState::pan_scale`] failures; the offset is unchanged.
    pub fn drag(&mut self, from: Point, to: Point) -> Result<Vec2, ConfigError> {
        let delta = self.pan_scale()?.to_logical(from - to);
        self.position += delta;
        Ok(delta)
    }

    /// Pans for a scroll of `delta` pixels.
    ///
    /// Scrolls are not inverted: scrolling down or right pans down or right.
    ///
    /// # Errors
    ///
    /// Propagates [`ViewState::pan_scale`] failures; the offset is unchanged.
    pub fn scroll(&mut self, delta: Vec2) -> Result<Vec2, ConfigError> {
        let delta = self.pan_scale()?.to_logical(delta);
        self.position += delta;
        Ok(delta)
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Pixels per logical unit along each axis.
///
/// Only obtainable through [`ViewState::pan_scale`], so both factors are
/// strictly positive and finite.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanScale {
    horizontal: f64,
    vertical: f64,
}

impl PanScale {
    /// Pixels per logical unit horizontally.
    #[must_use]
    pub fn horizontal(&self) -> f64 {
        self.horizontal
    }

    /// Pixels per logical unit vertically.
    #[must_use]
    pub fn vertical(&self) -> f64 {
        self.vertical
    }

    /// Converts a pixel delta into a logical pan delta.
    #[must_use]
    pub fn to_logical(&self, pixels: Vec2) -> Vec2 {
        Vec2::new(pixels.x / self.horizontal, pixels.y / self.vertical)
    }
}
