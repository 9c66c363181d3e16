// Copyright 2025 the Infinitree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The view configuration record and the settings-layer edits that produce it.

use alloc::string::String;
use core::ops::RangeInclusive;

use hashbrown::HashMap;
#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `round`

/// Per-interval limit, keyed by interval name in [`Limits`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntervalLimit {
    /// Maximum count of this interval type.
    pub value: u32,
    /// Whether the limit is applied at all.
    pub enabled: bool,
}

/// Interval limits, keyed by interval-type name.
pub type Limits = HashMap<String, IntervalLimit>;

/// The display configuration written by the settings layer.
///
/// This is a pass-through record: the view layer reads only
/// [`infinite_height`](Self::infinite_height) and
/// [`infinite_levels`](Self::infinite_levels), to derive the pan scale.
/// Everything else is forwarded untouched to the drawing pass.
///
/// Updates replace the whole record (see [`crate::ViewState::with_view_config`]);
/// there is no field-by-field merge.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewConfig {
    /// Depth of the finite tree.
    pub levels: u32,
    /// Number of tree levels visible at once in the infinite tree.
    pub infinite_levels: f64,
    /// Logical pixel height spanned by the visible levels.
    pub infinite_height: f64,
    /// Which of the infinite trees is shown.
    pub tree_number: u32,
    /// Bass note of the root chord, in semitones.
    pub root_bass: i32,
    /// Draw chord roots.
    pub show_roots: bool,
    /// Draw octave intervals.
    pub show_octaves: bool,
    /// Fill the window width instead of laying out inline.
    pub wide: bool,
    /// Engrave notes always, rather than only on hover.
    pub always_engrave: bool,
    /// Prefer quality over speed when drawing.
    pub high_quality: bool,
    /// Blend between plain and rainbow colouring, in `0.0..=1.0`.
    pub rainbow_factor: f64,
    /// Interval limits by interval type.
    pub limits: Limits,
}

impl ViewConfig {
    /// Accepted range for [`levels`](Self::levels).
    pub const LEVELS_RANGE: RangeInclusive<u32> = 1..=8;
    /// Accepted range for [`tree_number`](Self::tree_number).
    pub const TREE_NUMBER_RANGE: RangeInclusive<u32> = 0..=12;
    /// Slider for [`infinite_levels`](Self::infinite_levels).
    pub const INFINITE_LEVELS: RangeSetting = RangeSetting::new(1.0, 9.0, 0.05);
    /// Slider for [`infinite_height`](Self::infinite_height).
    pub const INFINITE_HEIGHT: RangeSetting = RangeSetting::new(500.0, 1000.0, 1.0);
    /// Slider for [`rainbow_factor`](Self::rainbow_factor).
    pub const RAINBOW_FACTOR: RangeSetting = RangeSetting::new(0.0, 1.0, 0.05);

    /// Returns the record that results from applying `edit`.
    ///
    /// Ranged fields are clamped through their range constants. The record is
    /// returned whole so it can be written back with
    /// [`crate::ViewState::with_view_config`].
    #[must_use]
    pub fn apply(&self, edit: ViewOptionEdit) -> Self {
        let mut next = self.clone();
        match edit {
            ViewOptionEdit::SetLimitValue { interval, value } => {
                next.limits.entry(interval).or_default().value = value;
            }
            ViewOptionEdit::SetLimitEnabled { interval, enabled } => {
                next.limits.entry(interval).or_default().enabled = enabled;
            }
            ViewOptionEdit::SetTreeNumber(n) => {
                next.tree_number = clamp_u32(n, &Self::TREE_NUMBER_RANGE);
            }
            ViewOptionEdit::SetRootBass(bass) => next.root_bass = bass,
            ViewOptionEdit::SetLevels(levels) => {
                next.levels = clamp_u32(levels, &Self::LEVELS_RANGE);
            }
            ViewOptionEdit::SetShowRoots(on) => next.show_roots = on,
            ViewOptionEdit::SetShowOctaves(on) => next.show_octaves = on,
            ViewOptionEdit::SetWide(on) => next.wide = on,
            ViewOptionEdit::SetAlwaysEngrave(on) => next.always_engrave = on,
            ViewOptionEdit::SetInfiniteLevels(levels) => {
                next.infinite_levels = Self::INFINITE_LEVELS.clamp(levels);
            }
            ViewOptionEdit::SetInfiniteHeight(height) => {
                next.infinite_height = Self::INFINITE_HEIGHT.clamp(height);
            }
            ViewOptionEdit::SetHighQuality(on) => next.high_quality = on,
            ViewOptionEdit::SetRainbowFactor(factor) => {
                next.rainbow_factor = Self::RAINBOW_FACTOR.clamp(factor);
            }
        }
        next
    }
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            levels: 4,
            infinite_levels: 4.0,
            infinite_height: 600.0,
            tree_number: 0,
            root_bass: 0,
            show_roots: true,
            show_octaves: false,
            wide: false,
            always_engrave: false,
            high_quality: true,
            rainbow_factor: 0.0,
            limits: Limits::new(),
        }
    }
}

fn clamp_u32(value: u32, range: &RangeInclusive<u32>) -> u32 {
    value.clamp(*range.start(), *range.end())
}

/// A slider-style numeric setting: inclusive bounds and a step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RangeSetting {
    /// Smallest accepted value.
    pub min: f64,
    /// Largest accepted value.
    pub max: f64,
    /// Granularity, measured from `min`. Zero or negative disables snapping.
    pub step: f64,
}

impl RangeSetting {
    /// Creates a new range setting.
    #[must_use]
    pub const fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    /// Clamps `value` into `min..=max` and snaps it to the nearest step.
    ///
    /// `NaN` maps to `min`.
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_nan() {
            return self.min;
        }
        let clamped = value.max(self.min).min(self.max);
        if self.step.is_nan() || self.step <= 0.0 {
            return clamped;
        }
        let steps = ((clamped - self.min) / self.step).round();
        (self.min + steps * self.step).min(self.max)
    }

    /// Returns `true` if `value` lies within `min..=max`.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// One edit emitted by the settings form.
///
/// Each variant corresponds to a single form control. Apply it with
/// [`ViewConfig::apply`].
#[derive(Clone, Debug, PartialEq)]
pub enum ViewOptionEdit {
    /// Set the limit value for an interval type.
    SetLimitValue {
        /// Interval-type name.
        interval: String,
        /// New limit.
        value: u32,
    },
    /// Enable or disable the limit for an interval type.
    SetLimitEnabled {
        /// Interval-type name.
        interval: String,
        /// Whether the limit applies.
        enabled: bool,
    },
    /// Set [`ViewConfig::tree_number`].
    SetTreeNumber(u32),
    /// Set [`ViewConfig::root_bass`].
    SetRootBass(i32),
    /// Set [`ViewConfig::levels`].
    SetLevels(u32),
    /// Set [`ViewConfig::show_roots`].
    SetShowRoots(bool),
    /// Set [`ViewConfig::show_octaves`].
    SetShowOctaves(bool),
    /// Set [`ViewConfig::wide`].
    SetWide(bool),
    /// Set [`ViewConfig::always_engrave`].
    SetAlwaysEngrave(bool),
    /// Set [`ViewConfig::infinite_levels`].
    SetInfiniteLevels(f64),
    /// Set [`ViewConfig::infinite_height`].
    SetInfiniteHeight(f64),
    /// Set [`ViewConfig::high_quality`].
    SetHighQuality(bool),
    /// Set [`ViewConfig::rainbow_factor`].
    SetRainbowFactor(f64),
}
