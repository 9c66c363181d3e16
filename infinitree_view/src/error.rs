// Copyright 2025 the Infinitree Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

/// A view configuration that cannot yield a usable pan scale.
///
/// Returned by [`crate::ViewState::pan_scale`] and by every operation that
/// needs a scale. A value counts as non-positive when it is `<= 0`, `NaN`,
/// or infinite.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum ConfigError {
    /// The canvas width is zero (unset), so horizontal travel is undefined.
    #[error("canvas width is zero")]
    ZeroWidth,
    /// `infinite_levels` is not a positive, finite number.
    #[error("visible level count must be positive and finite, got {0}")]
    NonPositiveLevels(f64),
    /// `infinite_height` is not a positive, finite number.
    #[error("height basis must be positive and finite, got {0}")]
    NonPositiveHeight(f64),
    /// Both inputs are valid but their ratio under- or overflows.
    #[error("vertical pan scale {0} is out of range")]
    VerticalScaleOutOfRange(f64),
}
