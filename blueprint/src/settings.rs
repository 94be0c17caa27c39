// Copyright 2025 the Blueprint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Controller configuration.

use std::fmt;

/// Which way a positive wheel delta zooms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "i8", into = "i8")
)]
pub enum ZoomDirection {
    /// Positive deltas zoom in (`+1`).
    Natural,
    /// Positive deltas zoom out (`-1`): scrolling down shrinks the content.
    #[default]
    Inverted,
}

impl ZoomDirection {
    /// The sign applied to wheel deltas.
    #[must_use]
    pub const fn sign(self) -> f64 {
        match self {
            Self::Natural => 1.0,
            Self::Inverted => -1.0,
        }
    }
}

impl From<ZoomDirection> for i8 {
    fn from(direction: ZoomDirection) -> Self {
        match direction {
            ZoomDirection::Natural => 1,
            ZoomDirection::Inverted => -1,
        }
    }
}

impl TryFrom<i8> for ZoomDirection {
    type Error = SettingsError;

    fn try_from(sign: i8) -> Result<Self, Self::Error> {
        match sign {
            1 => Ok(Self::Natural),
            -1 => Ok(Self::Inverted),
            _ => Err(SettingsError::InvalidZoomDirection(sign)),
        }
    }
}

/// Inclusive bounds for the controller's scale.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZoomLimit {
    /// Smallest allowed scale.
    pub min: f64,
    /// Largest allowed scale.
    pub max: f64,
}

impl ZoomLimit {
    /// Limits `[min, max]`.
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Clamps `scale` into the limits.
    #[must_use]
    pub fn clamp(&self, scale: f64) -> f64 {
        scale.clamp(self.min, self.max)
    }

    /// Returns `true` if `scale` lies within the limits.
    #[must_use]
    pub fn contains(&self, scale: f64) -> bool {
        (self.min..=self.max).contains(&scale)
    }
}

impl Default for ZoomLimit {
    fn default() -> Self {
        Self::new(0.1, 10.0)
    }
}

/// Configuration for a [`ViewportController`](crate::ViewportController).
///
/// Start from [`Settings::default`] and override what you need, either with
/// struct update syntax or the `with_*` builders. With the `serde` feature,
/// partial maps deserialize with every missing field defaulted:
///
/// ```
/// use blueprint::{Settings, ZoomLimit};
///
/// let settings = Settings::default()
///     .with_parent_selector("#editor")
///     .with_zoom_limit(ZoomLimit::new(0.25, 4.0));
/// assert_eq!(settings.zoom_factor, 0.1);
/// assert!(settings.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, rename_all = "camelCase")
)]
pub struct Settings {
    /// Selector of the element the blueprint mounts under.
    pub parent_selector: String,
    /// Sign applied to wheel deltas.
    pub zoom_direction: ZoomDirection,
    /// Fraction of the current scale added per unit of wheel delta.
    pub zoom_factor: f64,
    /// Scale bounds.
    pub zoom_limit: ZoomLimit,
    /// Margin kept around content by [`fit`](crate::ViewportController::fit), per side.
    pub fit_padding: f64,
    /// Stroke width of workspace content, in screen pixels when
    /// `non_scaling_stroke` is set.
    pub stroke_width: f64,
    /// Keep workspace strokes at a constant on-screen width regardless of scale.
    pub non_scaling_stroke: bool,
    /// Default stroke paint for created elements.
    pub stroke: String,
    /// Default fill paint for created elements.
    pub fill: String,
    /// Stroke paint of the background grid.
    pub grid_color: String,
    /// Stroke paint of the axis lines.
    pub axis_color: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            parent_selector: "body".into(),
            zoom_direction: ZoomDirection::default(),
            zoom_factor: 0.1,
            zoom_limit: ZoomLimit::default(),
            fit_padding: 20.0,
            stroke_width: 1.0,
            non_scaling_stroke: true,
            stroke: "#000".into(),
            fill: "none".into(),
            grid_color: "#dde3ea".into(),
            axis_color: "#9aa5b1".into(),
        }
    }
}

impl Settings {
    /// Sets [`parent_selector`](Self::parent_selector).
    #[must_use]
    pub fn with_parent_selector(mut self, selector: impl Into<String>) -> Self {
        self.parent_selector = selector.into();
        self
    }

    /// Sets [`zoom_direction`](Self::zoom_direction).
    #[must_use]
    pub fn with_zoom_direction(mut self, direction: ZoomDirection) -> Self {
        self.zoom_direction = direction;
        self
    }

    /// Sets [`zoom_factor`](Self::zoom_factor).
    #[must_use]
    pub fn with_zoom_factor(mut self, factor: f64) -> Self {
        self.zoom_factor = factor;
        self
    }

    /// Sets [`zoom_limit`](Self::zoom_limit).
    #[must_use]
    pub fn with_zoom_limit(mut self, limit: ZoomLimit) -> Self {
        self.zoom_limit = limit;
        self
    }

    /// Sets [`fit_padding`](Self::fit_padding).
    #[must_use]
    pub fn with_fit_padding(mut self, padding: f64) -> Self {
        self.fit_padding = padding;
        self
    }

    /// Sets [`stroke_width`](Self::stroke_width) and [`non_scaling_stroke`](Self::non_scaling_stroke).
    #[must_use]
    pub fn with_stroke_width(mut self, width: f64, non_scaling: bool) -> Self {
        self.stroke_width = width;
        self.non_scaling_stroke = non_scaling;
        self
    }

    /// Sets the default [`stroke`](Self::stroke) and [`fill`](Self::fill) paints.
    #[must_use]
    pub fn with_paint(mut self, stroke: impl Into<String>, fill: impl Into<String>) -> Self {
        self.stroke = stroke.into();
        self.fill = fill.into();
        self
    }

    /// Checks the numeric options.
    pub fn validate(&self) -> Result<(), SettingsError> {
        let ZoomLimit { min, max } = self.zoom_limit;
        if !(min.is_finite() && max.is_finite() && min > 0.0 && min <= max) {
            return Err(SettingsError::InvalidZoomLimit { min, max });
        }
        if !(self.zoom_factor.is_finite() && self.zoom_factor > 0.0) {
            return Err(SettingsError::InvalidZoomFactor(self.zoom_factor));
        }
        if !(self.fit_padding.is_finite() && self.fit_padding >= 0.0) {
            return Err(SettingsError::InvalidFitPadding(self.fit_padding));
        }
        if !(self.stroke_width.is_finite() && self.stroke_width >= 0.0) {
            return Err(SettingsError::InvalidStrokeWidth(self.stroke_width));
        }
        Ok(())
    }
}

/// A [`Settings`] value that cannot drive a controller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SettingsError {
    /// Limits must be finite with `0 < min <= max`.
    InvalidZoomLimit {
        /// Offending minimum.
        min: f64,
        /// Offending maximum.
        max: f64,
    },
    /// The zoom factor must be finite and positive.
    InvalidZoomFactor(f64),
    /// The zoom direction must be `1` or `-1`.
    InvalidZoomDirection(i8),
    /// Fit padding must be finite and non-negative.
    InvalidFitPadding(f64),
    /// Stroke width must be finite and non-negative.
    InvalidStrokeWidth(f64),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidZoomLimit { min, max } => {
                write!(f, "zoom limit [{min}, {max}] must be finite with 0 < min <= max")
            }
            Self::InvalidZoomFactor(v) => write!(f, "zoom factor {v} must be finite and positive"),
            Self::InvalidZoomDirection(v) => write!(f, "zoom direction {v} must be 1 or -1"),
            Self::InvalidFitPadding(v) => {
                write!(f, "fit padding {v} must be finite and non-negative")
            }
            Self::InvalidStrokeWidth(v) => {
                write!(f, "stroke width {v} must be finite and non-negative")
            }
        }
    }
}

impl std::error::Error for SettingsError {}
