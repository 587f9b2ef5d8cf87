//! Fitting a component into the padded paintable area of its parent.
//!
//! The component is scaled uniformly and centered on both axes. With
//! [`Fit::Contain`] the whole component stays inside the padded area; with
//! [`Fit::Cover`] the padded area is filled completely and the component may
//! overflow on one axis.
//!
//! Arithmetic is plain `f64`. Zero-sized components or paintable areas are not
//! rejected here; the resulting infinities or NaNs are passed through so that
//! callers can decide what to do with them (see [`Placement::ensure_finite`]).

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{LayoutError, Result};
use crate::geometry::{Area, Point};
use crate::padding::Padding;

/// How a component is scaled into the available space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Fit {
    /// Fit entirely inside, possibly leaving margin on one axis.
    #[default]
    Contain,
    /// Fill entirely, possibly overflowing on one axis.
    Cover,
}

impl Fit {
    /// Maps the `cover` flag of a component onto a fit mode.
    pub fn from_cover(cover: bool) -> Self {
        if cover {
            Self::Cover
        } else {
            Self::Contain
        }
    }

    pub fn is_cover(&self) -> bool {
        matches!(self, Self::Cover)
    }

    /// Picks the scale factor from the per-axis ratios.
    ///
    /// A NaN ratio yields a NaN scale instead of being skipped the way
    /// `f64::min`/`f64::max` would skip it.
    fn pick(&self, ratio_x: f64, ratio_y: f64) -> f64 {
        if ratio_x.is_nan() || ratio_y.is_nan() {
            return f64::NAN;
        }
        match self {
            Self::Contain => ratio_x.min(ratio_y),
            Self::Cover => ratio_x.max(ratio_y),
        }
    }
}

impl std::fmt::Display for Fit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Contain => write!(f, "contain"),
            Self::Cover => write!(f, "cover"),
        }
    }
}

/// The region a component is placed into.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Parent {
    /// Overall size of the parent.
    pub size: Point,
    /// Explicit paintable sub-area. Defaults to the whole parent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paintable_area: Option<Area>,
}

impl Parent {
    /// A parent whose paintable area is its full rectangle.
    pub fn new(size: Point) -> Self {
        Self {
            size,
            paintable_area: None,
        }
    }

    /// Restricts painting to the given sub-area.
    pub fn with_paintable_area(mut self, area: Area) -> Self {
        self.paintable_area = Some(area);
        self
    }

    /// The explicit paintable area, or the full rectangle from the origin.
    pub fn paintable_area(&self) -> Area {
        self.paintable_area
            .unwrap_or_else(|| Area::from_size(self.size))
    }
}

/// Translation and uniform scale for a placed component.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// Top-left translation.
    pub offset: Point,
    /// Uniform multiplier for the component's own coordinate space.
    pub scale: f64,
}

impl Default for Placement {
    fn default() -> Self {
        Self {
            offset: Point::ZERO,
            scale: 1.0,
        }
    }
}

impl Placement {
    pub fn new(offset: Point, scale: f64) -> Self {
        Self { offset, scale }
    }

    /// Returns true when offset and scale are all finite.
    pub fn is_finite(&self) -> bool {
        self.scale.is_finite() && self.offset.is_finite()
    }

    /// Fails with [`LayoutError::DegeneratePlacement`] on infinite or NaN values.
    pub fn ensure_finite(self) -> Result<Self> {
        if self.is_finite() {
            Ok(self)
        } else {
            Err(LayoutError::DegeneratePlacement {
                scale: self.scale,
                x: self.offset.x,
                y: self.offset.y,
            })
        }
    }

    /// Size of a component of intrinsic `size` after scaling.
    pub fn scaled_size(&self, size: Point) -> Point {
        Point::new(size.x * self.scale, size.y * self.scale)
    }
}

/// Computes the offset and scale that center `size` in the padded paintable
/// area of `parent`.
///
/// Formula:
/// ```text
/// width  = area.width  - left - right
/// height = area.height - top  - bottom
/// scale  = min|max(width / size.x, height / size.y)
/// x      = area.x + left + (width  - size.x * scale) / 2
/// y      = area.y + top  + (height - size.y * scale) / 2
/// ```
pub fn calculate_component_position(
    parent: &Parent,
    size: Point,
    fit: Fit,
    padding: &Padding,
) -> Placement {
    let padding = padding.resolve();
    let area = parent.paintable_area();

    let paintable_width = area.width() - padding.left - padding.right;
    let paintable_height = area.height() - padding.top - padding.bottom;

    let scale = fit.pick(paintable_width / size.x, paintable_height / size.y);

    let actual_width = size.x * scale;
    let actual_height = size.y * scale;

    let offset = Point::new(
        area.top_left.x + padding.left + (paintable_width - actual_width) / 2.0,
        area.top_left.y + padding.top + (paintable_height - actual_height) / 2.0,
    );

    debug!(
        %fit,
        component = %size,
        paintable_width,
        paintable_height,
        %offset,
        scale,
        "calculated component position"
    );

    Placement { offset, scale }
}
