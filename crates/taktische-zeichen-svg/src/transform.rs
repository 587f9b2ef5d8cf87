//! SVG transform attribute for a placement.

use std::fmt;

use taktische_zeichen_core::{Placement, Point};

/// Translate-then-scale transform, omitting identity terms.
///
/// Values are written with `f64`'s `Display`, so degenerate placements show
/// up as `NaN`, `inf` or `-inf` (not `Infinity`) in the attribute text.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Transform {
    pub translate: Option<Point>,
    pub scale: Option<f64>,
}

impl Transform {
    /// Returns true when neither term is present.
    pub fn is_identity(&self) -> bool {
        self.translate.is_none() && self.scale.is_none()
    }
}

impl From<Placement> for Transform {
    fn from(placement: Placement) -> Self {
        let offset = placement.offset;
        Self {
            translate: (offset.x != 0.0 || offset.y != 0.0).then_some(offset),
            scale: (placement.scale != 1.0).then_some(placement.scale),
        }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(offset) = self.translate {
            write!(f, "translate({})", offset)?;
        }
        if let Some(scale) = self.scale {
            if self.translate.is_some() {
                f.write_str(" ")?;
            }
            write!(f, "scale({})", scale)?;
        }
        Ok(())
    }
}
