//! Padding specifications and their normalization.
//!
//! Padding follows CSS shorthand ordering. Two values mean
//! `[vertical, horizontal]`, three mean `[top, horizontal, bottom]`, four
//! are `[top, right, bottom, left]`.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{LayoutError, Result};

/// A padding shorthand with 2, 3 or 4 components.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub enum Padding {
    /// `[vertical, horizontal]`
    Symmetric(f64, f64),
    /// `[top, horizontal, bottom]`
    Three(f64, f64, f64),
    /// `[top, right, bottom, left]`
    Four(f64, f64, f64, f64),
}

impl Default for Padding {
    fn default() -> Self {
        Self::Four(0.0, 0.0, 0.0, 0.0)
    }
}

impl Padding {
    /// No spacing on any side.
    pub const NONE: Self = Self::Four(0.0, 0.0, 0.0, 0.0);

    /// Builds a padding from a shorthand slice.
    pub fn from_slice(values: &[f64]) -> Result<Self> {
        match *values {
            [vertical, horizontal] => Ok(Self::Symmetric(vertical, horizontal)),
            [top, horizontal, bottom] => Ok(Self::Three(top, horizontal, bottom)),
            [top, right, bottom, left] => Ok(Self::Four(top, right, bottom, left)),
            _ => Err(LayoutError::InvalidPadding { len: values.len() }),
        }
    }

    /// Expands the shorthand into explicit per-side values.
    pub fn resolve(&self) -> ResolvedPadding {
        let resolved = match *self {
            Self::Four(top, right, bottom, left) => ResolvedPadding::new(top, right, bottom, left),
            Self::Three(top, horizontal, bottom) => {
                ResolvedPadding::new(top, horizontal, bottom, horizontal)
            }
            Self::Symmetric(vertical, horizontal) => {
                ResolvedPadding::new(vertical, horizontal, vertical, horizontal)
            }
        };
        trace!(padding = ?self, ?resolved, "resolved padding");
        resolved
    }

    /// The shorthand values in their original order.
    pub fn to_vec(&self) -> Vec<f64> {
        match *self {
            Self::Symmetric(a, b) => vec![a, b],
            Self::Three(a, b, c) => vec![a, b, c],
            Self::Four(a, b, c, d) => vec![a, b, c, d],
        }
    }
}

impl TryFrom<&[f64]> for Padding {
    type Error = LayoutError;

    fn try_from(values: &[f64]) -> Result<Self> {
        Self::from_slice(values)
    }
}

impl TryFrom<Vec<f64>> for Padding {
    type Error = LayoutError;

    fn try_from(values: Vec<f64>) -> Result<Self> {
        Self::from_slice(&values)
    }
}

impl From<Padding> for Vec<f64> {
    fn from(padding: Padding) -> Self {
        padding.to_vec()
    }
}

impl From<[f64; 2]> for Padding {
    fn from([vertical, horizontal]: [f64; 2]) -> Self {
        Self::Symmetric(vertical, horizontal)
    }
}

impl From<[f64; 3]> for Padding {
    fn from([top, horizontal, bottom]: [f64; 3]) -> Self {
        Self::Three(top, horizontal, bottom)
    }
}

impl From<[f64; 4]> for Padding {
    fn from([top, right, bottom, left]: [f64; 4]) -> Self {
        Self::Four(top, right, bottom, left)
    }
}

/// Explicit padding for each of the four sides.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ResolvedPadding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl ResolvedPadding {
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Combined left and right padding.
    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    /// Combined top and bottom padding.
    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }

    /// The sides as `[top, right, bottom, left]`.
    pub fn to_array(&self) -> [f64; 4] {
        [self.top, self.right, self.bottom, self.left]
    }
}

/// Validates a shorthand slice and expands it into explicit sides.
pub fn resolve_padding(values: &[f64]) -> Result<ResolvedPadding> {
    Ok(Padding::from_slice(values)?.resolve())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_padding_arity_4() {
        let resolved = resolve_padding(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(resolved.to_array(), [1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_resolve_padding_arity_3() {
        let resolved = resolve_padding(&[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(resolved.to_array(), [1.0, 2.0, 3.0, 2.0]);
    }

    #[test]
    fn test_resolve_padding_arity_2() {
        let resolved = resolve_padding(&[1.0, 2.0]).unwrap();
        assert_eq!(resolved.to_array(), [1.0, 2.0, 1.0, 2.0]);
    }

    #[test]
    fn test_invalid_arity_is_rejected() {
        assert_eq!(
            resolve_padding(&[]),
            Err(LayoutError::InvalidPadding { len: 0 })
        );
        assert_eq!(
            Padding::try_from(&[1.0][..]),
            Err(LayoutError::InvalidPadding { len: 1 })
        );
        assert_eq!(
            Padding::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0]),
            Err(LayoutError::InvalidPadding { len: 5 })
        );
    }

    #[test]
    fn test_default_is_no_padding() {
        let resolved = Padding::default().resolve();
        assert_eq!(resolved, ResolvedPadding::default());
        assert_eq!(Padding::default(), Padding::NONE);
    }

    #[test]
    fn test_horizontal_and_vertical_sums() {
        let resolved = Padding::from([10.0, 20.0]).resolve();
        assert_eq!(resolved.horizontal(), 40.0);
        assert_eq!(resolved.vertical(), 20.0);
    }

    #[test]
    fn test_serde_uses_shorthand_arrays() {
        let padding: Padding = serde_json::from_str("[10, 20, 30]").unwrap();
        assert_eq!(padding, Padding::Three(10.0, 20.0, 30.0));
        assert_eq!(serde_json::to_string(&padding).unwrap(), "[10.0,20.0,30.0]");

        let err = serde_json::from_str::<Padding>("[1, 2, 3, 4, 5]").unwrap_err();
        assert!(err.to_string().contains("got 5"));
    }
}
