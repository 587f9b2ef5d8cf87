//! Points and rectangular areas.
//!
//! A [`Point`] doubles as a size (`x` = width, `y` = height) and as an offset.
//! Coordinates follow SVG conventions: (0,0) at top-left, +Y goes down.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// A pair of coordinates, also used for sizes.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// The origin.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Creates a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns true when both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for [f64; 2] {
    fn from(point: Point) -> Self {
        [point.x, point.y]
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// Component-wise sum of two points.
pub fn add_points(a: Point, b: Point) -> Point {
    a + b
}

/// Component-wise difference of two points.
pub fn subtract_points(a: Point, b: Point) -> Point {
    a - b
}

/// An axis-aligned rectangle given by its top-left and bottom-right corners.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[Point; 2]", into = "[Point; 2]")]
pub struct Area {
    pub top_left: Point,
    pub bottom_right: Point,
}

impl Area {
    /// Creates an area from its two corners.
    pub const fn new(top_left: Point, bottom_right: Point) -> Self {
        Self {
            top_left,
            bottom_right,
        }
    }

    /// The area spanning from the origin to `size`.
    pub fn from_size(size: Point) -> Self {
        Self::new(Point::ZERO, size)
    }

    pub fn width(&self) -> f64 {
        self.bottom_right.x - self.top_left.x
    }

    pub fn height(&self) -> f64 {
        self.bottom_right.y - self.top_left.y
    }
}

impl From<[Point; 2]> for Area {
    fn from([top_left, bottom_right]: [Point; 2]) -> Self {
        Self::new(top_left, bottom_right)
    }
}

impl From<Area> for [Point; 2] {
    fn from(area: Area) -> Self {
        [area.top_left, area.bottom_right]
    }
}
