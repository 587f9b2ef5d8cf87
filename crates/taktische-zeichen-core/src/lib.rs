//! # Taktische Zeichen Core
//!
//! Geometry and placement primitives for laying out symbol components
//! inside a bounded canvas region.
//!
//! - **Padding**: CSS-style shorthand with 2, 3 or 4 values, normalized to
//!   explicit `(top, right, bottom, left)` sides
//! - **Placement**: uniform scale and centering offset for "contain" or
//!   "cover" fits inside a padded paintable area
//!
//! ```rust
//! use taktische_zeichen_core::{calculate_component_position, Fit, Padding, Parent, Point};
//!
//! let parent = Parent::new(Point::new(100.0, 100.0));
//! let placement = calculate_component_position(
//!     &parent,
//!     Point::new(50.0, 40.0),
//!     Fit::Contain,
//!     &Padding::NONE,
//! );
//! assert_eq!(placement.scale, 2.0);
//! assert_eq!(placement.offset, Point::new(0.0, 10.0));
//! ```

pub mod error;
pub mod geometry;
pub mod padding;
pub mod placement;

pub use error::{LayoutError, Result};
pub use geometry::{add_points, subtract_points, Area, Point};
pub use padding::{resolve_padding, Padding, ResolvedPadding};
pub use placement::{calculate_component_position, Fit, Parent, Placement};
