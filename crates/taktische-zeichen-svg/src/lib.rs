//! # Taktische Zeichen SVG
//!
//! Applies computed placements to rendered elements.
//!
//! ## Core Components
//!
//! - **Element / ElementFactory**: the narrow rendering interface placement
//!   relies on (set one attribute, nest inside a group)
//! - **Component**: a sized, renderable capability supplied by the caller
//! - **place_component**: render, compute placement, attach `transform`, wrap
//!   in a group
//! - **SvgElement / SvgFactory**: a plain SVG tree implementing the interface
//!
//! ## Usage
//!
//! ```rust
//! use taktische_zeichen_core::{Padding, Parent, Point};
//! use taktische_zeichen_svg::{place_component, PathIcon, SvgFactory};
//!
//! let icon = PathIcon::new(Point::new(50.0, 40.0), "M 0 0 H 50 V 40 H 0 Z");
//! let group = place_component(
//!     &Parent::new(Point::new(100.0, 100.0)),
//!     &icon,
//!     &Padding::from([10.0, 20.0]),
//!     &SvgFactory,
//! );
//! assert!(group.to_svg_string().starts_with("<g><path"));
//! ```

pub mod element;
pub mod icon;
pub mod place;
pub mod svg;
pub mod transform;

pub use element::{Component, Element, ElementFactory};
pub use icon::PathIcon;
pub use place::{place_component, place_component_unpadded};
pub use svg::{SvgElement, SvgFactory};
pub use transform::Transform;
