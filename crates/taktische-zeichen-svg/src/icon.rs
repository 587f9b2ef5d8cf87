//! Path-based icon component.

use taktische_zeichen_core::{Fit, Point};

use crate::element::{Component, Element, ElementFactory};

/// An icon drawn as a single SVG path in its own coordinate space.
#[derive(Debug, Clone, PartialEq)]
pub struct PathIcon {
    size: Point,
    cover: bool,
    path_data: String,
    attributes: Vec<(String, String)>,
}

impl PathIcon {
    /// Creates a contain-fit icon of intrinsic `size` from path data.
    pub fn new(size: Point, path_data: impl Into<String>) -> Self {
        Self {
            size,
            cover: false,
            path_data: path_data.into(),
            attributes: Vec::new(),
        }
    }

    /// Switches the icon to cover-fit.
    pub fn covering(mut self) -> Self {
        self.cover = true;
        self
    }

    /// Sets the cover flag from a fit mode.
    pub fn with_fit(mut self, fit: Fit) -> Self {
        self.cover = fit.is_cover();
        self
    }

    /// Adds a presentation attribute (`fill`, `stroke`, ...) to the rendered path.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    pub fn path_data(&self) -> &str {
        &self.path_data
    }
}

impl<F: ElementFactory> Component<F> for PathIcon {
    fn size(&self) -> Point {
        self.size
    }

    fn cover(&self) -> bool {
        self.cover
    }

    fn render(&self, factory: &F) -> F::Element {
        let mut path = factory.element("path");
        path.set_attr("d", self.path_data.as_str());
        for (name, value) in &self.attributes {
            path.set_attr(name, value.as_str());
        }
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::svg::SvgFactory;

    #[test]
    fn test_render_path_icon() {
        let icon = PathIcon::new(Point::new(10.0, 10.0), "M 0 0 H 10 V 10 Z")
            .with_attr("fill", "none")
            .with_attr("stroke", "black");
        let element = icon.render(&SvgFactory);
        assert_eq!(
            element.to_svg_string(),
            r#"<path d="M 0 0 H 10 V 10 Z" fill="none" stroke="black"/>"#
        );
    }

    #[test]
    fn test_cover_flag() {
        let icon = PathIcon::new(Point::new(1.0, 1.0), "");
        assert!(!Component::<SvgFactory>::cover(&icon));
        assert!(Component::<SvgFactory>::cover(&icon.clone().covering()));
    }

    #[test]
    fn test_with_fit_sets_both_directions() {
        let icon = PathIcon::new(Point::new(1.0, 1.0), "").covering();
        assert!(!Component::<SvgFactory>::cover(&icon.clone().with_fit(Fit::Contain)));
        assert!(Component::<SvgFactory>::cover(&icon.with_fit(Fit::Cover)));
    }
}
