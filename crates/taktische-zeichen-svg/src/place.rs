//! Rendering a component at its computed placement.

use taktische_zeichen_core::{calculate_component_position, Fit, Padding, Parent};
use tracing::{debug, warn};

use crate::element::{Component, Element, ElementFactory};
use crate::transform::Transform;

/// Renders `component`, positions it inside `parent` and wraps it in a group.
///
/// The rendered element receives a single `transform` attribute holding the
/// translate and scale terms that are not identities; when both are
/// identities the element is left untouched. The returned group is created
/// through `factory` and contains only the rendered element.
pub fn place_component<F, C>(
    parent: &Parent,
    component: &C,
    padding: &Padding,
    factory: &F,
) -> F::Element
where
    F: ElementFactory,
    C: Component<F> + ?Sized,
{
    let mut icon = component.render(factory);
    let placement = calculate_component_position(
        parent,
        component.size(),
        Fit::from_cover(component.cover()),
        padding,
    );

    if !placement.is_finite() {
        warn!(
            scale = placement.scale,
            x = placement.offset.x,
            y = placement.offset.y,
            "component placement is degenerate"
        );
    }

    let transform = Transform::from(placement);
    if !transform.is_identity() {
        let value = transform.to_string();
        debug!(transform = %value, "applying component transform");
        icon.set_attr("transform", value);
    }

    factory.group().with_child(icon)
}

/// [`place_component`] without padding.
pub fn place_component_unpadded<F, C>(parent: &Parent, component: &C, factory: &F) -> F::Element
where
    F: ElementFactory,
    C: Component<F> + ?Sized,
{
    place_component(parent, component, &Padding::NONE, factory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::PathIcon;
    use crate::svg::SvgFactory;
    use taktische_zeichen_core::Point;

    #[test]
    fn test_place_contain_icon() {
        let icon = PathIcon::new(Point::new(50.0, 40.0), "M 0 0 H 50 V 40 H 0 Z");
        let group = place_component_unpadded(
            &Parent::new(Point::new(100.0, 100.0)),
            &icon,
            &SvgFactory,
        );
        assert_eq!(
            group.to_svg_string(),
            r#"<g><path d="M 0 0 H 50 V 40 H 0 Z" transform="translate(0,10) scale(2)"/></g>"#
        );
    }

    #[test]
    fn test_place_without_transform() {
        let icon = PathIcon::new(Point::new(100.0, 100.0), "M 0 0");
        let group = place_component_unpadded(
            &Parent::new(Point::new(100.0, 100.0)),
            &icon,
            &SvgFactory,
        );
        assert_eq!(group.children()[0].attr("transform"), None);
        assert_eq!(group.to_svg_string(), r#"<g><path d="M 0 0"/></g>"#);
    }
}
