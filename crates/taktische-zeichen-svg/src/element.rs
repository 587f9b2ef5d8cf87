//! Rendering seams: elements, factories and components.
//!
//! Placement only needs to set one attribute on a rendered element and to
//! nest it inside a group. Anything implementing these traits can be laid out;
//! [`crate::svg`] provides a plain SVG tree.

use taktische_zeichen_core::Point;

/// A renderable node that can carry attributes and children.
pub trait Element: Sized {
    /// Sets an attribute, replacing any previous value.
    fn set_attr(&mut self, name: &str, value: impl Into<String>);

    /// Looks up an attribute value.
    fn attr(&self, name: &str) -> Option<&str>;

    /// Appends a child element.
    fn push(&mut self, child: Self);

    /// Builder-style [`Element::push`].
    fn with_child(mut self, child: Self) -> Self {
        self.push(child);
        self
    }

    /// Builder-style [`Element::set_attr`].
    fn with_attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }
}

/// Creates elements of a single concrete type.
pub trait ElementFactory {
    type Element: Element;

    /// Creates an empty element with the given tag.
    fn element(&self, tag: &str) -> Self::Element;

    /// Creates an empty grouping element.
    fn group(&self) -> Self::Element {
        self.element("g")
    }
}

/// Something with an intrinsic size that can render itself through a factory.
pub trait Component<F: ElementFactory> {
    /// Intrinsic size in the component's own coordinate space.
    fn size(&self) -> Point;

    /// Whether the component covers its area instead of fitting inside it.
    fn cover(&self) -> bool {
        false
    }

    fn render(&self, factory: &F) -> F::Element;
}

impl<F: ElementFactory, C: Component<F> + ?Sized> Component<F> for &C {
    fn size(&self) -> Point {
        (**self).size()
    }

    fn cover(&self) -> bool {
        (**self).cover()
    }

    fn render(&self, factory: &F) -> F::Element {
        (**self).render(factory)
    }
}

impl<F: ElementFactory, C: Component<F> + ?Sized> Component<F> for Box<C> {
    fn size(&self) -> Point {
        (**self).size()
    }

    fn cover(&self) -> bool {
        (**self).cover()
    }

    fn render(&self, factory: &F) -> F::Element {
        (**self).render(factory)
    }
}
