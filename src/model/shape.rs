//! Relation shapes: what each type expects the backend to have populated.
//!
//! A shape mirrors a type's relational fields (media, components, relations,
//! dynamic zones) and ignores scalars, which Strapi always returns. The
//! populate audit compares these shapes against the populate trees.

/// The relation structure a type declares.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// A component or relation whose own fields are all scalars.
    Leaf,
    /// A media field; must be restricted to `url` and `alternativeText`.
    Media,
    /// A component or relation with relational fields of its own.
    Nested(Vec<(&'static str, Shape)>),
    /// A dynamic zone keyed by component tag.
    Zone(Vec<(&'static str, Shape)>),
}

impl Shape {
    pub fn nested(fields: impl IntoIterator<Item = (&'static str, Shape)>) -> Self {
        Shape::Nested(fields.into_iter().collect())
    }
}

/// Implemented by every model type that carries relational fields.
pub trait RelationShape {
    fn relation_shape() -> Shape;
}
