//! Type layer: the shapes of content fetched from Strapi.
//!
//! Types mirror the populate trees in [`crate::populate`]; every relational
//! field declared here must be requested there. The audit in
//! [`crate::populate::audit`] checks that pairing through [`RelationShape`].

mod block;
pub mod blocks;
pub mod common;
mod envelope;
pub mod records;
pub mod shape;

pub use block::{Block, ComponentType};
pub use blocks::*;
pub use common::{BlockMeta, Card, Image, Link, LinkType, Logo, RecordMeta};
pub use envelope::{Envelope, Meta, Pagination};
pub use records::*;
pub use shape::{RelationShape, Shape};
