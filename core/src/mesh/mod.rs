//! Flat-shaded mesh types and generators.
//!
//! This module provides GPU-agnostic mesh data structures:
//!
//! - [`VertexLayout`] - Describes vertex attributes across parallel buffers
//! - [`TriangleMesh`] - Interleaved position + texcoord triangle list with
//!   flat-normal derivation
//! - Generators for primitive shapes (cube, pentahedron)
//!
//! These types are consumed by `faceted-graphics` when building drawables.

mod data;
mod error;
pub mod generators;
mod layout;

pub use data::{TriangleMesh, POSITION_COMPONENTS, POSITION_UV_STRIDE};
pub use error::MeshError;
pub use generators::{generate_cube, generate_pentahedron, generate_primitive, Primitive};
pub use layout::{
    VertexAttribute, VertexAttributeFormat, VertexAttributeSemantic, VertexBufferLayout,
    VertexLayout,
};
