//! Rendering backend abstraction layer.
//!
//! This module provides a trait-based abstraction over the buffer, layout,
//! uniform, and draw-submission primitives the rest of the crate consumes.
//! Windowing, shader compilation, and real GPU submission belong to the
//! backend implementations behind this seam.
//!
//! # Available Backends
//!
//! - [`DummyBackend`] (default): records every call, for testing and
//!   development without a GPU
//!
//! # Thread Affinity
//!
//! A backend wraps a rendering context that is only valid on the thread
//! that created it, so the trait deliberately does not require
//! `Send + Sync`. Everything built on top of a backend inherits that
//! affinity.

pub mod dummy;

use std::sync::Arc;

use faceted_core::math::Mat4;
use faceted_core::mesh::{VertexAttribute, VertexBufferLayout};

use crate::error::GraphicsError;
use crate::types::BufferDescriptor;

pub use dummy::DummyBackend;

/// Handle to a backend vertex-array (attribute layout) object.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GpuVertexArray {
    /// Dummy backend (no GPU allocation)
    Dummy(u64),
}

/// Handle to a backend buffer resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GpuBuffer {
    /// Dummy backend (no GPU allocation)
    Dummy(u64),
}

/// Handle to a compiled shader program.
///
/// Compilation itself happens outside this crate; backends only consume
/// the handle when setting uniforms.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GpuProgram {
    /// Dummy backend (no GPU program)
    Dummy(u64),
}

/// Rendering backend trait abstracting the buffer and draw primitives.
///
/// Implementations own the underlying API objects; callers hold opaque
/// handles and route every operation through the trait, so the geometry
/// pipeline never touches ambient API state directly.
pub trait RenderBackend: 'static {
    /// Get the backend name.
    fn name(&self) -> &'static str;

    /// Create a vertex-array object describing attribute bindings.
    fn create_vertex_array(&self) -> Result<GpuVertexArray, GraphicsError>;

    /// Create a buffer resource.
    fn create_buffer(&self, descriptor: &BufferDescriptor) -> Result<GpuBuffer, GraphicsError>;

    /// Upload an interleaved float stream and register its attributes.
    ///
    /// `attributes` describes how each record of `layout.stride` bytes
    /// splits into shader inputs; every attribute binds at its semantic's
    /// location against the given vertex array.
    fn upload_float_attributes(
        &self,
        vertex_array: &GpuVertexArray,
        buffer: &GpuBuffer,
        layout: &VertexBufferLayout,
        attributes: &[VertexAttribute],
        data: &[f32],
    ) -> Result<(), GraphicsError>;

    /// Bind a vertex array for subsequent draw submissions.
    fn bind_vertex_array(&self, vertex_array: &GpuVertexArray);

    /// Set a 4x4 matrix uniform on a shader program.
    fn set_matrix_uniform(&self, program: &GpuProgram, name: &str, matrix: &Mat4);

    /// Issue one triangle-list draw spanning `vertex_count` vertices
    /// against the currently bound vertex array.
    fn submit_triangles(&self, vertex_count: u32);
}

/// Create the default backend.
///
/// Real GPU backends live behind this seam in the embedding application;
/// the in-tree default is the recording dummy backend.
pub fn create_backend() -> Result<Arc<dyn RenderBackend>, GraphicsError> {
    log::info!("Using dummy backend");
    Ok(Arc::new(DummyBackend::new()))
}
