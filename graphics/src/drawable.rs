//! Drawable meshes.
//!
//! A [`Drawable`] bundles the GPU resources for one flat-shaded mesh: a
//! vertex array, the interleaved position + UV buffer, and the parallel
//! normal buffer. Drawables are created by
//! [`RenderContext::create_drawable`](crate::RenderContext::create_drawable)
//! and are immutable for their whole lifetime; backend resources are
//! released with the handles when the drawable drops.

use std::sync::Arc;

use faceted_core::math::Mat4;
use faceted_core::mesh::VertexLayout;

use crate::backend::{GpuBuffer, GpuVertexArray, RenderBackend};
use crate::shader::{Shader, MODEL_UNIFORM};

/// A GPU-resident flat-shaded mesh, ready for draw submission.
pub struct Drawable {
    backend: Arc<dyn RenderBackend>,
    layout: Arc<VertexLayout>,
    vertex_array: GpuVertexArray,
    vertex_buffer: GpuBuffer,
    normal_buffer: GpuBuffer,
    vertex_count: u32,
    label: Option<String>,
}

impl Drawable {
    /// Create a new drawable (called by RenderContext).
    pub(crate) fn new(
        backend: Arc<dyn RenderBackend>,
        layout: Arc<VertexLayout>,
        vertex_array: GpuVertexArray,
        vertex_buffer: GpuBuffer,
        normal_buffer: GpuBuffer,
        vertex_count: u32,
        label: Option<String>,
    ) -> Self {
        debug_assert_eq!(vertex_count % 3, 0, "triangle lists draw whole triangles");
        Self {
            backend,
            layout,
            vertex_array,
            vertex_buffer,
            normal_buffer,
            vertex_count,
            label,
        }
    }

    /// Get the vertex layout.
    pub fn layout(&self) -> &Arc<VertexLayout> {
        &self.layout
    }

    /// Get the vertex array handle.
    pub fn vertex_array(&self) -> &GpuVertexArray {
        &self.vertex_array
    }

    /// Get the interleaved position + UV buffer handle.
    pub fn vertex_buffer(&self) -> &GpuBuffer {
        &self.vertex_buffer
    }

    /// Get the normal buffer handle.
    pub fn normal_buffer(&self) -> &GpuBuffer {
        &self.normal_buffer
    }

    /// Get the number of vertices.
    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    /// Get the number of triangles.
    pub fn triangle_count(&self) -> u32 {
        self.vertex_count / 3
    }

    /// Get the drawable label, if set.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Draw this mesh once with the given model transform.
    ///
    /// Binds the vertex array, sets the shader's `"model"` uniform, and
    /// submits one triangle-list draw spanning all vertices.
    pub fn draw(&self, shader: &Shader, transform: &Mat4) {
        self.backend.bind_vertex_array(&self.vertex_array);
        shader.set_matrix_uniform(MODEL_UNIFORM, transform);
        self.backend.submit_triangles(self.vertex_count);
    }

    /// Draw this mesh `count` times with per-index transforms.
    ///
    /// The vertex array is bound once; each iteration sets the `"model"`
    /// uniform to `transform(i)` and submits a full draw. This is `count`
    /// sequential draw calls sharing one bound buffer, not hardware
    /// instancing.
    pub fn draw_instanced(&self, shader: &Shader, count: usize, transform: impl Fn(usize) -> Mat4) {
        self.backend.bind_vertex_array(&self.vertex_array);
        for i in 0..count {
            shader.set_matrix_uniform(MODEL_UNIFORM, &transform(i));
            self.backend.submit_triangles(self.vertex_count);
        }
    }
}

impl std::fmt::Debug for Drawable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Drawable")
            .field("label", &self.label)
            .field("vertex_count", &self.vertex_count)
            .field("vertex_array", &self.vertex_array)
            .field("layout", &self.layout.label)
            .finish()
    }
}
