//! Render context.
//!
//! The [`RenderContext`] is the explicit handle to the rendering backend:
//! every backend call routes through it rather than through ambient API
//! state, and it is the only way to turn a [`TriangleMesh`] into a
//! [`Drawable`].

use std::cell::Cell;
use std::sync::Arc;

use faceted_core::mesh::{TriangleMesh, VertexAttribute, VertexLayout, POSITION_UV_STRIDE};

use crate::backend::{GpuBuffer, RenderBackend};
use crate::drawable::Drawable;
use crate::error::GraphicsError;
use crate::types::{BufferDescriptor, BufferUsage};

/// The render context owns the backend and creates drawables.
///
/// # Thread Affinity
///
/// A context is bound to the thread that created its backend; it is
/// intentionally neither `Send` nor `Sync`. The thread holding the
/// rendering context is its only valid owner.
///
/// # Example
///
/// ```ignore
/// let context = RenderContext::new(create_backend()?);
/// let cube = context.create_drawable(&generate_cube(2.0)?)?;
/// ```
pub struct RenderContext {
    backend: Arc<dyn RenderBackend>,
    // Resource creations routed through this context, for diagnostics.
    vertex_arrays_created: Cell<usize>,
    buffers_created: Cell<usize>,
}

impl RenderContext {
    /// Create a context over an injected backend.
    pub fn new(backend: Arc<dyn RenderBackend>) -> Self {
        log::info!("RenderContext created on {} backend", backend.name());
        Self {
            backend,
            vertex_arrays_created: Cell::new(0),
            buffers_created: Cell::new(0),
        }
    }

    /// Get the backend.
    pub fn backend(&self) -> &Arc<dyn RenderBackend> {
        &self.backend
    }

    /// Get the backend name.
    pub fn backend_name(&self) -> &'static str {
        self.backend.name()
    }

    /// Number of vertex arrays created through this context.
    pub fn vertex_arrays_created(&self) -> usize {
        self.vertex_arrays_created.get()
    }

    /// Number of buffers created through this context.
    pub fn buffers_created(&self) -> usize {
        self.buffers_created.get()
    }

    /// Build a drawable from a flat-shaded triangle mesh.
    ///
    /// Derives the per-triangle normal stream from the mesh, allocates one
    /// vertex array and two parallel buffers (interleaved position + UV,
    /// derived normals), uploads both streams, and returns the
    /// fully-initialized immutable [`Drawable`]. Call this exactly once
    /// per mesh instance; the drawable never changes afterwards.
    ///
    /// # Errors
    ///
    /// Fails with [`GraphicsError::InvalidParameter`] before any backend
    /// resource is allocated when the mesh is not a position + UV stream
    /// (stride 5) or has no triangles. Backend allocation failures
    /// propagate as-is.
    pub fn create_drawable(&self, mesh: &TriangleMesh) -> Result<Drawable, GraphicsError> {
        if mesh.stride() != POSITION_UV_STRIDE {
            return Err(GraphicsError::InvalidParameter(format!(
                "drawable meshes use {POSITION_UV_STRIDE}-float records (XYZ + UV), got stride {}",
                mesh.stride()
            )));
        }
        if mesh.triangle_count() == 0 {
            return Err(GraphicsError::InvalidParameter(
                "mesh has no triangles".to_string(),
            ));
        }

        // Derived data comes first: nothing is allocated if it cannot be
        // computed.
        let normals = mesh.flat_normals();
        let layout = VertexLayout::flat_shaded();

        let vertex_array = self.backend.create_vertex_array()?;
        self.vertex_arrays_created
            .set(self.vertex_arrays_created.get() + 1);

        let vertex_buffer = self.create_vertex_buffer(
            mesh.vertex_bytes().len() as u64,
            mesh.label(),
            "vertices",
        )?;
        let normal_buffer = self.create_vertex_buffer(
            bytemuck::cast_slice::<f32, u8>(&normals).len() as u64,
            mesh.label(),
            "normals",
        )?;

        let interleaved_attrs: Vec<VertexAttribute> =
            layout.attributes_for_buffer(0).cloned().collect();
        self.backend.upload_float_attributes(
            &vertex_array,
            &vertex_buffer,
            &layout.buffers[0],
            &interleaved_attrs,
            mesh.vertices(),
        )?;

        let normal_attrs: Vec<VertexAttribute> =
            layout.attributes_for_buffer(1).cloned().collect();
        self.backend.upload_float_attributes(
            &vertex_array,
            &normal_buffer,
            &layout.buffers[1],
            &normal_attrs,
            &normals,
        )?;

        log::trace!(
            "RenderContext: created drawable {:?} ({} triangles)",
            mesh.label(),
            mesh.triangle_count()
        );

        Ok(Drawable::new(
            self.backend.clone(),
            layout,
            vertex_array,
            vertex_buffer,
            normal_buffer,
            mesh.vertex_count() as u32,
            mesh.label().map(str::to_string),
        ))
    }

    fn create_vertex_buffer(
        &self,
        size: u64,
        mesh_label: Option<&str>,
        suffix: &str,
    ) -> Result<GpuBuffer, GraphicsError> {
        let mut descriptor =
            BufferDescriptor::new(size, BufferUsage::VERTEX | BufferUsage::COPY_DST);
        if let Some(label) = mesh_label {
            descriptor = descriptor.with_label(format!("{label}.{suffix}"));
        }
        let buffer = self.backend.create_buffer(&descriptor)?;
        self.buffers_created.set(self.buffers_created.get() + 1);
        Ok(buffer)
    }
}

impl std::fmt::Debug for RenderContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RenderContext")
            .field("backend", &self.backend.name())
            .field("vertex_arrays_created", &self.vertex_arrays_created.get())
            .field("buffers_created", &self.buffers_created.get())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::DummyBackend;
    use faceted_core::mesh::generate_cube;

    fn create_test_context() -> (Arc<DummyBackend>, RenderContext) {
        let backend = Arc::new(DummyBackend::new());
        let context = RenderContext::new(backend.clone());
        (backend, context)
    }

    #[test]
    fn test_backend_name() {
        let (_, context) = create_test_context();
        assert_eq!(context.backend_name(), "Dummy");
    }

    #[test]
    fn test_create_drawable_allocates_two_buffers() {
        let (backend, context) = create_test_context();
        let mesh = generate_cube(2.0).unwrap();
        let drawable = context.create_drawable(&mesh).unwrap();

        assert_eq!(drawable.vertex_count(), 36);
        assert_eq!(drawable.triangle_count(), 12);
        assert_eq!(context.vertex_arrays_created(), 1);
        assert_eq!(context.buffers_created(), 2);
        assert_eq!(backend.buffers_created(), 2);
    }

    #[test]
    fn test_create_drawable_uploads_parallel_streams() {
        let (backend, context) = create_test_context();
        let mesh = generate_cube(2.0).unwrap();
        context.create_drawable(&mesh).unwrap();

        let uploads = backend.uploads();
        assert_eq!(uploads.len(), 2);
        // buffer 0: interleaved position + UV, 36 records * 5 floats
        assert_eq!(uploads[0].components, vec![3, 2]);
        assert_eq!(uploads[0].float_count, 180);
        // buffer 1: one normal per record, 36 records * 3 floats
        assert_eq!(uploads[1].components, vec![3]);
        assert_eq!(uploads[1].float_count, 108);
    }

    #[test]
    fn test_rejects_wrong_stride_before_allocation() {
        let (backend, context) = create_test_context();
        let mesh = TriangleMesh::from_interleaved(vec![0.0; 9], 3).unwrap();

        let err = context.create_drawable(&mesh).unwrap_err();
        assert!(matches!(err, GraphicsError::InvalidParameter(_)));
        assert_eq!(context.buffers_created(), 0);
        assert_eq!(backend.buffers_created(), 0);
        assert_eq!(backend.vertex_arrays_created(), 0);
    }

    #[test]
    fn test_rejects_empty_mesh() {
        let (backend, context) = create_test_context();
        let mesh = TriangleMesh::from_interleaved(Vec::new(), 5).unwrap();

        let err = context.create_drawable(&mesh).unwrap_err();
        assert!(matches!(err, GraphicsError::InvalidParameter(_)));
        assert_eq!(backend.buffers_created(), 0);
    }
}
