//! Dummy rendering backend for testing and development.
//!
//! This backend doesn't perform actual GPU operations but hands out
//! sequential handle ids and records every call, so the graphics API can
//! be exercised and inspected without GPU hardware.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use faceted_core::math::{mat4_to_cols_array_2d, Mat4};
use faceted_core::mesh::{VertexAttribute, VertexBufferLayout};

use crate::error::GraphicsError;
use crate::types::BufferDescriptor;

use super::{GpuBuffer, GpuProgram, GpuVertexArray, RenderBackend};

/// A recorded attribute upload.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedUpload {
    /// Target buffer handle id.
    pub buffer: u64,
    /// Ordered float component counts, e.g. `[3, 2]` for position + UV.
    pub components: Vec<u32>,
    /// Number of floats uploaded.
    pub float_count: usize,
}

/// A recorded matrix uniform assignment.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedUniform {
    /// Target program handle id.
    pub program: u64,
    /// Uniform name.
    pub name: String,
    /// Column-major matrix value.
    pub matrix: [[f32; 4]; 4],
}

/// A recorded draw submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordedDraw {
    /// Vertex array bound when the draw was submitted.
    pub vertex_array: Option<u64>,
    /// Number of vertices drawn.
    pub vertex_count: u32,
}

#[derive(Debug, Default)]
struct CallLog {
    vertex_arrays_created: usize,
    buffers_created: usize,
    uploads: Vec<RecordedUpload>,
    bound_vertex_array: Option<u64>,
    uniform_sets: Vec<RecordedUniform>,
    draws: Vec<RecordedDraw>,
}

/// Dummy rendering backend.
#[derive(Debug, Default)]
pub struct DummyBackend {
    next_id: AtomicU64,
    log: Mutex<CallLog>,
}

impl DummyBackend {
    /// Create a new dummy backend.
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }

    fn record(&self, f: impl FnOnce(&mut CallLog)) {
        if let Ok(mut log) = self.log.lock() {
            f(&mut log);
        }
    }

    /// Hand out a program handle, standing in for the external shader
    /// compilation layer.
    pub fn create_program(&self) -> GpuProgram {
        let id = self.next_id();
        log::trace!("DummyBackend: creating program {id}");
        GpuProgram::Dummy(id)
    }

    /// Number of vertex arrays created so far.
    pub fn vertex_arrays_created(&self) -> usize {
        self.log.lock().map(|l| l.vertex_arrays_created).unwrap_or(0)
    }

    /// Number of buffers created so far.
    pub fn buffers_created(&self) -> usize {
        self.log.lock().map(|l| l.buffers_created).unwrap_or(0)
    }

    /// All recorded attribute uploads, in call order.
    pub fn uploads(&self) -> Vec<RecordedUpload> {
        self.log.lock().map(|l| l.uploads.clone()).unwrap_or_default()
    }

    /// The currently bound vertex array id, if any.
    pub fn bound_vertex_array(&self) -> Option<u64> {
        self.log.lock().ok().and_then(|l| l.bound_vertex_array)
    }

    /// All recorded uniform assignments, in call order.
    pub fn uniform_sets(&self) -> Vec<RecordedUniform> {
        self.log
            .lock()
            .map(|l| l.uniform_sets.clone())
            .unwrap_or_default()
    }

    /// All recorded draw submissions, in call order.
    pub fn draws(&self) -> Vec<RecordedDraw> {
        self.log.lock().map(|l| l.draws.clone()).unwrap_or_default()
    }

    /// Number of draw submissions so far.
    pub fn draw_count(&self) -> usize {
        self.log.lock().map(|l| l.draws.len()).unwrap_or(0)
    }
}

impl RenderBackend for DummyBackend {
    fn name(&self) -> &'static str {
        "Dummy"
    }

    fn create_vertex_array(&self) -> Result<GpuVertexArray, GraphicsError> {
        let id = self.next_id();
        log::trace!("DummyBackend: creating vertex array {id}");
        self.record(|l| l.vertex_arrays_created += 1);
        Ok(GpuVertexArray::Dummy(id))
    }

    fn create_buffer(&self, descriptor: &BufferDescriptor) -> Result<GpuBuffer, GraphicsError> {
        let id = self.next_id();
        log::trace!(
            "DummyBackend: creating buffer {id} {:?} (size: {})",
            descriptor.label,
            descriptor.size
        );
        self.record(|l| l.buffers_created += 1);
        Ok(GpuBuffer::Dummy(id))
    }

    fn upload_float_attributes(
        &self,
        vertex_array: &GpuVertexArray,
        buffer: &GpuBuffer,
        layout: &VertexBufferLayout,
        attributes: &[VertexAttribute],
        data: &[f32],
    ) -> Result<(), GraphicsError> {
        let GpuVertexArray::Dummy(vao) = vertex_array;
        let GpuBuffer::Dummy(buf) = buffer;
        log::trace!(
            "DummyBackend: upload {} floats to buffer {buf} (vao {vao}, stride {})",
            data.len(),
            layout.stride
        );
        let upload = RecordedUpload {
            buffer: *buf,
            components: attributes
                .iter()
                .map(|a| a.format.component_count())
                .collect(),
            float_count: data.len(),
        };
        self.record(|l| l.uploads.push(upload));
        Ok(())
    }

    fn bind_vertex_array(&self, vertex_array: &GpuVertexArray) {
        let GpuVertexArray::Dummy(vao) = vertex_array;
        log::trace!("DummyBackend: bind vertex array {vao}");
        self.record(|l| l.bound_vertex_array = Some(*vao));
    }

    fn set_matrix_uniform(&self, program: &GpuProgram, name: &str, matrix: &Mat4) {
        let GpuProgram::Dummy(prog) = program;
        log::trace!("DummyBackend: set uniform {name:?} on program {prog}");
        let uniform = RecordedUniform {
            program: *prog,
            name: name.to_string(),
            matrix: mat4_to_cols_array_2d(matrix),
        };
        self.record(|l| l.uniform_sets.push(uniform));
    }

    fn submit_triangles(&self, vertex_count: u32) {
        log::trace!("DummyBackend: draw {vertex_count} vertices");
        self.record(|l| {
            let draw = RecordedDraw {
                vertex_array: l.bound_vertex_array,
                vertex_count,
            };
            l.draws.push(draw);
        });
    }
}

static_assertions::assert_impl_all!(DummyBackend: Send, Sync);
