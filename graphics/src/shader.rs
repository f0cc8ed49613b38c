//! Shader uniform surface.
//!
//! Shader compilation and program linking happen outside this crate; a
//! [`Shader`] wraps the resulting backend program handle and exposes the
//! narrow uniform interface the draw path needs.

use std::sync::Arc;

use faceted_core::math::Mat4;

use crate::backend::{GpuProgram, RenderBackend};

/// Name of the per-draw model transform uniform.
pub const MODEL_UNIFORM: &str = "model";

/// A shader program handle with a matrix uniform surface.
pub struct Shader {
    backend: Arc<dyn RenderBackend>,
    program: GpuProgram,
    label: Option<String>,
}

impl Shader {
    /// Wrap an externally-compiled program handle.
    pub fn new(backend: Arc<dyn RenderBackend>, program: GpuProgram) -> Self {
        Self {
            backend,
            program,
            label: None,
        }
    }

    /// Set a debug label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Get the program handle.
    pub fn program(&self) -> &GpuProgram {
        &self.program
    }

    /// Get the shader label, if set.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Set a 4x4 matrix uniform by name.
    pub fn set_matrix_uniform(&self, name: &str, matrix: &Mat4) {
        self.backend.set_matrix_uniform(&self.program, name, matrix);
    }
}

impl std::fmt::Debug for Shader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Shader")
            .field("program", &self.program)
            .field("label", &self.label)
            .finish()
    }
}
