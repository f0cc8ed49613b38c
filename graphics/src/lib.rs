//! # Faceted Graphics
//!
//! Backend seam and drawable lifecycle for the Faceted renderer.
//!
//! ## Overview
//!
//! This crate provides:
//! - [`RenderBackend`] - Trait for buffer/layout/draw backend implementations
//! - [`RenderContext`] - Explicit context handle that owns mesh upload
//! - [`Drawable`] - GPU-resident mesh with single and repeated draw calls
//! - [`DummyBackend`] - Recording backend for testing without a GPU
//!
//! ## Example
//!
//! ```ignore
//! use faceted_core::mesh::generate_cube;
//! use faceted_graphics::{create_backend, RenderContext};
//!
//! let context = RenderContext::new(create_backend()?);
//! let cube = context.create_drawable(&generate_cube(2.0)?)?;
//! cube.draw(&shader, &transform);
//! ```

pub mod backend;
pub mod context;
pub mod drawable;
pub mod error;
pub mod shader;
pub mod types;

// Re-export main types for convenience
pub use backend::{
    create_backend, DummyBackend, GpuBuffer, GpuProgram, GpuVertexArray, RenderBackend,
};
pub use context::RenderContext;
pub use drawable::Drawable;
pub use error::GraphicsError;
pub use shader::{Shader, MODEL_UNIFORM};
pub use types::{BufferDescriptor, BufferUsage};

/// Graphics library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the graphics subsystem.
///
/// This should be called before using any graphics functionality.
pub fn init() {
    log::info!("Faceted Graphics v{} initialized", VERSION);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_dummy_backend() {
        let backend = DummyBackend::new();
        assert_eq!(backend.name(), "Dummy");
    }
}
