//! Common utilities for pipeline integration tests.

use std::sync::Arc;

use faceted_graphics::{DummyBackend, RenderContext, Shader};

/// A render context over a recording backend, plus direct access to the
/// recorder for assertions.
pub struct TestContext {
    pub backend: Arc<DummyBackend>,
    pub context: RenderContext,
}

impl TestContext {
    pub fn new() -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let backend = Arc::new(DummyBackend::new());
        let context = RenderContext::new(backend.clone());
        Self { backend, context }
    }

    /// Wrap a fresh program handle, standing in for the external shader
    /// compilation layer.
    pub fn create_shader(&self) -> Shader {
        Shader::new(self.backend.clone(), self.backend.create_program())
    }
}
