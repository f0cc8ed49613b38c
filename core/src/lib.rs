//! # Faceted Core
//!
//! CPU-side geometry for the Faceted renderer: math aliases, vertex
//! layouts, flat-shaded triangle meshes, and primitive generators.

pub mod math;
pub mod mesh;

/// Core library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log subsystem initialization.
pub fn init() {
    log::info!("Faceted Core v{} initialized", VERSION);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
