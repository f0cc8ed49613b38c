//! Vertex layout definitions for meshes.
//!
//! Vertex layouts describe the structure of vertex data across one or more
//! parallel buffers. Flat-shaded meshes keep interleaved position + texcoord
//! data in buffer 0 and derived normals in buffer 1, both advancing by the
//! same per-vertex record index.
//!
//! Layouts are shared via `Arc` since there are only a few combinations
//! across many meshes.

use std::sync::Arc;

/// Semantic meaning of a vertex attribute.
///
/// Semantics are used to match mesh attributes with shader inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexAttributeSemantic {
    /// Vertex position (float3).
    Position,
    /// Vertex normal (float3).
    Normal,
    /// Texture coordinates set 0 (float2).
    TexCoord0,
}

impl VertexAttributeSemantic {
    /// Shader input location bound to this semantic.
    pub fn location(&self) -> u32 {
        match self {
            Self::Position => 0,
            Self::Normal => 1,
            Self::TexCoord0 => 2,
        }
    }
}

/// Format of a vertex attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexAttributeFormat {
    /// Single 32-bit float.
    Float,
    /// Two 32-bit floats.
    Float2,
    /// Three 32-bit floats.
    Float3,
    /// Four 32-bit floats.
    Float4,
}

impl VertexAttributeFormat {
    /// Get the number of float components in this format.
    pub fn component_count(&self) -> u32 {
        match self {
            Self::Float => 1,
            Self::Float2 => 2,
            Self::Float3 => 3,
            Self::Float4 => 4,
        }
    }

    /// Get the size in bytes of this format.
    pub fn size(&self) -> usize {
        self.component_count() as usize * std::mem::size_of::<f32>()
    }
}

/// Describes a single vertex buffer binding.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VertexBufferLayout {
    /// Stride in bytes between consecutive records.
    pub stride: u32,
}

impl VertexBufferLayout {
    /// Create a new vertex buffer layout with the given stride.
    pub fn new(stride: u32) -> Self {
        Self { stride }
    }
}

/// A single vertex attribute description.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VertexAttribute {
    /// Semantic meaning of this attribute.
    pub semantic: VertexAttributeSemantic,
    /// Data format of this attribute.
    pub format: VertexAttributeFormat,
    /// Byte offset within the vertex record.
    pub offset: u32,
    /// Index of the vertex buffer this attribute reads from.
    pub buffer_index: u32,
}

impl VertexAttribute {
    /// Create a new vertex attribute.
    pub fn new(
        semantic: VertexAttributeSemantic,
        format: VertexAttributeFormat,
        offset: u32,
        buffer_index: u32,
    ) -> Self {
        Self {
            semantic,
            format,
            offset,
            buffer_index,
        }
    }

    /// Create a position attribute (float3) at buffer 0.
    pub fn position(offset: u32) -> Self {
        Self::new(
            VertexAttributeSemantic::Position,
            VertexAttributeFormat::Float3,
            offset,
            0,
        )
    }

    /// Create a normal attribute (float3) at buffer 0.
    pub fn normal(offset: u32) -> Self {
        Self::new(
            VertexAttributeSemantic::Normal,
            VertexAttributeFormat::Float3,
            offset,
            0,
        )
    }

    /// Create a texcoord0 attribute (float2) at buffer 0.
    pub fn texcoord0(offset: u32) -> Self {
        Self::new(
            VertexAttributeSemantic::TexCoord0,
            VertexAttributeFormat::Float2,
            offset,
            0,
        )
    }

    /// Set the buffer index for this attribute.
    pub fn at_buffer(mut self, buffer_index: u32) -> Self {
        self.buffer_index = buffer_index;
        self
    }
}

/// Describes the layout of vertex data across one or more buffers.
///
/// Layouts are typically wrapped in `Arc` and shared between meshes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VertexLayout {
    /// Descriptions of each vertex buffer binding.
    pub buffers: Vec<VertexBufferLayout>,
    /// The vertex attributes, each referencing a buffer by index.
    pub attributes: Vec<VertexAttribute>,
    /// Optional label for debugging.
    pub label: Option<String>,
}

impl VertexLayout {
    /// Create a new empty vertex layout.
    pub fn new() -> Self {
        Self {
            buffers: Vec::new(),
            attributes: Vec::new(),
            label: None,
        }
    }

    /// Add a vertex buffer binding.
    pub fn with_buffer(mut self, buffer: VertexBufferLayout) -> Self {
        self.buffers.push(buffer);
        self
    }

    /// Add a vertex attribute.
    pub fn with_attribute(mut self, attribute: VertexAttribute) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// Set a debug label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Get the number of vertex buffers.
    pub fn buffer_count(&self) -> usize {
        self.buffers.len()
    }

    /// Get a buffer layout by index.
    pub fn buffer(&self, index: usize) -> Option<&VertexBufferLayout> {
        self.buffers.get(index)
    }

    /// Get the stride in bytes for a specific buffer.
    pub fn buffer_stride(&self, buffer_index: usize) -> u32 {
        self.buffers
            .get(buffer_index)
            .map(|b| b.stride)
            .unwrap_or(0)
    }

    /// Check if this layout has a specific semantic.
    pub fn has_semantic(&self, semantic: VertexAttributeSemantic) -> bool {
        self.attributes.iter().any(|attr| attr.semantic == semantic)
    }

    /// Get all attributes for a specific buffer.
    pub fn attributes_for_buffer(
        &self,
        buffer_index: u32,
    ) -> impl Iterator<Item = &VertexAttribute> {
        self.attributes
            .iter()
            .filter(move |attr| attr.buffer_index == buffer_index)
    }

    /// Ordered float component counts for a buffer's attributes.
    ///
    /// This is the shape handed to the backend when splitting an
    /// interleaved float stream into shader inputs, e.g. `[3, 2]` for
    /// position + texcoord or `[3]` for normals.
    pub fn float_components_for_buffer(&self, buffer_index: u32) -> Vec<u32> {
        self.attributes_for_buffer(buffer_index)
            .map(|attr| attr.format.component_count())
            .collect()
    }

    /// Validate the layout (check that all attributes reference valid buffers).
    pub fn validate(&self) -> Result<(), String> {
        for attr in &self.attributes {
            if attr.buffer_index as usize >= self.buffers.len() {
                return Err(format!(
                    "Attribute {:?} references buffer {} but only {} buffers defined",
                    attr.semantic,
                    attr.buffer_index,
                    self.buffers.len()
                ));
            }
        }
        Ok(())
    }
}

impl Default for VertexLayout {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Common Layouts
// ============================================================================

impl VertexLayout {
    /// Position + texcoord layout (20 bytes per vertex, single buffer).
    pub fn position_uv() -> Arc<Self> {
        Arc::new(
            Self::new()
                .with_buffer(VertexBufferLayout::new(20))
                .with_attribute(VertexAttribute::position(0))
                .with_attribute(VertexAttribute::texcoord0(12))
                .with_label("position_uv"),
        )
    }

    /// Flat-shaded layout with two parallel buffers.
    ///
    /// - Buffer 0 (20 bytes): interleaved position + texcoord
    /// - Buffer 1 (12 bytes): per-vertex normal derived per triangle
    ///
    /// Both buffers advance by the same record index, so vertex `i` reads
    /// its position/UV from buffer 0 and its face normal from buffer 1.
    pub fn flat_shaded() -> Arc<Self> {
        Arc::new(
            Self::new()
                .with_buffer(VertexBufferLayout::new(20))
                .with_buffer(VertexBufferLayout::new(12))
                .with_attribute(VertexAttribute::position(0))
                .with_attribute(VertexAttribute::texcoord0(12))
                .with_attribute(VertexAttribute::normal(0).at_buffer(1))
                .with_label("flat_shaded"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_attribute_format() {
        assert_eq!(VertexAttributeFormat::Float.component_count(), 1);
        assert_eq!(VertexAttributeFormat::Float2.component_count(), 2);
        assert_eq!(VertexAttributeFormat::Float3.size(), 12);
        assert_eq!(VertexAttributeFormat::Float4.size(), 16);
    }

    #[test]
    fn test_semantic_locations() {
        assert_eq!(VertexAttributeSemantic::Position.location(), 0);
        assert_eq!(VertexAttributeSemantic::Normal.location(), 1);
        assert_eq!(VertexAttributeSemantic::TexCoord0.location(), 2);
    }

    #[test]
    fn test_position_uv_layout() {
        let layout = VertexLayout::position_uv();
        assert_eq!(layout.buffer_count(), 1);
        assert_eq!(layout.buffer_stride(0), 20);
        assert!(layout.has_semantic(VertexAttributeSemantic::Position));
        assert!(layout.has_semantic(VertexAttributeSemantic::TexCoord0));
        assert!(!layout.has_semantic(VertexAttributeSemantic::Normal));
        assert!(layout.validate().is_ok());
    }

    #[test]
    fn test_flat_shaded_layout() {
        let layout = VertexLayout::flat_shaded();
        assert_eq!(layout.buffer_count(), 2);
        assert_eq!(layout.buffer_stride(0), 20);
        assert_eq!(layout.buffer_stride(1), 12);
        assert!(layout.validate().is_ok());

        assert_eq!(layout.float_components_for_buffer(0), vec![3, 2]);
        assert_eq!(layout.float_components_for_buffer(1), vec![3]);

        let buffer1_attrs: Vec<_> = layout.attributes_for_buffer(1).collect();
        assert_eq!(buffer1_attrs.len(), 1);
        assert_eq!(buffer1_attrs[0].semantic, VertexAttributeSemantic::Normal);
        assert_eq!(buffer1_attrs[0].offset, 0);
    }

    #[test]
    fn test_vertex_layout_validation() {
        let invalid_layout = VertexLayout::new()
            .with_buffer(VertexBufferLayout::new(12))
            .with_attribute(VertexAttribute::position(0).at_buffer(5));

        assert!(invalid_layout.validate().is_err());
    }
}
