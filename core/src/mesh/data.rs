//! CPU-side triangle mesh data.
//!
//! A [`TriangleMesh`] holds a flat stream of interleaved vertex attributes
//! grouped into records of `stride` floats: the first three floats of each
//! record are the position (X, Y, Z), the remainder are texture
//! coordinates. Every three consecutive records form one triangle; no
//! records are shared between triangles, which is what makes per-triangle
//! flat normals possible.

use crate::math::{triangle_normal, Vec2, Vec3};
use crate::mesh::MeshError;

/// Float components of the position at the start of every record.
pub const POSITION_COMPONENTS: usize = 3;

/// Components per record in a position + texcoord stream (XYZ + UV).
pub const POSITION_UV_STRIDE: usize = 5;

/// An immutable, validated triangle-list vertex stream.
///
/// Constructed once with all invariants checked up front; never mutated
/// afterwards. Derived data (the flat normal stream) is recomputed from
/// the vertex stream on demand and is bit-for-bit reproducible.
#[derive(Clone, PartialEq)]
pub struct TriangleMesh {
    vertices: Vec<f32>,
    stride: usize,
    label: Option<String>,
}

impl TriangleMesh {
    /// Create a mesh from an interleaved vertex stream.
    ///
    /// # Errors
    ///
    /// - [`MeshError::StrideTooSmall`] if `stride` cannot hold a position
    /// - [`MeshError::LengthMismatch`] if the stream does not divide into
    ///   whole records
    /// - [`MeshError::IncompleteTriangle`] if the record count is not a
    ///   multiple of three
    pub fn from_interleaved(vertices: Vec<f32>, stride: usize) -> Result<Self, MeshError> {
        if stride < POSITION_COMPONENTS {
            return Err(MeshError::StrideTooSmall { stride });
        }
        if vertices.len() % stride != 0 {
            return Err(MeshError::LengthMismatch {
                len: vertices.len(),
                stride,
            });
        }
        let records = vertices.len() / stride;
        if records % 3 != 0 {
            return Err(MeshError::IncompleteTriangle { records });
        }
        Ok(Self {
            vertices,
            stride,
            label: None,
        })
    }

    /// Create a mesh from a stream with an explicit triangle count.
    ///
    /// In addition to the [`from_interleaved`](Self::from_interleaved)
    /// checks, the declared `triangle_count` must account for the whole
    /// stream: `triangle_count * stride * 3 == vertices.len()`. A mismatch
    /// would silently read out of bounds downstream, so it is rejected
    /// before anything else happens.
    pub fn from_raw_parts(
        vertices: Vec<f32>,
        stride: usize,
        triangle_count: usize,
    ) -> Result<Self, MeshError> {
        if stride < POSITION_COMPONENTS {
            return Err(MeshError::StrideTooSmall { stride });
        }
        if triangle_count * stride * 3 != vertices.len() {
            return Err(MeshError::TriangleCountMismatch {
                expected: triangle_count,
                len: vertices.len(),
                stride,
            });
        }
        Ok(Self {
            vertices,
            stride,
            label: None,
        })
    }

    /// Set a debug label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Get the raw interleaved vertex stream.
    pub fn vertices(&self) -> &[f32] {
        &self.vertices
    }

    /// Get the vertex stream as bytes, for buffer upload.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Get the number of float components per vertex record.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Get the number of vertex records.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / self.stride
    }

    /// Get the number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.vertex_count() / 3
    }

    /// Get the position of a vertex record.
    ///
    /// # Panics
    ///
    /// Panics if `record` is out of bounds.
    pub fn position(&self, record: usize) -> Vec3 {
        let i = record * self.stride;
        Vec3::new(self.vertices[i], self.vertices[i + 1], self.vertices[i + 2])
    }

    /// Get the texture coordinate of a vertex record, if the stride
    /// carries one.
    pub fn texcoord(&self, record: usize) -> Option<Vec2> {
        if self.stride < POSITION_UV_STRIDE {
            return None;
        }
        let i = record * self.stride + POSITION_COMPONENTS;
        Some(Vec2::new(self.vertices[i], self.vertices[i + 1]))
    }

    /// Get the debug label.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Derive the flat normal stream for this mesh.
    ///
    /// For each triangle the unit normal of its three positions (winding
    /// order `v1 -> v2`, `v1 -> v3`) is written once per vertex, producing
    /// exactly `triangle_count * 9` floats. The three normals of a
    /// triangle are identical, which gives every face a single constant
    /// normal.
    ///
    /// Zero-area triangles have no defined normal; they get the zero
    /// vector instead of a NaN-bearing one, and the mesh logs how many
    /// were encountered.
    pub fn flat_normals(&self) -> Vec<f32> {
        let triangle_count = self.triangle_count();
        let mut normals = vec![0.0f32; triangle_count * 9];
        let mut degenerate = 0usize;

        for tri in 0..triangle_count {
            let record = tri * 3;
            let p1 = self.position(record);
            let p2 = self.position(record + 1);
            let p3 = self.position(record + 2);

            match triangle_normal(&p1, &p2, &p3) {
                Some(n) => {
                    let out = &mut normals[tri * 9..tri * 9 + 9];
                    for vertex in 0..3 {
                        out[vertex * 3] = n.x;
                        out[vertex * 3 + 1] = n.y;
                        out[vertex * 3 + 2] = n.z;
                    }
                }
                // slots stay zeroed
                None => degenerate += 1,
            }
        }

        if degenerate > 0 {
            log::warn!(
                "flat_normals: {degenerate} degenerate triangle(s) in {:?}, emitted zero normals",
                self.label
            );
        }

        normals
    }
}

impl std::fmt::Debug for TriangleMesh {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TriangleMesh")
            .field("label", &self.label)
            .field("stride", &self.stride)
            .field("vertex_count", &self.vertex_count())
            .field("triangle_count", &self.triangle_count())
            .finish()
    }
}

static_assertions::assert_impl_all!(TriangleMesh: Send, Sync);
