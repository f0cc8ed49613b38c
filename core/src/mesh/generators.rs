//! Mesh generators for primitive shapes.
//!
//! These generators produce [`TriangleMesh`] values that can be uploaded
//! to the GPU via `RenderContext::create_drawable`.
//!
//! Primitives are described as faces over a small corner table rather than
//! literal float arrays: a quad face is four corner indices wound
//! counter-clockwise as seen from outside, expanded into two triangles
//! with a canonical UV unwrap. Winding fixes each face's outward normal.

use crate::math::Vec3;
use crate::mesh::{MeshError, TriangleMesh, POSITION_UV_STRIDE};

/// Canonical UV unwrap for a quad face, one pair per corner slot.
const QUAD_UVS: [[f32; 2]; 4] = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];

/// The set of primitive shapes the generator knows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    /// Axis-aligned cube, 6 quad faces (12 triangles).
    Cube,
    /// Five-faced pyramid over a square base (6 triangles).
    Pentahedron,
}

impl Primitive {
    /// Display name, also used as the generated mesh label.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Cube => "cube",
            Self::Pentahedron => "pentahedron",
        }
    }
}

/// Generate a primitive shape with the given edge length.
///
/// Generation is pure: identical arguments produce bit-identical vertex
/// streams.
///
/// # Errors
///
/// Returns [`MeshError::InvalidSize`] unless `size` is strictly positive
/// and finite.
pub fn generate_primitive(primitive: Primitive, size: f32) -> Result<TriangleMesh, MeshError> {
    match primitive {
        Primitive::Cube => generate_cube(size),
        Primitive::Pentahedron => generate_pentahedron(size),
    }
}

/// Generate a cube centered at the origin.
///
/// Corners sit at `±size/2` on every axis. Produces 12 triangles
/// (36 records) in stride-5 interleaved form, each face wound for its
/// outward axis-aligned normal.
pub fn generate_cube(size: f32) -> Result<TriangleMesh, MeshError> {
    check_size(size)?;
    let h = size / 2.0;

    let corners = [
        Vec3::new(-h, -h, -h),
        Vec3::new(h, -h, -h),
        Vec3::new(h, h, -h),
        Vec3::new(-h, h, -h),
        Vec3::new(-h, -h, h),
        Vec3::new(h, -h, h),
        Vec3::new(h, h, h),
        Vec3::new(-h, h, h),
    ];

    // Quad faces as corner indices, CCW viewed from outside:
    // -Z, +Z, -X, +X, -Y, +Y
    const FACES: [[usize; 4]; 6] = [
        [1, 0, 3, 2],
        [4, 5, 6, 7],
        [0, 4, 7, 3],
        [5, 1, 2, 6],
        [0, 1, 5, 4],
        [3, 7, 6, 2],
    ];

    let mut vertices = Vec::with_capacity(FACES.len() * 6 * POSITION_UV_STRIDE);
    for face in &FACES {
        push_quad(&mut vertices, &corners, face);
    }

    Ok(TriangleMesh::from_interleaved(vertices, POSITION_UV_STRIDE)?
        .with_label(Primitive::Cube.name()))
}

/// Generate a five-faced pyramid over a square base.
///
/// The base sits at `y = -size/2` with corners at `±size/2`, the apex at
/// `(0, size/2, 0)`. Produces 6 triangles (18 records): two for the base
/// (outward normal straight down) and one per slanted side.
pub fn generate_pentahedron(size: f32) -> Result<TriangleMesh, MeshError> {
    check_size(size)?;
    let h = size / 2.0;

    let base = [
        Vec3::new(h, -h, h),
        Vec3::new(-h, -h, h),
        Vec3::new(-h, -h, -h),
        Vec3::new(h, -h, -h),
    ];
    let apex = Vec3::new(0.0, h, 0.0);

    // Base corner pairs per slanted face, wound so normals point out and up:
    // -Z, +X, +Z, -X
    const SLANTS: [[usize; 2]; 4] = [[3, 2], [0, 3], [1, 0], [2, 1]];

    let mut vertices = Vec::with_capacity((2 + SLANTS.len()) * 3 * POSITION_UV_STRIDE);
    push_quad(&mut vertices, &base, &[0, 1, 2, 3]);
    for [near, far] in &SLANTS {
        push_vertex(&mut vertices, apex, [0.5, 1.0]);
        push_vertex(&mut vertices, base[*near], [1.0, 0.0]);
        push_vertex(&mut vertices, base[*far], [0.0, 0.0]);
    }

    Ok(TriangleMesh::from_interleaved(vertices, POSITION_UV_STRIDE)?
        .with_label(Primitive::Pentahedron.name()))
}

fn check_size(size: f32) -> Result<(), MeshError> {
    if !size.is_finite() || size <= 0.0 {
        return Err(MeshError::InvalidSize(size));
    }
    Ok(())
}

fn push_vertex(out: &mut Vec<f32>, position: Vec3, uv: [f32; 2]) {
    out.extend_from_slice(&[position.x, position.y, position.z, uv[0], uv[1]]);
}

/// Expand a quad face into two triangles (corner slots 0-1-2 and 0-2-3).
fn push_quad(out: &mut Vec<f32>, corners: &[Vec3], face: &[usize; 4]) {
    for slot in [0usize, 1, 2, 0, 2, 3] {
        push_vertex(out, corners[face[slot]], QUAD_UVS[slot]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_cube_counts() {
        let mesh = generate_cube(2.0).unwrap();
        assert_eq!(mesh.stride(), POSITION_UV_STRIDE);
        assert_eq!(mesh.vertex_count(), 36);
        assert_eq!(mesh.triangle_count(), 12);
        assert_eq!(mesh.label(), Some("cube"));
    }

    #[test]
    fn test_cube_positions_on_unit_corners() {
        // size 2 puts every position component exactly at -1 or 1
        let mesh = generate_cube(2.0).unwrap();
        for record in 0..mesh.vertex_count() {
            let p = mesh.position(record);
            for c in [p.x, p.y, p.z] {
                assert!(c == 1.0 || c == -1.0, "component {c} not on a corner");
            }
        }
    }

    #[test]
    fn test_cube_face_normals_axis_aligned() {
        let mesh = generate_cube(2.0).unwrap();
        let normals = mesh.flat_normals();
        assert_eq!(normals.len(), 108);

        let axes: [[f32; 3]; 6] = [
            [0.0, 0.0, -1.0],
            [0.0, 0.0, 1.0],
            [-1.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [0.0, -1.0, 0.0],
            [0.0, 1.0, 0.0],
        ];
        // each face spans 2 triangles = 6 vertices sharing one axis normal
        for (face, axis) in axes.iter().enumerate() {
            for vertex in 0..6 {
                let i = face * 18 + vertex * 3;
                let n = &normals[i..i + 3];
                assert_eq!(n, axis, "face {face} vertex {vertex}");
            }
        }
    }

    #[test]
    fn test_generate_pentahedron_counts() {
        let mesh = generate_pentahedron(2.0).unwrap();
        assert_eq!(mesh.vertex_count(), 18);
        assert_eq!(mesh.triangle_count(), 6);
        assert_eq!(mesh.label(), Some("pentahedron"));
    }

    #[test]
    fn test_pentahedron_apex() {
        let mesh = generate_pentahedron(2.0).unwrap();
        let apex = Vec3::new(0.0, 1.0, 0.0);
        // records 6, 9, 12, 15 are the four slant-face apex vertices
        for slant in 0..4 {
            assert_eq!(mesh.position(6 + slant * 3), apex);
        }
    }

    #[test]
    fn test_pentahedron_normals() {
        let mesh = generate_pentahedron(2.0).unwrap();
        let normals = mesh.flat_normals();
        assert_eq!(normals.len(), 54);

        // base triangles point straight down
        for vertex in 0..6 {
            let i = vertex * 3;
            assert_eq!(&normals[i..i + 3], &[0.0, -1.0, 0.0]);
        }
        // slant faces point outward and upward
        for tri in 2..6 {
            let n = &normals[tri * 9..tri * 9 + 3];
            assert!(n[1] > 0.0, "slant triangle {tri} normal {n:?} not upward");
            let magnitude = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
            assert!((magnitude - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_generation_is_deterministic() {
        for primitive in [Primitive::Cube, Primitive::Pentahedron] {
            let a = generate_primitive(primitive, 1.7).unwrap();
            let b = generate_primitive(primitive, 1.7).unwrap();
            assert_eq!(a.vertices(), b.vertices());
        }
    }

    #[test]
    fn test_scale_invariance() {
        let small = generate_cube(1.0).unwrap();
        let large = generate_cube(3.0).unwrap();
        for record in 0..small.vertex_count() {
            let p = small.position(record) * 3.0;
            let q = large.position(record);
            assert!((p - q).norm() < 1e-6);
            // texcoords do not scale
            assert_eq!(small.texcoord(record), large.texcoord(record));
        }
    }

    #[test]
    fn test_invalid_sizes_rejected() {
        for size in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            for primitive in [Primitive::Cube, Primitive::Pentahedron] {
                let err = generate_primitive(primitive, size).unwrap_err();
                assert!(matches!(err, MeshError::InvalidSize(_)));
            }
        }
    }
}
