//! Sphere patch generation for video projection.
//!
//! The patch is built in local space starting at the forward axis (`-Z`)
//! and sweeping right by the horizontal extent, with the vertical extent
//! split evenly above and below the horizon. The returned transform yaws
//! the patch so its horizontal center faces forward.

use immersive_common::{FieldOfView, MAX_HORIZONTAL_FOV, MAX_VERTICAL_FOV};

use super::types::{MeshDensity, ProjectionMesh, ProjectionVertex, Transform};

/// Distance from the viewer to the projection surface, in meters.
pub const PROJECTION_RADIUS: f32 = 1000.0;

/// Generate the projection mesh and its placement for a field of view.
///
/// Out-of-range or non-finite extents are clamped first, so the result is
/// never empty. The grid has `(rows + 1) × (columns + 1)` vertices and
/// `rows × columns × 6` indices. Triangles wind counter-clockwise as seen
/// from the center.
pub fn generate_projection_mesh(
    fov: FieldOfView,
    density: MeshDensity,
) -> (ProjectionMesh, Transform) {
    let fov = fov.clamped();
    let columns = segment_count(fov.horizontal / MAX_HORIZONTAL_FOV, density.columns_per_turn);
    let rows = segment_count(fov.vertical / MAX_VERTICAL_FOV, density.rows_per_half_turn);

    let h = fov.horizontal_radians();
    let v = fov.vertical_radians();

    let mut vertices = Vec::with_capacity(((rows + 1) * (columns + 1)) as usize);
    for row in 0..=rows {
        let t = row as f32 / rows as f32;
        let elevation = v * (0.5 - t);
        for col in 0..=columns {
            let s = col as f32 / columns as f32;
            let dir = direction(s * h, elevation);
            vertices.push(ProjectionVertex {
                position: dir.map(|c| c * PROJECTION_RADIUS),
                normal: dir.map(|c| -c),
                uv: [s, t],
            });
        }
    }

    let stride = columns + 1;
    let mut indices = Vec::with_capacity((rows * columns * 6) as usize);
    for row in 0..rows {
        for col in 0..columns {
            let i00 = row * stride + col;
            let i01 = i00 + 1;
            let i10 = i00 + stride;
            let i11 = i10 + 1;

            // Triangle 1: top-left, bottom-left, top-right
            indices.extend_from_slice(&[i00, i10, i01]);
            // Triangle 2: bottom-left, bottom-right, top-right
            indices.extend_from_slice(&[i10, i11, i01]);
        }
    }

    let mesh = ProjectionMesh {
        vertices,
        indices,
        columns,
        rows,
        field_of_view: fov,
    };
    (mesh, Transform::from_yaw(h * 0.5))
}

/// Segments needed to cover `fraction` of a full span, at least one.
///
/// The small bias keeps exact multiples from rounding up an extra segment.
fn segment_count(fraction: f32, per_full_span: u32) -> u32 {
    ((fraction * per_full_span as f32 - 1e-3).ceil() as u32).max(1)
}

/// Unit vector for an azimuth measured rightward from `-Z` and an
/// elevation above the horizon.
fn direction(azimuth: f32, elevation: f32) -> [f32; 3] {
    let cos_e = elevation.cos();
    [azimuth.sin() * cos_e, elevation.sin(), -azimuth.cos() * cos_e]
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use immersive_common::MIN_FOV_DEGREES;

    const EPS: f32 = 1e-2;

    fn length(p: [f32; 3]) -> f32 {
        (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt()
    }

    fn sub(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
        [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
    }

    fn cross(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
        [
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
        ]
    }

    fn dot(a: [f32; 3], b: [f32; 3]) -> f32 {
        a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
    }

    fn world_positions(fov: FieldOfView) -> Vec<[f32; 3]> {
        let (mesh, transform) = generate_projection_mesh(fov, MeshDensity::LOW);
        mesh.vertices
            .iter()
            .map(|v| transform.apply(v.position))
            .collect()
    }

    #[test]
    fn half_sphere_counts() {
        let (mesh, _) = generate_projection_mesh(FieldOfView::HALF_SPHERE, MeshDensity::LOW);
        // 180° of a 48-column turn = 24 columns; 180° of 24 rows = 24 rows
        assert_eq!(mesh.columns, 24);
        assert_eq!(mesh.rows, 24);
        assert_eq!(mesh.vertex_count(), 25 * 25);
        assert_eq!(mesh.index_count(), 24 * 24 * 6);
    }

    #[test]
    fn full_sphere_counts() {
        let (mesh, _) = generate_projection_mesh(FieldOfView::FULL_SPHERE, MeshDensity::MEDIUM);
        assert_eq!(mesh.columns, 96);
        assert_eq!(mesh.rows, 48);
        assert_eq!(mesh.vertex_count(), 97 * 49);
        assert_eq!(mesh.index_count(), 96 * 48 * 6);
    }

    #[test]
    fn vertices_lie_on_sphere() {
        let (mesh, _) = generate_projection_mesh(FieldOfView::new(200.0, 120.0), MeshDensity::LOW);
        for v in &mesh.vertices {
            assert!((length(v.position) - PROJECTION_RADIUS).abs() < 0.1);
            assert!((length(v.normal) - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn normals_point_inward() {
        let (mesh, _) = generate_projection_mesh(FieldOfView::FULL_SPHERE, MeshDensity::LOW);
        for v in &mesh.vertices {
            let expected = v.position.map(|c| -c / PROJECTION_RADIUS);
            for axis in 0..3 {
                assert!((v.normal[axis] - expected[axis]).abs() < 1e-5);
            }
        }
    }

    #[test]
    fn triangles_face_the_viewer() {
        let (mesh, _) = generate_projection_mesh(FieldOfView::HALF_SPHERE, MeshDensity::LOW);
        for tri in mesh.indices.chunks(3) {
            let [a, b, c] = [0, 1, 2].map(|i| mesh.vertices[tri[i] as usize].position);
            let n = cross(sub(b, a), sub(c, a));
            // Pole rows collapse to a point; skip degenerate triangles
            if length(n) < 1.0 {
                continue;
            }
            let centroid = [
                (a[0] + b[0] + c[0]) / 3.0,
                (a[1] + b[1] + c[1]) / 3.0,
                (a[2] + b[2] + c[2]) / 3.0,
            ];
            assert!(dot(n, centroid) < 0.0, "triangle {tri:?} faces away");
        }
    }

    #[test]
    fn half_sphere_sits_in_front_of_viewer() {
        let positions = world_positions(FieldOfView::HALF_SPHERE);
        let r = PROJECTION_RADIUS;
        assert!(positions.iter().all(|p| p[2] <= EPS));

        let min_x = positions.iter().map(|p| p[0]).fold(f32::MAX, f32::min);
        let max_x = positions.iter().map(|p| p[0]).fold(f32::MIN, f32::max);
        let min_y = positions.iter().map(|p| p[1]).fold(f32::MAX, f32::min);
        let max_y = positions.iter().map(|p| p[1]).fold(f32::MIN, f32::max);
        assert!((min_x + r).abs() < EPS);
        assert!((max_x - r).abs() < EPS);
        assert!((min_y + r).abs() < EPS);
        assert!((max_y - r).abs() < EPS);
    }

    #[test]
    fn horizontal_center_faces_forward() {
        let fov = FieldOfView::new(90.0, 90.0);
        let (mesh, transform) = generate_projection_mesh(fov, MeshDensity::HIGH);
        // 90° of 144 columns = 36 columns; 90° of 72 rows = 36 rows
        assert_eq!((mesh.columns, mesh.rows), (36, 36));
        let center = (mesh.rows / 2) * (mesh.columns + 1) + mesh.columns / 2;
        let p = transform.apply(mesh.vertices[center as usize].position);
        assert!(p[0].abs() < EPS);
        assert!(p[1].abs() < EPS);
        assert!((p[2] + PROJECTION_RADIUS).abs() < EPS);
    }

    #[test]
    fn full_wrap_seam_columns_coincide() {
        let (mesh, _) = generate_projection_mesh(FieldOfView::FULL_SPHERE, MeshDensity::LOW);
        let stride = (mesh.columns + 1) as usize;
        for row in 0..=mesh.rows as usize {
            let first = mesh.vertices[row * stride];
            let last = mesh.vertices[row * stride + stride - 1];
            assert!(length(sub(first.position, last.position)) < EPS);
            assert_eq!(first.uv[0], 0.0);
            assert_eq!(last.uv[0], 1.0);
        }
    }

    #[test]
    fn vertical_extent_matches_fov() {
        let fov = FieldOfView::new(180.0, 90.0);
        let (mesh, _) = generate_projection_mesh(fov, MeshDensity::LOW);
        let top = mesh.vertices.first().unwrap().position;
        let bottom = mesh.vertices.last().unwrap().position;
        let expected = PROJECTION_RADIUS * 45f32.to_radians().sin();
        assert!((top[1] - expected).abs() < EPS);
        assert!((bottom[1] + expected).abs() < EPS);
    }

    #[test]
    fn uv_spans_unit_square() {
        let (mesh, _) = generate_projection_mesh(FieldOfView::new(120.0, 40.0), MeshDensity::LOW);
        let first = mesh.vertices.first().unwrap();
        let last = mesh.vertices.last().unwrap();
        assert_eq!(first.uv, [0.0, 0.0]);
        assert_eq!(last.uv, [1.0, 1.0]);
    }

    #[test]
    fn indices_are_in_bounds() {
        let (mesh, _) = generate_projection_mesh(FieldOfView::new(37.0, 11.0), MeshDensity::MEDIUM);
        let n = mesh.vertex_count() as u32;
        assert!(mesh.indices.iter().all(|&i| i < n));
    }

    #[test]
    fn degenerate_inputs_clamp_to_minimal_mesh() {
        for fov in [
            FieldOfView::new(0.0, 0.0),
            FieldOfView::new(-30.0, -1.0),
            FieldOfView::new(f32::NAN, f32::NAN),
        ] {
            let (mesh, transform) = generate_projection_mesh(fov, MeshDensity::MEDIUM);
            assert_eq!(
                mesh.field_of_view,
                FieldOfView::new(MIN_FOV_DEGREES, MIN_FOV_DEGREES)
            );
            assert_eq!(mesh.columns, 1);
            assert_eq!(mesh.rows, 1);
            assert_eq!(mesh.vertex_count(), 4);
            assert_eq!(mesh.index_count(), 6);
            assert!(transform.yaw.is_finite());
        }
    }

    #[test]
    fn over_range_inputs_clamp_to_full_sphere() {
        let (over, _) = generate_projection_mesh(FieldOfView::new(720.0, 400.0), MeshDensity::LOW);
        let (full, _) = generate_projection_mesh(FieldOfView::FULL_SPHERE, MeshDensity::LOW);
        assert_eq!(over, full);
    }

    #[test]
    fn zero_density_still_produces_geometry() {
        let density = MeshDensity {
            columns_per_turn: 0,
            rows_per_half_turn: 0,
        };
        let (mesh, _) = generate_projection_mesh(FieldOfView::FULL_SPHERE, density);
        assert_eq!(mesh.index_count(), 6);
    }

    #[test]
    fn generation_is_deterministic() {
        let fov = FieldOfView::new(210.0, 130.0);
        let a = generate_projection_mesh(fov, MeshDensity::MEDIUM);
        let b = generate_projection_mesh(fov, MeshDensity::MEDIUM);
        assert_eq!(a, b);
    }
}
