/// Bounding-box fold and uniform scale derivation for mesh placement
use nalgebra::{Matrix4, Point3, Vector3};

use crate::error::ScaleError;

/// Axis-aligned bounding box over a vertex list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Point3<f32>,
    pub max: Point3<f32>,
}

impl Aabb {
    /// Fold per-axis min/max over all points, seeded from the first point.
    ///
    /// Seeding from the first point (rather than the origin) keeps objects
    /// modeled far from the origin from inflating their own extent.
    /// Returns `None` for an empty point list.
    pub fn from_points(points: &[Point3<f32>]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut bounds = Self {
            min: *first,
            max: *first,
        };

        for point in rest {
            for axis in 0..3 {
                if point[axis] < bounds.min[axis] {
                    bounds.min[axis] = point[axis];
                } else if point[axis] > bounds.max[axis] {
                    bounds.max[axis] = point[axis];
                }
            }
        }

        Some(bounds)
    }

    /// Largest per-axis span of the box.
    pub fn max_extent(&self) -> f32 {
        let spans = self.max - self.min;
        spans.x.max(spans.y).max(spans.z)
    }
}

/// Uniform scale factor and vertical offset that normalize a mesh to a
/// target size and stand it on the ground plane.
///
/// The host applies `scale_factor` as a uniform transform scale and
/// `vertical_offset` as a translation along its vertical axis; `matrix` and
/// `apply` are provided for hosts (and tests) that want the composed
/// placement directly.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleResult {
    pub scale_factor: f32,
    pub vertical_offset: f32,
}

impl ScaleResult {
    /// Placement matrix: uniform scale, then lift onto the ground plane.
    pub fn matrix(&self) -> Matrix4<f32> {
        Matrix4::new_translation(&Vector3::new(0.0, self.vertical_offset, 0.0))
            * Matrix4::new_scaling(self.scale_factor)
    }

    /// Apply the placement to a single point.
    pub fn apply(&self, point: &Point3<f32>) -> Point3<f32> {
        Point3::new(
            point.x * self.scale_factor,
            point.y * self.scale_factor + self.vertical_offset,
            point.z * self.scale_factor,
        )
    }
}

/// Derive the uniform scale normalizing the widest axis of `vertices` to
/// `target_size`, plus the offset placing the scaled mesh on the ground.
///
/// A non-positive target size and a zero-extent (or empty) vertex set are
/// reported as errors; division by zero never escapes as infinity.
pub fn compute_scale(
    target_size: f32,
    vertices: &[Point3<f32>],
) -> Result<ScaleResult, ScaleError> {
    if !target_size.is_finite() || target_size <= 0.0 {
        return Err(ScaleError::InvalidTargetSize(target_size));
    }

    let bounds = Aabb::from_points(vertices).ok_or(ScaleError::DegenerateBounds)?;
    let max_extent = bounds.max_extent();
    if !max_extent.is_finite() || max_extent <= 0.0 {
        return Err(ScaleError::DegenerateBounds);
    }

    let scale_factor = target_size / max_extent;
    Ok(ScaleResult {
        scale_factor,
        vertical_offset: -bounds.min.y * scale_factor,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_quad() -> Vec<Point3<f32>> {
        vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ]
    }

    #[test]
    fn test_unit_quad_scale() {
        let result = compute_scale(0.4, &unit_quad()).unwrap();

        assert!((result.scale_factor - 0.4).abs() < 1e-6);
        assert!(result.vertical_offset.abs() < 1e-6);
    }

    #[test]
    fn test_scale_proportional_to_target() {
        let vertices = vec![
            Point3::new(-1.0, 2.0, 0.5),
            Point3::new(3.0, -1.0, 0.0),
            Point3::new(0.0, 0.0, 2.5),
        ];
        let bounds = Aabb::from_points(&vertices).unwrap();

        let small = compute_scale(0.4, &vertices).unwrap();
        let large = compute_scale(0.8, &vertices).unwrap();

        assert!((small.scale_factor * bounds.max_extent() - 0.4).abs() < 1e-6);
        assert!((large.scale_factor - 2.0 * small.scale_factor).abs() < 1e-6);
    }

    #[test]
    fn test_vertical_offset_lifts_lowest_point_to_ground() {
        let vertices = vec![
            Point3::new(0.0, -2.0, 0.0),
            Point3::new(4.0, -1.0, 0.0),
            Point3::new(0.0, 1.0, 3.0),
        ];
        let result = compute_scale(0.4, &vertices).unwrap();

        let lowest = vertices
            .iter()
            .map(|vertex| result.apply(vertex).y)
            .fold(f32::INFINITY, f32::min);
        assert!(lowest.abs() < 1e-6);
    }

    #[test]
    fn test_offset_object_extent_ignores_origin() {
        // Bounds are seeded from the first vertex, so an object spanning
        // [10, 11] on x has extent 1, not 11
        let vertices = vec![
            Point3::new(10.0, 0.0, 0.0),
            Point3::new(11.0, 0.5, 0.0),
            Point3::new(10.0, 0.5, 0.5),
        ];
        let result = compute_scale(0.4, &vertices).unwrap();

        assert!((result.scale_factor - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_matrix_matches_apply() {
        let result = compute_scale(0.4, &unit_quad()).unwrap();
        let matrix = result.matrix();

        for vertex in unit_quad() {
            let via_matrix = matrix.transform_point(&vertex);
            let via_apply = result.apply(&vertex);
            assert!((via_matrix - via_apply).norm() < 1e-6);
        }
    }

    #[test]
    fn test_degenerate_bounds() {
        assert_eq!(compute_scale(0.4, &[]), Err(ScaleError::DegenerateBounds));
        assert_eq!(
            compute_scale(0.4, &[Point3::new(1.0, 2.0, 3.0)]),
            Err(ScaleError::DegenerateBounds)
        );
        let coincident = vec![Point3::new(1.0, 1.0, 1.0); 4];
        assert_eq!(
            compute_scale(0.4, &coincident),
            Err(ScaleError::DegenerateBounds)
        );
    }

    #[test]
    fn test_invalid_target_size() {
        assert_eq!(
            compute_scale(0.0, &unit_quad()),
            Err(ScaleError::InvalidTargetSize(0.0))
        );
        assert_eq!(
            compute_scale(-1.0, &unit_quad()),
            Err(ScaleError::InvalidTargetSize(-1.0))
        );
    }
}
