use serde::{Deserialize, Serialize};

use crate::error::TemplateError;
use crate::math::distance_2d::{closest_point_on_segment, distance};
use crate::math::Point2;

/// An ordered chain of straight edges through a vertex list.
///
/// For closed outlines, the last vertex connects back to the first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outline {
    pub vertices: Vec<Point2>,
    pub closed: bool,
}

impl Outline {
    /// Creates an outline from its vertices.
    #[must_use]
    pub fn new(vertices: Vec<Point2>, closed: bool) -> Self {
        Self { vertices, closed }
    }

    /// Creates an outline by picking `indices` out of a shared vertex table.
    ///
    /// Out-of-range indices are skipped.
    #[must_use]
    pub fn from_indices(table: &[Point2], indices: &[usize], closed: bool) -> Self {
        let vertices = indices.iter().filter_map(|&i| table.get(i).copied()).collect();
        Self { vertices, closed }
    }

    /// A single open segment `a → b`.
    #[must_use]
    pub fn segment(a: Point2, b: Point2) -> Self {
        Self::new(vec![a, b], false)
    }

    /// Returns the edges of the outline in order.
    pub fn edges(&self) -> impl Iterator<Item = (Point2, Point2)> + '_ {
        let n = self.vertices.len();
        let count = match (n, self.closed) {
            (0 | 1, _) => 0,
            // Two-vertex loops would repeat the same edge backwards.
            (2, _) | (_, false) => n - 1,
            (_, true) => n,
        };
        (0..count).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Returns the point on the outline closest to `p` and its distance,
    /// or `None` for an outline with no edges.
    ///
    /// Ties go to the earliest edge.
    #[must_use]
    pub fn closest_point(&self, p: &Point2) -> Option<(Point2, f64)> {
        let mut best: Option<(Point2, f64)> = None;
        for (a, b) in self.edges() {
            let c = closest_point_on_segment(p, &a, &b);
            let d = distance(p, &c);
            if best.is_none_or(|(_, bd)| d < bd) {
                best = Some((c, d));
            }
        }
        best
    }

    /// Returns the distance from `p` to the outline, or infinity when empty.
    #[must_use]
    pub fn distance(&self, p: &Point2) -> f64 {
        self.closest_point(p).map_or(f64::INFINITY, |(_, d)| d)
    }

    /// Checks that the outline has at least one edge.
    ///
    /// # Errors
    ///
    /// Returns `TemplateError::DegenerateOutline` for fewer than two vertices.
    pub fn validate(&self) -> Result<(), TemplateError> {
        if self.vertices.len() < 2 {
            return Err(TemplateError::DegenerateOutline(self.vertices.len()));
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const TOL: f64 = 1e-10;

    fn unit_square() -> Outline {
        Outline::new(
            vec![
                Point2::new(0.0, 0.0),
                Point2::new(1.0, 0.0),
                Point2::new(1.0, 1.0),
                Point2::new(0.0, 1.0),
            ],
            true,
        )
    }

    #[test]
    fn closed_outline_has_wrap_edge() {
        let edges: Vec<_> = unit_square().edges().collect();
        assert_eq!(edges.len(), 4);
        assert_eq!(edges[3], (Point2::new(0.0, 1.0), Point2::new(0.0, 0.0)));
    }

    #[test]
    fn open_outline_has_no_wrap_edge() {
        let mut o = unit_square();
        o.closed = false;
        assert_eq!(o.edges().count(), 3);
    }

    #[test]
    fn two_vertex_closed_outline_is_one_edge() {
        let o = Outline::new(vec![Point2::origin(), Point2::new(1.0, 0.0)], true);
        assert_eq!(o.edges().count(), 1);
    }

    #[test]
    fn closest_point_picks_nearest_edge() {
        let (c, d) = unit_square().closest_point(&Point2::new(0.5, 1.3)).unwrap();
        assert_relative_eq!(c, Point2::new(0.5, 1.0), epsilon = TOL);
        assert_relative_eq!(d, 0.3, epsilon = 1e-9);
    }

    #[test]
    fn closest_point_on_wrap_edge() {
        let (c, _) = unit_square().closest_point(&Point2::new(-0.2, 0.4)).unwrap();
        assert_relative_eq!(c, Point2::new(0.0, 0.4), epsilon = TOL);
    }

    #[test]
    fn from_indices_selects_vertices() {
        let table = [
            Point2::new(0.0, 3.0),
            Point2::new(-1.0, 2.0),
            Point2::new(1.0, 2.0),
        ];
        let o = Outline::from_indices(&table, &[0, 2, 7], true);
        assert_eq!(o.vertices, vec![table[0], table[2]]);
    }

    #[test]
    fn empty_outline_is_infinitely_far() {
        let o = Outline::new(Vec::new(), true);
        assert!(o.closest_point(&Point2::origin()).is_none());
        assert!(o.distance(&Point2::origin()).is_infinite());
        assert!(o.validate().is_err());
    }
}
