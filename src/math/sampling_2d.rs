use std::f64::consts::TAU;

use super::{Point2, Vector2};

/// How interpolated samples are spaced along an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeSpacing {
    /// `count` samples at `t = i / (count - 1)`, both endpoints included.
    Inclusive,
    /// `count` samples at `t = i / (count + 1)` for `i` in `1..=count`,
    /// endpoints excluded.
    Interior,
}

/// Linear interpolation between `a` and `b`.
#[must_use]
pub fn lerp(a: &Point2, b: &Point2, t: f64) -> Point2 {
    a + (b - a) * t
}

/// Returns the point at `angle` radians on the circle of `radius` around `center`.
#[must_use]
pub fn polar(center: &Point2, radius: f64, angle: f64) -> Point2 {
    center + Vector2::new(angle.cos(), angle.sin()) * radius
}

/// Generates `count` evenly spaced points around a circle.
///
/// Point `i` sits at angle `phase + i * 2π / count`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn ring_points(center: &Point2, radius: f64, count: usize, phase: f64) -> Vec<Point2> {
    if count == 0 {
        return Vec::new();
    }
    let step = TAU / count as f64;
    (0..count)
        .map(|i| polar(center, radius, phase + i as f64 * step))
        .collect()
}

/// Generates `count` points linearly interpolated along the edge `a → b`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn edge_points(a: &Point2, b: &Point2, count: usize, spacing: EdgeSpacing) -> Vec<Point2> {
    match spacing {
        EdgeSpacing::Inclusive => match count {
            0 => Vec::new(),
            1 => vec![*a],
            _ => {
                let denom = (count - 1) as f64;
                (0..count).map(|i| lerp(a, b, i as f64 / denom)).collect()
            }
        },
        EdgeSpacing::Interior => {
            let denom = (count + 1) as f64;
            (1..=count).map(|i| lerp(a, b, i as f64 / denom)).collect()
        }
    }
}
