use super::{Point2, TOLERANCE};

/// Returns the Euclidean distance between `p` and `q`.
#[must_use]
pub fn distance(p: &Point2, q: &Point2) -> f64 {
    (p - q).norm()
}

/// Returns the point on the segment `[a, b]` closest to `p`.
///
/// The projection parameter is clamped to `[0, 1]`, so a perpendicular
/// foot falling outside the segment snaps to the nearer endpoint.
#[must_use]
pub fn closest_point_on_segment(p: &Point2, a: &Point2, b: &Point2) -> Point2 {
    let ab = b - a;
    let len_sq = ab.norm_squared();

    if len_sq < TOLERANCE * TOLERANCE {
        // Degenerate segment (zero length).
        return *a;
    }

    // Project point onto the infinite line, clamp to [0, 1].
    let t = ((p - a).dot(&ab) / len_sq).clamp(0.0, 1.0);
    a + ab * t
}

/// Returns the minimum distance from `p` to the segment `[a, b]`.
///
/// Falls back to `distance(p, a)` when the segment has zero length.
#[must_use]
pub fn distance_to_segment(p: &Point2, a: &Point2, b: &Point2) -> f64 {
    distance(p, &closest_point_on_segment(p, a, b))
}

/// Returns the normalized ellipse distance of `p` relative to an
/// axis-aligned ellipse centered at `center` with radii `rx` and `ry`.
///
/// A value of `1.0` means `p` lies exactly on the boundary, `0.0` means it
/// sits at the center.
#[must_use]
pub fn normalized_ellipse_distance(p: &Point2, center: &Point2, rx: f64, ry: f64) -> f64 {
    let dx = (p.x - center.x) / rx;
    let dy = (p.y - center.y) / ry;
    (dx * dx + dy * dy).sqrt()
}

/// Returns how far `p` is from the circle of `radius` around `center`,
/// measured radially: `| |p - center| - radius |`.
#[must_use]
pub fn circle_band_distance(p: &Point2, center: &Point2, radius: f64) -> f64 {
    (distance(p, center) - radius).abs()
}
