use std::f64::consts::{FRAC_PI_2, TAU};

use crate::completion::CompletionRule;
use crate::gesture::Projection;
use crate::math::sampling_2d::{polar, EdgeSpacing};
use crate::math::Point2;
use crate::session::{DrawGate, Guide, GuideZone, SessionConfig};
use crate::template::ShapeTemplate;

use super::{marker, ShapeKind, ShapeSpec, Texts, ALL_CLEARED};

const CENTER: Point2 = Point2::new(0.0, 1.5);
const RAYS: usize = 7;
const SPREAD: f64 = 0.4;
const BASE_RADIUS: f64 = 0.4;
const RAY_LENGTH: f64 = 1.2;
const SAMPLES_PER_EDGE: usize = 5;

/// Triangle of one ray: left base corner, tip, right base corner.
fn ray(i: usize) -> [Point2; 3] {
    #[allow(clippy::cast_precision_loss)]
    let angle = i as f64 * TAU / RAYS as f64 - FRAC_PI_2;
    [
        polar(&CENTER, BASE_RADIUS, angle + SPREAD),
        polar(&CENTER, RAY_LENGTH, angle),
        polar(&CENTER, BASE_RADIUS, angle - SPREAD),
    ]
}

pub(super) fn spec() -> ShapeSpec {
    let template = (0..RAYS)
        .fold(ShapeTemplate::builder(), |builder, i| {
            let [a, b, c] = ray(i);
            builder.region(format!("ray_{}", i + 1), |r| {
                for (from, to) in [(a, b), (b, c), (c, a)] {
                    r.edge(from, to, SAMPLES_PER_EDGE, EdgeSpacing::Interior, 0.05);
                }
            })
        })
        .finish();

    let config = SessionConfig {
        name: ShapeKind::Sun.name().to_owned(),
        gate: DrawGate::Permissive {
            guides: vec![Guide::new(GuideZone::NearSample)],
        },
        rule: CompletionRule::GlobalRatio { ratio: 0.5 },
        marker: marker("Orange", 0.09),
        snap_to_outline: false,
        messages: Texts {
            prompt: "Try To Draw The Sun Rays!",
            drawing: "Drawing sun rays",
            too_far: "Move finger near sun rays",
            completed: "Amazing! Sun Completed!",
            cleared: ALL_CLEARED,
        }
        .messages(),
    };

    ShapeSpec {
        kind: ShapeKind::Sun,
        template,
        config,
        projection: Projection::uniform(1.5, 1.5),
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn first_ray_points_down() {
        let [left, tip, right] = ray(0);
        assert_relative_eq!(tip.x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(tip.y, CENTER.y - RAY_LENGTH, epsilon = 1e-12);
        assert_relative_eq!(left.y, right.y, epsilon = 1e-12);
    }
}
