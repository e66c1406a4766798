use crate::completion::{CompletionRule, RegionThreshold};
use crate::geometry::Outline;
use crate::gesture::Projection;
use crate::math::sampling_2d::EdgeSpacing;
use crate::math::Point2;
use crate::session::{DrawGate, Guide, GuideZone, SessionConfig};
use crate::template::ShapeTemplate;

use super::{marker, ShapeKind, ShapeSpec, Texts, ALL_CLEARED};

const A: Point2 = Point2::new(-0.75, 0.75);
const C: Point2 = Point2::new(0.75, 2.25);
const D: Point2 = Point2::new(-0.75, 2.25);

const POINTS_PER_EDGE: usize = 20;

/// Only the top (CD) and left (DA) edges are traced; the others are drawn as guides.
const TRACED: [(&str, Point2, Point2); 2] = [("cd", C, D), ("da", D, A)];

pub(super) fn spec() -> ShapeSpec {
    let template = TRACED
        .iter()
        .fold(ShapeTemplate::builder(), |builder, &(name, a, b)| {
            builder.region(name, |r| {
                r.edge(a, b, POINTS_PER_EDGE, EdgeSpacing::Inclusive, 0.12);
            })
        })
        .finish();

    let guides = TRACED
        .iter()
        .map(|&(_, a, b)| {
            Guide::new(GuideZone::Outline {
                outline: Outline::segment(a, b),
                tolerance: 0.2,
            })
        })
        .collect();

    let config = SessionConfig {
        name: ShapeKind::Square.name().to_owned(),
        gate: DrawGate::Permissive { guides },
        rule: CompletionRule::PerRegion {
            thresholds: TRACED
                .iter()
                .map(|&(name, _, _)| RegionThreshold::ratio(name, 0.6))
                .collect(),
        },
        marker: marker("SpringGreen", 0.1),
        snap_to_outline: true,
        messages: Texts {
            prompt: "Try completing this square!",
            drawing: "Snapped drawing",
            too_far: "Move finger closer to square edge to draw",
            completed: "Brilliant! Square Drawn!",
            cleared: ALL_CLEARED,
        }
        .messages(),
    };

    ShapeSpec {
        kind: ShapeKind::Square,
        template,
        config,
        projection: Projection::uniform(1.5, 2.0),
    }
}
