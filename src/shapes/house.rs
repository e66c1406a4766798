use crate::completion::CompletionRule;
use crate::geometry::Outline;
use crate::gesture::Projection;
use crate::math::Point2;
use crate::session::{DrawGate, Guide, GuideZone, SessionConfig};
use crate::template::ShapeTemplate;

use super::{marker, ShapeKind, ShapeSpec, Texts};

/// Roof peak, roof corners, then the bottom of the body.
const VERTICES: [Point2; 5] = [
    Point2::new(0.0, 3.0),
    Point2::new(-1.0, 2.0),
    Point2::new(1.0, 2.0),
    Point2::new(1.0, 0.5),
    Point2::new(-1.0, 0.5),
];
const ROOF: [usize; 3] = [0, 1, 2];
const BODY: [usize; 4] = [1, 2, 3, 4];

const MARKER_RADIUS: f64 = 0.08;
const EDGE_TOLERANCE: f64 = 0.2;

pub(super) fn spec() -> ShapeSpec {
    let template = ShapeTemplate::builder()
        .region("roof", |r| {
            r.points(ROOF.map(|i| VERTICES[i]), 0.2)
                .point(Point2::new(0.0, 2.0), 0.2);
        })
        .region("body", |r| {
            r.points(
                [
                    VERTICES[3],
                    VERTICES[4],
                    Point2::new(1.0, 1.25),
                    Point2::new(-1.0, 1.25),
                    Point2::new(0.0, 0.5),
                ],
                0.2,
            );
        })
        .finish();

    let outline_guide = |indices: &[usize], color: &str| {
        Guide::new(GuideZone::Outline {
            outline: Outline::from_indices(&VERTICES, indices, true),
            tolerance: EDGE_TOLERANCE,
        })
        .with_marker(marker(color, MARKER_RADIUS))
    };

    let config = SessionConfig {
        name: ShapeKind::House.name().to_owned(),
        gate: DrawGate::Permissive {
            guides: vec![outline_guide(&ROOF[..], "red"), outline_guide(&BODY[..], "gold")],
        },
        rule: CompletionRule::AbsoluteCount { count: 7 },
        marker: marker("gold", MARKER_RADIUS),
        snap_to_outline: false,
        messages: Texts {
            prompt: "Try To Draw The House!",
            drawing: "Drawing house outline",
            too_far: "Move finger closer to house",
            completed: "Nice! House Drawn!",
            cleared: "Drawings cleared",
        }
        .messages(),
    };

    ShapeSpec {
        kind: ShapeKind::House,
        template,
        config,
        projection: Projection {
            scale_x: 2.0,
            scale_y: 2.5,
            offset_x: 0.0,
            offset_y: 1.5,
            depth: None,
        },
    }
}
