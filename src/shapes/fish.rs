use crate::completion::CompletionRule;
use crate::geometry::{ContinuousBand, Outline};
use crate::gesture::Projection;
use crate::math::{Point2, Vector2};
use crate::session::{DrawGate, Guide, GuideZone, SessionConfig, StatusMessages};
use crate::template::ShapeTemplate;

use super::{marker, ShapeKind, ShapeSpec, Texts, ALL_CLEARED};

const BODY_CENTER: Point2 = Point2::new(0.0, 2.0);

/// Tail fins as (centre, length, rotation in degrees).
const FINS: [(Point2, f64, f64); 4] = [
    (Point2::new(1.0, 2.1), 1.0, -45.0),
    (Point2::new(1.0, 1.9), 1.0, 45.0),
    (Point2::new(1.6, 2.2), 0.8, -120.0),
    (Point2::new(1.6, 1.8), 0.8, 120.0),
];

const BODY_CHECKPOINTS: [Point2; 4] = [
    Point2::new(0.0, 2.7),
    Point2::new(-0.8, 2.2),
    Point2::new(1.0, 2.2),
    Point2::new(0.0, 1.4),
];
const TAIL_CHECKPOINTS: [Point2; 2] = [Point2::new(1.5, 2.5), Point2::new(1.5, 1.6)];

fn fin(center: Point2, length: f64, degrees: f64) -> Outline {
    let angle = degrees.to_radians();
    let half = Vector2::new(angle.cos(), angle.sin()) * (length / 2.0);
    Outline::segment(center - half, center + half)
}

pub(super) fn spec() -> ShapeSpec {
    let template = ShapeTemplate::builder()
        .region("body", |r| {
            r.points(BODY_CHECKPOINTS, 0.2);
        })
        .region("tail", |r| {
            r.points(TAIL_CHECKPOINTS, 0.2);
        })
        .finish();

    let mut guides = vec![Guide::new(GuideZone::Band {
        band: ContinuousBand::annulus(BODY_CENTER, 0.5, 0.65),
    })];
    guides.extend(FINS.iter().map(|&(center, length, degrees)| {
        Guide::new(GuideZone::Outline {
            outline: fin(center, length, degrees),
            tolerance: 0.15,
        })
    }));

    let config = SessionConfig {
        name: ShapeKind::Fish.name().to_owned(),
        gate: DrawGate::Permissive { guides },
        rule: CompletionRule::AbsoluteCount { count: 4 },
        marker: marker("RoyalBlue", 0.1),
        snap_to_outline: false,
        messages: StatusMessages {
            hit: Some("Fish part hit!".to_owned()),
            ..Texts {
                prompt: "Try To Draw The Fish!",
                drawing: "Drawing on fish parts",
                too_far: "Move finger closer to fish",
                completed: "Nice! Fish Drawn!",
                cleared: ALL_CLEARED,
            }
            .messages()
        },
    };

    ShapeSpec {
        kind: ShapeKind::Fish,
        template,
        config,
        projection: Projection::uniform(1.5, 2.0),
    }
}
