use crate::completion::CompletionRule;
use crate::geometry::ContinuousBand;
use crate::gesture::Projection;
use crate::math::Point2;
use crate::session::{DrawGate, Guide, GuideZone, SessionConfig};
use crate::template::ShapeTemplate;

use super::{marker, ShapeKind, ShapeSpec, Texts, ALL_CLEARED};

const CENTER: Point2 = Point2::new(0.0, 2.0);
const RADIUS: f64 = 0.65;
const SEGMENTS: usize = 30;

pub(super) fn spec() -> ShapeSpec {
    let template = ShapeTemplate::builder()
        .region("ring", |r| {
            r.ring(CENTER, RADIUS, SEGMENTS, 0.0, 0.2);
        })
        .finish();

    let config = SessionConfig {
        name: ShapeKind::Circle.name().to_owned(),
        gate: DrawGate::Permissive {
            guides: vec![Guide::new(GuideZone::Band {
                band: ContinuousBand::circle(CENTER, RADIUS, 0.03),
            })],
        },
        rule: CompletionRule::GlobalRatio { ratio: 0.6 },
        marker: marker("Red", 0.2),
        snap_to_outline: false,
        messages: Texts {
            prompt: "Try to complete this Circle!",
            drawing: "Drawing on circle",
            too_far: "Move finger closer to circle edge",
            completed: "Amazing! Circle Drawn!",
            cleared: ALL_CLEARED,
        }
        .messages(),
    };

    ShapeSpec {
        kind: ShapeKind::Circle,
        template,
        config,
        projection: Projection::uniform(1.5, 2.0),
    }
}
