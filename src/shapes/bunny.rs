use crate::completion::{CompletionRule, RegionThreshold};
use crate::geometry::ContinuousBand;
use crate::gesture::Projection;
use crate::math::Point2;
use crate::session::{DrawGate, SessionConfig};
use crate::template::ShapeTemplate;

use super::{marker, ShapeKind, ShapeSpec, Texts, ALL_CLEARED};

const FACE_CENTER: Point2 = Point2::new(0.0, 1.5);
const FACE_RADIUS: f64 = 0.5;
const FACE_HITS: u32 = 50;

const EAR_CENTERS: [Point2; 2] = [Point2::new(-0.3, 2.3), Point2::new(0.3, 2.3)];
const EAR_RX: f64 = 0.15;
const EAR_RY: f64 = 0.4;
const EAR_HITS: u32 = 20;

pub(super) fn spec() -> ShapeSpec {
    let [left, right] = EAR_CENTERS;
    let ear = |center| ContinuousBand::ellipse(center, EAR_RX, EAR_RY, 0.25);

    // Counted zones: drawing keeps accumulating along the edge until each
    // part has seen enough strokes.
    let template = ShapeTemplate::builder()
        .region("face", |r| {
            r.counted(ContinuousBand::circle(FACE_CENTER, FACE_RADIUS, 0.2), FACE_HITS);
        })
        .region("left_ear", |r| {
            r.counted(ear(left), EAR_HITS);
        })
        .region("right_ear", |r| {
            r.counted(ear(right), EAR_HITS);
        })
        .finish();

    let config = SessionConfig {
        name: ShapeKind::Bunny.name().to_owned(),
        gate: DrawGate::Strict,
        rule: CompletionRule::PerRegion {
            thresholds: vec![
                RegionThreshold::count("face", FACE_HITS),
                RegionThreshold::count("left_ear", EAR_HITS),
                RegionThreshold::count("right_ear", EAR_HITS),
            ],
        },
        marker: marker("Hotpink", 0.09),
        snap_to_outline: false,
        messages: Texts {
            prompt: "Try To Draw The Bunny!",
            drawing: "Drawing bunny",
            too_far: "Move closer to bunny edges to draw",
            completed: "Cute! Bunny Completed!",
            cleared: ALL_CLEARED,
        }
        .messages(),
    };

    ShapeSpec {
        kind: ShapeKind::Bunny,
        template,
        config,
        projection: Projection::uniform(2.0, 1.5),
    }
}
