use crate::completion::{CompletionRule, RegionThreshold};
use crate::geometry::Outline;
use crate::gesture::Projection;
use crate::math::Point2;
use crate::session::{DrawGate, Guide, GuideZone, SessionConfig};
use crate::template::ShapeTemplate;

use super::{marker, ShapeKind, ShapeSpec, Texts};

const VERTICES: [Point2; 9] = [
    // canopy
    Point2::new(0.0, 2.5),
    Point2::new(-0.5, 2.0),
    Point2::new(0.5, 2.0),
    Point2::new(-0.3, 1.5),
    Point2::new(0.3, 1.5),
    // trunk
    Point2::new(-0.25, 1.0),
    Point2::new(0.25, 1.0),
    Point2::new(0.25, 0.5),
    Point2::new(-0.25, 0.5),
];
const CANOPY: [usize; 5] = [0, 1, 3, 4, 2];
const TRUNK: [usize; 4] = [5, 6, 7, 8];

const EDGE_TOLERANCE: f64 = 0.15;
const MARKER_RADIUS: f64 = 0.08;

pub(super) fn spec() -> ShapeSpec {
    let canopy = Outline::from_indices(&VERTICES, &CANOPY, true);
    let trunk = Outline::from_indices(&VERTICES, &TRUNK, true);

    let template = ShapeTemplate::builder()
        .region("canopy", |r| {
            r.outline_segments(&canopy, EDGE_TOLERANCE);
        })
        .region("trunk", |r| {
            r.outline_segments(&trunk, EDGE_TOLERANCE);
        })
        .finish();

    let guide = |outline: Outline, color: &str| {
        Guide::new(GuideZone::Outline {
            outline,
            tolerance: EDGE_TOLERANCE,
        })
        .with_marker(marker(color, MARKER_RADIUS))
    };

    let config = SessionConfig {
        name: ShapeKind::Tree.name().to_owned(),
        gate: DrawGate::Permissive {
            guides: vec![guide(canopy, "springGreen"), guide(trunk, "saddleBrown")],
        },
        rule: CompletionRule::PerRegion {
            thresholds: vec![
                RegionThreshold::ratio("canopy", 0.5),
                RegionThreshold::count("trunk", 3),
            ],
        },
        marker: marker("springGreen", MARKER_RADIUS),
        snap_to_outline: false,
        messages: Texts {
            prompt: "Try To Draw The Tree!",
            drawing: "Drawing tree",
            too_far: "Move finger closer to tree",
            completed: "Brilliant! Tree Drawn!",
            cleared: "Drawings cleared",
        }
        .messages(),
    };

    ShapeSpec {
        kind: ShapeKind::Tree,
        template,
        config,
        projection: Projection::uniform(1.5, 1.0),
    }
}
