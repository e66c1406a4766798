use crate::completion::{CompletionRule, RegionThreshold};
use crate::geometry::Outline;
use crate::gesture::Projection;
use crate::math::sampling_2d::EdgeSpacing;
use crate::math::Point2;
use crate::session::{DrawGate, Guide, GuideZone, SessionConfig};
use crate::template::ShapeTemplate;

use super::{marker, ShapeKind, ShapeSpec, Texts, ALL_CLEARED};

const A: Point2 = Point2::new(0.0, 0.0);
const B: Point2 = Point2::new(2.0, 0.0);
const C: Point2 = Point2::new(1.0, 2.0);

const POINTS_PER_EDGE: usize = 20;

pub(super) fn spec() -> ShapeSpec {
    // The base AB is snapped to but never scored.
    let template = ShapeTemplate::builder()
        .region("bc", |r| {
            r.edge(B, C, POINTS_PER_EDGE, EdgeSpacing::Inclusive, 0.12);
        })
        .region("ca", |r| {
            r.edge(C, A, POINTS_PER_EDGE, EdgeSpacing::Inclusive, 0.12);
        })
        .finish();

    let config = SessionConfig {
        name: ShapeKind::Triangle.name().to_owned(),
        gate: DrawGate::Permissive {
            guides: vec![Guide::new(GuideZone::Outline {
                outline: Outline::new(vec![A, B, C], true),
                tolerance: 0.2,
            })],
        },
        rule: CompletionRule::PerRegion {
            thresholds: vec![
                RegionThreshold::ratio("bc", 0.7),
                RegionThreshold::ratio("ca", 0.7),
            ],
        },
        marker: marker("cyan", 0.1),
        snap_to_outline: true,
        messages: Texts {
            prompt: "Try completing this triangle!",
            drawing: "Drawing on edge!",
            too_far: "Move finger closer to triangle edges to draw",
            completed: "Great Work! Triangle Drawn!",
            cleared: ALL_CLEARED,
        }
        .messages(),
    };

    // x = lx * 2, y = (1 - ly) * 2
    ShapeSpec {
        kind: ShapeKind::Triangle,
        template,
        config,
        projection: Projection {
            scale_x: 2.0,
            scale_y: 2.0,
            offset_x: 1.0,
            offset_y: 1.0,
            depth: None,
        },
    }
}
