use std::f64::consts::{FRAC_PI_2, TAU};

use crate::completion::CompletionRule;
use crate::geometry::{ContinuousBand, DepthGate};
use crate::gesture::Projection;
use crate::math::sampling_2d::polar;
use crate::math::Point2;
use crate::session::{DrawGate, Guide, GuideZone, SessionConfig};
use crate::template::ShapeTemplate;

use super::{marker, ShapeKind, ShapeSpec, Texts, ALL_CLEARED};

const CENTER: Point2 = Point2::new(0.0, 2.0);
const PETALS: usize = 5;
const PETAL_OFFSET: f64 = 0.6;
const PETAL_RADIUS: f64 = 0.3;
const CHECKPOINTS_PER_PETAL: usize = 6;

/// Plane the petal rings are rendered on.
const PETAL_DEPTH: DepthGate = DepthGate {
    center: -4.6,
    tolerance: 0.075,
};

/// Petal centres and their base angles, first petal pointing down.
fn petals() -> impl Iterator<Item = (Point2, f64)> {
    (0..PETALS).map(|i| {
        #[allow(clippy::cast_precision_loss)]
        let angle = i as f64 * TAU / PETALS as f64 - FRAC_PI_2;
        (polar(&CENTER, PETAL_OFFSET, angle), angle)
    })
}

pub(super) fn spec() -> ShapeSpec {
    let template = petals()
        .enumerate()
        .fold(ShapeTemplate::builder(), |builder, (i, (center, angle))| {
            builder.region(format!("petal_{}", i + 1), |r| {
                r.ring(center, PETAL_RADIUS, CHECKPOINTS_PER_PETAL, angle, 0.06);
            })
        })
        .finish();

    let guides = petals()
        .map(|(center, _)| {
            Guide::new(GuideZone::Band {
                band: ContinuousBand::circle(center, PETAL_RADIUS, 0.07).with_depth_gate(PETAL_DEPTH),
            })
        })
        .collect();

    let config = SessionConfig {
        name: ShapeKind::Flower.name().to_owned(),
        gate: DrawGate::Permissive { guides },
        rule: CompletionRule::GlobalRatio { ratio: 0.8 },
        marker: marker("Orchid", 0.09),
        snap_to_outline: false,
        messages: Texts {
            prompt: "Try To Draw The Flower!",
            drawing: "Drawing on flower petals",
            too_far: "Move finger closer to petals",
            completed: "Beautiful! Flower Drawn!",
            cleared: ALL_CLEARED,
        }
        .messages(),
    };

    ShapeSpec {
        kind: ShapeKind::Flower,
        template,
        config,
        projection: Projection::uniform(1.5, 2.0).with_depth(PETAL_DEPTH.center),
    }
}
