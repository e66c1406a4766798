pub mod band;
pub mod outline;

pub use band::{BandProfile, ContinuousBand, DepthGate};
pub use outline::Outline;

use serde::{Deserialize, Serialize};

use crate::math::Point2;

/// A fingertip position already projected into a shape's 2D plane.
///
/// `depth` is carried through when the projection reports one; only
/// depth-gated bands look at it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputPoint {
    pub position: Point2,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depth: Option<f64>,
}

impl InputPoint {
    /// Creates an input point without depth.
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            position: Point2::new(x, y),
            depth: None,
        }
    }

    /// Returns a copy carrying the given depth.
    #[must_use]
    pub fn with_depth(mut self, z: f64) -> Self {
        self.depth = Some(z);
        self
    }

    /// Returns a copy moved to `position`, keeping the depth.
    #[must_use]
    pub fn moved_to(self, position: Point2) -> Self {
        Self { position, ..self }
    }
}

impl From<Point2> for InputPoint {
    fn from(position: Point2) -> Self {
        Self {
            position,
            depth: None,
        }
    }
}
