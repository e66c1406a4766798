use serde::{Deserialize, Serialize};

use crate::geometry::InputPoint;
use crate::math::Point3;
use crate::session::FrameInput;

/// Landmark indices of the MediaPipe hand model.
pub mod landmarks {
    pub const WRIST: usize = 0;
    pub const THUMB_TIP: usize = 4;
    pub const INDEX_FINGER_PIP: usize = 6;
    pub const INDEX_FINGER_DIP: usize = 7;
    pub const INDEX_FINGER_TIP: usize = 8;
    pub const MIDDLE_FINGER_PIP: usize = 10;
    pub const MIDDLE_FINGER_DIP: usize = 11;
    pub const MIDDLE_FINGER_TIP: usize = 12;
    pub const RING_FINGER_PIP: usize = 14;
    pub const RING_FINGER_DIP: usize = 15;
    pub const RING_FINGER_TIP: usize = 16;
    pub const PINKY_PIP: usize = 18;
    pub const PINKY_DIP: usize = 19;
    pub const PINKY_TIP: usize = 20;

    pub const COUNT: usize = 21;
}

use landmarks::{
    INDEX_FINGER_DIP, INDEX_FINGER_PIP, INDEX_FINGER_TIP, MIDDLE_FINGER_DIP, MIDDLE_FINGER_PIP,
    MIDDLE_FINGER_TIP, PINKY_DIP, PINKY_PIP, PINKY_TIP, RING_FINGER_DIP, RING_FINGER_PIP,
    RING_FINGER_TIP,
};

/// (tip, dip, pip) of the four non-thumb fingers, index first.
const FINGERS: [(usize, usize, usize); 4] = [
    (INDEX_FINGER_TIP, INDEX_FINGER_DIP, INDEX_FINGER_PIP),
    (MIDDLE_FINGER_TIP, MIDDLE_FINGER_DIP, MIDDLE_FINGER_PIP),
    (RING_FINGER_TIP, RING_FINGER_DIP, RING_FINGER_PIP),
    (PINKY_TIP, PINKY_DIP, PINKY_PIP),
];

const OPEN_PALM_EXTENSION: f64 = 0.1;
const OPEN_PALM_SPACING: f64 = 0.04;
const CLOSED_PALM_SLACK: f64 = 0.02;

/// The 21 normalized landmarks of one tracked hand.
///
/// Coordinates are normalized image coordinates: `x` grows to the right and
/// `y` grows downwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HandLandmarks {
    points: [Point3; landmarks::COUNT],
}

impl HandLandmarks {
    #[must_use]
    pub fn new(points: [Point3; landmarks::COUNT]) -> Self {
        Self { points }
    }

    /// Builds from a slice, returning `None` unless it holds exactly 21 points.
    #[must_use]
    pub fn from_slice(points: &[Point3]) -> Option<Self> {
        points.try_into().ok().map(Self::new)
    }

    /// Returns the landmark at `index`, or `None` past the last one.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Point3> {
        self.points.get(index)
    }

    #[must_use]
    pub fn index_tip(&self) -> &Point3 {
        &self.points[INDEX_FINGER_TIP]
    }

    fn extended(&self, tip: usize, pip: usize) -> bool {
        self.points[tip].y < self.points[pip].y
    }
}

/// Index and middle fingers up, ring and pinky folded. This is the draw gesture.
#[must_use]
pub fn is_peace_sign(hand: &HandLandmarks) -> bool {
    let [index, middle, ring, pinky] = FINGERS.map(|(tip, _, pip)| hand.extended(tip, pip));
    index && middle && !ring && !pinky
}

/// All four fingers clearly raised and spread apart.
#[must_use]
pub fn is_open_palm(hand: &HandLandmarks) -> bool {
    let p = &hand.points;
    let raised = FINGERS
        .iter()
        .all(|&(tip, _, pip)| p[pip].y - p[tip].y > OPEN_PALM_EXTENSION);
    let spread = FINGERS
        .windows(2)
        .all(|w| (p[w[0].0].x - p[w[1].0].x).abs() > OPEN_PALM_SPACING);
    raised && spread
}

/// Every fingertip at or below its DIP joint, with a little slack.
#[must_use]
pub fn is_closed_palm(hand: &HandLandmarks) -> bool {
    let p = &hand.points;
    FINGERS
        .iter()
        .all(|&(tip, dip, _)| p[tip].y > p[dip].y - CLOSED_PALM_SLACK)
}

/// Only the index finger raised.
#[must_use]
pub fn is_index_finger(hand: &HandLandmarks) -> bool {
    let [index, rest @ ..] = FINGERS.map(|(tip, _, pip)| hand.extended(tip, pip));
    index && rest.iter().all(|&e| !e)
}

/// Recognized hand poses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gesture {
    PeaceSign,
    OpenPalm,
    ClosedPalm,
    IndexFinger,
    None,
}

impl Gesture {
    /// Returns whether this gesture means "draw here".
    #[must_use]
    pub fn is_draw_intent(self) -> bool {
        self == Self::PeaceSign
    }
}

/// Classifies a hand, checking peace sign, open palm, closed palm and
/// pointing finger in that order.
#[must_use]
pub fn classify(hand: &HandLandmarks) -> Gesture {
    if is_peace_sign(hand) {
        Gesture::PeaceSign
    } else if is_open_palm(hand) {
        Gesture::OpenPalm
    } else if is_closed_palm(hand) {
        Gesture::ClosedPalm
    } else if is_index_finger(hand) {
        Gesture::IndexFinger
    } else {
        Gesture::None
    }
}

/// Maps the normalized index fingertip into a shape's 2D plane.
///
/// `x = (lx - 0.5) * scale_x + offset_x`, `y = (0.5 - ly) * scale_y + offset_y`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    pub scale_x: f64,
    pub scale_y: f64,
    pub offset_x: f64,
    pub offset_y: f64,
    /// Depth attached to every projected point, for depth-gated bands.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depth: Option<f64>,
}

impl Projection {
    /// Uniform scale around a vertical offset.
    #[must_use]
    pub fn uniform(scale: f64, offset_y: f64) -> Self {
        Self {
            scale_x: scale,
            scale_y: scale,
            offset_x: 0.0,
            offset_y,
            depth: None,
        }
    }

    #[must_use]
    pub fn with_depth(mut self, depth: f64) -> Self {
        self.depth = Some(depth);
        self
    }

    /// Projects a normalized landmark.
    #[must_use]
    pub fn apply(&self, landmark: &Point3) -> InputPoint {
        InputPoint {
            position: crate::math::Point2::new(
                (landmark.x - 0.5) * self.scale_x + self.offset_x,
                (0.5 - landmark.y) * self.scale_y + self.offset_y,
            ),
            depth: self.depth,
        }
    }

    /// Turns one tracking result into a session frame: the projected index
    /// tip, with draw intent when the hand shows a peace sign.
    #[must_use]
    pub fn frame(&self, hand: Option<&HandLandmarks>) -> FrameInput {
        hand.map_or_else(FrameInput::absent, |hand| FrameInput {
            point: Some(self.apply(hand.index_tip())),
            draw_intent: classify(hand).is_draw_intent(),
        })
    }
}
