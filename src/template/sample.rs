use crate::error::TemplateError;
use crate::geometry::band::positive;
use crate::geometry::{ContinuousBand, InputPoint};
use crate::math::distance_2d::{distance, distance_to_segment};
use crate::math::Point2;

slotmap::new_key_type! {
    /// Unique identifier for a check sample in a shape template.
    pub struct SampleId;
}

/// A location or zone whose hit status contributes to coverage.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckSample {
    /// Hit when the input lies strictly within `radius` of `center`.
    Point { center: Point2, radius: f64 },
    /// Hit when the input lies strictly within `tolerance` of the segment `[a, b]`.
    Segment { a: Point2, b: Point2, tolerance: f64 },
    /// Hit when the input falls inside a circle or ellipse band.
    Band(ContinuousBand),
    /// A band that counts repeated detections up to `cap`.
    Counted { band: ContinuousBand, cap: u32 },
}

impl CheckSample {
    /// Creates a point sample.
    #[must_use]
    pub fn point(center: Point2, radius: f64) -> Self {
        Self::Point { center, radius }
    }

    /// Creates a segment sample.
    #[must_use]
    pub fn segment(a: Point2, b: Point2, tolerance: f64) -> Self {
        Self::Segment { a, b, tolerance }
    }

    /// Number of hits needed to saturate this sample.
    #[must_use]
    pub fn capacity(&self) -> u32 {
        match self {
            Self::Counted { cap, .. } => *cap,
            Self::Point { .. } | Self::Segment { .. } | Self::Band(_) => 1,
        }
    }

    /// Returns whether `input` passes this sample's proximity test.
    #[must_use]
    pub fn matches(&self, input: &InputPoint) -> bool {
        let p = &input.position;
        match self {
            Self::Point { center, radius } => distance(p, center) < *radius,
            Self::Segment { a, b, tolerance } => distance_to_segment(p, a, b) < *tolerance,
            Self::Band(band) | Self::Counted { band, .. } => band.contains(input),
        }
    }

    /// Checks the sample's radii, tolerances and cap.
    ///
    /// # Errors
    ///
    /// Returns `TemplateError::NonPositive` for a non-positive value.
    pub fn validate(&self) -> Result<(), TemplateError> {
        match self {
            Self::Point { radius, .. } => positive("capture radius", *radius),
            Self::Segment { tolerance, .. } => positive("segment tolerance", *tolerance),
            Self::Band(band) => band.validate(),
            Self::Counted { band, cap } => {
                band.validate()?;
                positive("counted zone cap", f64::from(*cap))
            }
        }
    }
}
