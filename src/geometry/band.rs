use serde::{Deserialize, Serialize};

use crate::error::TemplateError;
use crate::math::distance_2d::{circle_band_distance, normalized_ellipse_distance};
use crate::math::Point2;

use super::InputPoint;

/// The curve a [`ContinuousBand`] is centred on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BandProfile {
    /// Circle of the given radius. Deviation is measured in absolute units.
    Circle { radius: f64 },
    /// Axis-aligned ellipse. Deviation is measured in normalized units,
    /// where `0` is on the boundary and `1` is one full radius away.
    Ellipse { rx: f64, ry: f64 },
}

/// Accepts only inputs whose depth lies within `tolerance` of `center`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DepthGate {
    pub center: f64,
    pub tolerance: f64,
}

impl DepthGate {
    /// Returns whether `depth` passes the gate.
    ///
    /// Inputs without depth pass unconditionally.
    #[must_use]
    pub fn admits(&self, depth: Option<f64>) -> bool {
        depth.is_none_or(|z| (z - self.center).abs() < self.tolerance)
    }
}

/// A band of width `2 * tolerance` straddling a circle or ellipse edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContinuousBand {
    center: Point2,
    profile: BandProfile,
    tolerance: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    depth: Option<DepthGate>,
}

impl ContinuousBand {
    /// Band around a circle edge: hit when `| |p - center| - radius | <= tolerance`.
    #[must_use]
    pub fn circle(center: Point2, radius: f64, tolerance: f64) -> Self {
        Self {
            center,
            profile: BandProfile::Circle { radius },
            tolerance,
            depth: None,
        }
    }

    /// Band around an ellipse edge: hit when the normalized ellipse distance
    /// is within `tolerance` of `1`.
    #[must_use]
    pub fn ellipse(center: Point2, rx: f64, ry: f64, tolerance: f64) -> Self {
        Self {
            center,
            profile: BandProfile::Ellipse { rx, ry },
            tolerance,
            depth: None,
        }
    }

    /// Band covering the annulus `inner <= |p - center| <= outer`.
    #[must_use]
    pub fn annulus(center: Point2, inner: f64, outer: f64) -> Self {
        Self::circle(center, (inner + outer) * 0.5, (outer - inner) * 0.5)
    }

    /// Adds a depth gate to this band.
    #[must_use]
    pub fn with_depth_gate(mut self, gate: DepthGate) -> Self {
        self.depth = Some(gate);
        self
    }

    /// Returns the band center.
    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    /// Returns the band profile.
    #[must_use]
    pub fn profile(&self) -> &BandProfile {
        &self.profile
    }

    /// Returns the band half-width.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns the depth gate, if any.
    #[must_use]
    pub fn depth_gate(&self) -> Option<&DepthGate> {
        self.depth.as_ref()
    }

    /// Distance of `p` from the band's centre curve, in the profile's units.
    #[must_use]
    pub fn deviation(&self, p: &Point2) -> f64 {
        match self.profile {
            BandProfile::Circle { radius } => circle_band_distance(p, &self.center, radius),
            BandProfile::Ellipse { rx, ry } => {
                (normalized_ellipse_distance(p, &self.center, rx, ry) - 1.0).abs()
            }
        }
    }

    /// Returns whether `input` falls inside the band (edges inclusive).
    #[must_use]
    pub fn contains(&self, input: &InputPoint) -> bool {
        self.deviation(&input.position) <= self.tolerance
            && self.depth.as_ref().is_none_or(|g| g.admits(input.depth))
    }

    /// Checks that every radius and tolerance is positive.
    ///
    /// # Errors
    ///
    /// Returns `TemplateError::NonPositive` for the first offending value.
    pub fn validate(&self) -> Result<(), TemplateError> {
        match self.profile {
            BandProfile::Circle { radius } => positive("band radius", radius)?,
            BandProfile::Ellipse { rx, ry } => {
                positive("ellipse rx", rx)?;
                positive("ellipse ry", ry)?;
            }
        }
        positive("band tolerance", self.tolerance)?;
        if let Some(gate) = &self.depth {
            positive("depth tolerance", gate.tolerance)?;
        }
        Ok(())
    }
}

pub(crate) fn positive(what: &'static str, value: f64) -> Result<(), TemplateError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(TemplateError::NonPositive { what, value })
    }
}
