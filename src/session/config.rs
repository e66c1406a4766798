use serde::{Deserialize, Serialize};

use crate::completion::CompletionRule;
use crate::coverage::CoverageState;
use crate::error::{ConfigError, Result};
use crate::geometry::band::positive;
use crate::geometry::{ContinuousBand, InputPoint, Outline};
use crate::math::Point2;
use crate::template::ShapeTemplate;

/// Appearance of a spawned marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerStyle {
    pub color: String,
    pub radius: f64,
}

impl MarkerStyle {
    #[must_use]
    pub fn new(color: impl Into<String>, radius: f64) -> Self {
        Self {
            color: color.into(),
            radius,
        }
    }
}

/// A broad "on the shape" test used by permissive gating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GuideZone {
    /// Inside a circle or ellipse band.
    Band { band: ContinuousBand },
    /// Strictly within `tolerance` of an outline.
    Outline { outline: Outline, tolerance: f64 },
    /// Within capture range of any template sample, hit or not.
    NearSample,
}

impl GuideZone {
    /// Returns whether `input` lies in this zone.
    #[must_use]
    pub fn admits(&self, template: &ShapeTemplate, input: &InputPoint) -> bool {
        match self {
            Self::Band { band } => band.contains(input),
            Self::Outline { outline, tolerance } => outline.distance(&input.position) < *tolerance,
            Self::NearSample => CoverageState::touches(template, input),
        }
    }

    fn validate(&self) -> Result<()> {
        match self {
            Self::Band { band } => band.validate()?,
            Self::Outline { outline, tolerance } => {
                outline.validate()?;
                positive("outline tolerance", *tolerance)?;
            }
            Self::NearSample => {}
        }
        Ok(())
    }
}

/// A guide zone with an optional marker override.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Guide {
    pub zone: GuideZone,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker: Option<MarkerStyle>,
}

impl Guide {
    #[must_use]
    pub fn new(zone: GuideZone) -> Self {
        Self { zone, marker: None }
    }

    /// Markers spawned through this guide use `marker` instead of the default.
    #[must_use]
    pub fn with_marker(mut self, marker: MarkerStyle) -> Self {
        self.marker = Some(marker);
        self
    }
}

/// Decides whether a draw-intent frame spawns a marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum DrawGate {
    /// Draw only when the point marks a sample.
    Strict,
    /// Draw whenever the point lies in a guide zone; coverage is marked
    /// silently and never blocks the draw. Guides are tried in order.
    Permissive { guides: Vec<Guide> },
}

impl DrawGate {
    /// Returns the first guide admitting `input`, for permissive gates.
    #[must_use]
    pub fn matching_guide<'a>(&'a self, template: &ShapeTemplate, input: &InputPoint) -> Option<&'a Guide> {
        match self {
            Self::Strict => None,
            Self::Permissive { guides } => guides.iter().find(|g| g.zone.admits(template, input)),
        }
    }

    /// Nearest point on any outline guide, used for snapping.
    #[must_use]
    pub fn snap(&self, p: &Point2) -> Option<Point2> {
        let Self::Permissive { guides } = self else {
            return None;
        };
        guides
            .iter()
            .filter_map(|g| match &g.zone {
                GuideZone::Outline { outline, .. } => outline.closest_point(p),
                GuideZone::Band { .. } | GuideZone::NearSample => None,
            })
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(c, _)| c)
    }
}

/// Human-readable status texts for one shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusMessages {
    pub prompt: String,
    pub drawing: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hit: Option<String>,
    pub too_far: String,
    pub stopped: String,
    pub cleared: String,
    pub completed: String,
}

impl Default for StatusMessages {
    fn default() -> Self {
        Self {
            prompt: "Try to trace the shape!".to_owned(),
            drawing: "Drawing".to_owned(),
            hit: None,
            too_far: "Move finger closer to the shape".to_owned(),
            stopped: "Drawing stopped".to_owned(),
            cleared: "All Drawings Cleared".to_owned(),
            completed: "Shape drawn!".to_owned(),
        }
    }
}

/// Everything a drawing session needs besides its template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub name: String,
    pub gate: DrawGate,
    pub rule: CompletionRule,
    pub marker: MarkerStyle,
    /// Spawn markers on the nearest outline guide instead of the raw point.
    #[serde(default)]
    pub snap_to_outline: bool,
    #[serde(default)]
    pub messages: StatusMessages,
}

impl SessionConfig {
    /// Checks the configuration against the template it will drive.
    ///
    /// # Errors
    ///
    /// Returns an error for an empty permissive gate, an invalid guide
    /// zone, a non-positive marker radius, or a completion rule that does
    /// not fit the template.
    pub fn validate(&self, template: &ShapeTemplate) -> Result<()> {
        if let DrawGate::Permissive { guides } = &self.gate {
            if guides.is_empty() {
                return Err(ConfigError::EmptyGate.into());
            }
            for guide in guides {
                guide.zone.validate()?;
                if let Some(marker) = &guide.marker {
                    positive("marker radius", marker.radius)?;
                }
            }
        }
        positive("marker radius", self.marker.radius)?;
        self.rule.validate(template)?;
        Ok(())
    }
}
