mod bunny;
mod circle;
mod fish;
mod flower;
mod house;
mod square;
mod sun;
mod tree;
mod triangle;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::gesture::Projection;
use crate::session::{MarkerStyle, SessionConfig, StatusMessages};
use crate::template::ShapeTemplate;

/// The shapes shipped with the tutorial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Circle,
    Bunny,
    Fish,
    Flower,
    House,
    Square,
    Sun,
    Tree,
    Triangle,
}

impl ShapeKind {
    pub const ALL: [Self; 9] = [
        Self::Circle,
        Self::Bunny,
        Self::Fish,
        Self::Flower,
        Self::House,
        Self::Square,
        Self::Sun,
        Self::Tree,
        Self::Triangle,
    ];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Bunny => "bunny",
            Self::Fish => "fish",
            Self::Flower => "flower",
            Self::House => "house",
            Self::Square => "square",
            Self::Sun => "sun",
            Self::Tree => "tree",
            Self::Triangle => "triangle",
        }
    }

    /// Builds the template, session configuration and projection for this shape.
    #[must_use]
    pub fn spec(self) -> ShapeSpec {
        match self {
            Self::Circle => circle::spec(),
            Self::Bunny => bunny::spec(),
            Self::Fish => fish::spec(),
            Self::Flower => flower::spec(),
            Self::House => house::spec(),
            Self::Square => square::spec(),
            Self::Sun => sun::spec(),
            Self::Tree => tree::spec(),
            Self::Triangle => triangle::spec(),
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|k| k.name() == lower)
            .ok_or_else(|| ConfigError::UnknownShape(s.to_owned()))
    }
}

/// Everything needed to run one built-in shape.
#[derive(Debug, Clone)]
pub struct ShapeSpec {
    pub kind: ShapeKind,
    pub template: ShapeTemplate,
    pub config: SessionConfig,
    /// Maps the index fingertip onto the shape's plane.
    pub projection: Projection,
}

/// Shared skeleton for the built-in configurations.
struct Texts {
    prompt: &'static str,
    drawing: &'static str,
    too_far: &'static str,
    completed: &'static str,
    cleared: &'static str,
}

const ALL_CLEARED: &str = "All Drawings Cleared";

impl Texts {
    fn messages(&self) -> StatusMessages {
        StatusMessages {
            prompt: self.prompt.to_owned(),
            drawing: self.drawing.to_owned(),
            too_far: self.too_far.to_owned(),
            completed: self.completed.to_owned(),
            cleared: self.cleared.to_owned(),
            ..StatusMessages::default()
        }
    }
}

fn marker(color: &str, radius: f64) -> MarkerStyle {
    MarkerStyle::new(color, radius)
}
