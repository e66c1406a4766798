use slotmap::SlotMap;

use crate::error::Result;
use crate::geometry::{ContinuousBand, Outline};
use crate::math::sampling_2d::{edge_points, ring_points, EdgeSpacing};
use crate::math::Point2;

use super::{CheckSample, Region, SampleId, ShapeTemplate};

/// Assembles a [`ShapeTemplate`] region by region.
#[derive(Debug, Default)]
pub struct TemplateBuilder {
    samples: SlotMap<SampleId, CheckSample>,
    regions: Vec<Region>,
}

impl TemplateBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a region; `fill` adds its samples in scan order.
    #[must_use]
    pub fn region(mut self, name: impl Into<String>, fill: impl FnOnce(&mut RegionSamples<'_>)) -> Self {
        let mut samples = RegionSamples {
            arena: &mut self.samples,
            ids: Vec::new(),
        };
        fill(&mut samples);
        let ids = samples.ids;
        self.regions.push(Region {
            name: name.into(),
            samples: ids,
        });
        self
    }

    /// Validates and returns the template.
    ///
    /// # Errors
    ///
    /// Returns an error for duplicate region names or a sample with a
    /// non-positive radius, tolerance or cap.
    pub fn build(self) -> Result<ShapeTemplate> {
        let template = self.finish();
        template.validate()?;
        Ok(template)
    }

    /// Returns the template without validation. Built-in shapes use this;
    /// their constants are checked by tests.
    pub(crate) fn finish(self) -> ShapeTemplate {
        ShapeTemplate {
            samples: self.samples,
            regions: self.regions,
        }
    }
}

/// Sample sink for one region under construction.
#[derive(Debug)]
pub struct RegionSamples<'a> {
    arena: &'a mut SlotMap<SampleId, CheckSample>,
    ids: Vec<SampleId>,
}

impl RegionSamples<'_> {
    /// Adds an arbitrary sample.
    pub fn sample(&mut self, sample: CheckSample) -> &mut Self {
        let id = self.arena.insert(sample);
        self.ids.push(id);
        self
    }

    /// Adds a point sample.
    pub fn point(&mut self, center: Point2, radius: f64) -> &mut Self {
        self.sample(CheckSample::point(center, radius))
    }

    /// Adds one point sample per point, sharing a capture radius.
    pub fn points(&mut self, points: impl IntoIterator<Item = Point2>, radius: f64) -> &mut Self {
        for p in points {
            self.point(p, radius);
        }
        self
    }

    /// Adds a segment sample.
    pub fn segment(&mut self, a: Point2, b: Point2, tolerance: f64) -> &mut Self {
        self.sample(CheckSample::segment(a, b, tolerance))
    }

    /// Adds one segment sample per edge of `outline`.
    pub fn outline_segments(&mut self, outline: &Outline, tolerance: f64) -> &mut Self {
        for (a, b) in outline.edges() {
            self.segment(a, b, tolerance);
        }
        self
    }

    /// Adds `count` point samples evenly spaced around a circle, starting at `phase`.
    pub fn ring(&mut self, center: Point2, radius: f64, count: usize, phase: f64, capture: f64) -> &mut Self {
        self.points(ring_points(&center, radius, count, phase), capture)
    }

    /// Adds `count` point samples interpolated along the edge `a → b`.
    pub fn edge(
        &mut self,
        a: Point2,
        b: Point2,
        count: usize,
        spacing: EdgeSpacing,
        capture: f64,
    ) -> &mut Self {
        self.points(edge_points(&a, &b, count, spacing), capture)
    }

    /// Adds a continuous band sample.
    pub fn band(&mut self, band: ContinuousBand) -> &mut Self {
        self.sample(CheckSample::Band(band))
    }

    /// Adds a counted zone saturating at `cap` hits.
    pub fn counted(&mut self, band: ContinuousBand, cap: u32) -> &mut Self {
        self.sample(CheckSample::Counted { band, cap })
    }
}
