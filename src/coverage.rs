use slotmap::SecondaryMap;

use crate::geometry::InputPoint;
use crate::template::{RegionId, SampleId, ShapeTemplate};

/// The sample marked by one call to [`CoverageState::evaluate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleHit {
    pub sample: SampleId,
    pub region: RegionId,
}

/// Hits and capacity of one region.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionProgress {
    pub name: String,
    pub hits: u32,
    pub capacity: u32,
}

impl RegionProgress {
    /// Fraction of the region covered; an empty region counts as fully covered.
    #[must_use]
    pub fn ratio(&self) -> f64 {
        if self.capacity == 0 {
            1.0
        } else {
            f64::from(self.hits) / f64::from(self.capacity)
        }
    }
}

/// Per-sample hit counts for one template.
///
/// Boolean samples saturate at one hit, counted zones at their cap. Counts
/// never decrease except through [`CoverageState::clear`].
#[derive(Debug, Clone, Default)]
pub struct CoverageState {
    hits: SecondaryMap<SampleId, u32>,
}

impl CoverageState {
    /// Creates an all-zero coverage state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the first unsaturated sample that `input` matches.
    ///
    /// Samples are scanned region by region in declaration order. Samples
    /// already saturated are skipped, so repeated input over a covered
    /// sample changes nothing.
    pub fn evaluate(&mut self, template: &ShapeTemplate, input: &InputPoint) -> Option<SampleHit> {
        let (region, sample, _) = template.scan().find(|&(_, id, sample)| {
            self.count(id) < sample.capacity() && sample.matches(input)
        })?;
        *self.hits.entry(sample)?.or_insert(0) += 1;
        Some(SampleHit { sample, region })
    }

    /// Returns whether `input` matches any sample, hit or not.
    #[must_use]
    pub fn touches(template: &ShapeTemplate, input: &InputPoint) -> bool {
        template.scan().any(|(_, _, sample)| sample.matches(input))
    }

    /// Hit count of one sample.
    #[must_use]
    pub fn count(&self, id: SampleId) -> u32 {
        self.hits.get(id).copied().unwrap_or(0)
    }

    /// Returns whether the sample has reached its capacity.
    #[must_use]
    pub fn is_hit(&self, template: &ShapeTemplate, id: SampleId) -> bool {
        template
            .sample(id)
            .is_some_and(|s| self.count(id) >= s.capacity())
    }

    /// Total hits across the template.
    #[must_use]
    pub fn hit_count(&self) -> u32 {
        self.hits.values().sum()
    }

    /// Hits within one region.
    #[must_use]
    pub fn region_hits(&self, template: &ShapeTemplate, region: RegionId) -> u32 {
        template
            .region(region)
            .map_or(0, |r| r.samples().iter().map(|&id| self.count(id)).sum())
    }

    /// Hits and capacity for every region, in declaration order.
    #[must_use]
    pub fn region_progress(&self, template: &ShapeTemplate) -> Vec<RegionProgress> {
        template
            .region_entries()
            .map(|(id, region)| RegionProgress {
                name: region.name().to_owned(),
                hits: self.region_hits(template, id),
                capacity: template.region_capacity(id),
            })
            .collect()
    }

    /// Resets every count to zero.
    pub fn clear(&mut self) {
        self.hits.clear();
    }
}
