mod builder;
mod sample;

pub use builder::{RegionSamples, TemplateBuilder};
pub use sample::{CheckSample, SampleId};

use slotmap::SlotMap;

use crate::error::TemplateError;

/// Position of a region within its template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RegionId(usize);

impl RegionId {
    /// Returns the zero-based position of the region.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A named, ordered group of samples forming one visual part of a shape.
#[derive(Debug, Clone)]
pub struct Region {
    name: String,
    samples: Vec<SampleId>,
}

impl Region {
    /// Returns the region name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the region's samples in scan order.
    #[must_use]
    pub fn samples(&self) -> &[SampleId] {
        &self.samples
    }

    /// Returns whether the region has no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// The immutable definition of a target shape.
///
/// Samples live in an arena keyed by [`SampleId`]; regions reference them
/// in a fixed scan order.
#[derive(Debug, Clone, Default)]
pub struct ShapeTemplate {
    samples: SlotMap<SampleId, CheckSample>,
    regions: Vec<Region>,
}

impl ShapeTemplate {
    /// Starts building a template.
    #[must_use]
    pub fn builder() -> TemplateBuilder {
        TemplateBuilder::new()
    }

    /// Returns the regions in declaration order.
    #[must_use]
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Iterates regions with their ids, in declaration order.
    pub fn region_entries(&self) -> impl Iterator<Item = (RegionId, &Region)> + '_ {
        self.regions.iter().enumerate().map(|(i, r)| (RegionId(i), r))
    }

    /// Returns the region with the given id.
    #[must_use]
    pub fn region(&self, id: RegionId) -> Option<&Region> {
        self.regions.get(id.0)
    }

    /// Looks up a region by name.
    #[must_use]
    pub fn region_id(&self, name: &str) -> Option<RegionId> {
        self.regions.iter().position(|r| r.name == name).map(RegionId)
    }

    /// Returns the sample with the given id.
    #[must_use]
    pub fn sample(&self, id: SampleId) -> Option<&CheckSample> {
        self.samples.get(id)
    }

    /// Number of samples across all regions.
    #[must_use]
    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    /// Iterates every sample region by region, in scan order.
    pub fn scan(&self) -> impl Iterator<Item = (RegionId, SampleId, &CheckSample)> + '_ {
        self.regions.iter().enumerate().flat_map(move |(ri, region)| {
            region
                .samples
                .iter()
                .filter_map(move |&id| self.samples.get(id).map(|s| (RegionId(ri), id, s)))
        })
    }

    /// Sum of sample capacities in one region.
    #[must_use]
    pub fn region_capacity(&self, id: RegionId) -> u32 {
        self.region(id).map_or(0, |r| {
            r.samples
                .iter()
                .filter_map(|&s| self.samples.get(s))
                .map(CheckSample::capacity)
                .sum()
        })
    }

    /// Sum of sample capacities across the whole template.
    #[must_use]
    pub fn total_capacity(&self) -> u32 {
        self.samples.values().map(CheckSample::capacity).sum()
    }

    /// Checks region names and every sample.
    ///
    /// # Errors
    ///
    /// Returns the first `TemplateError` found.
    pub fn validate(&self) -> Result<(), TemplateError> {
        for (i, region) in self.regions.iter().enumerate() {
            if self.regions[..i].iter().any(|r| r.name == region.name) {
                return Err(TemplateError::DuplicateRegion(region.name.clone()));
            }
        }
        self.samples.values().try_for_each(CheckSample::validate)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::ContinuousBand;
    use crate::math::Point2;

    fn two_regions() -> ShapeTemplate {
        ShapeTemplate::builder()
            .region("left", |r| {
                r.point(Point2::new(-1.0, 0.0), 0.2).point(Point2::new(-1.0, 1.0), 0.2);
            })
            .region("right", |r| {
                r.counted(ContinuousBand::circle(Point2::new(1.0, 0.0), 0.5, 0.1), 5);
            })
            .build()
            .unwrap()
    }

    #[test]
    fn scan_follows_region_order() {
        let t = two_regions();
        let regions: Vec<usize> = t.scan().map(|(r, _, _)| r.index()).collect();
        assert_eq!(regions, vec![0, 0, 1]);
    }

    #[test]
    fn capacities_sum_counted_caps() {
        let t = two_regions();
        assert_eq!(t.region_capacity(t.region_id("left").unwrap()), 2);
        assert_eq!(t.region_capacity(t.region_id("right").unwrap()), 5);
        assert_eq!(t.total_capacity(), 7);
        assert_eq!(t.sample_count(), 3);
    }

    #[test]
    fn unknown_region_lookup() {
        assert!(two_regions().region_id("middle").is_none());
    }
}
