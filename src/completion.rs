use serde::{Deserialize, Serialize};

use crate::coverage::CoverageState;
use crate::error::ConfigError;
use crate::template::ShapeTemplate;

/// A per-region threshold, either relative or absolute.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Threshold {
    /// `hits / capacity >= ratio`.
    Ratio(f64),
    /// `hits >= count`.
    Count(u32),
}

/// Threshold applied to one named region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionThreshold {
    pub region: String,
    pub threshold: Threshold,
}

impl RegionThreshold {
    /// Ratio threshold for `region`.
    #[must_use]
    pub fn ratio(region: impl Into<String>, ratio: f64) -> Self {
        Self {
            region: region.into(),
            threshold: Threshold::Ratio(ratio),
        }
    }

    /// Absolute-count threshold for `region`.
    #[must_use]
    pub fn count(region: impl Into<String>, count: u32) -> Self {
        Self {
            region: region.into(),
            threshold: Threshold::Count(count),
        }
    }
}

/// Decides when a shape counts as drawn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum CompletionRule {
    /// Total hits over total capacity must reach `ratio`.
    GlobalRatio { ratio: f64 },
    /// Total hits must reach `count`, regardless of template size.
    AbsoluteCount { count: u32 },
    /// Every listed region must clear its own threshold.
    PerRegion { thresholds: Vec<RegionThreshold> },
}

impl CompletionRule {
    /// Returns whether `coverage` satisfies this rule on `template`.
    ///
    /// A region (or template) with zero capacity is vacuously covered.
    #[must_use]
    pub fn is_complete(&self, template: &ShapeTemplate, coverage: &CoverageState) -> bool {
        match self {
            Self::GlobalRatio { ratio } => {
                meets_ratio(coverage.hit_count(), template.total_capacity(), *ratio)
            }
            Self::AbsoluteCount { count } => coverage.hit_count() >= *count,
            Self::PerRegion { thresholds } => thresholds.iter().all(|t| {
                let Some(id) = template.region_id(&t.region) else {
                    return false;
                };
                let hits = coverage.region_hits(template, id);
                match t.threshold {
                    Threshold::Ratio(ratio) => {
                        meets_ratio(hits, template.region_capacity(id), ratio)
                    }
                    Threshold::Count(count) => {
                        template.region(id).is_some_and(|r| r.is_empty()) || hits >= count
                    }
                }
            }),
        }
    }

    /// Checks ratios, counts and region names against `template`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::RatioOutOfRange` for a ratio outside `(0, 1]`,
    /// `ConfigError::UnknownRegion` for a region the template lacks and
    /// `ConfigError::UnreachableCount` for a count above the capacity it
    /// is measured against. Empty regions are exempt, being always covered.
    pub fn validate(&self, template: &ShapeTemplate) -> Result<(), ConfigError> {
        match self {
            Self::GlobalRatio { ratio } => check_ratio(*ratio),
            Self::AbsoluteCount { count } => check_count(*count, template.total_capacity()),
            Self::PerRegion { thresholds } => thresholds.iter().try_for_each(|t| {
                let Some(id) = template.region_id(&t.region) else {
                    return Err(ConfigError::UnknownRegion(t.region.clone()));
                };
                match t.threshold {
                    Threshold::Ratio(ratio) => check_ratio(ratio),
                    Threshold::Count(count) => match template.region_capacity(id) {
                        0 => Ok(()),
                        capacity => check_count(count, capacity),
                    },
                }
            }),
        }
    }
}

/// Free-function form of [`CompletionRule::is_complete`].
#[must_use]
pub fn is_complete(template: &ShapeTemplate, coverage: &CoverageState, rule: &CompletionRule) -> bool {
    rule.is_complete(template, coverage)
}

fn meets_ratio(hits: u32, capacity: u32, ratio: f64) -> bool {
    capacity == 0 || f64::from(hits) / f64::from(capacity) >= ratio
}

fn check_ratio(ratio: f64) -> Result<(), ConfigError> {
    if ratio > 0.0 && ratio <= 1.0 {
        Ok(())
    } else {
        Err(ConfigError::RatioOutOfRange(ratio))
    }
}

fn check_count(count: u32, capacity: u32) -> Result<(), ConfigError> {
    if count <= capacity {
        Ok(())
    } else {
        Err(ConfigError::UnreachableCount { count, capacity })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::{ContinuousBand, InputPoint};
    use crate::math::Point2;

    fn twenty_points() -> ShapeTemplate {
        ShapeTemplate::builder()
            .region("line", |r| {
                r.points((0..20).map(|i| Point2::new(f64::from(i), 0.0)), 0.1);
            })
            .build()
            .unwrap()
    }

    fn hit_first(template: &ShapeTemplate, n: u32) -> CoverageState {
        let mut cov = CoverageState::new();
        for i in 0..n {
            cov.evaluate(template, &InputPoint::new(f64::from(i), 0.0)).unwrap();
        }
        cov
    }

    #[test]
    fn ratio_boundary_twelve_of_twenty() {
        let t = twenty_points();
        let rule = CompletionRule::GlobalRatio { ratio: 0.6 };
        assert!(!rule.is_complete(&t, &hit_first(&t, 11)));
        assert!(rule.is_complete(&t, &hit_first(&t, 12)));
    }

    #[test]
    fn absolute_count_ignores_ratio() {
        let t = twenty_points();
        let rule = CompletionRule::AbsoluteCount { count: 4 };
        assert!(!rule.is_complete(&t, &hit_first(&t, 3)));
        assert!(is_complete(&t, &hit_first(&t, 4), &rule));
    }

    fn bunny_like() -> (ShapeTemplate, CompletionRule) {
        let t = ShapeTemplate::builder()
            .region("face", |r| {
                r.counted(ContinuousBand::circle(Point2::new(0.0, 0.0), 1.0, 0.1), 50);
            })
            .region("left_ear", |r| {
                r.counted(ContinuousBand::circle(Point2::new(-5.0, 0.0), 1.0, 0.1), 20);
            })
            .region("right_ear", |r| {
                r.counted(ContinuousBand::circle(Point2::new(5.0, 0.0), 1.0, 0.1), 20);
            })
            .build()
            .unwrap();
        let rule = CompletionRule::PerRegion {
            thresholds: vec![
                RegionThreshold::count("face", 50),
                RegionThreshold::count("left_ear", 20),
                RegionThreshold::count("right_ear", 20),
            ],
        };
        (t, rule)
    }

    fn feed(t: &ShapeTemplate, cov: &mut CoverageState, x: f64, times: u32) {
        for _ in 0..times {
            cov.evaluate(t, &InputPoint::new(x, 0.0));
        }
    }

    #[test]
    fn region_conjunction_needs_every_region() {
        let (t, rule) = bunny_like();
        let cases = [
            (49, 20, 20, false),
            (50, 19, 20, false),
            (50, 20, 19, false),
            (50, 20, 20, true),
            (60, 25, 25, true),
        ];
        for (face, left, right, expected) in cases {
            let mut cov = CoverageState::new();
            feed(&t, &mut cov, 1.0, face);
            feed(&t, &mut cov, -4.0, left);
            feed(&t, &mut cov, 6.0, right);
            assert_eq!(
                rule.is_complete(&t, &cov),
                expected,
                "face={face} left={left} right={right}"
            );
        }
    }

    #[test]
    fn empty_region_is_vacuously_covered() {
        let t = ShapeTemplate::builder()
            .region("full", |r| {
                r.point(Point2::origin(), 0.1);
            })
            .region("empty", |_| {})
            .build()
            .unwrap();
        let rule = CompletionRule::PerRegion {
            thresholds: vec![
                RegionThreshold::ratio("full", 1.0),
                RegionThreshold::ratio("empty", 0.9),
                RegionThreshold::count("empty", 10),
            ],
        };
        let mut cov = CoverageState::new();
        assert!(!rule.is_complete(&t, &cov));
        cov.evaluate(&t, &InputPoint::new(0.0, 0.0)).unwrap();
        assert!(rule.is_complete(&t, &cov));
    }

    #[test]
    fn empty_template_is_complete_under_ratio() {
        let t = ShapeTemplate::default();
        let rule = CompletionRule::GlobalRatio { ratio: 0.5 };
        assert!(rule.is_complete(&t, &CoverageState::new()));
    }

    #[test]
    fn validate_catches_bad_ratio_and_unknown_region() {
        let t = twenty_points();
        assert!(CompletionRule::GlobalRatio { ratio: 1.5 }.validate(&t).is_err());
        assert!(CompletionRule::GlobalRatio { ratio: 0.0 }.validate(&t).is_err());
        let rule = CompletionRule::PerRegion {
            thresholds: vec![RegionThreshold::ratio("nope", 0.5)],
        };
        assert!(matches!(rule.validate(&t), Err(ConfigError::UnknownRegion(_))));
        assert!(CompletionRule::GlobalRatio { ratio: 0.6 }.validate(&t).is_ok());
    }

    #[test]
    fn validate_catches_unreachable_counts() {
        let t = twenty_points();
        assert!(CompletionRule::AbsoluteCount { count: 20 }.validate(&t).is_ok());
        assert!(matches!(
            CompletionRule::AbsoluteCount { count: 21 }.validate(&t),
            Err(ConfigError::UnreachableCount {
                count: 21,
                capacity: 20
            })
        ));

        let (bunny, rule) = bunny_like();
        assert!(rule.validate(&bunny).is_ok());
        let greedy = CompletionRule::PerRegion {
            thresholds: vec![RegionThreshold::count("left_ear", 21)],
        };
        assert!(matches!(
            greedy.validate(&bunny),
            Err(ConfigError::UnreachableCount { capacity: 20, .. })
        ));
    }

    #[test]
    fn empty_region_accepts_any_count() {
        let t = ShapeTemplate::builder().region("empty", |_| {}).build().unwrap();
        let rule = CompletionRule::PerRegion {
            thresholds: vec![RegionThreshold::count("empty", 10)],
        };
        assert!(rule.validate(&t).is_ok());
        assert!(rule.is_complete(&t, &CoverageState::new()));
    }

    #[test]
    fn rule_serializes_with_tag() {
        let rule = CompletionRule::PerRegion {
            thresholds: vec![RegionThreshold::ratio("canopy", 0.5)],
        };
        let json = serde_json::to_string(&rule).unwrap();
        assert!(json.contains("\"rule\":\"per_region\""));
        let back: CompletionRule = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rule);
    }
}
