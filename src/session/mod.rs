pub mod config;
pub mod effects;

pub use config::{DrawGate, Guide, GuideZone, MarkerStyle, SessionConfig, StatusMessages};
pub use effects::{dispatch_all, FrameOutcome, FrameReport, SceneSink, SideEffect};

use tracing::{debug, info, trace};

use crate::coverage::{CoverageState, RegionProgress};
use crate::error::Result;
use crate::geometry::InputPoint;
use crate::math::Point2;
use crate::shapes::ShapeKind;
use crate::template::ShapeTemplate;

/// Lifecycle of a session. `Completed` latches until [`DrawingSession::clear`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Active,
    Completed,
}

/// One frame of hand input.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameInput {
    /// The projected fingertip, or `None` when no hand is tracked.
    pub point: Option<InputPoint>,
    pub draw_intent: bool,
}

impl FrameInput {
    /// A frame with draw intent at `point`.
    #[must_use]
    pub fn drawing(point: InputPoint) -> Self {
        Self {
            point: Some(point),
            draw_intent: true,
        }
    }

    /// A tracked hand without draw intent.
    #[must_use]
    pub fn hovering(point: InputPoint) -> Self {
        Self {
            point: Some(point),
            draw_intent: false,
        }
    }

    /// No hand in view.
    #[must_use]
    pub fn absent() -> Self {
        Self::default()
    }
}

/// Snapshot of coverage for display.
#[derive(Debug, Clone, PartialEq)]
pub struct Progress {
    pub regions: Vec<RegionProgress>,
    pub hits: u32,
    pub capacity: u32,
    pub state: SessionState,
}

impl Progress {
    /// Overall covered fraction; an empty template counts as fully covered.
    #[must_use]
    pub fn ratio(&self) -> f64 {
        if self.capacity == 0 {
            1.0
        } else {
            f64::from(self.hits) / f64::from(self.capacity)
        }
    }
}

/// Coverage tracking and completion for one shape on one screen.
///
/// The driver feeds one [`FrameInput`] per camera frame and forwards the
/// returned side effects to the renderer.
#[derive(Debug, Clone)]
pub struct DrawingSession {
    template: ShapeTemplate,
    config: SessionConfig,
    coverage: CoverageState,
    state: SessionState,
    drawing: bool,
}

impl DrawingSession {
    /// Creates a session after validating the template and configuration.
    ///
    /// # Errors
    ///
    /// Returns `TraceformError::Template` for an invalid template and
    /// `TraceformError::Config` for a configuration that does not fit it.
    pub fn new(template: ShapeTemplate, config: SessionConfig) -> Result<Self> {
        template.validate()?;
        config.validate(&template)?;
        Ok(Self::from_parts(template, config))
    }

    /// Creates a session for a built-in shape.
    #[must_use]
    pub fn for_shape(kind: ShapeKind) -> Self {
        let spec = kind.spec();
        Self::from_parts(spec.template, spec.config)
    }

    fn from_parts(template: ShapeTemplate, config: SessionConfig) -> Self {
        info!(
            shape = %config.name,
            samples = template.sample_count(),
            capacity = template.total_capacity(),
            "drawing session created"
        );
        Self {
            template,
            config,
            coverage: CoverageState::new(),
            state: SessionState::Active,
            drawing: false,
        }
    }

    #[must_use]
    pub fn template(&self) -> &ShapeTemplate {
        &self.template
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn coverage(&self) -> &CoverageState {
        &self.coverage
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.state == SessionState::Completed
    }

    /// The instruction shown before drawing starts.
    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.config.messages.prompt
    }

    /// Current per-region and overall coverage.
    #[must_use]
    pub fn progress(&self) -> Progress {
        Progress {
            regions: self.coverage.region_progress(&self.template),
            hits: self.coverage.hit_count(),
            capacity: self.template.total_capacity(),
            state: self.state,
        }
    }

    /// Processes one frame: gate, then coverage, then completion.
    ///
    /// Completed sessions ignore every frame until cleared. Without draw
    /// intent nothing is marked; the first such frame after drawing
    /// reports that drawing stopped. Losing the hand stops drawing silently.
    pub fn process_frame(&mut self, frame: FrameInput) -> FrameReport {
        if self.is_completed() {
            return FrameReport::ignored();
        }
        let point = match frame.point {
            Some(point) if frame.draw_intent => point,
            Some(_) => return self.idle(),
            None => {
                self.drawing = false;
                return FrameReport::ignored();
            }
        };
        self.drawing = true;

        let Self {
            template,
            config,
            coverage,
            state,
            ..
        } = self;

        let mut effects = Vec::with_capacity(3);
        let hit = match &config.gate {
            DrawGate::Strict => {
                let Some(hit) = coverage.evaluate(template, &point) else {
                    return rejected(config, &point);
                };
                effects.push(spawn(point.position, &config.marker));
                Some(hit)
            }
            gate @ DrawGate::Permissive { .. } => {
                let Some(guide) = gate.matching_guide(template, &point) else {
                    return rejected(config, &point);
                };
                let position = if config.snap_to_outline {
                    gate.snap(&point.position).unwrap_or(point.position)
                } else {
                    point.position
                };
                effects.push(spawn(position, guide.marker.as_ref().unwrap_or(&config.marker)));
                coverage.evaluate(template, &point.moved_to(position))
            }
        };

        if let Some(hit) = hit {
            debug!(
                shape = %config.name,
                region = template.region(hit.region).map(|r| r.name()),
                hits = coverage.hit_count(),
                "sample hit"
            );
        }
        let status = match (&hit, &config.messages.hit) {
            (Some(_), Some(message)) => message,
            _ => &config.messages.drawing,
        };
        effects.push(SideEffect::Status(status.clone()));

        let completed = config.rule.is_complete(template, coverage);
        if completed {
            *state = SessionState::Completed;
            info!(shape = %config.name, hits = coverage.hit_count(), "shape completed");
            effects.push(SideEffect::Status(config.messages.completed.clone()));
            effects.push(SideEffect::Complete);
        }

        FrameReport {
            outcome: FrameOutcome::Accepted { hit, completed },
            effects,
        }
    }

    /// Resets coverage and the completion latch and removes all markers.
    pub fn clear(&mut self) -> Vec<SideEffect> {
        self.coverage.clear();
        self.state = SessionState::Active;
        self.drawing = false;
        debug!(shape = %self.config.name, "drawing cleared");
        vec![
            SideEffect::Clear,
            SideEffect::Status(self.config.messages.cleared.clone()),
        ]
    }

    fn idle(&mut self) -> FrameReport {
        let mut report = FrameReport::ignored();
        if std::mem::take(&mut self.drawing) {
            report
                .effects
                .push(SideEffect::Status(self.config.messages.stopped.clone()));
        }
        report
    }
}

fn spawn(position: Point2, marker: &MarkerStyle) -> SideEffect {
    SideEffect::SpawnMarker {
        position,
        color: marker.color.clone(),
        radius: marker.radius,
    }
}

fn rejected(config: &SessionConfig, point: &InputPoint) -> FrameReport {
    trace!(shape = %config.name, x = point.position.x, y = point.position.y, "frame rejected");
    FrameReport {
        outcome: FrameOutcome::Rejected,
        effects: vec![SideEffect::Status(config.messages.too_far.clone())],
    }
}
