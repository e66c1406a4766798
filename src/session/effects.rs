use crate::coverage::SampleHit;
use crate::math::Point2;

/// One instruction for the renderer, in emission order.
#[derive(Debug, Clone, PartialEq)]
pub enum SideEffect {
    SpawnMarker {
        position: Point2,
        color: String,
        radius: f64,
    },
    Status(String),
    /// Emitted exactly once per transition into the completed state.
    Complete,
    /// Remove every spawned marker.
    Clear,
}

impl SideEffect {
    /// Forwards this effect to `sink`.
    pub fn dispatch<S: SceneSink + ?Sized>(&self, sink: &mut S) {
        match self {
            Self::SpawnMarker {
                position,
                color,
                radius,
            } => sink.on_spawn_marker(position, color, *radius),
            Self::Status(message) => sink.on_status(message),
            Self::Complete => sink.on_complete(),
            Self::Clear => sink.on_clear(),
        }
    }
}

/// Receiver for session side effects, implemented by the rendering layer.
pub trait SceneSink {
    fn on_spawn_marker(&mut self, position: &Point2, color: &str, radius: f64);
    fn on_status(&mut self, message: &str);
    fn on_complete(&mut self);
    fn on_clear(&mut self);
}

/// Forwards every effect to `sink`, in order.
pub fn dispatch_all<S: SceneSink + ?Sized>(effects: &[SideEffect], sink: &mut S) {
    for effect in effects {
        effect.dispatch(sink);
    }
}

/// How a frame was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// No draw intent, no point, or the session is completed.
    Ignored,
    /// Draw intent, but the point failed the gate.
    Rejected,
    /// A marker was spawned. `hit` is the sample marked, if any.
    Accepted {
        hit: Option<SampleHit>,
        completed: bool,
    },
}

/// Result of processing one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameReport {
    pub outcome: FrameOutcome,
    pub effects: Vec<SideEffect>,
}

impl FrameReport {
    pub(crate) fn ignored() -> Self {
        Self {
            outcome: FrameOutcome::Ignored,
            effects: Vec::new(),
        }
    }

    /// Returns whether this frame moved the session into the completed state.
    #[must_use]
    pub fn completed(&self) -> bool {
        matches!(self.outcome, FrameOutcome::Accepted { completed: true, .. })
    }

    /// Forwards the frame's effects to `sink`.
    pub fn dispatch<S: SceneSink + ?Sized>(&self, sink: &mut S) {
        dispatch_all(&self.effects, sink);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        log: Vec<String>,
    }

    impl SceneSink for Recorder {
        fn on_spawn_marker(&mut self, position: &Point2, color: &str, radius: f64) {
            self.log
                .push(format!("spawn {color} {radius} ({}, {})", position.x, position.y));
        }

        fn on_status(&mut self, message: &str) {
            self.log.push(format!("status {message}"));
        }

        fn on_complete(&mut self) {
            self.log.push("complete".to_owned());
        }

        fn on_clear(&mut self) {
            self.log.push("clear".to_owned());
        }
    }

    #[test]
    fn dispatch_preserves_order() {
        let effects = vec![
            SideEffect::SpawnMarker {
                position: Point2::new(1.0, 2.0),
                color: "Red".to_owned(),
                radius: 0.2,
            },
            SideEffect::Status("done".to_owned()),
            SideEffect::Complete,
            SideEffect::Clear,
        ];
        let mut sink = Recorder::default();
        dispatch_all(&effects, &mut sink);
        assert_eq!(
            sink.log,
            vec!["spawn Red 0.2 (1, 2)", "status done", "complete", "clear"]
        );
    }

    #[test]
    fn ignored_report_is_empty() {
        let report = FrameReport::ignored();
        assert!(report.effects.is_empty());
        assert!(!report.completed());
    }
}
