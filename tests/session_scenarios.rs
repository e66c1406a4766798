#![allow(clippy::unwrap_used)]

use traceform::math::sampling_2d::ring_points;
use traceform::math::Point2;
use traceform::session::{DrawGate, MarkerStyle, StatusMessages};
use traceform::{
    CompletionRule, DrawingSession, FrameInput, FrameOutcome, InputPoint, SceneSink,
    SessionConfig, SessionState, ShapeKind, ShapeTemplate, SideEffect,
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[derive(Default)]
struct Scene {
    markers: Vec<(Point2, String)>,
    statuses: Vec<String>,
    completions: usize,
    clears: usize,
}

impl SceneSink for Scene {
    fn on_spawn_marker(&mut self, position: &Point2, color: &str, _radius: f64) {
        self.markers.push((*position, color.to_owned()));
    }

    fn on_status(&mut self, message: &str) {
        self.statuses.push(message.to_owned());
    }

    fn on_complete(&mut self) {
        self.completions += 1;
    }

    fn on_clear(&mut self) {
        self.markers.clear();
        self.clears += 1;
    }
}

fn circle_points() -> Vec<InputPoint> {
    ring_points(&Point2::new(0.0, 2.0), 0.65, 30, 0.0)
        .into_iter()
        .map(InputPoint::from)
        .collect()
}

#[test]
fn circle_completes_on_eighteenth_point() {
    init_tracing();
    let mut session = DrawingSession::for_shape(ShapeKind::Circle);
    let mut scene = Scene::default();
    let points = circle_points();

    for (i, point) in points.iter().take(18).enumerate() {
        let report = session.process_frame(FrameInput::drawing(*point));
        report.dispatch(&mut scene);
        assert_eq!(report.completed(), i == 17, "frame {i}");
    }
    assert_eq!(scene.completions, 1);
    assert_eq!(scene.markers.len(), 18);
    assert_eq!(scene.statuses.last().unwrap(), "Amazing! Circle Drawn!");
    assert_eq!(session.state(), SessionState::Completed);

    // Latched: further drawing does nothing.
    for point in &points[18..] {
        let report = session.process_frame(FrameInput::drawing(*point));
        assert_eq!(report.outcome, FrameOutcome::Ignored);
        report.dispatch(&mut scene);
    }
    assert_eq!(scene.completions, 1);
    assert_eq!(scene.markers.len(), 18);
    assert_eq!(session.coverage().hit_count(), 18);
}

#[test]
fn redrawing_the_same_spot_never_completes() {
    let mut session = DrawingSession::for_shape(ShapeKind::Circle);
    let point = circle_points()[0];
    for _ in 0..100 {
        let report = session.process_frame(FrameInput::drawing(point));
        assert!(!report.completed());
    }
    // The marked sample and its two overlapping neighbours, nothing more.
    assert_eq!(session.coverage().hit_count(), 3);
    assert_eq!(session.state(), SessionState::Active);
}

#[test]
fn clear_restarts_the_tutorial() {
    let mut session = DrawingSession::for_shape(ShapeKind::Circle);
    let mut scene = Scene::default();
    let points = circle_points();
    for point in points.iter().take(18) {
        session.process_frame(FrameInput::drawing(*point)).dispatch(&mut scene);
    }
    assert!(session.is_completed());

    traceform::session::dispatch_all(&session.clear(), &mut scene);
    assert_eq!(scene.clears, 1);
    assert!(scene.markers.is_empty());
    assert_eq!(session.state(), SessionState::Active);
    assert_eq!(session.progress().hits, 0);
    assert!(session.progress().regions.iter().all(|r| r.hits == 0));

    // Completion can fire again after a clear.
    for point in points.iter().take(18) {
        session.process_frame(FrameInput::drawing(*point)).dispatch(&mut scene);
    }
    assert_eq!(scene.completions, 2);
}

#[test]
fn off_ring_points_are_rejected() {
    let mut session = DrawingSession::for_shape(ShapeKind::Circle);
    let report = session.process_frame(FrameInput::drawing(InputPoint::new(0.0, 2.0)));
    assert_eq!(report.outcome, FrameOutcome::Rejected);
    assert_eq!(
        report.effects,
        vec![SideEffect::Status("Move finger closer to circle edge".to_owned())]
    );
}

#[test]
fn hover_after_drawing_reports_stop() {
    let mut session = DrawingSession::for_shape(ShapeKind::Circle);
    let point = circle_points()[3];
    session.process_frame(FrameInput::drawing(point));
    let report = session.process_frame(FrameInput::hovering(point));
    assert_eq!(report.outcome, FrameOutcome::Ignored);
    assert_eq!(
        report.effects,
        vec![SideEffect::Status("Drawing stopped".to_owned())]
    );
    assert!(session
        .process_frame(FrameInput::hovering(point))
        .effects
        .is_empty());
}

#[test]
fn hits_only_grow_until_clear() {
    let mut session = DrawingSession::for_shape(ShapeKind::Sun);
    let anchors: Vec<Point2> = session
        .template()
        .scan()
        .filter_map(|(_, _, s)| match s {
            traceform::CheckSample::Point { center, .. } => Some(*center),
            _ => None,
        })
        .collect();
    let mut last = 0;
    for (i, p) in anchors.iter().enumerate().take(40) {
        let point = if i % 3 == 0 {
            InputPoint::new(5.0, 5.0)
        } else {
            InputPoint::from(*p)
        };
        session.process_frame(FrameInput::drawing(point));
        let hits = session.coverage().hit_count();
        assert!(hits >= last);
        last = hits;
    }
    session.clear();
    assert_eq!(session.coverage().hit_count(), 0);
}

#[test]
fn custom_session_validates_its_config() {
    let template = ShapeTemplate::builder()
        .region("dot", |r| {
            r.point(Point2::origin(), 0.1);
        })
        .build()
        .unwrap();
    let config = SessionConfig {
        name: "dot".to_owned(),
        gate: DrawGate::Permissive { guides: Vec::new() },
        rule: CompletionRule::AbsoluteCount { count: 1 },
        marker: MarkerStyle::new("white", 0.05),
        snap_to_outline: false,
        messages: StatusMessages::default(),
    };
    let err = DrawingSession::new(template.clone(), config.clone()).unwrap_err();
    assert!(matches!(
        err,
        traceform::TraceformError::Config(traceform::ConfigError::EmptyGate)
    ));

    let config = SessionConfig {
        gate: DrawGate::Strict,
        ..config
    };
    let mut session = DrawingSession::new(template, config).unwrap();
    let report = session.process_frame(FrameInput::drawing(InputPoint::new(0.0, 0.05)));
    assert!(report.completed());
}
