pub mod completion;
pub mod coverage;
pub mod error;
pub mod geometry;
pub mod gesture;
pub mod math;
pub mod session;
pub mod shapes;
pub mod template;

pub use completion::{is_complete, CompletionRule, RegionThreshold, Threshold};
pub use coverage::{CoverageState, RegionProgress, SampleHit};
pub use error::{ConfigError, Result, TemplateError, TraceformError};
pub use geometry::{ContinuousBand, InputPoint, Outline};
pub use session::{
    DrawingSession, FrameInput, FrameOutcome, FrameReport, Progress, SceneSink, SessionConfig,
    SessionState, SideEffect,
};
pub use shapes::{ShapeKind, ShapeSpec};
pub use template::{CheckSample, ShapeTemplate};
