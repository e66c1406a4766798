use thiserror::Error;

/// Top-level error type for the traceform engine.
#[derive(Debug, Error)]
pub enum TraceformError {
    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors raised while assembling a shape template.
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("{what} must be positive, got {value}")]
    NonPositive { what: &'static str, value: f64 },

    #[error("duplicate region name: {0}")]
    DuplicateRegion(String),

    #[error("outline needs at least two vertices, got {0}")]
    DegenerateOutline(usize),
}

/// Errors raised while validating a session configuration against a template.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("completion ratio {0} is outside (0, 1]")]
    RatioOutOfRange(f64),

    #[error("completion rule references unknown region: {0}")]
    UnknownRegion(String),

    #[error("completion count {count} exceeds capacity {capacity}")]
    UnreachableCount { count: u32, capacity: u32 },

    #[error("unknown shape: {0}")]
    UnknownShape(String),

    #[error("permissive gate has no guide zones")]
    EmptyGate,
}

/// Convenience type alias for results using [`TraceformError`].
pub type Result<T> = std::result::Result<T, TraceformError>;
