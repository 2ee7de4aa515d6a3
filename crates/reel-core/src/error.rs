use thiserror::Error;

/// Invalid carousel configuration value.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("auto-scroll duration must be a positive number of seconds, got {0}")]
    Duration(f64),
    #[error("drag sensitivity must be finite and positive, got {0}")]
    Sensitivity(f64),
    #[error("attribute `{name}` is not a number: {value:?}")]
    NotANumber { name: &'static str, value: String },
}

/// Malformed scroll-trigger start description such as `"top 80%"`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TriggerParseError {
    #[error("expected `<edge> <viewport position>`, got {0:?}")]
    Shape(String),
    #[error("unknown element edge {0:?} (expected top, center or bottom)")]
    Edge(String),
    #[error("viewport position {0:?} must be a percentage between 0% and 100%")]
    Position(String),
}
