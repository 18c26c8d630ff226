use thiserror::Error;

/// Rejected generator configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("name set is empty")]
    EmptyNames,

    #[error("occupation set is empty")]
    EmptyOccupations,

    #[error("rate range is inverted: min {min} > max {max}")]
    InvertedRange { min: u32, max: u32 },

    #[error("freelancer count must be positive")]
    ZeroCount,
}

/// Errors from the rate aggregator
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AggregateError {
    #[error("cannot average the rates of an empty freelancer list")]
    InvalidInput,
}

/// Errors raised while attaching a view to its host
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("mount point not found: #{0}")]
    MissingMountPoint(String),

    #[error("no host document available")]
    NoDocument,
}
