use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("segment {index} has identical endpoints")]
    DegenerateSegment { index: usize },

    #[error("need two orientation groups to resolve corners, found {found}")]
    NotEnoughGroups { found: usize },

    #[error("orientation group {group} has {found} line(s), need at least 2")]
    NotEnoughLines { group: usize, found: usize },

    #[error("corner {index} is not finite, its two sides are parallel")]
    CornerNotFound { index: usize },

    #[error("invalid configuration: {0}")]
    Config(String),
}
