// File: crates/tooltip-core/src/error.rs
// Summary: Contract violations surfaced by the classifier.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InteractionError {
    #[error("no series to classify against")]
    NoSeries,

    #[error("series index {index} out of range for {len} series")]
    SeriesIndexOutOfRange { index: usize, len: usize },
}

pub type InteractionResult<T> = Result<T, InteractionError>;
