use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    #[error("slot {slot} is out of range for capacity {capacity}")]
    IndexOutOfRange { slot: usize, capacity: usize },
    #[error("total priority is zero, nothing to find")]
    EmptyDistribution,
}
