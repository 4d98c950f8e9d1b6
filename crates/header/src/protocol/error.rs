use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("can't reserve {requested} bytes in output buffer: {reason}")]
    Capacity { requested: usize, reason: String },

    #[error("header block size too large, current: {current_size} exceed the limit {max_size}")]
    TooLargeBlock { current_size: usize, max_size: usize },

    #[error("io error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },
}

impl EncodeError {
    pub fn capacity<S: ToString>(requested: usize, reason: S) -> Self {
        Self::Capacity { requested, reason: reason.to_string() }
    }

    pub fn too_large_block(current_size: usize, max_size: usize) -> Self {
        Self::TooLargeBlock { current_size, max_size }
    }
}
