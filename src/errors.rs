// SPDX-License-Identifier: MIT OR Apache-2.0 OR Zlib

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Failed to open {path:?}: {error}")]
    FailedToOpen {
        path: PathBuf,
        error: std::io::Error,
    },

    #[error("Could not read a line from {path:?}: {error}")]
    FailedToRead {
        path: PathBuf,
        error: std::io::Error,
    },
}
