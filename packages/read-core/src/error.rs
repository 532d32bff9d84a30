//! Error types for the read primitives.
//!
//! Two kinds only: a path that cannot be opened, and an I/O failure while
//! reading. Nothing here is retried; the underlying error is surfaced to the
//! caller unchanged in kind. End-of-stream is not an error - reads signal it
//! as `Ok(0)`.

use std::io;
use std::path::PathBuf;

/// The requested path/mode could not be opened. No handle is produced.
#[derive(thiserror::Error, Debug)]
pub enum OpenError {
    /// The path could not be opened in the requested mode.
    #[error("cannot open {}: {source}", .path.display())]
    Io {
        /// The path that failed to open.
        path: PathBuf,
        /// The underlying failure.
        #[source]
        source: io::Error,
    },

    /// The mode string is not one the read primitives recognize.
    #[error("invalid open mode: {mode:?}")]
    InvalidMode {
        /// The rejected mode string.
        mode: String,
    },
}

/// An I/O failure during a read.
///
/// This is the only error kind a read can surface, whatever the reader does
/// internally before delivering bytes.
#[derive(thiserror::Error, Debug)]
pub enum ReadError {
    /// The underlying I/O layer failed.
    #[error("read failed: {0}")]
    Io(#[from] io::Error),
}
