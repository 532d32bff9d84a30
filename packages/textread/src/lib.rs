//! textread: file-backed text readers with build-time UTF-8 BOM handling.
//!
//! Server configuration and data-table files reach their parsers through the
//! three primitives defined by `textread_core`: open, read-line, read-block.
//! This crate ships the two interchangeable file-backed implementations and
//! binds one of them per build:
//!
//! - [`RawFileReader`] - byte-for-byte passthrough.
//! - [`BomAwareFileReader`] - identical, except that a leading UTF-8
//!   byte-order mark is silently discarded.
//!
//! # Selecting an implementation
//!
//! [`TextFile`] and [`open`] resolve at compile time via the `bom` feature;
//! call sites never name a concrete reader and never branch at runtime:
//!
//! ```toml
//! [dependencies]
//! textread = { version = "0.1", features = ["bom"] }
//! ```
//!
//! The `utf8-config` feature marks a build whose configuration files may be
//! BOM-prefixed; it implies `bom`. Without either feature the raw reader is
//! used. Both reader types stay available by name in every build - only the
//! binding of [`open`] changes.
//!
//! # Example
//!
//! ```rust,no_run
//! use textread::TextRead;
//!
//! fn first_line() -> Result<Vec<u8>, Box<dyn std::error::Error>> {
//!     let mut file = textread::open("conf/map_server.conf", "r")?;
//!     let mut buf = [0u8; 1024];
//!     let n = file.read_line(&mut buf)?;
//!     Ok(buf[..n].to_vec())
//! }
//! ```

use std::fs::File;
use std::path::Path;

mod bom;
mod fill;
mod raw;

pub use bom::{strip_utf8_bom, BomAwareFileReader, UTF8_BOM};
pub use raw::RawFileReader;

// Re-export the primitive surface for convenience
pub use textread_core::{OpenError, OpenMode, ReadError, TextRead};

/// The reader every call site gets from [`open`], fixed per build by the
/// `bom` feature.
#[cfg(feature = "bom")]
pub type TextFile = BomAwareFileReader;

/// The reader every call site gets from [`open`], fixed per build by the
/// `bom` feature.
#[cfg(not(feature = "bom"))]
pub type TextFile = RawFileReader;

/// Open a text file with an fopen-style mode string (`"r"` or `"rb"`).
///
/// Which reader this returns is decided when the crate is compiled; see the
/// crate docs.
///
/// # Returns
///
/// * `Ok(TextFile)` - An open handle positioned at the start of the content.
/// * `Err(OpenError)` - The path could not be opened or the mode string is
///   not recognized. No handle is produced.
pub fn open(path: impl AsRef<Path>, mode: &str) -> Result<TextFile, OpenError> {
    TextFile::open(path, mode)
}

/// Validate the mode string and open the file for both reader types.
pub(crate) fn open_file(path: &Path, mode: &str) -> Result<(File, OpenMode), OpenError> {
    let mode = OpenMode::parse(mode).ok_or_else(|| OpenError::InvalidMode {
        mode: mode.to_string(),
    })?;
    let file = File::open(path).map_err(|source| OpenError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("opened {} ({})", path.display(), mode.as_str());
    Ok((file, mode))
}
