//! BOM-aware file reader.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use textread_core::{OpenError, OpenMode, ReadError, TextRead};

use crate::fill;

/// The UTF-8 byte-order mark.
pub const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Strip a leading UTF-8 BOM from a byte slice already held in memory.
///
/// Returns the slice unchanged when no BOM is present.
///
/// # Example
///
/// ```rust
/// use textread::strip_utf8_bom;
///
/// assert_eq!(strip_utf8_bom(&[0xEF, 0xBB, 0xBF, b'H', b'i']), b"Hi");
/// assert_eq!(strip_utf8_bom(b"Hi"), b"Hi");
/// assert_eq!(strip_utf8_bom(&[0xEF, 0xBB]), &[0xEF, 0xBB]);
/// ```
pub fn strip_utf8_bom(bytes: &[u8]) -> &[u8] {
    bytes.strip_prefix(&UTF8_BOM).unwrap_or(bytes)
}

/// File reader that skips a leading UTF-8 BOM.
///
/// For every file that does not begin with the marker this reader is
/// byte-for-byte identical to [`crate::RawFileReader`]; for files that do,
/// exactly the three marker bytes are discarded before the first read
/// returns.
///
/// The probe runs once per reader, on the first read of either kind. Probed
/// bytes that turn out not to be a BOM are carried and delivered ahead of
/// the underlying stream, so no bytes are ever lost.
pub struct BomAwareFileReader {
    inner: BufReader<File>,
    mode: OpenMode,
    /// Whether the one-time BOM probe has run on this handle.
    checked: bool,
    /// Probed bytes that were not a BOM, not yet delivered to the caller.
    carry: [u8; 3],
    carry_len: u8,
    carry_pos: u8,
}

impl BomAwareFileReader {
    /// Open `path` with an fopen-style mode string (`"r"` or `"rb"`).
    ///
    /// The handle starts unchecked; the BOM probe runs on the first read.
    pub fn open(path: impl AsRef<Path>, mode: &str) -> Result<BomAwareFileReader, OpenError> {
        let (file, mode) = crate::open_file(path.as_ref(), mode)?;
        Ok(BomAwareFileReader {
            inner: BufReader::new(file),
            mode,
            checked: false,
            carry: [0; 3],
            carry_len: 0,
            carry_pos: 0,
        })
    }

    /// The mode this reader was opened with.
    pub fn mode(&self) -> OpenMode {
        self.mode
    }

    /// Run the one-time BOM probe.
    ///
    /// The handle is marked checked before any byte is read, so the probe
    /// can never run twice - even when it fails partway. Probed bytes that
    /// were not an exact marker match (including any read before a probe
    /// failure) go into the carry.
    fn ensure_checked(&mut self) -> Result<(), ReadError> {
        if self.checked {
            return Ok(());
        }
        self.checked = true;

        let mut probe = [0u8; UTF8_BOM.len()];
        let mut len = 0;
        let result = loop {
            if len == probe.len() {
                break Ok(());
            }
            match self.inner.read(&mut probe[len..]) {
                Ok(0) => break Ok(()),
                Ok(n) => len += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => break Err(e),
            }
        };

        if len == probe.len() && probe == UTF8_BOM {
            log::trace!("skipped UTF-8 BOM");
        } else {
            self.carry[..len].copy_from_slice(&probe[..len]);
            self.carry_len = len as u8;
        }
        result.map_err(ReadError::from)
    }

    /// Move carried bytes into `buf`, stopping after a newline when
    /// `line_oriented` is set. Returns bytes copied and whether a newline
    /// ended the copy.
    fn drain_carry(&mut self, buf: &mut [u8], line_oriented: bool) -> (usize, bool) {
        let mut filled = 0;
        while filled < buf.len() && self.carry_pos < self.carry_len {
            let b = self.carry[self.carry_pos as usize];
            self.carry_pos += 1;
            buf[filled] = b;
            filled += 1;
            if line_oriented && b == b'\n' {
                return (filled, true);
            }
        }
        (filled, false)
    }
}

impl TextRead for BomAwareFileReader {
    fn read_line(&mut self, buf: &mut [u8]) -> Result<usize, ReadError> {
        self.ensure_checked()?;
        let (filled, done) = self.drain_carry(buf, true);
        if done || filled == buf.len() {
            return Ok(filled);
        }
        Ok(fill::fill_line(&mut self.inner, buf, filled)?)
    }

    fn read_block(
        &mut self,
        buf: &mut [u8],
        element_size: usize,
        element_count: usize,
    ) -> Result<usize, ReadError> {
        self.ensure_checked()?;
        if element_size == 0 || element_count == 0 {
            return Ok(0);
        }
        let want = element_size.saturating_mul(element_count).min(buf.len());
        let (filled, _) = self.drain_carry(&mut buf[..want], false);
        let n = filled + fill::fill_block(&mut self.inner, &mut buf[filled..want])?;
        Ok(n / element_size)
    }
}
