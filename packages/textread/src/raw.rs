//! Passthrough file reader.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use textread_core::{OpenError, OpenMode, ReadError, TextRead};

use crate::fill;

/// File reader that delivers the file's bytes exactly as stored.
///
/// No inspection and no transformation: a file that starts with a UTF-8 BOM
/// surfaces the marker to the caller unmodified.
pub struct RawFileReader {
    inner: BufReader<File>,
    mode: OpenMode,
}

impl RawFileReader {
    /// Open `path` with an fopen-style mode string (`"r"` or `"rb"`).
    pub fn open(path: impl AsRef<Path>, mode: &str) -> Result<RawFileReader, OpenError> {
        let (file, mode) = crate::open_file(path.as_ref(), mode)?;
        Ok(RawFileReader {
            inner: BufReader::new(file),
            mode,
        })
    }

    /// The mode this reader was opened with.
    pub fn mode(&self) -> OpenMode {
        self.mode
    }
}

impl TextRead for RawFileReader {
    fn read_line(&mut self, buf: &mut [u8]) -> Result<usize, ReadError> {
        Ok(fill::fill_line(&mut self.inner, buf, 0)?)
    }

    fn read_block(
        &mut self,
        buf: &mut [u8],
        element_size: usize,
        element_count: usize,
    ) -> Result<usize, ReadError> {
        if element_size == 0 || element_count == 0 {
            return Ok(0);
        }
        let want = element_size.saturating_mul(element_count).min(buf.len());
        let n = fill::fill_block(&mut self.inner, &mut buf[..want])?;
        Ok(n / element_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn fixture(bytes: &[u8]) -> NamedTempFile {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(bytes).unwrap();
        temp.flush().unwrap();
        temp
    }

    #[test]
    fn read_line_includes_newline() {
        let temp = fixture(b"hello\nworld\n");
        let mut reader = RawFileReader::open(temp.path(), "r").unwrap();

        let mut buf = [0u8; 64];
        let n = reader.read_line(&mut buf).unwrap();
        assert_eq!(&buf[..n], b"hello\n");

        let n = reader.read_line(&mut buf).unwrap();
        assert_eq!(&buf[..n], b"world\n");

        assert_eq!(reader.read_line(&mut buf).unwrap(), 0);
    }

    #[test]
    fn read_line_respects_buffer_cap() {
        let temp = fixture(b"abcdef\n");
        let mut reader = RawFileReader::open(temp.path(), "r").unwrap();

        let mut buf = [0u8; 4];
        let n = reader.read_line(&mut buf).unwrap();
        assert_eq!(&buf[..n], b"abcd");

        let n = reader.read_line(&mut buf).unwrap();
        assert_eq!(&buf[..n], b"ef\n");
    }

    #[test]
    fn bom_is_surfaced_unmodified() {
        let temp = fixture(&[0xEF, 0xBB, 0xBF, b'H', b'i', b'\n']);
        let mut reader = RawFileReader::open(temp.path(), "r").unwrap();

        let mut buf = [0u8; 16];
        let n = reader.read_line(&mut buf).unwrap();
        assert_eq!(&buf[..n], &[0xEF, 0xBB, 0xBF, b'H', b'i', b'\n']);
    }

    #[test]
    fn read_block_counts_complete_elements() {
        let temp = fixture(b"0123456789");
        let mut reader = RawFileReader::open(temp.path(), "rb").unwrap();

        let mut buf = [0u8; 16];
        let n = reader.read_block(&mut buf, 4, 2).unwrap();
        assert_eq!(n, 2);
        assert_eq!(&buf[..8], b"01234567");

        // Two bytes remain - not enough for a complete 4-byte element, but
        // they are still delivered and consumed.
        let n = reader.read_block(&mut buf, 4, 2).unwrap();
        assert_eq!(n, 0);
        assert_eq!(&buf[..2], b"89");

        assert_eq!(reader.read_block(&mut buf, 1, 1).unwrap(), 0);
    }

    #[test]
    fn read_block_bounded_by_buffer() {
        let temp = fixture(b"0123456789");
        let mut reader = RawFileReader::open(temp.path(), "rb").unwrap();

        let mut buf = [0u8; 4];
        let n = reader.read_block(&mut buf, 2, 8).unwrap();
        assert_eq!(n, 2);
        assert_eq!(&buf, b"0123");
    }

    #[test]
    fn read_block_zero_sizes() {
        let temp = fixture(b"data");
        let mut reader = RawFileReader::open(temp.path(), "rb").unwrap();

        let mut buf = [0u8; 8];
        assert_eq!(reader.read_block(&mut buf, 0, 4).unwrap(), 0);
        assert_eq!(reader.read_block(&mut buf, 4, 0).unwrap(), 0);
    }

    #[test]
    fn empty_file_is_end_of_stream() {
        let temp = fixture(b"");
        let mut reader = RawFileReader::open(temp.path(), "r").unwrap();

        let mut buf = [0u8; 8];
        assert_eq!(reader.read_line(&mut buf).unwrap(), 0);
        assert_eq!(reader.read_block(&mut buf, 1, 8).unwrap(), 0);
    }

    #[test]
    fn open_nonexistent_path_errors() {
        let result = RawFileReader::open("/nonexistent/path/12345", "r");
        assert!(matches!(result, Err(OpenError::Io { .. })));
    }

    #[test]
    fn open_invalid_mode_errors() {
        let temp = fixture(b"data");
        let result = RawFileReader::open(temp.path(), "w");
        assert!(matches!(result, Err(OpenError::InvalidMode { .. })));
    }

    #[test]
    fn mode_is_recorded() {
        let temp = fixture(b"data");
        let reader = RawFileReader::open(temp.path(), "rb").unwrap();
        assert_eq!(reader.mode(), OpenMode::Binary);
    }
}
