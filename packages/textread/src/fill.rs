//! Shared read loops for the file-backed readers.

use std::io::{self, BufRead, Read};

/// Fill `buf` from `filled` onward, stopping after the first `\n`, a full
/// buffer, or end-of-stream. Returns the total number of bytes in `buf`.
pub(crate) fn fill_line<R: BufRead>(
    reader: &mut R,
    buf: &mut [u8],
    mut filled: usize,
) -> io::Result<usize> {
    while filled < buf.len() {
        let available = match reader.fill_buf() {
            Ok(available) => available,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        if available.is_empty() {
            break;
        }
        let room = buf.len() - filled;
        let (take, done) = match available.iter().position(|&b| b == b'\n') {
            Some(i) if i < room => (i + 1, true),
            _ => (available.len().min(room), false),
        };
        buf[filled..filled + take].copy_from_slice(&available[..take]);
        reader.consume(take);
        filled += take;
        if done {
            break;
        }
    }
    Ok(filled)
}

/// Fill `buf` completely unless the stream ends first. Returns bytes read.
pub(crate) fn fill_block<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
