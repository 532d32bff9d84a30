//! The core trait for the read surface.

use crate::ReadError;

/// The uniform read surface over an open text file.
///
/// One trait carries both read primitives so a build binds them to a single
/// implementation as a unit - a reader cannot mix one behavior for line
/// reads with another for block reads.
///
/// # Object Safety
///
/// This trait is object-safe: you can use `Box<dyn TextRead>`.
pub trait TextRead: Send + Sync {
    /// Read bytes up to and including the next `\n`.
    ///
    /// Stops at the first of: a newline (included in the output), a full
    /// buffer, or end-of-stream. The buffer length is the maximum read size;
    /// an empty buffer always reads zero bytes.
    ///
    /// # Returns
    ///
    /// * `Ok(0)` - End-of-stream (not an error condition).
    /// * `Ok(n)` - `n` bytes were written to the front of `buf`.
    /// * `Err(ReadError)` - An I/O failure occurred.
    fn read_line(&mut self, buf: &mut [u8]) -> Result<usize, ReadError>;

    /// Read up to `element_count` elements of `element_size` bytes each.
    ///
    /// The read is additionally bounded by `buf.len()`. Bytes of a trailing
    /// partial element are still written to `buf` and consumed from the
    /// stream, but only complete elements are counted.
    ///
    /// # Returns
    ///
    /// * `Ok(0)` - End-of-stream, or `element_size`/`element_count` is zero.
    /// * `Ok(n)` - `n` complete elements were read.
    /// * `Err(ReadError)` - An I/O failure occurred.
    fn read_block(
        &mut self,
        buf: &mut [u8],
        element_size: usize,
        element_count: usize,
    ) -> Result<usize, ReadError>;
}

// Blanket implementations for references and boxes

impl<T: TextRead + ?Sized> TextRead for &mut T {
    fn read_line(&mut self, buf: &mut [u8]) -> Result<usize, ReadError> {
        (*self).read_line(buf)
    }

    fn read_block(
        &mut self,
        buf: &mut [u8],
        element_size: usize,
        element_count: usize,
    ) -> Result<usize, ReadError> {
        (*self).read_block(buf, element_size, element_count)
    }
}

impl<T: TextRead + ?Sized> TextRead for Box<T> {
    fn read_line(&mut self, buf: &mut [u8]) -> Result<usize, ReadError> {
        self.as_mut().read_line(buf)
    }

    fn read_block(
        &mut self,
        buf: &mut [u8],
        element_size: usize,
        element_count: usize,
    ) -> Result<usize, ReadError> {
        self.as_mut().read_block(buf, element_size, element_count)
    }
}
