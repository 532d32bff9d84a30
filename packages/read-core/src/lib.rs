//! textread-core: the primitive read surface for text files.
//!
//! This is the narrow waist of the textread stack. Everything at this level
//! is the three-primitive contract - open, read-line, read-block - with no
//! file I/O behind it. Concrete file-backed readers live in the `textread`
//! crate; configuration and data-table parsers program against [`TextRead`]
//! and never name a concrete reader.
//!
//! End-of-stream is not an error anywhere in this crate: both read
//! primitives signal it as `Ok(0)`.
//!
//! # Example
//!
//! ```rust
//! use textread_core::{ReadError, TextRead};
//!
//! struct MemReader {
//!     data: Vec<u8>,
//!     pos: usize,
//! }
//!
//! impl TextRead for MemReader {
//!     fn read_line(&mut self, buf: &mut [u8]) -> Result<usize, ReadError> {
//!         let mut filled = 0;
//!         while filled < buf.len() && self.pos < self.data.len() {
//!             buf[filled] = self.data[self.pos];
//!             self.pos += 1;
//!             filled += 1;
//!             if buf[filled - 1] == b'\n' {
//!                 break;
//!             }
//!         }
//!         Ok(filled)
//!     }
//!
//!     fn read_block(
//!         &mut self,
//!         buf: &mut [u8],
//!         element_size: usize,
//!         element_count: usize,
//!     ) -> Result<usize, ReadError> {
//!         if element_size == 0 || element_count == 0 {
//!             return Ok(0);
//!         }
//!         let want = element_size.saturating_mul(element_count).min(buf.len());
//!         let rest = &self.data[self.pos..];
//!         let take = want.min(rest.len());
//!         buf[..take].copy_from_slice(&rest[..take]);
//!         self.pos += take;
//!         Ok(take / element_size)
//!     }
//! }
//! ```

mod error;
mod mode;
mod traits;

pub use error::{OpenError, ReadError};
pub use mode::OpenMode;
pub use traits::TextRead;
