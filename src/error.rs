//! Library-wide error and result types.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout mhkit.
pub type Result<T> = std::result::Result<T, Error>;

/// All errors the library can produce.
///
/// Format errors (`BufferUnderrun`, `BadMagic`, `BadVersion`, `InvalidRange`)
/// are fatal to the file being decoded. Batch drivers such as
/// [`crate::extract::extract_all`] catch them per file and move on.
#[derive(Debug, Error)]
pub enum Error {
    /// A read asked for more bytes than the buffer holds.
    #[error("buffer underrun: {needed} bytes requested at offset {offset:#x}, buffer is {len:#x} bytes")]
    BufferUnderrun {
        offset: usize,
        needed: usize,
        len: usize,
    },
    /// A magic/signature field did not match the expected value.
    #[error("bad magic: expected {expected:#010x}, found {found:#010x}")]
    BadMagic { expected: u32, found: u32 },
    /// The magic matched but the format version is not the supported one.
    #[error("bad version: expected {expected}, found {found}")]
    BadVersion { expected: u32, found: u32 },
    /// The archive magic is neither the plain nor the encrypted marker.
    #[error("unrecognized archive magic {magic:#010x}")]
    UnrecognizedArchive { magic: u32 },
    /// The external cipher reported failure.
    #[error("archive decryption failed")]
    Decrypt,
    /// The deflate stream is corrupt.
    #[error("decompression failed: {0}")]
    Decompress(#[source] io::Error),
    /// A decompressed payload has a different size than the entry declares.
    #[error("decompressed size mismatch: expected {expected} bytes, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },
    /// An offset, index or count field points outside its valid region.
    #[error("invalid range: {0}")]
    InvalidRange(&'static str),
    /// An input directory does not exist or is not a directory.
    #[error("cannot access directory {}", .0.display())]
    MissingDirectory(PathBuf),
    /// JSON (de)serialization failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    /// An underlying I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
