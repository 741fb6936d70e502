//! zlib/deflate decompression.
//!
//! Each ARC entry is an independent zlib stream. The entry table records
//! both sizes, so the output is preallocated and the result is checked
//! against the declared size: a short or long stream is treated as a corrupt
//! entry rather than silently truncated.

use std::io::{Read, Write};

use flate2::Compression;
use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;

use crate::{Error, Result};

/// Inflate `data`, requiring exactly `decompressed_size` bytes of output.
///
/// Returns [`Error::Decompress`] for a corrupt stream and
/// [`Error::SizeMismatch`] when the stream inflates to a different length.
pub fn decompress_with_size(data: &[u8], decompressed_size: usize) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(decompressed_size);
    // One extra byte is enough to detect an oversized stream without
    // inflating all of it.
    ZlibDecoder::new(data)
        .take(decompressed_size as u64 + 1)
        .read_to_end(&mut out)
        .map_err(Error::Decompress)?;
    if out.len() != decompressed_size {
        return Err(Error::SizeMismatch {
            expected: decompressed_size,
            actual: out.len(),
        });
    }
    Ok(out)
}

/// Deflate `data` into a zlib stream at the default level.
///
/// Used to build archives; the game's own archives are only ever read.
pub fn compress(data: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    Ok(encoder.finish()?)
}
