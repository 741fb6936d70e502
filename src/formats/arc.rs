//! ARC - MT Framework resource archive.
//!
//! Bundles many typed resources, each compressed independently with zlib.
//! Ships either in the clear (`"ARC\0"`) or with everything after the header
//! encrypted (`"ARCC"`).
//!
//! ## Layout
//! ```text
//! [0x00] Magic "ARC\0" or "ARCC"       (4 bytes)
//! [0x04] Version                       (u16 LE)
//! [0x06] EntryCount                    (u16 LE)
//! [0x08] Body (encrypted as a whole for "ARCC")
//!        Entry table (EntryCount × 0x90 bytes)
//!        Payloads
//! ```
//!
//! ## Entry (0x90 bytes, relative to the body)
//! ```text
//! [0x00] Path, NUL-terminated, `\` separated, no extension (0x80 bytes)
//! [0x80] TypeHash          (u32 LE) - see [`crate::registry`]
//! [0x84] CompressedSize    (u32 LE)
//! [0x88] DecompressedSize  (u32 LE)
//! [0x8C] Offset            (u32 LE) - from the start of the file
//! ```
//!
//! Offsets count the 8-byte header, so they are rebased onto the body by
//! subtracting [`HEADER_SIZE`].
//!
//! ## Entry filtering
//! Entries whose type hash is not registered cannot be given an extension.
//! They are counted in [`Archive::unresolved`] and otherwise dropped.

use std::borrow::Cow;

use crate::compression::deflate;
use crate::crypto::{ARC_KEY, ArchiveCipher};
use crate::cursor::ByteCursor;
use crate::registry;
use crate::{Error, Result};

/// Magic of a plaintext archive.
pub const ARC_MAGIC: u32 = u32::from_le_bytes(*b"ARC\0");
/// Magic of an encrypted archive.
pub const ARCC_MAGIC: u32 = u32::from_le_bytes(*b"ARCC");
/// Size of the container header preceding the body.
pub const HEADER_SIZE: usize = 8;
/// Size of one entry table record.
pub const ENTRY_SIZE: usize = 0x90;
const PATH_SLOT_SIZE: usize = 0x80;

/// How the archive body is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArchiveKind {
    Plain,
    Encrypted,
}

/// A resolved archive entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    /// Path without extension, `/` separated.
    pub path: String,
    /// Resource type hash.
    pub type_hash: u32,
    /// Extension registered for `type_hash`, with leading dot.
    pub extension: &'static str,
    pub compressed_size: u32,
    pub decompressed_size: u32,
    /// Payload offset relative to the archive body.
    pub payload_offset: usize,
}

impl ArchiveEntry {
    /// Output path relative to the extraction root: path plus extension.
    pub fn relative_path(&self) -> String {
        format!("{}{}", self.path, self.extension)
    }
}

/// Parsed archive holding its (decrypted) body.
#[derive(Debug)]
pub struct Archive<'a> {
    pub kind: ArchiveKind,
    pub version: u16,
    /// Entries with a registered type, in table order.
    pub entries: Vec<ArchiveEntry>,
    /// Number of entries dropped for having an unregistered type hash.
    pub unresolved: usize,
    body: Cow<'a, [u8]>,
}

impl<'a> Archive<'a> {
    /// Parse an archive file held in memory.
    ///
    /// Plain archives borrow `data`; encrypted ones copy the body and decrypt
    /// it with `cipher`. Fails with [`Error::UnrecognizedArchive`] for any
    /// other magic and [`Error::Decrypt`] when the cipher gives up.
    pub fn parse(data: &'a [u8], cipher: &mut dyn ArchiveCipher) -> Result<Self> {
        let mut header = ByteCursor::new(data);
        let magic = header.u32()?;
        let version = header.u16()?;
        let entry_count = header.u16()? as usize;

        let (kind, body) = match magic {
            ARC_MAGIC => (ArchiveKind::Plain, Cow::Borrowed(&data[HEADER_SIZE..])),
            ARCC_MAGIC => {
                let mut body = data[HEADER_SIZE..].to_vec();
                if !cipher.decrypt(&mut body, ARC_KEY) {
                    return Err(Error::Decrypt);
                }
                (ArchiveKind::Encrypted, Cow::Owned(body))
            }
            _ => return Err(Error::UnrecognizedArchive { magic }),
        };

        let mut r = ByteCursor::new(&body);
        let mut entries = Vec::with_capacity(entry_count);
        let mut unresolved = 0;
        for _ in 0..entry_count {
            let start = r.position();
            let path = r.cstring()?.replace('\\', "/");
            r.seek(start + PATH_SLOT_SIZE)?;
            let type_hash = r.u32()?;
            let compressed_size = r.u32()?;
            let decompressed_size = r.u32()?;
            let stored_offset = r.u32()? as usize;

            let Some(extension) = registry::extension_for(type_hash) else {
                unresolved += 1;
                continue;
            };
            let payload_offset = stored_offset
                .checked_sub(HEADER_SIZE)
                .ok_or(Error::InvalidRange("entry offset inside archive header"))?;
            entries.push(ArchiveEntry {
                path,
                type_hash,
                extension,
                compressed_size,
                decompressed_size,
                payload_offset,
            });
        }

        Ok(Self {
            kind,
            version,
            entries,
            unresolved,
            body,
        })
    }

    /// The archive body after the header (decrypted if necessary).
    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Borrow the compressed payload of `entry`.
    pub fn raw_entry(&self, entry: &ArchiveEntry) -> Result<&[u8]> {
        let mut r = ByteCursor::new(&self.body);
        r.seek(entry.payload_offset)?;
        r.bytes(entry.compressed_size as usize)
    }

    /// Decompress the payload of `entry`.
    pub fn read_entry(&self, entry: &ArchiveEntry) -> Result<Vec<u8>> {
        deflate::decompress_with_size(self.raw_entry(entry)?, entry.decompressed_size as usize)
    }

    /// Find an entry by its extension-less path.
    pub fn get_entry(&self, path: &str) -> Option<&ArchiveEntry> {
        self.entries.iter().find(|e| e.path == path)
    }
}

/// Build a plaintext archive from `(path, type hash, contents)` triples.
///
/// Paths are written verbatim and must fit the 128-byte slot including the
/// terminator. Contents are zlib-compressed.
pub fn pack(files: &[(&str, u32, &[u8])]) -> Result<Vec<u8>> {
    let count = u16::try_from(files.len()).map_err(|_| Error::InvalidRange("too many entries"))?;
    let mut table = Vec::with_capacity(files.len() * ENTRY_SIZE);
    let mut payloads = Vec::new();
    let payload_base = HEADER_SIZE + files.len() * ENTRY_SIZE;

    for &(path, type_hash, contents) in files {
        if path.len() >= PATH_SLOT_SIZE {
            return Err(Error::InvalidRange("entry path longer than its slot"));
        }
        let packed = deflate::compress(contents)?;
        let offset = payload_base + payloads.len();

        let mut slot = [0u8; PATH_SLOT_SIZE];
        slot[..path.len()].copy_from_slice(path.as_bytes());
        table.extend_from_slice(&slot);
        table.extend_from_slice(&type_hash.to_le_bytes());
        table.extend_from_slice(&to_u32(packed.len())?.to_le_bytes());
        table.extend_from_slice(&to_u32(contents.len())?.to_le_bytes());
        table.extend_from_slice(&to_u32(offset)?.to_le_bytes());
        payloads.extend_from_slice(&packed);
    }

    let mut out = Vec::with_capacity(payload_base + payloads.len());
    out.extend_from_slice(&ARC_MAGIC.to_le_bytes());
    out.extend_from_slice(&7u16.to_le_bytes());
    out.extend_from_slice(&count.to_le_bytes());
    out.extend_from_slice(&table);
    out.extend_from_slice(&payloads);
    Ok(out)
}

fn to_u32(v: usize) -> Result<u32> {
    u32::try_from(v).map_err(|_| Error::InvalidRange("archive larger than 4 GiB"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::NoCipher;
    use crate::registry::type_hash;

    #[test]
    fn plain_archive_round_trip() {
        let model = type_hash("rModel");
        let data = pack(&[
            ("chr\\em096\\mod\\em096", model, b"model bytes".as_slice()),
            ("chr\\unknown", 0x1234_5678, b"dropped".as_slice()),
        ])
        .unwrap();

        let arc = Archive::parse(&data, &mut NoCipher).unwrap();
        assert_eq!(arc.kind, ArchiveKind::Plain);
        assert_eq!(arc.unresolved, 1);
        assert_eq!(arc.entries.len(), 1);

        let entry = &arc.entries[0];
        assert_eq!(entry.path, "chr/em096/mod/em096");
        assert_eq!(entry.relative_path(), "chr/em096/mod/em096.mod");
        assert_eq!(entry.decompressed_size, 11);
        assert_eq!(arc.read_entry(entry).unwrap(), b"model bytes");
        assert!(arc.get_entry("chr/em096/mod/em096").is_some());
    }

    #[test]
    fn encrypted_archive_uses_cipher() {
        let plain = pack(&[("a", type_hash("rTexture"), b"texels".as_slice())]).unwrap();
        let mut encrypted = plain.clone();
        encrypted[..4].copy_from_slice(b"ARCC");
        encrypted[HEADER_SIZE..].iter_mut().for_each(|b| *b ^= 0x5A);

        let mut seen_key = Vec::new();
        let mut xor = |buf: &mut [u8], key: &[u8]| {
            seen_key = key.to_vec();
            buf.iter_mut().for_each(|b| *b ^= 0x5A);
            true
        };
        let arc = Archive::parse(&encrypted, &mut xor).unwrap();
        assert_eq!(arc.kind, ArchiveKind::Encrypted);
        assert_eq!(arc.read_entry(&arc.entries[0]).unwrap(), b"texels");
        assert_eq!(seen_key, ARC_KEY);
    }

    #[test]
    fn decrypt_failure_is_reported() {
        let mut data = pack(&[]).unwrap();
        data[..4].copy_from_slice(b"ARCC");
        assert!(matches!(
            Archive::parse(&data, &mut NoCipher),
            Err(Error::Decrypt)
        ));
    }

    #[test]
    fn unknown_magic_is_rejected() {
        let data = b"PACK\x07\x00\x00\x00";
        assert!(matches!(
            Archive::parse(data, &mut NoCipher),
            Err(Error::UnrecognizedArchive { magic }) if magic == u32::from_le_bytes(*b"PACK")
        ));
    }

    #[test]
    fn truncated_entry_table_is_an_underrun() {
        let mut data = pack(&[("a", type_hash("rModel"), b"x".as_slice())]).unwrap();
        data.truncate(HEADER_SIZE + 0x84);
        assert!(matches!(
            Archive::parse(&data, &mut NoCipher),
            Err(Error::BufferUnderrun { .. })
        ));
    }
}
