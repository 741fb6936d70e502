//! Resource type registry.
//!
//! Archive entries do not carry a file extension; they carry a 31-bit hash of
//! the engine's resource *type name* (`rModel`, `rTexture`, ...). This module
//! provides the hash function and a static table of every type the extractor
//! knows how to name.
//!
//! ## Type hash
//! ```text
//! type_hash(name) = !crc32(utf8(name)) & 0x7FFF_FFFF
//! ```
//! `crc32` is the standard reflected CRC-32 (polynomial `0xEDB88320`), i.e.
//! the same checksum zlib computes. Material names use the unmasked variant,
//! see [`name_hash`].
//!
//! ## Extension aliasing
//! No two registered names share a hash, but several names share an
//! extension: `cResource`, `rMovie`, `rConstraint`, `rSoundSourcePC` and
//! `cInstancingResource` all map to `.ext`, three flag/font types map to
//! `.gfd`, and `uSceneCapture::rCaptureTexture` shares `.tex` with
//! `rTexture`. This mirrors the engine's own type aliasing.

mod table;

use flate2::Crc;
use serde::Serialize;

use table::TYPES;

/// One registry row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TypeInfo {
    /// [`type_hash`] of `name`.
    pub hash: u32,
    /// Engine type name.
    pub name: &'static str,
    /// Extension including the leading dot; may contain several dots
    /// (`.engr.xml`).
    pub extension: &'static str,
}

impl TypeInfo {
    pub(crate) const fn new(hash: u32, name: &'static str, extension: &'static str) -> Self {
        Self {
            hash,
            name,
            extension,
        }
    }
}

/// Hash of `rTexture`; also the discriminator of path-bearing records in
/// material texture tables.
pub const TEXTURE_TYPE_HASH: u32 = 0x241F_5DEB;

/// Extension of archive containers, excluded from loose-file copying.
pub const ARCHIVE_EXTENSION: &str = ".arc";

/// Standard CRC-32 of `bytes`.
#[inline]
fn crc32(bytes: &[u8]) -> u32 {
    let mut crc = Crc::new();
    crc.update(bytes);
    crc.sum()
}

/// 31-bit type hash of a resource type name.
pub fn type_hash(name: &str) -> u32 {
    !crc32(name.as_bytes()) & 0x7FFF_FFFF
}

/// 32-bit name hash (JAMCRC) used to key materials.
pub fn name_hash(name: &str) -> u32 {
    !crc32(name.as_bytes())
}

/// Look up the registry row for a type hash.
pub fn lookup(hash: u32) -> Option<&'static TypeInfo> {
    TYPES
        .binary_search_by_key(&hash, |t| t.hash)
        .ok()
        .map(|i| &TYPES[i])
}

/// File extension for a type hash, or [`None`] for unregistered types.
pub fn extension_for(hash: u32) -> Option<&'static str> {
    lookup(hash).map(|t| t.extension)
}

/// Whether `extension` (with leading dot) is produced by any registered type.
pub fn is_known_extension(extension: &str) -> bool {
    TYPES.iter().any(|t| t.extension == extension)
}

/// All registered types, ascending by hash.
pub fn types() -> &'static [TypeInfo] {
    &TYPES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_registered_name_resolves_to_its_extension() {
        for t in types() {
            assert_eq!(type_hash(t.name), t.hash, "{}", t.name);
            assert_eq!(extension_for(type_hash(t.name)), Some(t.extension));
        }
    }

    #[test]
    fn table_is_sorted_and_unique() {
        assert_eq!(types().len(), 523);
        assert!(types().windows(2).all(|w| w[0].hash < w[1].hash));
    }

    #[test]
    fn golden_hashes() {
        assert_eq!(type_hash("rModel"), 0x58A1_5856);
        assert_eq!(type_hash("rMaterial"), 0x2749_C8A8);
        assert_eq!(type_hash("rTexture"), TEXTURE_TYPE_HASH);
        assert_eq!(extension_for(0x58A1_5856), Some(".mod"));
        assert_eq!(extension_for(type_hash("rColorLinkColor")), Some(".clc"));
        assert_eq!(extension_for(type_hash("rArchive")), Some(ARCHIVE_EXTENSION));
        assert_eq!(extension_for(type_hash("rNotARealType")), None);
    }

    #[test]
    fn aliased_names_share_an_extension() {
        let a = type_hash("rGUIFont");
        let b = type_hash("rGeneralFlagDataNative");
        assert_ne!(a, b);
        assert_eq!(extension_for(a), extension_for(b));
        assert_eq!(extension_for(type_hash("cResource")), Some(".ext"));
        assert_eq!(extension_for(type_hash("rMovie")), Some(".ext"));
        assert_eq!(
            extension_for(type_hash("uSceneCapture::rCaptureTexture")),
            extension_for(TEXTURE_TYPE_HASH)
        );
    }

    #[test]
    fn name_hash_is_unmasked_jamcrc() {
        assert_eq!(name_hash("abc"), 0xCADB_BE3D);
        assert_eq!(name_hash("abc") & 0x7FFF_FFFF, type_hash("abc"));
    }

    #[test]
    fn known_extensions() {
        assert!(is_known_extension(".mod"));
        assert!(is_known_extension(".engr.xml"));
        assert!(!is_known_extension(".xml"));
        assert!(!is_known_extension("mod"));
    }
}
