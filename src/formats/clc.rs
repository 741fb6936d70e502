//! CLC - tint color record.
//!
//! ```text
//! [0x00] Magic "CLC\0"   (u32 LE)
//! [0x04] Unknown         (u32)
//! [0x08] Reserved        (3 bytes)
//! [0x0B] R, G, B         (3 × u8)
//! ```

use std::path::{Path, PathBuf};

use serde::Serialize;
use walkdir::WalkDir;

use crate::cursor::ByteCursor;
use crate::{Error, Result};

/// `"CLC\0"` as a little-endian `u32`.
pub const CLC_MAGIC: u32 = 0x0043_4C43;
/// Tint file extension, without the dot.
pub const CLC_EXTENSION: &str = "clc";

/// Normalised RGB tint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TintColor {
    pub rgb: [f32; 3],
}

impl TintColor {
    pub fn parse(data: &[u8]) -> Result<Self> {
        let mut r = ByteCursor::new(data);
        let magic = r.u32()?;
        if magic != CLC_MAGIC {
            return Err(Error::BadMagic {
                expected: CLC_MAGIC,
                found: magic,
            });
        }
        let _unk = r.u32()?;
        let _reserved: [u8; 3] = r.array()?;
        let [red, green, blue]: [u8; 3] = r.array()?;
        Ok(Self {
            rgb: [red, green, blue].map(|c| c as f32 / 255.0),
        })
    }

    /// The tint with an opaque alpha channel.
    pub fn rgba(&self) -> [f32; 4] {
        let [r, g, b] = self.rgb;
        [r, g, b, 1.0]
    }
}

/// Find the tint file that applies to assets in `dir`.
///
/// Looks in `dir` itself, then anywhere below it, then anywhere below its
/// parent, and returns the shortest matching path of the first search that
/// finds one.
pub fn find_tint_file(dir: &Path) -> Option<PathBuf> {
    let searches = [
        (dir, Some(1)),
        (dir, None),
        (dir.parent().unwrap_or(dir), None),
    ];
    searches
        .into_iter()
        .find_map(|(root, depth)| shortest(find_in(root, depth)))
}

fn find_in(root: &Path, max_depth: Option<usize>) -> Vec<PathBuf> {
    let mut walk = WalkDir::new(root).follow_links(false);
    if let Some(depth) = max_depth {
        walk = walk.max_depth(depth);
    }
    walk.into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.path().extension().and_then(|x| x.to_str()) == Some(CLC_EXTENSION))
        .map(|e| e.into_path())
        .collect()
}

fn shortest(mut paths: Vec<PathBuf>) -> Option<PathBuf> {
    paths.sort_by(|a, b| {
        let (la, lb) = (a.as_os_str().len(), b.as_os_str().len());
        la.cmp(&lb).then_with(|| a.cmp(b))
    });
    paths.into_iter().next()
}
