//! Resource-name dictionary for material bindings.
//!
//! Material resource bindings identify their texture slot or property by a
//! 32-bit hash of its name. The names themselves are not stored in the game
//! data; they come from a dictionary built offline and shipped alongside the
//! tool.
//!
//! ## File format
//! A JSON object mapping hex-formatted hashes to names:
//! ```json
//! {
//!     "0x1b3b3a47": "tAlbedoMap",
//!     "0x2a8ae1e3": "tNormalMap"
//! }
//! ```
//! Keys may be written with or without the `0x` prefix and with any amount
//! of zero padding. Keys that are not valid hex are skipped so that
//! hand-edited dictionaries stay loadable.

use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::Result;

/// Read-only hash → name mapping consumed by [`crate::formats::mrl`].
#[derive(Debug, Default, Clone)]
pub struct ResourceDictionary {
    names: HashMap<u32, String>,
}

impl ResourceDictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load entries from a JSON reader, adding to any already present.
    pub fn load_json<R: Read>(&mut self, reader: R) -> Result<()> {
        let raw: BTreeMap<String, String> = serde_json::from_reader(BufReader::new(reader))?;
        for (key, name) in raw {
            if let Some(hash) = parse_hash(&key) {
                self.names.insert(hash, name);
            }
        }
        Ok(())
    }

    /// Open and load a JSON dictionary file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let mut dict = Self::new();
        dict.load_json(File::open(path)?)?;
        Ok(dict)
    }

    /// Add or replace one entry.
    pub fn insert(&mut self, hash: u32, name: impl Into<String>) {
        self.names.insert(hash, name.into());
    }

    /// Resolve a resource hash.
    pub fn get(&self, hash: u32) -> Option<&str> {
        self.names.get(&hash).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl FromIterator<(u32, String)> for ResourceDictionary {
    fn from_iter<I: IntoIterator<Item = (u32, String)>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}

fn parse_hash(key: &str) -> Option<u32> {
    let key = key.trim();
    let digits = key
        .strip_prefix("0x")
        .or_else(|| key.strip_prefix("0X"))
        .unwrap_or(key);
    u32::from_str_radix(digits, 16).ok()
}
