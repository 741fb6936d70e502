//! Structured reporting of recoverable decode anomalies.
//!
//! Decoders never abort on soft failures (an unknown vertex encoding, a
//! material resource hash missing from the dictionary, ...). They describe
//! the anomaly as a [`Diagnostic`] and hand it to the [`DiagnosticSink`]
//! passed in by the caller, then carry on.
//!
//! * [`TracingSink`] forwards to `tracing`: expected skips at `debug`,
//!   everything else at `warn`.
//! * `Vec<Diagnostic>` collects reports for inspection.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

/// A recoverable anomaly found while decoding.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// Archive magic is neither plain nor encrypted.
    UnrecognizedArchive { path: PathBuf, magic: u32 },
    /// The cipher rejected an encrypted archive.
    DecryptFailed { path: PathBuf },
    /// An archive could not be decoded at all.
    ArchiveFailed { path: PathBuf, reason: String },
    /// One entry of an otherwise readable archive could not be extracted.
    EntryFailed { path: String, reason: String },
    /// A mesh uses a vertex encoding outside the known set.
    UnsupportedEncoding { mesh: usize, tag: u32 },
    /// A mesh uses a known encoding that carries no renderable geometry.
    SkippedEncoding { mesh: usize, tag: u32 },
    /// A bone names a parent that has not been defined before it.
    UnresolvedParent { bone: usize, parent: u8 },
    /// A texture binding's resource hash is absent from the dictionary.
    UnknownTextureSlot { material: u32, hash: u32 },
    /// A property binding's resource hash is absent from the dictionary.
    /// Property names are expected to always resolve.
    UnknownProperty { material: u32, hash: u32 },
    /// A texture binding points outside the texture path table.
    TextureIndexOutOfRange { material: u32, index: u32 },
    /// A model material has no record with a matching name hash.
    UnmatchedMaterial { name: String, hash: u32 },
    /// A texture referenced by a material is not on disk.
    MissingTexture { path: PathBuf },
}

impl Diagnostic {
    /// Whether this report describes an expected, benign skip.
    pub fn is_expected(&self) -> bool {
        matches!(self, Diagnostic::SkippedEncoding { .. })
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnrecognizedArchive { path, magic } => write!(
                f,
                "{} is not a recognized ARC file (magic {magic:#010x})",
                path.display()
            ),
            Diagnostic::DecryptFailed { path } => {
                write!(f, "failed to decrypt {}", path.display())
            }
            Diagnostic::ArchiveFailed { path, reason } => {
                write!(f, "skipping archive {}: {reason}", path.display())
            }
            Diagnostic::EntryFailed { path, reason } => {
                write!(f, "skipping entry {path}: {reason}")
            }
            Diagnostic::UnsupportedEncoding { mesh, tag } => {
                write!(f, "mesh {mesh}: encoding not supported: {tag:#010x}")
            }
            Diagnostic::SkippedEncoding { mesh, tag } => {
                write!(f, "mesh {mesh}: skipping non-geometry encoding {tag:#010x}")
            }
            Diagnostic::UnresolvedParent { bone, parent } => {
                write!(f, "bone {bone}: parent {parent} is not defined yet, attaching to root")
            }
            Diagnostic::UnknownTextureSlot { material, hash } => {
                write!(f, "material {material:#010x}: unknown texture slot {hash:#x}")
            }
            Diagnostic::UnknownProperty { material, hash } => {
                write!(f, "material {material:#010x}: unknown property {hash:#x}")
            }
            Diagnostic::TextureIndexOutOfRange { material, index } => {
                write!(f, "material {material:#010x}: texture index {index} out of range")
            }
            Diagnostic::UnmatchedMaterial { name, hash } => {
                write!(f, "material {name} ({hash:#010x}) has no definition")
            }
            Diagnostic::MissingTexture { path } => {
                write!(f, "texture {} not found", path.display())
            }
        }
    }
}

/// Receiver for [`Diagnostic`]s.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Forwards diagnostics to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        if diagnostic.is_expected() {
            tracing::debug!("{diagnostic}");
        } else {
            tracing::warn!("{diagnostic}");
        }
    }
}
