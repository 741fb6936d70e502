//! Parsers for the game's binary asset formats.
//!
//! Each submodule targets one format family. All parsers follow the same
//! conventions:
//!
//! * **In-memory input** - `parse` takes the whole file as a byte slice and
//!   reads it through [`crate::cursor::ByteCursor`]. Archive bodies are
//!   borrowed when they need no decryption.
//! * **Hard and soft failures are separate** - a bad magic, version or
//!   out-of-bounds offset is an [`crate::Error`]. Anomalies that only affect
//!   part of a file (one mesh, one binding) are reported to a
//!   [`crate::diagnostics::DiagnosticSink`] and decoding continues.
//! * **Crypto is external** - encrypted archives are decrypted through a
//!   caller-supplied [`crate::crypto::ArchiveCipher`].
//!
//! ## Format overview
//!
//! | Module | Format | Description |
//! |--------|--------|-------------|
//! | [`arc`] | ARC / ARCC | Resource archive; zlib entries, optionally encrypted |
//! | [`model`] | MOD | Skinned meshes, skeleton and material names |
//! | [`mrl`] | MRL | Material table with texture and property bindings |
//! | [`clc`] | CLC | Single tint color |

pub mod arc;
pub mod clc;
pub mod model;
pub mod mrl;
