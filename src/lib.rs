//! **mhkit** - archive, model and material decoding for Monster Hunter
//! Stories 2 assets.
//!
//! # Supported formats
//! | Module | Format |
//! |--------|--------|
//! | [`formats::arc`]   | ARC / ARCC - resource archive |
//! | [`formats::model`] | MOD - mesh container |
//! | [`formats::mrl`]   | MRL - material table |
//! | [`formats::clc`]   | CLC - tint color |
//!
//! [`extract`] drives archive extraction over a whole install tree and
//! [`registry`] names the resource types archive entries carry.

pub mod compression;
pub mod crypto;
pub mod cursor;
pub mod diagnostics;
pub mod dictionary;
pub mod error;
pub mod extract;
pub mod formats;
pub mod registry;

pub use error::{Error, Result};
