//! Compression primitives.
//!
//! Archive payloads are zlib-wrapped deflate streams whose decompressed size
//! is recorded in the archive entry table.
//!
//! ## Submodules
//!
//! | Module | Algorithm | Typical use in mhkit |
//! |--------|-----------|----------------------|
//! | [`deflate`] | zlib / deflate | ARC entry payloads |

pub mod deflate;
