//! Archive decryption contract.
//!
//! Encrypted ARC containers (`"ARCC"` magic) carry their entry table and
//! payloads behind a symmetric block cipher keyed with [`ARC_KEY`]. The
//! cipher itself is not part of this crate: callers plug one in through
//! [`ArchiveCipher`], whose contract is:
//!
//! ```text
//! decrypt(buffer: &mut [u8], key: &[u8]) -> bool
//! ```
//!
//! The buffer is everything after the 8-byte container header and is
//! decrypted in place. Returning `false` marks the archive as undecodable;
//! the extractor reports it and moves on to the next archive. No state is
//! retained between calls.
//!
//! Any `FnMut(&mut [u8], &[u8]) -> bool` closure is an [`ArchiveCipher`], so
//! a binding to an external library can be passed directly.

/// Key used for every encrypted archive shipped with the game.
pub const ARC_KEY: &[u8] = b"QZHaM;-5:)dV#";

/// In-place decryption of an archive body.
pub trait ArchiveCipher {
    /// Decrypt `buffer` in place with `key`. Returns `false` on failure.
    fn decrypt(&mut self, buffer: &mut [u8], key: &[u8]) -> bool;
}

impl<F> ArchiveCipher for F
where
    F: FnMut(&mut [u8], &[u8]) -> bool,
{
    fn decrypt(&mut self, buffer: &mut [u8], key: &[u8]) -> bool {
        self(buffer, key)
    }
}

/// Cipher stand-in for runs without a decryption backend.
///
/// Always fails, so encrypted archives are reported and skipped while plain
/// ones are still extracted.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoCipher;

impl ArchiveCipher for NoCipher {
    fn decrypt(&mut self, _buffer: &mut [u8], _key: &[u8]) -> bool {
        false
    }
}
