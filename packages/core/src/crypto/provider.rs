//! Capability traits for crypto-agility.
//!
//! The handshake and channel logic are generic over these two traits, so the
//! concrete algorithms (Kyber512, AES-256-GCM) can be swapped without touching
//! protocol code.

use crate::crypto::keys::{KemCiphertext, KemPublicKey, SessionKey, SharedSecret};
use crate::error::CryptoError;
use rand::rngs::OsRng;
use rand_core::RngCore;
use zeroize::Zeroizing;

/// Key encapsulation mechanism (client side only).
pub trait Kem: Send + Sync + 'static {
    /// Algorithm identifier, e.g. `"Kyber512"`.
    const ALGORITHM: &'static str;
    const PUBLIC_KEY_LENGTH: usize;
    const CIPHERTEXT_LENGTH: usize;
    const SHARED_SECRET_LENGTH: usize;

    /// Encapsulates a fresh shared secret against the peer's public key.
    /// Returns the ciphertext to send to the peer and the shared secret.
    fn encapsulate(
        public_key: &KemPublicKey,
    ) -> Result<(KemCiphertext, SharedSecret), CryptoError>;
}

/// Authenticated cipher with a random per-message nonce.
pub trait Aead: Send + Sync + 'static {
    /// Algorithm identifier, e.g. `"AES-256-GCM"`.
    const ALGORITHM: &'static str;
    const KEY_LENGTH: usize;
    const NONCE_LENGTH: usize;
    const TAG_LENGTH: usize;

    /// Performs AEAD encryption.
    /// `nonce` must be `NONCE_LENGTH` bytes and never repeat under `key`.
    fn seal(
        key: &SessionKey,
        nonce: &[u8],
        plaintext: &[u8],
        associated_data: Option<&[u8]>,
    ) -> Result<Vec<u8>, CryptoError>;

    /// Performs AEAD decryption.
    fn open(
        key: &SessionKey,
        nonce: &[u8],
        ciphertext: &[u8],
        associated_data: Option<&[u8]>,
    ) -> Result<Zeroizing<Vec<u8>>, CryptoError>;

    /// Generates a `NONCE_LENGTH`-byte nonce from the OS CSPRNG.
    fn generate_nonce() -> Result<Vec<u8>, CryptoError> {
        let mut nonce = vec![0u8; Self::NONCE_LENGTH];
        OsRng.try_fill_bytes(&mut nonce)?;
        Ok(nonce)
    }
}
