use crate::crypto::keys::{KemCiphertext, KemPublicKey, SharedSecret};
use crate::crypto::provider::Kem;
use crate::error::CryptoError;
use pqcrypto_kyber::kyber512;
use pqcrypto_traits::kem::{Ciphertext as _, PublicKey as _, SharedSecret as _};

/// Kyber512 via `pqcrypto-kyber` (PQClean reference implementation).
pub struct Kyber512Kem;

impl Kem for Kyber512Kem {
    const ALGORITHM: &'static str = "Kyber512";
    const PUBLIC_KEY_LENGTH: usize = 800;
    const CIPHERTEXT_LENGTH: usize = 768;
    const SHARED_SECRET_LENGTH: usize = 32;

    fn encapsulate(
        public_key: &KemPublicKey,
    ) -> Result<(KemCiphertext, SharedSecret), CryptoError> {
        if public_key.len() != Self::PUBLIC_KEY_LENGTH {
            return Err(CryptoError::InvalidKeyLength {
                expected: Self::PUBLIC_KEY_LENGTH,
                actual: public_key.len(),
            });
        }

        let pk = kyber512::PublicKey::from_bytes(public_key.as_bytes())
            .map_err(|e| CryptoError::KemEncapsulationError(format!("{:?}", e)))?;

        let (shared_secret, ciphertext) = kyber512::encapsulate(&pk);

        Ok((
            KemCiphertext::from_bytes(ciphertext.as_bytes().to_vec()),
            SharedSecret::from_bytes(shared_secret.as_bytes().to_vec()),
        ))
    }
}
