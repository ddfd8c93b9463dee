use crate::crypto::keys::SessionKey;
use crate::crypto::provider::Aead;
use crate::error::CryptoError;
use aes_gcm::{
    aead::{Aead as _, KeyInit, Payload},
    Aes256Gcm, Nonce,
};
use zeroize::Zeroizing;

/// AES-256-GCM with a 12-byte nonce and a 16-byte tag.
pub struct Aes256GcmCipher;

impl Aes256GcmCipher {
    fn cipher(key: &SessionKey, nonce: &[u8]) -> Result<Aes256Gcm, CryptoError> {
        if nonce.len() != Self::NONCE_LENGTH {
            return Err(CryptoError::InvalidInputError(format!(
                "Nonce must be {} bytes, got {}",
                Self::NONCE_LENGTH,
                nonce.len()
            )));
        }
        Aes256Gcm::new_from_slice(key.as_bytes()).map_err(|_| CryptoError::InvalidKeyLength {
            expected: Self::KEY_LENGTH,
            actual: key.len(),
        })
    }
}

impl Aead for Aes256GcmCipher {
    const ALGORITHM: &'static str = "AES-256-GCM";
    const KEY_LENGTH: usize = 32;
    const NONCE_LENGTH: usize = 12;
    const TAG_LENGTH: usize = 16;

    fn seal(
        key: &SessionKey,
        nonce: &[u8],
        plaintext: &[u8],
        associated_data: Option<&[u8]>,
    ) -> Result<Vec<u8>, CryptoError> {
        let cipher = Self::cipher(key, nonce)?;
        let payload = Payload {
            msg: plaintext,
            aad: associated_data.unwrap_or(&[]),
        };
        cipher
            .encrypt(Nonce::from_slice(nonce), payload)
            .map_err(CryptoError::from)
    }

    fn open(
        key: &SessionKey,
        nonce: &[u8],
        ciphertext: &[u8],
        associated_data: Option<&[u8]>,
    ) -> Result<Zeroizing<Vec<u8>>, CryptoError> {
        let cipher = Self::cipher(key, nonce)?;
        let payload = Payload {
            msg: ciphertext,
            aad: associated_data.unwrap_or(&[]),
        };
        cipher
            .decrypt(Nonce::from_slice(nonce), payload)
            .map(Zeroizing::new)
            .map_err(|e| CryptoError::AeadDecryptionError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(byte: u8) -> SessionKey {
        SessionKey::from_bytes(vec![byte; 32])
    }

    #[test]
    fn test_seal_open() {
        let nonce = Aes256GcmCipher::generate_nonce().unwrap();
        let plaintext = b"Hello, secure world!";

        let ciphertext = Aes256GcmCipher::seal(&key(1), &nonce, plaintext, None).unwrap();
        assert_eq!(ciphertext.len(), plaintext.len() + Aes256GcmCipher::TAG_LENGTH);

        let opened = Aes256GcmCipher::open(&key(1), &nonce, &ciphertext, None).unwrap();
        assert_eq!(opened.as_slice(), plaintext);
    }

    #[test]
    fn test_open_fails_with_wrong_key_or_tampering() {
        let nonce = Aes256GcmCipher::generate_nonce().unwrap();
        let mut ciphertext = Aes256GcmCipher::seal(&key(1), &nonce, b"payload", None).unwrap();

        assert!(Aes256GcmCipher::open(&key(2), &nonce, &ciphertext, None).is_err());

        ciphertext[0] ^= 0x01;
        assert!(matches!(
            Aes256GcmCipher::open(&key(1), &nonce, &ciphertext, None),
            Err(CryptoError::AeadDecryptionError(_))
        ));
    }

    #[test]
    fn test_associated_data_is_authenticated() {
        let nonce = Aes256GcmCipher::generate_nonce().unwrap();
        let ciphertext =
            Aes256GcmCipher::seal(&key(3), &nonce, b"payload", Some(b"header")).unwrap();

        assert!(Aes256GcmCipher::open(&key(3), &nonce, &ciphertext, Some(b"header")).is_ok());
        assert!(Aes256GcmCipher::open(&key(3), &nonce, &ciphertext, None).is_err());
    }

    #[test]
    fn test_rejects_bad_nonce_and_key_lengths() {
        assert!(matches!(
            Aes256GcmCipher::seal(&key(1), &[0u8; 8], b"x", None),
            Err(CryptoError::InvalidInputError(_))
        ));

        let short = SessionKey::from_bytes(vec![0u8; 16]);
        assert!(matches!(
            Aes256GcmCipher::seal(&short, &[0u8; 12], b"x", None),
            Err(CryptoError::InvalidKeyLength { expected: 32, actual: 16 })
        ));
    }

    #[test]
    fn test_generate_nonce_length() {
        let nonce = Aes256GcmCipher::generate_nonce().unwrap();
        assert_eq!(nonce.len(), 12);
    }
}
