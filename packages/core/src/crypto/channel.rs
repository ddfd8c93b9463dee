//! Secure Channel - AEAD-шифрование запросов ключом сессии
//!
//! ```text
//! SharedSecret ──(move)──► SecureChannel::new ──► SessionKey = secret[..32]
//!
//! send(plaintext):
//!   nonce  = OsRng(12)                 // новый на каждый вызов
//!   cipher = AES-256-GCM(key, nonce, plaintext, aad = none)
//!   POST /secure-data {"nonce": b64, "cipher": b64}
//!   → сырой ответ сервера (не расшифровывается)
//! ```
//!
//! Ответ сервера с кодом не 2xx не считается ошибкой канала: тело
//! возвращается вызывающему как есть.

use crate::config::Endpoints;
use crate::crypto::keys::{SessionKey, SharedSecret};
use crate::crypto::provider::Aead;
use crate::crypto::suites::aes256gcm::Aes256GcmCipher;
use crate::error::{ChannelError, TransportError};
use crate::protocol::messages::EncryptedEnvelope;
use crate::protocol::transport::{HttpResponse, Transport};
use crate::protocol::wire;
use std::fmt;
use std::marker::PhantomData;

/// Symmetric channel bound to one session key.
///
/// Dropping the channel wipes the key.
pub struct SecureChannel<A: Aead = Aes256GcmCipher> {
    key: SessionKey,
    _phantom: PhantomData<A>,
}

impl SecureChannel<Aes256GcmCipher> {
    /// Derive the session key from `secret` (consumed and wiped).
    ///
    /// Fails with `SecretTooShort` when the secret is shorter than the
    /// cipher key (32 bytes for AES-256-GCM).
    pub fn new(secret: SharedSecret) -> Result<Self, ChannelError> {
        Self::with_cipher(secret)
    }
}

impl<A: Aead> SecureChannel<A> {
    /// Канал с произвольной реализацией AEAD
    pub fn with_cipher(secret: SharedSecret) -> Result<Self, ChannelError> {
        let key = SessionKey::derive(&secret, A::KEY_LENGTH).ok_or(
            ChannelError::SecretTooShort {
                required: A::KEY_LENGTH,
                actual: secret.len(),
            },
        )?;

        tracing::debug!(
            target: "crypto::channel",
            algorithm = A::ALGORITHM,
            key_len = key.len(),
            "Session key derived"
        );

        Ok(Self {
            key,
            _phantom: PhantomData,
        })
    }

    /// Зашифровать `plaintext` с новым случайным nonce
    pub fn seal(&self, plaintext: &[u8]) -> Result<EncryptedEnvelope, ChannelError> {
        let nonce = A::generate_nonce()?;
        let ciphertext = A::seal(&self.key, &nonce, plaintext, None)?;
        Ok(EncryptedEnvelope { nonce, ciphertext })
    }

    /// Зашифровать и отправить `plaintext` на `/secure-data`
    ///
    /// # Ошибки
    /// - `EncryptionFailed`: сбой RNG или шифра
    /// - `TransportError`: сетевой сбой; ответ сервера любого статуса
    ///   ошибкой не является
    pub fn send<T: Transport + ?Sized>(
        &self,
        transport: &T,
        endpoints: &Endpoints,
        plaintext: &[u8],
    ) -> Result<HttpResponse, ChannelError> {
        let envelope = self.seal(plaintext)?;
        let body = wire::pack(&envelope.to_wire()).map_err(TransportError::Encode)?;

        tracing::debug!(
            target: "crypto::channel",
            plaintext_len = plaintext.len(),
            ciphertext_len = envelope.ciphertext.len(),
            "Sending encrypted request"
        );

        let response = transport.post(&endpoints.secure_data_url(), &body)?;

        if !response.is_success() {
            tracing::warn!(
                target: "crypto::channel",
                status = response.status,
                "Server answered the encrypted request with an error status"
            );
        }

        Ok(response)
    }

    #[cfg(test)]
    pub(crate) fn session_key(&self) -> &SessionKey {
        &self.key
    }
}

impl<A: Aead> fmt::Debug for SecureChannel<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecureChannel")
            .field("algorithm", &A::ALGORITHM)
            .field("key", &self.key)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingTransport {
        status: u16,
        posts: Mutex<Vec<(String, Vec<u8>)>>,
    }

    impl Transport for RecordingTransport {
        fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
            Err(TransportError::Request {
                url: url.to_string(),
                message: "unexpected GET".to_string(),
            })
        }

        fn post(&self, url: &str, json_body: &[u8]) -> Result<HttpResponse, TransportError> {
            self.posts
                .lock()
                .unwrap()
                .push((url.to_string(), json_body.to_vec()));
            Ok(HttpResponse::new(self.status, "ok"))
        }
    }

    struct FailingTransport;

    impl Transport for FailingTransport {
        fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
            Err(TransportError::Timeout { url: url.to_string() })
        }

        fn post(&self, url: &str, _json_body: &[u8]) -> Result<HttpResponse, TransportError> {
            Err(TransportError::Timeout { url: url.to_string() })
        }
    }

    fn secret(len: usize) -> SharedSecret {
        SharedSecret::from_bytes((0..len).map(|i| i as u8).collect())
    }

    fn channel() -> SecureChannel {
        SecureChannel::new(secret(32)).unwrap()
    }

    #[test]
    fn test_short_secret_is_rejected() {
        for len in 0..32 {
            match SecureChannel::new(secret(len)) {
                Err(ChannelError::SecretTooShort { required, actual }) => {
                    assert_eq!(required, 32);
                    assert_eq!(actual, len);
                }
                other => panic!("len {} gave {:?}", len, other),
            }
        }
    }

    #[test]
    fn test_long_enough_secret_is_accepted() {
        for len in [32usize, 33, 48, 64, 1024] {
            let channel = SecureChannel::new(secret(len)).unwrap();
            let expected: Vec<u8> = (0..32).map(|i| i as u8).collect();
            assert_eq!(channel.session_key().as_bytes(), expected.as_slice());
        }
    }

    #[test]
    fn test_same_plaintext_gives_different_ciphertexts() {
        let channel = channel();
        let first = channel.seal(b"Hello, secure world!").unwrap();
        let second = channel.seal(b"Hello, secure world!").unwrap();

        assert_ne!(first.nonce, second.nonce);
        assert_ne!(first.ciphertext, second.ciphertext);
    }

    #[test]
    fn test_sealed_envelope_opens_with_session_key() {
        let channel = channel();
        let envelope = channel.seal(b"payload").unwrap();
        assert_eq!(envelope.nonce.len(), 12);

        let opened = Aes256GcmCipher::open(
            channel.session_key(),
            &envelope.nonce,
            &envelope.ciphertext,
            None,
        )
        .unwrap();
        assert_eq!(opened.as_slice(), b"payload");
    }

    #[test]
    fn test_nonces_never_repeat_across_sends() {
        let channel = channel();
        let transport = RecordingTransport {
            status: 200,
            ..Default::default()
        };
        let endpoints = Endpoints::new("https://fake");

        const SENDS: usize = 1000;
        for _ in 0..SENDS {
            channel.send(&transport, &endpoints, b"same body").unwrap();
        }

        let posts = transport.posts.lock().unwrap();
        assert_eq!(posts.len(), SENDS);

        let nonces: HashSet<Vec<u8>> = posts
            .iter()
            .map(|(_, body)| {
                let request = wire::unpack(body).unwrap();
                EncryptedEnvelope::from_wire(&request).unwrap().nonce
            })
            .collect();
        assert_eq!(nonces.len(), SENDS);
    }

    #[test]
    fn test_error_status_is_returned_not_raised() {
        let channel = channel();
        let transport = RecordingTransport {
            status: 400,
            ..Default::default()
        };

        let response = channel
            .send(&transport, &Endpoints::new("https://fake"), b"x")
            .unwrap();
        assert_eq!(response.status, 400);
        assert_eq!(response.text(), "ok");
    }

    #[test]
    fn test_network_failure_is_transport_error() {
        let result = channel().send(&FailingTransport, &Endpoints::new("https://fake"), b"x");
        assert!(matches!(
            result,
            Err(ChannelError::TransportError(TransportError::Timeout { .. }))
        ));
    }

    #[test]
    fn test_debug_does_not_leak_key() {
        let rendered = format!("{:?}", channel());
        assert!(rendered.contains("AES-256-GCM"));
        assert!(rendered.contains("REDACTED"));
    }
}
