//! Client API - High-level interface for the PQE session
//!
//! Объединяет handshake + secure channel в единый API.
//!
//! ## Архитектура
//!
//! ```text
//! PqeClient
//!   ├── Endpoints            - адрес сервера и пути
//!   ├── Transport            - HTTP (реальный или поддельный)
//!   └── Option<SecureChannel> - текущая сессия (не более одной)
//! ```
//!
//! ## Типичный сценарий использования
//!
//! ```text
//! 1. client = PqeClient::new(transport, endpoints)
//! 2. client.handshake()            // Kyber512 → SharedSecret → SecureChannel
//! 3. client.send(b"payload")       // AES-256-GCM → POST /secure-data
//! ```
//!
//! ## Ответственность
//!
//! - Владение единственным ключом сессии
//! - Замена сессии при новом handshake (старый ключ стирается)
//!
//! ## Не отвечает за
//!
//! - Повторные попытки (решает вызывающий)
//! - Отображение секрета или статуса (это делает UI)

use crate::config::Endpoints;
use crate::crypto::channel::SecureChannel;
use crate::crypto::handshake::HandshakeClient;
use crate::crypto::provider::{Aead, Kem};
use crate::crypto::suites::aes256gcm::Aes256GcmCipher;
use crate::crypto::suites::kyber::Kyber512Kem;
use crate::error::{ClientError, Result};
use crate::protocol::transport::{HttpResponse, Transport};

/// Тестовая полезная нагрузка ("Send Encrypted Test")
pub const TEST_PAYLOAD: &[u8] = b"Hello, secure world!";

/// High-level client holding at most one live session.
pub struct PqeClient<T: Transport, K: Kem = Kyber512Kem, A: Aead = Aes256GcmCipher> {
    transport: T,
    endpoints: Endpoints,
    channel: Option<SecureChannel<A>>,
    _kem: std::marker::PhantomData<K>,
}

impl<T: Transport> PqeClient<T> {
    pub fn new(transport: T, endpoints: Endpoints) -> Self {
        Self::with_suite(transport, endpoints)
    }
}

impl<T: Transport, K: Kem, A: Aead> PqeClient<T, K, A> {
    /// Клиент с произвольными KEM и AEAD
    pub fn with_suite(transport: T, endpoints: Endpoints) -> Self {
        Self {
            transport,
            endpoints,
            channel: None,
            _kem: std::marker::PhantomData,
        }
    }

    /// Выполнить handshake и открыть новую сессию
    ///
    /// Текущая сессия закрывается до начала попытки (её ключ стирается),
    /// независимо от результата.
    pub fn handshake(&mut self) -> Result<()> {
        if self.channel.take().is_some() {
            tracing::info!(target: "api::client", "Previous session key discarded");
        }

        let secret = HandshakeClient::<K>::with_kem().perform(&self.transport, &self.endpoints)?;
        self.channel = Some(SecureChannel::<A>::with_cipher(secret)?);

        tracing::info!(target: "api::client", "Secure session established");
        Ok(())
    }

    /// Зашифровать и отправить `plaintext` в текущей сессии
    pub fn send(&self, plaintext: &[u8]) -> Result<HttpResponse> {
        let channel = self.channel.as_ref().ok_or(ClientError::NoSession)?;
        Ok(channel.send(&self.transport, &self.endpoints, plaintext)?)
    }

    /// Отправить [`TEST_PAYLOAD`]
    pub fn send_test_payload(&self) -> Result<HttpResponse> {
        self.send(TEST_PAYLOAD)
    }

    pub fn has_session(&self) -> bool {
        self.channel.is_some()
    }

    /// Закрыть сессию (ключ стирается)
    pub fn reset(&mut self) {
        self.channel = None;
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }
}
