//! Post-quantum KEM handshake (client side)
//!
//! Цель: получить общий секрет с сервером через Kyber512 без предварительного
//! обмена секретами.
//!
//! ## Dataflow
//! ```text
//! Client                                         Server
//! ======                                         ======
//!
//! 1. GET  /pqe/pubkey          ───────────────►
//!                              ◄─────────────── {"public_key": b64(pk)}
//! 2. (ct, ss) = Encaps(pk)
//! 3. POST /pqe/handshake       ───────────────► {"ct": b64(ct)}
//!                                               ss' = Decaps(sk, ct)
//!                              ◄─────────────── 2xx  → ss возвращается
//!                              ◄─────────────── !2xx → ss уничтожается
//! ```
//!
//! Между шагами 2 и 3 нет атомарности: если подтверждение потеряно,
//! секрет отбрасывается, повторных попыток нет.

use crate::config::Endpoints;
use crate::crypto::keys::{KemCiphertext, KemPublicKey, SharedSecret};
use crate::crypto::provider::Kem;
use crate::crypto::suites::kyber::Kyber512Kem;
use crate::error::{HandshakeError, TransportError};
use crate::protocol::messages::{HandshakeRequest, PublicKeyResponse};
use crate::protocol::transport::Transport;
use crate::protocol::wire;
use crate::utils::b64;
use std::marker::PhantomData;

/// Drives one handshake attempt and yields the shared secret.
///
/// Stateless between attempts: `perform` consumes the client.
pub struct HandshakeClient<K: Kem = Kyber512Kem> {
    _phantom: PhantomData<K>,
}

impl HandshakeClient<Kyber512Kem> {
    pub fn new() -> Self {
        Self::with_kem()
    }
}

impl Default for HandshakeClient<Kyber512Kem> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Kem> HandshakeClient<K> {
    /// Клиент с произвольной реализацией KEM
    pub fn with_kem() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }

    /// Выполнить handshake
    ///
    /// # Ошибки
    /// - `PublicKeyUnavailable`: ключ не получен или повреждён
    /// - `EncapsulationFailed`: ключ не принят KEM
    /// - `HandshakeRejected`: сервер ответил не 2xx на шифротекст
    /// - `SubmissionFailed`: шифротекст не доставлен
    pub fn perform<T: Transport + ?Sized>(
        self,
        transport: &T,
        endpoints: &Endpoints,
    ) -> Result<SharedSecret, HandshakeError> {
        use tracing::{debug, info};

        debug!(target: "crypto::pqe", algorithm = K::ALGORITHM, base = %endpoints.base(), "Starting handshake");

        // 1. Fetch public key
        let public_key = fetch_public_key(transport, endpoints)?;
        debug!(target: "crypto::pqe", public_key_len = public_key.len(), "Step 1: public key received");

        // 2. Encapsulate
        let (ciphertext, secret) =
            K::encapsulate(&public_key).map_err(HandshakeError::EncapsulationFailed)?;
        debug!(target: "crypto::pqe", ciphertext_len = ciphertext.len(), "Step 2: encapsulated");

        // 3. Submit ciphertext; the secret is only released on a 2xx answer
        match submit_ciphertext(transport, endpoints, &ciphertext) {
            Ok(()) => {
                info!(target: "crypto::pqe", secret_len = secret.len(), "Handshake completed");
                Ok(secret)
            }
            Err(e) => {
                drop(secret);
                debug!(target: "crypto::pqe", error = %e, "Step 3 failed, shared secret discarded");
                Err(e)
            }
        }
    }
}

fn fetch_public_key<T: Transport + ?Sized>(
    transport: &T,
    endpoints: &Endpoints,
) -> Result<KemPublicKey, HandshakeError> {
    let url = endpoints.public_key_url();
    let response = transport
        .get(&url)
        .map_err(|e| HandshakeError::PublicKeyUnavailable(e.to_string()))?;

    if !response.is_success() {
        return Err(HandshakeError::PublicKeyUnavailable(format!(
            "server returned HTTP {}",
            response.status
        )));
    }

    let parsed: PublicKeyResponse =
        wire::unpack(&response.body).map_err(HandshakeError::PublicKeyUnavailable)?;

    let encoded = parsed
        .public_key
        .filter(|key| !key.is_empty())
        .ok_or_else(|| {
            HandshakeError::PublicKeyUnavailable("missing or empty public_key field".to_string())
        })?;

    let bytes = b64::decode(&encoded).map_err(HandshakeError::PublicKeyUnavailable)?;
    if bytes.is_empty() {
        return Err(HandshakeError::PublicKeyUnavailable(
            "public_key decodes to zero bytes".to_string(),
        ));
    }

    Ok(KemPublicKey::from_bytes(bytes))
}

fn submit_ciphertext<T: Transport + ?Sized>(
    transport: &T,
    endpoints: &Endpoints,
    ciphertext: &KemCiphertext,
) -> Result<(), HandshakeError> {
    let request = HandshakeRequest {
        ct: b64::encode(ciphertext.as_bytes()),
    };
    let body = wire::pack(&request)
        .map_err(|e| HandshakeError::SubmissionFailed(TransportError::Encode(e)))?;

    let response = transport
        .post(&endpoints.handshake_url(), &body)
        .map_err(HandshakeError::SubmissionFailed)?;

    if !response.is_success() {
        return Err(HandshakeError::HandshakeRejected {
            status: response.status,
        });
    }
    Ok(())
}
