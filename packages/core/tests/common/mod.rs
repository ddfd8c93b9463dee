//! Fake QFS server used by the integration tests.
//!
//! Holds a real Kyber512 key pair, decapsulates submitted ciphertexts and
//! decrypts `/secure-data` requests, so tests can check that both sides agree.

#![allow(dead_code)]

use std::sync::Mutex;

use pqcrypto_kyber::kyber512;
use pqcrypto_traits::kem::{Ciphertext as _, PublicKey as _, SharedSecret as _};
use qfs_core::crypto::keys::SessionKey;
use qfs_core::crypto::provider::Aead;
use qfs_core::crypto::suites::aes256gcm::Aes256GcmCipher;
use qfs_core::protocol::messages::{EncryptedEnvelope, HandshakeRequest, SecureDataRequest};
use qfs_core::protocol::wire;
use qfs_core::utils::b64;
use qfs_core::{HttpResponse, Transport, TransportError};

pub const BASE: &str = "https://qfs.test";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: &'static str,
    pub url: String,
    pub body: Vec<u8>,
}

pub struct FakeServer {
    public_key: kyber512::PublicKey,
    secret_key: kyber512::SecretKey,
    pub handshake_status: u16,
    pub secure_data_reply: String,
    requests: Mutex<Vec<Request>>,
    server_secret: Mutex<Option<Vec<u8>>>,
}

impl FakeServer {
    pub fn new() -> Self {
        let (public_key, secret_key) = kyber512::keypair();
        Self {
            public_key,
            secret_key,
            handshake_status: 200,
            secure_data_reply: "ok".to_string(),
            requests: Mutex::new(Vec::new()),
            server_secret: Mutex::new(None),
        }
    }

    pub fn rejecting_handshake(status: u16) -> Self {
        Self {
            handshake_status: status,
            ..Self::new()
        }
    }

    pub fn requests(&self) -> Vec<Request> {
        self.requests.lock().unwrap().clone()
    }

    pub fn posts_to(&self, path: &str) -> Vec<Request> {
        self.requests()
            .into_iter()
            .filter(|r| r.method == "POST" && r.url.ends_with(path))
            .collect()
    }

    /// Secret the server side recovered from the last handshake.
    pub fn server_secret(&self) -> Option<Vec<u8>> {
        self.server_secret.lock().unwrap().clone()
    }

    /// Decrypts a recorded `/secure-data` body with the server's secret.
    pub fn open(&self, body: &[u8]) -> Vec<u8> {
        let secret = self.server_secret().expect("no handshake seen");
        let request: SecureDataRequest = wire::unpack(body).expect("secure-data json");
        let envelope = EncryptedEnvelope::from_wire(&request).expect("secure-data base64");
        let key = SessionKey::from_bytes(secret[..32].to_vec());
        Aes256GcmCipher::open(&key, &envelope.nonce, &envelope.ciphertext, None)
            .expect("server-side decryption")
            .to_vec()
    }

    fn record(&self, method: &'static str, url: &str, body: &[u8]) {
        self.requests.lock().unwrap().push(Request {
            method,
            url: url.to_string(),
            body: body.to_vec(),
        });
    }
}

impl Transport for FakeServer {
    fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        self.record("GET", url, &[]);
        if url == format!("{}/pqe/pubkey", BASE) {
            let body = format!(
                r#"{{"public_key":"{}"}}"#,
                b64::encode(self.public_key.as_bytes())
            );
            Ok(HttpResponse::new(200, body))
        } else {
            Ok(HttpResponse::new(404, "not found"))
        }
    }

    fn post(&self, url: &str, json_body: &[u8]) -> Result<HttpResponse, TransportError> {
        self.record("POST", url, json_body);
        if url == format!("{}/pqe/handshake", BASE) {
            if self.handshake_status / 100 != 2 {
                return Ok(HttpResponse::new(self.handshake_status, "handshake refused"));
            }
            let request: HandshakeRequest = wire::unpack(json_body).expect("handshake json");
            let ct_bytes = b64::decode(&request.ct).expect("ct base64");
            let ct = kyber512::Ciphertext::from_bytes(&ct_bytes).expect("ct length");
            let ss = kyber512::decapsulate(&ct, &self.secret_key);
            *self.server_secret.lock().unwrap() = Some(ss.as_bytes().to_vec());
            Ok(HttpResponse::new(200, r#"{"status":"ok"}"#))
        } else if url == format!("{}/secure-data", BASE) {
            Ok(HttpResponse::new(200, self.secure_data_reply.clone()))
        } else {
            Ok(HttpResponse::new(404, "not found"))
        }
    }
}
