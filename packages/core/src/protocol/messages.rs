// Типы сообщений протокола
// Соответствуют HTTP API сервера (/pqe/pubkey, /pqe/handshake, /secure-data)

use crate::utils::b64;
use serde::{Deserialize, Serialize};

/// Ответ на `GET /pqe/pubkey`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublicKeyResponse {
    /// Base64 Kyber512 public key (800 bytes)
    #[serde(default)]
    pub public_key: Option<String>,
}

/// Тело `POST /pqe/handshake`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HandshakeRequest {
    /// Base64 KEM ciphertext
    pub ct: String,
}

/// Тело `POST /secure-data`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecureDataRequest {
    /// Base64 AEAD nonce (12 bytes)
    pub nonce: String,
    /// Base64 AEAD ciphertext (включая тег)
    pub cipher: String,
}

/// Зашифрованный запрос: nonce + шифротекст
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptedEnvelope {
    pub nonce: Vec<u8>,
    pub ciphertext: Vec<u8>,
}

impl EncryptedEnvelope {
    /// Представление для передачи по сети (поля в Base64)
    pub fn to_wire(&self) -> SecureDataRequest {
        SecureDataRequest {
            nonce: b64::encode(&self.nonce),
            cipher: b64::encode(&self.ciphertext),
        }
    }

    /// Обратное преобразование (используется принимающей стороной)
    pub fn from_wire(request: &SecureDataRequest) -> Result<Self, String> {
        Ok(Self {
            nonce: b64::decode(&request.nonce)?,
            ciphertext: b64::decode(&request.cipher)?,
        })
    }
}
