use thiserror::Error;

/// Ошибки криптографических примитивов (KEM, AEAD, RNG)
#[derive(Error, Debug)]
pub enum CryptoError {
    #[error("Invalid key length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },
    #[error("KEM encapsulation failed: {0}")]
    KemEncapsulationError(String),
    #[error("AEAD encryption failed: {0}")]
    AeadEncryptionError(String),
    #[error("AEAD decryption failed: {0}")]
    AeadDecryptionError(String),
    #[error("Nonce generation failed: {0}")]
    NonceGenerationError(String),
    #[error("Invalid input: {0}")]
    InvalidInputError(String),
}

impl From<aes_gcm::Error> for CryptoError {
    fn from(err: aes_gcm::Error) -> Self {
        CryptoError::AeadEncryptionError(err.to_string())
    }
}

impl From<rand::Error> for CryptoError {
    fn from(err: rand::Error) -> Self {
        CryptoError::NonceGenerationError(err.to_string())
    }
}

/// Failures of the HTTP transport capability.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Request to {url} failed: {message}")]
    Request { url: String, message: String },
    #[error("Request to {url} timed out")]
    Timeout { url: String },
    #[error("Failed to build HTTP client: {0}")]
    Client(String),
    #[error("Failed to encode request body: {0}")]
    Encode(String),
}

/// Failures of the three-step KEM handshake.
///
/// None of the variants carry key material: a secret computed before the
/// failure point is dropped (and zeroed) before the error is returned.
#[derive(Error, Debug)]
pub enum HandshakeError {
    /// GET of the server public key failed or returned something unusable.
    #[error("Server public key unavailable: {0}")]
    PublicKeyUnavailable(String),
    /// The public key was rejected by the KEM (wrong length, malformed).
    #[error("Encapsulation failed: {0}")]
    EncapsulationFailed(#[source] CryptoError),
    /// The server answered the ciphertext submission with a non-2xx status.
    #[error("Handshake rejected by server (HTTP {status})")]
    HandshakeRejected { status: u16 },
    /// The ciphertext submission never got an answer.
    #[error("Handshake submission failed: {0}")]
    SubmissionFailed(#[source] TransportError),
}

/// Failures of the symmetric channel.
#[derive(Error, Debug)]
pub enum ChannelError {
    #[error("Shared secret too short: need {required} bytes, got {actual}")]
    SecretTooShort { required: usize, actual: usize },
    #[error("Encryption failed: {0}")]
    EncryptionFailed(#[from] CryptoError),
    #[error("Transport error: {0}")]
    TransportError(#[from] TransportError),
}

/// Errors of the high-level [`crate::api::PqeClient`].
#[derive(Error, Debug)]
pub enum ClientError {
    #[error(transparent)]
    Handshake(#[from] HandshakeError),
    #[error(transparent)]
    Channel(#[from] ChannelError),
    #[error("No secure session: perform a handshake first")]
    NoSession,
}

pub type Result<T> = std::result::Result<T, ClientError>;
