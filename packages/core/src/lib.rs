// QFS Core
// Post-quantum (Kyber512) handshake + AES-256-GCM secure channel client

#![warn(clippy::all)]

// Модули
pub mod api;
pub mod config;
pub mod crypto;
pub mod error;
pub mod protocol;
pub mod state;
pub mod utils;

// Re-exports для удобства
pub use api::PqeClient;
pub use config::{Config, Endpoints, TransportConfig};
pub use crypto::{HandshakeClient, SecureChannel, SharedSecret};
pub use error::{ChannelError, ClientError, CryptoError, HandshakeError, TransportError};
pub use protocol::transport::{HttpResponse, Transport};

#[cfg(feature = "http")]
pub use protocol::transport::HttpTransport;
