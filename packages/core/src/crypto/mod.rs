//! Криптографический модуль
//!
//! # Архитектура
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  PqeClient (crate::api)                     │
//! │  - Владеет текущей сессией                                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                ┌─────────────┴─────────────┐
//!                ▼                           ▼
//! ┌───────────────────────────┐  ┌──────────────────────────┐
//! │   HandshakeClient         │  │  SecureChannel           │
//! │  - GET public key         │  │  - SessionKey = ss[..32] │
//! │  - Encapsulate            │  │  - Random nonce per call │
//! │  - POST ciphertext        │  │  - POST /secure-data     │
//! └───────────────────────────┘  └──────────────────────────┘
//!                │      SharedSecret (move)  ▲
//!                └───────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │              Kem / Aead (crypto-agility)                    │
//! │  - KEM  (Kyber512)                                          │
//! │  - AEAD (AES-256-GCM)                                       │
//! └─────────────────────────────────────────────────────────────┘
//! ```

// ============================================================================
// Core Traits
// ============================================================================

/// Kem / Aead traits для crypto-agility
pub mod provider;

// ============================================================================
// Implementations
// ============================================================================

/// Реализации Kem / Aead (Kyber512, AES-256-GCM)
pub mod suites;

/// Ключевой материал (public key, ciphertext, shared secret, session key)
pub mod keys;

// ============================================================================
// Protocols
// ============================================================================

/// KEM handshake
pub mod handshake;

/// Симметричный канал поверх shared secret
pub mod channel;

// ============================================================================
// Re-exports для удобства
// ============================================================================

pub use channel::SecureChannel;
pub use handshake::HandshakeClient;
pub use keys::{KemCiphertext, KemPublicKey, SessionKey, SharedSecret};
pub use provider::{Aead, Kem};
