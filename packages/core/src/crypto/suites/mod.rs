//! Криптографические наборы (реализации `Kem` / `Aead`)
//!
//! ## Доступные реализации
//!
//! - **KEM**: Kyber512 (NIST Level 1, решёточный): [`kyber::Kyber512Kem`]
//! - **AEAD**: AES-256-GCM, 96-битный nonce, 128-битный тег: [`aes256gcm::Aes256GcmCipher`]
//!
//! ## Выбор suite
//!
//! ```rust
//! use qfs_core::crypto::provider::{Aead, Kem};
//! use qfs_core::crypto::suites::{aes256gcm::Aes256GcmCipher, kyber::Kyber512Kem};
//!
//! assert_eq!(Kyber512Kem::ALGORITHM, "Kyber512");
//! assert_eq!(Aes256GcmCipher::KEY_LENGTH, 32);
//! ```

pub mod aes256gcm;
pub mod kyber;
