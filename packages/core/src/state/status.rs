//! Короткие строки статуса для UI
//!
//! Ядро возвращает ошибки как значения; превращение их в строку для
//! пользователя: отдельный шаг, который делает UI. Строки не содержат
//! секретов: ни одна ошибка ядра их не несёт.

use crate::error::{ChannelError, ClientError, HandshakeError};
use std::fmt;

/// Уровень статуса (в UI: зелёный / красный)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Ok,
    Error,
}

/// Статус последней операции PQE
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PqeStatus {
    pub level: StatusLevel,
    pub label: &'static str,
    pub detail: Option<String>,
}

impl PqeStatus {
    pub fn handshake_ok() -> Self {
        Self {
            level: StatusLevel::Ok,
            label: "Handshake OK",
            detail: None,
        }
    }

    pub fn sent(status: u16) -> Self {
        let level = if (200..300).contains(&status) {
            StatusLevel::Ok
        } else {
            StatusLevel::Error
        };
        Self {
            level,
            label: "Request sent",
            detail: Some(format!("HTTP {}", status)),
        }
    }

    pub fn from_handshake_error(error: &HandshakeError) -> Self {
        let label = match error {
            HandshakeError::PublicKeyUnavailable(_) => "Public key unavailable",
            HandshakeError::EncapsulationFailed(_) => "Encapsulation failed",
            HandshakeError::HandshakeRejected { .. } => "Handshake Failed",
            HandshakeError::SubmissionFailed(_) => "Handshake not delivered",
        };
        Self::error(label, error)
    }

    pub fn from_channel_error(error: &ChannelError) -> Self {
        let label = match error {
            ChannelError::SecretTooShort { .. } => "Shared secret too short",
            ChannelError::EncryptionFailed(_) => "Encryption failed",
            ChannelError::TransportError(_) => "Network error",
        };
        Self::error(label, error)
    }

    pub fn from_client_error(error: &ClientError) -> Self {
        match error {
            ClientError::Handshake(e) => Self::from_handshake_error(e),
            ClientError::Channel(e) => Self::from_channel_error(e),
            ClientError::NoSession => Self::error("No session", error),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.level == StatusLevel::Ok
    }

    fn error(label: &'static str, error: &dyn fmt::Display) -> Self {
        Self {
            level: StatusLevel::Error,
            label,
            detail: Some(error.to_string()),
        }
    }
}

impl fmt::Display for PqeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.detail {
            Some(detail) => write!(f, "{}: {}", self.label, detail),
            None => f.write_str(self.label),
        }
    }
}
