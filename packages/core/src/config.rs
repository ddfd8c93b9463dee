//! Централизованная конфигурация для QFS Core
//!
//! Адрес сервера, пути эндпоинтов и параметры транспорта передаются явно
//! в `HandshakeClient` / `SecureChannel` / `PqeClient`, без глобальных констант.

use std::time::Duration;

/// Адрес сервера по умолчанию
pub const DEFAULT_SERVER_URL: &str = "https://127.0.0.1:3000";

/// Таймаут HTTP-запроса по умолчанию (в секундах)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Эндпоинты удалённого сервиса
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    base: String,
    /// GET: `{"public_key": "<base64>"}`
    pub public_key_path: String,
    /// POST: `{"ct": "<base64>"}`
    pub handshake_path: String,
    /// POST: `{"nonce": "<base64>", "cipher": "<base64>"}`
    pub secure_data_path: String,
}

impl Endpoints {
    /// Создать набор эндпоинтов со стандартными путями
    ///
    /// Завершающие `/` у базового адреса отбрасываются.
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
            public_key_path: "/pqe/pubkey".to_string(),
            handshake_path: "/pqe/handshake".to_string(),
            secure_data_path: "/secure-data".to_string(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn public_key_url(&self) -> String {
        self.join(&self.public_key_path)
    }

    pub fn handshake_url(&self) -> String {
        self.join(&self.handshake_path)
    }

    pub fn secure_data_url(&self) -> String {
        self.join(&self.secure_data_path)
    }

    fn join(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.base, path)
        } else {
            format!("{}/{}", self.base, path)
        }
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::new(DEFAULT_SERVER_URL)
    }
}

/// Параметры HTTP-транспорта
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportConfig {
    /// Таймаут на один запрос; отмена выполняется только им
    pub timeout: Duration,

    /// Отключить проверку TLS-сертификата сервера.
    ///
    /// Без проверки сертификата публичный ключ сервера может быть подменён
    /// при перехвате, что обесценивает весь handshake. Только для локальной
    /// разработки с самоподписанным сертификатом.
    pub accept_invalid_certs: bool,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            accept_invalid_certs: false,
        }
    }
}

/// Основная структура конфигурации
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub endpoints: Endpoints,
    pub transport: TransportConfig,
}

impl Config {
    /// Создать конфигурацию из переменных окружения
    ///
    /// - `QFS_SERVER_URL`: базовый адрес сервера
    /// - `QFS_TIMEOUT_SECS`: таймаут запроса
    /// - `QFS_ACCEPT_INVALID_CERTS`: `1`/`true` отключает проверку сертификата
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Создать конфигурацию, читая значения через `lookup`
    ///
    /// Некорректные значения игнорируются, остаются значения по умолчанию.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup("QFS_SERVER_URL") {
            if !url.trim().is_empty() {
                config.endpoints = Endpoints::new(url.trim());
            }
        }

        if let Some(val) = lookup("QFS_TIMEOUT_SECS") {
            if let Ok(secs) = val.trim().parse::<u64>() {
                config.transport.timeout = Duration::from_secs(secs);
            }
        }

        if let Some(val) = lookup("QFS_ACCEPT_INVALID_CERTS") {
            config.transport.accept_invalid_certs =
                matches!(val.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes");
        }

        config
    }
}
