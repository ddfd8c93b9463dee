// HTTP транспорт
// Ядро общается с сервером только через trait `Transport`,
// поэтому handshake и канал тестируются с поддельным транспортом.

use crate::error::TransportError;

#[cfg(feature = "http")]
use crate::config::TransportConfig;

/// Ответ сервера: статус и сырое тело
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// 2xx
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Тело как текст (невалидный UTF-8 заменяется)
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Blocking HTTP capability consumed by the handshake and the channel.
///
/// Timeouts and TLS verification are properties of the implementation.
/// A non-2xx status is a successful transport call, not an error.
pub trait Transport: Send + Sync {
    fn get(&self, url: &str) -> Result<HttpResponse, TransportError>;

    fn post(&self, url: &str, json_body: &[u8]) -> Result<HttpResponse, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        (**self).get(url)
    }

    fn post(&self, url: &str, json_body: &[u8]) -> Result<HttpResponse, TransportError> {
        (**self).post(url, json_body)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        (**self).get(url)
    }

    fn post(&self, url: &str, json_body: &[u8]) -> Result<HttpResponse, TransportError> {
        (**self).post(url, json_body)
    }
}

/// Транспорт на базе `reqwest::blocking`
#[cfg(feature = "http")]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

#[cfg(feature = "http")]
impl HttpTransport {
    /// Создать транспорт
    ///
    /// Проверка сертификата включена, если только `accept_invalid_certs`
    /// не задан явно.
    pub fn new(config: &TransportConfig) -> Result<Self, TransportError> {
        if config.accept_invalid_certs {
            tracing::warn!(
                target: "protocol::transport",
                "TLS certificate verification is DISABLED; the server public key can be substituted by an interceptor"
            );
        }

        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()
            .map_err(|e| TransportError::Client(e.to_string()))?;

        Ok(Self { client })
    }

    fn finish(
        url: &str,
        result: reqwest::Result<reqwest::blocking::Response>,
    ) -> Result<HttpResponse, TransportError> {
        let response = result.map_err(|e| Self::map_error(url, e))?;
        let status = response.status().as_u16();
        let body = response.bytes().map_err(|e| Self::map_error(url, e))?;

        tracing::debug!(
            target: "protocol::transport",
            url = %url,
            status = status,
            body_len = body.len(),
            "HTTP response received"
        );

        Ok(HttpResponse::new(status, body.to_vec()))
    }

    fn map_error(url: &str, err: reqwest::Error) -> TransportError {
        if err.is_timeout() {
            TransportError::Timeout {
                url: url.to_string(),
            }
        } else {
            TransportError::Request {
                url: url.to_string(),
                message: err.to_string(),
            }
        }
    }
}

#[cfg(feature = "http")]
impl Transport for HttpTransport {
    fn get(&self, url: &str) -> Result<HttpResponse, TransportError> {
        Self::finish(url, self.client.get(url).send())
    }

    fn post(&self, url: &str, json_body: &[u8]) -> Result<HttpResponse, TransportError> {
        let request = self
            .client
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(json_body.to_vec());
        Self::finish(url, request.send())
    }
}
