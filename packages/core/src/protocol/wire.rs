// Wire format (JSON сериализация)
// Используется для тел HTTP-запросов и ответов

use serde::{Deserialize, Serialize};

/// Упаковать сообщение в JSON (клиент -> сервер)
pub fn pack<T: Serialize>(message: &T) -> Result<Vec<u8>, String> {
    serde_json::to_vec(message).map_err(|e| format!("JSON pack error: {}", e))
}

/// Распаковать JSON-ответ сервера в произвольный тип
pub fn unpack<'a, T: Deserialize<'a>>(data: &'a [u8]) -> Result<T, String> {
    serde_json::from_slice(data).map_err(|e| format!("JSON unpack error: {}", e))
}
