// Base64 утилиты (стандартный алфавит с паддингом, как на стороне сервера)

use base64::{engine::general_purpose, Engine};

pub fn encode(data: &[u8]) -> String {
    general_purpose::STANDARD.encode(data)
}

pub fn decode(data: &str) -> Result<Vec<u8>, String> {
    general_purpose::STANDARD
        .decode(data)
        .map_err(|e| format!("Base64 decode failed: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::OsRng, Rng, RngCore};

    #[test]
    fn test_decode_returns_encoded_bytes() {
        for _ in 0..256 {
            let len = OsRng.gen_range(0..2048);
            let mut data = vec![0u8; len];
            OsRng.fill_bytes(&mut data);

            let decoded = decode(&encode(&data)).unwrap();
            assert_eq!(decoded, data, "round-trip failed for {} bytes", len);
        }
    }

    #[test]
    fn test_decode_rejects_invalid_input() {
        assert!(decode("not base64!!").is_err());
        assert!(decode("QUJD=").is_err());
    }

    #[test]
    fn test_encode_uses_padded_standard_alphabet() {
        assert_eq!(encode(&[0xfb, 0xff]), "+/8=");
    }
}
