//! `data:` URLs for embedding encoded images in JSON bodies.

use base64::{engine::general_purpose::STANDARD, Engine as _};

/// Build a base64 `data:` URL.
pub fn to_data_url(mime_type: &str, bytes: &[u8]) -> String {
    format!("data:{mime_type};base64,{}", STANDARD.encode(bytes))
}

/// Split a base64 `data:` URL into its MIME type and decoded bytes.
///
/// Returns `None` for URLs that are not base64 data URLs or whose payload
/// is not valid base64.
pub fn parse_data_url(url: &str) -> Option<(&str, Vec<u8>)> {
    let rest = url.strip_prefix("data:")?;
    let (header, payload) = rest.split_once(',')?;
    let mime_type = header.strip_suffix(";base64")?;
    let bytes = STANDARD.decode(payload).ok()?;
    Some((mime_type, bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_data_url() {
        assert_eq!(to_data_url("image/webp", b"abc"), "data:image/webp;base64,YWJj");
        assert_eq!(to_data_url("image/png", &[]), "data:image/png;base64,");
    }

    #[test]
    fn test_parse_data_url() {
        let (mime, bytes) = parse_data_url("data:image/jpeg;base64,/9j/").unwrap();
        assert_eq!(mime, "image/jpeg");
        assert_eq!(bytes, vec![0xFF, 0xD8, 0xFF]);
    }

    #[test]
    fn test_parse_rejects_non_base64() {
        assert!(parse_data_url("https://a.ppy.sh/1").is_none());
        assert!(parse_data_url("data:text/plain,hello").is_none());
        assert!(parse_data_url("data:image/png;base64,@@@").is_none());
    }
}
