use base64::{engine::general_purpose::STANDARD, Engine};

use crate::prelude::{AppError, Result};

pub struct AvatarUpload {
    pub data: Vec<u8>,
    pub mime: String,
    pub extension: String,
}

/// Profile pictures arrive as `data:image/...;base64,` URLs straight from
/// the browser's file reader. Strip the header, decode the payload.
pub fn parse_data_url(input: &str) -> Result<AvatarUpload> {
    let (header, payload) = input
        .split_once(',')
        .ok_or_else(|| AppError::Validation("La imagen no es válida".into()))?;
    let mime = header
        .strip_prefix("data:")
        .and_then(|h| h.strip_suffix(";base64"))
        .ok_or_else(|| AppError::Validation("La imagen no es válida".into()))?;
    if !mime.starts_with("image/") {
        return Err(AppError::Validation(
            "Solo se permiten archivos de imagen".into(),
        ));
    }
    let data = STANDARD
        .decode(payload.trim())
        .map_err(|_| AppError::Validation("La imagen no es válida".into()))?;
    let extension = match mime {
        "image/png" => "png",
        "image/jpeg" => "jpg",
        "image/gif" => "gif",
        "image/webp" => "webp",
        _ => "img",
    };
    Ok(AvatarUpload {
        data,
        mime: mime.to_string(),
        extension: extension.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_png_data_url() {
        let upload = parse_data_url("data:image/png;base64,aG9sYQ==").unwrap();
        assert_eq!(upload.data, b"hola");
        assert_eq!(upload.mime, "image/png");
        assert_eq!(upload.extension, "png");
    }

    #[test]
    fn test_rejects_missing_header() {
        assert!(parse_data_url("aG9sYQ==").is_err());
        assert!(parse_data_url("image/png;base64,aG9sYQ==").is_err());
    }

    #[test]
    fn test_rejects_non_image() {
        assert!(parse_data_url("data:application/pdf;base64,aG9sYQ==").is_err());
    }

    #[test]
    fn test_rejects_bad_base64() {
        assert!(parse_data_url("data:image/png;base64,???").is_err());
    }
}
