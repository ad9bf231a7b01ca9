//! Hall ticket QR code generation

use std::fs;

use image::Luma;
use qrcode::QrCode;

use crate::config::StorageConfig;
use crate::error::{AppError, AppResult};

/// Render the QR code PNG for a hall ticket and return its media-relative path
///
/// The image encodes `HT-{hall_ticket_number}` and is written under
/// `{media_root}/qr_codes/qr_{hall_ticket_number}.png`. The stored path is
/// relative to the media root so the serving prefix stays configurable.
pub fn write_ticket_qr(storage: &StorageConfig, hall_ticket_number: &str) -> AppResult<String> {
    let dir = storage.qr_codes_dir();
    fs::create_dir_all(&dir)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to create QR directory: {}", e)))?;

    let payload = format!("HT-{}", hall_ticket_number);
    let code = QrCode::new(payload.as_bytes())
        .map_err(|e| AppError::Internal(anyhow::anyhow!("QR encoding failed: {}", e)))?;

    let image = code.render::<Luma<u8>>().module_dimensions(10, 10).build();

    let file_name = format!("qr_{}.png", hall_ticket_number);
    image
        .save(dir.join(&file_name))
        .map_err(|e| AppError::Internal(anyhow::anyhow!("QR image write failed: {}", e)))?;

    Ok(format!("qr_codes/{}", file_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_ticket_qr_creates_png() {
        let dir = tempfile::tempdir().unwrap();
        let storage = StorageConfig {
            media_root: dir.path().to_path_buf(),
        };

        let relative = write_ticket_qr(&storage, "HT2024001").unwrap();

        assert_eq!(relative, "qr_codes/qr_HT2024001.png");
        assert!(dir.path().join("qr_codes").join("qr_HT2024001.png").exists());
    }

    #[test]
    fn test_write_ticket_qr_is_idempotent_per_number() {
        let dir = tempfile::tempdir().unwrap();
        let storage = StorageConfig {
            media_root: dir.path().to_path_buf(),
        };

        let first = write_ticket_qr(&storage, "HT42").unwrap();
        let second = write_ticket_qr(&storage, "HT42").unwrap();

        assert_eq!(first, second);
    }
}
