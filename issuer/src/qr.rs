use std::path::Path;

use anyhow::Result;
use image::Luma;
use qrcode::{EcLevel, QrCode};

// Pixel width of one module on the printed sheet.
const MODULE_PIXELS: u32 = 10;

pub fn render_qr(url: &str, path: &Path) -> Result<()> {
    let code = QrCode::with_error_correction_level(url, EcLevel::L)?;

    let image = code
        .render::<Luma<u8>>()
        .module_dimensions(MODULE_PIXELS, MODULE_PIXELS)
        .quiet_zone(true)
        .build();

    image.save(path)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use image::GenericImageView;
    use tempfile::tempdir;

    use super::render_qr;

    #[test]
    fn test_render_writes_square_png() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sample_qr.png");

        render_qr(
            "https://certify.example.com/verify/87b98cd4-1d6c-4be2-a30e-7631663ba898",
            &path,
        )
        .unwrap();

        let image = image::open(&path).unwrap();
        let (width, height) = image.dimensions();

        assert_eq!(width, height);
        // smallest possible code at 10px modules with its quiet zone
        assert!(width >= 290);
    }
}
