use std::io::Cursor;
use std::path::PathBuf;

use base64::Engine as _;
use image::ImageFormat;
use uuid::Uuid;

use critique_core::{AssetId, DesignAsset};

#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("could not decode image: {0}")]
    Decode(String),
    #[error("could not encode image: {0}")]
    Encode(String),
    #[error("temp file I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// A design asset normalized to PNG and materialized on disk, the stable
/// addressable representation handed to the remote call.
#[derive(Debug)]
pub struct ConvertedAsset {
    pub asset_id: AssetId,
    pub name: String,
    pub path: PathBuf,
}

/// Normalize an uploaded image to PNG and write it to a uniquely named file
/// in the platform temp directory. The file is written once here and read
/// once when the remote call is assembled; the temp directory owns its
/// lifetime afterwards.
pub fn convert_asset(asset: &DesignAsset) -> Result<ConvertedAsset, ConvertError> {
    let decoded =
        image::load_from_memory(&asset.bytes).map_err(|e| ConvertError::Decode(e.to_string()))?;

    let mut encoded = Cursor::new(Vec::new());
    decoded
        .write_to(&mut encoded, ImageFormat::Png)
        .map_err(|e| ConvertError::Encode(e.to_string()))?;

    let path = std::env::temp_dir().join(format!("{}.png", Uuid::now_v7().simple()));
    std::fs::write(&path, encoded.get_ref())?;

    Ok(ConvertedAsset {
        asset_id: asset.id.clone(),
        name: asset.name.clone(),
        path,
    })
}

/// Read a converted asset back and base64-encode it for transmission.
pub fn read_base64(converted: &ConvertedAsset) -> Result<String, ConvertError> {
    let bytes = std::fs::read(&converted.path)?;
    Ok(base64::engine::general_purpose::STANDARD.encode(bytes))
}

/// Decode a `data:<mime>;base64,<payload>` URL produced by the paste
/// control. Returns None for anything that is not a base64 data URL.
pub fn decode_data_url(url: &str) -> Option<Vec<u8>> {
    let rest = url.strip_prefix("data:")?;
    let (meta, payload) = rest.split_once(',')?;
    if !meta.ends_with(";base64") {
        return None;
    }
    base64::engine::general_purpose::STANDARD.decode(payload).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny_png() -> Vec<u8> {
        let img = image::RgbaImage::from_pixel(2, 2, image::Rgba([12, 34, 56, 255]));
        let mut buf = Cursor::new(Vec::new());
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut buf, ImageFormat::Png)
            .unwrap();
        buf.into_inner()
    }

    #[test]
    fn converts_to_png_in_temp_dir() {
        let asset = DesignAsset::new("screen.png", tiny_png());
        let converted = convert_asset(&asset).unwrap();

        assert_eq!(converted.name, "screen.png");
        assert_eq!(converted.asset_id, asset.id);
        assert!(converted.path.starts_with(std::env::temp_dir()));
        assert_eq!(converted.path.extension().unwrap(), "png");

        let written = std::fs::read(&converted.path).unwrap();
        assert_eq!(&written[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn jpeg_input_is_reencoded_to_png() {
        let img = image::RgbImage::from_pixel(2, 2, image::Rgb([200, 100, 50]));
        let mut buf = Cursor::new(Vec::new());
        image::DynamicImage::ImageRgb8(img)
            .write_to(&mut buf, ImageFormat::Jpeg)
            .unwrap();

        let asset = DesignAsset::new("photo.jpg", buf.into_inner());
        let converted = convert_asset(&asset).unwrap();
        let written = std::fs::read(&converted.path).unwrap();
        assert_eq!(&written[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn garbage_bytes_fail_with_decode_error() {
        let asset = DesignAsset::new("not-an-image.png", vec![0u8; 32]);
        let err = convert_asset(&asset).unwrap_err();
        assert!(matches!(err, ConvertError::Decode(_)));
    }

    #[test]
    fn unique_paths_per_conversion() {
        let asset = DesignAsset::new("screen.png", tiny_png());
        let a = convert_asset(&asset).unwrap();
        let b = convert_asset(&asset).unwrap();
        assert_ne!(a.path, b.path);
    }

    #[test]
    fn read_base64_roundtrips() {
        use base64::Engine as _;
        let asset = DesignAsset::new("screen.png", tiny_png());
        let converted = convert_asset(&asset).unwrap();
        let encoded = read_base64(&converted).unwrap();
        let decoded = base64::engine::general_purpose::STANDARD
            .decode(encoded)
            .unwrap();
        assert_eq!(&decoded[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn data_url_decodes() {
        use base64::Engine as _;
        let payload = base64::engine::general_purpose::STANDARD.encode(tiny_png());
        let url = format!("data:image/png;base64,{payload}");
        let decoded = decode_data_url(&url).unwrap();
        assert_eq!(&decoded[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn non_base64_data_url_rejected() {
        assert!(decode_data_url("data:text/plain,hello").is_none());
        assert!(decode_data_url("https://example.com/a.png").is_none());
        assert!(decode_data_url("data:image/png;base64,!!!not-base64!!!").is_none());
    }
}
