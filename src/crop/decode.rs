use base64::{engine::general_purpose::STANDARD, Engine};
use image::{DynamicImage, GenericImageView};

use super::error::{CropError, CropResult};
use crate::geometry::Size;

const DATA_URL_PREFIX: &str = "data:";
const BASE64_MARKER: &str = ";base64";

/// A decoded image ready for a crop session.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    image: DynamicImage,
}

impl DecodedImage {
    pub fn new(image: DynamicImage) -> CropResult<Self> {
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(CropError::EmptyImage);
        }
        Ok(Self { image })
    }

    pub fn natural_size(&self) -> Size {
        let (width, height) = self.image.dimensions();
        Size::from_pixels(width, height)
    }

    pub fn pixels(&self) -> &DynamicImage {
        &self.image
    }
}

/// Decodes an image file's bytes, sniffing the format from its contents.
pub fn decode_image(bytes: &[u8]) -> CropResult<DecodedImage> {
    let image = image::load_from_memory(bytes).map_err(|source| {
        tracing::warn!(error = %source, len = bytes.len(), "image decode failed");
        CropError::Decode { source }
    })?;
    DecodedImage::new(image)
}

/// Decodes a `data:<mime>;base64,<payload>` URL such as a file reader produces.
pub fn decode_data_url(url: &str) -> CropResult<DecodedImage> {
    decode_image(&data_url_bytes(url)?)
}

/// Raw bytes carried by a base64 `data:` URL.
pub fn data_url_bytes(url: &str) -> CropResult<Vec<u8>> {
    let rest = url
        .strip_prefix(DATA_URL_PREFIX)
        .ok_or(CropError::InvalidDataUrl {
            reason: "missing data: scheme",
        })?;
    let (header, payload) = rest.split_once(',').ok_or(CropError::InvalidDataUrl {
        reason: "missing payload separator",
    })?;
    if !header.ends_with(BASE64_MARKER) {
        return Err(CropError::InvalidDataUrl {
            reason: "payload is not base64 encoded",
        });
    }
    STANDARD
        .decode(payload.trim())
        .map_err(|_| CropError::InvalidDataUrl {
            reason: "payload is not valid base64",
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, RgbaImage};
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let image = RgbaImage::from_pixel(width, height, image::Rgba([10, 20, 30, 255]));
        let mut bytes = Vec::new();
        DynamicImage::ImageRgba8(image)
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .expect("encode png fixture");
        bytes
    }

    #[test]
    fn decode_image_reports_natural_size() {
        let decoded = decode_image(&png_bytes(40, 25)).expect("decode png");
        assert_eq!(decoded.natural_size(), Size::new(40.0, 25.0));
    }

    #[test]
    fn decode_image_rejects_corrupt_bytes() {
        let err = decode_image(b"definitely not an image").expect_err("corrupt input");
        assert!(matches!(err, CropError::Decode { .. }));
    }

    #[test]
    fn decode_data_url_round_trips_file_reader_output() {
        let url = format!("data:image/png;base64,{}", STANDARD.encode(png_bytes(8, 6)));
        let decoded = decode_data_url(&url).expect("decode data url");
        assert_eq!(decoded.natural_size(), Size::new(8.0, 6.0));
    }

    #[test]
    fn decode_data_url_rejects_non_data_urls() {
        assert!(matches!(
            decode_data_url("https://example.com/a.png"),
            Err(CropError::InvalidDataUrl { .. })
        ));
        assert!(matches!(
            decode_data_url("data:image/png,rawbytes"),
            Err(CropError::InvalidDataUrl { .. })
        ));
    }

    #[test]
    fn empty_image_is_rejected() {
        let err = DecodedImage::new(DynamicImage::new_rgba8(0, 4)).expect_err("empty image");
        assert!(matches!(err, CropError::EmptyImage));
    }
}
