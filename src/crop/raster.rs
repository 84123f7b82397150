use std::io::Cursor;

use base64::{engine::general_purpose::STANDARD, Engine};
use image::codecs::jpeg::JpegEncoder;
use image::{imageops, ImageFormat, Rgb, RgbImage, RgbaImage};
use serde::Deserialize;
use thiserror::Error;

use super::aspect::OutputSize;
use super::decode::DecodedImage;
use crate::geometry::Rect;

pub const DEFAULT_JPEG_QUALITY: u8 = 95;
pub const DEFAULT_MAX_SURFACE_DIMENSION: u32 = 16_384;

const MIME_IMAGE_JPEG: &str = "image/jpeg";
const MIME_IMAGE_PNG: &str = "image/png";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Jpeg,
    Png,
}

impl OutputFormat {
    pub const fn mime(self) -> &'static str {
        match self {
            Self::Jpeg => MIME_IMAGE_JPEG,
            Self::Png => MIME_IMAGE_PNG,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RasterOptions {
    pub format: OutputFormat,
    pub jpeg_quality: u8,
    pub max_surface_dimension: u32,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Jpeg,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            max_surface_dimension: DEFAULT_MAX_SURFACE_DIMENSION,
        }
    }
}

#[derive(Debug, Error)]
pub enum RasterError {
    #[error("source rectangle {width}x{height} has no area")]
    EmptySource { width: f64, height: f64 },
    #[error("cannot allocate a {width}x{height} drawing surface")]
    SurfaceAllocation { width: u32, height: u32 },
    #[error("failed to encode {format:?} output: {source}")]
    Encode {
        format: OutputFormat,
        #[source]
        source: image::ImageError,
    },
}

pub type RasterResult<T> = std::result::Result<T, RasterError>;

/// Self-contained encoded crop output. Owns its bytes; no reference to the source image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    format: OutputFormat,
    width: u32,
    height: u32,
    bytes: Vec<u8>,
}

impl EncodedImage {
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Persistent payload suitable for storing directly in the document.
    pub fn to_data_url(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.format.mime(),
            STANDARD.encode(&self.bytes)
        )
    }
}

/// Output surface size: the pinned size, otherwise the source rectangle's own size.
pub fn output_dimensions(source: Rect, pinned: Option<OutputSize>) -> (u32, u32) {
    match pinned {
        Some(size) => (size.width, size.height),
        None => (round_extent(source.width), round_extent(source.height)),
    }
}

fn round_extent(extent: f64) -> u32 {
    if !extent.is_finite() || extent <= 0.0 {
        return 0;
    }
    extent.round().min(f64::from(u32::MAX)) as u32
}

/// Copies `source` (natural pixel space) from `image` onto a fresh surface and encodes it.
///
/// Parts of `source` outside the image stay empty, as a drawing-surface copy would leave them.
pub fn extract(
    image: &DecodedImage,
    source: Rect,
    pinned: Option<OutputSize>,
    options: RasterOptions,
) -> RasterResult<EncodedImage> {
    if !(source.width.is_finite() && source.height.is_finite())
        || source.is_empty()
        || !source.x.is_finite()
        || !source.y.is_finite()
    {
        return Err(RasterError::EmptySource {
            width: source.width,
            height: source.height,
        });
    }

    let (width, height) = output_dimensions(source, pinned);
    if width == 0
        || height == 0
        || width > options.max_surface_dimension
        || height > options.max_surface_dimension
    {
        tracing::warn!(width, height, "crop output surface rejected");
        return Err(RasterError::SurfaceAllocation { width, height });
    }

    let surface = draw_source_region(image, source, width, height);
    let encoded = encode_surface(&surface, options)?;
    tracing::debug!(
        width,
        height,
        format = ?options.format,
        bytes = encoded.bytes.len(),
        "crop raster extracted"
    );
    Ok(encoded)
}

fn draw_source_region(image: &DecodedImage, source: Rect, width: u32, height: u32) -> RgbaImage {
    let mut surface = RgbaImage::new(width, height);
    let natural = image.natural_size();
    let bounds = Rect::new(0.0, 0.0, natural.width, natural.height);
    let Some(visible) = source.intersection(bounds) else {
        return surface;
    };

    // Whole pixels covering the visible part; the fractional margin is clipped below.
    let src_left = visible.x.floor().max(0.0) as u32;
    let src_top = visible.y.floor().max(0.0) as u32;
    let src_right = (visible.right().ceil().min(natural.width) as u32).max(src_left + 1);
    let src_bottom = (visible.bottom().ceil().min(natural.height) as u32).max(src_top + 1);
    let snapped_width = src_right - src_left;
    let snapped_height = src_bottom - src_top;

    let scale_x = f64::from(width) / source.width;
    let scale_y = f64::from(height) / source.height;
    let resized_width = (f64::from(snapped_width) * scale_x).round().max(1.0) as u32;
    let resized_height = (f64::from(snapped_height) * scale_y).round().max(1.0) as u32;
    let dest_x = ((f64::from(src_left) - source.x) * scale_x).round() as i64;
    let dest_y = ((f64::from(src_top) - source.y) * scale_y).round() as i64;

    let region = image
        .pixels()
        .crop_imm(src_left, src_top, snapped_width, snapped_height)
        .to_rgba8();
    let resampled = imageops::resize(
        &region,
        resized_width,
        resized_height,
        imageops::FilterType::Lanczos3,
    );
    imageops::replace(&mut surface, &resampled, dest_x, dest_y);
    surface
}

fn encode_surface(surface: &RgbaImage, options: RasterOptions) -> RasterResult<EncodedImage> {
    let mut bytes = Vec::new();
    let result = match options.format {
        OutputFormat::Jpeg => {
            let flattened = flatten_onto_black(surface);
            let quality = options.jpeg_quality.clamp(1, 100);
            JpegEncoder::new_with_quality(&mut bytes, quality).encode_image(&flattened)
        }
        OutputFormat::Png => surface.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png),
    };
    result.map_err(|source| {
        tracing::warn!(error = %source, format = ?options.format, "crop encode failed");
        RasterError::Encode {
            format: options.format,
            source,
        }
    })?;

    Ok(EncodedImage {
        format: options.format,
        width: surface.width(),
        height: surface.height(),
        bytes,
    })
}

/// JPEG has no alpha channel; composite onto black the way a canvas export does.
fn flatten_onto_black(surface: &RgbaImage) -> RgbImage {
    let mut flattened = RgbImage::new(surface.width(), surface.height());
    for (src, dst) in surface.pixels().zip(flattened.pixels_mut()) {
        let [r, g, b, a] = src.0;
        let alpha = u16::from(a);
        let premultiply = |channel: u8| ((u16::from(channel) * alpha + 127) / 255) as u8;
        *dst = Rgb([premultiply(r), premultiply(g), premultiply(b)]);
    }
    flattened
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crop::decode::{decode_data_url, decode_image};
    use image::{DynamicImage, GenericImageView, Rgba};

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
    const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);

    fn split_image(width: u32, height: u32) -> DecodedImage {
        let image = RgbaImage::from_fn(width, height, |x, _| if x < width / 2 { RED } else { BLUE });
        DecodedImage::new(DynamicImage::ImageRgba8(image)).expect("fixture image")
    }

    fn png_options() -> RasterOptions {
        RasterOptions {
            format: OutputFormat::Png,
            ..RasterOptions::default()
        }
    }

    #[test]
    fn pinned_output_size_is_exact_regardless_of_source() {
        let image = split_image(200, 100);
        let encoded = extract(
            &image,
            Rect::new(10.5, 3.25, 77.3, 40.1),
            Some(OutputSize::new(64, 32)),
            RasterOptions::default(),
        )
        .expect("extract");
        assert_eq!(encoded.dimensions(), (64, 32));
        let decoded = decode_image(encoded.bytes()).expect("decode jpeg output");
        assert_eq!(decoded.pixels().dimensions(), (64, 32));
    }

    #[test]
    fn unpinned_output_follows_source_rectangle_size() {
        let image = split_image(200, 100);
        let encoded = extract(
            &image,
            Rect::new(0.0, 0.0, 120.4, 59.6),
            None,
            RasterOptions::default(),
        )
        .expect("extract");
        assert_eq!(encoded.dimensions(), (120, 60));
    }

    #[test]
    fn extract_copies_the_requested_region() {
        let image = split_image(200, 100);
        let encoded = extract(&image, Rect::new(100.0, 0.0, 100.0, 100.0), None, png_options())
            .expect("extract right half");
        let decoded = decode_image(encoded.bytes()).expect("decode png output");
        let pixel = decoded.pixels().get_pixel(50, 50);
        assert_eq!(pixel, BLUE);
    }

    #[test]
    fn fractional_source_upscale_keeps_edges_in_place() {
        let image = split_image(100, 10);
        let encoded = extract(
            &image,
            Rect::new(40.9, 0.0, 9.2, 10.0),
            Some(OutputSize::new(92, 10)),
            png_options(),
        )
        .expect("extract fractional region");
        let decoded = decode_image(encoded.bytes()).expect("decode png output");
        let first_blue = (0..92)
            .find(|&x| {
                let Rgba([r, _, b, _]) = decoded.pixels().get_pixel(x, 5);
                b > r
            })
            .expect("blue half is visible");
        // Source column 50 lands at (50 - 40.9) * 10 = 91.
        assert!((90..=92).contains(&first_blue), "first blue column {first_blue}");
    }

    #[test]
    fn region_outside_the_image_stays_transparent() {
        let image = split_image(100, 100);
        let encoded = extract(&image, Rect::new(-100.0, 0.0, 200.0, 100.0), None, png_options())
            .expect("extract overhanging region");
        let decoded = decode_image(encoded.bytes()).expect("decode png output");
        assert_eq!(decoded.pixels().get_pixel(20, 50)[3], 0);
        assert_eq!(decoded.pixels().get_pixel(130, 50), RED);
    }

    #[test]
    fn payload_survives_dropping_the_source_image() {
        let image = split_image(64, 64);
        let encoded = extract(
            &image,
            Rect::new(0.0, 0.0, 64.0, 64.0),
            None,
            RasterOptions::default(),
        )
        .expect("extract");
        drop(image);

        let url = encoded.to_data_url();
        assert!(url.starts_with("data:image/jpeg;base64,"));
        let decoded = decode_data_url(&url).expect("payload decodes on its own");
        assert_eq!(decoded.pixels().dimensions(), (64, 64));
    }

    #[test]
    fn oversized_surface_is_an_allocation_failure() {
        let image = split_image(10, 10);
        let options = RasterOptions {
            max_surface_dimension: 32,
            ..RasterOptions::default()
        };
        let err = extract(
            &image,
            Rect::new(0.0, 0.0, 10.0, 10.0),
            Some(OutputSize::new(64, 16)),
            options,
        )
        .expect_err("surface too large");
        assert!(matches!(
            err,
            RasterError::SurfaceAllocation {
                width: 64,
                height: 16
            }
        ));
    }

    #[test]
    fn empty_source_is_rejected() {
        let image = split_image(10, 10);
        let err = extract(
            &image,
            Rect::new(0.0, 0.0, 0.0, 10.0),
            None,
            RasterOptions::default(),
        )
        .expect_err("empty source");
        assert!(matches!(err, RasterError::EmptySource { .. }));
    }

    #[test]
    fn flatten_onto_black_premultiplies_alpha() {
        let surface = RgbaImage::from_pixel(1, 1, Rgba([200, 100, 50, 0]));
        assert_eq!(flatten_onto_black(&surface).get_pixel(0, 0), &Rgb([0, 0, 0]));
        let surface = RgbaImage::from_pixel(1, 1, Rgba([200, 100, 50, 255]));
        assert_eq!(flatten_onto_black(&surface).get_pixel(0, 0), &Rgb([200, 100, 50]));
    }
}
