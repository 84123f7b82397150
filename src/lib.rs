pub mod config;
pub mod crop;
pub mod document;
pub mod editor;
pub mod error;
pub mod geometry;
pub mod input;
pub mod logging;
pub mod state;
pub use error::{AppError, AppResult};

use crate::crop::{decode_image, CropRequest, CropSession, OutputSize, RasterOptions};
use crate::geometry::{Point, Size};

/// Parameters of one headless crop: the gestures a user would have made in the modal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropJob {
    pub request: CropRequest,
    pub container: Size,
    pub zoom: f64,
    pub pan_delta: Point,
    pub raster: RasterOptions,
}

impl Default for CropJob {
    fn default() -> Self {
        Self {
            request: CropRequest::default(),
            container: Size::new(800.0, 600.0),
            zoom: crop::engine::ZOOM_DEFAULT,
            pan_delta: Point::new(0.0, 0.0),
            raster: RasterOptions::default(),
        }
    }
}

/// Output of [`run_crop`]: the encoded bytes and the payload URL stored in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CropOutput {
    pub bytes: Vec<u8>,
    pub data_url: String,
    pub size: OutputSize,
}

/// Runs a full crop session without a UI: load, zoom, drag by `pan_delta`, commit.
pub fn run_crop(input: &[u8], job: CropJob) -> AppResult<CropOutput> {
    let image = decode_image(input)?;
    let mut session = CropSession::open(job.request).with_raster_options(job.raster);
    session.load(image, job.container)?;
    session.set_zoom(job.zoom);

    if job.pan_delta != Point::new(0.0, 0.0) {
        if let Some(start) = session.image_rect().map(|rect| rect.center()) {
            session.pointer_down(start);
            session.pointer_move(start.offset_by(job.pan_delta));
            session.pointer_up();
        }
    }

    let mut data_url = String::new();
    let committed = session.commit(|payload| data_url = payload)?;
    let bytes = crop::decode::data_url_bytes(&data_url)?;
    tracing::info!(
        width = committed.width,
        height = committed.height,
        "headless crop finished"
    );
    Ok(CropOutput {
        bytes,
        data_url,
        size: OutputSize::new(committed.width, committed.height),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageFormat, RgbaImage};
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let image = RgbaImage::from_pixel(width, height, image::Rgba([90, 60, 30, 255]));
        let mut bytes = Vec::new();
        DynamicImage::ImageRgba8(image)
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .expect("encode fixture");
        bytes
    }

    #[test]
    fn run_crop_honours_a_pinned_size() {
        let job = CropJob {
            request: CropRequest::pinned(120, 60),
            container: Size::new(400.0, 300.0),
            zoom: 2.0,
            pan_delta: Point::new(30.0, -10.0),
            ..CropJob::default()
        };
        let output = run_crop(&png_bytes(400, 300), job).expect("crop");
        assert_eq!(output.size, OutputSize::new(120, 60));
        assert!(output.data_url.starts_with("data:image/jpeg;base64,"));
        let decoded = decode_image(&output.bytes).expect("bytes decode");
        assert_eq!(decoded.natural_size(), Size::new(120.0, 60.0));
    }

    #[test]
    fn run_crop_surfaces_decode_failures() {
        let err = run_crop(b"nope", CropJob::default()).expect_err("not an image");
        assert!(matches!(err, AppError::Crop(crop::CropError::Decode { .. })));
    }
}
