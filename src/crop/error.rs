use super::raster::RasterError;
use crate::state::StateError;
use thiserror::Error;

pub type CropResult<T> = std::result::Result<T, CropError>;

#[derive(Debug, Error)]
pub enum CropError {
    #[error("failed to decode image: {source}")]
    Decode {
        #[source]
        source: image::ImageError,
    },
    #[error("invalid image data url: {reason}")]
    InvalidDataUrl { reason: &'static str },
    #[error("decoded image has no pixels")]
    EmptyImage,
    #[error("crop container has not been measured yet")]
    ContainerNotMeasured,
    #[error("no image is loaded in the crop session")]
    NotLoaded,
    #[error(transparent)]
    Transition(#[from] StateError),
    #[error("crop extraction failed: {0}")]
    Extraction(#[from] RasterError),
}
