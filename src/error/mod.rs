use crate::crop::{CropError, RasterError};
use crate::document::DocumentError;
use crate::state::StateError;
use thiserror::Error;

pub type AppResult<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    State(#[from] StateError),
    #[error(transparent)]
    Crop(#[from] CropError),
    #[error(transparent)]
    Raster(#[from] RasterError),
    #[error(transparent)]
    Document(#[from] DocumentError),
}
