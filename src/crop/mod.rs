//! Interactive crop/zoom/pan: geometry, raster extraction and the session controller.

pub mod aspect;
pub mod decode;
pub mod engine;
pub mod error;
pub mod raster;
pub mod session;

pub use aspect::{CropRequest, OutputSize, TargetAspect};
pub use decode::{decode_data_url, decode_image, DecodedImage};
pub use error::{CropError, CropResult};
pub use raster::{EncodedImage, OutputFormat, RasterError, RasterOptions};
pub use session::{CommittedCrop, CropSession, NoopPointerTracking, PointerTracking};
