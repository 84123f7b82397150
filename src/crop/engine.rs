//! Pure crop geometry.
//!
//! Three coordinate spaces are involved:
//! - container space: the on-screen viewport, origin at its top-left corner;
//! - display space: the image fitted into the container, before zoom;
//! - natural space: the decoded image's own pixels.
//!
//! `pan` is the container-space position of the zoomed image's top-left corner.
//! The crop box is always centered in the container.

use super::aspect::TargetAspect;
use crate::geometry::{Point, Rect, Size};

pub const ZOOM_MIN: f64 = 0.5;
pub const ZOOM_MAX: f64 = 3.0;
pub const ZOOM_DEFAULT: f64 = 1.0;
pub const ZOOM_BUTTON_STEP: f64 = 0.1;
pub const ZOOM_WHEEL_SENSITIVITY: f64 = -0.001;

/// Scales `natural` so it touches the container on its binding axis while
/// keeping the image's aspect ratio. Returns `None` until both sizes are measured.
pub fn fit_to_container(natural: Size, container: Size) -> Option<Size> {
    if !natural.is_measured() || !container.is_measured() {
        return None;
    }

    let image_aspect = natural.aspect();
    if image_aspect > container.aspect() {
        Some(Size::new(container.width, container.width / image_aspect))
    } else {
        Some(Size::new(container.height * image_aspect, container.height))
    }
}

/// Pan that centers the fitted image in the container.
pub fn initial_pan(container: Size, display: Size) -> Point {
    Point::new(
        (container.width - display.width) / 2.0,
        (container.height - display.height) / 2.0,
    )
}

pub fn zoom_clamp(zoom: f64) -> f64 {
    if zoom.is_nan() {
        return ZOOM_DEFAULT;
    }
    zoom.clamp(ZOOM_MIN, ZOOM_MAX)
}

pub fn zoom_step_in(zoom: f64) -> f64 {
    zoom_clamp(zoom + ZOOM_BUTTON_STEP)
}

pub fn zoom_step_out(zoom: f64) -> f64 {
    zoom_clamp(zoom - ZOOM_BUTTON_STEP)
}

/// Continuous zoom from a scroll wheel; positive `delta_y` (scrolling down) zooms out.
pub fn zoom_by_wheel(zoom: f64, delta_y: f64) -> f64 {
    if !delta_y.is_finite() {
        return zoom_clamp(zoom);
    }
    zoom_clamp(zoom + delta_y * ZOOM_WHEEL_SENSITIVITY)
}

/// Crop box dimensions: as wide as the zoomed image but never wider than the
/// container, with the height following the target aspect.
pub fn crop_box_size(display: Size, zoom: f64, container: Size, aspect: TargetAspect) -> Size {
    let width = (display.width * zoom).min(container.width);
    Size::new(width, width / aspect.ratio())
}

pub fn crop_box_origin(container: Size, crop_box: Size) -> Point {
    Point::new(
        (container.width - crop_box.width) / 2.0,
        (container.height - crop_box.height) / 2.0,
    )
}

pub fn crop_box_rect(display: Size, zoom: f64, container: Size, aspect: TargetAspect) -> Rect {
    let crop_box = crop_box_size(display, zoom, container, aspect);
    Rect::from_origin_size(crop_box_origin(container, crop_box), crop_box)
}

/// Container-space rectangle covered by the zoomed image.
pub fn image_rect(pan: Point, display: Size, zoom: f64) -> Rect {
    Rect::from_origin_size(pan, display.scaled(zoom))
}

/// Legal pan interval on one axis.
///
/// The zoomed image must start at or before the crop box and end at or after it.
/// When the zoomed image is shorter than the crop box the interval collapses to
/// the single point that centers the image on the crop box.
pub fn pan_range(container_extent: f64, crop_extent: f64, zoomed_extent: f64) -> (f64, f64) {
    let crop_start = (container_extent - crop_extent) / 2.0;
    let min = crop_start + crop_extent - zoomed_extent;
    let max = crop_start;
    if min > max {
        let centered = (container_extent - zoomed_extent) / 2.0;
        return (centered, centered);
    }
    (min, max)
}

pub fn clamp_pan(
    candidate: Point,
    zoom: f64,
    display: Size,
    container: Size,
    aspect: TargetAspect,
) -> Point {
    let crop_box = crop_box_size(display, zoom, container, aspect);
    let zoomed = display.scaled(zoom);
    let (min_x, max_x) = pan_range(container.width, crop_box.width, zoomed.width);
    let (min_y, max_y) = pan_range(container.height, crop_box.height, zoomed.height);
    Point::new(candidate.x.clamp(min_x, max_x), candidate.y.clamp(min_y, max_y))
}

/// Maps the crop box back into natural pixel space.
///
/// Callers must clamp `pan` for the current `zoom` first; only then is the
/// result guaranteed to stay inside `[0, natural.width] × [0, natural.height]`.
pub fn source_rect(
    pan: Point,
    zoom: f64,
    crop_box: Size,
    container: Size,
    display: Size,
    natural: Size,
) -> Rect {
    let crop_origin = crop_box_origin(container, crop_box);
    let display_x = (crop_origin.x - pan.x) / zoom;
    let display_y = (crop_origin.y - pan.y) / zoom;
    let display_width = crop_box.width / zoom;
    let display_height = crop_box.height / zoom;

    let scale_x = natural.width / display.width;
    let scale_y = natural.height / display.height;

    Rect::new(
        display_x * scale_x,
        display_y * scale_y,
        display_width * scale_x,
        display_height * scale_y,
    )
}
