use super::aspect::{CropRequest, OutputSize, TargetAspect};
use super::decode::DecodedImage;
use super::engine;
use super::error::{CropError, CropResult};
use super::raster::{self, RasterOptions};
use crate::geometry::{Point, Rect, Size};
use crate::state::{CropEvent, CropPhase, StateError, StateMachine, StateTransition};

/// Window-wide pointer listeners.
///
/// Drags routinely leave the image element, so move/release events are taken
/// from the whole viewport while a drag is in progress and only then.
pub trait PointerTracking {
    fn attach_window_listeners(&mut self);
    fn detach_window_listeners(&mut self);
}

#[derive(Debug, Default)]
pub struct NoopPointerTracking;

impl PointerTracking for NoopPointerTracking {
    fn attach_window_listeners(&mut self) {}
    fn detach_window_listeners(&mut self) {}
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CommittedCrop {
    pub source_rect: Rect,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug)]
struct LoadedImage {
    image: DecodedImage,
    container: Size,
    display: Size,
    pan: Point,
    zoom: f64,
    drag_anchor: Option<Point>,
}

impl LoadedImage {
    fn clamped_pan(&self, candidate: Point, aspect: TargetAspect) -> Point {
        engine::clamp_pan(candidate, self.zoom, self.display, self.container, aspect)
    }
}

/// One open instance of the crop/zoom/pan interaction.
///
/// Built fresh for every modal open; everything it holds is dropped on commit or cancel.
#[derive(Debug)]
pub struct CropSession<P: PointerTracking = NoopPointerTracking> {
    machine: StateMachine,
    request: CropRequest,
    aspect: TargetAspect,
    raster_options: RasterOptions,
    tracker: P,
    loaded: Option<LoadedImage>,
}

impl CropSession<NoopPointerTracking> {
    pub fn open(request: CropRequest) -> Self {
        Self::with_tracker(request, NoopPointerTracking)
    }
}

impl<P: PointerTracking> CropSession<P> {
    pub fn with_tracker(request: CropRequest, tracker: P) -> Self {
        Self {
            machine: StateMachine::new(),
            aspect: request.target_aspect(),
            request,
            raster_options: RasterOptions::default(),
            tracker,
            loaded: None,
        }
    }

    pub fn with_raster_options(mut self, raster_options: RasterOptions) -> Self {
        self.raster_options = raster_options;
        self
    }

    pub fn phase(&self) -> CropPhase {
        self.machine.phase()
    }

    pub fn is_dragging(&self) -> bool {
        self.phase() == CropPhase::Dragging
    }

    pub fn transitions(&self) -> &[StateTransition] {
        self.machine.history()
    }

    pub fn tracker(&self) -> &P {
        &self.tracker
    }

    pub fn target_aspect(&self) -> TargetAspect {
        self.aspect
    }

    pub fn output_size(&self) -> Option<OutputSize> {
        self.request.output_size
    }

    pub fn zoom(&self) -> Option<f64> {
        self.loaded.as_ref().map(|loaded| loaded.zoom)
    }

    pub fn zoom_percent(&self) -> Option<u32> {
        self.zoom().map(|zoom| (zoom * 100.0).round() as u32)
    }

    pub fn can_zoom_in(&self) -> bool {
        self.zoom().is_some_and(|zoom| zoom < engine::ZOOM_MAX)
    }

    pub fn can_zoom_out(&self) -> bool {
        self.zoom().is_some_and(|zoom| zoom > engine::ZOOM_MIN)
    }

    pub fn pan(&self) -> Option<Point> {
        self.loaded.as_ref().map(|loaded| loaded.pan)
    }

    pub fn display_size(&self) -> Option<Size> {
        self.loaded.as_ref().map(|loaded| loaded.display)
    }

    pub fn natural_size(&self) -> Option<Size> {
        self.loaded.as_ref().map(|loaded| loaded.image.natural_size())
    }

    /// Container-space rectangle of the zoomed image, for drawing it.
    pub fn image_rect(&self) -> Option<Rect> {
        self.loaded
            .as_ref()
            .map(|loaded| engine::image_rect(loaded.pan, loaded.display, loaded.zoom))
    }

    /// Container-space rectangle of the crop box overlay.
    pub fn crop_box_rect(&self) -> Option<Rect> {
        self.loaded.as_ref().map(|loaded| {
            engine::crop_box_rect(loaded.display, loaded.zoom, loaded.container, self.aspect)
        })
    }

    /// `Closed -> Idle`. Stays closed while the container is unmeasured.
    pub fn load(&mut self, image: DecodedImage, container: Size) -> CropResult<()> {
        if !self.machine.can_transition(CropEvent::Load) {
            return Err(StateError::InvalidTransition {
                from: self.phase(),
                event: CropEvent::Load,
            }
            .into());
        }
        let natural = image.natural_size();
        let display_size = engine::fit_to_container(natural, container).ok_or_else(|| {
            tracing::debug!(?container, ?natural, "crop load deferred until measured");
            CropError::ContainerNotMeasured
        })?;

        self.loaded = Some(LoadedImage {
            image,
            container,
            display: display_size,
            pan: engine::initial_pan(container, display_size),
            zoom: engine::ZOOM_DEFAULT,
            drag_anchor: None,
        });
        self.machine.transition(CropEvent::Load)?;
        tracing::info!(?natural, ?display_size, aspect = self.aspect.ratio(), "crop session loaded");
        Ok(())
    }

    /// Starts a drag when `position` (container space) hits the image.
    pub fn pointer_down(&mut self, position: Point) -> bool {
        if self.phase() != CropPhase::Idle {
            return false;
        }
        let Some(loaded) = self.loaded.as_mut() else {
            return false;
        };
        if !engine::image_rect(loaded.pan, loaded.display, loaded.zoom).contains(position) {
            return false;
        }

        loaded.drag_anchor = Some(position.minus(loaded.pan));
        if self.machine.transition(CropEvent::PointerDown).is_err() {
            return false;
        }
        self.tracker.attach_window_listeners();
        true
    }

    pub fn pointer_move(&mut self, position: Point) -> bool {
        if !self.is_dragging() {
            return false;
        }
        let aspect = self.aspect;
        let Some(loaded) = self.loaded.as_mut() else {
            return false;
        };
        let Some(anchor) = loaded.drag_anchor else {
            return false;
        };
        loaded.pan = loaded.clamped_pan(position.minus(anchor), aspect);
        self.machine.transition(CropEvent::PointerMove).is_ok()
    }

    pub fn pointer_up(&mut self) -> bool {
        self.end_drag(CropEvent::PointerUp)
    }

    pub fn pointer_left_window(&mut self) -> bool {
        self.end_drag(CropEvent::PointerLeftWindow)
    }

    fn end_drag(&mut self, event: CropEvent) -> bool {
        if !self.is_dragging() {
            return false;
        }
        if let Some(loaded) = self.loaded.as_mut() {
            loaded.drag_anchor = None;
        }
        self.tracker.detach_window_listeners();
        self.machine.transition(event).is_ok()
    }

    pub fn zoom_in(&mut self) -> bool {
        self.update_zoom(engine::zoom_step_in)
    }

    pub fn zoom_out(&mut self) -> bool {
        self.update_zoom(engine::zoom_step_out)
    }

    pub fn zoom_wheel(&mut self, delta_y: f64) -> bool {
        self.update_zoom(|zoom| engine::zoom_by_wheel(zoom, delta_y))
    }

    pub fn set_zoom(&mut self, zoom: f64) -> bool {
        self.update_zoom(|_| engine::zoom_clamp(zoom))
    }

    /// Pan is deliberately left as-is; the next drag or the commit re-clamps it.
    fn update_zoom(&mut self, next: impl FnOnce(f64) -> f64) -> bool {
        if !self.machine.can_transition(CropEvent::Zoom) {
            return false;
        }
        let Some(loaded) = self.loaded.as_mut() else {
            return false;
        };
        loaded.zoom = next(loaded.zoom);
        self.machine.transition(CropEvent::Zoom).is_ok()
    }

    /// Re-clamps the pan, extracts the crop and hands the encoded payload to
    /// `on_complete` exactly once. On failure the session returns to `Idle`
    /// untouched so the user can retry or cancel.
    pub fn commit<F>(&mut self, on_complete: F) -> CropResult<CommittedCrop>
    where
        F: FnOnce(String),
    {
        if self.is_dragging() {
            self.end_drag(CropEvent::PointerUp);
        }
        if self.loaded.is_none() {
            return Err(CropError::NotLoaded);
        }
        self.machine.transition(CropEvent::Commit)?;

        let aspect = self.aspect;
        let pinned = self.request.output_size;
        let options = self.raster_options;
        let Some(loaded) = self.loaded.as_mut() else {
            return Err(CropError::NotLoaded);
        };
        loaded.pan = loaded.clamped_pan(loaded.pan, aspect);
        let crop_box = engine::crop_box_size(loaded.display, loaded.zoom, loaded.container, aspect);
        let source_rect = engine::source_rect(
            loaded.pan,
            loaded.zoom,
            crop_box,
            loaded.container,
            loaded.display,
            loaded.image.natural_size(),
        );

        let encoded = match raster::extract(&loaded.image, source_rect, pinned, options) {
            Ok(encoded) => encoded,
            Err(err) => {
                tracing::warn!(error = %err, ?source_rect, "crop commit failed");
                self.machine.transition(CropEvent::CommitFailed)?;
                return Err(CropError::Extraction(err));
            }
        };

        let (width, height) = encoded.dimensions();
        on_complete(encoded.to_data_url());
        self.loaded = None;
        self.machine.transition(CropEvent::CommitSucceeded)?;
        tracing::info!(?source_rect, width, height, "crop committed");
        Ok(CommittedCrop {
            source_rect,
            width,
            height,
        })
    }

    /// Closes from any phase without extracting anything.
    pub fn cancel(&mut self) {
        if self.is_dragging() {
            self.tracker.detach_window_listeners();
        }
        self.loaded = None;
        if self.machine.transition(CropEvent::Cancel).is_ok() {
            tracing::info!("crop session cancelled");
        }
    }
}

impl<P: PointerTracking> Drop for CropSession<P> {
    fn drop(&mut self) {
        if self.phase().tracks_window_pointer() {
            self.tracker.detach_window_listeners();
        }
    }
}
