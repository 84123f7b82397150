/// Output size pinned by a call site; every crop from that site is exactly this size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputSize {
    pub width: u32,
    pub height: u32,
}

impl OutputSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn label(self) -> String {
        format!("{} × {}px", self.width, self.height)
    }
}

/// What a call site asks of a crop: an optional pinned output size and an
/// optional fallback ratio used when no size is pinned.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CropRequest {
    pub output_size: Option<OutputSize>,
    pub aspect_ratio: Option<f64>,
}

impl CropRequest {
    pub const fn pinned(width: u32, height: u32) -> Self {
        Self {
            output_size: Some(OutputSize::new(width, height)),
            aspect_ratio: None,
        }
    }

    pub const fn with_ratio(aspect_ratio: f64) -> Self {
        Self {
            output_size: None,
            aspect_ratio: Some(aspect_ratio),
        }
    }

    /// Resolves the crop-box shape for a session.
    ///
    /// A pinned size wins, then the fallback ratio, then a square box.
    /// Zero or non-finite inputs are skipped rather than producing a degenerate box.
    pub fn target_aspect(&self) -> TargetAspect {
        self.output_size
            .filter(|size| size.width > 0 && size.height > 0)
            .map(|size| f64::from(size.width) / f64::from(size.height))
            .or(self.aspect_ratio)
            .filter(|ratio| ratio.is_finite() && *ratio > 0.0)
            .map(TargetAspect)
            .unwrap_or_default()
    }
}

/// Width-over-height ratio of the crop box. Fixed for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetAspect(f64);

impl TargetAspect {
    pub const SQUARE: TargetAspect = TargetAspect(1.0);

    pub fn new(ratio: f64) -> Option<Self> {
        (ratio.is_finite() && ratio > 0.0).then_some(Self(ratio))
    }

    pub const fn ratio(self) -> f64 {
        self.0
    }
}

impl Default for TargetAspect {
    fn default() -> Self {
        Self::SQUARE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pinned_size_takes_precedence_over_fallback_ratio() {
        let request = CropRequest {
            output_size: Some(OutputSize::new(1200, 600)),
            aspect_ratio: Some(0.5),
        };
        assert_eq!(request.target_aspect().ratio(), 2.0);
    }

    #[test]
    fn fallback_ratio_is_used_without_pinned_size() {
        assert_eq!(CropRequest::with_ratio(1.5).target_aspect().ratio(), 1.5);
    }

    #[test]
    fn missing_or_invalid_inputs_resolve_to_square() {
        assert_eq!(CropRequest::default().target_aspect(), TargetAspect::SQUARE);
        assert_eq!(
            CropRequest::with_ratio(f64::NAN).target_aspect(),
            TargetAspect::SQUARE
        );
        let zero_pin = CropRequest {
            output_size: Some(OutputSize::new(0, 600)),
            aspect_ratio: Some(3.0),
        };
        assert_eq!(zero_pin.target_aspect().ratio(), 3.0);
    }

    #[test]
    fn output_size_label_formats_dimensions() {
        assert_eq!(OutputSize::new(800, 1066).label(), "800 × 1066px");
    }
}
