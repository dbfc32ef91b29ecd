//! Sizing and layout configuration for the picker.

/// Default slider track height
pub const TRACK_HEIGHT: f64 = 26.0;

/// Default indicator diameter
pub const INDICATOR_SIZE: f64 = 20.0;

/// Default white ring width around the indicator fill
pub const INDICATOR_RING: f64 = 6.0;

/// Default gap between picker elements
pub const GAP: f64 = 12.0;

/// Default checkerboard cell size (for alpha backgrounds)
pub const CHECKER_CELL: f64 = 5.0;

/// Layout knobs for [`hsva_picker_with_config`](crate::hsva_picker_with_config).
///
/// All sizes are in device-independent pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PickerConfig {
    /// Height of each slider track and of the preview swatch.
    pub track_height: f64,
    /// Diameter of the draggable indicator. Also the inset that keeps the
    /// indicator center inside the track.
    pub indicator_size: f64,
    pub indicator_ring: f64,
    pub gap: f64,
    pub padding: f64,
    pub checker_cell: f64,
    /// Show the alpha slider. Ignored when the `alpha` feature is disabled.
    pub show_alpha: bool,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            track_height: TRACK_HEIGHT,
            indicator_size: INDICATOR_SIZE,
            indicator_ring: INDICATOR_RING,
            gap: GAP,
            padding: 0.0,
            checker_cell: CHECKER_CELL,
            show_alpha: true,
        }
    }
}

impl PickerConfig {
    pub fn with_track_height(mut self, height: f64) -> Self {
        self.track_height = height.max(0.0);
        self
    }

    pub fn with_indicator_size(mut self, size: f64) -> Self {
        self.indicator_size = size.max(0.0);
        self
    }

    pub fn with_gap(mut self, gap: f64) -> Self {
        self.gap = gap.max(0.0);
        self
    }

    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding.max(0.0);
        self
    }

    pub fn with_alpha(mut self, show: bool) -> Self {
        self.show_alpha = show;
        self
    }

    /// Corner radius that turns a track into a pill.
    pub(crate) fn track_radius(&self) -> f64 {
        self.track_height / 2.0
    }

    pub(crate) fn alpha_visible(&self) -> bool {
        cfg!(feature = "alpha") && self.show_alpha
    }
}
