//! Slider track geometry: pointer position ↔ normalized value.
//!
//! The indicator's center travels between `indicator_size / 2` and
//! `track_width - indicator_size / 2`, so the usable range is
//! `track_width - indicator_size`. Both mappings below use the same
//! expression so a dragged indicator sits exactly under the pointer.

/// Track measurements for one interaction, resolved at layout time.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SliderGeometry {
    track_width: f64,
    indicator_size: f64,
}

impl SliderGeometry {
    /// Negative or NaN sizes are treated as zero.
    pub fn new(track_width: f64, indicator_size: f64) -> Self {
        Self {
            track_width: track_width.max(0.0),
            indicator_size: indicator_size.max(0.0),
        }
    }

    pub fn track_width(&self) -> f64 {
        self.track_width
    }

    pub fn indicator_size(&self) -> f64 {
        self.indicator_size
    }

    /// Distance available to the indicator center. May be zero or negative
    /// when the track is narrower than the indicator.
    pub fn effective_width(&self) -> f64 {
        self.track_width - self.indicator_size
    }

    fn is_degenerate(&self) -> bool {
        let effective = self.effective_width();
        !(effective.is_finite() && effective > 0.0)
    }

    /// Map a pointer x (relative to the track's left edge) to 0.0–1.0.
    ///
    /// Degenerate geometry and non-finite input yield 0.0.
    pub fn position_to_value(&self, pointer_x: f64) -> f64 {
        if self.is_degenerate() || !pointer_x.is_finite() {
            return 0.0;
        }
        // Equivalent to pinning the pointer to [half, track_width - half].
        let travel = pointer_x - self.indicator_size / 2.0;
        (travel / self.effective_width()).clamp(0.0, 1.0)
    }

    /// Indicator center x for `value`. Inverse of [`position_to_value`](Self::position_to_value).
    ///
    /// With degenerate geometry the indicator is centered on the track.
    pub fn value_to_offset(&self, value: f64) -> f64 {
        if self.is_degenerate() {
            return self.track_width / 2.0;
        }
        let value = if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) };
        value * self.effective_width() + self.indicator_size / 2.0
    }

    /// Left edge of the indicator for `value`.
    pub fn indicator_left(&self, value: f64) -> f64 {
        self.value_to_offset(value) - self.indicator_size / 2.0
    }
}

/// See [`SliderGeometry::position_to_value`].
pub fn position_to_value(pointer_x: f64, track_width: f64, indicator_size: f64) -> f64 {
    SliderGeometry::new(track_width, indicator_size).position_to_value(pointer_x)
}

/// See [`SliderGeometry::value_to_offset`].
pub fn value_to_offset(value: f64, track_width: f64, indicator_size: f64) -> f64 {
    SliderGeometry::new(track_width, indicator_size).value_to_offset(value)
}
