//! The four color axes a slider can edit.

use crate::color::{Hsva, Rgba};

/// One channel of an [`Hsva`] color, exposed as a 0.0–1.0 slider axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorAxis {
    Hue,
    Saturation,
    Value,
    Alpha,
}

impl ColorAxis {
    pub const ALL: [ColorAxis; 4] = [
        ColorAxis::Hue,
        ColorAxis::Saturation,
        ColorAxis::Value,
        ColorAxis::Alpha,
    ];

    /// Channel value at the right end of the track.
    pub fn max(self) -> f64 {
        match self {
            ColorAxis::Hue => Hsva::MAX_HUE,
            _ => 1.0,
        }
    }

    /// This axis' channel of `hsva`, normalized to 0.0–1.0.
    pub fn normalized(self, hsva: &Hsva) -> f64 {
        match self {
            ColorAxis::Hue => hsva.hue() / Hsva::MAX_HUE,
            ColorAxis::Saturation => hsva.saturation(),
            ColorAxis::Value => hsva.value(),
            ColorAxis::Alpha => hsva.alpha(),
        }
    }

    /// Replace this axis' channel of `hsva` with normalized `t`.
    pub fn with_normalized(self, hsva: Hsva, t: f64) -> Hsva {
        let v = t * self.max();
        match self {
            ColorAxis::Hue => hsva.with_hue(v),
            ColorAxis::Saturation => hsva.with_saturation(v),
            ColorAxis::Value => hsva.with_value(v),
            ColorAxis::Alpha => hsva.with_alpha(v),
        }
    }

    /// Track color at fraction `t` (0.0 = left edge, 1.0 = right edge).
    ///
    /// - hue: full spectrum at maximum saturation and value
    /// - saturation: white to the fully saturated hue
    /// - value: black to the current hue/saturation at full value
    /// - alpha: transparent to opaque current color
    pub fn gradient_at(self, hsva: &Hsva, t: f64) -> Rgba {
        let t = t.clamp(0.0, 1.0);
        let color = match self {
            ColorAxis::Hue => Hsva::new(t * Hsva::MAX_HUE, 1.0, 1.0, 1.0),
            ColorAxis::Saturation => Hsva::new(hsva.hue(), t, 1.0, 1.0),
            ColorAxis::Value => Hsva::new(hsva.hue(), hsva.saturation(), t, 1.0),
            ColorAxis::Alpha => hsva.with_alpha(t),
        };
        color.to_rgba()
    }

    /// Gradient end colors, for renderers that interpolate natively.
    ///
    /// The hue spectrum is not a two-stop gradient; use
    /// [`gradient_at`](Self::gradient_at) for it.
    pub fn gradient_ends(self, hsva: &Hsva) -> Option<(Rgba, Rgba)> {
        match self {
            ColorAxis::Hue => None,
            _ => Some((self.gradient_at(hsva, 0.0), self.gradient_at(hsva, 1.0))),
        }
    }

    /// Fill color of the indicator.
    pub fn indicator_color(self, hsva: &Hsva) -> Rgba {
        let color = match self {
            ColorAxis::Hue => Hsva::new(hsva.hue(), 1.0, 1.0, 1.0),
            ColorAxis::Saturation => Hsva::new(hsva.hue(), hsva.saturation(), 1.0, 1.0),
            ColorAxis::Value => hsva.with_alpha(1.0),
            ColorAxis::Alpha => *hsva,
        };
        color.to_rgba()
    }

    /// Key for caching a rasterized track; changes whenever the gradient does.
    pub(crate) fn gradient_key(self, hsva: &Hsva) -> (u8, u8, u8, u8) {
        match self {
            ColorAxis::Hue => (0, 0, 0, 0),
            ColorAxis::Saturation | ColorAxis::Alpha => {
                self.gradient_at(hsva, 1.0).with_alpha(1.0).to_rgba8()
            }
            ColorAxis::Value => self.gradient_at(hsva, 1.0).to_rgba8(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hue_axis_scales_to_degrees() {
        let hsva = Hsva::new(90.0, 0.5, 0.5, 1.0);
        assert_eq!(ColorAxis::Hue.normalized(&hsva), 0.25);
        let moved = ColorAxis::Hue.with_normalized(hsva, 0.5);
        assert_eq!(moved.hue(), 180.0);
        assert_eq!(moved.saturation(), 0.5);
    }

    #[test]
    fn with_normalized_clamps() {
        let hsva = Hsva::default();
        assert_eq!(ColorAxis::Alpha.with_normalized(hsva, 1.5).alpha(), 1.0);
        assert_eq!(ColorAxis::Hue.with_normalized(hsva, -0.1).hue(), 0.0);
    }

    #[test]
    fn value_gradient_runs_black_to_color() {
        let hsva = Hsva::new(120.0, 1.0, 0.3, 1.0);
        let (left, right) = ColorAxis::Value.gradient_ends(&hsva).unwrap();
        assert_eq!(left, Rgba::BLACK);
        assert_eq!(right, Rgba::from_rgb8(0, 255, 0));
    }

    #[test]
    fn saturation_gradient_runs_white_to_hue() {
        let hsva = Hsva::new(240.0, 0.2, 0.2, 0.5);
        let (left, right) = ColorAxis::Saturation.gradient_ends(&hsva).unwrap();
        assert_eq!(left, Rgba::from_rgb8(255, 255, 255));
        assert_eq!(right, Rgba::from_rgb8(0, 0, 255));
    }

    #[test]
    fn alpha_gradient_keeps_color() {
        let hsva = Hsva::new(0.0, 1.0, 1.0, 0.5);
        let (left, right) = ColorAxis::Alpha.gradient_ends(&hsva).unwrap();
        assert_eq!(left, Rgba::from_rgba8(255, 0, 0, 0));
        assert_eq!(right, Rgba::from_rgb8(255, 0, 0));
    }

    #[test]
    fn hue_spectrum_has_no_two_stop_form() {
        let hsva = Hsva::default();
        assert!(ColorAxis::Hue.gradient_ends(&hsva).is_none());
        assert_eq!(ColorAxis::Hue.gradient_at(&hsva, 1.0 / 3.0).to_rgb8(), (0, 255, 0));
    }

    #[test]
    fn indicator_ignores_alpha_except_on_alpha_axis() {
        let hsva = Hsva::new(0.0, 1.0, 0.5, 0.25);
        assert_eq!(ColorAxis::Value.indicator_color(&hsva).a(), 1.0);
        assert_eq!(ColorAxis::Alpha.indicator_color(&hsva).a(), 0.25);
        assert_eq!(ColorAxis::Hue.indicator_color(&hsva), Rgba::from_rgb8(255, 0, 0));
    }
}
