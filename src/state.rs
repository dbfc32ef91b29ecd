//! Picker state owner.
//!
//! [`ColorPickerState`] is the single source of truth for the edited color.
//! It is seeded from the host's initial color and updated by the sliders.
//! Every mutation reports whether the host should be told about it, and the
//! state remembers what it last reported so that echoes never loop back.

use tracing::{debug, trace};

use crate::axis::ColorAxis;
use crate::color::{Hsva, Rgba};

#[derive(Debug, Clone)]
pub struct ColorPickerState {
    hsva: Hsva,
    /// Last initial color passed to [`seed`](Self::seed), compared by value.
    seed: Rgba,
    /// Last color reported to the host (or the seeded color).
    last_emitted: Rgba,
}

impl ColorPickerState {
    /// Create a state seeded from `initial`.
    pub fn new(initial: Rgba) -> Self {
        let hsva = Hsva::from_rgba(initial);
        Self {
            hsva,
            seed: initial,
            last_emitted: hsva.to_rgba(),
        }
    }

    /// Re-seed from a new initial color.
    ///
    /// A no-op when `initial` equals the previous seed, so host re-renders
    /// that pass the same color again do not overwrite user edits. The same
    /// holds when `initial` is the color this state last reported: a host
    /// that writes reported colors back into its initial color must not
    /// re-quantize the channels the user is dragging.
    ///
    /// Returns `true` when the channels were replaced. Seeding never produces
    /// a change notification.
    pub fn seed(&mut self, initial: Rgba) -> bool {
        if initial == self.seed || initial == self.last_emitted {
            trace!(color = %initial, "ignoring unchanged seed color");
            self.seed = initial;
            return false;
        }
        self.hsva = Hsva::from_rgba(initial);
        self.seed = initial;
        self.last_emitted = self.hsva.to_rgba();
        debug!(color = %initial, hsva = ?self.hsva, "picker re-seeded");
        true
    }

    /// Set hue in degrees, clamped to 0.0–360.0.
    pub fn set_hue(&mut self, hue: f64) -> Option<Rgba> {
        self.hsva = self.hsva.with_hue(hue);
        self.take_change()
    }

    /// Set saturation, clamped to 0.0–1.0.
    pub fn set_saturation(&mut self, saturation: f64) -> Option<Rgba> {
        self.hsva = self.hsva.with_saturation(saturation);
        self.take_change()
    }

    /// Set value (brightness), clamped to 0.0–1.0.
    pub fn set_value(&mut self, value: f64) -> Option<Rgba> {
        self.hsva = self.hsva.with_value(value);
        self.take_change()
    }

    /// Set alpha, clamped to 0.0–1.0.
    pub fn set_alpha(&mut self, alpha: f64) -> Option<Rgba> {
        self.hsva = self.hsva.with_alpha(alpha);
        self.take_change()
    }

    /// Apply a slider's normalized 0.0–1.0 output to `axis`.
    pub fn set_axis(&mut self, axis: ColorAxis, normalized: f64) -> Option<Rgba> {
        self.hsva = axis.with_normalized(self.hsva, normalized);
        self.take_change()
    }

    /// The edited color. Pure function of the channels.
    pub fn current_color(&self) -> Rgba {
        self.hsva.to_rgba()
    }

    pub fn hsva(&self) -> Hsva {
        self.hsva
    }

    pub fn last_emitted(&self) -> Rgba {
        self.last_emitted
    }

    /// Returns the color to report if it differs from the last report, and
    /// records it as reported.
    fn take_change(&mut self) -> Option<Rgba> {
        let color = self.current_color();
        if color == self.last_emitted {
            return None;
        }
        trace!(color = %color, "picker color changed");
        self.last_emitted = color;
        Some(color)
    }
}

impl Default for ColorPickerState {
    fn default() -> Self {
        Self::new(Rgba::default())
    }
}
