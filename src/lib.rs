//! # floem-hsva
//!
//! An HSVA color picker widget for [Floem](https://github.com/lapce/floem).
//!
//! The picker is a preview swatch above four horizontal sliders: hue,
//! saturation, value and alpha. The interaction logic is usable on its own:
//! [`SliderGeometry`] maps pointer positions to slider values and back,
//! [`ColorPickerState`] keeps the edited color and decides when the host
//! needs to hear about a change.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use floem::prelude::*;
//! use floem_hsva::{signal_picker, Rgba};
//!
//! let color = RwSignal::new(Rgba::from_hex("3B82F6").unwrap());
//! // Use `signal_picker(color)` in your Floem view tree.
//! ```

mod axis;
#[cfg(feature = "alpha")]
mod checkerboard;
mod color;
mod config;
mod geometry;
mod math;
mod picker;
mod slider;
mod state;

pub use axis::ColorAxis;
pub use color::{Hsva, ParseHexError, Rgba};
pub use config::PickerConfig;
pub use geometry::{position_to_value, value_to_offset, SliderGeometry};
pub use slider::{color_axis_slider, ColorAxisSlider};
pub use state::ColorPickerState;

use floem::prelude::*;
use floem::reactive::{RwSignal, SignalGet, SignalUpdate};

/// Creates the picker with the default [`PickerConfig`].
///
/// `initial` is called inside a reactive effect: read a signal in it and the
/// picker re-seeds whenever that signal changes to a different color.
/// `on_change` receives the edited color each time it actually changes.
pub fn hsva_picker(
    initial: impl Fn() -> Rgba + 'static,
    on_change: impl Fn(Rgba) + 'static,
) -> impl IntoView {
    hsva_picker_with_config(PickerConfig::default(), initial, on_change)
}

/// Creates the picker with a custom layout.
pub fn hsva_picker_with_config(
    config: PickerConfig,
    initial: impl Fn() -> Rgba + 'static,
    on_change: impl Fn(Rgba) + 'static,
) -> impl IntoView {
    picker::picker_view(config, initial, on_change)
}

/// Creates a picker bound two-way to `color`.
///
/// External writes to the signal re-seed the picker; user edits are written
/// back to it.
pub fn signal_picker(color: RwSignal<Rgba>) -> impl IntoView {
    hsva_picker(move || color.get(), move |c| color.set(c))
}
