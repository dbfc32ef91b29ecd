//! Picker view: a preview swatch above one slider per color axis, all driven
//! by a single [`ColorPickerState`].

use std::cell::RefCell;
use std::rc::Rc;

use floem::prelude::*;
use floem::reactive::{create_effect, RwSignal, SignalGet, SignalUpdate};
use floem::AnyView;

use crate::axis::ColorAxis;
use crate::color::{Hsva, Rgba};
use crate::config::PickerConfig;
use crate::slider::color_axis_slider;
use crate::state::ColorPickerState;

pub(crate) fn picker_view(
    config: PickerConfig,
    initial: impl Fn() -> Rgba + 'static,
    on_change: impl Fn(Rgba) + 'static,
) -> impl IntoView {
    let state = Rc::new(RefCell::new(ColorPickerState::new(initial())));
    // Mirror of the state's channels for the views to track.
    let hsva = RwSignal::new(state.borrow().hsva());
    let on_change: Rc<dyn Fn(Rgba)> = Rc::new(on_change);

    // Initial color -> state, only when it really changed
    {
        let state = state.clone();
        create_effect(move |_| {
            let color = initial();
            let reseeded = state.borrow_mut().seed(color);
            if reseeded {
                hsva.set(state.borrow().hsva());
            }
        });
    }

    let slider = |axis: ColorAxis| {
        let state = state.clone();
        let on_change = on_change.clone();
        color_axis_slider(axis, hsva, &config, move |t| {
            // Release the borrow before calling out: the host may re-seed.
            let (changed, channels) = {
                let mut state = state.borrow_mut();
                (state.set_axis(axis, t), state.hsva())
            };
            hsva.set(channels);
            if let Some(color) = changed {
                on_change(color);
            }
        })
    };

    let mut rows: Vec<AnyView> = vec![preview_swatch(hsva, &config).into_any()];
    rows.extend(
        ColorAxis::ALL
            .into_iter()
            .filter(|axis| *axis != ColorAxis::Alpha || config.alpha_visible())
            .map(|axis| slider(axis).into_any()),
    );

    let gap = config.gap as f32;
    let padding = config.padding as f32;
    v_stack_from_iter(rows).style(move |s| s.gap(gap).padding(padding).width_full())
}

fn preview_swatch(hsva: RwSignal<Hsva>, config: &PickerConfig) -> impl IntoView {
    let height = config.track_height as f32;
    let radius = config.track_radius() as f32;
    empty().style(move |s| {
        let color = hsva.get().to_rgba();
        s.height(height)
            .width_full()
            .border_radius(radius)
            .background(Color::from(color))
    })
}
