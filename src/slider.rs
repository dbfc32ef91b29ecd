//! Horizontal slider for one [`ColorAxis`].
//!
//! The track shows the axis gradient for the current color, left = 0.0 and
//! right = 1.0. Opaque tracks are rasterized to an image and cached per
//! gradient color and pixel size; the alpha track is a native linear
//! gradient over a checkerboard.

use std::sync::Arc;

use floem::kurbo::{Circle, Rect, Stroke};
use floem::peniko::{self, Blob, Color};

use floem::reactive::{create_effect, RwSignal, SignalGet};
use floem::views::Decorators;
use floem::{
    context::{ComputeLayoutCx, EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
    View, ViewId,
};
use floem_renderer::Renderer;

use crate::axis::ColorAxis;
#[cfg(feature = "alpha")]
use crate::checkerboard;
use crate::color::Hsva;
use crate::config::PickerConfig;
use crate::geometry::SliderGeometry;

/// Rasterize `axis`' gradient for `hsva` into an RGBA8 buffer, left to right.
fn rasterize_axis_gradient(axis: ColorAxis, hsva: &Hsva, width: u32, height: u32) -> Vec<u8> {
    let mut buf = vec![0u8; (width * height * 4) as usize];
    for px in 0..width {
        let t = px as f64 / (width - 1).max(1) as f64;
        let (r, g, b, _) = axis.gradient_at(hsva, t).to_rgba8();
        for py in 0..height {
            let offset = ((py * width + px) * 4) as usize;
            buf[offset] = r;
            buf[offset + 1] = g;
            buf[offset + 2] = b;
            buf[offset + 3] = 255;
        }
    }
    buf
}

struct HsvaUpdate(Hsva);

pub struct ColorAxisSlider {
    id: ViewId,
    axis: ColorAxis,
    held: bool,
    hsva: Hsva,
    indicator_size: f64,
    indicator_ring: f64,
    #[cfg_attr(not(feature = "alpha"), allow(dead_code))]
    checker_cell: f64,
    size: floem::taffy::prelude::Size<f32>,
    on_change: Box<dyn Fn(f64)>,
    /// Cached gradient image.
    grad_img: Option<peniko::Image>,
    grad_hash: Vec<u8>,
    cached_key: (u8, u8, u8, u8),
    cached_dims: (u32, u32),
}

/// Creates a slider editing `axis`.
///
/// - `hsva`: read-only, the color the track and indicator are drawn for.
/// - `on_change`: receives the normalized 0.0–1.0 position on every drag step.
pub fn color_axis_slider(
    axis: ColorAxis,
    hsva: RwSignal<Hsva>,
    config: &PickerConfig,
    on_change: impl Fn(f64) + 'static,
) -> ColorAxisSlider {
    let id = ViewId::new();

    create_effect(move |_| {
        let color = hsva.get();
        id.update_state(HsvaUpdate(color));
    });

    let height = config.track_height as f32;
    let radius = config.track_radius() as f32;

    ColorAxisSlider {
        id,
        axis,
        held: false,
        hsva: hsva.get_untracked(),
        indicator_size: config.indicator_size,
        indicator_ring: config.indicator_ring,
        checker_cell: config.checker_cell,
        size: Default::default(),
        on_change: Box::new(on_change),
        grad_img: None,
        grad_hash: Vec::new(),
        cached_key: (0, 0, 0, 0),
        cached_dims: (0, 0),
    }
    .style(move |s| {
        s.height(height)
            .width_full()
            .border_radius(radius)
            .cursor(floem::style::CursorStyle::Pointer)
    })
}

impl ColorAxisSlider {
    fn geometry(&self) -> SliderGeometry {
        SliderGeometry::new(self.size.width as f64, self.indicator_size)
    }

    fn update_from_pointer(&mut self, x: f64) {
        let t = self.geometry().position_to_value(x);
        self.hsva = self.axis.with_normalized(self.hsva, t);
        (self.on_change)(t);
        self.id.request_layout();
    }

    fn ensure_gradient_image(&mut self, scale: f64) {
        let s = scale.max(1.0);
        let pw = (self.size.width as f64 * s).round() as u32;
        let ph = (self.size.height as f64 * s).round() as u32;
        if pw == 0 || ph == 0 {
            return;
        }

        let key = self.axis.gradient_key(&self.hsva);
        let dims = (pw, ph);
        if self.grad_img.is_some() && self.cached_dims == dims && self.cached_key == key {
            return;
        }

        let pixels = rasterize_axis_gradient(self.axis, &self.hsva, pw, ph);
        let blob = Blob::new(Arc::new(pixels));
        let img = peniko::Image::new(blob.clone(), peniko::Format::Rgba8, pw, ph);

        self.grad_hash = blob.id().to_le_bytes().to_vec();
        self.grad_img = Some(img);
        self.cached_key = key;
        self.cached_dims = dims;
    }

    fn paint_raster_track(&mut self, cx: &mut PaintCx, rect: Rect) {
        let scale = cx.scale();
        self.ensure_gradient_image(scale);
        if let Some(ref img) = self.grad_img {
            cx.draw_img(
                floem_renderer::Img {
                    img: img.clone(),
                    hash: &self.grad_hash,
                },
                rect,
            );
        }
    }

    #[cfg(feature = "alpha")]
    fn paint_alpha_track(&self, cx: &mut PaintCx, rect: Rect) {
        use floem::kurbo::Shape;

        checkerboard::paint_checkerboard(cx, rect, self.checker_cell);
        if let Some((from, to)) = self.axis.gradient_ends(&self.hsva) {
            let h = rect.height();
            let gradient = peniko::Gradient::new_linear((0.0, h / 2.0), (rect.width(), h / 2.0))
                .with_stops([Color::from(from), Color::from(to)]);
            // The vello Rect fast path only takes solid brushes.
            let path = rect.to_path(0.1);
            cx.fill(&path, &gradient, 0.0);
        }
    }

    fn paint_indicator(&self, cx: &mut PaintCx, h: f64) {
        let center_x = self.geometry().value_to_offset(self.axis.normalized(&self.hsva));
        let center = (center_x, h / 2.0);
        let radius = self.indicator_size / 2.0;
        if radius <= 0.0 {
            return;
        }

        let fill = Color::from(self.axis.indicator_color(&self.hsva));
        cx.fill(&Circle::new(center, radius), fill, 0.0);

        let ring = self.indicator_ring.min(radius);
        cx.stroke(
            &Circle::new(center, radius - ring / 2.0),
            Color::WHITE,
            &Stroke::new(ring),
        );
        cx.stroke(
            &Circle::new(center, radius),
            Color::rgba8(0, 0, 0, 40),
            &Stroke::new(1.0),
        );
    }
}

impl View for ColorAxisSlider {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(update) = state.downcast::<HsvaUpdate>() {
            self.hsva = update.0;
            self.id.request_layout();
        }
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        match event {
            Event::PointerDown(e) => {
                cx.update_active(self.id());
                self.held = true;
                self.update_from_pointer(e.pos.x);
                EventPropagation::Stop
            }
            Event::PointerMove(e) => {
                if self.held {
                    self.update_from_pointer(e.pos.x);
                    EventPropagation::Stop
                } else {
                    EventPropagation::Continue
                }
            }
            Event::PointerUp(_) | Event::FocusLost => {
                self.held = false;
                EventPropagation::Continue
            }
            _ => EventPropagation::Continue,
        }
    }

    fn compute_layout(&mut self, _cx: &mut ComputeLayoutCx) -> Option<Rect> {
        let layout = self.id.get_layout().unwrap_or_default();
        self.size = layout.size;
        None
    }

    fn paint(&mut self, cx: &mut PaintCx) {
        let w = self.size.width as f64;
        let h = self.size.height as f64;
        if w == 0.0 || h == 0.0 {
            return;
        }
        let rect = Rect::new(0.0, 0.0, w, h);
        let rrect = rect.to_rounded_rect(h / 2.0);

        cx.save();
        cx.clip(&rrect);
        match self.axis {
            #[cfg(feature = "alpha")]
            ColorAxis::Alpha => self.paint_alpha_track(cx, rect),
            _ => self.paint_raster_track(cx, rect),
        }
        cx.restore();

        cx.stroke(&rrect, Color::rgba8(0, 0, 0, 40), &Stroke::new(1.0));

        self.paint_indicator(cx, h);
    }
}
