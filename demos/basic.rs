//! Standalone demo: opens a window with the color picker.

use floem::prelude::*;
use floem::window::WindowConfig;
use floem_hsva::{signal_picker, Rgba};

fn main() {
    tracing_subscriber::fmt::init();

    let color = RwSignal::new(Rgba::from_hex("3B82F6").unwrap());

    floem::Application::new()
        .window(
            move |_| {
                signal_picker(color)
                    .style(|s| s.padding(12.0))
                    .on_event_stop(floem::event::EventListener::WindowClosed, |_| {
                        floem::quit_app()
                    })
            },
            Some(
                WindowConfig::default()
                    .size((320.0, 200.0))
                    .title("floem-hsva"),
            ),
        )
        .run();
}
