//! Touch input shim for the light-switch page.
//!
//! Binds a click handler to every light on the page and turns touches into the mouse events
//! some TV browsers never synthesize on their own.

pub mod binder;
pub mod config;
pub mod model;
pub mod translate;
pub mod util;

pub use binder::{Binder, LocationNavigator, Navigator, SetupReport};
pub use config::Config;
pub use model::{LightTarget, MouseKind, Router, SyntheticMouseEvent, TouchKind, TouchPoint};
pub use translate::{Skip, Translation, on_touch, translate};

/// Load the page's config and wire up the document. Returns None outside a browser context.
pub fn start() -> Option<SetupReport> {
    let window = web_sys::window()?;
    let document = window.document()?;
    let config = Config::load(&window);
    util::set_verbose(config.verbose);
    let binder = Binder::new(config, LocationNavigator::new(window));
    Some(binder.setup(&document))
}
