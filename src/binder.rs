//! One-time wiring of the light-switch page: click handlers on every light and the touch
//! translator on the document.

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, TouchEvent, Window};

use crate::config::Config;
use crate::model::{LightTarget, Router, TouchKind};
use crate::translate::on_touch;
use crate::util::clog;

/// Stamped on every light that already has its click handler.
pub const BOUND_ATTR: &str = "data-light-bound";
/// Stamped on the document element once the touch listeners are installed.
pub const TOUCH_ATTR: &str = "data-touch-translate";

/// Where activated lights send the browser.
pub trait Navigator {
    fn navigate(&self, url: &str) -> Result<(), JsValue>;
}

pub struct LocationNavigator {
    window: Window,
}

impl LocationNavigator {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

impl Navigator for LocationNavigator {
    fn navigate(&self, url: &str) -> Result<(), JsValue> {
        self.window.location().set_href(url)
    }
}

/// Outcome of a `setup` pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SetupReport {
    /// Lights that received a click handler during this pass.
    pub bound: usize,
    /// Lights skipped because an earlier pass already bound them.
    pub already_bound: usize,
    /// Whether this pass installed the touch listeners.
    pub touch_installed: bool,
}

impl SetupReport {
    pub fn no_targets(&self) -> bool {
        self.bound == 0 && self.already_bound == 0
    }
}

pub struct Binder<N> {
    config: Config,
    router: Router,
    navigator: Rc<N>,
}

impl<N> Clone for Binder<N> {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            router: self.router.clone(),
            navigator: self.navigator.clone(),
        }
    }
}

impl<N: Navigator + 'static> Binder<N> {
    pub fn new(config: Config, navigator: N) -> Self {
        let router = config.router();
        Self {
            config,
            router,
            navigator: Rc::new(navigator),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The single test for "this node is a light switch": it carries the marker class token
    /// and has an id to route with.
    pub fn is_interactive_target(&self, el: &Element) -> bool {
        el.class_list().contains(&self.config.marker_class) && !el.id().is_empty()
    }

    pub fn light_target(&self, el: &Element) -> Option<LightTarget> {
        if !self.is_interactive_target(el) {
            return None;
        }
        Some(LightTarget {
            id: el.id(),
            running: el.class_list().contains(&self.config.running_class),
        })
    }

    /// Click handler body. Navigates to the light's start or stop path and suppresses the
    /// default action. Returns the path navigated to, if any.
    pub fn on_activate(&self, event: &Event) -> Option<String> {
        let el = event
            .current_target()
            .or_else(|| event.target())
            .and_then(|t| t.dyn_into::<Element>().ok())?;
        let light = self.light_target(&el)?;
        let url = self.router.route(&light);
        if let Err(err) = self.navigator.navigate(&url) {
            clog(&format!("navigation to {url} failed: {err:?}"));
        }
        event.prevent_default();
        Some(url)
    }

    /// Bind every light on the page and install touch translation. Safe to call repeatedly:
    /// anything already bound is left alone.
    pub fn setup(&self, document: &Document) -> SetupReport {
        let mut report = SetupReport::default();
        let targets = document.get_elements_by_class_name(&self.config.marker_class);
        for i in 0..targets.length() {
            let Some(el) = targets.item(i) else {
                continue;
            };
            if !self.is_interactive_target(&el) {
                continue;
            }
            if el.has_attribute(BOUND_ATTR) {
                report.already_bound += 1;
                continue;
            }
            if self.bind_click(&el).is_ok() {
                report.bound += 1;
            }
        }
        report.touch_installed = install_touch_translation(document).unwrap_or(false);
        if report.no_targets() {
            clog("no light targets found; touch translation only");
        } else {
            clog(&format!(
                "bound {} lights ({} already bound)",
                report.bound, report.already_bound
            ));
        }
        report
    }

    fn bind_click(&self, el: &Element) -> Result<(), JsValue> {
        let binder = self.clone();
        let click_cb = Closure::wrap(Box::new(move |e: Event| {
            binder.on_activate(&e);
        }) as Box<dyn FnMut(_)>);
        el.add_event_listener_with_callback("click", click_cb.as_ref().unchecked_ref())?;
        el.set_attribute(BOUND_ATTR, "")?;
        // Lights live as long as the page
        click_cb.forget();
        Ok(())
    }
}

/// Register the translator as a capturing listener for every supported touch kind on the
/// document. Returns false when an earlier call already did so.
pub fn install_touch_translation(document: &Document) -> Result<bool, JsValue> {
    let root = document.document_element();
    if root.as_ref().is_some_and(|r| r.has_attribute(TOUCH_ATTR)) {
        return Ok(false);
    }
    let touch_cb = Closure::wrap(Box::new(move |e: TouchEvent| {
        on_touch(&e);
    }) as Box<dyn FnMut(_)>);
    for kind in TouchKind::ALL {
        document.add_event_listener_with_callback_and_bool(
            kind.event_type(),
            touch_cb.as_ref().unchecked_ref(),
            true,
        )?;
    }
    if let Some(root) = root {
        root.set_attribute(TOUCH_ATTR, "")?;
    }
    touch_cb.forget();
    Ok(true)
}
