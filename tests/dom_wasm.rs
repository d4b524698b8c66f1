#![cfg(target_arch = "wasm32")]

// Browser-only checks for the DOM side: click binding, navigation routing and synthetic mouse
// dispatch. Each test uses its own marker class so bindings from one test don't leak into
// another on the shared page.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use js_sys::Array;
use lightswitch_web::binder::{BOUND_ATTR, install_touch_translation};
use lightswitch_web::{Binder, Config, Navigator, on_touch};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use wasm_bindgen_test::*;
use web_sys::{
    Document, Event, EventTarget, HtmlElement, MouseEvent, Touch, TouchEvent, TouchEventInit,
    TouchInit,
};

wasm_bindgen_test_configure!(run_in_browser);

#[derive(Clone, Default)]
struct Recorder(Rc<RefCell<Vec<String>>>);

impl Recorder {
    fn urls(&self) -> Vec<String> {
        self.0.borrow().clone()
    }
}

impl Navigator for Recorder {
    fn navigate(&self, url: &str) -> Result<(), JsValue> {
        self.0.borrow_mut().push(url.to_string());
        Ok(())
    }
}

type MouseLog = Rc<RefCell<Vec<(String, i32, i32, i32, i32)>>>;

fn doc() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn config(marker: &str) -> Config {
    Config {
        path_root: "/root/".into(),
        marker_class: marker.into(),
        ..Config::default()
    }
}

fn light(id: &str, classes: &str) -> HtmlElement {
    let el = doc()
        .create_element("div")
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    if !id.is_empty() {
        el.set_id(id);
    }
    el.set_class_name(classes);
    doc().body().unwrap().append_child(&el).unwrap();
    el
}

fn record_mouse(target: &EventTarget) -> MouseLog {
    let log: MouseLog = Rc::default();
    let sink = log.clone();
    let cb = Closure::wrap(Box::new(move |e: MouseEvent| {
        sink.borrow_mut()
            .push((e.type_(), e.client_x(), e.client_y(), e.screen_x(), e.screen_y()));
    }) as Box<dyn FnMut(_)>);
    for ty in ["mousedown", "mousemove", "mouseup"] {
        target
            .add_event_listener_with_callback(ty, cb.as_ref().unchecked_ref())
            .unwrap();
    }
    cb.forget();
    log
}

fn touch_event(ty: &str, target: Option<&HtmlElement>, x: i32, y: i32) -> TouchEvent {
    let touches = Array::new();
    if let Some(target) = target {
        let init = TouchInit::new(1, target);
        init.set_client_x(x);
        init.set_client_y(y);
        init.set_screen_x(x + 100);
        init.set_screen_y(y + 200);
        touches.push(&Touch::new(&init).unwrap());
    }
    let init = TouchEventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    init.set_changed_touches(&touches);
    TouchEvent::new_with_event_init_dict(ty, &init).unwrap()
}

#[wasm_bindgen_test]
fn idle_light_click_navigates_to_id() {
    let nav = Recorder::default();
    let el = light("lamp1", "light-idle");
    let report = Binder::new(config("light-idle"), nav.clone()).setup(&doc());
    assert_eq!(report.bound, 1);

    el.click();
    assert_eq!(nav.urls(), vec!["/root/lamp1".to_string()]);
}

#[wasm_bindgen_test]
fn running_light_click_navigates_to_stop() {
    let nav = Recorder::default();
    let el = light("lamp1", "light-running running");
    Binder::new(config("light-running"), nav.clone()).setup(&doc());

    el.click();
    assert_eq!(nav.urls(), vec!["/root/stop/lamp1".to_string()]);
}

#[wasm_bindgen_test]
fn running_check_matches_whole_token_only() {
    let nav = Recorder::default();
    let el = light("lamp2", "light-token not-running runningLate");
    Binder::new(config("light-token"), nav.clone()).setup(&doc());

    el.click();
    assert_eq!(nav.urls(), vec!["/root/lamp2".to_string()]);
}

#[wasm_bindgen_test]
fn click_default_is_prevented() {
    let nav = Recorder::default();
    let el = light("lamp3", "light-default");
    Binder::new(config("light-default"), nav.clone()).setup(&doc());

    let prevented = Rc::new(Cell::new(false));
    let seen = prevented.clone();
    let cb = Closure::wrap(Box::new(move |e: Event| {
        seen.set(e.default_prevented());
    }) as Box<dyn FnMut(_)>);
    doc()
        .body()
        .unwrap()
        .add_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
        .unwrap();
    el.click();
    doc()
        .body()
        .unwrap()
        .remove_event_listener_with_callback("click", cb.as_ref().unchecked_ref())
        .unwrap();
    assert!(prevented.get());
}

#[wasm_bindgen_test]
fn repeated_setup_navigates_once_per_click() {
    let nav = Recorder::default();
    let el = light("lamp4", "light-twice");
    let binder = Binder::new(config("light-twice"), nav.clone());
    let first = binder.setup(&doc());
    let second = binder.setup(&doc());
    assert_eq!((first.bound, first.already_bound), (1, 0));
    assert_eq!((second.bound, second.already_bound), (0, 1));
    assert!(!second.touch_installed);
    assert!(el.has_attribute(BOUND_ATTR));

    el.click();
    assert_eq!(nav.urls().len(), 1);
}

#[wasm_bindgen_test]
fn element_without_id_is_not_a_light() {
    let nav = Recorder::default();
    let el = light("", "light-anon");
    let report = Binder::new(config("light-anon"), nav.clone()).setup(&doc());
    assert!(report.no_targets());

    el.click();
    assert!(nav.urls().is_empty());
}

#[wasm_bindgen_test]
fn setup_without_lights_still_translates_touches() {
    let report = Binder::new(config("light-none-on-page"), Recorder::default()).setup(&doc());
    assert!(report.no_targets());
    assert_eq!(install_touch_translation(&doc()), Ok(false));
}

#[wasm_bindgen_test]
fn touch_dispatches_mouse_event_at_touch_target() {
    let target = light("pad1", "");
    let log = record_mouse(&target);

    on_touch(&touch_event("touchstart", Some(&target), 10, 20));
    assert_eq!(
        *log.borrow(),
        vec![("mousedown".to_string(), 10, 20, 110, 220)]
    );
}

#[wasm_bindgen_test]
fn empty_touch_list_dispatches_nothing() {
    let log = record_mouse(&doc());

    on_touch(&touch_event("touchend", None, 0, 0));
    assert!(log.borrow().is_empty());
}

#[wasm_bindgen_test]
fn unmapped_touch_kind_dispatches_nothing() {
    let target = light("pad2", "");
    let log = record_mouse(&target);

    on_touch(&touch_event("touchcancel", Some(&target), 5, 5));
    assert!(log.borrow().is_empty());
}

#[wasm_bindgen_test]
fn gesture_through_document_becomes_mouse_sequence() {
    Binder::new(config("light-gesture"), Recorder::default()).setup(&doc());
    let target = light("pad3", "");
    let log = record_mouse(&target);

    target
        .dispatch_event(&touch_event("touchstart", Some(&target), 10, 10))
        .unwrap();
    target
        .dispatch_event(&touch_event("touchmove", Some(&target), 12, 11))
        .unwrap();
    target
        .dispatch_event(&touch_event("touchend", Some(&target), 12, 11))
        .unwrap();

    let seen: Vec<_> = log
        .borrow()
        .iter()
        .map(|(ty, x, y, _, _)| (ty.clone(), *x, *y))
        .collect();
    assert_eq!(
        seen,
        vec![
            ("mousedown".to_string(), 10, 10),
            ("mousemove".to_string(), 12, 11),
            ("mouseup".to_string(), 12, 11),
        ]
    );
}
