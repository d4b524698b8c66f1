//! Touch to mouse translation.
//!
//! Browsers on some TV sets deliver touches but never follow up with the compatibility mouse
//! events, so click logic written against `mousedown`/`mouseup` never runs. Each touch event is
//! turned into exactly one mouse event and dispatched synchronously at the node the finger
//! landed on, which keeps the `touchstart -> touchmove* -> touchend` order intact.

use wasm_bindgen::JsValue;
use web_sys::{EventTarget, MouseEvent, MouseEventInit, TouchEvent, Window};

use crate::model::{SyntheticMouseEvent, TouchKind, TouchPoint};
use crate::util::{clog, verbose};

/// Why a touch event produced no mouse event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Skip {
    UnsupportedEventKind,
    EmptyTouchList,
}

/// A mouse event and the node it must be dispatched at.
#[derive(Clone, Debug, PartialEq)]
pub struct Translation<T> {
    pub target: T,
    pub event: SyntheticMouseEvent,
}

/// Map one touch event onto its mouse counterpart. Only the first changed touch is used.
pub fn translate<T, I>(event_type: &str, changed_touches: I) -> Result<Translation<T>, Skip>
where
    I: IntoIterator<Item = TouchPoint<T>>,
{
    let kind = TouchKind::from_event_type(event_type).ok_or(Skip::UnsupportedEventKind)?;
    let point = changed_touches
        .into_iter()
        .next()
        .ok_or(Skip::EmptyTouchList)?;
    let event = SyntheticMouseEvent::from_touch(kind.mouse_kind(), &point);
    Ok(Translation {
        target: point.target,
        event,
    })
}

/// Primary changed touch of a DOM touch event. A touch without a target can't be dispatched
/// anywhere, so it counts as missing.
pub fn primary_touch(e: &TouchEvent) -> Option<TouchPoint<EventTarget>> {
    let t = e.changed_touches().item(0)?;
    let target = t.target()?;
    Some(TouchPoint {
        screen_x: t.screen_x(),
        screen_y: t.screen_y(),
        client_x: t.client_x(),
        client_y: t.client_y(),
        target,
    })
}

pub fn build_mouse_event(
    ev: &SyntheticMouseEvent,
    view: Option<&Window>,
) -> Result<MouseEvent, JsValue> {
    let init = MouseEventInit::new();
    init.set_bubbles(ev.bubbles);
    init.set_cancelable(ev.cancelable);
    init.set_view(view);
    init.set_detail(ev.detail);
    init.set_screen_x(ev.screen_x);
    init.set_screen_y(ev.screen_y);
    init.set_client_x(ev.client_x);
    init.set_client_y(ev.client_y);
    init.set_button(ev.button);
    init.set_buttons(ev.buttons);
    init.set_ctrl_key(ev.ctrl_key);
    init.set_alt_key(ev.alt_key);
    init.set_shift_key(ev.shift_key);
    init.set_meta_key(ev.meta_key);
    MouseEvent::new_with_mouse_event_init_dict(ev.kind.event_type(), &init)
}

/// Dispatch a translation at its target. Returns `dispatchEvent`'s result (false when a
/// handler cancelled the event).
pub fn dispatch(t: &Translation<EventTarget>) -> Result<bool, JsValue> {
    let window = web_sys::window();
    let mouse = build_mouse_event(&t.event, window.as_ref())?;
    t.target.dispatch_event(&mouse)
}

/// Capturing listener body for `touchstart`, `touchmove` and `touchend`. Never throws: any
/// failure leaves the touch event alone.
pub fn on_touch(e: &TouchEvent) {
    let event_type = e.type_();
    match translate(&event_type, primary_touch(e)) {
        Ok(t) => {
            if let Err(err) = dispatch(&t) {
                if verbose() {
                    let mouse = t.event.kind.event_type();
                    clog(&format!("{event_type} -> {mouse} dispatch failed: {err:?}"));
                }
            }
        }
        Err(skip) => {
            if verbose() {
                clog(&format!("{event_type} skipped: {skip:?}"));
            }
        }
    }
}
