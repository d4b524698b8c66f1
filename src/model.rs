//! Core data types for the light-switch input layer.
//! Everything here is plain data and pure functions so it can be exercised without a browser.

use serde::{Deserialize, Serialize};

/// Touch lifecycle events the translator understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TouchKind {
    Start,
    Move,
    End,
}

/// Legacy mouse events synthesized from touches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MouseKind {
    Down,
    Move,
    Up,
}

impl TouchKind {
    pub const ALL: [TouchKind; 3] = [TouchKind::Start, TouchKind::Move, TouchKind::End];

    /// Parse a DOM event type. Anything outside the three supported kinds has no mapping.
    pub fn from_event_type(event_type: &str) -> Option<Self> {
        match event_type {
            "touchstart" => Some(TouchKind::Start),
            "touchmove" => Some(TouchKind::Move),
            "touchend" => Some(TouchKind::End),
            _ => None,
        }
    }

    pub fn event_type(self) -> &'static str {
        match self {
            TouchKind::Start => "touchstart",
            TouchKind::Move => "touchmove",
            TouchKind::End => "touchend",
        }
    }

    pub fn mouse_kind(self) -> MouseKind {
        match self {
            TouchKind::Start => MouseKind::Down,
            TouchKind::Move => MouseKind::Move,
            TouchKind::End => MouseKind::Up,
        }
    }
}

impl MouseKind {
    pub fn event_type(self) -> &'static str {
        match self {
            MouseKind::Down => "mousedown",
            MouseKind::Move => "mousemove",
            MouseKind::Up => "mouseup",
        }
    }
}

/// The primary changed touch of a touch event, with whatever node it landed on.
#[derive(Clone, Debug, PartialEq)]
pub struct TouchPoint<T> {
    pub screen_x: i32,
    pub screen_y: i32,
    pub client_x: i32,
    pub client_y: i32,
    pub target: T,
}

/// Mouse event to be constructed and dispatched. Buttons and modifiers are always released.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SyntheticMouseEvent {
    pub kind: MouseKind,
    pub bubbles: bool,
    pub cancelable: bool,
    /// Click count reported to handlers; a tap is a single click.
    pub detail: i32,
    pub screen_x: i32,
    pub screen_y: i32,
    pub client_x: i32,
    pub client_y: i32,
    pub button: i16,
    pub buttons: u16,
    pub ctrl_key: bool,
    pub alt_key: bool,
    pub shift_key: bool,
    pub meta_key: bool,
}

impl SyntheticMouseEvent {
    pub fn from_touch<T>(kind: MouseKind, point: &TouchPoint<T>) -> Self {
        Self {
            kind,
            bubbles: true,
            cancelable: true,
            detail: 1,
            screen_x: point.screen_x,
            screen_y: point.screen_y,
            client_x: point.client_x,
            client_y: point.client_y,
            button: 0,
            buttons: 0,
            ctrl_key: false,
            alt_key: false,
            shift_key: false,
            meta_key: false,
        }
    }
}

/// One controllable light as shown on the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LightTarget {
    pub id: String,
    pub running: bool,
}

/// Builds navigation paths for activated lights under a fixed root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Router {
    root: String,
}

impl Router {
    pub fn new(root: impl Into<String>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    /// `<root>stop/<id>` for a running light, `<root><id>` otherwise.
    pub fn route(&self, light: &LightTarget) -> String {
        if light.running {
            format!("{}stop/{}", self.root, light.id)
        } else {
            format!("{}{}", self.root, light.id)
        }
    }
}
