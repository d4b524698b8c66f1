//! Page-supplied configuration.

use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;
use web_sys::Window;

use crate::model::Router;

/// Id of the optional `<script type="application/json">` element carrying a config object.
pub const CONFIG_ELEMENT_ID: &str = "lights-config";
/// Page global the server template sets to the navigation prefix.
pub const PATH_ROOT_GLOBAL: &str = "path_root";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Prefix for every navigation path. Expected to end with `/`.
    pub path_root: String,
    /// Class token identifying light-switch elements.
    pub marker_class: String,
    /// Class token present while a light's script is running.
    pub running_class: String,
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            path_root: "/".to_string(),
            marker_class: "lightCommand".to_string(),
            running_class: "running".to_string(),
            verbose: false,
        }
    }
}

impl Config {
    /// Parse a JSON config object; missing fields keep their defaults.
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }

    /// Resolve the config for the current page. Never fails: anything unreadable falls back to
    /// the defaults.
    pub fn load(window: &Window) -> Self {
        if let Some(cfg) = Self::from_config_element(window) {
            return cfg;
        }
        let mut cfg = Self::default();
        if let Some(root) = Self::global_path_root(window) {
            cfg.path_root = root;
        }
        cfg
    }

    fn from_config_element(window: &Window) -> Option<Self> {
        let doc = window.document()?;
        let el = doc.get_element_by_id(CONFIG_ELEMENT_ID)?;
        let raw = el.text_content()?;
        Self::from_json(&raw)
    }

    fn global_path_root(window: &Window) -> Option<String> {
        let v = js_sys::Reflect::get(window, &JsValue::from_str(PATH_ROOT_GLOBAL)).ok()?;
        v.as_string()
    }

    pub fn router(&self) -> Router {
        Router::new(self.path_root.clone())
    }
}
