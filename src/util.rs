// Console logging helpers

use std::cell::Cell;

thread_local! {
    static VERBOSE: Cell<bool> = const { Cell::new(false) };
}

pub fn set_verbose(on: bool) {
    VERBOSE.with(|v| v.set(on));
}

pub fn verbose() -> bool {
    VERBOSE.with(|v| v.get())
}

pub fn clog(msg: &str) {
    // Quiet by default so normal pages never see console noise
    if !verbose() {
        return;
    }
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&wasm_bindgen::JsValue::from_str(msg));
    #[cfg(not(target_arch = "wasm32"))]
    let _ = msg;
}
