use wasm_bindgen::prelude::*;

/// Recarga de la página actual
pub trait PageReloader {
    fn reload(&self) -> Result<(), JsValue>;
}

/// `window.location.reload()`
#[derive(Clone, Copy, Default)]
pub struct WindowReloader;

impl PageReloader for WindowReloader {
    fn reload(&self) -> Result<(), JsValue> {
        web_sys::window()
            .ok_or_else(|| JsValue::from_str("No window"))?
            .location()
            .reload()
    }
}
