// ============================================================================
// SHOP CART FRONTEND - BOTONES DE CARRITO (RUST PURO)
// ============================================================================
// - Views: conectan listeners al DOM
// - ViewModels: guard de usuario + request + recarga
// - Services: SOLO comunicación HTTP y recarga de página
// - Models: body del request
// ============================================================================

pub mod app;
pub mod config;
pub mod dom;
pub mod models;
pub mod services;
pub mod utils;
pub mod viewmodels;
pub mod views;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_logger::Config;

use crate::app::App;

pub use crate::config::CartConfig;
pub use crate::models::{CartAction, CartButton, UpdateOutcome, UpdateRequest};
pub use crate::services::{CartApiClient, CartError, CartTransport, PageReloader, WindowReloader};
pub use crate::viewmodels::{CancelHandle, CartUpdateHandler, HandlerState, UpdateTask};
pub use crate::views::bind;

// Instancia global de la app mientras viva la página
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Inicializar panic hook para mejor debugging
    console_error_panic_hook::set_once();

    wasm_logger::init(Config::default());
    log::info!("🚀 Shop cart - Rust Puro");

    let app = App::new();
    app.mount()?;

    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    Ok(())
}

/// Indica si hay updates de carrito en vuelo (llamable desde JavaScript)
#[wasm_bindgen]
pub fn pending_cart_updates() -> bool {
    APP.with(|app_cell| {
        app_cell
            .borrow()
            .as_ref()
            .map(|app| app.handler().state() == HandlerState::Pending)
            .unwrap_or(false)
    })
}
