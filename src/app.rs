// ============================================================================
// APP - Botones de carrito de la página actual
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;

use crate::config::CartConfig;
use crate::dom::elements_by_class_name;
use crate::services::{CartApiClient, WindowReloader};
use crate::utils::constants::UPDATE_CART_CLASS;
use crate::viewmodels::CartUpdateHandler;
use crate::views::bind;

pub type PageCartHandler = CartUpdateHandler<CartApiClient, WindowReloader>;

/// Aplicación del carrito: un handler compartido por todos los botones
pub struct App {
    handler: Rc<PageCartHandler>,
}

impl App {
    /// Crear aplicación con la identidad y el token que deja la página
    pub fn new() -> Self {
        Self::with_config(CartConfig::from_page())
    }

    pub fn with_config(config: CartConfig) -> Self {
        let handler = CartUpdateHandler::new(
            config,
            Rc::new(CartApiClient::new()),
            Rc::new(WindowReloader),
        );
        Self {
            handler: Rc::new(handler),
        }
    }

    pub fn handler(&self) -> &Rc<PageCartHandler> {
        &self.handler
    }

    /// Conectar los botones `.update-cart` presentes en este momento
    pub fn mount(&self) -> Result<usize, JsValue> {
        let elements = elements_by_class_name(UPDATE_CART_CLASS)?;
        let bound = bind(self.handler.clone(), &elements)?;
        log::info!(
            "🛒 {} botones de carrito conectados (anónimo: {})",
            bound,
            self.handler.config().is_anonymous()
        );
        Ok(bound)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
