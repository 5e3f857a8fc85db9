// ============================================================================
// CART VIEWMODEL - LÓGICA DE LOS BOTONES DE CARRITO
// ============================================================================
// Click -> guard de usuario anónimo -> POST /update_item/ -> recarga
// Sin debounce ni serialización: clicks repetidos generan requests repetidos
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

use crate::config::CartConfig;
use crate::models::{CartButton, UpdateRequest};
use crate::services::{CartError, CartTransport, PageReloader};
use crate::viewmodels::update_task::UpdateTask;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HandlerState {
    Idle,
    Pending,
}

/// Handler compartido por todos los botones `.update-cart`
pub struct CartUpdateHandler<T, R> {
    config: CartConfig,
    transport: Rc<T>,
    reloader: Rc<R>,
    in_flight: Rc<Cell<usize>>,
}

impl<T, R> CartUpdateHandler<T, R>
where
    T: CartTransport + 'static,
    R: PageReloader + 'static,
{
    pub fn new(config: CartConfig, transport: Rc<T>, reloader: Rc<R>) -> Self {
        Self {
            config,
            transport,
            reloader,
            in_flight: Rc::new(Cell::new(0)),
        }
    }

    pub fn config(&self) -> &CartConfig {
        &self.config
    }

    pub fn state(&self) -> HandlerState {
        if self.in_flight.get() > 0 {
            HandlerState::Pending
        } else {
            HandlerState::Idle
        }
    }

    /// Procesa un click. Devuelve `None` si el usuario es anónimo:
    /// en ese caso no se envía nada ni se avisa al usuario.
    pub fn handle_click(&self, button: CartButton) -> Option<UpdateTask> {
        log::debug!("🛒 productId: {:?} Action: {:?}", button.product, button.action);
        log::debug!("👤 User: {}", self.config.identity);

        if self.config.is_anonymous() {
            return None;
        }

        Some(self.update_items(UpdateRequest::from(button)))
    }

    /// Lanza el request y prepara la recarga que se hará al recibir JSON
    pub fn update_items(&self, request: UpdateRequest) -> UpdateTask {
        let guard = InFlight::enter(&self.in_flight);
        let response = self
            .transport
            .post_update(request, self.config.anti_forgery_token.clone());
        let reloader = self.reloader.clone();

        UpdateTask::new(async move {
            let _guard = guard;
            // El contenido de la respuesta no se usa
            let _data = response.await?;
            reloader
                .reload()
                .map_err(|e| CartError::Reload(format!("{:?}", e)))
        })
    }
}

/// Cuenta una tarea en vuelo mientras viva
struct InFlight(Rc<Cell<usize>>);

impl InFlight {
    fn enter(counter: &Rc<Cell<usize>>) -> Self {
        counter.set(counter.get() + 1);
        Self(counter.clone())
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.0.set(self.0.get().saturating_sub(1));
    }
}
