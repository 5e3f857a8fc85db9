use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{on_click, read_cart_button};
use crate::services::{CartTransport, PageReloader};
use crate::viewmodels::CartUpdateHandler;

/// Conecta un listener de click a cada botón recibido.
///
/// Solo cubre los elementos pasados aquí: botones agregados al DOM después
/// no quedan conectados. Devuelve cuántos botones se conectaron.
pub fn bind<T, R>(handler: Rc<CartUpdateHandler<T, R>>, elements: &[Element]) -> Result<usize, JsValue>
where
    T: CartTransport + 'static,
    R: PageReloader + 'static,
{
    for element in elements {
        let handler = handler.clone();
        let button_element = element.clone();
        on_click(element, move |_e: web_sys::MouseEvent| {
            let button = read_cart_button(&button_element);
            if let Some(task) = handler.handle_click(button) {
                // No se espera: el listener devuelve el control al navegador
                wasm_bindgen_futures::spawn_local(task.run_detached());
            }
        })?;
    }

    Ok(elements.len())
}
