// ============================================================================
// ELEMENT HELPERS - Funciones básicas para leer el DOM
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Window};

use crate::models::CartButton;
use crate::utils::constants::{ACTION_ATTRIBUTE, PRODUCT_ATTRIBUTE};

/// Obtener window global
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Obtener document
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Obtener atributo
pub fn get_attribute(element: &Element, name: &str) -> Option<String> {
    element.get_attribute(name)
}

/// Snapshot de los elementos con una clase. Los que se agreguen después
/// no aparecen (no es una colección viva).
pub fn elements_by_class_name(class: &str) -> Result<Vec<Element>, JsValue> {
    let collection = document()
        .ok_or_else(|| JsValue::from_str("No document"))?
        .get_elements_by_class_name(class);

    Ok((0..collection.length())
        .filter_map(|i| collection.item(i))
        .collect())
}

/// Leer `data-product` y `data-action` de un botón de carrito
pub fn read_cart_button(element: &Element) -> CartButton {
    CartButton {
        product: get_attribute(element, PRODUCT_ATTRIBUTE),
        action: get_attribute(element, ACTION_ATTRIBUTE),
    }
}
