/// Endpoint del backend que modifica el carrito (relativo al origen de la página)
pub const UPDATE_ITEM_PATH: &str = "/update_item/";

/// Clase CSS que marca los botones de carrito
pub const UPDATE_CART_CLASS: &str = "update-cart";

/// Atributos data-* que lleva cada botón
pub const PRODUCT_ATTRIBUTE: &str = "data-product";
pub const ACTION_ATTRIBUTE: &str = "data-action";

/// Valor de identidad que pone Django cuando no hay usuario autenticado
pub const ANONYMOUS_USER: &str = "AnonymousUser";

/// Header anti-CSRF que espera Django
pub const CSRF_HEADER: &str = "X-CSRFToken";

// Globales que deja la plantilla en `window`
pub const USER_GLOBAL: &str = "user";
pub const CSRF_TOKEN_GLOBAL: &str = "csrftoken";

pub const CSRF_COOKIE: &str = "csrftoken";
