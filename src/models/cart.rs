use serde::{Deserialize, Serialize};

/// Verbo que lleva el botón en `data-action`.
///
/// El backend es quien valida: cualquier valor desconocido se conserva en
/// `Other` y se envía tal cual.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CartAction {
    Add,
    Remove,
    Clear,
    Other(String),
}

impl CartAction {
    pub fn as_str(&self) -> &str {
        match self {
            CartAction::Add => "add",
            CartAction::Remove => "remove",
            CartAction::Clear => "clear",
            CartAction::Other(verb) => verb,
        }
    }
}

impl From<String> for CartAction {
    fn from(verb: String) -> Self {
        match verb.as_str() {
            "add" => CartAction::Add,
            "remove" => CartAction::Remove,
            "clear" => CartAction::Clear,
            _ => CartAction::Other(verb),
        }
    }
}

impl From<&str> for CartAction {
    fn from(verb: &str) -> Self {
        CartAction::from(verb.to_string())
    }
}

impl From<CartAction> for String {
    fn from(action: CartAction) -> Self {
        match action {
            CartAction::Other(verb) => verb,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for CartAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Datos crudos leídos de un botón `.update-cart`
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CartButton {
    pub product: Option<String>,
    pub action: Option<String>,
}

impl CartButton {
    pub fn new(product: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            product: Some(product.into()),
            action: Some(action.into()),
        }
    }
}

/// Body JSON de `POST /update_item/`.
///
/// Un atributo ausente en el botón se omite del body en lugar de enviarse
/// como `null`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateRequest {
    #[serde(rename = "productId", default, skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<CartAction>,
}

impl From<CartButton> for UpdateRequest {
    fn from(button: CartButton) -> Self {
        Self {
            product_id: button.product,
            action: button.action.map(CartAction::from),
        }
    }
}

/// Resultado de una tarea de actualización terminada
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpdateOutcome {
    Reloaded,
    Cancelled,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_body_uses_backend_field_names() {
        let request = UpdateRequest::from(CartButton::new("42", "add"));
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body, json!({"productId": "42", "action": "add"}));
    }

    #[test]
    fn test_unknown_action_is_sent_verbatim() {
        let request = UpdateRequest::from(CartButton::new("3", "Add "));
        assert_eq!(request.action, Some(CartAction::Other("Add ".to_string())));

        let body = serde_json::to_string(&request).unwrap();
        assert_eq!(body, r#"{"productId":"3","action":"Add "}"#);
    }

    #[test]
    fn test_missing_attributes_are_omitted() {
        let request = UpdateRequest::from(CartButton {
            product: None,
            action: Some("remove".to_string()),
        });
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body, json!({"action": "remove"}));

        let empty = UpdateRequest::from(CartButton::default());
        assert_eq!(serde_json::to_string(&empty).unwrap(), "{}");
    }

    #[test]
    fn test_empty_product_is_kept() {
        let request = UpdateRequest::from(CartButton::new("", "clear"));
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body, json!({"productId": "", "action": "clear"}));
    }

    #[test]
    fn test_known_verbs() {
        assert_eq!(CartAction::from("add"), CartAction::Add);
        assert_eq!(CartAction::from("remove"), CartAction::Remove);
        assert_eq!(CartAction::from("clear"), CartAction::Clear);
        assert_eq!(CartAction::Remove.to_string(), "remove");
    }
}
