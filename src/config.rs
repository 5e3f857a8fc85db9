use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

use crate::utils::constants::{ANONYMOUS_USER, CSRF_COOKIE, CSRF_TOKEN_GLOBAL, USER_GLOBAL};

/// Contexto de sesión que la página le pasa al handler del carrito
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartConfig {
    pub identity: String,
    pub anti_forgery_token: String,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            identity: ANONYMOUS_USER.to_string(),
            anti_forgery_token: String::new(),
        }
    }
}

impl CartConfig {
    pub fn new(identity: impl Into<String>, anti_forgery_token: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
            anti_forgery_token: anti_forgery_token.into(),
        }
    }

    /// Carga identidad y token desde los globales que deja la plantilla.
    /// Sin `user` se asume usuario anónimo; sin `csrftoken` se busca la cookie.
    pub fn from_page() -> Self {
        let window = match web_sys::window() {
            Some(w) => w,
            None => {
                log::warn!("⚠️ No hay window, usando configuración anónima");
                return Self::default();
            }
        };

        let identity = read_global_string(&window, USER_GLOBAL)
            .unwrap_or_else(|| ANONYMOUS_USER.to_string());

        let anti_forgery_token = read_global_string(&window, CSRF_TOKEN_GLOBAL)
            .or_else(|| read_cookie(&window, CSRF_COOKIE))
            .unwrap_or_default();

        if anti_forgery_token.is_empty() {
            log::warn!("⚠️ No se encontró token CSRF en la página");
        }

        Self { identity, anti_forgery_token }
    }

    pub fn is_anonymous(&self) -> bool {
        self.identity == ANONYMOUS_USER
    }
}

fn read_global_string(window: &web_sys::Window, name: &str) -> Option<String> {
    js_sys::Reflect::get(window, &JsValue::from_str(name))
        .ok()
        .and_then(|v| v.as_string())
}

fn read_cookie(window: &web_sys::Window, name: &str) -> Option<String> {
    let cookies = window
        .document()?
        .dyn_into::<HtmlDocument>()
        .ok()?
        .cookie()
        .ok()?;
    let raw = find_cookie(&cookies, name)?;
    Some(
        js_sys::decode_uri_component(raw)
            .ok()
            .and_then(|s| s.as_string())
            .unwrap_or_else(|| raw.to_string()),
    )
}

/// Busca `name=` en un string estilo `document.cookie`
pub fn find_cookie<'a>(cookies: &'a str, name: &str) -> Option<&'a str> {
    cookies
        .split(';')
        .map(str::trim)
        .find_map(|pair| pair.strip_prefix(name)?.strip_prefix('='))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_anonymous() {
        assert!(CartConfig::default().is_anonymous());
        assert!(!CartConfig::new("alice", "tok").is_anonymous());
    }

    #[test]
    fn test_sentinel_match_is_exact() {
        assert!(!CartConfig::new("anonymoususer", "").is_anonymous());
        assert!(!CartConfig::new("", "").is_anonymous());
    }

    #[test]
    fn test_find_cookie_among_several() {
        let cookies = "sessionid=abc; csrftoken=Xy%3D9; theme=dark";
        assert_eq!(find_cookie(cookies, "csrftoken"), Some("Xy%3D9"));
        assert_eq!(find_cookie(cookies, "theme"), Some("dark"));
    }

    #[test]
    fn test_find_cookie_does_not_match_prefix_names() {
        let cookies = "csrftoken_old=1;csrftoken=2";
        assert_eq!(find_cookie(cookies, "csrftoken"), Some("2"));
        assert_eq!(find_cookie("other=1", "csrftoken"), None);
        assert_eq!(find_cookie("", "csrftoken"), None);
    }
}
