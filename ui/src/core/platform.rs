//! Platform detection and small bridges into the host webview.

use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Web,
    Desktop,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_arch = "wasm32") {
            Self::Web
        } else {
            Self::Desktop
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Desktop => "desktop",
        }
    }
}

/// Show a blocking alert in the host page.
pub fn alert(message: &str) {
    // serde_json gives us a correctly escaped JS string literal.
    let literal = serde_json::to_string(message).unwrap_or_else(|_| "\"\"".to_string());
    let _ = document::eval(&format!("alert({literal});"));
}

/// Programmatically click a (hidden) element, e.g. a file input.
pub fn click_element(element_id: &str) {
    let literal = serde_json::to_string(element_id).unwrap_or_else(|_| "\"\"".to_string());
    let _ = document::eval(&format!(
        "const el = document.getElementById({literal}); if (el) {{ el.value = ''; el.click(); }}"
    ));
}
