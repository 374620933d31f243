use dioxus::prelude::*;

use crate::core::platform::Platform;

// Navbar stylesheet, linked as an asset and inlined for release native builds.
const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Brand header. Platforms pass their router links as children.
#[component]
pub fn AppNavbar(children: Element) -> Element {
    let platform = Platform::current().label();

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header {
            id: "navbar",
            class: "navbar",
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-link",
                        span { class: "navbar__brand-spark", aria_hidden: "true" }
                        span { class: "navbar__brand-mark", "Rollcall" }
                    }
                    span { class: "navbar__brand-subtitle", "People directory · {platform}" }
                }
                nav { class: "navbar__links", {children} }
            }
        }
    }
}
