use dioxus::prelude::*;

use crate::directory::DirectoryView;

#[component]
pub fn Users() -> Element {
    rsx! {
        section { class: "page page-users",
            h1 { "Users" }
            p { "Filter by age, sort by name or age, and give anyone a photo. Photos stay on this device." }
            DirectoryView {}
        }
    }
}
