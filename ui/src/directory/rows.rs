use std::sync::Arc;

use dioxus::html::FileEngine;
use dioxus::prelude::*;

use crate::core::{format, platform};

use super::user::{User, UserId};

/// A file chosen in a row's hidden picker.
#[derive(Clone)]
pub(crate) struct AvatarPick {
    pub user_id: UserId,
    pub files: Arc<dyn FileEngine>,
}

#[component]
pub(crate) fn UserRow(user: User, on_pick: EventHandler<AvatarPick>) -> Element {
    let user_id = user.id;
    let input_id = user.avatar_input_id();
    let button_target = input_id.clone();
    let full_name = format::format_full_name(&user.first_name, &user.last_name);
    let button_label = if user.has_avatar() {
        "Change Photo"
    } else {
        "Upload Photo"
    };

    rsx! {
        li { class: "users-list-item", "data-user-id": "{user_id}",
            div { class: "users-list-item-avatar",
                match user.avatar.as_deref() {
                    Some(src) => rsx! {
                        img { class: "users-list-item-avatar-img", src: "{src}", alt: "{full_name}" }
                    },
                    None => rsx! {
                        p { class: "users-list-item-avatar-placeholder", "No photo" }
                    },
                }
                input {
                    r#type: "file",
                    id: "{input_id}",
                    class: "users-list-item-avatar-input",
                    accept: "image/*",
                    "data-user-id": "{user_id}",
                    style: "display: none;",
                    onchange: move |evt: FormEvent| {
                        if let Some(files) = evt.files() {
                            if !files.files().is_empty() {
                                on_pick.call(AvatarPick { user_id, files });
                            }
                        }
                    },
                }
                button {
                    r#type: "button",
                    class: "users-list-item-avatar-btn button",
                    onclick: move |_| platform::click_element(&button_target),
                    "{button_label}"
                }
            }
            h4 { class: "users-list-item-name", "{user.first_name}" }
            h4 { class: "users-list-item-last-name", "{user.last_name}" }
            p { class: "users-list-item-age", "{user.age}" }
            p { class: "users-list-item-email", "{user.email}" }
        }
    }
}
