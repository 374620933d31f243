use std::rc::Rc;

use dioxus::prelude::*;
use tracing::{info, warn};

use crate::core::config::DirectoryConfig;
use crate::core::platform::{self, Platform};
use crate::core::storage::{LocalSlots, MemorySlots, SlotStore};

use super::avatar::{commit_avatar, read_validated, AvatarLimits, AvatarStore, PickedFile};
use super::filter::AgeFilter;
use super::loader::load_directory;
use super::rows::{AvatarPick, UserRow};
use super::sort::SortKey;
use super::state::{DirectoryState, LoadPhase};
use super::user::User;

type SharedStore = AvatarStore<Rc<dyn SlotStore>>;

/// Filter and sort controls, the users list, and the loading/error/empty panels.
#[component]
pub fn DirectoryView() -> Element {
    let config = use_hook(|| try_consume_context::<DirectoryConfig>().unwrap_or_default());
    let store = use_hook(|| open_store(&config));
    let limits = AvatarLimits::from(&config);

    let mut phase = use_signal(LoadPhase::default);
    let mut directory = use_signal(DirectoryState::default);

    {
        let config = config.clone();
        let store = store.clone();
        use_future(move || {
            let config = config.clone();
            let store = store.clone();
            async move {
                phase.set(LoadPhase::Loading);
                info!(
                    endpoint = %config.users_endpoint,
                    platform = Platform::current().label(),
                    "loading users"
                );
                match load_directory(&config, &store).await {
                    Ok(state) => {
                        directory.set(state);
                        phase.set(LoadPhase::Ready);
                    }
                    Err(err) => {
                        warn!("user load failed: {err}");
                        phase.set(LoadPhase::Failed(err.to_string()));
                    }
                }
            }
        });
    }

    let on_pick = use_callback(move |pick: AvatarPick| {
        let store = store.clone();
        spawn(upload_avatar(pick, limits, store, directory));
    });

    let ready = phase.read().is_ready();
    let (visible, filter, sort) = {
        let state = directory.read();
        (state.visible(), state.filter(), state.sort())
    };

    rsx! {
        div { class: "filters",
            label { class: "filters__field",
                span { class: "filters__label", "Age" }
                select {
                    id: "ageGroup",
                    class: "filters__select",
                    disabled: !ready,
                    value: "{filter.value()}",
                    onchange: move |evt: FormEvent| {
                        directory.write().set_filter(AgeFilter::from_value(&evt.value()));
                    },
                    for choice in AgeFilter::ALL {
                        option {
                            key: "{choice.value()}",
                            value: "{choice.value()}",
                            selected: choice == filter,
                            "{choice.label()}"
                        }
                    }
                }
            }
            label { class: "filters__field",
                span { class: "filters__label", "Sort by" }
                select {
                    id: "sortGroup",
                    class: "filters__select",
                    disabled: !ready,
                    value: "{sort.value()}",
                    onchange: move |evt: FormEvent| {
                        directory.write().set_sort(SortKey::from_value(&evt.value()));
                    },
                    for choice in SortKey::ALL {
                        option {
                            key: "{choice.value()}",
                            value: "{choice.value()}",
                            selected: choice == sort,
                            "{choice.label()}"
                        }
                    }
                }
            }
            button {
                r#type: "button",
                id: "resetFilters",
                class: "button button--ghost filters__reset",
                disabled: !ready,
                onclick: move |_| directory.write().reset(),
                "Reset"
            }
        }

        UsersPanel { phase: phase(), users: visible, on_pick }
    }
}

/// Loading, error, empty or list panel for the current phase.
#[component]
pub(crate) fn UsersPanel(
    phase: LoadPhase,
    users: Vec<User>,
    on_pick: EventHandler<AvatarPick>,
) -> Element {
    match phase {
        LoadPhase::Loading => rsx! {
            div { class: "loading",
                span { class: "loading__spinner", aria_hidden: "true" }
                p { "Loading users…" }
            }
        },
        LoadPhase::Failed(_) => rsx! {
            div { class: "error",
                h2 { "Couldn't load users" }
                p { "Something went wrong while fetching the directory. Please refresh to try again." }
            }
        },
        LoadPhase::Ready => rsx! {
            div { class: "users",
                if users.is_empty() {
                    div { class: "users-empty",
                        p { "No users match the selected filters." }
                    }
                } else {
                    ul { class: "users-list",
                        for user in users {
                            UserRow { key: "{user.id}", user, on_pick }
                        }
                    }
                }
            }
        },
    }
}

fn open_store(config: &DirectoryConfig) -> SharedStore {
    let slots: Rc<dyn SlotStore> = match LocalSlots::open() {
        Ok(slots) => Rc::new(slots),
        Err(err) => {
            warn!("local storage unavailable, avatars won't persist: {err}");
            Rc::new(MemorySlots::new())
        }
    };
    AvatarStore::new(slots, config.avatar_slot.clone())
}

async fn upload_avatar(
    pick: AvatarPick,
    limits: AvatarLimits,
    store: SharedStore,
    mut directory: Signal<DirectoryState>,
) {
    let AvatarPick { user_id, files } = pick;
    let Some(name) = files.files().into_iter().next() else {
        return;
    };

    let size = files.file_size(&name).await;
    let file = PickedFile::new(name.clone(), size);

    let outcome = match read_validated(&file, limits, files.read_file(&name)).await {
        Ok(data_url) => directory.with_mut(|state| commit_avatar(state, &store, user_id, data_url)),
        Err(err) => Err(err),
    };

    if let Err(err) = outcome {
        warn!(user = user_id, file = %file.name, "avatar upload failed: {err}");
        platform::alert(&err.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::user::sample;

    #[component]
    fn PanelHarness(phase: LoadPhase, users: Vec<User>) -> Element {
        let on_pick = use_callback(|_: AvatarPick| {});
        rsx! { UsersPanel { phase, users, on_pick } }
    }

    fn render_panel(phase: LoadPhase, users: Vec<User>) -> String {
        let mut dom = VirtualDom::new_with_props(
            PanelHarness,
            PanelHarnessProps::builder().phase(phase).users(users).build(),
        );
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn row_without_avatar_shows_placeholder_and_upload_button() {
        let html = render_panel(LoadPhase::Ready, vec![sample(7, "Ann", "Lee", 30)]);

        assert!(html.contains("users-list-item-avatar-placeholder"), "{html}");
        assert!(html.contains("No photo"));
        assert!(html.contains("Upload Photo"));
        assert!(!html.contains("Change Photo"));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn row_with_avatar_shows_image_and_change_button() {
        let mut user = sample(7, "Ann", "Lee", 30);
        user.avatar = Some("data:image/png;base64,AA==".into());
        let html = render_panel(LoadPhase::Ready, vec![user]);

        assert!(html.contains("<img"), "{html}");
        assert!(html.contains("data:image/png;base64,AA=="));
        assert!(html.contains("Change Photo"));
        assert!(!html.contains("No photo"));
    }

    #[test]
    fn row_carries_hidden_image_picker_keyed_by_user() {
        let html = render_panel(LoadPhase::Ready, vec![sample(7, "Ann", "Lee", 30)]);

        assert!(html.contains(r#"id="avatar-input-7""#), "{html}");
        assert!(html.contains(r#"accept="image/*""#));
        assert!(html.contains("display: none;"));
        for field in ["Ann", "Lee", "30", "ann@example.com"] {
            assert!(html.contains(field), "missing {field}");
        }
    }

    #[test]
    fn empty_result_replaces_list_with_empty_panel() {
        let html = render_panel(LoadPhase::Ready, Vec::new());

        assert!(html.contains("users-empty"), "{html}");
        assert!(!html.contains("<ul"));
    }

    #[test]
    fn loading_and_error_panels_hide_the_list() {
        let users = vec![sample(1, "Ann", "Lee", 30)];

        let loading = render_panel(LoadPhase::Loading, users.clone());
        assert!(loading.contains(r#"class="loading""#), "{loading}");
        assert!(!loading.contains("users-list"));

        let failed = render_panel(LoadPhase::Failed("boom".into()), users);
        assert!(failed.contains(r#"class="error""#), "{failed}");
        assert!(!failed.contains("users-list"));
        assert!(!failed.contains("boom"));
    }
}
