//! Storybook viewer: one illustrated page at a time.

use dioxus::prelude::*;

use crate::ui::use_client;

#[component]
pub fn StorybookView() -> Element {
    let client = use_client();
    let state = client.store().signal();

    let (page, is_ending, completing) = {
        let snapshot = state.read();
        (
            snapshot.viewer.page_view(),
            snapshot.viewer.is_ending(),
            snapshot.completion.is_in_flight(),
        )
    };
    let Some(page) = page else {
        return rsx! {};
    };

    let on_prev = {
        let client = client.clone();
        move |_| {
            client.storybook_prev();
        }
    };
    let on_next = {
        let client = client.clone();
        move |_| {
            client.storybook_next();
        }
    };
    let on_start = {
        let client = client.clone();
        move |_| {
            let client = client.clone();
            spawn(async move {
                client.storybook_start().await;
            });
        }
    };

    rsx! {
        section {
            class: if is_ending { "storybook-container ending" } else { "storybook-container" },

            h2 { class: "storybook-title", "{page.title}" }

            div {
                class: "storybook-page",
                if let Some(image) = page.image.clone() {
                    img { class: "storybook-image", src: "{image}", alt: "{page.title}" }
                }
                p { class: "storybook-text", "{page.text}" }
            }

            div {
                class: "storybook-nav",
                button {
                    class: "storybook-prev",
                    disabled: !page.prev_enabled,
                    onclick: on_prev,
                    "◀ 이전"
                }
                span { class: "storybook-progress", "{page.progress}" }
                if page.next_enabled {
                    button {
                        class: "storybook-next",
                        onclick: on_next,
                        "다음 ▶"
                    }
                }
                if let Some(start) = page.start_button.clone() {
                    button {
                        class: "storybook-start",
                        disabled: completing,
                        onclick: on_start,
                        "{start.label}"
                    }
                }
            }
        }
    }
}
