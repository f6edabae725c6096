//! Overlays: hints, special moments, the transition layer and the end-of-game alert.

use dioxus::prelude::*;

use dugout_domain::Moment;

use crate::ui::presentation::state::TransitionPhase;
use crate::ui::use_client;

/// Suggested replies; picking one fills the input box.
#[component]
pub fn HintsModal() -> Element {
    let client = use_client();
    let state = client.store().signal();
    let Some(hints) = state.read().hints.clone() else {
        return rsx! {};
    };

    let on_close = {
        let client = client.clone();
        move |_| client.close_hints()
    };

    rsx! {
        div {
            class: "modal-overlay",
            div {
                class: "modal hints-modal",
                h2 { "💡 추천 응답" }
                if hints.is_empty() {
                    p { class: "modal-empty", "지금은 추천할 응답이 없어요." }
                }
                ul {
                    class: "hint-list",
                    for hint in hints {
                        li {
                            key: "{hint}",
                            button {
                                class: "hint-item",
                                onclick: {
                                    let client = client.clone();
                                    let hint = hint.clone();
                                    move |_| client.pick_hint(&hint)
                                },
                                "{hint}"
                            }
                        }
                    }
                }
                div {
                    class: "modal-buttons",
                    button { class: "cancel-button", onclick: on_close, "닫기" }
                }
            }
        }
    }
}

#[component]
pub fn MomentsModal() -> Element {
    let client = use_client();
    let state = client.store().signal();
    let Some(moments) = state.read().moments.clone() else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "modal-overlay",
            div {
                class: "modal moments-modal",
                h2 { "⭐ 특별한 순간" }
                if moments.is_empty() {
                    p { class: "modal-empty", "아직 기록된 순간이 없어요. 민석이와 더 많은 이야기를 나눠보세요." }
                }
                div {
                    class: "moment-list",
                    for (index, moment) in moments.into_iter().enumerate() {
                        MomentCard { key: "{index}", moment }
                    }
                }
                div {
                    class: "modal-buttons",
                    button { class: "cancel-button", onclick: move |_| client.close_moments(), "닫기" }
                }
            }
        }
    }
}

#[component]
fn MomentCard(moment: Moment) -> Element {
    rsx! {
        div {
            class: "moment-card",
            if let Some(image) = moment.image_url.clone() {
                img { class: "moment-image", src: "{image}", alt: "{moment.display_title()}" }
            }
            div {
                class: "moment-header",
                if let Some(icon) = moment.icon() {
                    span { class: "moment-icon", "{icon}" }
                }
                h3 { class: "moment-title", "{moment.display_title()}" }
            }
            span { class: "moment-date", "{moment.display_date()}" }
            if !moment.description.is_empty() {
                p { class: "moment-description", "{moment.description}" }
            }
        }
    }
}

/// Full-screen fade that hides mode switches.
#[component]
pub fn TransitionLayer() -> Element {
    let client = use_client();
    let state = client.store().signal();
    let covering = state.read().transition == TransitionPhase::Covering;

    rsx! {
        div {
            class: if covering { "transition-layer active" } else { "transition-layer" },
        }
    }
}

/// End-of-game notice. It has no close button: the page must be reloaded
/// to play again.
#[component]
pub fn TerminalAlert() -> Element {
    let client = use_client();
    let state = client.store().signal();
    let Some(message) = state.read().terminal_alert.clone() else {
        return rsx! {};
    };

    rsx! {
        div {
            class: "modal-overlay terminal-overlay",
            div {
                class: "modal terminal-alert",
                h2 { "⚾ 게임 종료" }
                p { "{message}" }
            }
        }
    }
}
