//! Chat panel: transcript, inline cards and the input row.

use dioxus::prelude::*;

use dugout_domain::{Attachment, ChatMessage, EventChoice, MessageId, MonthGuide, TrainingResultCard};

use crate::ui::use_client;

const SCROLL_TO_BOTTOM: &str = r#"
    const list = document.getElementById("chat-messages");
    if (list) { list.scrollTop = list.scrollHeight; }
"#;

#[component]
pub fn ChatPanel() -> Element {
    let client = use_client();
    let state = client.store().signal();

    // Follow the newest line while replies stream in.
    use_effect(move || {
        let _revision = state.read().transcript.revision();
        let _ = document::eval(SCROLL_TO_BOTTOM);
    });

    let snapshot = state.read();
    let messages = snapshot.transcript.messages().to_vec();
    let input_enabled = snapshot.input_enabled();
    let draft = snapshot.draft.clone();
    let banner = snapshot.banner.clone();
    let training_available = snapshot.training_available();
    let busy = snapshot.chat.is_in_flight() || snapshot.advance.is_in_flight();
    drop(snapshot);

    let on_input = {
        let client = client.clone();
        move |evt: FormEvent| client.set_draft(evt.value())
    };
    let on_send = {
        let client = client.clone();
        move |_| {
            let client = client.clone();
            spawn(async move {
                client.send_message().await;
            });
        }
    };
    let on_keydown = {
        let client = client.clone();
        move |evt: KeyboardEvent| {
            if evt.key() == Key::Enter && !evt.modifiers().shift() {
                evt.prevent_default();
                let client = client.clone();
                spawn(async move {
                    client.send_message().await;
                });
            }
        }
    };
    let on_hints = {
        let client = client.clone();
        move |_| {
            let client = client.clone();
            spawn(async move {
                client.open_hints().await;
            });
        }
    };
    let on_moments = {
        let client = client.clone();
        move |_| {
            let client = client.clone();
            spawn(async move {
                client.open_moments().await;
            });
        }
    };
    let on_training = {
        let client = client.clone();
        move |_| {
            client.open_training();
        }
    };
    let on_advance = {
        let client = client.clone();
        move |_| {
            let client = client.clone();
            spawn(async move {
                client.advance_to_next_month().await;
            });
        }
    };

    rsx! {
        section {
            class: "chat-panel",

            if let Some(banner) = banner {
                div { class: "error-banner", "{banner}" }
            }

            div {
                id: "chat-messages",
                class: "chat-messages",
                for message in messages {
                    MessageBubble { key: "{message.id}", message }
                }
            }

            div {
                class: "chat-actions",
                button {
                    class: "action-button",
                    disabled: !input_enabled,
                    onclick: on_hints,
                    "💡 힌트"
                }
                button {
                    class: "action-button",
                    onclick: on_moments,
                    "⭐ 특별한 순간"
                }
                if training_available {
                    button {
                        class: "action-button training-button",
                        disabled: busy,
                        onclick: on_training,
                        "🏋️ 훈련하기"
                    }
                }
                button {
                    class: "action-button advance-button",
                    disabled: !input_enabled || busy,
                    onclick: on_advance,
                    "📅 다음 달로"
                }
            }

            div {
                class: "chat-input-row",
                textarea {
                    class: "chat-input",
                    rows: 1,
                    placeholder: "민석이에게 말을 걸어보세요...",
                    disabled: !input_enabled,
                    value: "{draft}",
                    oninput: on_input,
                    onkeydown: on_keydown,
                }
                button {
                    class: "send-button",
                    disabled: !input_enabled || draft.trim().is_empty(),
                    onclick: on_send,
                    "전송"
                }
            }
        }
    }
}

#[component]
fn MessageBubble(message: ChatMessage) -> Element {
    let id = message.id;
    let class = format!("message {}", message.sender.css_class());
    let attachment = match message.attachment.clone() {
        Some(Attachment::EventChoices { choices, selected, .. }) => rsx! {
            ChoiceButtons { message: id, choices, selected }
        },
        Some(Attachment::MonthGuide(guide)) => rsx! {
            GuideCard { message: id, guide }
        },
        Some(Attachment::TrainingResult(card)) => rsx! {
            TrainingResult { card }
        },
        None => rsx! {},
    };

    rsx! {
        div {
            id: "{id}",
            class: "{class}",

            if !message.text.is_empty() {
                div { class: "message-text", "{message.text}" }
            }
            if let Some(image) = message.image.clone() {
                img { class: "message-image", src: "{image}", alt: "" }
            }

            {attachment}
        }
    }
}

/// Buttons for an event's choices; all lock once one is picked.
#[component]
fn ChoiceButtons(message: MessageId, choices: Vec<EventChoice>, selected: Option<String>) -> Element {
    let client = use_client();
    let locked = selected.is_some();

    rsx! {
        div {
            class: "event-choices",
            for choice in choices {
                button {
                    key: "{choice.id}",
                    class: if selected.as_deref() == Some(choice.id.as_str()) { "choice-button selected" } else { "choice-button" },
                    disabled: locked,
                    onclick: {
                        let client = client.clone();
                        let choice_id = choice.id.clone();
                        move |_| {
                            let client = client.clone();
                            let choice_id = choice_id.clone();
                            spawn(async move {
                                client.select_event_choice(message, &choice_id).await;
                            });
                        }
                    },
                    "{choice.text}"
                }
            }
        }
    }
}

#[component]
fn GuideCard(message: MessageId, guide: MonthGuide) -> Element {
    let client = use_client();

    rsx! {
        div {
            class: "guide-card",
            h3 { class: "guide-title", "📅 {guide.title}" }
            if !guide.message.is_empty() {
                p { class: "guide-message", "{guide.message}" }
            }
            if !guide.goals.is_empty() {
                div {
                    class: "guide-goals",
                    h4 { "🎯 이번 달 목표" }
                    ul {
                        for goal in guide.goals.iter() {
                            li { "{goal}" }
                        }
                    }
                }
            }
            button {
                class: "guide-start-button",
                onclick: move |_| client.close_guide(message),
                "시작하기"
            }
        }
    }
}

#[component]
fn TrainingResult(card: TrainingResultCard) -> Element {
    rsx! {
        div {
            class: "training-result",
            ul {
                class: "training-result-changes",
                for line in card.lines() {
                    li { "{line}" }
                }
            }
            if let Some(summary) = card.summary.clone() {
                p { class: "training-result-summary", "{summary}" }
            }
        }
    }
}
