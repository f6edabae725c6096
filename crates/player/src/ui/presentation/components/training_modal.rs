//! Training modal: intensity lever and focus checkboxes.

use dioxus::prelude::*;

use dugout_domain::TrainingFocus;

use crate::ui::use_client;

#[component]
pub fn TrainingModal() -> Element {
    let client = use_client();
    let state = client.store().signal();

    let (open, intensity, tier, selected, submitting) = {
        let snapshot = state.read();
        let form = &snapshot.training;
        (
            form.is_open(),
            form.intensity(),
            form.tier(),
            form.focuses(),
            form.is_submitting(),
        )
    };
    if !open {
        return rsx! {};
    }

    let stamina = tier.stamina_change();
    let on_intensity = {
        let client = client.clone();
        move |evt: FormEvent| {
            if let Ok(value) = evt.value().parse::<i32>() {
                client.set_training_intensity(value);
            }
        }
    };
    let on_cancel = {
        let client = client.clone();
        move |_| client.close_training()
    };
    let on_submit = {
        let client = client.clone();
        move |_| {
            let client = client.clone();
            spawn(async move {
                client.submit_training().await;
            });
        }
    };

    rsx! {
        div {
            class: "modal-overlay",
            div {
                class: "modal training-modal",
                h2 { "🏋️ 훈련하기" }

                label {
                    class: "training-intensity",
                    "훈련 강도: {intensity}"
                    input {
                        r#type: "range",
                        min: 0,
                        max: 100,
                        value: "{intensity}",
                        disabled: submitting,
                        oninput: on_intensity,
                    }
                }
                div {
                    class: "training-tier",
                    span { class: "tier-label", "{tier.label()}" }
                    span {
                        class: if stamina >= 0 { "tier-stamina positive" } else { "tier-stamina negative" },
                        "체력 {stamina:+}"
                    }
                }

                fieldset {
                    class: "training-focuses",
                    legend { "훈련 종목" }
                    for focus in TrainingFocus::all() {
                        label {
                            key: "{focus.as_str()}",
                            input {
                                r#type: "checkbox",
                                checked: selected.contains(&focus),
                                disabled: submitting,
                                onchange: {
                                    let client = client.clone();
                                    move |_| {
                                        client.toggle_training_focus(focus);
                                    }
                                },
                            }
                            "{focus.stat().display_name()}"
                        }
                    }
                }

                div {
                    class: "modal-buttons",
                    button { class: "cancel-button", disabled: submitting, onclick: on_cancel, "취소" }
                    button {
                        class: "confirm-button",
                        disabled: submitting,
                        onclick: on_submit,
                        if submitting { "훈련 중..." } else { "훈련 시작" }
                    }
                }
            }
        }
    }
}
