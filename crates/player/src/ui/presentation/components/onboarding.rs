//! First-run tutorial, paged like a storybook.

use dioxus::prelude::*;

use crate::ui::use_client;

/// Title and body of each tutorial page, in order.
const PAGES: [(&str, &str); 5] = [
    (
        "⚾ 더그아웃에 오신 걸 환영합니다",
        "당신은 고교 야구부의 새 코치입니다. 드래프트를 앞둔 에이스 민석이와 함께 3월부터 9월까지를 보내게 됩니다.",
    ),
    (
        "💬 대화로 마음을 열어주세요",
        "민석이에게 자유롭게 말을 걸어보세요. 대화에 따라 친밀도와 멘탈이 오르내리고, 특별한 이벤트가 일어나기도 합니다.",
    ),
    (
        "📊 스탯을 확인하세요",
        "왼쪽 패널에서 친밀도, 멘탈, 체력, 타격, 주루, 수비를 볼 수 있습니다. 매달 목표를 달성하면 더 좋은 결말에 가까워집니다.",
    ),
    (
        "🏋️ 훈련과 다음 달",
        "4월, 6월, 7월에는 훈련을 할 수 있습니다. 준비가 되면 '다음 달로' 버튼으로 시간을 넘기고 새로운 이야기를 만나보세요.",
    ),
    (
        "💡 막힐 때는 힌트",
        "무슨 말을 해야 할지 모르겠다면 힌트 버튼을 눌러보세요. 함께한 특별한 순간들은 '특별한 순간'에서 다시 볼 수 있습니다.",
    ),
];

#[component]
pub fn OnboardingModal() -> Element {
    let client = use_client();
    let state = client.store().signal();

    let onboarding = state.read().onboarding;
    if !onboarding.is_open() {
        return rsx! {};
    }
    let page = onboarding.current_page();
    let (title, body) = PAGES.get(page.saturating_sub(1)).copied().unwrap_or(PAGES[0]);

    let on_prev = {
        let client = client.clone();
        move |_| {
            client.onboarding_prev();
        }
    };
    let on_next = {
        let client = client.clone();
        move |_| {
            client.onboarding_next();
        }
    };
    let on_dont_show = {
        let client = client.clone();
        move |evt: FormEvent| client.set_dont_show_again(evt.checked())
    };
    let on_close = {
        let client = client.clone();
        move |_| {
            let client = client.clone();
            spawn(async move {
                client.close_onboarding().await;
            });
        }
    };

    rsx! {
        div {
            class: "modal-overlay onboarding-overlay",
            div {
                class: "modal onboarding-modal",

                div {
                    class: "storybook-page onboarding-page",
                    h2 { "{title}" }
                    p { "{body}" }
                }

                div {
                    class: "onboarding-dots",
                    for n in 1..=onboarding.total_pages() {
                        button {
                            key: "{n}",
                            class: if n == page { "dot active" } else { "dot" },
                            onclick: {
                                let client = client.clone();
                                move |_| {
                                    client.onboarding_go_to(n);
                                }
                            },
                        }
                    }
                }

                div {
                    class: "storybook-nav",
                    button { disabled: onboarding.is_first(), onclick: on_prev, "◀ 이전" }
                    span { class: "storybook-progress", "{page} / {onboarding.total_pages()}" }
                    if onboarding.is_last() {
                        button { class: "storybook-start", onclick: on_close, "시작하기" }
                    } else {
                        button { onclick: on_next, "다음 ▶" }
                    }
                }

                label {
                    class: "dont-show-again",
                    input {
                        r#type: "checkbox",
                        checked: onboarding.dont_show_again(),
                        onchange: on_dont_show,
                    }
                    "다시 보지 않기"
                }
            }
        }
    }
}
