//! Notification cards in the top-right corner.

use dioxus::prelude::*;

use dugout_domain::Notification;

use crate::ui::use_client;

#[component]
pub fn NotificationStack() -> Element {
    let client = use_client();
    let state = client.store().signal();
    let items = state.read().notifications.items().to_vec();

    rsx! {
        div {
            class: "notification-stack",
            for notification in items {
                NotificationCard { key: "{notification.id}", notification }
            }
        }
    }
}

/// One card. Starts its own expiry timer when it mounts; clicking the body
/// expands it, the close button slides it out.
#[component]
fn NotificationCard(notification: Notification) -> Element {
    let client = use_client();
    let id = notification.id;

    use_hook({
        let client = client.clone();
        move || {
            spawn(async move {
                client.expire_notification(id).await;
            });
        }
    });

    let mut class = format!("notification {}", notification.kind.css_class());
    if notification.expanded {
        class.push_str(" expanded");
    }
    if notification.dismissing {
        class.push_str(" slide-out");
    }

    let on_toggle = {
        let client = client.clone();
        move |_| client.toggle_notification(id)
    };
    let on_close = move |evt: MouseEvent| {
        evt.stop_propagation();
        let client = client.clone();
        spawn(async move {
            client.dismiss_notification(id).await;
        });
    };

    rsx! {
        div {
            class: "{class}",
            onclick: on_toggle,
            div {
                class: "notification-header",
                span { class: "notification-title", "{notification.title}" }
                button { class: "notification-close", onclick: on_close, "×" }
            }
            div { class: "notification-body", "{notification.body}" }
        }
    }
}
