//! Stat sidebar: month banner, stat bars and floating deltas.

use dioxus::prelude::*;

use dugout_domain::{DeltaIndicator, StatBar};

use crate::ui::use_client;

#[component]
pub fn StatSidebar() -> Element {
    let client = use_client();
    let state = client.store().signal();

    let snapshot = state.read();
    let month_copy = snapshot.stats.month_copy();
    let month = snapshot.stats.month();
    let intimacy_level = snapshot.stats.intimacy_level().map(str::to_string);
    let bars: Vec<StatBar> = snapshot.stats.bars().into_iter().cloned().collect();
    let indicators = snapshot.stats.indicators().to_vec();
    drop(snapshot);

    let banner = match month_copy {
        Some(copy) => rsx! {
            div {
                class: "month-banner {copy.background_class()}",
                h2 { class: "month-title", "{copy.title}" }
                p { class: "month-subtitle", "{copy.subtitle}" }
            }
        },
        None => rsx! {
            div {
                class: "month-banner",
                if let Some(month) = month {
                    h2 { class: "month-title", "{month}월" }
                }
            }
        },
    };

    rsx! {
        aside {
            class: "stat-sidebar",

            {banner}

            if let Some(level) = intimacy_level {
                div { class: "intimacy-level", "💕 {level}" }
            }

            div {
                class: "stat-bars",
                for bar in bars {
                    StatBarRow {
                        key: "{bar.key.as_str()}",
                        indicators: indicators.iter().filter(|i| i.key == bar.key).cloned().collect::<Vec<_>>(),
                        bar,
                    }
                }
            }
        }
    }
}

#[component]
fn StatBarRow(bar: StatBar, indicators: Vec<DeltaIndicator>) -> Element {
    let trend = bar.trend.map(|t| t.css_class()).unwrap_or_default();

    rsx! {
        div {
            class: "stat-row {trend}",
            span { class: "stat-label", "{bar.key.display_name()}" }
            div {
                class: "stat-track",
                div {
                    class: "stat-fill",
                    style: "width: {bar.width_percent()}%; background-color: {bar.tier.hex()};",
                }
            }
            span { class: "stat-value", "{bar.display_text()}" }
            for indicator in indicators {
                FloatingDelta { key: "{indicator.id}", indicator }
            }
        }
    }
}

/// `+N` / `-N` next to a bar; removes itself after its lifetime.
#[component]
fn FloatingDelta(indicator: DeltaIndicator) -> Element {
    let client = use_client();
    let (id, key) = (indicator.id, indicator.key);
    use_hook(move || {
        spawn(async move {
            client.expire_indicator(id, key).await;
        });
    });

    let class = if indicator.is_positive() {
        "stat-change positive"
    } else {
        "stat-change negative"
    };

    rsx! {
        span { class: "{class}", "{indicator.label()}" }
    }
}
