// Copyright 2026 The keepawake Authors.
// This project is dual-licensed under Apache 2.0 and MIT terms.
// See LICENSE-APACHE and LICENSE-MIT for details.

use crate::awake::WakeLock;
use leptos::{prelude::*, task::spawn_local};
use log::error;
use wakelock::Locale;

/// Button for turning the wake lock on and off, along with its status and any error.
///
/// Turning it on goes through `on_request` so that the caller can ask for confirmation first.
#[component]
pub fn WakeLockToggle(
    wake_lock: WakeLock,
    #[prop(into)] locale: Signal<Locale>,
    on_request: Callback<()>,
) -> impl IntoView {
    let state = wake_lock.state();
    let is_active = move || state.read().is_active;
    let is_loading = move || state.read().is_loading;
    let is_supported = move || state.read().is_supported;

    let on_click = move |_| {
        if state.read_untracked().is_active {
            spawn_local(async move {
                if let Err(e) = wake_lock.release().await {
                    error!("Wake lock release failed: {e}");
                }
            });
        } else {
            on_request.run(());
        }
    };

    view! {
        <section class="wake-lock" aria-labelledby="wake-lock-heading">
            <h2 id="wake-lock-heading">
                {move || locale.get().pick("画面スリープ防止", "Keep screen awake")}
            </h2>
            <button type="button"
                class=move || if is_active() { "toggle active" } else { "toggle" }
                aria-pressed=move || is_active().to_string()
                aria-busy=move || is_loading().to_string()
                aria-describedby="wake-lock-status"
                aria-label=move || button_label(locale.get(), is_active())
                disabled=move || !is_supported() || is_loading()
                on:click=on_click>
                {move || is_loading().then(|| view! { <span class="spinner" aria-hidden="true"></span> })}
                {move || button_text(locale.get(), is_active(), is_loading())}
            </button>
            <p id="wake-lock-status" class="status" role="status" aria-live="polite">
                <span class=move || if is_active() { "indicator on" } else { "indicator off" } aria-hidden="true"></span>
                {move || status_text(locale.get(), is_supported(), is_active())}
            </p>
            {move || {
                let state = state.get();
                let error = state.error.clone()?;
                let locale = locale.get();
                let suggestion = state
                    .error_kind
                    .filter(|_| state.is_supported)
                    .map(|kind| kind.recovery_suggestion(locale));
                let retry = state.is_recoverable_error().then(|| view! {
                    <button type="button" class="retry"
                        disabled=is_loading
                        on:click=move |_| {
                            wake_lock.clear_error();
                            on_request.run(());
                        }>
                        {locale.pick("再試行", "Try again")}
                    </button>
                });
                Some(view! {
                    <div class="error" role="alert">
                        <p>{error}</p>
                        {suggestion.map(|suggestion| view! { <p class="suggestion">{suggestion}</p> })}
                        {retry}
                        <button type="button" class="dismiss"
                            aria-label=locale.pick("エラーを閉じる", "Dismiss error")
                            on:click=move |_| wake_lock.clear_error()>
                            "×"
                        </button>
                    </div>
                })
            }}
        </section>
    }
}

fn button_text(locale: Locale, active: bool, loading: bool) -> &'static str {
    match (loading, active) {
        (true, _) => locale.pick("処理中...", "Working..."),
        (false, true) => locale.pick("オフにする", "Turn off"),
        (false, false) => locale.pick("オンにする", "Turn on"),
    }
}

fn button_label(locale: Locale, active: bool) -> &'static str {
    if active {
        locale.pick(
            "画面スリープ防止をオフにする",
            "Stop keeping the screen awake",
        )
    } else {
        locale.pick("画面スリープ防止をオンにする", "Keep the screen awake")
    }
}

fn status_text(locale: Locale, supported: bool, active: bool) -> &'static str {
    match (supported, active) {
        (false, _) => locale.pick(
            "このブラウザでは利用できません",
            "Not available in this browser",
        ),
        (true, true) => locale.pick(
            "画面はスリープしません",
            "The screen will stay on",
        ),
        (true, false) => locale.pick(
            "画面は通常どおりスリープします",
            "The screen will sleep as usual",
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_text_wins() {
        assert_eq!(button_text(Locale::En, true, true), "Working...");
        assert_eq!(button_text(Locale::En, false, true), "Working...");
        assert_eq!(button_text(Locale::Ja, true, false), "オフにする");
    }

    #[test]
    fn unsupported_status_ignores_active() {
        assert_eq!(
            status_text(Locale::En, false, true),
            "Not available in this browser"
        );
        assert_eq!(status_text(Locale::En, true, true), "The screen will stay on");
    }
}
