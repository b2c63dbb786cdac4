// Copyright 2026 The keepawake Authors.
// This project is dual-licensed under Apache 2.0 and MIT terms.
// See LICENSE-APACHE and LICENSE-MIT for details.

pub mod awake;
pub mod browser;
pub mod clock;
pub mod gate;
pub mod logger;
pub mod settings;
pub mod toggle;
pub mod warning;

use crate::{
    awake::{WakeLock, use_wake_lock},
    clock::DigitalClock,
    gate::{ConfirmationGate, Decision},
    settings::{Settings, SettingsPanel},
    toggle::WakeLockToggle,
    warning::WarningModal,
};
use leptos::{prelude::*, server::codee::string::JsonSerdeCodec, task::spawn_local};
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    components::{A, Route, Router, Routes},
    path,
};
use leptos_use::storage::use_local_storage;
use log::error;
use wakelock::Locale;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let (settings, write_settings, _) = use_local_storage::<Settings, JsonSerdeCodec>("settings");
    Effect::new(move |_| log::set_max_level(settings.read().log_level));

    let locale = Signal::derive(move || settings.read().locale);
    let reacquire_on_visible = Signal::derive(move || settings.read().reacquire_on_visible);
    let wake_lock = use_wake_lock(locale, reacquire_on_visible);

    let gate = RwSignal::new(ConfirmationGate::default());
    let on_request = Callback::new(move |()| request_through_gate(gate, wake_lock));
    let on_confirm = Callback::new(move |()| confirm_warning(gate, wake_lock));
    let on_close = Callback::new(move |()| gate.write().close());

    view! {
        <Title text=move || locale.get().pick("画面スリープ防止", "Keep Awake").to_string()/>
        <Router>
            <a class="skip-link" href="#main">
                {move || locale.get().pick("メインコンテンツへスキップ", "Skip to main content")}
            </a>
            <header>
                <h1>{move || locale.get().pick("画面スリープ防止", "Keep Awake")}</h1>
                <nav aria-label=move || locale.get().pick("メインナビゲーション", "Main navigation")>
                    <A href="/">{move || locale.get().pick("ホーム", "Home")}</A>
                    <A href="/clock">{move || locale.get().pick("時計", "Clock")}</A>
                </nav>
            </header>
            <main id="main">
                <Routes fallback=move || not_found(locale.get())>
                    <Route path=path!("/") view=move || view! {
                        <HomeView settings write_settings/>
                    }/>
                    <Route path=path!("/clock") view=DigitalClock/>
                </Routes>
                <WakeLockToggle wake_lock locale on_request/>
            </main>
            <WarningModal
                locale
                visible=Signal::derive(move || gate.read().is_visible())
                processing=Signal::derive(move || gate.read().is_processing())
                on_confirm
                on_close/>
        </Router>
    }
}

/// The landing page, with an explanation and the settings.
#[component]
fn HomeView(settings: Signal<Settings>, write_settings: WriteSignal<Settings>) -> impl IntoView {
    let locale = move || settings.read().locale;

    view! {
        <p class="intro">{move || locale().pick(
            "ボタンを押すと、このページを表示している間は画面がスリープしなくなります。",
            "Press the button to stop the screen from sleeping while this page is showing.",
        )}</p>
        <SettingsPanel settings write_settings/>
    }
}

/// Turns the wake lock on, showing the warning first if it hasn't been confirmed yet.
fn request_through_gate(gate: RwSignal<ConfirmationGate>, wake_lock: WakeLock) {
    if gate.write().request() == Decision::Proceed {
        spawn_local(async move {
            if let Err(e) = wake_lock.request().await {
                error!("Wake lock request failed: {e}");
            }
        });
    }
}

/// Goes ahead with the pending request once the warning has been confirmed.
fn confirm_warning(gate: RwSignal<ConfirmationGate>, wake_lock: WakeLock) {
    if gate.write().confirm() {
        spawn_local(async move {
            if let Err(e) = wake_lock.request().await {
                error!("Wake lock request failed after confirmation: {e}");
            }
            gate.write().finish();
        });
    }
}

/// The message shown for paths which don't match any route.
pub fn not_found(locale: Locale) -> &'static str {
    locale.pick("ページが見つかりません", "Not found")
}
