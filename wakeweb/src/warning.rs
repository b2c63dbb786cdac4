// Copyright 2026 The keepawake Authors.
// This project is dual-licensed under Apache 2.0 and MIT terms.
// See LICENSE-APACHE and LICENSE-MIT for details.

use leptos::{ev::keydown, prelude::*};
use leptos_use::use_event_listener;
use wakelock::Locale;

/// Dialog explaining when the browser will turn the wake lock off again.
#[component]
pub fn WarningModal(
    #[prop(into)] locale: Signal<Locale>,
    #[prop(into)] visible: Signal<bool>,
    #[prop(into)] processing: Signal<bool>,
    on_confirm: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    _ = use_event_listener(document(), keydown, move |event| {
        if event.key() == "Escape" && visible.get_untracked() && !processing.get_untracked() {
            on_close.run(());
        }
    });

    view! {
        <Show when=move || visible.get()>
            <div class="modal-backdrop" on:click=move |_| if !processing.get_untracked() {
                on_close.run(());
            }></div>
            <div class="modal" role="dialog" aria-modal="true" aria-labelledby="modal-title" aria-describedby="modal-description">
                <h2 id="modal-title">
                    {move || locale.get().pick("画面スリープ防止機能について", "About keeping the screen awake")}
                </h2>
                <div id="modal-description">
                    <p>{move || locale.get().pick(
                        "画面スリープ防止機能は、ブラウザで本webページを表示している間だけ有効です。以下のいずれかの操作を行うと、自動的に解除されます：",
                        "Keeping the screen awake only works while this page is showing in your browser. It is turned off automatically if you do any of the following:",
                    )}</p>
                    <ul>
                        <li>{move || locale.get().pick("他のタブに切り替える", "Switch to another tab")}</li>
                        <li>{move || locale.get().pick("ブラウザを閉じる", "Close the browser")}</li>
                        <li>{move || locale.get().pick(
                            "他のアプリを画面の前面に表示する",
                            "Bring another app to the front of the screen",
                        )}</li>
                    </ul>
                </div>
                <div class="button-row">
                    <button type="button" class="secondary"
                        disabled=move || processing.get()
                        on:click=move |_| on_close.run(())>
                        {move || locale.get().pick("キャンセル", "Cancel")}
                    </button>
                    <button type="button" class="primary"
                        aria-label=move || locale.get().pick(
                            "理解しました。画面スリープ防止をオンにする",
                            "I understand. Keep the screen awake",
                        )
                        aria-busy=move || processing.get().to_string()
                        disabled=move || processing.get()
                        on:click=move |_| on_confirm.run(())>
                        {move || if processing.get() {
                            locale.get().pick("処理中...", "Working...")
                        } else {
                            locale.get().pick("理解しました", "I understand")
                        }}
                    </button>
                </div>
            </div>
        </Show>
    }
}
