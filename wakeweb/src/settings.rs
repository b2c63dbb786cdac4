// Copyright 2026 The keepawake Authors.
// This project is dual-licensed under Apache 2.0 and MIT terms.
// See LICENSE-APACHE and LICENSE-MIT for details.

//! User preferences, persisted in local storage.

use leptos::prelude::*;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use wakelock::Locale;

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct Settings {
    pub locale: Locale,
    /// Whether to request the wake lock again when the page becomes visible after the browser
    /// released it.
    pub reacquire_on_visible: bool,
    pub log_level: LevelFilter,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            locale: Locale::default(),
            reacquire_on_visible: false,
            log_level: if cfg!(debug_assertions) {
                LevelFilter::Debug
            } else {
                LevelFilter::Info
            },
        }
    }
}

/// Form for changing the settings.
#[component]
pub fn SettingsPanel(settings: Signal<Settings>, write_settings: WriteSignal<Settings>) -> impl IntoView {
    let locale = move || settings.read().locale;

    view! {
        <section class="settings" aria-labelledby="settings-heading">
            <h2 id="settings-heading">{move || locale().pick("設定", "Settings")}</h2>
            <form>
                <label for="locale">{move || locale().pick("言語", "Language")}</label>
                <select id="locale"
                    on:change:target=move |event| if let Ok(locale) = event.target().value().parse() {
                        write_settings.update(|settings| settings.locale = locale);
                    }
                    prop:value=move || locale().to_string()>
                    {Locale::ALL.into_iter().map(|locale| {
                        view! {
                            <option value={locale.to_string()}>{locale.native_name()}</option>
                        }
                    }).collect::<Vec<_>>()}
                </select>
                <label>
                    <input type="checkbox"
                        prop:checked=move || settings.read().reacquire_on_visible
                        on:change:target=move |event| {
                            let checked = event.target().checked();
                            write_settings.update(|settings| settings.reacquire_on_visible = checked);
                        }/>
                    {move || locale().pick(
                        "ページに戻ったときに自動的に再開する",
                        "Turn back on automatically when returning to the page",
                    )}
                </label>
            </form>
        </section>
    }
}
