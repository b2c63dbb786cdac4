// Copyright 2026 The keepawake Authors.
// This project is dual-licensed under Apache 2.0 and MIT terms.
// See LICENSE-APACHE and LICENSE-MIT for details.

use chrono::{Local, NaiveDateTime};
use leptos::prelude::*;
use leptos_use::use_interval_fn;

/// Returns a signal with the current local time, updated every second.
pub fn use_clock() -> ReadSignal<NaiveDateTime> {
    let (now, write_now) = signal(Local::now().naive_local());
    _ = use_interval_fn(move || write_now.set(Local::now().naive_local()), 1000_u64);
    now
}

/// Formats the time as `HH:MM:SS` on a 24-hour clock.
pub fn format_time(time: &NaiveDateTime) -> String {
    time.format("%H:%M:%S").to_string()
}

/// Formats the date as `YYYY/MM/DD`.
pub fn format_date(time: &NaiveDateTime) -> String {
    time.format("%Y/%m/%d").to_string()
}

#[component]
pub fn DigitalClock() -> impl IntoView {
    let now = use_clock();

    view! {
        <div class="clock">
            <time class="clock-time" datetime=move || now.get().format("%H:%M:%S").to_string()>
                {move || format_time(&now.get())}
            </time>
            <time class="clock-date" datetime=move || now.get().format("%Y-%m-%d").to_string()>
                {move || format_date(&now.get())}
            </time>
        </div>
    }
}
