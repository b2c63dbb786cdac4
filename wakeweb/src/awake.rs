// Copyright 2026 The keepawake Authors.
// This project is dual-licensed under Apache 2.0 and MIT terms.
// See LICENSE-APACHE and LICENSE-MIT for details.

use crate::browser::{BrowserWakeLock, detect_environment};
use leptos::{ev::visibilitychange, prelude::*, task::spawn_local};
use leptos_use::use_event_listener;
use log::{debug, warn};
use wakelock::{ControllerState, Locale, WakeLockController, WakeLockError};
use web_sys::VisibilityState;

type Controller = WakeLockController<BrowserWakeLock>;

/// Reactive handle to the wake lock controller of the current component tree.
#[derive(Clone, Copy)]
pub struct WakeLock {
    state: ReadSignal<ControllerState>,
    controller: StoredValue<Controller, LocalStorage>,
    /// Whether the user last asked for the lock to be on.
    wanted: RwSignal<bool>,
}

/// Creates a wake lock controller which lives as long as the current reactive owner.
///
/// If `reacquire_on_visible` is set, the lock is requested again when the page becomes visible
/// after the browser released it for being hidden.
pub fn use_wake_lock(locale: Signal<Locale>, reacquire_on_visible: Signal<bool>) -> WakeLock {
    let controller = Controller::from_environment(
        BrowserWakeLock,
        &detect_environment(),
        locale.get_untracked(),
    );
    let (state, write_state) = signal(controller.state());
    controller.subscribe(move |new_state| write_state.set(new_state.clone()));

    let wake_lock = WakeLock {
        state,
        controller: StoredValue::new_local(controller),
        wanted: RwSignal::new(false),
    };

    Effect::new(move |_| {
        let locale = locale.get();
        wake_lock.controller.with_value(|controller| controller.set_locale(locale));
    });

    on_cleanup(move || {
        if let Some(controller) = wake_lock.controller.try_get_value() {
            spawn_local(controller.teardown());
        }
    });

    _ = use_event_listener(document(), visibilitychange, move |_| {
        if document().visibility_state() == VisibilityState::Visible
            && reacquire_on_visible.get_untracked()
            && wake_lock.wanted.get_untracked()
            && !wake_lock.state.get_untracked().is_active
        {
            debug!("Page visible again, requesting wake lock");
            spawn_local(async move {
                if let Err(e) = wake_lock.request().await {
                    warn!("Failed to request wake lock again: {e}");
                }
            });
        }
    });

    wake_lock
}

impl WakeLock {
    pub fn state(&self) -> ReadSignal<ControllerState> {
        self.state
    }

    fn controller(&self) -> Option<Controller> {
        self.controller.try_get_value()
    }

    pub async fn request(self) -> Result<(), WakeLockError> {
        let Some(controller) = self.controller() else {
            return Ok(());
        };
        let result = controller.request().await;
        if controller.is_active() {
            self.wanted.set(true);
        }
        result
    }

    pub async fn release(self) -> Result<(), WakeLockError> {
        let Some(controller) = self.controller() else {
            return Ok(());
        };
        self.wanted.set(false);
        controller.release().await
    }

    pub fn clear_error(self) {
        if let Some(controller) = self.controller() {
            controller.clear_error();
        }
    }
}
