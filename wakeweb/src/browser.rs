// Copyright 2026 The keepawake Authors.
// This project is dual-licensed under Apache 2.0 and MIT terms.
// See LICENSE-APACHE and LICENSE-MIT for details.

//! The browser's implementation of the Screen Wake Lock API.

use leptos::{prelude::*, task::spawn_local};
use log::warn;
use wakelock::{
    Environment, ErrorDescriptor, ReleaseCallback, Sentinel, WakeLockKind, WakeLockProvider,
};
use wasm_bindgen::{JsCast, JsValue, closure::Closure};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Navigator, WakeLockSentinel, WakeLockType, js_sys::Reflect};

/// Grants wake locks through `navigator.wakeLock`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserWakeLock;

impl WakeLockProvider for BrowserWakeLock {
    type Sentinel = BrowserSentinel;

    fn is_available(&self) -> bool {
        wake_lock_available(&window().navigator())
    }

    fn request(
        &self,
        kind: WakeLockKind,
    ) -> impl Future<Output = Result<BrowserSentinel, ErrorDescriptor>> {
        let promise = window()
            .navigator()
            .wake_lock()
            .request(wake_lock_type(kind));
        async move {
            Ok(BrowserSentinel(
                JsFuture::from(promise)
                    .await
                    .map_err(|e| error_descriptor(&e))?
                    .unchecked_into::<WakeLockSentinel>(),
            ))
        }
    }

    fn abandon(&self, sentinel: BrowserSentinel) {
        spawn_local(async move {
            if let Err(e) = sentinel.release().await {
                warn!("Failed to release abandoned wake lock: {e}");
            }
        });
    }
}

fn wake_lock_type(kind: WakeLockKind) -> WakeLockType {
    match kind {
        WakeLockKind::Screen => WakeLockType::Screen,
    }
}

/// A wake lock granted by the browser.
#[derive(Clone, Debug)]
pub struct BrowserSentinel(WakeLockSentinel);

impl Sentinel for BrowserSentinel {
    type Listener = Closure<dyn Fn()>;

    fn released(&self) -> bool {
        self.0.released()
    }

    fn release(&self) -> impl Future<Output = Result<(), ErrorDescriptor>> {
        let promise = self.0.release();
        async move {
            JsFuture::from(promise)
                .await
                .map(|_| ())
                .map_err(|e| error_descriptor(&e))
        }
    }

    fn add_release_listener(&self, callback: ReleaseCallback) -> Self::Listener {
        let listener = Closure::<dyn Fn()>::wrap(callback);
        if let Err(e) = self
            .0
            .add_event_listener_with_callback("release", listener.as_ref().unchecked_ref())
        {
            warn!("Failed to listen for wake lock release: {e:?}");
        }
        listener
    }

    fn remove_release_listener(&self, listener: Self::Listener) {
        if let Err(e) = self
            .0
            .remove_event_listener_with_callback("release", listener.as_ref().unchecked_ref())
        {
            warn!("Failed to stop listening for wake lock release: {e:?}");
        }
    }
}

/// Reads the flags which decide whether wake locks can be used on this page.
pub fn detect_environment() -> Environment {
    let window = window();
    let location = window.location();
    Environment {
        secure_context: window.is_secure_context(),
        protocol: location.protocol().unwrap_or_default(),
        hostname: location.hostname().unwrap_or_default(),
        wake_lock_available: wake_lock_available(&window.navigator()),
    }
}

/// Returns whether `navigator.wakeLock.request` exists and is a function.
fn wake_lock_available(navigator: &Navigator) -> bool {
    Reflect::get(navigator, &JsValue::from_str("wakeLock"))
        .ok()
        .filter(|wake_lock| wake_lock.is_object())
        .and_then(|wake_lock| Reflect::get(&wake_lock, &JsValue::from_str("request")).ok())
        .is_some_and(|request| request.is_function())
}

/// Converts a rejection from a wake lock promise, usually a `DOMException`.
pub fn error_descriptor(error: &JsValue) -> ErrorDescriptor {
    let field = |key: &str| {
        Reflect::get(error, &JsValue::from_str(key))
            .ok()
            .and_then(|value| value.as_string())
            .unwrap_or_default()
    };
    let name = field("name");
    if name.is_empty() {
        ErrorDescriptor::new(
            "Error",
            error.as_string().unwrap_or_else(|| format!("{error:?}")),
        )
    } else {
        ErrorDescriptor::new(name, field("message"))
    }
}
