// Copyright 2026 The keepawake Authors.
// This project is dual-licensed under Apache 2.0 and MIT terms.
// See LICENSE-APACHE and LICENSE-MIT for details.

//! Lifecycle of the single screen wake lock held on behalf of a UI.

use crate::{
    compat::{CompatibilityResult, Environment, perform_compatibility_check},
    error::{ErrorKind, WakeLockError},
    locale::Locale,
    platform::{ReleaseCallback, Sentinel, WakeLockKind, WakeLockProvider},
    store::{Store, SubscriptionId},
};
use futures::future::{FutureExt, LocalBoxFuture};
use log::{debug, info, warn};
use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

/// The observable state of a [`WakeLockController`].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ControllerState {
    /// Whether the controller currently holds a wake lock.
    pub is_active: bool,
    pub is_supported: bool,
    /// Localized description of the last failure, if it hasn't been cleared.
    pub error: Option<String>,
    pub error_kind: Option<ErrorKind>,
    /// Whether a request or release is in progress.
    pub is_loading: bool,
}

impl ControllerState {
    /// Returns whether the current error is one that trying again might fix.
    pub fn is_recoverable_error(&self) -> bool {
        self.error_kind.is_some_and(ErrorKind::is_recoverable)
    }
}

/// Requests and releases a screen wake lock, keeping observable state in step with it.
///
/// All operations are meant to run on a single thread. While a request or release is in progress
/// any further request or release is ignored rather than queued.
pub struct WakeLockController<P: WakeLockProvider> {
    inner: Rc<Inner<P>>,
}

impl<P: WakeLockProvider> Clone for WakeLockController<P> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

struct Inner<P: WakeLockProvider> {
    provider: P,
    locale: Cell<Locale>,
    held: RefCell<Option<Held<P::Sentinel>>>,
    state: Store<ControllerState>,
    torn_down: Cell<bool>,
}

/// A wake lock along with the listener registered on it.
struct Held<S: Sentinel> {
    sentinel: S,
    listener: S::Listener,
}

impl<S: Sentinel> Held<S> {
    /// Removes the release listener and returns the bare sentinel.
    fn detach(self) -> S {
        self.sentinel.remove_release_listener(self.listener);
        self.sentinel
    }
}

impl<P: WakeLockProvider + 'static> WakeLockController<P> {
    /// Creates a controller which will use the given provider, given the result of a
    /// compatibility check.
    pub fn new(provider: P, compatibility: CompatibilityResult, locale: Locale) -> Self {
        let mut state = ControllerState {
            is_supported: compatibility.is_supported,
            ..Default::default()
        };
        if !compatibility.is_supported
            && let Some(message) = compatibility.error_message
        {
            state.error = Some(message);
            state.error_kind = Some(ErrorKind::Unsupported);
        }

        Self {
            inner: Rc::new(Inner {
                provider,
                locale: Cell::new(locale),
                held: RefCell::new(None),
                state: Store::new(state),
                torn_down: Cell::new(false),
            }),
        }
    }

    /// Creates a controller after checking the given environment for compatibility.
    pub fn from_environment(provider: P, env: &Environment, locale: Locale) -> Self {
        Self::new(provider, perform_compatibility_check(env, locale), locale)
    }

    pub fn locale(&self) -> Locale {
        self.inner.locale.get()
    }

    /// Changes the language of future error messages.
    pub fn set_locale(&self, locale: Locale) {
        self.inner.locale.set(locale);
    }

    /// Returns a snapshot of the current state.
    pub fn state(&self) -> ControllerState {
        self.inner.state.get()
    }

    pub fn is_active(&self) -> bool {
        self.inner.state.with(|state| state.is_active)
    }

    pub fn is_loading(&self) -> bool {
        self.inner.state.with(|state| state.is_loading)
    }

    /// Registers a function to be called with the new state after every change.
    pub fn subscribe(&self, observer: impl Fn(&ControllerState) + 'static) -> SubscriptionId {
        self.inner.state.subscribe(observer)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.inner.state.unsubscribe(id)
    }

    /// Requests the screen wake lock.
    ///
    /// Does nothing if another operation is in progress or a live lock is already held. On
    /// failure the error is recorded in the state as well as returned.
    pub async fn request(&self) -> Result<(), WakeLockError> {
        if self.is_loading() {
            debug!("Ignoring wake lock request while another operation is in progress");
            return Ok(());
        }
        if self.is_active() && self.inner.live_sentinel().is_some() {
            return Ok(());
        }
        let Some(_loading) = LoadingGuard::start(&self.inner.state) else {
            return Ok(());
        };
        self.inner.clear_error();

        if let Err(e) = self.acquire().await {
            warn!("Failed to acquire wake lock: {e}");
            self.inner.recover().await;
            self.inner.finish(Some(&e));
            return Err(e);
        }
        Ok(())
    }

    async fn acquire(&self) -> Result<(), WakeLockError> {
        if !self.inner.state.with(|state| state.is_supported) {
            return Err(WakeLockError::NotSupported);
        }
        if !self.inner.provider.is_available() {
            return Err(WakeLockError::NotAvailable);
        }

        let sentinel = self.inner.provider.request(WakeLockKind::Screen).await?;

        if self.inner.torn_down.get() {
            debug!("Controller was torn down while requesting, releasing new wake lock");
            if let Err(e) = sentinel.release().await {
                debug!("Ignoring error releasing wake lock after teardown: {e}");
            }
            return Ok(());
        }
        if sentinel.released() {
            // Its release event has already fired, so a listener would never run.
            info!("Wake lock was released before it could be used");
            self.inner.finish(None);
            return Ok(());
        }

        let listener = sentinel.add_release_listener(self.release_callback());
        if let Some(previous) = self.inner.held.replace(Some(Held { sentinel, listener })) {
            // The platform released it but we haven't heard about it yet.
            previous.detach();
        }
        self.inner.state.update(|state| state.is_active = true);
        info!("Acquired {} wake lock", WakeLockKind::Screen);
        Ok(())
    }

    /// Returns the callback to run when the platform releases the lock by itself, e.g. because
    /// the page was hidden.
    fn release_callback(&self) -> ReleaseCallback {
        let inner = Rc::downgrade(&self.inner);
        Box::new(move || {
            if let Some(inner) = inner.upgrade() {
                info!("Wake lock was released");
                inner.finish(None);
            }
        })
    }

    /// Releases the wake lock, if one is held.
    ///
    /// Does nothing if another operation is in progress. If releasing fails the error is recorded
    /// and returned, but the lock is forgotten anyway.
    pub async fn release(&self) -> Result<(), WakeLockError> {
        let Some(_loading) = LoadingGuard::start(&self.inner.state) else {
            debug!("Ignoring wake lock release while another operation is in progress");
            return Ok(());
        };
        self.inner.clear_error();

        let result = match self.inner.live_sentinel() {
            Some(sentinel) => sentinel.release().await.map_err(WakeLockError::from),
            None => Ok(()),
        };
        match &result {
            Ok(()) => debug!("Released wake lock"),
            Err(e) => warn!("Failed to release wake lock: {e}"),
        }
        self.inner.finish(result.as_ref().err());
        result
    }

    /// Releases the wake lock if it is active, or requests it otherwise.
    pub async fn toggle(&self) -> Result<(), WakeLockError> {
        if self.is_active() {
            self.release().await
        } else {
            self.request().await
        }
    }

    pub fn clear_error(&self) {
        self.inner.clear_error();
    }

    /// Forgets any held wake lock and all subscribers, and returns a future which releases the
    /// lock.
    ///
    /// Errors releasing the lock are ignored. A request which is still in progress releases its
    /// lock as soon as it is granted.
    pub fn teardown(&self) -> LocalBoxFuture<'static, ()> {
        self.inner.torn_down.set(true);
        let sentinel = self.inner.held.take().map(Held::detach);
        self.inner.state.update(|state| state.is_active = false);
        self.inner.state.clear_subscribers();

        async move {
            let Some(sentinel) = sentinel.filter(|sentinel| !sentinel.released()) else {
                return;
            };
            match sentinel.release().await {
                Ok(()) => debug!("Released wake lock on teardown"),
                Err(e) => debug!("Ignoring error releasing wake lock on teardown: {e}"),
            }
        }
        .boxed_local()
    }
}

impl<P: WakeLockProvider> Inner<P> {
    /// Returns the held sentinel, unless the platform has already released it.
    fn live_sentinel(&self) -> Option<P::Sentinel> {
        self.held
            .borrow()
            .as_ref()
            .filter(|held| !held.sentinel.released())
            .map(|held| held.sentinel.clone())
    }

    fn clear_error(&self) {
        self.state.update(|state| {
            state.error = None;
            state.error_kind = None;
        });
    }

    /// Tries to release a lock which might have been left over from a failed operation.
    async fn recover(&self) {
        if let Some(sentinel) = self.live_sentinel()
            && let Err(e) = sentinel.release().await
        {
            debug!("Ignoring error releasing wake lock during recovery: {e}");
        }
    }

    /// Forgets the held sentinel and marks the lock inactive, recording the given error if any.
    fn finish(&self, error: Option<&WakeLockError>) {
        let held = self.held.take();
        let had_sentinel = held.is_some();
        if let Some(held) = held {
            held.detach();
        }

        let classification = error.map(|e| e.classify(self.locale.get()));
        if !had_sentinel && classification.is_none() && !self.state.with(|state| state.is_active) {
            return;
        }
        self.state.update(|state| {
            state.is_active = false;
            if let Some(classification) = classification {
                state.error = Some(classification.message);
                state.error_kind = Some(classification.kind);
            }
        });
    }
}

impl<P: WakeLockProvider> Drop for Inner<P> {
    fn drop(&mut self) {
        if let Some(held) = self.held.take() {
            let sentinel = held.detach();
            if !sentinel.released() {
                warn!("Wake lock controller dropped without being torn down");
                self.provider.abandon(sentinel);
            }
        }
    }
}

/// Marks the state as loading for as long as it is alive.
struct LoadingGuard<'a> {
    state: &'a Store<ControllerState>,
}

impl<'a> LoadingGuard<'a> {
    /// Sets the loading flag, or returns `None` if it was already set.
    fn start(state: &'a Store<ControllerState>) -> Option<Self> {
        if state.with(|state| state.is_loading) {
            return None;
        }
        state.update(|state| state.is_loading = true);
        Some(Self { state })
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.state.update(|state| state.is_loading = false);
    }
}
