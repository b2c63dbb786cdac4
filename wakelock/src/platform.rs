// Copyright 2026 The keepawake Authors.
// This project is dual-licensed under Apache 2.0 and MIT terms.
// See LICENSE-APACHE and LICENSE-MIT for details.

//! The operations the controller needs from the platform's wake lock implementation.

use crate::error::ErrorDescriptor;
use std::fmt::{self, Display, Formatter};

/// The kind of wake lock to request. Browsers only support one.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum WakeLockKind {
    #[default]
    Screen,
}

impl Display for WakeLockKind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::Screen => f.write_str("screen"),
        }
    }
}

/// Callback invoked when the platform releases a wake lock.
pub type ReleaseCallback = Box<dyn Fn()>;

/// Something which can grant wake locks, such as `navigator.wakeLock`.
pub trait WakeLockProvider {
    type Sentinel: Sentinel;

    /// Returns whether the request capability is currently present.
    fn is_available(&self) -> bool;

    /// Asks the platform for a wake lock of the given kind.
    fn request(
        &self,
        kind: WakeLockKind,
    ) -> impl Future<Output = Result<Self::Sentinel, ErrorDescriptor>>;

    /// Takes a live lock held by a controller which was dropped without being torn down.
    ///
    /// The controller can't wait for a release itself at that point. By default the lock is left
    /// for the platform to release when the page goes away.
    fn abandon(&self, sentinel: Self::Sentinel) {
        let _ = sentinel;
    }
}

/// A handle to a granted wake lock, which the platform may revoke at any time.
///
/// Clones refer to the same underlying lock.
pub trait Sentinel: Clone {
    /// A registered release listener, needed to remove it again.
    type Listener;

    /// Returns whether the lock has already been released, by us or by the platform.
    fn released(&self) -> bool;

    /// Releases the lock.
    fn release(&self) -> impl Future<Output = Result<(), ErrorDescriptor>>;

    /// Registers a callback to be invoked when the lock is released.
    fn add_release_listener(&self, callback: ReleaseCallback) -> Self::Listener;

    /// Removes a callback previously registered with `add_release_listener`.
    fn remove_release_listener(&self, listener: Self::Listener);
}
