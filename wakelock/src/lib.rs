// Copyright 2026 The keepawake Authors.
// This project is dual-licensed under Apache 2.0 and MIT terms.
// See LICENSE-APACHE and LICENSE-MIT for details.

//! Keeps track of a screen wake lock on behalf of a UI.
//!
//! The platform is abstracted behind [`WakeLockProvider`] and [`Sentinel`], so the
//! [`WakeLockController`] can be driven by a browser, or by a fake in tests.

pub mod compat;
pub mod controller;
pub mod error;
pub mod locale;
pub mod platform;
pub mod store;

pub use crate::{
    compat::{CompatibilityResult, Environment, perform_compatibility_check},
    controller::{ControllerState, WakeLockController},
    error::{Classification, ErrorDescriptor, ErrorKind, WakeLockError, classify},
    locale::Locale,
    platform::{ReleaseCallback, Sentinel, WakeLockKind, WakeLockProvider},
    store::{Store, SubscriptionId},
};
