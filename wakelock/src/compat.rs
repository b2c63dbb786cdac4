// Copyright 2026 The keepawake Authors.
// This project is dual-licensed under Apache 2.0 and MIT terms.
// See LICENSE-APACHE and LICENSE-MIT for details.

//! Checks whether the host environment can grant a screen wake lock.

use crate::locale::Locale;

/// Snapshot of the environment flags which decide whether wake locks can be used.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Environment {
    /// The host's own secure context flag (`window.isSecureContext`).
    pub secure_context: bool,
    /// The scheme of the page, including the trailing colon, e.g. `"https:"`.
    pub protocol: String,
    /// The host name of the page.
    pub hostname: String,
    /// Whether `navigator.wakeLock.request` exists and is callable.
    pub wake_lock_available: bool,
}

/// The result of checking compatibility.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CompatibilityResult {
    pub is_supported: bool,
    /// Why wake locks can't be used, if they can't.
    pub error_message: Option<String>,
}

impl CompatibilityResult {
    pub fn supported() -> Self {
        Self {
            is_supported: true,
            error_message: None,
        }
    }

    pub fn unsupported(error_message: impl Into<String>) -> Self {
        Self {
            is_supported: false,
            error_message: Some(error_message.into()),
        }
    }
}

/// Returns whether the environment exposes the wake lock request capability.
pub fn is_supported(env: &Environment) -> bool {
    env.wake_lock_available
}

/// Returns whether the environment counts as a secure context.
///
/// Browsers don't agree on which of these signals they set, so any one of them is enough.
pub fn is_secure_context(env: &Environment) -> bool {
    env.secure_context || env.protocol == "https:" || env.hostname == "localhost"
}

/// Checks for browser support only, ignoring the security context.
pub fn compatibility_info(env: &Environment, locale: Locale) -> CompatibilityResult {
    if is_supported(env) {
        CompatibilityResult::supported()
    } else {
        CompatibilityResult::unsupported(unsupported_message(locale))
    }
}

/// Checks both the security context and browser support.
///
/// An insecure context is reported in preference to missing browser support.
pub fn perform_compatibility_check(env: &Environment, locale: Locale) -> CompatibilityResult {
    if !is_secure_context(env) {
        return CompatibilityResult::unsupported(https_required_message(locale));
    }
    compatibility_info(env, locale)
}

/// The message shown when the browser doesn't implement the Screen Wake Lock API.
pub fn unsupported_message(locale: Locale) -> &'static str {
    locale.pick(
        "このブラウザはScreen Wake Lock APIをサポートしていません。Chrome、Edge、またはSafari（iOS 16.4以降）をご利用ください。",
        "This browser does not support the Screen Wake Lock API. Please use Chrome, Edge or Safari (iOS 16.4 or later).",
    )
}

/// The message shown when the page wasn't loaded over HTTPS.
pub fn https_required_message(locale: Locale) -> &'static str {
    locale.pick(
        "ウェイクロック機能はHTTPS接続でのみ利用できます。",
        "Keeping the screen awake is only available over HTTPS.",
    )
}
