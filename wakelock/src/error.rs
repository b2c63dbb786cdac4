// Copyright 2026 The keepawake Authors.
// This project is dual-licensed under Apache 2.0 and MIT terms.
// See LICENSE-APACHE and LICENSE-MIT for details.

//! Classification of wake lock errors into user-facing messages.

use crate::locale::Locale;
use std::fmt::{self, Display, Formatter};
use thiserror::Error;

/// An error reported by the platform, identified by its `DOMException` name.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ErrorDescriptor {
    pub name: String,
    pub message: String,
}

impl ErrorDescriptor {
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
        }
    }
}

impl Display for ErrorDescriptor {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        if self.message.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}: {}", self.name, self.message)
        }
    }
}

/// An error from requesting or releasing the wake lock.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum WakeLockError {
    #[error("Wake Lock API is not supported")]
    NotSupported,
    #[error("Wake Lock API is not available")]
    NotAvailable,
    #[error("{0}")]
    Platform(ErrorDescriptor),
}

impl WakeLockError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotSupported | Self::NotAvailable => ErrorKind::Unsupported,
            Self::Platform(descriptor) => ErrorKind::from_name(&descriptor.name),
        }
    }

    pub fn classify(&self, locale: Locale) -> Classification {
        match self {
            Self::NotSupported | Self::NotAvailable => {
                Classification::new(ErrorKind::Unsupported, None, locale)
            }
            Self::Platform(descriptor) => classify(descriptor, locale),
        }
    }
}

impl From<ErrorDescriptor> for WakeLockError {
    fn from(descriptor: ErrorDescriptor) -> Self {
        Self::Platform(descriptor)
    }
}

/// Categories of wake lock error.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ErrorKind {
    PermissionDenied,
    Aborted,
    Unsupported,
    SecurityRestricted,
    InvalidState,
    Network,
    Timeout,
    Unknown,
}

impl ErrorKind {
    /// Maps a `DOMException` name to the corresponding kind.
    pub fn from_name(name: &str) -> Self {
        match name {
            "NotAllowedError" => Self::PermissionDenied,
            "AbortError" => Self::Aborted,
            "NotSupportedError" => Self::Unsupported,
            "SecurityError" => Self::SecurityRestricted,
            "InvalidStateError" => Self::InvalidState,
            "NetworkError" => Self::Network,
            "TimeoutError" => Self::Timeout,
            _ => Self::Unknown,
        }
    }

    /// Returns whether trying again, possibly after some user action, might succeed.
    ///
    /// This is only a hint for the UI; nothing retries automatically.
    pub fn is_recoverable(self) -> bool {
        matches!(
            self,
            Self::PermissionDenied | Self::Aborted | Self::InvalidState | Self::Network | Self::Timeout
        )
    }

    /// Returns a short suggestion of what the user can do about the error.
    pub fn recovery_suggestion(self, locale: Locale) -> &'static str {
        match self {
            Self::PermissionDenied => locale.pick(
                "このタブをクリックしてアクティブにしてから、再度お試しください。",
                "Click on this tab to make it active, then try again.",
            ),
            Self::Aborted => locale.pick(
                "数秒待ってから再度お試しください。",
                "Wait a few seconds, then try again.",
            ),
            Self::SecurityRestricted => locale.pick(
                "HTTPSでアクセスしているか確認してください。",
                "Check that you are accessing the page over HTTPS.",
            ),
            Self::InvalidState => locale.pick(
                "ページを再読み込みしてから再度お試しください。",
                "Reload the page, then try again.",
            ),
            Self::Network => locale.pick(
                "インターネット接続を確認してから再度お試しください。",
                "Check your internet connection, then try again.",
            ),
            Self::Unsupported | Self::Timeout | Self::Unknown => locale.pick(
                "ページを再読み込みしてから再度お試しください。",
                "Reload the page, then try again.",
            ),
        }
    }

    fn message(self, locale: Locale) -> &'static str {
        match self {
            Self::PermissionDenied => locale.pick(
                "ウェイクロックの使用が許可されていません。ページがアクティブでない可能性があります。タブをクリックしてから再度お試しください。",
                "Keeping the screen awake was not allowed. The page may not be active. Click on the tab and try again.",
            ),
            Self::Aborted => locale.pick(
                "ウェイクロックの取得がキャンセルされました。しばらく待ってから再度お試しください。",
                "The wake lock request was cancelled. Please wait a moment and try again.",
            ),
            Self::Unsupported => locale.pick(
                "このデバイスまたはブラウザではウェイクロック機能がサポートされていません。Chrome、Edge、またはSafari（iOS 16.4以降）をご利用ください。",
                "Keeping the screen awake is not supported on this device or browser. Please use Chrome, Edge or Safari (iOS 16.4 or later).",
            ),
            Self::SecurityRestricted => locale.pick(
                "セキュリティ上の理由でウェイクロックを使用できません。HTTPSでアクセスしているか確認してください。",
                "The wake lock can't be used for security reasons. Check that you are accessing the page over HTTPS.",
            ),
            Self::InvalidState => locale.pick(
                "ウェイクロックが無効な状態です。ページを再読み込みしてから再度お試しください。",
                "The wake lock is in an invalid state. Please reload the page and try again.",
            ),
            Self::Network => locale.pick(
                "ネットワークエラーが発生しました。インターネット接続を確認してから再度お試しください。",
                "A network error occurred. Please check your internet connection and try again.",
            ),
            Self::Timeout => locale.pick(
                "ウェイクロックの取得がタイムアウトしました。しばらく待ってから再度お試しください。",
                "The wake lock request timed out. Please wait a moment and try again.",
            ),
            Self::Unknown => locale.pick(
                "ウェイクロックで予期しないエラーが発生しました。ページを再読み込みしてから再度お試しください。",
                "An unexpected wake lock error occurred. Please reload the page and try again.",
            ),
        }
    }
}

/// A user-facing description of an error.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Classification {
    pub kind: ErrorKind,
    pub message: String,
    pub recoverable: bool,
}

impl Classification {
    fn new(kind: ErrorKind, raw_message: Option<&str>, locale: Locale) -> Self {
        let message = match (kind, raw_message) {
            (ErrorKind::Unknown, Some(raw)) if !raw.is_empty() => match locale {
                Locale::Ja => format!(
                    "ウェイクロックでエラーが発生しました: {raw}。ページを再読み込みしてから再度お試しください。"
                ),
                Locale::En => format!(
                    "A wake lock error occurred: {raw}. Please reload the page and try again."
                ),
            },
            _ => kind.message(locale).to_owned(),
        };
        Self {
            kind,
            message,
            recoverable: kind.is_recoverable(),
        }
    }
}

/// Maps an error reported by the platform to a localized message and recoverability flag.
pub fn classify(error: &ErrorDescriptor, locale: Locale) -> Classification {
    Classification::new(
        ErrorKind::from_name(&error.name),
        Some(&error.message),
        locale,
    )
}
