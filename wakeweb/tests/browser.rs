// Copyright 2026 The keepawake Authors.
// This project is dual-licensed under Apache 2.0 and MIT terms.
// See LICENSE-APACHE and LICENSE-MIT for details.

#![cfg(target_arch = "wasm32")]

use wakelock::{
    ErrorKind, Locale, WakeLockError,
    compat::{is_secure_context, is_supported},
    perform_compatibility_check,
};
use wakeweb::browser::{detect_environment, error_descriptor};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::js_sys::{Object, Reflect};

wasm_bindgen_test_configure!(run_in_browser);

fn exception(name: &str, message: &str) -> JsValue {
    let object = Object::new();
    Reflect::set(&object, &"name".into(), &name.into()).unwrap();
    Reflect::set(&object, &"message".into(), &message.into()).unwrap();
    object.into()
}

#[wasm_bindgen_test]
fn rejection_keeps_name_and_message() {
    let descriptor = error_descriptor(&exception("NotAllowedError", "Denied by user agent"));
    assert_eq!(descriptor.name, "NotAllowedError");
    assert_eq!(descriptor.message, "Denied by user agent");
    assert_eq!(
        WakeLockError::from(descriptor).kind(),
        ErrorKind::PermissionDenied
    );
}

#[wasm_bindgen_test]
fn string_rejection_becomes_generic_error() {
    let descriptor = error_descriptor(&JsValue::from_str("boom"));
    assert_eq!(descriptor.name, "Error");
    assert_eq!(descriptor.message, "boom");
}

#[wasm_bindgen_test]
fn compatibility_follows_detected_environment() {
    let env = detect_environment();
    let result = perform_compatibility_check(&env, Locale::En);
    assert_eq!(
        result.is_supported,
        is_supported(&env) && is_secure_context(&env)
    );
    assert_eq!(result.is_supported, result.error_message.is_none());
}
