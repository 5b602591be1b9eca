//! Reactive-runtime helpers for the state tests

use leptos::*;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;

use crate::api::GlooBackend;

/// Run `f` under a fresh owner with a backend in context. Dropping the
/// disposer runs the owner's cleanups, as an unmount would.
pub fn in_owner<T: 'static>(f: impl Fn() -> T + 'static) -> (T, Disposer) {
    as_child_of_current_owner(move |_: ()| {
        provide_context(GlooBackend::new("http://127.0.0.1:9/api"));
        f()
    })(())
}

/// Let tasks queued with `spawn_local` run
pub async fn tick() {
    for _ in 0..3 {
        let _ = JsFuture::from(js_sys::Promise::resolve(&JsValue::NULL)).await;
    }
}
