//! WASM bindings for browser-side rendering.
//!
//! This module exposes the transformer and the connection rating to
//! JavaScript via wasm-bindgen.

use wasm_bindgen::prelude::*;

use crate::netinfo::{ConnectionInfo, EffectiveType};

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "wasm")]
    console_error_panic_hook::set_once();
}

/// Convert message text to HTML.
///
/// Takes raw text and returns markup ready for `innerHTML`.
#[wasm_bindgen]
pub fn linkify(text: &str) -> String {
    crate::markup::transform(text)
}

/// Rate a connection from `navigator.onLine` and `navigator.connection`.
///
/// Pass `undefined` for `effective_type` and `rtt` when
/// `navigator.connection` is missing. Returns the status string
/// (`offline`, `online`, `excellent`, `good`, `poor` or `slow`).
#[wasm_bindgen]
pub fn connection_quality(online: bool, effective_type: Option<String>, rtt: Option<u32>) -> String {
    let info = ConnectionInfo {
        online,
        effective_type: effective_type.map(EffectiveType::from),
        rtt_ms: rtt,
        ..ConnectionInfo::default()
    };
    info.quality(info.has_network_details()).status().to_string()
}
