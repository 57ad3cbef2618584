//! Page interaction controller for the Webmaster site.
//!
//! Compiled to WebAssembly and loaded by the static pages. On module start
//! it resolves the document and binds each behavior to its target elements;
//! a behavior whose target is absent is silently skipped. The behaviors are
//! independent and share no state.

mod behaviors;
mod payload;

use wasm_bindgen::prelude::*;

pub use behaviors::{bind_page, PageBindings};

/// Module entry point: bind every behavior for the lifetime of the page.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        // Not a browser context
        return Ok(());
    };

    let bindings = bind_page(&document)?;
    // Page-lifetime bindings: keep the listeners alive
    bindings.forget();
    Ok(())
}
