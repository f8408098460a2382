// Copyright 2026 the Unveil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web demo: a static page wired up by `unveil_web`.
//!
//! Installs every page behavior (theme toggle, mobile navigation, scroll
//! progress, hero parallax, ripples, hover effects, plant bob, contact form)
//! and mounts the card and section reveal presets on `demos/site/index.html`.
//!
//! Build with: `wasm-pack build --target web demos/site`
//!
//! Then serve `demos/site/` and open `index.html` in a browser.

// This crate only runs in the browser; suppress dead-code warnings when
// cargo-checking on a native host target.
#![no_std]
#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "this crate only runs in the browser")
)]

use wasm_bindgen::prelude::*;

use unveil_web::page::install_all;

/// Entry point, called automatically by `wasm_bindgen(start)`.
#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    let window = web_sys::window().expect("no global window");
    let document = window.document().expect("no document");

    let reveals = install_all(&window, &document)?;

    // The reveals must outlive this function; the page never tears them down.
    core::mem::forget(reveals);
    Ok(())
}
