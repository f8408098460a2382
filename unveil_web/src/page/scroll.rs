// Copyright 2026 the Unveil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;

use unveil_core::page::scroll::{
    LOAD_FADE, LOAD_FADE_DELAY, PROGRESS_BAR_CSS, hero_parallax, scroll_progress,
};
use wasm_bindgen::JsCast as _;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement, Window};

use crate::after;
use crate::dom::{listen, select, set_style};

/// Appends a fixed progress bar to `<body>` and tracks the scroll position.
pub fn install_scroll_progress(window: &Window, document: &Document) -> Result<(), JsValue> {
    let (Some(body), Some(root)) = (document.body(), document.document_element()) else {
        return Ok(());
    };
    let bar: HtmlElement = document.create_element("div")?.unchecked_into();
    bar.style().set_css_text(PROGRESS_BAR_CSS);
    body.append_child(&bar)?;

    let target = window.clone();
    let window = window.clone();
    listen(&target, "scroll", move |_| {
        let percent = scroll_progress(
            window.scroll_y().unwrap_or(0.0),
            f64::from(root.scroll_height()),
            f64::from(root.client_height()),
        );
        set_style(&bar, "width", &format!("{percent}%"));
    })
}

/// Moves `.hero-image` at a fraction of the scroll speed while `.hero` is on screen.
pub fn install_parallax(window: &Window, document: &Document) -> Result<(), JsValue> {
    let (Some(hero), Some(image)) = (select(document, ".hero")?, select(document, ".hero-image")?)
    else {
        return Ok(());
    };
    let target = window.clone();
    let window = window.clone();
    listen(&target, "scroll", move |_| {
        let scrolled = window.scroll_y().unwrap_or(0.0);
        if let Some(offset) = hero_parallax(scrolled, f64::from(hero.offset_height())) {
            set_style(&image, "transform", &format!("translateY({offset}px)"));
        }
    })
}

/// Fades the body in shortly after `load`.
pub fn install_load_fade(window: &Window, document: &Document) -> Result<(), JsValue> {
    let Some(body) = document.body() else {
        return Ok(());
    };
    listen(window, "load", move |_| {
        set_style(&body, "opacity", "0");
        let body = body.clone();
        after(LOAD_FADE_DELAY, move || {
            set_style(&body, "transition", &LOAD_FADE.property_css("opacity"));
            set_style(&body, "opacity", "1");
        });
    })
}
