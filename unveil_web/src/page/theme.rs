// Copyright 2026 the Unveil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use unveil_core::page::theme::{THEME_FADE, ThemeController, theme_fade_css};
use wasm_bindgen::prelude::*;
use web_sys::Document;

use crate::dom::{listen, select, set_style};
use crate::{LocalStorageThemeStore, after};

/// Applies the stored theme to `<html data-theme>` and wires `.theme-toggle`.
pub fn install_theme(document: &Document) -> Result<(), JsValue> {
    let Some(root) = document.document_element() else {
        return Ok(());
    };
    let mut store = LocalStorageThemeStore::open();
    let mut theme = ThemeController::load(&store);
    root.set_attribute("data-theme", theme.current().as_str())?;

    let Some(toggle) = select(document, ".theme-toggle")? else {
        return Ok(());
    };
    toggle.set_text_content(Some(theme.current().icon()));

    let body = document.body();
    let button = toggle.clone();
    listen(&toggle, "click", move |_| {
        let next = theme.toggle(&mut store);
        let _ = root.set_attribute("data-theme", next.as_str());
        button.set_text_content(Some(next.icon()));

        if let Some(body) = &body {
            set_style(body, "transition", &theme_fade_css());
            let body = body.clone();
            after(THEME_FADE.duration, move || set_style(&body, "transition", ""));
        }
    })
}
