// Copyright 2026 the Unveil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM wiring for the page behaviors in [`unveil_core::page`].
//!
//! Every installer looks its elements up once and registers page-lived
//! listeners. A missing element disables that behavior only.

mod effects;
mod form;
mod nav;
mod plants;
mod scroll;
mod theme;

pub use effects::{install_hover_effects, install_ripples};
pub use form::install_contact_form;
pub use nav::{install_anchor_scroll, install_navigation, install_page_transitions};
pub use plants::install_plants;
pub use scroll::{install_load_fade, install_parallax, install_scroll_progress};
pub use theme::install_theme;

use alloc::vec::Vec;

use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

use crate::reveal::{MountedReveal, mount_all};

/// Installs every page behavior and mounts both reveal presets.
///
/// The returned reveals must be kept alive.
pub fn install_all(window: &Window, document: &Document) -> Result<Vec<MountedReveal>, JsValue> {
    install_theme(document)?;
    install_navigation(window, document)?;
    install_contact_form(document)?;
    install_anchor_scroll(document)?;
    let reveals = mount_all(document)?;
    install_parallax(window, document)?;
    install_hover_effects(document)?;
    install_ripples(document)?;
    install_load_fade(window, document)?;
    install_scroll_progress(window, document)?;
    install_plants(document)?;
    install_page_transitions(window, document)?;
    Ok(reveals)
}
