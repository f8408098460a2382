// Copyright 2026 the Unveil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Theme persistence in `localStorage`.

use alloc::string::String;

use unveil_core::page::theme::{THEME_KEY, ThemeStore};
use web_sys::Storage;

/// [`ThemeStore`] over `window.localStorage`.
///
/// Storage may be missing (privacy modes, sandboxed frames); reads then
/// return `None` and writes are dropped.
#[derive(Clone, Debug)]
pub struct LocalStorageThemeStore {
    storage: Option<Storage>,
}

impl LocalStorageThemeStore {
    /// Opens the window's local storage, if the host provides one.
    #[must_use]
    pub fn open() -> Self {
        Self {
            storage: web_sys::window().and_then(|w| w.local_storage().ok().flatten()),
        }
    }
}

impl ThemeStore for LocalStorageThemeStore {
    fn load(&self) -> Option<String> {
        self.storage.as_ref()?.get_item(THEME_KEY).ok().flatten()
    }

    fn save(&mut self, value: &str) {
        if let Some(storage) = &self.storage {
            let _ = storage.set_item(THEME_KEY, value);
        }
    }
}
