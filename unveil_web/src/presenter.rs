// Copyright 2026 the Unveil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inline style writes for reveal transitions.

use alloc::format;

use unveil_core::backend::StylePresenter;
use unveil_core::reveal::StyleChange;
use web_sys::HtmlElement;

use crate::dom::set_style;

/// Writes `opacity`, `transform`, and `transition` on `element.style`.
///
/// No other property and no attribute is touched. Values the browser rejects
/// are ignored.
#[derive(Clone, Copy, Debug, Default)]
pub struct InlineStylePresenter;

impl StylePresenter<HtmlElement> for InlineStylePresenter {
    fn apply(&mut self, element: &HtmlElement, change: &StyleChange<'_>) {
        set_style(element, "opacity", &format!("{}", change.opacity()));
        set_style(element, "transform", &change.transform().to_css());
        if let Some(transition) = change.transition() {
            set_style(element, "transition", &transition.to_css());
        }
    }
}
