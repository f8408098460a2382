// Copyright 2026 the Unveil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;

use kurbo::{Point, Rect};
use unveil_core::page::ripple::{
    HoverEffect, RIPPLE_CLASS, RIPPLE_LIFETIME, RIPPLE_STYLESHEET, Ripple,
};
use wasm_bindgen::JsCast as _;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement, MouseEvent};

use crate::after;
use crate::dom::{listen, select_all, set_style};

/// Injects the ripple stylesheet and adds a ripple to every `.btn` click.
pub fn install_ripples(document: &Document) -> Result<(), JsValue> {
    if let Some(head) = document.head() {
        let style = document.create_element("style")?;
        style.set_text_content(Some(RIPPLE_STYLESHEET));
        head.append_child(&style)?;
    }

    for button in select_all(document, ".btn")? {
        let (target, document) = (button.clone(), document.clone());
        listen(&target, "click", move |event| {
            let Some(click) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let bounds = button.get_bounding_client_rect();
            let rect = Rect::new(
                bounds.left(),
                bounds.top(),
                bounds.left() + bounds.width(),
                bounds.top() + bounds.height(),
            );
            let point = Point::new(f64::from(click.client_x()), f64::from(click.client_y()));
            let ripple = Ripple::from_click(rect, point);

            let Ok(span) = document.create_element("span") else {
                return;
            };
            let span: HtmlElement = span.unchecked_into();
            let circle = ripple.rect();
            set_style(&span, "width", &format!("{}px", circle.width()));
            set_style(&span, "height", &format!("{}px", circle.height()));
            set_style(&span, "left", &format!("{}px", circle.x0));
            set_style(&span, "top", &format!("{}px", circle.y0));
            let _ = span.class_list().add_1(RIPPLE_CLASS);
            if button.append_child(&span).is_ok() {
                after(RIPPLE_LIFETIME, move || span.remove());
            }
        })?;
    }
    Ok(())
}

/// Registers the pointer enter/leave styles of every [`HoverEffect`].
pub fn install_hover_effects(document: &Document) -> Result<(), JsValue> {
    for effect in HoverEffect::ALL {
        for element in select_all(document, &effect.selectors.join(", "))? {
            let target = element.clone();
            listen(&target, "mouseenter", move |_| {
                if let Some(transition) = effect.transition {
                    set_style(&element, "transition", transition);
                }
                if let Some(transform) = effect.enter {
                    set_style(&element, "transform", transform);
                }
            })?;
            if let Some(transform) = effect.leave {
                let element = target.clone();
                listen(&target, "mouseleave", move |_| {
                    set_style(&element, "transform", transform);
                })?;
            }
        }
    }
    Ok(())
}
