// Copyright 2026 the Unveil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::RefCell;

use unveil_core::page::nav::{
    HamburgerStyle, MobileMenu, NavbarElevation, PAGE_FADE, anchor_target, fades_on_navigate,
    is_active_link,
};
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, Window,
};

use crate::after;
use crate::dom::{html_elements, listen, select, select_all, set_style};

struct MenuView {
    menu: Option<HtmlElement>,
    bars: Vec<HtmlElement>,
}

impl MenuView {
    fn render(&self, open: bool, style: HamburgerStyle) {
        if let Some(menu) = &self.menu {
            let _ = menu.class_list().toggle_with_force("active", open);
        }
        if let Some(top) = self.bars.first() {
            set_style(top, "transform", style.top_transform);
        }
        if let Some(middle) = self.bars.get(1) {
            set_style(middle, "opacity", style.middle_opacity);
        }
        if let Some(bottom) = self.bars.get(2) {
            set_style(bottom, "transform", style.bottom_transform);
        }
    }
}

fn viewport_width(window: &Window) -> Option<f64> {
    window.inner_width().ok()?.as_f64()
}

/// Wires the mobile menu, active link marking, and navbar elevation.
pub fn install_navigation(window: &Window, document: &Document) -> Result<(), JsValue> {
    let toggle = select(document, ".nav-toggle")?;
    let bars = match &toggle {
        Some(toggle) => html_elements(&toggle.query_selector_all("span")?),
        None => Vec::new(),
    };
    let view = Rc::new(MenuView {
        menu: select(document, ".nav-menu")?,
        bars,
    });
    let menu = Rc::new(RefCell::new(MobileMenu::default()));

    if let Some(toggle) = &toggle {
        let (menu, view) = (Rc::clone(&menu), Rc::clone(&view));
        listen(toggle, "click", move |_| {
            let mut menu = menu.borrow_mut();
            let style = menu.toggle();
            view.render(menu.is_open(), style);
        })?;
    }

    let pathname = window.location().pathname().unwrap_or_default();
    for link in select_all(document, ".nav-link")? {
        let active = link
            .get_attribute("href")
            .is_some_and(|href| is_active_link(&pathname, &href));
        let _ = link.class_list().toggle_with_force("active", active);

        let (menu, view, window) = (Rc::clone(&menu), Rc::clone(&view), window.clone());
        listen(&link, "click", move |_| {
            let closed = viewport_width(&window).and_then(|w| menu.borrow_mut().on_link_click(w));
            if let Some(style) = closed {
                view.render(false, style);
            }
        })?;
    }

    {
        let target = window.clone();
        let window = window.clone();
        listen(&target, "resize", move |_| {
            let closed = viewport_width(&window).and_then(|w| menu.borrow_mut().on_resize(w));
            if let Some(style) = closed {
                view.render(false, style);
            }
        })?;
    }

    if let Some(navbar) = select(document, ".navbar")? {
        let target = window.clone();
        let window = window.clone();
        listen(&target, "scroll", move |_| {
            let elevation = NavbarElevation::for_scroll(window.scroll_y().unwrap_or(0.0));
            set_style(&navbar, "box-shadow", elevation.box_shadow);
            set_style(&navbar, "backdrop-filter", elevation.backdrop_filter);
        })?;
    }
    Ok(())
}

/// Smooth-scrolls in-page `#anchor` links to their target.
pub fn install_anchor_scroll(document: &Document) -> Result<(), JsValue> {
    for anchor in select_all(document, "a[href^=\"#\"]")? {
        let link = anchor.clone();
        let document = document.clone();
        listen(&anchor, "click", move |event| {
            event.prevent_default();
            let href = link.get_attribute("href").unwrap_or_default();
            let target =
                anchor_target(&href).and_then(|sel| document.query_selector(sel).ok().flatten());
            if let Some(target) = target {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                options.set_block(ScrollLogicalPosition::Start);
                target.scroll_into_view_with_scroll_into_view_options(&options);
            }
        })?;
    }
    Ok(())
}

/// Fades the body out before following links to other pages.
pub fn install_page_transitions(window: &Window, document: &Document) -> Result<(), JsValue> {
    let Some(body) = document.body() else {
        return Ok(());
    };
    for link in select_all(document, "a[href$=\".html\"]")? {
        let (element, body, window) = (link.clone(), body.clone(), window.clone());
        listen(&link, "click", move |event| {
            let href: String = element.get_attribute("href").unwrap_or_default();
            if !fades_on_navigate(&href) {
                return;
            }
            event.prevent_default();
            set_style(&body, "opacity", "0");
            set_style(&body, "transition", &PAGE_FADE.property_css("opacity"));
            let location = window.location();
            after(PAGE_FADE.duration, move || {
                let _ = location.set_href(&href);
            });
        })?;
    }
    Ok(())
}
