// Copyright 2026 the Unveil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use unveil_core::page::form::{
    Field, FormInput, MESSAGE_FADE, MESSAGE_FADE_IN, MESSAGE_FADE_OUT, MESSAGE_VISIBLE,
    MessageKind, SEND_DELAY, SENDING_LABEL, SUCCESS_MESSAGE,
};
use wasm_bindgen::JsCast as _;
use wasm_bindgen::prelude::*;
use web_sys::{Document, FormData, HtmlButtonElement, HtmlElement, HtmlFormElement};

use crate::after;
use crate::dom::{listen, set_style};

fn show_message(target: &HtmlElement, text: &str, kind: MessageKind) {
    target.set_text_content(Some(text));
    target.set_class_name(kind.class_name());
    set_style(target, "display", "block");
    set_style(target, "animation", MESSAGE_FADE_IN);

    let target = target.clone();
    after(MESSAGE_VISIBLE, move || {
        set_style(&target, "animation", MESSAGE_FADE_OUT);
        after(MESSAGE_FADE, move || set_style(&target, "display", "none"));
    });
}

/// Validates `#contactForm` on submit and simulates sending it.
pub fn install_contact_form(document: &Document) -> Result<(), JsValue> {
    let Some(form) = document
        .get_element_by_id("contactForm")
        .and_then(|el| el.dyn_into::<HtmlFormElement>().ok())
    else {
        return Ok(());
    };
    let message = document
        .get_element_by_id("formMessage")
        .and_then(|el| el.dyn_into::<HtmlElement>().ok());

    let target = form.clone();
    listen(&target, "submit", move |event| {
        event.prevent_default();
        let Ok(data) = FormData::new_with_form(&form) else {
            return;
        };
        let values: [Option<String>; 4] =
            Field::ALL.map(|field| data.get(field.as_str()).as_string());
        let [name, email, subject, body] = &values;
        let input = FormInput {
            name: name.as_deref(),
            email: email.as_deref(),
            subject: subject.as_deref(),
            message: body.as_deref(),
        };

        if let Err(err) = input.validate() {
            if let Some(message) = &message {
                show_message(message, err.message(), MessageKind::Error);
            }
            return;
        }

        let button = form
            .query_selector("button[type=\"submit\"]")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok());
        let label = button.as_ref().and_then(|b| b.text_content());
        if let Some(button) = &button {
            button.set_text_content(Some(SENDING_LABEL));
            button.set_disabled(true);
        }

        let (form, message) = (form.clone(), message.clone());
        after(SEND_DELAY, move || {
            if let Some(message) = &message {
                show_message(message, SUCCESS_MESSAGE, MessageKind::Success);
            }
            form.reset();
            if let Some(button) = &button {
                button.set_text_content(label.as_deref());
                button.set_disabled(false);
            }
        });
    })
}
