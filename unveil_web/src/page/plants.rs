// Copyright 2026 the Unveil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use unveil_core::page::plants::{
    BOB_PERIOD, BobPhase, PLANT_MARKER, PLANT_SELECTORS, PLANT_TRANSITION, PlantSide, REST_AFTER,
    RIGHT_CLASS,
};
use wasm_bindgen::prelude::*;
use web_sys::Document;

use crate::dom::{select, select_all, set_style};
use crate::{after, every};

/// Starts the background plant bob on pages that have plants.
pub fn install_plants(document: &Document) -> Result<(), JsValue> {
    if select(document, PLANT_MARKER)?.is_none() {
        return Ok(());
    }
    for plant in select_all(document, &PLANT_SELECTORS.join(", "))? {
        let side = PlantSide::from_right_class(plant.class_list().contains(RIGHT_CLASS));
        set_style(&plant, "transition", &PLANT_TRANSITION.property_css("transform"));
        every(BOB_PERIOD, move || {
            set_style(&plant, "transform", side.transform(BobPhase::Raised));
            let plant = plant.clone();
            after(REST_AFTER, move || {
                set_style(&plant, "transform", side.transform(BobPhase::Resting));
            });
        });
    }
    Ok(())
}
