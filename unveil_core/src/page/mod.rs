// Copyright 2026 the Unveil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page behaviors that sit alongside the reveal controller.
//!
//! Each submodule holds the decision logic and constants for one behavior;
//! the web backend only reads DOM inputs and writes the results.

#[cfg(feature = "std")]
pub mod form;
pub mod nav;
pub mod plants;
pub mod ripple;
pub mod scroll;
pub mod theme;
