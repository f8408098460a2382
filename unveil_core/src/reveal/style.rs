// Copyright 2026 the Unveil Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hidden and resting visual states of an observed element.
//!
//! The controller only decides *when* an element flips from its hidden state
//! to its resting state. How the flip animates is delegated to the CSS
//! [`Transition`] installed alongside the hidden state.

use alloc::format;
use alloc::string::String;

use crate::time::Duration;

/// The vertical offset and optional scale applied while an element is hidden.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Offset {
    /// Downward translation in CSS pixels.
    pub translate_y: f64,
    /// Uniform scale, if the transform includes one.
    pub scale: Option<f64>,
}

impl Offset {
    /// Returns the same transform shape at rest: no translation, unit scale.
    #[must_use]
    pub const fn resting(self) -> Self {
        Self {
            translate_y: 0.0,
            scale: match self.scale {
                Some(_) => Some(1.0),
                None => None,
            },
        }
    }

    /// Renders the CSS `transform` value, e.g. `translateY(30px) scale(0.95)`.
    #[must_use]
    pub fn to_css(&self) -> String {
        let translate = if self.translate_y == 0.0 {
            String::from("translateY(0)")
        } else {
            format!("translateY({}px)", self.translate_y)
        };
        match self.scale {
            Some(s) => format!("{translate} scale({s})"),
            None => translate,
        }
    }
}

/// CSS timing function for the reveal transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Easing {
    /// `ease`.
    Ease,
    /// `ease-out`.
    EaseOut,
    /// `ease-in`.
    EaseIn,
    /// `ease-in-out`.
    EaseInOut,
    /// Material standard curve, `cubic-bezier(0.4, 0, 0.2, 1)`.
    Standard,
}

impl Easing {
    /// Returns the CSS timing-function keyword or function.
    #[must_use]
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::Ease => "ease",
            Self::EaseOut => "ease-out",
            Self::EaseIn => "ease-in",
            Self::EaseInOut => "ease-in-out",
            Self::Standard => "cubic-bezier(0.4, 0, 0.2, 1)",
        }
    }
}

/// Duration and easing of the opacity/transform transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Transition {
    /// Transition duration.
    pub duration: Duration,
    /// Timing function.
    pub easing: Easing,
}

impl Transition {
    /// Renders a CSS `transition` value for a single property.
    #[must_use]
    pub fn property_css(&self, property: &str) -> String {
        format!(
            "{property} {}s {}",
            self.duration.as_millis() as f64 / 1000.0,
            self.easing.as_css()
        )
    }

    /// Renders the CSS `transition` value covering opacity and transform.
    #[must_use]
    pub fn to_css(&self) -> String {
        format!(
            "{}, {}",
            self.property_css("opacity"),
            self.property_css("transform")
        )
    }
}

/// Visual configuration of a reveal: where elements start and how they move.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealStyle {
    /// Transform applied while hidden.
    pub offset: Offset,
    /// Transition installed when the element is hidden.
    pub transition: Transition,
}

/// A style write requested by the controller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StyleChange<'a> {
    /// Opacity 0, offset transform, transition installed.
    Hide(&'a RevealStyle),
    /// Opacity 1, resting transform.
    Reveal(&'a RevealStyle),
}

impl StyleChange<'_> {
    /// Target opacity.
    #[must_use]
    pub const fn opacity(&self) -> f64 {
        match self {
            Self::Hide(_) => 0.0,
            Self::Reveal(_) => 1.0,
        }
    }

    /// Target transform.
    #[must_use]
    pub const fn transform(&self) -> Offset {
        match self {
            Self::Hide(style) => style.offset,
            Self::Reveal(style) => style.offset.resting(),
        }
    }

    /// Transition to install, if this change installs one.
    #[must_use]
    pub const fn transition(&self) -> Option<&Transition> {
        match self {
            Self::Hide(style) => Some(&style.transition),
            Self::Reveal(_) => None,
        }
    }
}
