//! Immediate-mode UI toolkit
//!
//! Small rectangle-based widget set rebuilt every frame on top of
//! macroquad: layout math, mouse/widget-id plumbing, buttons, a slider,
//! and a single-line text input for the floor editor form.
//!
//! Note: some helpers are kept as toolkit surface even when only one
//! widget uses them today.

#![allow(dead_code)]

mod rect;
mod input;
mod text_input;
mod widgets;

pub use rect::*;
pub use input::*;
pub use text_input::*;
pub use widgets::*;
