//! Click edge detection
//!
//! `is_clicking` is a level signal: it stays true for as long as the pinch
//! is held. The host wants one click per pinch, so this turns the rising
//! edge into a single `ClickAction`.

use super::interpreter::CursorState;

/// A discrete click at a screen position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClickAction {
    pub x: f32,
    pub y: f32,
}

/// Remembers the previous frame's `is_clicking`
#[derive(Debug, Clone, Copy, Default)]
pub struct ClickEdgeDetector {
    was_clicking: bool,
}

impl ClickEdgeDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one published cursor state, returns a click on false -> true
    pub fn update(&mut self, state: &CursorState) -> Option<ClickAction> {
        let rising = state.is_clicking && !self.was_clicking;
        self.was_clicking = state.is_clicking;

        rising.then(|| ClickAction { x: state.x, y: state.y })
    }

    pub fn was_clicking(&self) -> bool {
        self.was_clicking
    }

    pub fn reset(&mut self) {
        self.was_clicking = false;
    }
}
