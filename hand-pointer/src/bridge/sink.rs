//! JS-backed pointer sink
//!
//! Forwards cursor updates and clicks to two JS callbacks. What they do with
//! them (draw the cursor, dispatch a synthetic click, play a ripple) is the
//! page's business.

use js_sys::Function;
use wasm_bindgen::prelude::*;

use crate::pointer::{ClickAction, CursorState, PointerSink};

/// Clones share the same two JS functions
#[derive(Clone)]
pub struct JsPointerSink {
    /// `onFrame(x, y, isClicking)`
    on_frame: Function,
    /// `onClick(x, y)`
    on_click: Function,
}

impl JsPointerSink {
    pub fn new(on_frame: Function, on_click: Function) -> Self {
        Self { on_frame, on_click }
    }
}

impl PointerSink for JsPointerSink {
    /// Whatever the callback threw
    type Error = JsValue;

    fn on_frame(&mut self, state: &CursorState) -> Result<(), JsValue> {
        self.on_frame
            .call3(
                &JsValue::NULL,
                &JsValue::from_f64(state.x as f64),
                &JsValue::from_f64(state.y as f64),
                &JsValue::from_bool(state.is_clicking),
            )
            .map(|_| ())
    }

    fn on_click(&mut self, click: ClickAction) -> Result<(), JsValue> {
        self.on_click
            .call2(
                &JsValue::NULL,
                &JsValue::from_f64(click.x as f64),
                &JsValue::from_f64(click.y as f64),
            )
            .map(|_| ())
    }
}
