//! Hand Pointer - virtual mouse driven by hand landmarks
//!
//! Entry point for WASM module. Only contains:
//! - Module declarations
//! - Console logging and the panic hook
//!
//! `pointer` is the platform-free core (frame in, cursor state and clicks
//! out). `bridge` wires it to MediaPipe results and JS callbacks.

use wasm_bindgen::prelude::*;

// ============================================================================
// CONSOLE LOGGING
// ============================================================================

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

macro_rules! console_log {
    ($($t:tt)*) => ($crate::log(&format_args!($($t)*).to_string()))
}

mod bridge;
pub mod pointer;

// Re-export wasm_bindgen functions for JS access
pub use bridge::{
    activate_pointer, activate_pointer_with, deactivate_pointer, get_active_region,
    get_cursor_state, is_pointer_active, process_hand_landmarks, set_screen_size,
    set_smoothing_factor, BridgeError, JsPointerSink,
};

// ============================================================================
// WASM ENTRY POINTS
// ============================================================================

/// Called automatically when WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}
