//! Bridge module - JS ↔ Rust communication
//!
//! All #[wasm_bindgen] entry points live here.
//! Re-exports only in mod.rs, logic in submodules.

mod session;
mod sink;
mod state;

pub use session::{
    // WASM entry points
    activate_pointer,
    activate_pointer_with,
    deactivate_pointer,
    is_pointer_active,
    process_hand_landmarks,
    set_smoothing_factor,
    set_screen_size,
    get_active_region,
    get_cursor_state,
    BridgeError,
};

pub use sink::JsPointerSink;
