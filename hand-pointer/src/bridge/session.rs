//! Pointer session storage and the JS entry points that drive it
//!
//! Lifecycle:
//! - `activate_pointer` builds a fresh controller (cursor at origin, no pinch)
//! - `process_hand_landmarks` once per MediaPipe result
//! - `deactivate_pointer` drops all session state
//!
//! Settings changed while inactive are kept and used by the next activation.
//! The JS callbacks run after the session borrow is released, so a click
//! handler may deactivate the pointer or change its settings.

use std::cell::RefCell;

use js_sys::Function;
use thiserror::Error;
use wasm_bindgen::prelude::*;

use super::sink::JsPointerSink;
use super::state::{cursor_snapshot, region_snapshot, BridgeState, FrameDispatch};
use crate::pointer::{ConfigError, PointerConfig};

// ============================================================================
// ERRORS
// ============================================================================

#[derive(Debug, Error)]
pub enum BridgeError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("pointer session is busy")]
    Busy,
}

impl From<BridgeError> for JsValue {
    fn from(err: BridgeError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

// ============================================================================
// STATE
// ============================================================================

// Thread-local storage (WASM is single-threaded)
thread_local! {
    static BRIDGE_STATE: RefCell<BridgeState<JsPointerSink>> = RefCell::new(BridgeState::default());
}

fn with_state<T>(
    f: impl FnOnce(&mut BridgeState<JsPointerSink>) -> Result<T, BridgeError>,
) -> Result<T, BridgeError> {
    BRIDGE_STATE.with(|state_cell| {
        let mut state = state_cell.try_borrow_mut().map_err(|_| BridgeError::Busy)?;
        f(&mut state)
    })
}

/// Browser viewport size in CSS pixels, if there is a window
fn viewport_size() -> Option<(f32, f32)> {
    let window = web_sys::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some((width as f32, height as f32))
}

fn start_session(
    config: PointerConfig,
    on_frame: Function,
    on_click: Function,
) -> Result<(), BridgeError> {
    let config = match viewport_size() {
        Some((width, height)) => config.with_screen_size(width, height),
        None => config,
    };

    with_state(|state| {
        state.activate(config, JsPointerSink::new(on_frame, on_click))?;
        Ok(())
    })?;

    console_log!(
        "🖐️ Hand pointer active: {}x{} screen, margin {}px, smoothing {}",
        config.screen_width,
        config.screen_height,
        config.frame_reduction_margin,
        config.smoothing_factor
    );
    Ok(())
}

// ============================================================================
// WASM API
// ============================================================================

/// Start a pointer session with the current settings
///
/// `on_frame(x, y, isClicking)` runs for every frame with a hand in it,
/// `on_click(x, y)` once per pinch. Any previous session is discarded.
#[wasm_bindgen]
pub fn activate_pointer(on_frame: Function, on_click: Function) -> Result<(), JsValue> {
    let config = with_state(|state| Ok(state.settings()))?;
    start_session(config, on_frame, on_click)?;
    Ok(())
}

/// Start a pointer session with explicit tuning
///
/// Fails (and leaves any running session alone) if the active region would
/// be empty or a parameter is out of range.
#[wasm_bindgen]
pub fn activate_pointer_with(
    margin: f32,
    smoothing: u32,
    pinch_threshold: f32,
    camera_width: f32,
    camera_height: f32,
    on_frame: Function,
    on_click: Function,
) -> Result<(), JsValue> {
    let config = PointerConfig::default()
        .with_margin(margin)
        .with_smoothing(smoothing)
        .with_pinch_threshold(pinch_threshold)
        .with_camera_size(camera_width, camera_height);

    if let Err(err) = start_session(config, on_frame, on_click) {
        web_sys::console::warn_1(&format!("Pointer not activated: {}", err).into());
        return Err(err.into());
    }
    Ok(())
}

/// Stop the session and forget its cursor and click state
#[wasm_bindgen]
pub fn deactivate_pointer() -> Result<(), JsValue> {
    let controller = with_state(|state| Ok(state.deactivate()))?;

    if let Some(controller) = controller {
        console_log!(
            "⏹️ Hand pointer stopped ({} frames, {} rejected)",
            controller.frames_processed(),
            controller.frames_rejected()
        );
    }
    Ok(())
}

#[wasm_bindgen]
pub fn is_pointer_active() -> bool {
    BRIDGE_STATE.with(|state_cell| {
        state_cell
            .try_borrow()
            .map(|state| state.is_active())
            .unwrap_or(false)
    })
}

/// Called from JavaScript with MediaPipe's flat Float32Array
/// (21 landmarks × 3 coordinates per hand)
///
/// `num_hands == 0` means no hand this frame: nothing changes and no
/// callback runs. Only the first hand is used. Frames arriving while
/// inactive are ignored. Errors thrown by the callbacks are rethrown.
#[wasm_bindgen]
pub fn process_hand_landmarks(flat_data: &[f32], num_hands: usize) -> Result<(), JsValue> {
    let hand = (num_hands > 0).then_some(flat_data);
    let dispatch = with_state(|state| Ok(state.process_flat(hand)))?;

    // Borrow released: callbacks may call back into this module
    match dispatch {
        FrameDispatch::Deliver { events, mut sink } => events.replay(&mut sink),
        FrameDispatch::Rejected(err) => {
            web_sys::console::warn_1(&format!("Hand frame ignored: {}", err).into());
            Ok(())
        }
        FrameDispatch::Inactive | FrameDispatch::NoHand => Ok(()),
    }
}

/// Change smoothing without moving the cursor
#[wasm_bindgen]
pub fn set_smoothing_factor(factor: u32) -> Result<(), JsValue> {
    with_state(|state| Ok(state.set_smoothing_factor(factor)?))?;
    Ok(())
}

/// Retarget the pointer after the viewport changed size
#[wasm_bindgen]
pub fn set_screen_size(width: f32, height: f32) -> Result<(), JsValue> {
    with_state(|state| Ok(state.set_screen_size(width, height)?))?;
    Ok(())
}

/// Active region as `[x, y, width, height]` in camera pixels, for the
/// page's debug overlay
#[wasm_bindgen]
pub fn get_active_region() -> Option<Vec<f32>> {
    BRIDGE_STATE.with(|state_cell| {
        let state = state_cell.try_borrow().ok()?;
        state.active_region().as_ref().map(region_snapshot)
    })
}

/// Current cursor as `[x, y, isClicking, isMoving, pinchX, pinchY]`
///
/// Flags are 0 or 1. The pinch point is the fingertip midpoint in camera
/// pixels, NaN when not pinching. `None` while inactive.
#[wasm_bindgen]
pub fn get_cursor_state() -> Option<Vec<f32>> {
    BRIDGE_STATE.with(|state_cell| {
        let state = state_cell.try_borrow().ok()?;
        state.cursor().map(cursor_snapshot)
    })
}
