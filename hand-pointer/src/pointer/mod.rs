//! Pointer module - hand landmarks to cursor position and clicks
//!
//! Re-exports only. All logic in submodules.
//! Nothing in here touches JS, so it runs under native `cargo test`.

mod click;
mod config;
mod controller;
mod frame;
mod interpreter;
mod mapper;
mod sink;
mod smoothing;

pub use click::{ClickAction, ClickEdgeDetector};
pub use config::{
    smoothing_factor, ConfigError, PointerConfig, DEFAULT_CAMERA_HEIGHT, DEFAULT_CAMERA_WIDTH,
    DEFAULT_FRAME_REDUCTION, DEFAULT_PINCH_THRESHOLD, DEFAULT_SCREEN_HEIGHT,
    DEFAULT_SCREEN_WIDTH, DEFAULT_SMOOTHING_FACTOR, MAX_SMOOTHING_FACTOR,
};
pub use controller::PointerController;
pub use frame::{
    FrameError, Landmark, LandmarkFrame, FLOATS_PER_LANDMARK, LANDMARK_COUNT,
    // Landmark indices
    WRIST, THUMB_CMC, THUMB_MCP, THUMB_IP, THUMB_TIP,
    INDEX_MCP, INDEX_PIP, INDEX_DIP, INDEX_TIP,
    MIDDLE_MCP, MIDDLE_PIP, MIDDLE_DIP, MIDDLE_TIP,
    RING_MCP, RING_PIP, RING_DIP, RING_TIP,
    PINKY_MCP, PINKY_PIP, PINKY_DIP, PINKY_TIP,
};
pub use interpreter::{CursorState, GestureInterpreter, PointerMode};
pub use mapper::{map_range, ActiveRegion};
pub use sink::{FrameEvents, PointerSink};
pub use smoothing::{SmoothingFilter, SmoothingFilter2D};
