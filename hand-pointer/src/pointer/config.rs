//! Pointer configuration and its validation
//!
//! Defaults are tuned for a 640x480 webcam: a 100px margin leaves a
//! comfortable reach area and 40px fingertip distance reads as a pinch.

use std::num::NonZeroU32;

use thiserror::Error;

/// Pixels trimmed from each edge of the camera frame
pub const DEFAULT_FRAME_REDUCTION: f32 = 100.0;

/// Blend divisor - 1 = raw, higher = smoother but laggier
pub const DEFAULT_SMOOTHING_FACTOR: u32 = 5;

/// Largest smoothing factor hosts are expected to offer in a settings UI
pub const MAX_SMOOTHING_FACTOR: u32 = 20;

/// Fingertip distance (camera pixels) below which index+middle count as a pinch
pub const DEFAULT_PINCH_THRESHOLD: f32 = 40.0;

pub const DEFAULT_CAMERA_WIDTH: f32 = 640.0;
pub const DEFAULT_CAMERA_HEIGHT: f32 = 480.0;
pub const DEFAULT_SCREEN_WIDTH: f32 = 1920.0;
pub const DEFAULT_SCREEN_HEIGHT: f32 = 1080.0;

/// Configuration errors. These are raised when a controller is built or
/// reconfigured, never while frames are flowing.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    #[error("smoothing factor must be at least 1, got {0}")]
    InvalidSmoothingFactor(u32),

    #[error("pinch threshold must be a positive pixel distance, got {0}")]
    InvalidPinchThreshold(f32),

    #[error("frame reduction margin must be a non-negative pixel count, got {0}")]
    InvalidMargin(f32),

    #[error("camera frame must have a positive finite size, got {width}x{height}")]
    InvalidCameraSize { width: f32, height: f32 },

    #[error("screen must have a positive finite size, got {width}x{height}")]
    InvalidScreenSize { width: f32, height: f32 },

    #[error("a {margin}px margin leaves no active region in a {width}x{height} camera frame")]
    DegenerateActiveRegion { margin: f32, width: f32, height: f32 },
}

/// Tuning for one pointer controller
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerConfig {
    /// Inset (camera pixels) on all four sides of the active region
    pub frame_reduction_margin: f32,
    /// Divisor of the smoothing blend step, must be >= 1
    pub smoothing_factor: u32,
    /// Pinch distance in camera pixels
    pub pinch_threshold_px: f32,
    pub camera_width: f32,
    pub camera_height: f32,
    pub screen_width: f32,
    pub screen_height: f32,
}

impl Default for PointerConfig {
    fn default() -> Self {
        Self {
            frame_reduction_margin: DEFAULT_FRAME_REDUCTION,
            smoothing_factor: DEFAULT_SMOOTHING_FACTOR,
            pinch_threshold_px: DEFAULT_PINCH_THRESHOLD,
            camera_width: DEFAULT_CAMERA_WIDTH,
            camera_height: DEFAULT_CAMERA_HEIGHT,
            screen_width: DEFAULT_SCREEN_WIDTH,
            screen_height: DEFAULT_SCREEN_HEIGHT,
        }
    }
}

impl PointerConfig {
    pub fn with_margin(mut self, margin: f32) -> Self {
        self.frame_reduction_margin = margin;
        self
    }

    pub fn with_smoothing(mut self, factor: u32) -> Self {
        self.smoothing_factor = factor;
        self
    }

    pub fn with_pinch_threshold(mut self, threshold_px: f32) -> Self {
        self.pinch_threshold_px = threshold_px;
        self
    }

    pub fn with_camera_size(mut self, width: f32, height: f32) -> Self {
        self.camera_width = width;
        self.camera_height = height;
        self
    }

    pub fn with_screen_size(mut self, width: f32, height: f32) -> Self {
        self.screen_width = width;
        self.screen_height = height;
        self
    }

    /// Check every field. The active region geometry itself is checked by
    /// `ActiveRegion::new`, which the controller builds from this config.
    pub fn validate(&self) -> Result<(), ConfigError> {
        smoothing_factor(self.smoothing_factor)?;

        if !(self.pinch_threshold_px.is_finite() && self.pinch_threshold_px > 0.0) {
            return Err(ConfigError::InvalidPinchThreshold(self.pinch_threshold_px));
        }

        super::mapper::ActiveRegion::from_config(self).map(|_| ())
    }
}

/// Validate a raw smoothing factor
pub fn smoothing_factor(factor: u32) -> Result<NonZeroU32, ConfigError> {
    NonZeroU32::new(factor).ok_or(ConfigError::InvalidSmoothingFactor(factor))
}

pub(crate) fn is_positive_size(width: f32, height: f32) -> bool {
    width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0
}
