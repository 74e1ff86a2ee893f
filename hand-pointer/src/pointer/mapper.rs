//! Camera-space to screen-space mapping
//!
//! The active region is the camera frame shrunk by a margin on every side.
//! It maps 1:1 onto the full screen, so the hand never has to reach the
//! edge of the camera view to reach the edge of the screen.

use nalgebra::{Point2, Vector2};

use super::config::{is_positive_size, ConfigError, PointerConfig};

/// Clamp `value` into `[in_min, in_max]` then map it linearly onto
/// `[out_min, out_max]`
///
/// Callers must ensure `in_max > in_min`; `ActiveRegion` guarantees this
/// for every mapping it performs.
pub fn map_range(value: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
    debug_assert!(in_max > in_min, "degenerate input range");
    let clamped = value.max(in_min).min(in_max);
    // Normalise to 0-1 before scaling so huge output ranges cannot overflow
    let t = (clamped - in_min) / (in_max - in_min);
    t * (out_max - out_min) + out_min
}

/// Inset rectangle of camera space mapped onto the screen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveRegion {
    /// Camera frame size in pixels
    frame: Vector2<f32>,
    /// Top-left corner of the region (camera pixels)
    min: Point2<f32>,
    /// Bottom-right corner of the region (camera pixels)
    max: Point2<f32>,
    /// Screen size in pixels
    screen: Vector2<f32>,
}

impl ActiveRegion {
    pub fn new(
        frame: Vector2<f32>,
        margin: f32,
        screen: Vector2<f32>,
    ) -> Result<Self, ConfigError> {
        if !is_positive_size(frame.x, frame.y) {
            return Err(ConfigError::InvalidCameraSize {
                width: frame.x,
                height: frame.y,
            });
        }
        if !(margin.is_finite() && margin >= 0.0) {
            return Err(ConfigError::InvalidMargin(margin));
        }
        if !is_positive_size(screen.x, screen.y) {
            return Err(ConfigError::InvalidScreenSize {
                width: screen.x,
                height: screen.y,
            });
        }

        let min = Point2::new(margin, margin);
        let max = Point2::new(frame.x - margin, frame.y - margin);
        if max.x <= min.x || max.y <= min.y {
            return Err(ConfigError::DegenerateActiveRegion {
                margin,
                width: frame.x,
                height: frame.y,
            });
        }

        Ok(Self { frame, min, max, screen })
    }

    pub fn from_config(config: &PointerConfig) -> Result<Self, ConfigError> {
        Self::new(
            Vector2::new(config.camera_width, config.camera_height),
            config.frame_reduction_margin,
            Vector2::new(config.screen_width, config.screen_height),
        )
    }

    /// Same region, different screen. Used when the viewport is resized.
    pub fn with_screen(&self, screen: Vector2<f32>) -> Result<Self, ConfigError> {
        Self::new(self.frame, self.min.x, screen)
    }

    /// Scale a normalized (0-1) coordinate pair into camera pixels
    pub fn to_camera(&self, x: f32, y: f32) -> Point2<f32> {
        Point2::new(x * self.frame.x, y * self.frame.y)
    }

    /// Map a camera-pixel point to the screen, clamping to the region first
    pub fn to_screen(&self, camera: Point2<f32>) -> Point2<f32> {
        Point2::new(
            map_range(camera.x, self.min.x, self.max.x, 0.0, self.screen.x),
            map_range(camera.y, self.min.y, self.max.y, 0.0, self.screen.y),
        )
    }

    /// Clamp a screen point into the screen rectangle
    pub fn clamp_to_screen(&self, point: Point2<f32>) -> Point2<f32> {
        Point2::new(
            point.x.clamp(0.0, self.screen.x),
            point.y.clamp(0.0, self.screen.y),
        )
    }

    pub fn min(&self) -> Point2<f32> {
        self.min
    }

    pub fn max(&self) -> Point2<f32> {
        self.max
    }

    pub fn frame_size(&self) -> Vector2<f32> {
        self.frame
    }

    pub fn screen_size(&self) -> Vector2<f32> {
        self.screen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn webcam_region() -> ActiveRegion {
        ActiveRegion::new(
            Vector2::new(640.0, 480.0),
            100.0,
            Vector2::new(1920.0, 1080.0),
        )
        .unwrap()
    }

    #[test]
    fn test_map_range_linear() {
        assert!((map_range(5.0, 0.0, 10.0, 0.0, 100.0) - 50.0).abs() < 1e-4);
        assert!((map_range(2.5, 0.0, 10.0, 100.0, 200.0) - 125.0).abs() < 1e-4);
    }

    #[test]
    fn test_map_range_clamps() {
        assert_eq!(map_range(-3.0, 0.0, 10.0, 0.0, 100.0), 0.0);
        assert_eq!(map_range(42.0, 0.0, 10.0, 0.0, 100.0), 100.0);
    }

    #[test]
    fn test_map_range_huge_output_stays_finite() {
        let mapped = map_range(320.0, 100.0, 540.0, 0.0, f32::MAX);
        assert!(mapped.is_finite());
        assert_eq!(map_range(540.0, 100.0, 540.0, 0.0, f32::MAX), f32::MAX);
    }

    #[test]
    fn test_region_bounds() {
        let region = webcam_region();
        assert_eq!(region.min(), Point2::new(100.0, 100.0));
        assert_eq!(region.max(), Point2::new(540.0, 380.0));
    }

    #[test]
    fn test_webcam_point_maps_to_screen() {
        let region = webcam_region();
        let screen = region.to_screen(Point2::new(370.0, 290.0));
        // (370 - 100) * 1920 / 440 and (290 - 100) * 1080 / 280
        assert!((screen.x - 1178.1818).abs() < 1e-2);
        assert!((screen.y - 732.8571).abs() < 1e-2);
    }

    #[test]
    fn test_outside_region_clamps_to_screen_edge() {
        let region = webcam_region();
        assert_eq!(region.to_screen(Point2::new(20.0, 50.0)), Point2::new(0.0, 0.0));
        assert_eq!(
            region.to_screen(Point2::new(639.0, 470.0)),
            Point2::new(1920.0, 1080.0)
        );
        // Only the out-of-range axis is clamped
        let left_edge = region.to_screen(Point2::new(0.0, 240.0));
        assert_eq!(left_edge.x, 0.0);
        assert!((left_edge.y - 540.0).abs() < 1e-3);
    }

    #[test]
    fn test_to_camera_scales_normalized() {
        let region = webcam_region();
        assert_eq!(region.to_camera(0.5, 0.25), Point2::new(320.0, 120.0));
    }

    #[test]
    fn test_degenerate_region_rejected() {
        let result = ActiveRegion::new(Vector2::new(200.0, 480.0), 100.0, Vector2::new(1920.0, 1080.0));
        assert!(matches!(result, Err(ConfigError::DegenerateActiveRegion { .. })));

        let result = ActiveRegion::new(Vector2::new(640.0, 480.0), -1.0, Vector2::new(1920.0, 1080.0));
        assert_eq!(result, Err(ConfigError::InvalidMargin(-1.0)));
    }

    #[test]
    fn test_with_screen_keeps_region() {
        let region = webcam_region().with_screen(Vector2::new(800.0, 600.0)).unwrap();
        assert_eq!(region.min(), Point2::new(100.0, 100.0));
        assert_eq!(region.to_screen(Point2::new(540.0, 380.0)), Point2::new(800.0, 600.0));
    }
}
