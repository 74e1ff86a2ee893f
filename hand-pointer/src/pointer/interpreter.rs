//! Gesture interpreter - landmark frame in, cursor state out
//!
//! Per frame:
//! 1. Finger-up test for index and middle (tip above PIP)
//! 2. Index up: map the index tip through the active region, smooth, hold.
//!    Index down: keep the held position untouched.
//! 3. Pinch: index and middle up with tips closer than the threshold
//! 4. Publish the cursor state
//!
//! Movement and clicking are evaluated independently, so an open
//! two-finger pose that is not yet a pinch still moves the cursor.

use std::num::NonZeroU32;

use nalgebra::Point2;

use super::frame::{LandmarkFrame, INDEX_TIP, MIDDLE_TIP};
use super::mapper::ActiveRegion;
use super::smoothing::SmoothingFilter2D;

/// What the hand pose is doing to the cursor this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerMode {
    /// Index finger down - cursor holds its position
    #[default]
    Hover,
    /// Index finger up - cursor follows the index tip
    Moving,
}

impl PointerMode {
    pub fn name(&self) -> &'static str {
        match self {
            PointerMode::Hover => "HOVER",
            PointerMode::Moving => "MOVING",
        }
    }
}

/// Published pointer state, screen pixels with origin top-left
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CursorState {
    pub x: f32,
    pub y: f32,
    /// Level signal - true on every frame the pinch holds
    pub is_clicking: bool,
    pub mode: PointerMode,
    /// Midpoint of the pinching fingertips in camera pixels, for feedback
    pub pinch_point: Option<Point2<f32>>,
}

impl CursorState {
    pub fn position(&self) -> Point2<f32> {
        Point2::new(self.x, self.y)
    }
}

/// Single-hand gesture state machine
pub struct GestureInterpreter {
    region: ActiveRegion,
    smoothing: NonZeroU32,
    pinch_threshold: f32,
    filter: SmoothingFilter2D,
    state: CursorState,
}

impl GestureInterpreter {
    pub fn new(region: ActiveRegion, smoothing: NonZeroU32, pinch_threshold: f32) -> Self {
        Self {
            region,
            smoothing,
            pinch_threshold,
            filter: SmoothingFilter2D::default(),
            state: CursorState::default(),
        }
    }

    /// Interpret one frame and publish the new cursor state
    pub fn interpret(&mut self, frame: &LandmarkFrame) -> CursorState {
        let index_up = frame.index_up();
        let middle_up = frame.middle_up();

        let index_tip = frame.landmark(INDEX_TIP);
        let middle_tip = frame.landmark(MIDDLE_TIP);
        let index_px = self.region.to_camera(index_tip.x, index_tip.y);
        let middle_px = self.region.to_camera(middle_tip.x, middle_tip.y);

        // Moving: only a raised index produces a new target
        let mode = if index_up {
            let target = self.region.to_screen(index_px);
            self.filter.update(target, self.smoothing);
            PointerMode::Moving
        } else {
            PointerMode::Hover
        };

        // Pinch: evaluated every frame, independent of movement
        let pinch_point = (index_up
            && middle_up
            && nalgebra::distance(&index_px, &middle_px) < self.pinch_threshold)
            .then(|| nalgebra::center(&index_px, &middle_px));

        let held = self.filter.value();
        self.state = CursorState {
            x: held.x,
            y: held.y,
            is_clicking: pinch_point.is_some(),
            mode,
            pinch_point,
        };
        self.state
    }

    pub fn state(&self) -> &CursorState {
        &self.state
    }

    pub fn region(&self) -> &ActiveRegion {
        &self.region
    }

    pub fn smoothing(&self) -> NonZeroU32 {
        self.smoothing
    }

    /// Takes effect on the next frame; the held position is kept
    pub fn set_smoothing(&mut self, smoothing: NonZeroU32) {
        self.smoothing = smoothing;
    }

    /// Swap the active region (e.g. after a viewport resize)
    ///
    /// The held position is clamped into the new screen so it never points
    /// off-screen.
    pub fn set_region(&mut self, region: ActiveRegion) {
        self.region = region;
        let held = region.clamp_to_screen(self.filter.value());
        self.filter.reset(held);
        self.state.x = held.x;
        self.state.y = held.y;
    }

    /// Back to the neutral state: origin, not clicking
    pub fn reset(&mut self) {
        self.filter.reset(Point2::origin());
        self.state = CursorState::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pointer::frame::{Landmark, INDEX_PIP, LANDMARK_COUNT, MIDDLE_PIP};
    use nalgebra::Vector2;

    const CAMERA: (f32, f32) = (640.0, 480.0);

    fn region() -> ActiveRegion {
        ActiveRegion::new(
            Vector2::new(CAMERA.0, CAMERA.1),
            100.0,
            Vector2::new(1920.0, 1080.0),
        )
        .unwrap()
    }

    fn interpreter(smoothing: u32) -> GestureInterpreter {
        GestureInterpreter::new(region(), NonZeroU32::new(smoothing).unwrap(), 40.0)
    }

    /// Build a hand from camera-pixel fingertip positions
    fn hand(index: (f32, f32), index_up: bool, middle: (f32, f32), middle_up: bool) -> LandmarkFrame {
        let mut landmarks = [Landmark::new(0.5, 0.9, 0.0); LANDMARK_COUNT];
        let norm = |(x, y): (f32, f32)| Landmark::new(x / CAMERA.0, y / CAMERA.1, 0.0);

        landmarks[INDEX_TIP] = norm(index);
        landmarks[MIDDLE_TIP] = norm(middle);
        // PIP sits 30px below the tip when raised, above it when curled
        let pip_offset = |up: bool| if up { 30.0 } else { -30.0 };
        landmarks[INDEX_PIP] = norm((index.0, index.1 + pip_offset(index_up)));
        landmarks[MIDDLE_PIP] = norm((middle.0, middle.1 + pip_offset(middle_up)));

        LandmarkFrame::from_landmarks(&landmarks).unwrap()
    }

    #[test]
    fn test_starts_neutral() {
        let interp = interpreter(5);
        assert_eq!(*interp.state(), CursorState::default());
        assert_eq!(interp.state().mode, PointerMode::Hover);
    }

    #[test]
    fn test_index_up_snaps_with_factor_one() {
        let mut interp = interpreter(1);
        let state = interp.interpret(&hand((370.0, 290.0), true, (500.0, 300.0), false));

        assert_eq!(state.mode, PointerMode::Moving);
        assert!((state.x - 1178.1818).abs() < 0.05);
        assert!((state.y - 732.8571).abs() < 0.05);
        assert!(!state.is_clicking);
    }

    #[test]
    fn test_index_down_holds_position() {
        let mut interp = interpreter(3);
        let moved = interp.interpret(&hand((320.0, 240.0), true, (500.0, 300.0), false));

        let held = interp.interpret(&hand((120.0, 110.0), false, (500.0, 300.0), true));
        assert_eq!(held.mode, PointerMode::Hover);
        assert_eq!((held.x, held.y), (moved.x, moved.y));
    }

    #[test]
    fn test_smoothing_lags_behind_target() {
        let mut interp = interpreter(4);
        let state = interp.interpret(&hand((540.0, 380.0), true, (0.0, 0.0), false));
        // Screen corner is (1920, 1080), a quarter of the way from the origin
        assert!((state.x - 480.0).abs() < 1e-3);
        assert!((state.y - 270.0).abs() < 1e-3);
    }

    #[test]
    fn test_pinch_sets_level_signal() {
        let mut interp = interpreter(5);
        let state = interp.interpret(&hand((300.0, 200.0), true, (310.0, 205.0), true));

        assert!(state.is_clicking);
        assert_eq!(state.mode, PointerMode::Moving);
        let mid = state.pinch_point.unwrap();
        assert!((mid.x - 305.0).abs() < 1e-2);
        assert!((mid.y - 202.5).abs() < 1e-2);
    }

    #[test]
    fn test_wide_two_finger_pose_moves_without_click() {
        let mut interp = interpreter(1);
        let state = interp.interpret(&hand((300.0, 200.0), true, (360.0, 200.0), true));
        assert!(!state.is_clicking);
        assert_eq!(state.mode, PointerMode::Moving);
        assert!(state.pinch_point.is_none());
    }

    #[test]
    fn test_no_click_with_index_down() {
        let mut interp = interpreter(1);
        let state = interp.interpret(&hand((300.0, 200.0), false, (305.0, 200.0), true));
        assert!(!state.is_clicking);
    }

    #[test]
    fn test_no_click_with_middle_down() {
        let mut interp = interpreter(1);
        let state = interp.interpret(&hand((300.0, 200.0), true, (305.0, 200.0), false));
        assert!(!state.is_clicking);
    }

    #[test]
    fn test_smoothing_change_keeps_position() {
        let mut interp = interpreter(5);
        let first = interp.interpret(&hand((540.0, 380.0), true, (0.0, 0.0), false));

        interp.set_smoothing(NonZeroU32::new(1).unwrap());
        assert_eq!(interp.state().position(), first.position());

        let snapped = interp.interpret(&hand((540.0, 380.0), true, (0.0, 0.0), false));
        assert!((snapped.x - 1920.0).abs() < 1e-2);
        assert!((snapped.y - 1080.0).abs() < 1e-2);
    }

    #[test]
    fn test_shrinking_screen_clamps_held_position() {
        let mut interp = interpreter(1);
        interp.interpret(&hand((540.0, 380.0), true, (0.0, 0.0), false));

        let smaller = region().with_screen(Vector2::new(800.0, 600.0)).unwrap();
        interp.set_region(smaller);
        assert_eq!(interp.state().position(), Point2::new(800.0, 600.0));
    }

    #[test]
    fn test_reset_returns_to_origin() {
        let mut interp = interpreter(1);
        interp.interpret(&hand((300.0, 200.0), true, (305.0, 200.0), true));
        interp.reset();
        assert_eq!(*interp.state(), CursorState::default());

        // Next movement blends from the origin, not the old position
        let mut fresh = interpreter(1);
        let expected = fresh.interpret(&hand((400.0, 300.0), true, (0.0, 0.0), false));
        assert_eq!(interp.interpret(&hand((400.0, 300.0), true, (0.0, 0.0), false)), expected);
    }
}
