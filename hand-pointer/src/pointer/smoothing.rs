//! Exponential smoothing for the cursor position
//!
//! Each update moves the held value `1 / factor` of the way to the target.
//! Factor 1 snaps straight to the target; larger factors trade lag for less
//! jitter. Convergence is monotonic and never overshoots.

use std::num::NonZeroU32;

use nalgebra::Point2;

/// Single-axis blend filter
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SmoothingFilter {
    value: f32,
}

impl SmoothingFilter {
    pub fn new(initial: f32) -> Self {
        Self { value: initial }
    }

    /// Blend toward `target` and keep the result
    ///
    /// The factor is taken per call so it can change between frames
    /// without disturbing the held value.
    pub fn update(&mut self, target: f32, factor: NonZeroU32) -> f32 {
        self.value += (target - self.value) / factor.get() as f32;
        self.value
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// Overwrite the held value
    pub fn reset(&mut self, value: f32) {
        self.value = value;
    }
}

/// Pair of smoothing filters for a 2D screen position
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SmoothingFilter2D {
    pub x: SmoothingFilter,
    pub y: SmoothingFilter,
}

impl SmoothingFilter2D {
    pub fn new(initial: Point2<f32>) -> Self {
        Self {
            x: SmoothingFilter::new(initial.x),
            y: SmoothingFilter::new(initial.y),
        }
    }

    pub fn update(&mut self, target: Point2<f32>, factor: NonZeroU32) -> Point2<f32> {
        Point2::new(self.x.update(target.x, factor), self.y.update(target.y, factor))
    }

    pub fn value(&self) -> Point2<f32> {
        Point2::new(self.x.value(), self.y.value())
    }

    pub fn reset(&mut self, value: Point2<f32>) {
        self.x.reset(value.x);
        self.y.reset(value.y);
    }
}
