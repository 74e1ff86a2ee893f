//! Hand landmark frames as delivered by the tracking engine
//!
//! MediaPipe Hands emits 21 normalized keypoints per hand, origin top-left.
//! Only the index and middle finger joints drive the pointer; the full index
//! table is kept so hosts can label or draw the rest.

use thiserror::Error;

// ============================================================================
// HAND LANDMARK INDICES (MediaPipe Hands - 21 total)
// ============================================================================

pub const LANDMARK_COUNT: usize = 21;

/// Floats per landmark in a flattened frame (x, y, z)
pub const FLOATS_PER_LANDMARK: usize = 3;

pub const WRIST: usize = 0;
pub const THUMB_CMC: usize = 1;
pub const THUMB_MCP: usize = 2;
pub const THUMB_IP: usize = 3;
pub const THUMB_TIP: usize = 4;
pub const INDEX_MCP: usize = 5;
pub const INDEX_PIP: usize = 6;
pub const INDEX_DIP: usize = 7;
pub const INDEX_TIP: usize = 8;
pub const MIDDLE_MCP: usize = 9;
pub const MIDDLE_PIP: usize = 10;
pub const MIDDLE_DIP: usize = 11;
pub const MIDDLE_TIP: usize = 12;
pub const RING_MCP: usize = 13;
pub const RING_PIP: usize = 14;
pub const RING_DIP: usize = 15;
pub const RING_TIP: usize = 16;
pub const PINKY_MCP: usize = 17;
pub const PINKY_PIP: usize = 18;
pub const PINKY_DIP: usize = 19;
pub const PINKY_TIP: usize = 20;

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// A single hand keypoint in normalized camera coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Landmark {
    pub x: f32, // 0-1 normalized, 0 = left
    pub y: f32, // 0-1 normalized, 0 = top
    pub z: f32, // Relative depth (unused)
}

impl Landmark {
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

/// Reasons a frame is refused before it reaches the interpreter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FrameError {
    #[error("expected {expected} hand landmarks, got {actual}")]
    TooFewLandmarks { expected: usize, actual: usize },

    #[error("hand landmark {index} has a non-finite coordinate")]
    NonFinite { index: usize },
}

/// One hand's 21 landmarks for a single video frame
///
/// Construction is the only validation point: once a `LandmarkFrame` exists
/// every coordinate in it is finite.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LandmarkFrame {
    landmarks: [Landmark; LANDMARK_COUNT],
}

impl LandmarkFrame {
    /// Build a frame from the first 21 landmarks of `landmarks`
    pub fn from_landmarks(landmarks: &[Landmark]) -> Result<Self, FrameError> {
        if landmarks.len() < LANDMARK_COUNT {
            return Err(FrameError::TooFewLandmarks {
                expected: LANDMARK_COUNT,
                actual: landmarks.len(),
            });
        }

        let mut frame = [Landmark::default(); LANDMARK_COUNT];
        frame.copy_from_slice(&landmarks[..LANDMARK_COUNT]);
        Self::checked(frame)
    }

    /// Build a frame from a flat `[x, y, z, x, y, z, ...]` array
    ///
    /// This is the layout MediaPipe results are handed over in from JS.
    /// Values past the first hand are ignored.
    pub fn from_flat(data: &[f32]) -> Result<Self, FrameError> {
        let needed = LANDMARK_COUNT * FLOATS_PER_LANDMARK;
        if data.len() < needed {
            return Err(FrameError::TooFewLandmarks {
                expected: LANDMARK_COUNT,
                actual: data.len() / FLOATS_PER_LANDMARK,
            });
        }

        let mut frame = [Landmark::default(); LANDMARK_COUNT];
        for (landmark, xyz) in frame
            .iter_mut()
            .zip(data[..needed].chunks_exact(FLOATS_PER_LANDMARK))
        {
            *landmark = Landmark::new(xyz[0], xyz[1], xyz[2]);
        }
        Self::checked(frame)
    }

    fn checked(landmarks: [Landmark; LANDMARK_COUNT]) -> Result<Self, FrameError> {
        if let Some(index) = landmarks.iter().position(|l| !l.is_finite()) {
            return Err(FrameError::NonFinite { index });
        }
        Ok(Self { landmarks })
    }

    pub fn landmark(&self, index: usize) -> Landmark {
        self.landmarks[index]
    }

    pub fn landmarks(&self) -> &[Landmark; LANDMARK_COUNT] {
        &self.landmarks
    }

    /// A finger is up when its tip sits above (smaller y than) its PIP joint
    pub fn is_finger_up(&self, tip: usize, pip: usize) -> bool {
        self.landmarks[tip].y < self.landmarks[pip].y
    }

    pub fn index_up(&self) -> bool {
        self.is_finger_up(INDEX_TIP, INDEX_PIP)
    }

    pub fn middle_up(&self) -> bool {
        self.is_finger_up(MIDDLE_TIP, MIDDLE_PIP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat_hand() -> Vec<f32> {
        (0..LANDMARK_COUNT)
            .flat_map(|i| [i as f32 / 40.0, 0.5, 0.0])
            .collect()
    }

    #[test]
    fn test_from_flat_reads_xyz_triples() {
        let frame = LandmarkFrame::from_flat(&flat_hand()).unwrap();
        assert_eq!(frame.landmark(WRIST), Landmark::new(0.0, 0.5, 0.0));
        assert!((frame.landmark(PINKY_TIP).x - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_short_frame_rejected() {
        let data = vec![0.5; 20 * FLOATS_PER_LANDMARK];
        assert_eq!(
            LandmarkFrame::from_flat(&data),
            Err(FrameError::TooFewLandmarks { expected: 21, actual: 20 })
        );

        let landmarks = [Landmark::default(); 5];
        assert!(LandmarkFrame::from_landmarks(&landmarks).is_err());
    }

    #[test]
    fn test_non_finite_rejected() {
        let mut data = flat_hand();
        data[INDEX_TIP * 3 + 1] = f32::NAN;
        assert_eq!(
            LandmarkFrame::from_flat(&data),
            Err(FrameError::NonFinite { index: INDEX_TIP })
        );

        data[INDEX_TIP * 3 + 1] = f32::INFINITY;
        assert!(LandmarkFrame::from_flat(&data).is_err());
    }

    #[test]
    fn test_second_hand_ignored() {
        let mut data = flat_hand();
        data.extend(std::iter::repeat(f32::NAN).take(63));
        assert!(LandmarkFrame::from_flat(&data).is_ok());
    }

    #[test]
    fn test_finger_up_uses_screen_y() {
        let mut landmarks = [Landmark::new(0.5, 0.5, 0.0); LANDMARK_COUNT];
        landmarks[INDEX_TIP].y = 0.3;
        landmarks[INDEX_PIP].y = 0.4;
        landmarks[MIDDLE_TIP].y = 0.6;
        landmarks[MIDDLE_PIP].y = 0.4;

        let frame = LandmarkFrame::from_landmarks(&landmarks).unwrap();
        assert!(frame.index_up());
        assert!(!frame.middle_up());
    }
}
