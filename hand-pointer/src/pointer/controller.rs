//! Pointer controller - one activation session of hand pointing
//!
//! Owns the interpreter and the click edge detector, validates incoming
//! frames and drives the sink. Build a fresh controller per activation so
//! no position or click state leaks between sessions.

use tracing::{debug, trace};

use super::click::ClickEdgeDetector;
use super::config::{smoothing_factor, ConfigError, PointerConfig};
use super::frame::{FrameError, Landmark, LandmarkFrame};
use super::interpreter::{CursorState, GestureInterpreter};
use super::mapper::ActiveRegion;
use super::sink::PointerSink;

pub struct PointerController {
    config: PointerConfig,
    interpreter: GestureInterpreter,
    clicks: ClickEdgeDetector,
    frames_processed: u64,
    frames_rejected: u64,
    /// Why the most recent frame was refused, cleared by the next frame
    last_rejection: Option<FrameError>,
}

impl PointerController {
    /// Fails fast on an unusable configuration (e.g. an empty active region)
    pub fn new(config: PointerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let region = ActiveRegion::from_config(&config)?;
        let smoothing = smoothing_factor(config.smoothing_factor)?;

        debug!(
            margin = config.frame_reduction_margin,
            smoothing = config.smoothing_factor,
            pinch_threshold = config.pinch_threshold_px,
            screen_width = config.screen_width,
            screen_height = config.screen_height,
            "pointer controller created"
        );

        Ok(Self {
            config,
            interpreter: GestureInterpreter::new(region, smoothing, config.pinch_threshold_px),
            clicks: ClickEdgeDetector::new(),
            frames_processed: 0,
            frames_rejected: 0,
            last_rejection: None,
        })
    }

    /// Process one tracking callback
    ///
    /// `None` means no hand was detected. Both that and a malformed frame
    /// leave the state untouched and the sink is not called; `Ok(None)` is
    /// returned. Sink errors are passed straight back.
    pub fn process<S: PointerSink>(
        &mut self,
        landmarks: Option<&[Landmark]>,
        sink: &mut S,
    ) -> Result<Option<CursorState>, S::Error> {
        let frame = landmarks.map(LandmarkFrame::from_landmarks);
        self.dispatch(frame, sink)
    }

    /// Same as `process`, for a flat `[x, y, z] * 21` array
    pub fn process_flat<S: PointerSink>(
        &mut self,
        data: Option<&[f32]>,
        sink: &mut S,
    ) -> Result<Option<CursorState>, S::Error> {
        let frame = data.map(LandmarkFrame::from_flat);
        self.dispatch(frame, sink)
    }

    /// Process an already validated frame
    pub fn process_frame<S: PointerSink>(
        &mut self,
        frame: &LandmarkFrame,
        sink: &mut S,
    ) -> Result<CursorState, S::Error> {
        let state = self.interpreter.interpret(frame);
        let click = self.clicks.update(&state);
        self.frames_processed += 1;

        trace!(
            x = state.x,
            y = state.y,
            clicking = state.is_clicking,
            mode = state.mode.name(),
            "frame"
        );

        sink.on_frame(&state)?;
        if let Some(click) = click {
            debug!(x = click.x, y = click.y, "click");
            sink.on_click(click)?;
        }
        Ok(state)
    }

    fn dispatch<S: PointerSink>(
        &mut self,
        frame: Option<Result<LandmarkFrame, FrameError>>,
        sink: &mut S,
    ) -> Result<Option<CursorState>, S::Error> {
        self.last_rejection = None;
        match frame {
            None => Ok(None),
            Some(Err(err)) => {
                self.frames_rejected += 1;
                self.last_rejection = Some(err);
                debug!(%err, "hand frame rejected");
                Ok(None)
            }
            Some(Ok(frame)) => self.process_frame(&frame, sink).map(Some),
        }
    }

    /// Change smoothing between frames without moving the cursor
    pub fn set_smoothing_factor(&mut self, factor: u32) -> Result<(), ConfigError> {
        let smoothing = smoothing_factor(factor)?;
        self.interpreter.set_smoothing(smoothing);
        self.config.smoothing_factor = factor;
        Ok(())
    }

    /// Retarget the active region onto a new screen size
    pub fn set_screen_size(&mut self, width: f32, height: f32) -> Result<(), ConfigError> {
        let region = self
            .interpreter
            .region()
            .with_screen(nalgebra::Vector2::new(width, height))?;
        self.interpreter.set_region(region);
        self.config.screen_width = width;
        self.config.screen_height = height;
        Ok(())
    }

    /// Neutral state: cursor at the origin, no pinch in progress
    pub fn reset(&mut self) {
        self.interpreter.reset();
        self.clicks.reset();
    }

    pub fn cursor(&self) -> &CursorState {
        self.interpreter.state()
    }

    pub fn active_region(&self) -> &ActiveRegion {
        self.interpreter.region()
    }

    pub fn config(&self) -> &PointerConfig {
        &self.config
    }

    pub fn frames_processed(&self) -> u64 {
        self.frames_processed
    }

    pub fn frames_rejected(&self) -> u64 {
        self.frames_rejected
    }

    /// Set when the last `process`/`process_flat` call refused its frame
    pub fn last_rejection(&self) -> Option<FrameError> {
        self.last_rejection
    }
}
