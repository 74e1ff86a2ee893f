//! Bridge state without any JS in it
//!
//! Holds the running session (controller plus sink) and the settings template
//! for the next activation. `session.rs` keeps one of these in a
//! `thread_local!` and only borrows it long enough to call a method here, so
//! every policy below runs under native `cargo test`.

use crate::pointer::{
    smoothing_factor, ActiveRegion, ConfigError, CursorState, FrameError, FrameEvents,
    PointerConfig, PointerController, PointerMode, PointerSink,
};

struct PointerSession<S> {
    controller: PointerController,
    sink: S,
}

pub struct BridgeState<S> {
    /// Live session, `None` while the camera is off
    session: Option<PointerSession<S>>,
    /// Settings for the next activation
    config: PointerConfig,
}

impl<S> Default for BridgeState<S> {
    fn default() -> Self {
        Self {
            session: None,
            config: PointerConfig::default(),
        }
    }
}

/// What became of one tracking callback
///
/// `Deliver` carries the output together with a handle to the sink, so the
/// caller can hand it over after the state is no longer borrowed.
pub enum FrameDispatch<S> {
    Inactive,
    NoHand,
    Rejected(FrameError),
    Deliver { events: FrameEvents, sink: S },
}

impl<S: PointerSink + Clone> BridgeState<S> {
    /// Replace any running session with a fresh one
    ///
    /// On error nothing changes: the old session keeps running and the
    /// template keeps its previous values.
    pub fn activate(&mut self, config: PointerConfig, sink: S) -> Result<(), ConfigError> {
        let controller = PointerController::new(config)?;
        self.config = config;
        self.session = Some(PointerSession { controller, sink });
        Ok(())
    }

    /// Drop the session, returning its controller for the stop summary
    pub fn deactivate(&mut self) -> Option<PointerController> {
        self.session.take().map(|session| session.controller)
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Settings the next activation will use
    pub fn settings(&self) -> PointerConfig {
        self.config
    }

    pub fn controller(&self) -> Option<&PointerController> {
        self.session.as_ref().map(|session| &session.controller)
    }

    /// Run one frame through the controller, collecting its output
    pub fn process_flat(&mut self, hand: Option<&[f32]>) -> FrameDispatch<S> {
        let session = match self.session.as_mut() {
            Some(session) => session,
            None => return FrameDispatch::Inactive,
        };

        let mut events = FrameEvents::default();
        let processed = session
            .controller
            .process_flat(hand, &mut events)
            .unwrap_or_else(|never| match never {});

        match (processed, session.controller.last_rejection()) {
            (Some(_), _) => FrameDispatch::Deliver {
                events,
                sink: session.sink.clone(),
            },
            (None, Some(err)) => FrameDispatch::Rejected(err),
            (None, None) => FrameDispatch::NoHand,
        }
    }

    /// Store a new smoothing factor, applying it to the session if one runs
    pub fn set_smoothing_factor(&mut self, factor: u32) -> Result<(), ConfigError> {
        smoothing_factor(factor)?;
        if let Some(session) = self.session.as_mut() {
            session.controller.set_smoothing_factor(factor)?;
        }
        self.config.smoothing_factor = factor;
        Ok(())
    }

    /// Store a new screen size, retargeting the session if one runs
    pub fn set_screen_size(&mut self, width: f32, height: f32) -> Result<(), ConfigError> {
        let config = self.config.with_screen_size(width, height);
        config.validate()?;
        if let Some(session) = self.session.as_mut() {
            session.controller.set_screen_size(width, height)?;
        }
        self.config = config;
        Ok(())
    }

    /// Region of the running session, or the one the next activation gets
    pub fn active_region(&self) -> Option<ActiveRegion> {
        match &self.session {
            Some(session) => Some(*session.controller.active_region()),
            None => ActiveRegion::from_config(&self.config).ok(),
        }
    }

    pub fn cursor(&self) -> Option<&CursorState> {
        self.controller().map(PointerController::cursor)
    }
}

/// `[x, y, width, height]` in camera pixels
pub fn region_snapshot(region: &ActiveRegion) -> Vec<f32> {
    let (min, max) = (region.min(), region.max());
    vec![min.x, min.y, max.x - min.x, max.y - min.y]
}

/// `[x, y, isClicking, isMoving, pinchX, pinchY]`
///
/// Flags are 0 or 1. The pinch point is in camera pixels and NaN when the
/// fingers are not pinching.
pub fn cursor_snapshot(cursor: &CursorState) -> Vec<f32> {
    let flag = |on: bool| if on { 1.0 } else { 0.0 };
    let (pinch_x, pinch_y) = cursor
        .pinch_point
        .map_or((f32::NAN, f32::NAN), |point| (point.x, point.y));
    vec![
        cursor.x,
        cursor.y,
        flag(cursor.is_clicking),
        flag(cursor.mode == PointerMode::Moving),
        pinch_x,
        pinch_y,
    ]
}
