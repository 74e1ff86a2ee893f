//! Output boundary of the pointer core
//!
//! The core never touches the page itself. Whatever draws the cursor or
//! injects real clicks implements `PointerSink`.

use std::convert::Infallible;

use super::click::ClickAction;
use super::interpreter::CursorState;

pub trait PointerSink {
    /// Failure type of the host. Returned unchanged to whoever fed the frame.
    type Error;

    /// Called once per processed frame with the current cursor state
    fn on_frame(&mut self, state: &CursorState) -> Result<(), Self::Error>;

    /// Called at most once per pinch, on the rising edge
    fn on_click(&mut self, click: ClickAction) -> Result<(), Self::Error>;
}

/// Holds one frame's output for later delivery
///
/// Lets a caller finish processing (and release whatever the controller is
/// stored in) before the real sink runs, so the real sink is free to call
/// back into that storage.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameEvents {
    pub frame: Option<CursorState>,
    pub click: Option<ClickAction>,
}

impl FrameEvents {
    pub fn is_empty(&self) -> bool {
        self.frame.is_none() && self.click.is_none()
    }

    /// Deliver the held output, frame first, then click
    pub fn replay<S: PointerSink>(self, sink: &mut S) -> Result<(), S::Error> {
        if let Some(state) = self.frame {
            sink.on_frame(&state)?;
        }
        if let Some(click) = self.click {
            sink.on_click(click)?;
        }
        Ok(())
    }
}

impl PointerSink for FrameEvents {
    type Error = Infallible;

    fn on_frame(&mut self, state: &CursorState) -> Result<(), Infallible> {
        self.frame = Some(*state);
        Ok(())
    }

    fn on_click(&mut self, click: ClickAction) -> Result<(), Infallible> {
        self.click = Some(click);
        Ok(())
    }
}
