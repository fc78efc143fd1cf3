//! Scroll-origin arithmetic for panels whose content can exceed their
//! visible area.
//!
//! [`ScrollController`] only talks to the [`Viewport`] trait, so the same
//! rules apply whether the viewport is the in-memory [`ScrollState`] kept by
//! the dashboard or a widget owned by a rendering backend.

use crate::navigation::error::ViewportError;
use crate::navigation::state::ActionApplied;
use serde::Deserialize;
use serde::Serialize;
use tracing::debug;

/// Lines moved per scroll step.
pub const SCROLL_STEP: usize = 2;

/// Contract a scrollable panel exposes to the controller.
pub trait Viewport {
    fn origin(&self) -> (usize, usize);
    fn set_origin(&mut self, x: usize, y: usize) -> Result<(), ViewportError>;
    fn size(&self) -> (usize, usize);
    fn buffer_line_count(&self) -> usize;
    fn set_autoscroll(&mut self, enabled: bool);
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollState {
    origin_x: usize,
    origin_y: usize,
    width: usize,
    height: usize,
    content_length: usize,
    autoscroll: bool,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self {
            origin_x: 0,
            origin_y: 0,
            width: 1,
            height: 1,
            content_length: 0,
            autoscroll: true,
        }
    }
}

impl ScrollState {
    pub fn autoscroll(&self) -> bool {
        self.autoscroll
    }

    pub fn content_length(&self) -> usize {
        self.content_length
    }

    /// Records the visible area of the panel. A zero height is treated as one
    /// line so the viewport never degenerates.
    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width.max(1);
        self.height = height.max(1);
        self.settle();
    }

    /// Records how many lines the panel currently holds.
    pub fn set_content_length(&mut self, lines: usize) {
        self.content_length = lines;
        self.settle();
    }

    fn max_origin(&self) -> usize {
        self.content_length.saturating_sub(self.height)
    }

    fn settle(&mut self) {
        if self.autoscroll {
            self.origin_y = self.max_origin();
        } else {
            self.origin_y = self.origin_y.min(self.max_origin());
        }
    }
}

impl Viewport for ScrollState {
    fn origin(&self) -> (usize, usize) {
        (self.origin_x, self.origin_y)
    }

    fn set_origin(&mut self, x: usize, y: usize) -> Result<(), ViewportError> {
        if y > self.max_origin() {
            return Err(ViewportError::OriginOutOfRange {
                row: y,
                lines: self.content_length,
            });
        }
        self.origin_x = x;
        self.origin_y = y;
        Ok(())
    }

    fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    fn buffer_line_count(&self) -> usize {
        self.content_length
    }

    fn set_autoscroll(&mut self, enabled: bool) {
        self.autoscroll = enabled;
        if enabled {
            self.settle();
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ScrollController;

impl ScrollController {
    pub fn scroll_up<V>(&self, view: &mut V) -> Result<ActionApplied, ViewportError>
    where
        V: Viewport + ?Sized,
    {
        view.set_autoscroll(false);
        let (x, y) = view.origin();
        let target = y.saturating_sub(SCROLL_STEP);
        if target == y {
            return Ok(ActionApplied::NoChange);
        }
        debug!(from = y, to = target, "scroll up");
        view.set_origin(x, target)?;
        Ok(ActionApplied::StateChanged)
    }

    pub fn scroll_down<V>(&self, view: &mut V) -> Result<ActionApplied, ViewportError>
    where
        V: Viewport + ?Sized,
    {
        view.set_autoscroll(false);
        let (x, y) = view.origin();
        let (_, reserved_lines) = view.size();
        let total_lines = view.buffer_line_count();
        if y + reserved_lines >= total_lines {
            return Ok(ActionApplied::NoChange);
        }
        let target = (y + SCROLL_STEP).min(total_lines - reserved_lines);
        debug!(from = y, to = target, "scroll down");
        view.set_origin(x, target)?;
        Ok(ActionApplied::StateChanged)
    }

    pub fn scroll_to_top<V>(&self, view: &mut V) -> Result<ActionApplied, ViewportError>
    where
        V: Viewport + ?Sized,
    {
        view.set_autoscroll(false);
        let (x, y) = view.origin();
        if y == 0 {
            return Ok(ActionApplied::NoChange);
        }
        debug!(from = y, to = 0, "scroll to top");
        view.set_origin(x, 0)?;
        Ok(ActionApplied::StateChanged)
    }

    /// Jumps to the last page and keeps following appended content.
    pub fn follow_tail<V>(&self, view: &mut V) -> Result<ActionApplied, ViewportError>
    where
        V: Viewport + ?Sized,
    {
        let before = view.origin();
        let (_, height) = view.size();
        let bottom = view.buffer_line_count().saturating_sub(height);
        debug!(from = before.1, to = bottom, "follow tail");
        view.set_origin(before.0, bottom)?;
        view.set_autoscroll(true);
        if view.origin() == before {
            Ok(ActionApplied::NoChange)
        } else {
            Ok(ActionApplied::StateChanged)
        }
    }
}
