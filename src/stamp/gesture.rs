//! Click gesture handling and the blur brush tool lifecycle.

use crate::image::{PixelBuffer, TileRect};
use crate::trace::trace_event;

/// Pointer position in canvas coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Pixel containing the point.
    pub fn to_pixel(self) -> (i64, i64) {
        (self.x.floor() as i64, self.y.floor() as i64)
    }
}

/// Brush settings captured when the tool is started.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BrushConfig {
    /// Side of the stamped square in canvas pixels.
    pub width: u32,
    /// Blur strength; see [`crate::BlurRadius::normalize`].
    pub strength: f32,
}

impl Default for BrushConfig {
    fn default() -> Self {
        Self {
            width: 500,
            strength: 2.0,
        }
    }
}

/// Cursor the host should show while the tool is active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Cursor {
    #[default]
    Default,
    Crosshair,
}

/// Press/release tracking for a single click.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum GestureState {
    #[default]
    Idle,
    Pressed { at: Point },
}

/// A drawing tool that commits discrete stamps onto a canvas.
pub trait StampTool {
    type Config;

    /// Arms the tool with `config`.
    fn start(&mut self, config: Self::Config);

    /// Disarms the tool and drops any half-finished gesture.
    fn end(&mut self);

    /// Applies one stamp at `at` with the current configuration.
    fn stamp(&self, canvas: &mut PixelBuffer, at: Point) -> Option<TileRect>;
}

/// Click-to-blur brush.
///
/// A stamp is committed only when the pointer is released exactly where it
/// was pressed; any drag in between cancels the gesture.
#[derive(Debug, Default)]
pub struct BlurBrush {
    config: BrushConfig,
    state: GestureState,
    armed: bool,
}

impl BlurBrush {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current configuration, for callers that snapshot tool state.
    pub fn config(&self) -> BrushConfig {
        self.config
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn cursor(&self) -> Cursor {
        if self.armed {
            Cursor::Crosshair
        } else {
            Cursor::Default
        }
    }

    /// Object selection stays off while the brush is armed.
    pub fn selection_enabled(&self) -> bool {
        !self.armed
    }

    /// Records a press. Ignored while the tool is not armed.
    pub fn pointer_down(&mut self, at: Point) {
        if !self.armed {
            trace_event!("gesture_ignored", reason = "not armed");
            return;
        }
        self.state = GestureState::Pressed { at };
    }

    /// Finishes a gesture, stamping the canvas if it was a click.
    pub fn pointer_up(&mut self, canvas: &mut PixelBuffer, at: Point) -> Option<TileRect> {
        let pressed = match std::mem::take(&mut self.state) {
            GestureState::Pressed { at } => at,
            GestureState::Idle => return None,
        };
        if pressed != at {
            trace_event!("gesture_ignored", reason = "drag");
            return None;
        }
        self.stamp(canvas, at)
    }
}

impl StampTool for BlurBrush {
    type Config = BrushConfig;

    fn start(&mut self, config: BrushConfig) {
        self.config = config;
        self.state = GestureState::Idle;
        self.armed = true;
    }

    fn end(&mut self) {
        self.state = GestureState::Idle;
        self.armed = false;
    }

    fn stamp(&self, canvas: &mut PixelBuffer, at: Point) -> Option<TileRect> {
        let (x, y) = at.to_pixel();
        super::stamp(canvas, x, y, self.config.width, self.config.strength)
    }
}
