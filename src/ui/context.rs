use super::Size;

/// Per-frame host state the tooltip pulls before updating.
///
/// Implemented by whatever owns the window and the game's modal state.
/// `viewport_size` returns `None` when no player view exists yet (main menu
/// boot, headless tests); placement then degrades to a zero anchor.
pub trait ViewportContext {
    /// True while a blocking menu or other modal owns the screen.
    fn is_game_busy(&self) -> bool;
    /// Cursor position in the tooltip layer's local space.
    fn cursor_position(&self) -> (f32, f32);
    fn viewport_size(&self) -> Option<Size>;
}

/// Plain snapshot of host state for one frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameContext {
    pub busy: bool,
    pub cursor: (f32, f32),
    pub viewport: Option<Size>,
}

impl FrameContext {
    pub fn new(cursor: (f32, f32), viewport: Size) -> Self {
        Self {
            busy: false,
            cursor,
            viewport: Some(viewport),
        }
    }
}

impl ViewportContext for FrameContext {
    fn is_game_busy(&self) -> bool {
        self.busy
    }

    fn cursor_position(&self) -> (f32, f32) {
        self.cursor
    }

    fn viewport_size(&self) -> Option<Size> {
        self.viewport
    }
}
