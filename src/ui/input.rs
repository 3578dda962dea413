//! Input state for UI interaction

use super::Rect;

/// Mouse state sampled once per frame
#[derive(Debug, Clone, Copy, Default)]
pub struct MouseState {
    pub x: f32,
    pub y: f32,
    pub left_down: bool,
    /// Just pressed this frame
    pub left_pressed: bool,
    /// Just released this frame
    pub left_released: bool,
    /// Scroll wheel delta
    pub scroll: f32,
}

impl MouseState {
    pub fn inside(&self, rect: &Rect) -> bool {
        rect.contains(self.x, self.y)
    }

    /// Held down inside a rect
    pub fn clicking(&self, rect: &Rect) -> bool {
        self.left_down && rect.contains(self.x, self.y)
    }

    /// Just clicked inside a rect
    pub fn clicked(&self, rect: &Rect) -> bool {
        self.left_pressed && rect.contains(self.x, self.y)
    }
}

/// Per-frame UI context: mouse state plus widget-id plumbing.
///
/// Widget ids are assigned by call order, so they stay stable across
/// frames as long as widgets draw in the same order.
pub struct UiContext {
    pub mouse: MouseState,
    /// Widget currently being dragged (slider thumb)
    dragging: Option<u64>,
    id_counter: u64,
    /// Real mouse state saved while a modal blanks background input
    saved_mouse: Option<MouseState>,
}

impl UiContext {
    pub fn new() -> Self {
        Self {
            mouse: MouseState::default(),
            dragging: None,
            id_counter: 0,
            saved_mouse: None,
        }
    }

    /// Reset at start of frame (call before any UI code)
    pub fn begin_frame(&mut self, mouse: MouseState) {
        self.mouse = mouse;
        self.id_counter = 0;
        self.saved_mouse = None;
        if !self.mouse.left_down {
            self.dragging = None;
        }
    }

    pub fn next_id(&mut self) -> u64 {
        self.id_counter += 1;
        self.id_counter
    }

    /// Blank the mouse so background widgets under a modal ignore input
    pub fn begin_modal(&mut self) {
        if self.saved_mouse.is_none() {
            self.saved_mouse = Some(self.mouse);
            self.mouse = MouseState {
                x: -1.0,
                y: -1.0,
                ..MouseState::default()
            };
        }
    }

    /// Restore the real mouse so the modal itself can receive input
    pub fn end_modal(&mut self) {
        if let Some(real) = self.saved_mouse.take() {
            self.mouse = real;
        }
    }

    pub fn start_drag(&mut self, id: u64) {
        self.dragging = Some(id);
    }

    pub fn is_dragging(&self, id: u64) -> bool {
        self.dragging == Some(id)
    }
}

impl Default for UiContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modal_blanks_and_restores_mouse() {
        let mut ctx = UiContext::new();
        ctx.begin_frame(MouseState {
            x: 40.0,
            y: 40.0,
            left_pressed: true,
            ..MouseState::default()
        });
        let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(ctx.mouse.clicked(&rect));

        ctx.begin_modal();
        assert!(!ctx.mouse.clicked(&rect));

        ctx.end_modal();
        assert!(ctx.mouse.clicked(&rect));
    }

    #[test]
    fn test_drag_clears_on_release() {
        let mut ctx = UiContext::new();
        ctx.begin_frame(MouseState {
            left_down: true,
            ..MouseState::default()
        });
        ctx.start_drag(7);
        assert!(ctx.is_dragging(7));

        ctx.begin_frame(MouseState::default());
        assert!(!ctx.is_dragging(7));
    }
}
