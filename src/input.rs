// Pure pointer/wheel helpers; no web-sys types so host tests can include this file.
use crate::constants::{
    DOM_DELTA_LINE, DOM_DELTA_PAGE, WHEEL_MAX_STEPS_PER_EVENT, WHEEL_PIXELS_PER_LINE,
    WHEEL_PIXELS_PER_PAGE, WHEEL_PIXELS_PER_STEP,
};
use glam::Vec2;

/// Tracks one captured pointer while it drags the view.
#[derive(Default, Clone, Copy, Debug)]
pub struct DragState {
    pub pointer_id: Option<i32>,
    pub last: Vec2,
}

impl DragState {
    pub fn is_active(&self) -> bool {
        self.pointer_id.is_some()
    }

    pub fn begin(&mut self, pointer_id: i32, pos: Vec2) {
        self.pointer_id = Some(pointer_id);
        self.last = pos;
    }

    /// Movement since the previous event for the captured pointer, in canvas pixels.
    pub fn update(&mut self, pointer_id: i32, pos: Vec2) -> Option<Vec2> {
        if self.pointer_id != Some(pointer_id) {
            return None;
        }
        let delta = pos - self.last;
        self.last = pos;
        (delta != Vec2::ZERO).then_some(delta)
    }

    /// Returns whether `pointer_id` was the one dragging.
    pub fn end(&mut self, pointer_id: i32) -> bool {
        if self.pointer_id == Some(pointer_id) {
            self.pointer_id = None;
            true
        } else {
            false
        }
    }
}

/// Convert a wheel event into signed zoom steps. Negative means closer
/// (wheel up), following the DOM `deltaY` sign.
pub fn wheel_steps(delta_y: f64, delta_mode: u32) -> i32 {
    let px = delta_y as f32
        * match delta_mode {
            DOM_DELTA_LINE => WHEEL_PIXELS_PER_LINE,
            DOM_DELTA_PAGE => WHEEL_PIXELS_PER_PAGE,
            _ => 1.0,
        };
    if px == 0.0 || px.is_nan() {
        return 0;
    }
    let steps = (px / WHEEL_PIXELS_PER_STEP)
        .abs()
        .round()
        .clamp(1.0, WHEEL_MAX_STEPS_PER_EVENT);
    steps as i32 * px.signum() as i32
}

/// Map a client-space point to canvas backing pixels given the canvas's CSS rect.
#[inline]
pub fn client_to_canvas_px(
    client: Vec2,
    rect_origin: Vec2,
    rect_size: Vec2,
    backing: (u32, u32),
) -> Vec2 {
    if rect_size.x <= 0.0 || rect_size.y <= 0.0 {
        return Vec2::ZERO;
    }
    let rel = (client - rect_origin) / rect_size;
    rel * Vec2::new(backing.0 as f32, backing.1 as f32)
}
