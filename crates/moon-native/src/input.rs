use winit::event::MouseScrollDelta;
use winit::keyboard::{Key, NamedKey};

/// What a key press asks the session to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Select(usize),
    Next,
    Prev,
    Quit,
}

/// Number keys pick events by position (`1` is the first), arrows cycle.
pub fn key_action(key: &Key) -> Option<Action> {
    match key {
        Key::Named(NamedKey::ArrowRight | NamedKey::ArrowDown) => Some(Action::Next),
        Key::Named(NamedKey::ArrowLeft | NamedKey::ArrowUp) => Some(Action::Prev),
        Key::Named(NamedKey::Escape) => Some(Action::Quit),
        Key::Character(c) => match c.as_str().parse::<usize>() {
            Ok(n @ 1..=9) => Some(Action::Select(n - 1)),
            _ => None,
        },
        _ => None,
    }
}

/// Zoom amount for a wheel event. winit reports wheel-up as positive, the
/// controls expect the DOM sign where positive moves away.
pub fn wheel_zoom(delta: MouseScrollDelta) -> f32 {
    let dy = match delta {
        MouseScrollDelta::LineDelta(_, y) => y,
        MouseScrollDelta::PixelDelta(p) => p.y as f32,
    };
    -dy
}

/// Left-button drag tracking in physical pixels.
#[derive(Debug, Default)]
pub struct DragState {
    active: bool,
    last: Option<(f64, f64)>,
}

impl DragState {
    pub fn press(&mut self) {
        self.active = true;
    }

    pub fn release(&mut self) {
        self.active = false;
    }

    /// Record a cursor position; returns the delta to orbit by while dragging.
    pub fn moved(&mut self, x: f64, y: f64) -> Option<(f32, f32)> {
        let prev = self.last.replace((x, y));
        if !self.active {
            return None;
        }
        let (px, py) = prev?;
        let (dx, dy) = ((x - px) as f32, (y - py) as f32);
        (dx != 0.0 || dy != 0.0).then_some((dx, dy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_select_by_position() {
        assert_eq!(key_action(&Key::Character("1".into())), Some(Action::Select(0)));
        assert_eq!(key_action(&Key::Character("5".into())), Some(Action::Select(4)));
        assert_eq!(key_action(&Key::Character("0".into())), None);
        assert_eq!(key_action(&Key::Character("a".into())), None);
    }

    #[test]
    fn named_keys() {
        assert_eq!(key_action(&Key::Named(NamedKey::ArrowRight)), Some(Action::Next));
        assert_eq!(key_action(&Key::Named(NamedKey::ArrowLeft)), Some(Action::Prev));
        assert_eq!(key_action(&Key::Named(NamedKey::Escape)), Some(Action::Quit));
        assert_eq!(key_action(&Key::Named(NamedKey::Enter)), None);
    }

    #[test]
    fn drag_reports_deltas_only_while_pressed() {
        let mut drag = DragState::default();
        assert_eq!(drag.moved(10.0, 10.0), None);
        drag.press();
        assert_eq!(drag.moved(15.0, 8.0), Some((5.0, -2.0)));
        assert_eq!(drag.moved(15.0, 8.0), None);
        drag.release();
        assert_eq!(drag.moved(30.0, 30.0), None);
    }

    #[test]
    fn wheel_up_zooms_in() {
        assert_eq!(wheel_zoom(MouseScrollDelta::LineDelta(0.0, 1.0)), -1.0);
        assert_eq!(wheel_zoom(MouseScrollDelta::LineDelta(0.0, -2.0)), 2.0);
        let pixels = MouseScrollDelta::PixelDelta(winit::dpi::PhysicalPosition::new(0.0, 3.0));
        assert_eq!(wheel_zoom(pixels), -3.0);
    }
}
