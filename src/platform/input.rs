//! Raw input -> intents
//!
//! Keyboard, mouse and touch handling. The mapper only tracks pointer drag
//! state; whether an intent is honored is decided by the simulation.

use crate::Settings;
use crate::sim::Intent;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Fire,
    Menu,
    Other,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value
    pub fn from_key_name(name: &str) -> Self {
        match name {
            "ArrowLeft" | "a" | "A" => Key::Left,
            "ArrowRight" | "d" | "D" => Key::Right,
            " " | "Space" => Key::Fire,
            "Escape" => Key::Menu,
            _ => Key::Other,
        }
    }
}

/// Platform input events, in screen pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawInput {
    KeyDown(Key),
    PointerDown { x: f32 },
    PointerMove { x: f32 },
    PointerUp,
    /// Mouse click; fires unless the pointer was dragged
    Click { x: f32 },
    /// Finger lifted; always fires
    TouchEnd,
}

/// Tracks an in-progress drag
#[derive(Debug, Clone, Default)]
pub struct InputMapper {
    dragging: bool,
    /// Pointer x at the last processed move
    last_x: f32,
    /// Pointer x where the press started
    press_x: f32,
}

impl InputMapper {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Translate one raw event, appending any resulting intents to `out`
    pub fn map(&mut self, input: RawInput, settings: &Settings, out: &mut Vec<Intent>) {
        match input {
            RawInput::KeyDown(Key::Left) => out.push(Intent::MoveShipBy(-settings.keyboard_step)),
            RawInput::KeyDown(Key::Right) => out.push(Intent::MoveShipBy(settings.keyboard_step)),
            RawInput::KeyDown(Key::Fire) => out.push(Intent::Fire),
            RawInput::KeyDown(Key::Menu) => out.push(Intent::TogglePanel),
            RawInput::KeyDown(Key::Other) => {}
            RawInput::PointerDown { x } => {
                self.dragging = true;
                self.last_x = x;
                self.press_x = x;
            }
            RawInput::PointerMove { x } => {
                if self.dragging {
                    let dx = (x - self.last_x) * settings.drag_sensitivity;
                    self.last_x = x;
                    if dx != 0.0 {
                        out.push(Intent::MoveShipBy(dx));
                    }
                }
            }
            RawInput::PointerUp => self.dragging = false,
            RawInput::Click { x } => {
                if (x - self.press_x).abs() <= settings.tap_slop {
                    out.push(Intent::Fire);
                }
            }
            RawInput::TouchEnd => {
                self.dragging = false;
                out.push(Intent::Fire);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map_all(events: &[RawInput]) -> Vec<Intent> {
        let settings = Settings::default();
        let mut mapper = InputMapper::new();
        let mut out = Vec::new();
        for &event in events {
            mapper.map(event, &settings, &mut out);
        }
        out
    }

    #[test]
    fn test_key_names() {
        assert_eq!(Key::from_key_name("ArrowLeft"), Key::Left);
        assert_eq!(Key::from_key_name("D"), Key::Right);
        assert_eq!(Key::from_key_name(" "), Key::Fire);
        assert_eq!(Key::from_key_name("Escape"), Key::Menu);
        assert_eq!(Key::from_key_name("q"), Key::Other);
    }

    #[test]
    fn test_keyboard_moves_by_step() {
        let intents = map_all(&[
            RawInput::KeyDown(Key::Left),
            RawInput::KeyDown(Key::Right),
            RawInput::KeyDown(Key::Fire),
            RawInput::KeyDown(Key::Menu),
        ]);
        assert_eq!(
            intents,
            vec![
                Intent::MoveShipBy(-8.0),
                Intent::MoveShipBy(8.0),
                Intent::Fire,
                Intent::TogglePanel,
            ]
        );
    }

    #[test]
    fn test_drag_scaled_by_sensitivity() {
        let intents = map_all(&[
            RawInput::PointerDown { x: 100.0 },
            RawInput::PointerMove { x: 110.0 },
            RawInput::PointerMove { x: 105.0 },
            RawInput::PointerUp,
            RawInput::PointerMove { x: 300.0 },
        ]);
        assert_eq!(intents, vec![Intent::MoveShipBy(8.0), Intent::MoveShipBy(-4.0)]);
    }

    #[test]
    fn test_click_after_drag_does_not_fire() {
        let intents = map_all(&[
            RawInput::PointerDown { x: 100.0 },
            RawInput::PointerMove { x: 150.0 },
            RawInput::PointerUp,
            RawInput::Click { x: 150.0 },
        ]);
        assert!(!intents.contains(&Intent::Fire));
    }

    #[test]
    fn test_click_in_place_fires() {
        let intents = map_all(&[
            RawInput::PointerDown { x: 100.0 },
            RawInput::PointerUp,
            RawInput::Click { x: 104.0 },
        ]);
        assert_eq!(intents, vec![Intent::Fire]);
    }

    #[test]
    fn test_touch_end_fires_and_stops_drag() {
        let settings = Settings::default();
        let mut mapper = InputMapper::new();
        let mut out = Vec::new();
        mapper.map(RawInput::PointerDown { x: 10.0 }, &settings, &mut out);
        assert!(mapper.is_dragging());
        mapper.map(RawInput::TouchEnd, &settings, &mut out);
        assert!(!mapper.is_dragging());
        assert_eq!(out, vec![Intent::Fire]);
    }
}
