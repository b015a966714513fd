//! Adapter to convert winit key events to our KeyEvent type
//!
//! Physical key codes are used so the name is always the unshifted key
//! (the translator applies shift itself). Names follow a US layout.

use winit::event::ElementState;
use winit::keyboard::{KeyCode as WinitKeyCode, PhysicalKey};

use super::types::{KeyEvent, KeyState, RawKey};

/// Platform key name for a physical key code
fn key_name(code: WinitKeyCode) -> Option<&'static str> {
    let name = match code {
        WinitKeyCode::KeyA => "a",
        WinitKeyCode::KeyB => "b",
        WinitKeyCode::KeyC => "c",
        WinitKeyCode::KeyD => "d",
        WinitKeyCode::KeyE => "e",
        WinitKeyCode::KeyF => "f",
        WinitKeyCode::KeyG => "g",
        WinitKeyCode::KeyH => "h",
        WinitKeyCode::KeyI => "i",
        WinitKeyCode::KeyJ => "j",
        WinitKeyCode::KeyK => "k",
        WinitKeyCode::KeyL => "l",
        WinitKeyCode::KeyM => "m",
        WinitKeyCode::KeyN => "n",
        WinitKeyCode::KeyO => "o",
        WinitKeyCode::KeyP => "p",
        WinitKeyCode::KeyQ => "q",
        WinitKeyCode::KeyR => "r",
        WinitKeyCode::KeyS => "s",
        WinitKeyCode::KeyT => "t",
        WinitKeyCode::KeyU => "u",
        WinitKeyCode::KeyV => "v",
        WinitKeyCode::KeyW => "w",
        WinitKeyCode::KeyX => "x",
        WinitKeyCode::KeyY => "y",
        WinitKeyCode::KeyZ => "z",

        WinitKeyCode::Digit0 | WinitKeyCode::Numpad0 => "0",
        WinitKeyCode::Digit1 | WinitKeyCode::Numpad1 => "1",
        WinitKeyCode::Digit2 | WinitKeyCode::Numpad2 => "2",
        WinitKeyCode::Digit3 | WinitKeyCode::Numpad3 => "3",
        WinitKeyCode::Digit4 | WinitKeyCode::Numpad4 => "4",
        WinitKeyCode::Digit5 | WinitKeyCode::Numpad5 => "5",
        WinitKeyCode::Digit6 | WinitKeyCode::Numpad6 => "6",
        WinitKeyCode::Digit7 | WinitKeyCode::Numpad7 => "7",
        WinitKeyCode::Digit8 | WinitKeyCode::Numpad8 => "8",
        WinitKeyCode::Digit9 | WinitKeyCode::Numpad9 => "9",

        WinitKeyCode::Minus | WinitKeyCode::NumpadSubtract => "-",
        WinitKeyCode::Equal => "=",
        WinitKeyCode::Backquote => "`",
        WinitKeyCode::Quote => "'",
        WinitKeyCode::Comma => ",",
        WinitKeyCode::Period | WinitKeyCode::NumpadDecimal => ".",
        WinitKeyCode::Slash | WinitKeyCode::NumpadDivide => "/",
        WinitKeyCode::Semicolon => ";",
        WinitKeyCode::BracketLeft => "[",
        WinitKeyCode::BracketRight => "]",
        WinitKeyCode::Backslash => "\\",
        WinitKeyCode::NumpadAdd => "+",
        WinitKeyCode::NumpadMultiply => "*",

        WinitKeyCode::ShiftLeft => "left shift",
        WinitKeyCode::ShiftRight => "right shift",
        WinitKeyCode::ControlLeft => "left ctrl",
        WinitKeyCode::ControlRight => "right ctrl",
        WinitKeyCode::AltLeft => "left alt",
        WinitKeyCode::AltRight => "right alt",
        WinitKeyCode::SuperLeft => "left meta",
        WinitKeyCode::SuperRight => "right meta",
        WinitKeyCode::CapsLock => "caps lock",
        WinitKeyCode::NumLock => "numlock",
        WinitKeyCode::ScrollLock => "scroll lock",
        WinitKeyCode::PrintScreen => "print screen",

        WinitKeyCode::ArrowUp => "up",
        WinitKeyCode::ArrowDown => "down",
        WinitKeyCode::ArrowLeft => "left",
        WinitKeyCode::ArrowRight => "right",
        WinitKeyCode::PageUp => "page up",
        WinitKeyCode::PageDown => "page down",
        WinitKeyCode::Home => "home",
        WinitKeyCode::End => "end",
        WinitKeyCode::Insert => "insert",
        WinitKeyCode::Delete => "delete",
        WinitKeyCode::Escape => "escape",

        WinitKeyCode::F1 => "f1",
        WinitKeyCode::F2 => "f2",
        WinitKeyCode::F3 => "f3",
        WinitKeyCode::F4 => "f4",
        WinitKeyCode::F5 => "f5",
        WinitKeyCode::F6 => "f6",
        WinitKeyCode::F7 => "f7",
        WinitKeyCode::F8 => "f8",
        WinitKeyCode::F9 => "f9",
        WinitKeyCode::F10 => "f10",
        WinitKeyCode::F11 => "f11",
        WinitKeyCode::F12 => "f12",

        _ => return None,
    };
    Some(name)
}

/// Convert a physical key to a raw key.
///
/// Returns None if the key cannot be mapped (e.g., unknown keys)
pub fn raw_key_from_winit(physical_key: PhysicalKey) -> Option<RawKey> {
    let PhysicalKey::Code(code) = physical_key else {
        return None;
    };
    match code {
        WinitKeyCode::Tab => Some(RawKey::Tab),
        WinitKeyCode::Backspace => Some(RawKey::Backspace),
        WinitKeyCode::Enter | WinitKeyCode::NumpadEnter => Some(RawKey::Enter),
        WinitKeyCode::Space => Some(RawKey::Space),
        other => key_name(other).map(RawKey::named),
    }
}

/// Convert winit key event data to our KeyEvent type
pub fn key_event_from_winit(physical_key: PhysicalKey, state: ElementState) -> Option<KeyEvent> {
    let state = match state {
        ElementState::Pressed => KeyState::Pressed,
        ElementState::Released => KeyState::Released,
    };
    raw_key_from_winit(physical_key).map(|key| KeyEvent::new(key, state))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_key() {
        let event =
            key_event_from_winit(PhysicalKey::Code(WinitKeyCode::KeyS), ElementState::Pressed);
        assert_eq!(event, Some(KeyEvent::pressed(RawKey::named("s"))));
    }

    #[test]
    fn test_whitespace_keys() {
        assert_eq!(
            raw_key_from_winit(PhysicalKey::Code(WinitKeyCode::Tab)),
            Some(RawKey::Tab)
        );
        assert_eq!(
            raw_key_from_winit(PhysicalKey::Code(WinitKeyCode::NumpadEnter)),
            Some(RawKey::Enter)
        );
        assert_eq!(
            raw_key_from_winit(PhysicalKey::Code(WinitKeyCode::Space)),
            Some(RawKey::Space)
        );
    }

    #[test]
    fn test_modifier_release() {
        let event = key_event_from_winit(
            PhysicalKey::Code(WinitKeyCode::ShiftLeft),
            ElementState::Released,
        );
        assert_eq!(event, Some(KeyEvent::released(RawKey::named("left shift"))));
    }

    #[test]
    fn test_navigation_names() {
        assert_eq!(
            raw_key_from_winit(PhysicalKey::Code(WinitKeyCode::PageDown)),
            Some(RawKey::named("page down"))
        );
        assert_eq!(
            raw_key_from_winit(PhysicalKey::Code(WinitKeyCode::ArrowLeft)),
            Some(RawKey::named("left"))
        );
    }

    #[test]
    fn test_unmapped_key() {
        assert_eq!(
            raw_key_from_winit(PhysicalKey::Code(WinitKeyCode::MediaPlayPause)),
            None
        );
    }
}
