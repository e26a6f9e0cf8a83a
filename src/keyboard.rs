/// In-page keyboard shortcut: Cmd/Ctrl + Shift + A

const KEY_A: u32 = 65;

/// The modifier state and key code of a keydown event
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyPress {
    pub meta: bool,
    pub ctrl: bool,
    pub shift: bool,
    pub key_code: u32,
}

impl KeyPress {
    pub fn from_event(event: &web_sys::KeyboardEvent) -> Self {
        KeyPress {
            meta: event.meta_key(),
            ctrl: event.ctrl_key(),
            shift: event.shift_key(),
            key_code: event.key_code(),
        }
    }
}

pub fn is_toggle_shortcut(key: &KeyPress) -> bool {
    (key.meta || key.ctrl) && key.shift && key.key_code == KEY_A
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(meta: bool, ctrl: bool, shift: bool, key_code: u32) -> KeyPress {
        KeyPress { meta, ctrl, shift, key_code }
    }

    #[test]
    fn test_shortcut_accepted() {
        assert!(is_toggle_shortcut(&press(true, false, true, 65)));
        assert!(is_toggle_shortcut(&press(false, true, true, 65)));
        assert!(is_toggle_shortcut(&press(true, true, true, 65)));
    }

    #[test]
    fn test_shortcut_rejected() {
        assert!(!is_toggle_shortcut(&press(false, false, true, 65)));
        assert!(!is_toggle_shortcut(&press(true, false, false, 65)));
        assert!(!is_toggle_shortcut(&press(true, false, true, 66)));
        assert!(!is_toggle_shortcut(&KeyPress::default()));
    }
}
