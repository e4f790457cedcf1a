pub mod key_range {
    pub const BASIC_MIN: u16 = 0x4;
    pub const BASIC_MAX: u16 = 0xdf;
    pub const MODIFIER_MIN: u16 = 0xe0;
    pub const MODIFIER_MAX: u16 = 0xe7;

    pub const CONSUMER_MIN: u16 = 0x100;
    pub const CONSUMER_MAX: u16 = 0x3a0;

    pub const MOUSE_MIN: u16 = 0x400;
    pub const MOUSE_MAX: u16 = MOUSE_MIN + 0xff;

    /// Basic code sent with left-shift wrapped around it.
    pub const SHIFTED: u16 = 0x500;
    pub const SHIFTED_MIN: u16 = SHIFTED | BASIC_MIN;
    pub const SHIFTED_MAX: u16 = SHIFTED | BASIC_MAX;

    pub const SPECIAL_MIN: u16 = 0x600;
    /// Escape normally, grave while shift or gui is held. Resolved by the host
    /// key processor, not by this keymap.
    pub const GRAVE_ESCAPE: u16 = SPECIAL_MIN;
    pub const SPECIAL_MAX: u16 = SPECIAL_MIN + 0xf;

    /// Dual-role keys. The code is an index into the keymap's dual-action
    /// directory; hold and tap behavior live there.
    pub const DUAL_MIN: u16 = 0x700;
    pub const DUAL_MAX: u16 = DUAL_MIN + 0xff;

    pub const RGB_MIN: u16 = 0x800;
    pub const RGB_TOGGLE: u16 = RGB_MIN;
    pub const RGB_MODE_NEXT: u16 = RGB_MIN + 1;
    pub const RGB_MODE_PREV: u16 = RGB_MIN + 2;
    pub const RGB_HUE_UP: u16 = RGB_MIN + 3;
    pub const RGB_HUE_DOWN: u16 = RGB_MIN + 4;
    pub const RGB_SAT_UP: u16 = RGB_MIN + 5;
    pub const RGB_SAT_DOWN: u16 = RGB_MIN + 6;
    pub const RGB_VAL_UP: u16 = RGB_MIN + 7;
    pub const RGB_VAL_DOWN: u16 = RGB_MIN + 8;
    pub const RGB_SPEED_UP: u16 = RGB_MIN + 9;
    pub const RGB_SPEED_DOWN: u16 = RGB_MIN + 10;
    pub const RGB_MAX: u16 = RGB_SPEED_DOWN;

    pub const FIRMWARE_MIN: u16 = 0x1000;
    pub const FW_RESET_TO_USB_BOOT: u16 = FIRMWARE_MIN;
    pub const FW_CLEAR_SETTINGS: u16 = FIRMWARE_MIN + 1;
    pub const FIRMWARE_MAX: u16 = FIRMWARE_MIN + 0xff;

    pub const fn base_code(code: u16) -> u16 {
        code & 0xff00
    }

    pub const fn shifted(code: u16) -> u16 {
        code | SHIFTED
    }
}

/// HID usage ids for the keys this keymap places, plus the consumer-page
/// media keys offset into the consumer range.
pub mod keys {
    use super::key_range::{shifted, CONSUMER_MIN};

    pub const NO: u16 = 0x00;
    pub const TRANS: u16 = 0x01;

    pub const A: u16 = 0x04;
    pub const B: u16 = 0x05;
    pub const C: u16 = 0x06;
    pub const D: u16 = 0x07;
    pub const E: u16 = 0x08;
    pub const F: u16 = 0x09;
    pub const G: u16 = 0x0a;
    pub const H: u16 = 0x0b;
    pub const I: u16 = 0x0c;
    pub const J: u16 = 0x0d;
    pub const K: u16 = 0x0e;
    pub const L: u16 = 0x0f;
    pub const M: u16 = 0x10;
    pub const N: u16 = 0x11;
    pub const O: u16 = 0x12;
    pub const P: u16 = 0x13;
    pub const Q: u16 = 0x14;
    pub const R: u16 = 0x15;
    pub const S: u16 = 0x16;
    pub const T: u16 = 0x17;
    pub const U: u16 = 0x18;
    pub const V: u16 = 0x19;
    pub const W: u16 = 0x1a;
    pub const X: u16 = 0x1b;
    pub const Y: u16 = 0x1c;
    pub const Z: u16 = 0x1d;

    pub const N1: u16 = 0x1e;
    pub const N2: u16 = 0x1f;
    pub const N3: u16 = 0x20;
    pub const N4: u16 = 0x21;
    pub const N5: u16 = 0x22;
    pub const N6: u16 = 0x23;
    pub const N7: u16 = 0x24;
    pub const N8: u16 = 0x25;
    pub const N9: u16 = 0x26;
    pub const N0: u16 = 0x27;

    pub const ENTER: u16 = 0x28;
    pub const ESCAPE: u16 = 0x29;
    pub const BACKSPACE: u16 = 0x2a;
    pub const TAB: u16 = 0x2b;
    pub const SPACE: u16 = 0x2c;
    pub const MINUS: u16 = 0x2d;
    pub const EQUAL: u16 = 0x2e;
    pub const LEFT_BRACKET: u16 = 0x2f;
    pub const RIGHT_BRACKET: u16 = 0x30;
    pub const BACKSLASH: u16 = 0x31;
    pub const SEMICOLON: u16 = 0x33;
    pub const QUOTE: u16 = 0x34;
    pub const GRAVE: u16 = 0x35;
    pub const COMMA: u16 = 0x36;
    pub const DOT: u16 = 0x37;
    pub const SLASH: u16 = 0x38;
    pub const CAPS_LOCK: u16 = 0x39;

    pub const F1: u16 = 0x3a;
    pub const F2: u16 = 0x3b;
    pub const F3: u16 = 0x3c;
    pub const F4: u16 = 0x3d;
    pub const F5: u16 = 0x3e;
    pub const F6: u16 = 0x3f;
    pub const F7: u16 = 0x40;
    pub const F8: u16 = 0x41;
    pub const F9: u16 = 0x42;
    pub const F10: u16 = 0x43;
    pub const F11: u16 = 0x44;
    pub const F12: u16 = 0x45;

    pub const INSERT: u16 = 0x49;
    pub const HOME: u16 = 0x4a;
    pub const PAGE_UP: u16 = 0x4b;
    pub const DELETE: u16 = 0x4c;
    pub const END: u16 = 0x4d;
    pub const PAGE_DOWN: u16 = 0x4e;
    pub const RIGHT: u16 = 0x4f;
    pub const LEFT: u16 = 0x50;
    pub const DOWN: u16 = 0x51;
    pub const UP: u16 = 0x52;

    pub const KP_MINUS: u16 = 0x56;
    pub const KP_PLUS: u16 = 0x57;
    pub const KP_1: u16 = 0x59;
    pub const KP_2: u16 = 0x5a;
    pub const KP_3: u16 = 0x5b;
    pub const KP_4: u16 = 0x5c;
    pub const KP_5: u16 = 0x5d;
    pub const KP_6: u16 = 0x5e;
    pub const KP_7: u16 = 0x5f;
    pub const KP_8: u16 = 0x60;
    pub const KP_9: u16 = 0x61;
    pub const KP_0: u16 = 0x62;
    pub const KP_EQUAL: u16 = 0x67;

    pub const LEFT_CTRL: u16 = 0xe0;
    pub const LEFT_SHIFT: u16 = 0xe1;
    pub const LEFT_ALT: u16 = 0xe2;
    pub const LEFT_GUI: u16 = 0xe3;
    pub const RIGHT_CTRL: u16 = 0xe4;
    pub const RIGHT_SHIFT: u16 = 0xe5;
    pub const RIGHT_ALT: u16 = 0xe6;
    pub const RIGHT_GUI: u16 = 0xe7;

    pub const EXCLAIM: u16 = shifted(N1);
    pub const AT: u16 = shifted(N2);
    pub const HASH: u16 = shifted(N3);
    pub const DOLLAR: u16 = shifted(N4);
    pub const PERCENT: u16 = shifted(N5);
    pub const CARET: u16 = shifted(N6);
    pub const AMPERSAND: u16 = shifted(N7);
    pub const ASTERISK: u16 = shifted(N8);
    pub const LEFT_PAREN: u16 = shifted(N9);
    pub const RIGHT_PAREN: u16 = shifted(N0);
    pub const UNDERSCORE: u16 = shifted(MINUS);
    pub const PLUS: u16 = shifted(EQUAL);

    pub const MEDIA_NEXT: u16 = CONSUMER_MIN + 0xb5;
    pub const MEDIA_PREV: u16 = CONSUMER_MIN + 0xb6;
    pub const MEDIA_STOP: u16 = CONSUMER_MIN + 0xb7;
    pub const MEDIA_PLAY_PAUSE: u16 = CONSUMER_MIN + 0xcd;
    pub const MUTE: u16 = CONSUMER_MIN + 0xe2;
    pub const VOLUME_UP: u16 = CONSUMER_MIN + 0xe9;
    pub const VOLUME_DOWN: u16 = CONSUMER_MIN + 0xea;
}

/// Modifier bits as they appear in a HID report, left ctrl lowest.
pub mod mod_mask {
    pub const LEFT_CTRL: u8 = 0x01;
    pub const LEFT_SHIFT: u8 = 0x02;
    pub const LEFT_ALT: u8 = 0x04;
    pub const LEFT_GUI: u8 = 0x08;
    pub const RIGHT_CTRL: u8 = 0x10;
    pub const RIGHT_SHIFT: u8 = 0x20;
    pub const RIGHT_ALT: u8 = 0x40;
    pub const RIGHT_GUI: u8 = 0x80;

    pub const CTRL: u8 = LEFT_CTRL | RIGHT_CTRL;
    pub const SHIFT: u8 = LEFT_SHIFT | RIGHT_SHIFT;
    pub const ALT: u8 = LEFT_ALT | RIGHT_ALT;
    pub const GUI: u8 = LEFT_GUI | RIGHT_GUI;
}

#[cfg(test)]
#[path = "keycodes_test.rs"]
mod test;
