//! Compiled-in key table for the flaming pumpkin layout.
//!
//! The board is a 56-key split with four 6-column rows and four thumb keys
//! per half, wired as a 10x6 matrix with the left half on rows 0-4 and the
//! right half on rows 5-9. The host layer stack resolves transparency; this
//! table only answers what a single layer binds at a position.

use pumpkin_common::keycodes::key_range::{
    FW_CLEAR_SETTINGS, FW_RESET_TO_USB_BOOT, GRAVE_ESCAPE, RGB_HUE_DOWN, RGB_HUE_UP,
    RGB_MODE_NEXT, RGB_MODE_PREV, RGB_SAT_DOWN, RGB_SAT_UP, RGB_SPEED_DOWN, RGB_SPEED_UP,
    RGB_TOGGLE, RGB_VAL_DOWN, RGB_VAL_UP,
};
use pumpkin_common::keycodes::keys::*;

use crate::dual_action::{
    ALT_DOWN, ALT_UP, CTRL_INSERT, CTRL_MINUS, CTRL_RGB, FN1_SPACE, FN2_SPACE, FN3_SPACE,
    SHIFT_LEFT, SHIFT_RIGHT,
};

pub const ROW_COUNT: usize = 10;
pub const COL_COUNT: usize = 6;
pub const LAYER_COUNT: usize = 4;
pub const LED_COUNT: usize = 56;

pub const MAIN: u8 = 0;
pub const FN1: u8 = 1;
pub const FN2: u8 = 2;
pub const FN3: u8 = 3;

const __: u16 = TRANS;
const XX: u16 = NO;

#[rustfmt::skip]
static KEYMAP: [[[u16; COL_COUNT]; ROW_COUNT]; LAYER_COUNT] = [
    [
        // main, left then right half
        [GRAVE_ESCAPE, N1, N2, N3, N4, N5],
        [TAB,          Q,  W,  E,  R,  T],
        [SHIFT_LEFT,   A,  S,  D,  F,  G],
        [LEFT_GUI,     Z,  X,  C,  V,  B],
        [XX, XX, ALT_DOWN, LEFT_BRACKET, CTRL_RGB, FN1_SPACE],

        [N6, N7, N8, N9, N0,        BACKSPACE],
        [Y,  U,  I,  O,  P,         DELETE],
        [H,  J,  K,  L,  SEMICOLON, SHIFT_RIGHT],
        [N,  M,  COMMA, DOT, SLASH, ENTER],
        [XX, XX, ALT_UP, FN2_SPACE, CTRL_MINUS, QUOTE],
    ],
    [
        // fn1: symbols, navigation, numpad
        [__, EXCLAIM, AT,   HASH, DOLLAR, PERCENT],
        [__, __,      __,   UP,   __,     PAGE_UP],
        [__, __,      LEFT, DOWN, RIGHT,  PAGE_DOWN],
        [__, __,      __,   __,   __,     __],
        [XX, XX, __, __, CTRL_INSERT, __],

        [CARET,    AMPERSAND, ASTERISK, LEFT_PAREN, RIGHT_PAREN, __],
        [KP_MINUS, KP_7,      KP_8,     KP_9,       __,          __],
        [KP_PLUS,  KP_4,      KP_5,     KP_6,       __,          __],
        [KP_EQUAL, KP_1,      KP_2,     KP_3,       __,          __],
        [XX, XX, __, FN3_SPACE, __, KP_0],
    ],
    [
        // fn2: function row, media
        [F1, F2,         F3,         F4,          F5,        F6],
        [__, __,         __,         HASH,        DOLLAR,    EXCLAIM],
        [__, MEDIA_PREV, MEDIA_NEXT, VOLUME_UP,   PAGE_UP,   UNDERSCORE],
        [MUTE, MEDIA_STOP, MEDIA_PLAY_PAUSE, VOLUME_DOWN, PAGE_DOWN, MINUS],
        [XX, XX, __, __, CTRL_INSERT, FN3_SPACE],

        [F7,    F8,        F9,       F10,        F11,         F12],
        [AT,    AMPERSAND, ASTERISK, LEFT_PAREN, RIGHT_PAREN, __],
        [EQUAL, HOME,      __,       __,         __,          __],
        [PLUS,  END,       __,       __,         BACKSLASH,   __],
        [XX, XX, __, __, __, __],
    ],
    [
        // fn3: rgb matrix control, firmware
        [__, __, __, __, __, __],
        [__, __, __, __, __, __],
        [__, __, __, __, __, __],
        [__, __, __, __, __, RGB_TOGGLE],
        [XX, XX, __, __, CTRL_INSERT, __],

        [__, __, __, __, __, FW_RESET_TO_USB_BOOT],
        [__, __, __, __, __, FW_CLEAR_SETTINGS],
        [RGB_MODE_NEXT, RGB_HUE_UP,   RGB_SAT_UP,   RGB_VAL_UP,   RGB_SPEED_UP,   __],
        [RGB_MODE_PREV, RGB_HUE_DOWN, RGB_SAT_DOWN, RGB_VAL_DOWN, RGB_SPEED_DOWN, __],
        [XX, XX, __, __, __, __],
    ],
];

const NO_LED: u8 = 0xff;

/// Matrix position to LED index, row-major per half. The two outer thumb
/// columns have no switch and no LED.
#[rustfmt::skip]
static LED_MAP: [[u8; COL_COUNT]; ROW_COUNT] = [
    [ 0,  1,  2,  3,  4,  5],
    [ 6,  7,  8,  9, 10, 11],
    [12, 13, 14, 15, 16, 17],
    [18, 19, 20, 21, 22, 23],
    [NO_LED, NO_LED, 24, 25, 26, 27],
    [28, 29, 30, 31, 32, 33],
    [34, 35, 36, 37, 38, 39],
    [40, 41, 42, 43, 44, 45],
    [46, 47, 48, 49, 50, 51],
    [NO_LED, NO_LED, 52, 53, 54, 55],
];

/// The code bound at a position on one layer. Out-of-range lookups log an
/// error and answer the null code.
pub fn keycode_at(layer: u8, row: usize, column: usize) -> u16 {
    match KEYMAP
        .get(layer as usize)
        .and_then(|l| l.get(row))
        .and_then(|r| r.get(column))
    {
        Some(&code) => code,
        None => {
            crate::error!("no key at layer {} position {}:{}", layer, row, column);
            NO
        }
    }
}

pub fn led_index(row: usize, column: usize) -> Option<u8> {
    match LED_MAP.get(row).and_then(|r| r.get(column)) {
        Some(&NO_LED) | None => None,
        Some(&index) => Some(index),
    }
}

#[cfg(test)]
#[path = "layout_test.rs"]
mod test;
