use pumpkin_common::keycodes::key_range;

use crate::dual_action;

use super::*;

extern crate std;
use std::vec::Vec;

#[test]
fn anchor_positions() {
    assert_eq!(keycode_at(MAIN, 0, 0), GRAVE_ESCAPE);
    assert_eq!(keycode_at(MAIN, 2, 0), SHIFT_LEFT);
    assert_eq!(keycode_at(MAIN, 7, 5), SHIFT_RIGHT);
    assert_eq!(keycode_at(MAIN, 4, 3), LEFT_BRACKET);
    assert_eq!(keycode_at(MAIN, 4, 4), CTRL_RGB);
    assert_eq!(keycode_at(MAIN, 9, 2), ALT_UP);

    assert_eq!(keycode_at(FN1, 6, 0), KP_MINUS);
    assert_eq!(keycode_at(FN1, 7, 0), KP_PLUS);
    assert_eq!(keycode_at(FN1, 8, 0), KP_EQUAL);
    assert_eq!(keycode_at(FN1, 9, 5), KP_0);

    assert_eq!(keycode_at(FN2, 0, 0), F1);
    assert_eq!(keycode_at(FN2, 5, 5), F12);

    assert_eq!(keycode_at(FN3, 5, 5), FW_RESET_TO_USB_BOOT);
    assert_eq!(keycode_at(FN3, 6, 5), FW_CLEAR_SETTINGS);
    assert_eq!(keycode_at(FN3, 3, 5), RGB_TOGGLE);
}

#[test]
fn lock_key_is_reachable_from_every_fn_layer() {
    for layer in [FN1, FN2, FN3] {
        assert_eq!(keycode_at(layer, 4, 4), CTRL_INSERT);
    }
}

#[test]
fn transparency_and_dead_positions() {
    assert_eq!(keycode_at(FN1, 1, 0), TRANS);
    assert_eq!(keycode_at(FN3, 0, 0), TRANS);
    for layer in 0..LAYER_COUNT as u8 {
        for row in [4usize, 9] {
            assert_eq!(keycode_at(layer, row, 0), NO);
            assert_eq!(keycode_at(layer, row, 1), NO);
        }
    }
}

#[test]
fn every_code_is_recognizable() {
    fn recognized(code: u16) -> bool {
        matches!(
            code,
            NO | TRANS
                | key_range::BASIC_MIN..=key_range::MODIFIER_MAX
                | key_range::CONSUMER_MIN..=key_range::CONSUMER_MAX
                | key_range::SHIFTED_MIN..=key_range::SHIFTED_MAX
                | key_range::GRAVE_ESCAPE
                | key_range::RGB_MIN..=key_range::RGB_MAX
                | key_range::FW_RESET_TO_USB_BOOT
                | key_range::FW_CLEAR_SETTINGS
        ) || dual_action::lookup(code).is_some()
    }

    for layer in 0..LAYER_COUNT as u8 {
        for row in 0..ROW_COUNT {
            for column in 0..COL_COUNT {
                let code = keycode_at(layer, row, column);
                assert!(
                    recognized(code),
                    "unknown code {:#x} at layer {} position {}:{}",
                    code,
                    layer,
                    row,
                    column
                );
            }
        }
    }
}

#[test]
fn led_map_covers_every_switch_once() {
    let mut indices: Vec<u8> = (0..ROW_COUNT)
        .flat_map(|row| (0..COL_COUNT).filter_map(move |column| led_index(row, column)))
        .collect();
    indices.sort_unstable();
    assert_eq!(indices.len(), LED_COUNT);
    indices.dedup();
    assert_eq!(indices.len(), LED_COUNT);
    assert_eq!(indices[0], 0);
    assert_eq!(indices[LED_COUNT - 1], LED_COUNT as u8 - 1);
}

#[test]
fn outer_thumb_columns_have_no_led() {
    assert_eq!(led_index(4, 0), None);
    assert_eq!(led_index(4, 1), None);
    assert_eq!(led_index(9, 0), None);
    assert_eq!(led_index(9, 1), None);
    assert_eq!(led_index(10, 0), None);
}
