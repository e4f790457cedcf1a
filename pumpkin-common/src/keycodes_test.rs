use super::*;

#[test]
fn shifted_codes_keep_their_base() {
    assert_eq!(key_range::base_code(keys::EXCLAIM), key_range::SHIFTED);
    assert_eq!(keys::EXCLAIM & 0xff, keys::N1);
    assert_eq!(keys::PLUS & 0xff, keys::EQUAL);
}

#[test]
fn ranges_do_not_overlap() {
    let ranges = [
        (key_range::BASIC_MIN, key_range::MODIFIER_MAX),
        (key_range::CONSUMER_MIN, key_range::CONSUMER_MAX),
        (key_range::MOUSE_MIN, key_range::MOUSE_MAX),
        (key_range::SHIFTED_MIN, key_range::SHIFTED_MAX),
        (key_range::SPECIAL_MIN, key_range::SPECIAL_MAX),
        (key_range::DUAL_MIN, key_range::DUAL_MAX),
        (key_range::RGB_MIN, key_range::RGB_MAX),
        (key_range::FIRMWARE_MIN, key_range::FIRMWARE_MAX),
    ];
    for pair in ranges.windows(2) {
        assert!(pair[0].1 < pair[1].0, "{:?} overlaps {:?}", pair[0], pair[1]);
    }
}

#[test]
fn key_groups_are_contiguous() {
    assert_eq!(keys::F12 - keys::F1, 11);
    assert_eq!(keys::KP_0 - keys::KP_1, 9);
    assert_eq!(keys::UP - keys::RIGHT, 3);
    assert_eq!(key_range::RGB_SPEED_DOWN - key_range::RGB_TOGGLE, 10);
}

#[test]
fn modifier_masks() {
    assert_eq!(mod_mask::SHIFT, 0x22);
    assert_eq!(mod_mask::CTRL, 0x11);
    assert_eq!(mod_mask::ALT, 0x44);
    assert_eq!(mod_mask::GUI, 0x88);
    assert_eq!(
        mod_mask::CTRL | mod_mask::SHIFT | mod_mask::ALT | mod_mask::GUI,
        0xff
    );
}
