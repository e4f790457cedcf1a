use super::*;

#[test]
fn both_shifts_complete_the_caps_chord() {
    let [mut combo] = chord_table();
    assert_eq!(combo.output, keys::CAPS_LOCK);

    assert!(combo.update(dual_action::SHIFT_LEFT, true));
    assert!(combo.started());
    assert!(!combo.done());
    assert_eq!(combo.keys_pressed(), 1);

    assert!(combo.update(dual_action::SHIFT_RIGHT, true));
    assert!(combo.done());
    assert_eq!(combo.keys_pressed(), 2);
}

#[test]
fn a_stray_press_resets_a_partial_chord() {
    let [mut combo] = chord_table();

    combo.update(dual_action::SHIFT_LEFT, true);
    assert!(combo.started());

    assert!(!combo.update(keys::A, true));
    assert!(!combo.started());
}

#[test]
fn a_completed_chord_survives_other_presses() {
    let [mut combo] = chord_table();

    combo.update(dual_action::SHIFT_LEFT, true);
    combo.update(dual_action::SHIFT_RIGHT, true);
    combo.update(keys::A, true);
    assert!(combo.done());

    combo.reset();
    assert!(!combo.started());
}

#[test]
fn releases_are_ignored() {
    let [mut combo] = chord_table();

    assert!(!combo.update(dual_action::SHIFT_LEFT, false));
    assert!(!combo.started());
    assert!(!combo.update(keys::NO, true));
}
