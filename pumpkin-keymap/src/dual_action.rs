//! Directory of the dual-role keys this layout places.
//!
//! A dual-role key sends its hold action while held past the tap timeout and
//! its tap code otherwise. Classification happens in the host key processor;
//! this directory only declares what each code means.

use pumpkin_common::keycodes::{key_range, keys, mod_mask};

use crate::layout;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum HoldAction {
    Modifiers(u8),
    Layer(u8),
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DualAction {
    pub hold: HoldAction,
    pub tap: u16,
}

pub const SHIFT_LEFT: u16 = key_range::DUAL_MIN;
pub const SHIFT_RIGHT: u16 = key_range::DUAL_MIN + 1;
pub const ALT_DOWN: u16 = key_range::DUAL_MIN + 2;
pub const ALT_UP: u16 = key_range::DUAL_MIN + 3;
/// Left ctrl on hold; the tap is intercepted to toggle the RGB matrix.
pub const CTRL_RGB: u16 = key_range::DUAL_MIN + 4;
pub const CTRL_MINUS: u16 = key_range::DUAL_MIN + 5;
/// Left ctrl on hold; the tap is intercepted to invert the layer lock.
pub const CTRL_INSERT: u16 = key_range::DUAL_MIN + 6;
pub const FN1_SPACE: u16 = key_range::DUAL_MIN + 7;
pub const FN2_SPACE: u16 = key_range::DUAL_MIN + 8;
pub const FN3_SPACE: u16 = key_range::DUAL_MIN + 9;

const DIRECTORY: [DualAction; 10] = [
    DualAction {
        hold: HoldAction::Modifiers(mod_mask::LEFT_SHIFT),
        tap: keys::LEFT,
    },
    DualAction {
        hold: HoldAction::Modifiers(mod_mask::SHIFT),
        tap: keys::RIGHT,
    },
    DualAction {
        hold: HoldAction::Modifiers(mod_mask::LEFT_ALT),
        tap: keys::DOWN,
    },
    DualAction {
        hold: HoldAction::Modifiers(mod_mask::ALT),
        tap: keys::UP,
    },
    DualAction {
        hold: HoldAction::Modifiers(mod_mask::LEFT_CTRL),
        tap: keys::NO,
    },
    DualAction {
        hold: HoldAction::Modifiers(mod_mask::RIGHT_CTRL),
        tap: keys::MINUS,
    },
    DualAction {
        hold: HoldAction::Modifiers(mod_mask::LEFT_CTRL),
        tap: keys::INSERT,
    },
    DualAction {
        hold: HoldAction::Layer(layout::FN1),
        tap: keys::SPACE,
    },
    DualAction {
        hold: HoldAction::Layer(layout::FN2),
        tap: keys::SPACE,
    },
    DualAction {
        hold: HoldAction::Layer(layout::FN3),
        tap: keys::SPACE,
    },
];

pub fn lookup(code: u16) -> Option<DualAction> {
    let index = code.checked_sub(key_range::DUAL_MIN)? as usize;
    DIRECTORY.get(index).copied()
}

#[cfg(test)]
#[path = "dual_action_test.rs"]
mod test;
