//! Chorded key combinations, consumed by the host chord detector.

use heapless::Vec;
use pumpkin_common::keycodes::keys;

use crate::dual_action;

pub const COMBO_MAX_LENGTH: usize = 4;

/// One chord: member codes pressed together inside the detection window
/// produce `output` instead of their own actions.
#[derive(Clone)]
pub struct Combo {
    members: Vec<u16, COMBO_MAX_LENGTH>,
    pub output: u16,
    state: u8,
}

impl Combo {
    pub fn new<I: IntoIterator<Item = u16>>(members: I, output: u16) -> Self {
        Self {
            members: Vec::from_iter(members),
            output,
            state: 0,
        }
    }

    /// Track one key transition. Answers true when the code is a member of
    /// this chord. A non-member press resets a partially gathered chord.
    pub fn update(&mut self, code: u16, pressed: bool) -> bool {
        if !pressed || code == keys::NO {
            return false;
        }
        let index = self.members.iter().position(|&m| m == code);
        if let Some(i) = index {
            self.state |= 1 << i;
        } else if !self.done() {
            self.reset();
        }
        index.is_some()
    }

    pub fn done(&self) -> bool {
        self.started() && self.keys_pressed() == self.members.len() as u32
    }

    pub fn started(&self) -> bool {
        self.state != 0
    }

    pub fn keys_pressed(&self) -> u32 {
        self.state.count_ones()
    }

    pub fn reset(&mut self) {
        self.state = 0;
    }
}

/// Both home-row shift keys together give caps lock.
pub fn chord_table() -> [Combo; 1] {
    [Combo::new(
        [dual_action::SHIFT_LEFT, dual_action::SHIFT_RIGHT],
        keys::CAPS_LOCK,
    )]
}

#[cfg(test)]
#[path = "combos_test.rs"]
mod test;
