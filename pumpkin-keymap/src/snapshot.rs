use pumpkin_common::color::Hsv;

/// Host state captured at the start of a key event or LED refresh tick.
///
/// Both rule components take this as an explicit parameter so their output is
/// a function of one consistent view of the host, never of globals that may
/// change mid evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Snapshot {
    /// Active layer bitmask, bit 0 is the base layer.
    pub layers: u8,
    /// Modifiers currently held down.
    pub mods: u8,
    /// Modifiers armed by a one-shot key, not physically held.
    pub oneshot_mods: u8,
    /// Host caps-lock indicator.
    pub caps_lock: bool,
    /// The RGB matrix base color.
    pub ambient: Hsv,
    /// Brightness ceiling configured for the RGB matrix.
    pub max_brightness: u8,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            layers: 1,
            mods: 0,
            oneshot_mods: 0,
            caps_lock: false,
            ambient: Hsv {
                h: 170,
                s: 255,
                v: 128,
            },
            max_brightness: 200,
        }
    }
}

impl Snapshot {
    /// The topmost active layer. The base layer counts as always active.
    pub fn highest_layer(&self) -> u8 {
        (7 - (self.layers | 1).leading_zeros()) as u8
    }
}

#[cfg(test)]
#[path = "snapshot_test.rs"]
mod test;
